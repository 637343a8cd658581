/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// plotting earthquake events on a Mercator base map, colored by the week they occurred in.
///
/// The pipeline is: initialize the map frame and base imagery, load events, classify and draw each
/// event in file order, add scale bar, north arrow, legend and title, then save (and show) the PNG

use std::path::Path;
use image::RgbaImage;
use tracing::info;

mod errors;
pub use errors::{Result, QuakeMapError};

pub mod config;
pub use config::{MapConfig, load_config};

pub mod events;
pub use events::{QuakeEvent, RowError, load_events, read_events};

pub mod week;
pub use week::{WeekBucket, Classification, classify, ANCHOR_DATE};

pub mod projection;
pub mod surface;
pub mod basemap;
pub mod decorations;

pub mod render;
pub use render::{FigureLayout, RenderStats, render_map};

pub mod output;

use basemap::BaseImagery;
use surface::{RasterSurface, load_font};

/// render the map for the events in `events_path` into an image
pub fn create_quake_map (events_path: impl AsRef<Path>, config: &MapConfig)->Result<(RgbaImage,RenderStats)> {
    config.validate()?;

    let layout = FigureLayout::new( config);
    info!("canvas {}x{}, map frame {}x{}", layout.width, layout.height, layout.frame.width(), layout.frame.height());

    let basemap = BaseImagery::load( &config.base_image)?.reproject( &layout.frame);
    let font = load_font( &config.font_path)?;

    let events = load_events( events_path)?;

    let mut surface = RasterSurface::new( layout.width, layout.height).with_font( font);
    let stats = render_map( &mut surface, &layout, &basemap, &events, config)?;

    Ok( (surface.into_image(), stats) )
}
