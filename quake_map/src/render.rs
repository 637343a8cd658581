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

/// the map rendering pipeline: base image, graticule, event markers and decorations drawn in this
/// order onto an explicit `MapSurface`

use std::fmt;
use image::RgbaImage;
use tracing::{debug, info};
use crate::config::MapConfig;
use crate::decorations::{draw_graticule, draw_legend, draw_north_arrow, draw_scale_bar, draw_title};
use crate::errors::{Result, QuakeMapError};
use crate::events::QuakeEvent;
use crate::projection::{MapFrame, MercatorProjection};
use crate::surface::{with_alpha, MapSurface, MarkerStyle, POINTS_PER_INCH};
use crate::week::{classify, WeekBucket};

/// text line height as a multiple of the font size
const LINE_HEIGHT: f64 = 1.2;

/// canvas dimensions and the position of the map frame on it. The canvas is tight around the
/// map and its title, with `pad_in` on all sides
#[derive(Debug,Clone)]
pub struct FigureLayout {
    pub px_per_pt: f64,
    pub width: u32,
    pub height: u32,
    pub frame: MapFrame,
}

impl FigureLayout {
    pub fn new (config: &MapConfig)->Self {
        let fig = &config.figure;
        let px_per_pt = fig.dpi / POINTS_PER_INCH;
        let pad = fig.pad_in * fig.dpi;

        let title_height = if config.title.text.is_empty() {
            0.0
        } else {
            (config.title.font_size_pt * LINE_HEIGHT + config.title.pad_pt) * px_per_pt
        };

        let projection = MercatorProjection::new( config.region.bounds, config.region.lon_0);
        let map_width = (fig.map_width_in * fig.dpi).round().max(1.0) as u32;
        let frame = MapFrame::new( projection, pad as f32, (pad + title_height) as f32, map_width);

        let width = (frame.right() as f64 + pad).ceil() as u32;
        let height = (frame.bottom() as f64 + pad).ceil() as u32;

        FigureLayout { px_per_pt, width, height, frame }
    }
}

/// number of drawn markers per week bucket
#[derive(Debug,Clone,Default,PartialEq)]
pub struct RenderStats {
    pub counts: [usize;4],
    pub clipped: usize, // events outside of the map frame
}

impl RenderStats {
    pub fn add (&mut self, bucket: WeekBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn count (&self, bucket: WeekBucket)->usize {
        self.counts[bucket.index()]
    }

    pub fn total (&self)->usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for RenderStats {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        for bucket in WeekBucket::ALL {
            write!( f, "{}: {}, ", bucket, self.count(bucket))?;
        }
        write!( f, "clipped: {}", self.clipped)
    }
}

/// classify and draw events in order. A row with an invalid date aborts with the line number it
/// was read from (events are read contiguously after the header line)
pub fn draw_events<S: MapSurface> (surface: &mut S, frame: &MapFrame, events: &[QuakeEvent], marker_alpha: f32, px_per_pt: f64)->Result<RenderStats> {
    let mut stats = RenderStats::default();

    for (i, event) in events.iter().enumerate() {
        let classification = classify( event).map_err(|e| QuakeMapError::MalformedRow( i+2, e))?;
        let bucket = classification.bucket;

        if !frame.contains( event.lon, event.lat) {
            debug!("event outside of map: {:?}", event);
            stats.clipped += 1;
            continue
        }

        let style = MarkerStyle {
            color: with_alpha( bucket.marker_color(), marker_alpha),
            diameter: (bucket.marker_size() * px_per_pt) as f32
        };
        debug!("{} ({:+.1} days) at {:.4},{:.4}", bucket, classification.days_since_anchor, event.lon, event.lat);
        surface.draw_marker( frame.to_px( event.lon, event.lat), &style)?;
        stats.add( bucket);
    }

    Ok(stats)
}

/// draw the complete map. `basemap` is the base imagery already re-projected to the frame
pub fn render_map<S: MapSurface> (surface: &mut S, layout: &FigureLayout, basemap: &RgbaImage, events: &[QuakeEvent], config: &MapConfig)->Result<RenderStats> {
    let frame = &layout.frame;
    let ppp = layout.px_per_pt;

    surface.draw_image( frame.left().round() as i64, frame.top().round() as i64, basemap)?;
    draw_graticule( surface, frame, &config.graticule, ppp)?;

    let stats = draw_events( surface, frame, events, config.marker_alpha, ppp)?;

    draw_scale_bar( surface, frame, &config.scale_bar, ppp)?;
    draw_north_arrow( surface, frame, &config.north_arrow, ppp)?;
    draw_legend( surface, frame, &config.legend, ppp)?;
    draw_title( surface, frame, &config.title, ppp)?;

    info!("rendered {} events ({})", stats.total(), stats);
    Ok(stats)
}
