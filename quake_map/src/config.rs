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

/// layout and resource configuration of the earthquake map.
/// The `Default` values reproduce the January 2015 Indonesia map. Config files are RON and only need
/// to specify the fields that differ from the defaults, e.g.
/// ```text
/// MapConfig(
///     title: ( text: "Earthquake Events - February 2015" ),
///     figure: ( dpi: 150.0 ),
/// )
/// ```
/// Week thresholds, bucket colors/sizes and the anchor date are not part of the config

use std::path::Path;
use serde::Deserialize;
use tracing::debug;
use quake_common::{BoundingBox, fs::filepath_contents_as_string};
use crate::errors::{Result, QuakeMapError};

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct MapConfig {
    pub region: RegionConfig,
    pub figure: FigureConfig,
    pub base_image: BaseImageConfig,
    pub font_path: String,
    pub graticule: GraticuleConfig,
    pub marker_alpha: f32,
    pub scale_bar: ScaleBarConfig,
    pub north_arrow: NorthArrowConfig,
    pub legend: LegendConfig,
    pub title: TitleConfig,
}

impl Default for MapConfig {
    fn default()->Self {
        MapConfig {
            region: RegionConfig::default(),
            figure: FigureConfig::default(),
            base_image: BaseImageConfig::default(),
            font_path: "data/quake_map/DejaVuSans.ttf".to_string(),
            graticule: GraticuleConfig::default(),
            marker_alpha: 0.5,
            scale_bar: ScaleBarConfig::default(),
            north_arrow: NorthArrowConfig::default(),
            legend: LegendConfig::default(),
            title: TitleConfig::default(),
        }
    }
}

impl MapConfig {
    /// reject values we can't lay out or project
    pub fn validate (&self)->Result<()> {
        let bbox = &self.region.bounds;
        if bbox.west >= bbox.east || bbox.south >= bbox.north {
            return Err( illegal_arg("region bounds are empty or inverted"))
        }
        if bbox.south <= -85.0 || bbox.north >= 85.0 {
            return Err( illegal_arg("region latitudes outside of Mercator range"))
        }
        let bbox = &self.base_image.bounds;
        if bbox.west >= bbox.east || bbox.south >= bbox.north {
            return Err( illegal_arg("base image bounds are empty or inverted"))
        }
        if self.figure.dpi <= 0.0 || self.figure.map_width_in <= 0.0 || self.figure.pad_in < 0.0 {
            return Err( illegal_arg("figure dimensions have to be positive"))
        }
        if !(0.0..=1.0).contains( &self.marker_alpha) || !(0.0..=1.0).contains( &self.legend.frame_alpha) {
            return Err( illegal_arg("alpha values have to be within [0,1]"))
        }
        if self.graticule.spacing_deg <= 0.0 {
            return Err( illegal_arg("graticule spacing has to be positive"))
        }
        Ok(())
    }
}

fn illegal_arg (msg: &str)->QuakeMapError {
    QuakeMapError::IllegalArgument( msg.to_string())
}

/// the geographic extent of the map and the center of the projection (degrees)
#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct RegionConfig {
    pub bounds: BoundingBox<f64>,
    pub lon_0: f64,
    pub lat_0: f64, // not used by Mercator, kept to document the region center
}

impl Default for RegionConfig {
    fn default()->Self {
        RegionConfig {
            bounds: BoundingBox::new( 93.1304, -20.9248, 142.3492, 14.3024),
            lon_0: 113.379,
            lat_0: -0.659,
        }
    }
}

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct FigureConfig {
    pub map_width_in: f64,
    pub dpi: f64,
    pub pad_in: f64,
}

impl Default for FigureConfig {
    fn default()->Self {
        FigureConfig { map_width_in: 4.96, dpi: 300.0, pad_in: 0.1 }
    }
}

/// a plate carrée raster that covers `bounds`, e.g. the NASA Blue Marble image for the whole globe
#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct BaseImageConfig {
    pub path: String,
    pub bounds: BoundingBox<f64>,
}

impl Default for BaseImageConfig {
    fn default()->Self {
        BaseImageConfig {
            path: "data/quake_map/bluemarble.jpg".to_string(),
            bounds: BoundingBox::new( -180.0, -90.0, 180.0, 90.0),
        }
    }
}

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct GraticuleConfig {
    pub spacing_deg: f64,
    pub line_width_pt: f64,
    pub color: String,
    pub dash_pt: (f64,f64),
}

impl Default for GraticuleConfig {
    fn default()->Self {
        GraticuleConfig { spacing_deg: 15.0, line_width_pt: 0.5, color: "808080".to_string(), dash_pt: (2.0, 2.0) }
    }
}

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct ScaleBarConfig {
    pub lon: f64,
    pub lat: f64,
    pub length_km: f64,
    pub font_size_pt: f64,
    pub label_pad_pt: f64, // gap between tick tops and distance labels
    pub tick_height: f64, // fraction of map height
    pub line_width_pt: f64,
    pub color: String,
}

impl Default for ScaleBarConfig {
    fn default()->Self {
        ScaleBarConfig {
            lon: 135.0,
            lat: -18.0,
            length_km: 1000.0,
            font_size_pt: 9.0,
            label_pad_pt: 2.0,
            tick_height: 0.02,
            line_width_pt: 1.5,
            color: "000000".to_string()
        }
    }
}

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct NorthArrowConfig {
    pub lon: f64,
    pub lat: f64,
    pub length_deg: f64,
    pub head_width_m: f64,
    pub head_length_m: f64,
    pub line_width_pt: f64,
    pub label: String,
    pub font_size_pt: f64,
    pub color: String,
}

impl Default for NorthArrowConfig {
    fn default()->Self {
        NorthArrowConfig {
            lon: 96.0,
            lat: 10.0,
            length_deg: 2.0,
            head_width_m: 75000.0,
            head_length_m: 75000.0,
            line_width_pt: 1.0,
            label: "N".to_string(),
            font_size_pt: 10.0,
            color: "000000".to_string()
        }
    }
}

/// legend box metrics. All `_em` values are multiples of the legend font size
#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct LegendConfig {
    pub font_size_pt: f64,
    pub border_pad_em: f64,
    pub border_axes_pad_em: f64,
    pub handle_length_em: f64,
    pub handle_text_pad_em: f64,
    pub label_spacing_em: f64,
    pub frame_color: String,
    pub frame_alpha: f32,
    pub edge_color: String,
    pub text_color: String,
}

impl Default for LegendConfig {
    fn default()->Self {
        LegendConfig {
            font_size_pt: 8.0,
            border_pad_em: 0.5,
            border_axes_pad_em: 0.5,
            handle_length_em: 0.5,
            handle_text_pad_em: 1.0,
            label_spacing_em: 0.5,
            frame_color: "ffffff".to_string(),
            frame_alpha: 0.8,
            edge_color: "cccccc".to_string(),
            text_color: "000000".to_string(),
        }
    }
}

#[derive(Deserialize,Debug,Clone)]
#[serde(default)]
pub struct TitleConfig {
    pub text: String,
    pub font_size_pt: f64,
    pub pad_pt: f64,
    pub color: String,
}

impl Default for TitleConfig {
    fn default()->Self {
        TitleConfig {
            text: "Earthquake Event in Indonesia - January 2015".to_string(),
            font_size_pt: 12.0,
            pad_pt: 6.0,
            color: "000000".to_string(),
        }
    }
}

pub fn parse_config (input: &str)->Result<MapConfig> {
    let config: MapConfig = ron::from_str( input)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config (path: impl AsRef<Path>)->Result<MapConfig> {
    let path = path.as_ref();
    debug!("loading map config from {:?}", path);
    let input = filepath_contents_as_string( &path)?;
    parse_config( &input)
}
