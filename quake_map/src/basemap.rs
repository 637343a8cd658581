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

/// base imagery (e.g. NASA Blue Marble) drawn beneath the map content.
/// Sources are plate carrée rasters with known geographic bounds that get re-projected into the
/// Mercator map frame

use std::path::Path;
use image::{Rgba, RgbaImage};
use tracing::info;
use quake_common::BoundingBox;
use crate::config::BaseImageConfig;
use crate::errors::{Result, QuakeMapError};
use crate::projection::MapFrame;

const TRANSPARENT: Rgba<u8> = Rgba([0,0,0,0]);

pub struct BaseImagery {
    image: RgbaImage,
    bounds: BoundingBox<f64>,
}

impl BaseImagery {
    pub fn new (image: RgbaImage, bounds: BoundingBox<f64>)->Self {
        BaseImagery { image, bounds }
    }

    /// a missing or undecodable image is an error - we don't fall back to an empty map
    pub fn load (config: &BaseImageConfig)->Result<Self> {
        let path = Path::new( &config.path);
        if !path.is_file() {
            return Err( QuakeMapError::ResourceNotFound( format!("base image {:?}", path)))
        }
        let image = image::open( path)?.to_rgba8();
        info!("loaded base image {:?} ({}x{})", path, image.width(), image.height());

        Ok( BaseImagery::new( image, config.bounds) )
    }

    /// bilinear sample at given geographic position. Positions outside of our bounds are transparent
    pub fn sample (&self, lon: f64, lat: f64)->Rgba<u8> {
        let b = &self.bounds;
        if !b.contains( lon, lat) { return TRANSPARENT }

        let (w,h) = self.image.dimensions();
        if w == 0 || h == 0 { return TRANSPARENT }

        // pixel centers are at half pixel offsets
        let fx = ((lon - b.west) / b.width() * w as f64 - 0.5).clamp( 0.0, (w-1) as f64);
        let fy = ((b.north - lat) / b.height() * h as f64 - 0.5).clamp( 0.0, (h-1) as f64);

        let x0 = fx.floor() as u32;
        let y0 = fy.floor() as u32;
        let x1 = (x0 + 1).min( w-1);
        let y1 = (y0 + 1).min( h-1);
        let tx = fx - x0 as f64;
        let ty = fy - y0 as f64;

        let p00 = self.image.get_pixel( x0, y0).0;
        let p10 = self.image.get_pixel( x1, y0).0;
        let p01 = self.image.get_pixel( x0, y1).0;
        let p11 = self.image.get_pixel( x1, y1).0;

        let mut c = [0u8;4];
        for i in 0..4 {
            let top = p00[i] as f64 * (1.0 - tx) + p10[i] as f64 * tx;
            let bottom = p01[i] as f64 * (1.0 - tx) + p11[i] as f64 * tx;
            c[i] = (top * (1.0 - ty) + bottom * ty).round().clamp( 0.0, 255.0) as u8;
        }
        Rgba(c)
    }

    /// render the part of the base image that is visible in `frame` as a frame sized image.
    /// Mercator longitudes only depend on columns and latitudes only on rows
    pub fn reproject (&self, frame: &MapFrame)->RgbaImage {
        let (w,h) = (frame.width(), frame.height());
        let left = frame.left() as f64;
        let top = frame.top() as f64;
        let center_y = top + h as f64 / 2.0;
        let center_x = left + w as f64 / 2.0;

        let lons: Vec<f64> = (0..w).map(|x| frame.px_to_lon_lat( left + x as f64 + 0.5, center_y).0).collect();
        let lats: Vec<f64> = (0..h).map(|y| frame.px_to_lon_lat( center_x, top + y as f64 + 0.5).1).collect();

        RgbaImage::from_fn( w, h, |x,y| self.sample( lons[x as usize], lats[y as usize]))
    }
}
