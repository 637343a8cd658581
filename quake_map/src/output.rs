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

/// writing and showing rendered maps

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tracing::info;
use quake_common::fs::{check_writable_dir, parent_dir};
use crate::errors::Result;
use crate::surface::WHITE;

pub const METERS_PER_INCH: f64 = 0.0254;

/// composite onto an opaque background color
pub fn flatten (img: &RgbaImage, background: Rgba<u8>)->RgbImage {
    let [br,bg,bb,_] = background.0;

    RgbImage::from_fn( img.width(), img.height(), |x,y| {
        let [r,g,b,a] = img.get_pixel(x,y).0;
        let a = a as f32 / 255.0;
        let mix = |c: u8, bc: u8| (c as f32 * a + bc as f32 * (1.0 - a)).round() as u8;
        Rgb([ mix(r,br), mix(g,bg), mix(b,bb) ])
    })
}

#[inline]
pub fn dpi_to_pixels_per_meter (dpi: f64)->u32 {
    (dpi / METERS_PER_INCH).round() as u32
}

/// save as opaque 8bit RGB PNG with the resolution stored in the pHYs chunk.
/// The directory of `path` has to exist
pub fn save_png (img: &RgbaImage, path: impl AsRef<Path>, dpi: f64)->Result<()> {
    let path = path.as_ref();
    check_writable_dir( parent_dir( path))?;

    let rgb = flatten( img, WHITE);
    let writer = BufWriter::new( File::create( path)?);

    let mut encoder = png::Encoder::new( writer, rgb.width(), rgb.height());
    encoder.set_color( png::ColorType::Rgb);
    encoder.set_depth( png::BitDepth::Eight);
    let ppm = dpi_to_pixels_per_meter( dpi);
    encoder.set_pixel_dims( Some( png::PixelDimensions { xppu: ppm, yppu: ppm, unit: png::Unit::Meter }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data( rgb.as_raw())?;
    writer.finish()?;

    info!("saved {}x{} map to {:?} ({} dpi)", rgb.width(), rgb.height(), path, dpi);
    Ok(())
}

/// open the saved map in the platform viewer. This does not wait for the viewer to close
pub fn show (path: impl AsRef<Path>)->Result<()> {
    let path = path.as_ref();
    info!("showing {:?}", path);
    open::that( path)?;
    Ok(())
}
