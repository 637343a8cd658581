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
#![allow(unused)]

use std::fs::File;
use image::{Rgb, Rgba, RgbaImage};
use quake_map::output::*;

#[test]
fn test_flatten() {
    let mut img = RgbaImage::from_pixel( 2, 1, Rgba([255,0,0,128]));
    img.put_pixel( 1, 0, Rgba([0,0,255,0]));

    let rgb = flatten( &img, Rgba([255,255,255,255]));
    assert_eq!( *rgb.get_pixel(0,0), Rgb([255,127,127]));
    assert_eq!( *rgb.get_pixel(1,0), Rgb([255,255,255])); // fully transparent
}

#[test]
fn test_dpi_conversion() {
    assert_eq!( dpi_to_pixels_per_meter( 300.0), 11811);
    assert_eq!( dpi_to_pixels_per_meter( 72.0), 2835);
}

#[test]
fn test_save_png() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("earthquake_map.png");

    let mut img = RgbaImage::from_pixel( 4, 3, Rgba([0,128,0,255]));
    img.put_pixel( 0, 0, Rgba([255,0,0,128]));
    save_png( &img, &path, 300.0).unwrap();

    let decoder = png::Decoder::new( File::open( &path).unwrap());
    let mut reader = decoder.read_info().unwrap();

    let info = reader.info();
    assert_eq!( (info.width, info.height), (4,3));
    assert_eq!( info.color_type, png::ColorType::Rgb);
    assert_eq!( info.bit_depth, png::BitDepth::Eight);

    let dims = info.pixel_dims.unwrap();
    assert_eq!( (dims.xppu, dims.yppu), (11811, 11811));
    assert!( matches!( dims.unit, png::Unit::Meter));

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame( &mut buf).unwrap();
    let data = &buf[..frame.buffer_size()];
    assert_eq!( &data[0..3], &[255,127,127]); // flattened onto white
    assert_eq!( &data[3..6], &[0,128,0]);
}

#[test]
fn test_save_png_missing_dir() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("no_such_dir").join("earthquake_map.png");

    let img = RgbaImage::from_pixel( 2, 2, Rgba([0,0,0,255]));
    assert!( save_png( &img, &path, 300.0).is_err());
    assert!( !path.exists());
}
