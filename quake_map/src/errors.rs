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

use quake_common::define_error;
use crate::events::RowError;

pub type Result<T> = std::result::Result<T, QuakeMapError>;

define_error!{ pub QuakeMapError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    ImageError(#[from] image::ImageError) : "image error: {0}",
    CsvError(#[from] csv::Error) : "csv error: {0}",
    PngError(#[from] png::EncodingError) : "PNG encoding error: {0}",
    ConfigError(#[from] ron::error::SpannedError) : "config error: {0}",
    InvalidFont(#[from] ab_glyph::InvalidFont) : "invalid font: {0}",
    MalformedRow(usize, RowError) : "malformed row in line {0}: {1}",
    ResourceNotFound(String) : "resource not found: {0}",
    IllegalArgument(String) : "illegal argument: {0}"
}

