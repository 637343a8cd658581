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

use std::io::Write;
use quake_map::{MapConfig, QuakeMapError, load_config};
use quake_map::config::parse_config;

#[test]
fn test_defaults() {
    let config = MapConfig::default();
    config.validate().unwrap();

    assert_eq!( config.region.bounds.west, 93.1304);
    assert_eq!( config.region.bounds.north, 14.3024);
    assert_eq!( config.figure.dpi, 300.0);
    assert_eq!( config.marker_alpha, 0.5);
    assert_eq!( config.title.text, "Earthquake Event in Indonesia - January 2015");
}

#[test]
fn test_partial_override() {
    let input = r#"
        MapConfig(
            title: ( text: "Earthquake Events - February 2015" ),
            figure: ( dpi: 150.0 ),
        )
    "#;
    let config = parse_config( input).unwrap();
    println!("{:#?}", config.title);

    assert_eq!( config.title.text, "Earthquake Events - February 2015");
    assert_eq!( config.title.font_size_pt, 12.0); // default
    assert_eq!( config.figure.dpi, 150.0);
    assert_eq!( config.figure.map_width_in, 4.96); // default
    assert_eq!( config.scale_bar.length_km, 1000.0);
}

#[test]
fn test_region_override() {
    let input = r#"(
        region: (
            bounds: ( west: 120.0, south: 30.0, east: 146.0, north: 46.0 ),
            lon_0: 133.0,
        ),
    )"#;
    let config = parse_config( input).unwrap();
    assert_eq!( config.region.bounds.east, 146.0);
    assert_eq!( config.region.lon_0, 133.0);
    assert_eq!( config.region.lat_0, -0.659); // default
}

#[test]
fn test_invalid_config() {
    let res = parse_config( "( figure: ( dpi: 0.0 ) )");
    assert!( matches!( res, Err(QuakeMapError::IllegalArgument(_))));

    let res = parse_config( "( marker_alpha: 1.5 )");
    assert!( matches!( res, Err(QuakeMapError::IllegalArgument(_))));

    let res = parse_config( "( region: ( bounds: ( west: 100.0, south: -10.0, east: 90.0, north: 10.0 ) ) )");
    assert!( matches!( res, Err(QuakeMapError::IllegalArgument(_))));

    let res = parse_config( "( region: ( bounds: ( west: 0.0, south: -10.0, east: 90.0, north: 88.0 ) ) )");
    assert!( matches!( res, Err(QuakeMapError::IllegalArgument(_))));

    let res = parse_config( "( figure: ( dpi: \"high\" ) )");
    assert!( matches!( res, Err(QuakeMapError::ConfigError(_))));
}

#[test]
fn test_load_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!( file, "( legend: ( font_size_pt: 10.0 ), graticule: ( spacing_deg: 10.0 ) )").unwrap();

    let config = load_config( file.path()).unwrap();
    assert_eq!( config.legend.font_size_pt, 10.0);
    assert_eq!( config.legend.frame_alpha, 0.8);
    assert_eq!( config.graticule.spacing_deg, 10.0);

    assert!( matches!( load_config( "no/such/config.ron"), Err(QuakeMapError::IOError(_))));
}
