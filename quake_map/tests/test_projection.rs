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

use quake_common::{BoundingBox, rad};
use quake_common::geo_constants::EQATORIAL_EARTH_RADIUS;
use quake_map::MapConfig;
use quake_map::projection::{MapFrame, MercatorProjection};
use quake_map::decorations::{meridians, parallels};

fn default_projection ()->MercatorProjection {
    let region = MapConfig::default().region;
    MercatorProjection::new( region.bounds, region.lon_0)
}

fn assert_close (a: f64, b: f64, eps: f64) {
    assert!( (a - b).abs() < eps, "{a} != {b} (eps {eps})");
}

#[test]
fn test_corners() {
    let proj = default_projection();
    let b = *proj.bounds();

    let (x,y) = proj.forward( b.west, b.south);
    assert_close( x, 0.0, 1e-6);
    assert_close( y, 0.0, 1e-6);

    let (x,y) = proj.forward( b.east, b.north);
    assert_close( x, proj.width(), 1e-6);
    assert_close( y, proj.height(), 1e-6);

    assert_close( proj.width(), EQATORIAL_EARTH_RADIUS * rad( b.east - b.west), 1e-6);
    println!("projected region: {:.0}m x {:.0}m", proj.width(), proj.height());
}

#[test]
fn test_inverse() {
    let proj = default_projection();

    for (lon,lat) in [(120.0, -5.0), (93.1304, -20.9248), (142.3492, 14.3024), (113.379, 0.0)] {
        let (x,y) = proj.forward( lon, lat);
        let (lon1,lat1) = proj.inverse( x, y);
        assert_close( lon1, lon, 1e-6);
        assert_close( lat1, lat, 1e-6);
    }
}

#[test]
fn test_scale_factor() {
    let proj = default_projection();
    assert_close( proj.scale_factor( 0.0), 1.0, 1e-12);
    assert_close( proj.scale_factor( 60.0), 1.99497, 1e-4); // ellipsoid is slightly below 1/cos(60)
    assert!( proj.scale_factor( -18.0) > 1.0);
}

#[test]
fn test_frame() {
    let frame = MapFrame::new( default_projection(), 30.0, 100.0, 1488);
    let b = *frame.projection().bounds();

    let (px,py) = frame.to_px( b.west, b.north);
    assert_close( px as f64, 30.0, 1e-3);
    assert_close( py as f64, 100.0, 1e-3);

    let (px,py) = frame.to_px( b.east, b.south);
    assert_close( px as f64, frame.right() as f64, 1e-2);
    assert_close( py as f64, frame.bottom() as f64, 0.5);

    let (px,py) = frame.to_px( 120.0, -5.0);
    assert!( frame.contains( 120.0, -5.0));
    assert!( !frame.contains( 10.0, 50.0));
    let (lon,lat) = frame.px_to_lon_lat( px as f64, py as f64);
    assert_close( lon, 120.0, 1e-3);
    assert_close( lat, -5.0, 1e-3);
}

#[test]
fn test_graticule_lines() {
    let bounds = MapConfig::default().region.bounds;
    assert_eq!( meridians( &bounds, 15.0), vec![105.0, 120.0, 135.0]);
    assert_eq!( parallels( &bounds, 15.0), vec![-15.0, 0.0]);

    // western hemisphere regions use negative longitudes
    let bounds = BoundingBox::new( -125.0, 30.0, -100.0, 50.0);
    assert_eq!( meridians( &bounds, 15.0), vec![-120.0, -105.0]);
    assert_eq!( parallels( &bounds, 15.0), vec![30.0, 45.0]);
}
