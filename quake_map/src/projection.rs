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

/// ellipsoidal (WGS84) Mercator projection clipped to a geographic region, and the pixel frame the
/// projected region is mapped onto.
/// Projected coordinates are meters relative to the lower left corner of the region, i.e. the region
/// spans [0,width]x[0,height]. Pixel coordinates have their origin at the top left of the canvas

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use quake_common::{BoundingBox, sin, cos, tan, atan, ln, exp, sqrt, pow2, rad, deg};
use quake_common::geo_constants::{EQATORIAL_EARTH_RADIUS, E_EARTH, E_EARTH_SQUARED};

const MAX_INVERSE_ITERATIONS: usize = 16;
const INVERSE_EPSILON: f64 = 1e-12;

#[derive(Debug,Clone)]
pub struct MercatorProjection {
    bounds: BoundingBox<f64>,
    lon_0: f64,
    x_0: f64, // unshifted projected coordinates of the lower left corner
    y_0: f64,
    width: f64,
    height: f64,
}

impl MercatorProjection {
    pub fn new (bounds: BoundingBox<f64>, lon_0: f64)->Self {
        let (x_0, y_0) = mercator( bounds.west, bounds.south, lon_0);
        let (x_1, y_1) = mercator( bounds.east, bounds.north, lon_0);

        MercatorProjection { bounds, lon_0, x_0, y_0, width: x_1 - x_0, height: y_1 - y_0 }
    }

    #[inline] pub fn bounds (&self)->&BoundingBox<f64> { &self.bounds }

    /// projected width of the region in meters
    #[inline] pub fn width (&self)->f64 { self.width }

    /// projected height of the region in meters
    #[inline] pub fn height (&self)->f64 { self.height }

    /// (lon,lat) degrees -> (x,y) meters relative to the lower left region corner
    pub fn forward (&self, lon: f64, lat: f64)->(f64,f64) {
        let (x,y) = mercator( lon, lat, self.lon_0);
        (x - self.x_0, y - self.y_0)
    }

    /// (x,y) meters relative to the lower left region corner -> (lon,lat) degrees
    pub fn inverse (&self, x: f64, y: f64)->(f64,f64) {
        let x = x + self.x_0;
        let y = y + self.y_0;

        let lon = self.lon_0 + deg( x / EQATORIAL_EARTH_RADIUS);

        // conformal latitude iteration (Snyder 7-9)
        let t = exp( -y / EQATORIAL_EARTH_RADIUS);
        let mut phi = FRAC_PI_2 - 2.0 * atan(t);
        for _ in 0..MAX_INVERSE_ITERATIONS {
            let e_sin = E_EARTH * sin(phi);
            let next = FRAC_PI_2 - 2.0 * atan( t * ((1.0 - e_sin) / (1.0 + e_sin)).powf( E_EARTH / 2.0));
            let done = (next - phi).abs() < INVERSE_EPSILON;
            phi = next;
            if done { break }
        }

        (lon, deg(phi))
    }

    /// ratio between projected and true distance at the given latitude (degrees)
    pub fn scale_factor (&self, lat: f64)->f64 {
        let phi = rad(lat);
        sqrt( 1.0 - E_EARTH_SQUARED * pow2( sin(phi))) / cos(phi)
    }
}

fn mercator (lon: f64, lat: f64, lon_0: f64)->(f64,f64) {
    let phi = rad(lat);
    let e_sin = E_EARTH * sin(phi);

    let x = EQATORIAL_EARTH_RADIUS * rad( lon - lon_0);
    let y = EQATORIAL_EARTH_RADIUS * ln( tan( FRAC_PI_4 + phi/2.0) * ((1.0 - e_sin) / (1.0 + e_sin)).powf( E_EARTH / 2.0));
    (x,y)
}

/// the pixel rectangle of a canvas that shows the projected region
#[derive(Debug,Clone)]
pub struct MapFrame {
    projection: MercatorProjection,
    left: f32,
    top: f32,
    width: u32,
    height: u32,
    px_per_m: f64,
}

impl MapFrame {
    /// create a frame with given top left pixel position and width. The height follows from the
    /// aspect ratio of the projected region
    pub fn new (projection: MercatorProjection, left: f32, top: f32, width: u32)->Self {
        let px_per_m = width as f64 / projection.width();
        let height = (projection.height() * px_per_m).round().max(1.0) as u32;
        MapFrame { projection, left, top, width, height, px_per_m }
    }

    #[inline] pub fn projection (&self)->&MercatorProjection { &self.projection }
    #[inline] pub fn left (&self)->f32 { self.left }
    #[inline] pub fn top (&self)->f32 { self.top }
    #[inline] pub fn right (&self)->f32 { self.left + self.width as f32 }
    #[inline] pub fn bottom (&self)->f32 { self.top + self.height as f32 }
    #[inline] pub fn width (&self)->u32 { self.width }
    #[inline] pub fn height (&self)->u32 { self.height }

    pub fn projected_to_px (&self, x: f64, y: f64)->(f32,f32) {
        let px = self.left as f64 + x * self.px_per_m;
        let py = self.top as f64 + (self.projection.height() - y) * self.px_per_m;
        (px as f32, py as f32)
    }

    pub fn to_px (&self, lon: f64, lat: f64)->(f32,f32) {
        let (x,y) = self.projection.forward( lon, lat);
        self.projected_to_px( x, y)
    }

    /// the geographic position of a pixel position on the canvas
    pub fn px_to_lon_lat (&self, px: f64, py: f64)->(f64,f64) {
        let x = (px - self.left as f64) / self.px_per_m;
        let y = self.projection.height() - (py - self.top as f64) / self.px_per_m;
        self.projection.inverse( x, y)
    }

    /// is the geographic position within the projected region. Edges are inclusive, which is not
    /// the same as testing the pixel position against the (rounded) frame rectangle
    pub fn contains (&self, lon: f64, lat: f64)->bool {
        self.projection.bounds().contains( lon, lat)
    }
}
