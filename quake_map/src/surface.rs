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

/// drawing surfaces for maps. The renderer only talks to the `MapSurface` trait so that it can be
/// pointed at a raster image (`RasterSurface`) or anything that records or re-targets draw calls.
/// All coordinates are canvas pixels (f32, origin top left), all colors are non-premultiplied RGBA

use std::path::Path;
use image::{imageops, Pixel, Rgba, RgbaImage};
use imageproc::{drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut, draw_text_mut, text_size, Blend}, point::Point, rect::Rect};
use ab_glyph::{FontVec, PxScale};
use quake_common::fs::filepath_contents;
use crate::errors::{Result, QuakeMapError};

pub const POINTS_PER_INCH: f64 = 72.0;

pub const WHITE: Rgba<u8> = Rgba([255,255,255,255]);

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LineStyle {
    pub color: Rgba<u8>,
    pub width: f32,
    pub dash: Option<(f32,f32)>, // (on,off) lengths
}

impl LineStyle {
    pub fn solid (color: Rgba<u8>, width: f32)->Self { LineStyle { color, width, dash: None } }
    pub fn dashed (color: Rgba<u8>, width: f32, on: f32, off: f32)->Self { LineStyle { color, width, dash: Some((on,off)) } }
}

/// filled circle marker. The alpha channel of `color` is the marker opacity
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MarkerStyle {
    pub color: Rgba<u8>,
    pub diameter: f32,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum HAlign { Left, Center, Right }

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum VAlign { Top, Center, Bottom }

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TextStyle {
    pub color: Rgba<u8>,
    pub size: f32, // in pixels
    pub h_align: HAlign,
    pub v_align: VAlign,
}

pub trait MapSurface {
    fn dimensions (&self)->(u32,u32);

    /// composite `img` with its top left corner at (x,y)
    fn draw_image (&mut self, x: i64, y: i64, img: &RgbaImage)->Result<()>;

    fn draw_polyline (&mut self, points: &[(f32,f32)], style: &LineStyle)->Result<()>;

    fn fill_polygon (&mut self, points: &[(f32,f32)], color: Rgba<u8>)->Result<()>;

    fn fill_rect (&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>)->Result<()>;

    fn draw_marker (&mut self, center: (f32,f32), style: &MarkerStyle)->Result<()>;

    /// (width,height) in pixels of `text` rendered with font size `size` (pixels)
    fn text_extent (&self, text: &str, size: f32)->Result<(f32,f32)>;

    /// `pos` is the anchor point that gets aligned according to the style
    fn draw_text (&mut self, pos: (f32,f32), text: &str, style: &TextStyle)->Result<()>;
}

/// parse "rrggbb" or "#rrggbb" into a color with given opacity
pub fn hex_color (hex_spec: &str, alpha: f32)->Result<Rgba<u8>> {
    let hex = hex_spec.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return Err( QuakeMapError::IllegalArgument( format!("invalid hex color: {hex_spec}")))
    }
    let v = u32::from_str_radix( hex, 16).map_err(|_| QuakeMapError::IllegalArgument( format!("invalid hex color: {hex_spec}")))?;

    let r = (v >> 16) as u8;
    let g = (v >> 8 & 0xff) as u8;
    let b = (v & 0xff) as u8;

    Ok( Rgba([r, g, b, alpha_u8(alpha)]) )
}

#[inline]
pub fn alpha_u8 (alpha: f32)->u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// same color with a different opacity
#[inline]
pub fn with_alpha (color: Rgba<u8>, alpha: f32)->Rgba<u8> {
    let [r,g,b,_] = color.0;
    Rgba([r,g,b, alpha_u8(alpha)])
}

pub fn load_font (path: impl AsRef<Path>)->Result<FontVec> {
    let path = path.as_ref();
    if !path.is_file() {
        Err( QuakeMapError::ResourceNotFound( format!("font {:?}", path)) )
    } else {
        let data = filepath_contents( &path)?;
        Ok( FontVec::try_from_vec( data)? )
    }
}

/// the surface font, or ResourceNotFound if there is none
fn required_font (font: &Option<FontVec>)->Result<&FontVec> {
    font.as_ref().ok_or_else(|| QuakeMapError::ResourceNotFound( "no font for text rendering".to_string()))
}

/* #region RasterSurface *************************************************************************************************/

/// a `MapSurface` that draws into an RGBA image buffer.
/// Text operations fail if the surface does not have a font
pub struct RasterSurface {
    img: RgbaImage,
    font: Option<FontVec>,
}

impl RasterSurface {
    /// new surface with opaque white background
    pub fn new (width: u32, height: u32)->Self {
        RasterSurface { img: RgbaImage::from_pixel( width, height, WHITE), font: None }
    }

    pub fn with_font (mut self, font: FontVec)->Self {
        self.font = Some(font);
        self
    }

    pub fn image (&self)->&RgbaImage { &self.img }

    pub fn into_image (self)->RgbaImage { self.img }

    /// run a imageproc drawing op that alpha blends into our image
    fn blended<F> (&mut self, f: F) where F: FnOnce(&mut Blend<RgbaImage>) {
        let mut blend = Blend( std::mem::take( &mut self.img));
        f( &mut blend);
        self.img = blend.0;
    }

    fn blend_pixel (&mut self, x: i64, y: i64, color: &Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.get_pixel_mut( x as u32, y as u32).blend( color);
        }
    }

    fn draw_segment (&mut self, p0: (f32,f32), p1: (f32,f32), style: &LineStyle) {
        let color = style.color;

        if style.width <= 1.0 {
            self.blended( |canvas| draw_line_segment_mut( canvas, p0, p1, color));

        } else {
            let dx = p1.0 - p0.0;
            let dy = p1.1 - p0.1;
            let len = (dx*dx + dy*dy).sqrt();
            if len == 0.0 { return }

            let hw = style.width / 2.0;
            let nx = -dy / len * hw;
            let ny = dx / len * hw;

            let quad = [ (p0.0 + nx, p0.1 + ny), (p1.0 + nx, p1.1 + ny), (p1.0 - nx, p1.1 - ny), (p0.0 - nx, p0.1 - ny) ];
            self.fill_polygon_px( &quad, color);
        }
    }

    fn fill_polygon_px (&mut self, points: &[(f32,f32)], color: Rgba<u8>) {
        let mut poly: Vec<Point<i32>> = Vec::with_capacity( points.len());
        for p in points {
            let q = Point::new( p.0.round() as i32, p.1.round() as i32);
            if poly.last() != Some(&q) { poly.push(q) }
        }
        while poly.len() > 1 && poly.first() == poly.last() { poly.pop(); }

        if poly.len() >= 3 {
            self.blended( |canvas| draw_polygon_mut( canvas, &poly, color));
        } else if let (Some(p0), Some(p1)) = (poly.first(), poly.last()) { // degenerated to a point or line
            let (p0, p1) = ((p0.x as f32, p0.y as f32), (p1.x as f32, p1.y as f32));
            self.blended( |canvas| draw_line_segment_mut( canvas, p0, p1, color));
        }
    }
}

/// split a polyline into the "on" parts of a dash pattern. The dash phase continues across vertices
pub fn dash_segments (points: &[(f32,f32)], on: f32, off: f32)->Vec<((f32,f32),(f32,f32))> {
    let mut segments = Vec::new();
    if on <= 0.0 || off < 0.0 { return segments }

    let mut is_on = true;
    let mut remaining = on; // of the current dash or gap

    for w in points.windows(2) {
        let (p0, p1) = (w[0], w[1]);
        let dx = p1.0 - p0.0;
        let dy = p1.1 - p0.1;
        let len = (dx*dx + dy*dy).sqrt();
        if len == 0.0 { continue }

        let mut pos = 0.0;
        while pos < len {
            let step = remaining.min( len - pos);
            if is_on {
                let a = (p0.0 + dx * pos / len, p0.1 + dy * pos / len);
                let b = (p0.0 + dx * (pos + step) / len, p0.1 + dy * (pos + step) / len);
                segments.push( (a,b));
            }
            pos += step;
            remaining -= step;
            if remaining <= 0.0 {
                is_on = !is_on;
                remaining = if is_on { on } else { off };
                if remaining <= 0.0 { is_on = true; remaining = on; } // zero length gaps
            }
        }
    }

    segments
}

impl MapSurface for RasterSurface {
    fn dimensions (&self)->(u32,u32) {
        self.img.dimensions()
    }

    fn draw_image (&mut self, x: i64, y: i64, img: &RgbaImage)->Result<()> {
        imageops::overlay( &mut self.img, img, x, y);
        Ok(())
    }

    fn draw_polyline (&mut self, points: &[(f32,f32)], style: &LineStyle)->Result<()> {
        if let Some((on,off)) = style.dash {
            for (p0,p1) in dash_segments( points, on, off) {
                self.draw_segment( p0, p1, style);
            }
        } else {
            for w in points.windows(2) {
                self.draw_segment( w[0], w[1], style);
            }
        }
        Ok(())
    }

    fn fill_polygon (&mut self, points: &[(f32,f32)], color: Rgba<u8>)->Result<()> {
        self.fill_polygon_px( points, color);
        Ok(())
    }

    fn fill_rect (&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>)->Result<()> {
        let w = width.round() as u32;
        let h = height.round() as u32;
        if w > 0 && h > 0 {
            let rect = Rect::at( x.round() as i32, y.round() as i32).of_size( w, h);
            self.blended( |canvas| draw_filled_rect_mut( canvas, rect, color));
        }
        Ok(())
    }

    /// we blend every covered pixel exactly once so that semi transparent markers have uniform opacity
    fn draw_marker (&mut self, center: (f32,f32), style: &MarkerStyle)->Result<()> {
        let r = (style.diameter / 2.0).max(0.5);
        let r2 = r * r;
        let (cx, cy) = center;

        let x0 = (cx - r).floor() as i64;
        let x1 = (cx + r).ceil() as i64;
        let y0 = (cy - r).floor() as i64;
        let y1 = (cy + r).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx*dx + dy*dy <= r2 {
                    self.blend_pixel( x, y, &style.color);
                }
            }
        }
        Ok(())
    }

    fn text_extent (&self, text: &str, size: f32)->Result<(f32,f32)> {
        let font = required_font( &self.font)?;
        let (w,h) = text_size( PxScale::from(size), font, text);
        Ok( (w as f32, h as f32) )
    }

    fn draw_text (&mut self, pos: (f32,f32), text: &str, style: &TextStyle)->Result<()> {
        let (w,h) = self.text_extent( text, style.size)?;
        let x = match style.h_align {
            HAlign::Left => pos.0,
            HAlign::Center => pos.0 - w / 2.0,
            HAlign::Right => pos.0 - w,
        };
        let y = match style.v_align {
            VAlign::Top => pos.1,
            VAlign::Center => pos.1 - h / 2.0,
            VAlign::Bottom => pos.1 - h,
        };

        let scale = PxScale::from( style.size);
        let font = required_font( &self.font)?;
        draw_text_mut( &mut self.img, style.color, x.round() as i32, y.round() as i32, scale, font, text);
        Ok(())
    }
}

/* #endregion RasterSurface */
