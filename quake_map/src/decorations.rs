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

/// map decorations: graticule, scale bar, north arrow, legend and title.
/// Geographic anchors are given in degrees, sizes in points (converted with `px_per_pt`)

use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};
use quake_common::BoundingBox;
use crate::config::{GraticuleConfig, LegendConfig, NorthArrowConfig, ScaleBarConfig, TitleConfig};
use crate::errors::Result;
use crate::projection::MapFrame;
use crate::surface::{hex_color, HAlign, LineStyle, MapSurface, MarkerStyle, TextStyle, VAlign};
use crate::week::WeekBucket;

const LEGEND_EDGE_WIDTH_PT: f64 = 0.8;

/* #region graticule *****************************************************************************************************/

/// multiples of `spacing` within [lo,hi) that also fall within [min,max]
fn grid_values (min: f64, max: f64, spacing: f64, lo: f64, hi: f64)->Vec<f64> {
    let mut values = Vec::new();
    let mut k = 0;
    loop {
        let v = lo + k as f64 * spacing;
        if v >= hi { break }
        if v >= min && v <= max { values.push(v) }
        k += 1;
    }
    values
}

/// meridians are multiples of `spacing` in [0,360). Candidates east of 180 are also tried as negative longitudes
pub fn meridians (bounds: &BoundingBox<f64>, spacing: f64)->Vec<f64> {
    let mut lons = grid_values( bounds.west, bounds.east, spacing, 0.0, 360.0);
    lons.extend( grid_values( bounds.west + 360.0, bounds.east + 360.0, spacing, 0.0, 360.0).iter().map(|v| v - 360.0));
    lons.sort_by( |a,b| a.total_cmp(b));
    lons.dedup();
    lons
}

/// parallels are multiples of `spacing` in [-90,90)
pub fn parallels (bounds: &BoundingBox<f64>, spacing: f64)->Vec<f64> {
    grid_values( bounds.south, bounds.north, spacing, -90.0, 90.0)
}

pub fn draw_graticule<S: MapSurface> (surface: &mut S, frame: &MapFrame, cfg: &GraticuleConfig, px_per_pt: f64)->Result<()> {
    let color = hex_color( &cfg.color, 1.0)?;
    let (on, off) = cfg.dash_pt;
    let style = LineStyle::dashed( color, (cfg.line_width_pt * px_per_pt) as f32, (on * px_per_pt) as f32, (off * px_per_pt) as f32);
    let bounds = *frame.projection().bounds();

    for lon in meridians( &bounds, cfg.spacing_deg) {
        let pts = [ frame.to_px( lon, bounds.south), frame.to_px( lon, bounds.north) ];
        surface.draw_polyline( &pts, &style)?;
    }
    for lat in parallels( &bounds, cfg.spacing_deg) {
        let pts = [ frame.to_px( bounds.west, lat), frame.to_px( bounds.east, lat) ];
        surface.draw_polyline( &pts, &style)?;
    }
    Ok(())
}

/* #endregion graticule */

/// a horizontal bar of true length `length_km` centered at the anchor, with ticks at both ends and
/// the middle. Distance labels go `label_pad_pt` above the ticks, the unit below the bar
pub fn draw_scale_bar<S: MapSurface> (surface: &mut S, frame: &MapFrame, cfg: &ScaleBarConfig, px_per_pt: f64)->Result<()> {
    let color = hex_color( &cfg.color, 1.0)?;
    let style = LineStyle::solid( color, (cfg.line_width_pt * px_per_pt) as f32);
    let proj = frame.projection();

    let length = Length::new::<kilometer>( cfg.length_km);
    let projected_length = length.get::<meter>() * proj.scale_factor( cfg.lat);
    let tick_height = cfg.tick_height * proj.height();

    let (xc, yc) = proj.forward( cfg.lon, cfg.lat);
    let xs = [ xc - projected_length/2.0, xc, xc + projected_length/2.0 ];
    let labels = [ 0.0, cfg.length_km / 2.0, cfg.length_km ];

    surface.draw_polyline( &[ frame.projected_to_px( xs[0], yc), frame.projected_to_px( xs[2], yc) ], &style)?;

    let label_pad = (cfg.label_pad_pt * px_per_pt) as f32;
    let text_style = TextStyle { color, size: (cfg.font_size_pt * px_per_pt) as f32, h_align: HAlign::Center, v_align: VAlign::Bottom };
    for (x, value) in xs.iter().zip( labels.iter()) {
        let base = frame.projected_to_px( *x, yc);
        let top = frame.projected_to_px( *x, yc + tick_height);
        surface.draw_polyline( &[base, top], &style)?;
        surface.draw_text( (top.0, top.1 - label_pad), &format!("{}", value.trunc() as i64), &text_style)?;
    }

    let unit_pos = frame.projected_to_px( xc, yc - tick_height);
    surface.draw_text( unit_pos, "km", &TextStyle { v_align: VAlign::Top, ..text_style })
}

/// vertical arrow pointing north from the anchor. The head is added on top of `length_deg` and its
/// dimensions are in projected meters. The label hangs below the anchor
pub fn draw_north_arrow<S: MapSurface> (surface: &mut S, frame: &MapFrame, cfg: &NorthArrowConfig, px_per_pt: f64)->Result<()> {
    let color = hex_color( &cfg.color, 1.0)?;
    let proj = frame.projection();

    let (x, y) = proj.forward( cfg.lon, cfg.lat);
    let (_, y2) = proj.forward( cfg.lon, cfg.lat + cfg.length_deg);
    let half_width = cfg.head_width_m / 2.0;

    let style = LineStyle::solid( color, (cfg.line_width_pt * px_per_pt) as f32);
    surface.draw_polyline( &[ frame.projected_to_px( x, y), frame.projected_to_px( x, y2) ], &style)?;

    let head = [
        frame.projected_to_px( x - half_width, y2),
        frame.projected_to_px( x, y2 + cfg.head_length_m),
        frame.projected_to_px( x + half_width, y2),
    ];
    surface.fill_polygon( &head, color)?;

    let text_style = TextStyle { color, size: (cfg.font_size_pt * px_per_pt) as f32, h_align: HAlign::Center, v_align: VAlign::Top };
    surface.draw_text( frame.projected_to_px( x, y), &cfg.label, &text_style)
}

/// legend box in the lower left corner of the map, listing all week buckets newest first.
/// Entries do not depend on which buckets actually have events
pub fn draw_legend<S: MapSurface> (surface: &mut S, frame: &MapFrame, cfg: &LegendConfig, px_per_pt: f64)->Result<()> {
    let em = (cfg.font_size_pt * px_per_pt) as f32;
    let text_color = hex_color( &cfg.text_color, 1.0)?;

    let mut text_width: f32 = 0.0;
    let mut row_height: f32 = em;
    for bucket in WeekBucket::ALL {
        let (w,h) = surface.text_extent( bucket.label(), em)?;
        let swatch = (bucket.legend_swatch_size() * px_per_pt) as f32;
        text_width = text_width.max(w);
        row_height = row_height.max(h).max(swatch);
    }

    let n = WeekBucket::ALL.len() as f32;
    let pad = cfg.border_pad_em as f32 * em;
    let handle_length = cfg.handle_length_em as f32 * em;
    let handle_text_pad = cfg.handle_text_pad_em as f32 * em;
    let label_spacing = cfg.label_spacing_em as f32 * em;

    let width = pad + handle_length + handle_text_pad + text_width + pad;
    let height = pad + n * row_height + (n - 1.0) * label_spacing + pad;
    let left = frame.left() + cfg.border_axes_pad_em as f32 * em;
    let top = frame.bottom() - cfg.border_axes_pad_em as f32 * em - height;

    surface.fill_rect( left, top, width, height, hex_color( &cfg.frame_color, cfg.frame_alpha)?)?;
    let edge = LineStyle::solid( hex_color( &cfg.edge_color, 1.0)?, (LEGEND_EDGE_WIDTH_PT * px_per_pt) as f32);
    let right = left + width;
    let bottom = top + height;
    surface.draw_polyline( &[ (left,top), (right,top), (right,bottom), (left,bottom), (left,top) ], &edge)?;

    let text_style = TextStyle { color: text_color, size: em, h_align: HAlign::Left, v_align: VAlign::Center };
    for (i, bucket) in WeekBucket::ALL.iter().enumerate() {
        let y = top + pad + i as f32 * (row_height + label_spacing) + row_height / 2.0;
        let swatch = MarkerStyle { color: bucket.legend_color(), diameter: (bucket.legend_swatch_size() * px_per_pt) as f32 };
        surface.draw_marker( (left + pad + handle_length / 2.0, y), &swatch)?;
        surface.draw_text( (left + pad + handle_length + handle_text_pad, y), bucket.label(), &text_style)?;
    }
    Ok(())
}

/// title text centered above the map frame, `pad_pt` above its top edge
pub fn draw_title<S: MapSurface> (surface: &mut S, frame: &MapFrame, cfg: &TitleConfig, px_per_pt: f64)->Result<()> {
    if cfg.text.is_empty() { return Ok(()) }

    let color = hex_color( &cfg.color, 1.0)?;
    let pos = ( frame.left() + frame.width() as f32 / 2.0, frame.top() - (cfg.pad_pt * px_per_pt) as f32 );
    let style = TextStyle { color, size: (cfg.font_size_pt * px_per_pt) as f32, h_align: HAlign::Center, v_align: VAlign::Bottom };
    surface.draw_text( pos, &cfg.text, &style)
}
