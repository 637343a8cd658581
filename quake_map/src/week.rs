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

/// temporal classification of earthquake events into the four weeks preceding the anchor date

use std::fmt;
use chrono::NaiveDate;
use image::Rgba;
use quake_common::datetime::{fractional_days_between, parse_ymd};
use crate::events::{QuakeEvent, RowError};

/// the date all event dates are measured against
pub const ANCHOR_DATE: NaiveDate = NaiveDate::from_ymd_opt( 2015, 2, 1).unwrap();

/// week buckets counted backwards from the anchor date. `Week1` is the most recent one and
/// also includes everything on or after the anchor date
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub enum WeekBucket {
    Week1,
    Week2,
    Week3,
    Week4,
}

impl WeekBucket {
    /// newest to oldest, which is also the legend order
    pub const ALL: [WeekBucket;4] = [WeekBucket::Week1, WeekBucket::Week2, WeekBucket::Week3, WeekBucket::Week4];

    /// lower bounds are inclusive: -7.0 is still `Week1`, -7.5 is `Week2`
    pub fn from_days (days_since_anchor: f64)->Self {
        if days_since_anchor < -21.0 {
            WeekBucket::Week4
        } else if days_since_anchor < -14.0 {
            WeekBucket::Week3
        } else if days_since_anchor < -7.0 {
            WeekBucket::Week2
        } else {
            WeekBucket::Week1
        }
    }

    pub fn index (&self)->usize {
        match self {
            WeekBucket::Week1 => 0,
            WeekBucket::Week2 => 1,
            WeekBucket::Week3 => 2,
            WeekBucket::Week4 => 3,
        }
    }

    pub fn label (&self)->&'static str {
        match self {
            WeekBucket::Week1 => "Week 1",
            WeekBucket::Week2 => "Week 2",
            WeekBucket::Week3 => "Week 3",
            WeekBucket::Week4 => "Week 4",
        }
    }

    /// marker diameter in points
    pub fn marker_size (&self)->f64 {
        match self {
            WeekBucket::Week1 => 3.0,
            WeekBucket::Week2 => 4.0,
            WeekBucket::Week3 => 5.0,
            WeekBucket::Week4 => 6.0,
        }
    }

    /// opaque marker color (green, red, blue and the darker olive-yellow for the oldest week)
    pub fn marker_color (&self)->Rgba<u8> {
        match self {
            WeekBucket::Week1 => Rgba([0x00,0x80,0x00,0xff]),
            WeekBucket::Week2 => Rgba([0xff,0x00,0x00,0xff]),
            WeekBucket::Week3 => Rgba([0x00,0x00,0xff,0xff]),
            WeekBucket::Week4 => Rgba([0xbf,0xbf,0x00,0xff]),
        }
    }

    /// legend swatches use pure yellow for the oldest week
    pub fn legend_color (&self)->Rgba<u8> {
        match self {
            WeekBucket::Week4 => Rgba([0xff,0xff,0x00,0xff]),
            _ => self.marker_color()
        }
    }

    /// legend swatch diameter in points (swatch areas are 6,8,10,12 pt²)
    pub fn legend_swatch_size (&self)->f64 {
        let area = 2.0 * (self.index() as f64) + 6.0;
        area.sqrt()
    }
}

impl fmt::Display for WeekBucket {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Classification {
    pub days_since_anchor: f64,
    pub bucket: WeekBucket,
}

pub fn parse_event_date (date: &str)->Result<NaiveDate,RowError> {
    parse_ymd( date).ok_or_else(|| RowError::InvalidDate( date.to_string()))
}

/// signed days between midnight of `date` and midnight of the anchor date
pub fn days_since_anchor (date: NaiveDate)->f64 {
    fractional_days_between( date, ANCHOR_DATE)
}

pub fn classify_date (date: NaiveDate)->Classification {
    let days_since_anchor = days_since_anchor( date);
    Classification { days_since_anchor, bucket: WeekBucket::from_days( days_since_anchor) }
}

pub fn classify (event: &QuakeEvent)->Result<Classification,RowError> {
    let date = parse_event_date( &event.date)?;
    Ok( classify_date( date))
}
