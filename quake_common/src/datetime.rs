/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const SECS_PER_DAY: i64 = 86400;

/// midnight (00:00:00) of the given date
#[inline]
pub fn start_of_day (nd: NaiveDate)->NaiveDateTime {
    NaiveDateTime::new( nd, NaiveTime::MIN)
}

/// signed number of days from `earlier` to `later` (negative if `later` is before `earlier`).
/// This is computed from the whole seconds between both midnights so that it stays a plain f64 division
pub fn fractional_days_between (later: NaiveDate, earlier: NaiveDate)->f64 {
    let secs = (start_of_day(later) - start_of_day(earlier)).num_seconds();
    secs as f64 / SECS_PER_DAY as f64
}

/// parse a "YYYY-MM-DD" string by splitting on '-' into three integers.
/// Surrounding whitespace of each part is ignored, the resulting calendar date has to be valid
pub fn parse_ymd (s: &str)->Option<NaiveDate> {
    let mut it = s.split('-');

    if let Some(ys) = it.next()
    && let Some(ms) = it.next()
    && let Some(ds) = it.next()
    && it.next().is_none()
    && let Ok(year) = ys.trim().parse::<i32>()
    && let Ok(month) = ms.trim().parse::<u32>()
    && let Ok(day) = ds.trim().parse::<u32>() {
        NaiveDate::from_ymd_opt( year, month, day)
    } else {
        None
    }
}
