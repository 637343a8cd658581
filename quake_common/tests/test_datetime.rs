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

use chrono::NaiveDate;
use quake_common::datetime::{parse_ymd, fractional_days_between, start_of_day};

// run with "cargo test test_xx -- --nocapture"

fn ymd (y: i32, m: u32, d: u32)->NaiveDate { NaiveDate::from_ymd_opt(y,m,d).unwrap() }

#[test]
fn test_parse_ymd() {
    assert_eq!( parse_ymd("2015-01-10"), Some(ymd(2015,1,10)));
    assert_eq!( parse_ymd("2015-1-5"), Some(ymd(2015,1,5)));
    assert_eq!( parse_ymd("2015-01-10\n"), Some(ymd(2015,1,10)));
    assert_eq!( parse_ymd(" 2015 - 01 - 10 "), Some(ymd(2015,1,10)));

    assert_eq!( parse_ymd("2015/01/10"), None);
    assert_eq!( parse_ymd("2015-01"), None);
    assert_eq!( parse_ymd("2015-01-10-03"), None);
    assert_eq!( parse_ymd("2015-02-30"), None);
    assert_eq!( parse_ymd("2015-xx-10"), None);
    assert_eq!( parse_ymd(""), None);
}

#[test]
fn test_fractional_days() {
    let anchor = ymd(2015,2,1);

    assert_eq!( fractional_days_between( anchor, anchor), 0.0);
    assert_eq!( fractional_days_between( ymd(2015,1,25), anchor), -7.0);
    assert_eq!( fractional_days_between( ymd(2015,1,1), anchor), -31.0);
    assert_eq!( fractional_days_between( ymd(2015,3,1), anchor), 28.0);
    assert_eq!( fractional_days_between( ymd(2014,12,31), anchor), -32.0);
}

#[test]
fn test_start_of_day() {
    let dt = start_of_day( ymd(2015,2,1));
    println!("start of day: {dt}");
    assert_eq!( dt.to_string(), "2015-02-01 00:00:00");
}
