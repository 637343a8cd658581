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
use quake_map::{QuakeEvent, RowError, WeekBucket, classify, ANCHOR_DATE};
use quake_map::week::{classify_date, days_since_anchor, parse_event_date};

// run with "cargo test test_xx -- --nocapture"

fn date (s: &str)->NaiveDate { parse_event_date(s).unwrap() }

#[test]
fn test_anchor() {
    assert_eq!( ANCHOR_DATE, NaiveDate::from_ymd_opt(2015,2,1).unwrap());

    let c = classify_date( date("2015-02-01"));
    assert_eq!( c.days_since_anchor, 0.0);
    assert_eq!( c.bucket, WeekBucket::Week1);
}

#[test]
fn test_week_boundaries() {
    let c = classify_date( date("2015-01-24"));
    assert_eq!( c.days_since_anchor, -8.0);
    assert_eq!( c.bucket, WeekBucket::Week2);

    let c = classify_date( date("2015-01-25"));
    assert_eq!( c.days_since_anchor, -7.0);
    assert_eq!( c.bucket, WeekBucket::Week1);

    let c = classify_date( date("2015-01-18"));
    assert_eq!( c.days_since_anchor, -14.0);
    assert_eq!( c.bucket, WeekBucket::Week2);

    let c = classify_date( date("2015-01-17"));
    assert_eq!( c.bucket, WeekBucket::Week3);

    let c = classify_date( date("2015-01-11"));
    assert_eq!( c.days_since_anchor, -21.0);
    assert_eq!( c.bucket, WeekBucket::Week3);

    let c = classify_date( date("2015-01-10"));
    assert_eq!( c.days_since_anchor, -22.0);
    assert_eq!( c.bucket, WeekBucket::Week4);
}

#[test]
fn test_out_of_range_dates() {
    // everything after the anchor still counts as the most recent week
    assert_eq!( classify_date( date("2015-03-15")).bucket, WeekBucket::Week1);
    assert_eq!( classify_date( date("2014-12-01")).bucket, WeekBucket::Week4);
}

#[test]
fn test_from_days() {
    assert_eq!( WeekBucket::from_days( -7.0), WeekBucket::Week1);
    assert_eq!( WeekBucket::from_days( -7.5), WeekBucket::Week2);
    assert_eq!( WeekBucket::from_days( -14.0), WeekBucket::Week2);
    assert_eq!( WeekBucket::from_days( -14.01), WeekBucket::Week3);
    assert_eq!( WeekBucket::from_days( -21.0), WeekBucket::Week3);
    assert_eq!( WeekBucket::from_days( -21.01), WeekBucket::Week4);
    assert_eq!( WeekBucket::from_days( 100.0), WeekBucket::Week1);
}

#[test]
fn test_classify_event() {
    let e = QuakeEvent::new( 120.0, -5.0, "2015-01-05");
    let c = classify( &e).unwrap();
    assert_eq!( c.days_since_anchor, -27.0);
    assert_eq!( c.bucket, WeekBucket::Week4);

    let e = QuakeEvent::new( 120.0, -5.0, "2015/01/05");
    match classify( &e) {
        Err(RowError::InvalidDate(s)) => assert_eq!( s, "2015/01/05"),
        other => panic!("unexpected result {other:?}")
    }
}

#[test]
fn test_bucket_styles() {
    let labels: Vec<&str> = WeekBucket::ALL.iter().map(|b| b.label()).collect();
    assert_eq!( labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);

    assert_eq!( WeekBucket::Week4.marker_size(), 6.0);
    assert_eq!( WeekBucket::Week3.marker_size(), 5.0);
    assert_eq!( WeekBucket::Week2.marker_size(), 4.0);
    assert_eq!( WeekBucket::Week1.marker_size(), 3.0);

    assert_eq!( WeekBucket::Week1.marker_color().0, [0,128,0,255]);   // green
    assert_eq!( WeekBucket::Week2.marker_color().0, [255,0,0,255]);   // red
    assert_eq!( WeekBucket::Week3.marker_color().0, [0,0,255,255]);   // blue
    assert_eq!( WeekBucket::Week4.legend_color().0, [255,255,0,255]); // yellow

    assert!( (WeekBucket::Week1.legend_swatch_size() - 6f64.sqrt()).abs() < 1e-9);
    assert!( (WeekBucket::Week4.legend_swatch_size() - 12f64.sqrt()).abs() < 1e-9);
}
