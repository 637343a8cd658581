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

/// reading earthquake event files. These are tab separated text files with one header line
/// followed by `longitude\tlatitude\tYYYY-MM-DD` rows, e.g.
/// ```text
/// longitude	latitude	date
/// 126.6363	1.7764	2015-01-31
/// ```
/// reading stops at EOF or at the first empty line

use std::fs::File;
use std::io::{BufRead,BufReader};
use std::path::Path;
use serde::Deserialize;
use csv::{ReaderBuilder,StringRecord,Trim};
use tracing::{debug,info};
use quake_common::define_error;
use crate::errors::{Result,QuakeMapError};

define_error!{ pub RowError =
    MissingField(&'static str) : "missing {0} field",
    InvalidCoordinate(&'static str, String) : "invalid {0} value '{1}'",
    InvalidDate(String) : "invalid date '{0}'",
    InvalidRecord(String) : "invalid record: {0}"
}

const FIELDS: [&str;3] = ["longitude", "latitude", "date"];

/// a single earthquake event as it is read from file. The date is kept verbatim and only parsed
/// when the event gets classified
#[derive(Debug,Clone,PartialEq)]
pub struct QuakeEvent {
    pub lon: f64,
    pub lat: f64,
    pub date: String,
}

impl QuakeEvent {
    pub fn new (lon: f64, lat: f64, date: impl ToString)->Self {
        QuakeEvent { lon, lat, date: date.to_string() }
    }
}

#[derive(Deserialize,Debug)]
struct RawQuakeEvent {
    lon: f64,
    lat: f64,
    date: String,
}

impl From<RawQuakeEvent> for QuakeEvent {
    fn from (raw: RawQuakeEvent)->Self {
        QuakeEvent { lon: raw.lon, lat: raw.lat, date: raw.date }
    }
}

fn csv_builder ()->ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false) // header line is consumed before we hand data to the csv reader
        .flexible(true)
        .quoting(false)
        .trim(Trim::All);
    builder
}

/// turn a (trimmed) csv record into an event. Fields beyond the third are ignored
fn event_from_record (mut record: StringRecord)->std::result::Result<QuakeEvent,RowError> {
    if record.len() < FIELDS.len() {
        return Err( RowError::MissingField( FIELDS[record.len()]))
    }
    record.truncate( FIELDS.len());

    match record.deserialize::<RawQuakeEvent>( None) {
        Ok(raw) => Ok( raw.into()),
        Err(e) => {
            let field = match e.kind() {
                csv::ErrorKind::Deserialize { err, .. } => err.field().map(|i| i as usize),
                _ => None
            };
            match field {
                Some(i) if i < 2 => Err( RowError::InvalidCoordinate( FIELDS[i], record[i].to_string())),
                _ => Err( RowError::InvalidRecord( e.to_string()))
            }
        }
    }
}

/// parse a single data row (without line terminator)
pub fn parse_row (line: &str)->std::result::Result<QuakeEvent,RowError> {
    let mut reader = csv_builder().from_reader( line.as_bytes());
    let mut record = StringRecord::new();

    match reader.read_record( &mut record) {
        Ok(true) => event_from_record( record),
        Ok(false) => Err( RowError::MissingField( FIELDS[0])),
        Err(e) => Err( RowError::InvalidRecord( e.to_string()))
    }
}

/// read events from a buffered source. The first line is always skipped as header, the data ends
/// at EOF or the first empty line (the csv reader would silently skip those).
/// Fails on the first malformed row with the (1-based) line number of that row
pub fn read_events (reader: impl BufRead)->Result<Vec<QuakeEvent>> {
    let mut lines = reader.lines();

    if let Some(header) = lines.next() {
        debug!("skipping header: {:?}", header?);
    }

    let mut data = String::new();
    for res in lines {
        let line = res?;
        let line = line.strip_suffix('\r').unwrap_or( line.as_str());
        if line.is_empty() { break }
        data.push_str( line);
        data.push('\n');
    }

    let mut csv_reader = csv_builder().from_reader( data.as_bytes());
    let mut events: Vec<QuakeEvent> = Vec::new();

    for (i,res) in csv_reader.records().enumerate() {
        let record = res?;
        let line = record.position().map( |pos| pos.line() as usize + 1).unwrap_or( i+2); // +1 for header
        let event = event_from_record( record).map_err(|e| QuakeMapError::MalformedRow( line, e))?;
        events.push( event);
    }

    Ok(events)
}

pub fn load_events (path: impl AsRef<Path>)->Result<Vec<QuakeEvent>> {
    let path = path.as_ref();
    let file = File::open( path)?;
    let events = read_events( BufReader::new(file))?;
    info!("loaded {} events from {:?}", events.len(), path);
    Ok(events)
}
