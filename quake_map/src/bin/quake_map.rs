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

use anyhow::Result;
use clap::Parser;
use tracing::error;
use quake_map::{create_quake_map, load_config, MapConfig, output::{save_png, show}};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "plot earthquake events colored by week on a Mercator base map")]
pub struct Args {
    /// RON file with map layout overrides
    #[arg(short,long)]
    pub config: Option<String>,

    /// output PNG file
    #[arg(short,long, default_value = "earthquake_map.png")]
    pub output: String,

    /// only save the map, don't open it in a viewer
    #[arg(long)]
    pub no_show: bool,

    /// tab separated event file (lon, lat, date) with one header line
    #[arg(default_value = "earthquake_id_jan15.txt")]
    pub input: String,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Err(e) = run( &args) {
        error!("failed to create map: {e}");
        return Err(e)
    }
    Ok(())
}

fn run (args: &Args)->Result<()> {
    let config: MapConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => MapConfig::default()
    };

    let (img, _stats) = create_quake_map( &args.input, &config)?;
    save_png( &img, &args.output, config.figure.dpi)?;

    if !args.no_show {
        show( &args.output)?;
    }

    Ok(())
}
