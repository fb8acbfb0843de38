use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use crate::{config::Config, gateways};
use firespot_core::{
    entities::{facility::Facility, geo::MapPoint, linestring::LineString},
    usecases,
};

#[derive(Parser, Debug)]
#[command(name = "firespot")]
#[command(about = "Locate a fire on a map and look up its surroundings")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: firespot.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve an address with the configured geocoding gateway
    Geocode {
        address: String,
    },
    /// Distance in meters between a location and a facility
    Distance {
        #[arg(long, value_name = "LAT,LNG")]
        from: MapPoint,
        /// Facility geometry, e.g. "LINESTRING (129.05 35.16, 129.06 35.17)"
        #[arg(long, value_name = "WKT")]
        geometry: LineString,
    },
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    let Cli {
        config,
        enable_cors,
        command,
    } = args;
    match command {
        Some(Command::Distance { from, geometry }) => print_distance(from, geometry),
        Some(Command::Geocode { address }) => {
            let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
            print_geocoded(&cfg, &address)
        }
        None => {
            let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
            run_webserver(cfg, enable_cors)
        }
    }
}

fn print_distance(from: MapPoint, geometry: LineString) -> anyhow::Result<()> {
    let facility = Facility {
        name: String::new(),
        geometry,
    };
    let distance = usecases::facility_distance(from, facility)
        .ok_or_else(|| anyhow!("Unable to calculate the distance"))?;
    println!("{:.1}", distance.distance.to_meters());
    Ok(())
}

fn print_geocoded(cfg: &Config, address: &str) -> anyhow::Result<()> {
    let geocoding = gateways::geocoding_gateway(&cfg.geocoding);
    let mut state = cfg.session.initial_state();
    let location = usecases::geocode_address(&*geocoding, &mut state, address, None)?;
    let (lat, lng) = location.pos.to_lat_lng_deg();
    println!("{lat:.6},{lng:.6}");
    Ok(())
}

fn run_webserver(cfg: Config, enable_cors: bool) -> anyhow::Result<()> {
    let geocoding = gateways::geocoding_gateway(&cfg.geocoding);
    let weather = gateways::weather_gateway(cfg.weather.as_ref());
    let enable_cors = enable_cors || cfg.webserver.enable_cors;
    let web_cfg = firespot_webserver::Cfg {
        initial_address: cfg.session.address,
        initial_location: cfg.session.location,
        initial_zoom: cfg.session.zoom,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(firespot_webserver::run(
        enable_cors,
        web_cfg,
        geocoding,
        weather,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}
