use bigdecimal::RoundingMode;
use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::adapters::decimal::{Decimal, parse};
use crate::error::AppError;
use crate::hydro::summary::HydrostaticSummary;
use crate::models::{Conditions, Piece, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hydrostatics of solids in seawater (optional JSON output)", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long = "piece",
        value_name = "VOLUME:MASS",
        help = "Volume (m^3) and mass (kg) of one piece; repeat for composite solids (overrides --input)"
    )]
    pieces: Vec<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON scenario document with pieces and optional conditions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(long, value_name = "CELSIUS", value_parser = parse_number, help = "Water temperature in °C")]
    temperature: Option<Decimal>,
    #[arg(long, value_name = "KG_PER_KG", value_parser = parse_number, help = "Water salinity in kg/kg")]
    salinity: Option<Decimal>,
    #[arg(long, value_name = "LEVEL", default_value = "warn", help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: String,
}

fn parse_number(value: &str) -> Result<Decimal, String> {
    parse(value).map_err(|e| e.to_string())
}

fn parse_piece(value: &str) -> Result<Piece, AppError> {
    let invalid = || AppError::InvalidPiece {
        value: value.to_string(),
    };
    let (volume, mass) = value.split_once(':').ok_or_else(invalid)?;
    Ok(Piece {
        volume: parse(volume).map_err(|_| invalid())?,
        mass: parse(mass).map_err(|_| invalid())?,
    })
}

fn parse_scenario_doc(doc: &str) -> Result<Scenario, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseScenarioJson { source })
}

pub fn parse_scenario(args: &Args) -> Result<Scenario, AppError> {
    let scenario = match (args.pieces.is_empty(), &args.input) {
        (false, _) => Scenario {
            pieces: args
                .pieces
                .iter()
                .map(|p| parse_piece(p))
                .collect::<Result<_, _>>()?,
            conditions: Conditions::default(),
        },
        (true, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_scenario_doc(&s)?
        }
        (true, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_scenario_doc(&s)?
        }
        (true, None) => return Err(AppError::MissingInputData),
    };

    Ok(Scenario {
        conditions: scenario
            .conditions
            .with_overrides(args.temperature.clone(), args.salinity.clone()),
        ..scenario
    })
}

fn or_undefined(value: Option<&Decimal>, dp: i64) -> String {
    value
        .map(|v| v.with_scale_round(dp, RoundingMode::HalfUp).to_string())
        .unwrap_or_else(|| "undefined".to_string())
}

pub fn print_output(out: &HydrostaticSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("Solid: {:?} ({} pieces)", out.kind, out.constituents);
        println!("Volume: {} m^3", out.volume_m3);
        println!("Mass: {} kg", out.mass_kg);
        println!("Density: {} kg/m^3", or_undefined(out.density_kg_per_m3.as_ref(), 3));
        println!(
            "Water density ({} kg/kg, {} °C): {} kg/m^3",
            out.salinity_kg_per_kg,
            out.temperature_c,
            or_undefined(out.water_density_kg_per_m3.as_ref(), 3)
        );
        println!("Buoyancy: {} kg", or_undefined(out.buoyancy_kg.as_ref(), 3));
        match out.verdict {
            Some(v) => println!("Verdict: {}", v),
            None => println!("Verdict: undefined"),
        }
    }

    Ok(())
}
