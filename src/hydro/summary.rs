use serde::Serialize;
use tracing::debug;

use crate::adapters::decimal::Decimal;
use crate::error::HydroError;
use crate::hydro::builder::SolidBuilder;
use crate::hydro::seawater::seawater;
use crate::hydro::solid::SolidKind;
use crate::hydro::{Fluid, Hydrostatic, Verdict};
use crate::models::Scenario;

/// Compact result for higher-level callers (CLI, API).
///
/// Fields that can be undefined are `None`:
/// - `density_kg_per_m3`: density of the solid
/// - `water_density_kg_per_m3`: seawater density, undefined outside the
///   correlation domain
/// - `buoyancy_kg` and `verdict`: undefined whenever the water density is
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HydrostaticSummary {
    pub kind: SolidKind,
    pub constituents: usize,
    pub temperature_c: Decimal,
    pub salinity_kg_per_kg: Decimal,
    pub volume_m3: Decimal,
    pub mass_kg: Decimal,
    pub density_kg_per_m3: Option<Decimal>,
    pub water_density_kg_per_m3: Option<Decimal>,
    pub buoyancy_kg: Option<Decimal>,
    pub verdict: Option<Verdict>,
}

/// Builds the solid and the seawater described by `scenario` and evaluates
/// them at the scenario temperature.
///
/// Fails for an empty piece list or a negative salinity.
pub fn compute_summary(scenario: &Scenario) -> Result<HydrostaticSummary, HydroError> {
    let solid = scenario
        .pieces
        .iter()
        .cloned()
        .collect::<SolidBuilder>()
        .build()?;
    let water = seawater(scenario.conditions.salinity.clone())?;
    let temperature = &scenario.conditions.temperature;

    let water_density = water.density(temperature);
    let buoyancy = solid.buoyancy_in(&water, temperature);
    let verdict = water_density.as_ref().map(|rho| solid.verdict(rho));
    debug!(
        kind = ?solid.kind(),
        water_density = ?water_density,
        buoyancy = ?buoyancy,
        "evaluated scenario"
    );

    Ok(HydrostaticSummary {
        kind: solid.kind(),
        constituents: solid.constituent_count(),
        temperature_c: temperature.clone(),
        salinity_kg_per_kg: water.salinity().clone(),
        volume_m3: solid.volume(),
        mass_kg: solid.mass(),
        density_kg_per_m3: solid.density(temperature),
        water_density_kg_per_m3: water_density,
        buoyancy_kg: buoyancy,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::decimal::dec;
    use crate::models::{Conditions, Piece};

    fn piece(volume: &str, mass: &str) -> Piece {
        Piece {
            volume: dec(volume),
            mass: dec(mass),
        }
    }

    fn scenario(pieces: Vec<Piece>, temperature: &str, salinity: &str) -> Scenario {
        Scenario {
            pieces,
            conditions: Conditions {
                temperature: dec(temperature),
                salinity: dec(salinity),
            },
        }
    }

    #[test]
    fn wooden_block_floats_in_seawater() {
        let s = scenario(vec![piece("1", "600")], "20", "0.035");
        let summary = compute_summary(&s).unwrap();
        assert_eq!(summary.kind, SolidKind::Homogeneous);
        assert_eq!(summary.constituents, 1);
        assert_eq!(summary.density_kg_per_m3, Some(dec("600")));
        assert_eq!(summary.verdict, Some(Verdict::Floats));
    }

    #[test]
    fn sample_composite_sinks_in_brine() {
        let s = scenario(vec![piece("1", "1000"), piece("0.1", "1500")], "20.5", "0.08");
        let summary = compute_summary(&s).unwrap();
        assert_eq!(summary.kind, SolidKind::Composite);
        assert_eq!(summary.volume_m3, dec("1.1"));
        assert_eq!(summary.mass_kg, dec("2500"));
        assert_eq!(summary.verdict, Some(Verdict::Sinks));
    }

    #[test]
    fn out_of_domain_water_leaves_buoyancy_undefined() {
        let s = scenario(vec![piece("1", "600")], "185", "0.035");
        let summary = compute_summary(&s).unwrap();
        assert_eq!(summary.water_density_kg_per_m3, None);
        assert_eq!(summary.buoyancy_kg, None);
        assert_eq!(summary.verdict, None);
        assert_eq!(summary.density_kg_per_m3, Some(dec("600")));
    }

    #[test]
    fn masses_beyond_any_fixed_width_range_are_summarised() {
        let half = "39614081257132168796771975168";
        let s = scenario(vec![piece("1", half), piece("1", half)], "20", "0.035");
        let summary = compute_summary(&s).unwrap();
        assert_eq!(summary.mass_kg, dec("79228162514264337593543950336"));
        assert_eq!(summary.density_kg_per_m3, Some(dec(half)));
        assert_eq!(summary.verdict, Some(Verdict::Sinks));
        assert!(summary.buoyancy_kg.is_some());
    }

    #[test]
    fn invalid_inputs_fail() {
        let empty = scenario(Vec::new(), "20", "0.035");
        assert_eq!(compute_summary(&empty), Err(HydroError::EmptyBuilder));

        let salty = scenario(vec![piece("1", "1")], "20", "-0.01");
        assert_eq!(
            compute_summary(&salty),
            Err(HydroError::InvalidSalinity(dec("-0.01")))
        );
    }
}
