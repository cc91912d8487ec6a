//! Property tests for solid aggregation.

use hydrostat::adapters::decimal::{ratio, round};
use hydrostat::{
    Decimal, DecimalConst, Hydrostatic, Solid, SolidBuilder, SolidKind, compute_summary,
    parse_decimal,
};
use hydrostat::{Conditions, Piece, Scenario};
use proptest::prelude::*;

fn dec(text: &str) -> Decimal {
    parse_decimal(text).unwrap()
}

/// Positive decimal with up to three fractional digits.
fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000, 0i64..=3).prop_map(|(digits, scale)| DecimalConst::new(digits, scale).value())
}

/// Positive decimal spanning forty orders of magnitude.
fn wide_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000, -20i64..=20).prop_map(|(digits, scale)| DecimalConst::new(digits, scale).value())
}

fn pieces() -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    proptest::collection::vec((quantity(), quantity()), 1..=8)
}

fn build(pairs: &[(Decimal, Decimal)]) -> Solid {
    pairs
        .iter()
        .fold(SolidBuilder::new(), |b, (v, m)| b.add(v.clone(), m.clone()))
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: volume and mass of the built solid are exact sums.
    #[test]
    fn property_totals_are_exact_sums(pairs in pieces()) {
        let solid = build(&pairs);
        let volume: Decimal = pairs.iter().map(|(v, _)| v).sum();
        let mass: Decimal = pairs.iter().map(|(_, m)| m).sum();
        prop_assert_eq!(solid.volume(), volume);
        prop_assert_eq!(solid.mass(), mass);
    }

    /// PROPERTY: sums stay exact across magnitudes no fixed-width decimal holds.
    #[test]
    fn property_wide_sums_lose_no_digits(
        pairs in proptest::collection::vec((wide_quantity(), wide_quantity()), 2..=6)
    ) {
        let solid = build(&pairs);
        let rest: Decimal = pairs[1..].iter().map(|(v, _)| v).sum();
        prop_assert_eq!(solid.volume() - rest, pairs[0].0.clone());
    }

    /// PROPERTY: one pair is homogeneous, more pairs are composite.
    #[test]
    fn property_variant_follows_pair_count(pairs in pieces()) {
        let solid = build(&pairs);
        let expected = if pairs.len() == 1 { SolidKind::Homogeneous } else { SolidKind::Composite };
        prop_assert_eq!(solid.kind(), expected);
        prop_assert_eq!(solid.constituent_count(), pairs.len());
    }

    /// PROPERTY: composite density is the mass-weighted constituent density.
    #[test]
    fn property_density_is_mass_weighted(pairs in pieces(), t in 0i64..180) {
        let solid = build(&pairs);
        let temperature = Decimal::from(t);
        let total = solid.mass();
        let expected = round(pairs.iter().fold(Decimal::from(0), |acc, (v, m)| {
            let share = ratio(m, &total).unwrap();
            acc + round(share * ratio(m, v).unwrap())
        }));
        prop_assert_eq!(solid.density(&temperature), Some(expected));
    }

    /// PROPERTY: buoyancy is `ρ·volume − mass` for any fluid density.
    #[test]
    fn property_buoyancy_is_displacement_minus_mass(pairs in pieces(), rho in quantity()) {
        let solid = build(&pairs);
        prop_assert_eq!(solid.buoyancy(&rho), &rho * solid.volume() - solid.mass());
    }
}

#[test]
fn unit_cube_of_water_is_neutral() {
    let solid = SolidBuilder::new().add(dec("1"), dec("1000")).build().unwrap();
    for t in ["0", "37.5", "500"] {
        assert_eq!(solid.density(&dec(t)), Some(dec("1000")));
    }
    assert_eq!(solid.buoyancy(&dec("1000")), dec("0"));
}

#[test]
fn two_blocks_compose() {
    let solid = SolidBuilder::new()
        .add(dec("1"), dec("2"))
        .add(dec("3"), dec("4"))
        .build()
        .unwrap();
    assert_eq!(solid.volume(), dec("4"));
    assert_eq!(solid.mass(), dec("6"));
    assert_eq!(solid.buoyancy(&dec("1000")), dec("3994"));
}

#[test]
fn summary_of_huge_pieces_does_not_panic() {
    let half = dec("39614081257132168796771975168");
    let scenario = Scenario {
        pieces: vec![
            Piece { volume: dec("1"), mass: half.clone() },
            Piece { volume: dec("1"), mass: half.clone() },
        ],
        conditions: Conditions::default(),
    };
    let summary = compute_summary(&scenario).unwrap();
    assert_eq!(summary.mass_kg, &half + &half);
}
