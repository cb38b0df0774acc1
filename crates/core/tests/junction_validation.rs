//! Scalar estimator validation: the concrete single-transistor scenario,
//! max-vs-average ordering, mirror-series decay, and per-source reports.

use approx::assert_relative_eq;
use baseplate_core::{
    case_temperature, junction_temperature, Baseplate, Celsius, Estimate, HeatSource, MirrorMode,
    Substrate, ViewConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// One 25 W transistor, 4.1 mm × 9.5 mm, centered in a 20 × 20 mm view at
/// 1 point/mm, k = 1.0 W/(m·K), 1 mm thickness, ambient 25 °C, Rth 4.8 °C/W.
fn reference_plate(mode: MirrorMode) -> Baseplate {
    let substrate = Substrate::new(1.0, 1.0, Celsius::new(25.0)).unwrap();
    let view = ViewConfig::new(20.0, 20.0, 1.0).unwrap();
    let mut plate = Baseplate::new(substrate, view);
    plate
        .add_source(
            HeatSource::new(25.0, 10.0, 10.0)
                .unwrap()
                .with_mirror_mode(mode),
        )
        .unwrap();
    plate
}

#[test]
fn test_reference_scenario_is_deterministic() {
    init_tracing();
    let plate = reference_plate(MirrorMode::AreaAccurate);
    let ambient = plate.substrate().ambient();

    let first = plate.assemble_field(0).unwrap();
    let second = plate.assemble_field(0).unwrap();
    let source = &plate.sources()[0];

    let tj_first = junction_temperature(&first, source, Estimate::Max, ambient).unwrap();
    let tj_second = junction_temperature(&second, source, Estimate::Max, ambient).unwrap();
    assert_eq!(
        tj_first, tj_second,
        "repeated assembly must reproduce the junction estimate exactly"
    );

    // Junction must exceed ambient plus the conduction rise alone
    // (25 °C + 4.8 °C/W · 25 W = 145 °C) by the spreading contribution.
    assert!(tj_first.value().is_finite());
    assert!(
        tj_first.value() > 145.0,
        "junction estimate {tj_first} should exceed ambient + Rth·P"
    );

    // Pin the scenario to its closed-form value. The hottest grid point is
    // the footprint center, where the asinh combination collapses to
    //   rise = P/(2π·k·W·L·1e-9) · 2e-3·(W·asinh(L/W) + L·asinh(W/L))
    //        ≈ 1.0215336e8 · 2.0896611e-2 ≈ 2.1346591e6 K
    // so Tj(max) = 145 + rise.
    assert_relative_eq!(
        tj_first.value(),
        145.0 + 2.1346591e6,
        max_relative = 1e-6
    );
}

#[test]
fn test_mirror_modes_agree_with_zero_mirrors() {
    // With no mirror sources requested the modes differ in nothing at all:
    // both reduce to the analytical plate contribution.
    let accurate = reference_plate(MirrorMode::AreaAccurate);
    let fast = reference_plate(MirrorMode::PointApproximate);
    let ambient = accurate.substrate().ambient();

    let fa = accurate.assemble_field(0).unwrap();
    let fp = fast.assemble_field(0).unwrap();
    assert_eq!(fa.as_slice(), fp.as_slice());

    let tj_a = junction_temperature(&fa, &accurate.sources()[0], Estimate::Max, ambient).unwrap();
    let tj_p = junction_temperature(&fp, &fast.sources()[0], Estimate::Max, ambient).unwrap();
    assert_eq!(tj_a, tj_p);
}

#[test]
fn test_max_estimate_never_below_average() {
    for mirrors in 0..=2 {
        let plate = reference_plate(MirrorMode::AreaAccurate);
        let field = plate.assemble_field(mirrors).unwrap();
        let source = &plate.sources()[0];

        let max = case_temperature(&field, source, Estimate::Max).unwrap();
        let avg = case_temperature(&field, source, Estimate::Average).unwrap();
        assert!(
            max >= avg,
            "max {max} must dominate average {avg} at {mirrors} mirrors"
        );
    }
}

#[test]
fn test_mirror_increments_decay_monotonically() {
    init_tracing();
    // The N-th image sits at depth 2·N·h, so each additional image moves
    // a fixed observation point by no more than the one before it.
    let plate = reference_plate(MirrorMode::PointApproximate);

    let mut previous = plate.assemble_field(0).unwrap();
    let mut last_increment = f64::INFINITY;
    for n in 1..=5 {
        let current = plate.assemble_field(n).unwrap();
        let increment = (current.get(10, 10) - previous.get(10, 10)).abs();
        assert!(
            increment <= last_increment,
            "increment of mirror {n} ({increment}) exceeds that of mirror {} ({last_increment})",
            n - 1
        );
        last_increment = increment;
        previous = current;
    }
}

#[test]
fn test_junction_formula_composition() {
    let plate = reference_plate(MirrorMode::AreaAccurate);
    let ambient = plate.substrate().ambient();
    let field = plate.assemble_field(1).unwrap();
    let source = &plate.sources()[0];

    let case_rise = case_temperature(&field, source, Estimate::Average).unwrap();
    let junction = junction_temperature(&field, source, Estimate::Average, ambient).unwrap();
    assert_relative_eq!(
        junction.value(),
        case_rise + 25.0 + 4.8 * 25.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_source_reports_cover_every_source() {
    let substrate = Substrate::new(200.0, 2.0, Celsius::new(40.0)).unwrap();
    let view = ViewConfig::new(40.0, 40.0, 1.0).unwrap();
    let mut plate = Baseplate::new(substrate, view);
    let a = plate
        .add_source(HeatSource::new(10.0, 14.0, 20.0).unwrap())
        .unwrap();
    let b = plate
        .add_source(HeatSource::new(30.0, 26.0, 20.0).unwrap())
        .unwrap();

    let field = plate.assemble_field(1).unwrap();
    let reports = plate.source_reports(&field).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].id, a);
    assert_eq!(reports[1].id, b);

    for report in &reports {
        assert!(report.rise_max >= report.rise_avg);
        assert_eq!(report.case_avg, Celsius::new(40.0) + report.rise_avg);
        assert_eq!(report.case_max, Celsius::new(40.0) + report.rise_max);
        // Subtracting ambient back out of the case temperature recovers
        // the reported rise
        assert_relative_eq!(
            report.case_max - Celsius::new(40.0),
            report.rise_max,
            max_relative = 1e-12
        );
    }
    // The hotter package must report the higher peak rise
    assert!(reports[1].rise_max > reports[0].rise_max);

    let junctions = plate.junction_temperatures(&field, Estimate::Max).unwrap();
    assert_eq!(junctions.len(), 2);
    assert_relative_eq!(
        junctions[0].value(),
        reports[0].case_max.value() + 4.8 * 10.0,
        max_relative = 1e-12
    );
}
