mod common;

use colonia_lib::{GrowthField, SimError, State, Strategy};
use common::SimBuilder;

#[test]
fn test_spawn_keeps_creation_order() {
    let mut sim = SimBuilder::new().with_colonies(3).build();
    let id = sim.spawn_colony();
    assert_population!(sim, 4);
    assert_eq!(sim.colonies().last().map(|c| c.id()), Some(id));
    assert_colony_state!(sim, id, State(0));

    for colony in sim.colonies() {
        let position = colony.position();
        assert!((position.length() - 1.0).abs() < 1e-9, "Birth on unit circle");
        let ratio = colony.growth().length() / position.length();
        assert!(ratio > 1.0 - 1e-9 && ratio < 1.5, "Growth scale {ratio}");
    }
}

#[test]
fn test_cooperators_advance_together() {
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::A)
        .with_colonies(3)
        .build();
    let summary = sim.step().unwrap();
    assert_eq!(summary.advanced, 3);
    assert_eq!(summary.defections, 0);
    assert_eq!(summary.living, 3);
    for colony in sim.colonies() {
        assert_eq!(colony.state(), State(1));
        assert!(!colony.defects());
    }
    assert!(!sim.is_settled());
}

#[test]
fn test_defectors_die_and_stay_dead() {
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::E)
        .with_colonies(3)
        .build();
    let summary = sim.step().unwrap();
    assert_eq!(summary.deaths, 3);
    assert_eq!(summary.defections, 3);
    assert!(sim.is_settled());
    assert_population!(sim, 3);

    let before = sim.report();
    let summary = sim.step().unwrap();
    assert_eq!(summary.advanced, 0);
    assert_eq!(summary.deaths, 0);
    let after = sim.report();
    assert_eq!(after.step, before.step + 1);
    assert_eq!(after.colonies, before.colonies, "Dead colonies must not change");
}

#[test]
fn test_lone_defector_fails_without_side_effects() {
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::E)
        .with_colonies(1)
        .build();
    let before = sim.report();

    let err = sim.step().unwrap_err();
    assert!(matches!(
        err,
        SimError::UndefinedPayoff { kind: "defect", population: 1, .. }
    ));
    assert_eq!(sim.step_count(), 0);
    assert_eq!(sim.report(), before);
}

#[test]
fn test_lone_cooperator_is_fine() {
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::A)
        .with_colonies(1)
        .build();
    assert!(sim.step().is_ok());
    assert_eq!(sim.colonies()[0].state(), State(1));
}

#[test]
fn test_colony_outside_field_fails_step() {
    let field = GrowthField::uniform(3, 1.0, 0.5).unwrap();
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::A)
        .with_colonies(2)
        .with_field(field)
        .build();
    let before = sim.report();

    let err = sim.step().unwrap_err();
    assert!(matches!(err, SimError::OutOfBounds { size: 3, .. }));
    assert_eq!(sim.report(), before);
}

#[test]
fn test_metrics_track_run() {
    let mut sim = SimBuilder::new()
        .with_strategy(Strategy::E)
        .with_colonies(4)
        .build();
    sim.run(2).unwrap();
    let metrics = sim.metrics();
    assert_eq!(metrics.births(), 4);
    assert_eq!(metrics.step_count(), 2);
    assert_eq!(metrics.deaths(), 4);
}
