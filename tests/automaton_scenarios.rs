mod common;

use colonia_lib::{Automaton, SimError, State, Symbol, TransitionTable};
use common::scenario_table;
use std::sync::Arc;

fn scenario() -> Automaton {
    Automaton::from_table(scenario_table(), State(0), State(5)).unwrap()
}

#[test]
fn test_cooperate_then_defect_reaches_terminal() {
    let mut automaton = scenario();
    assert_eq!(automaton.step(Symbol::A).unwrap(), State(1));
    assert_eq!(automaton.step(Symbol::E).unwrap(), State(5));
    assert!(automaton.is_terminal());
    assert!(!automaton.is_dead());
}

#[test]
fn test_early_defect_is_fatal() {
    let mut automaton = scenario();
    assert_eq!(automaton.step(Symbol::E).unwrap(), State::DEAD);
    assert!(automaton.is_dead());
    for symbol in Symbol::ALL {
        assert_eq!(automaton.step(symbol).unwrap(), State::DEAD);
    }
}

#[test]
fn test_run_string_input() {
    let mut automaton = scenario();
    assert_eq!(automaton.run("aabe").unwrap(), State(5));
    automaton.reset();
    assert_eq!(automaton.current(), State(0));
    assert_eq!(automaton.run("").unwrap(), State(0));
}

#[test]
fn test_unknown_symbol_keeps_state() {
    let mut automaton = scenario();
    automaton.step(Symbol::A).unwrap();
    let err = automaton.step_char('z').unwrap_err();
    assert!(matches!(
        err,
        SimError::UnknownTransition { symbol: 'z', .. }
    ));
    assert_eq!(automaton.current(), State(1));
}

#[test]
fn test_reference_table_walk() {
    let table = colonia_io::load_table_csv(common::default_table_path()).unwrap();
    let mut automaton = Automaton::from_table(Arc::new(table), State(0), State(5)).unwrap();

    assert_eq!(automaton.run("dd").unwrap(), State(3));
    assert_eq!(automaton.morphology().map(|m| m.abbreviation()), Some("MSB"));
    assert_eq!(automaton.run("ee").unwrap(), State(5));
    assert!(automaton.is_terminal());
    assert_eq!(automaton.step(Symbol::E).unwrap(), State::DEAD);
}

#[test]
fn test_initial_must_be_declared() {
    let err = Automaton::from_table(scenario_table(), State(2), State(5)).unwrap_err();
    assert_eq!(err, SimError::UndeclaredState(State(2)));
}

#[test]
fn test_incomplete_table_rejected() {
    let err = TransitionTable::from_entries(
        vec![State(0)],
        [((State(0), Symbol::A), State(0))],
    )
    .unwrap_err();
    assert!(matches!(err, SimError::UnknownTransition { .. }));
}
