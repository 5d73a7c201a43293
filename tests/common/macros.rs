/// Asserts that a colony with the given ID sits in the expected state.
#[macro_export]
macro_rules! assert_colony_state {
    ($sim:expr, $id:expr, $state:expr) => {
        let colony = $sim.colony($id).expect("Colony not found in simulator");
        assert_eq!(
            colony.state(),
            $state,
            "Colony {} is in {} instead of {}",
            $id,
            colony.state(),
            $state
        );
    };
}

/// Asserts that the total population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($sim:expr, $count:expr) => {
        assert_eq!($sim.population(), $count, "Population count mismatch");
    };
}
