pub mod macros;

use colonia_lib::{Automaton, GrowthField, SimConfig, Simulator, State, Strategy, TransitionTable};
use std::path::PathBuf;
use std::sync::Arc;

/// The table shipped in `definitions/`.
#[allow(dead_code)]
pub fn default_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("definitions/dfa1.csv")
}

/// States {0, 1, 5} with Q0 = 0 and F = 5: `a` moves 0 -> 1, `e` moves
/// 1 -> 5, `e` kills from 0.
#[allow(dead_code)]
pub fn scenario_table() -> Arc<TransitionTable> {
    let s = State;
    Arc::new(
        TransitionTable::from_rows([
            (s(0), [s(1), s(0), s(0), s(0), s(-1)]),
            (s(1), [s(1), s(1), s(1), s(1), s(5)]),
            (s(5), [s(5), s(5), s(5), s(5), s(5)]),
        ])
        .expect("scenario table is complete"),
    )
}

#[allow(dead_code)]
pub struct SimBuilder {
    config: SimConfig,
    table: Arc<TransitionTable>,
    field: Option<GrowthField>,
    parallel: Option<bool>,
}

#[allow(dead_code)]
impl SimBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.seed = Some(0);
        config.colony.initial_colonies = 0;
        Self {
            config,
            table: scenario_table(),
            field: None,
            parallel: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.colony.strategy = strategy;
        self
    }

    pub fn with_colonies(mut self, count: usize) -> Self {
        self.config.colony.initial_colonies = count;
        self
    }

    pub fn with_table(mut self, table: Arc<TransitionTable>, initial: i32, terminal: i32) -> Self {
        self.table = table;
        self.config.automaton.initial_state = initial;
        self.config.automaton.terminal_state = terminal;
        self
    }

    pub fn with_field(mut self, field: GrowthField) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn automaton(&self) -> Automaton {
        Automaton::from_table(
            self.table.clone(),
            State(self.config.automaton.initial_state),
            State(self.config.automaton.terminal_state),
        )
        .expect("builder automaton is valid")
    }

    pub fn build(self) -> Simulator {
        let mut sim = Simulator::from_config(&self.config, self.table, self.field)
            .expect("Failed to create simulator in test builder");
        if let Some(parallel) = self.parallel {
            sim.set_parallel(parallel);
        }
        sim
    }
}
