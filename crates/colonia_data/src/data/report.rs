use super::geometry::Vec2;
use super::state::{Morphology, State};
use super::strategy::Strategy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation view of a single colony.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColonySnapshot {
    pub id: Uuid,
    pub position: Vec2,
    pub growth: Vec2,
    pub state: State,
    pub morphology: Option<Morphology>,
    pub strategy: Strategy,
    pub defects: bool,
    pub dead: bool,
    pub terminal: bool,
    pub steps: u64,
}

impl ColonySnapshot {
    /// Morphology label, falling back to the raw state for unlabelled states.
    pub fn label(&self) -> String {
        match self.morphology {
            Some(m) => m.label().to_string(),
            None => format!("state {}", self.state),
        }
    }
}

/// Aggregated view of a whole population after a step.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PopulationReport {
    /// Number of completed simulation steps.
    pub step: u64,
    pub population: usize,
    pub living: usize,
    pub dead: usize,
    pub terminal: usize,
    pub defecting: usize,
    pub colonies: Vec<ColonySnapshot>,
}

impl PopulationReport {
    /// True once no colony can make further progress.
    pub fn is_settled(&self) -> bool {
        self.population > 0 && self.colonies.iter().all(|c| c.dead || c.terminal)
    }
}
