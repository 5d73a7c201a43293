use serde::{Deserialize, Serialize};
use std::fmt;

/// Automaton state identifier.
///
/// `State::DEAD` is reserved: an automaton that reaches it has left the
/// defined state space and never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub i32);

impl State {
    pub const DEAD: State = State(-1);

    #[inline]
    pub fn is_dead(self) -> bool {
        self == Self::DEAD
    }

    pub fn morphology(self) -> Option<Morphology> {
        Morphology::from_state(self)
    }
}

impl From<i32> for State {
    fn from(value: i32) -> Self {
        State(value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dead() {
            f.pad("DEAD")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

/// Morphological phase of a colony, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Morphology {
    Initial,
    CompactStructure,
    DenseBranching,
    MeagerlySpacedBranching,
    SparseBranching,
    Dead,
}

impl Morphology {
    pub fn from_state(state: State) -> Option<Self> {
        match state.0 {
            -1 => Some(Morphology::Dead),
            0 => Some(Morphology::Initial),
            1 => Some(Morphology::CompactStructure),
            2 => Some(Morphology::DenseBranching),
            3 => Some(Morphology::MeagerlySpacedBranching),
            4 => Some(Morphology::SparseBranching),
            5 => Some(Morphology::Dead),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Morphology::Initial => "Initial",
            Morphology::CompactStructure => "Compact Structure",
            Morphology::DenseBranching => "Dense Branching",
            Morphology::MeagerlySpacedBranching => "Meagerly-Spaced Branching",
            Morphology::SparseBranching => "Sparse Branching",
            Morphology::Dead => "Dead",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Morphology::Initial => "I",
            Morphology::CompactStructure => "CS",
            Morphology::DenseBranching => "DB",
            Morphology::MeagerlySpacedBranching => "MSB",
            Morphology::SparseBranching => "SB",
            Morphology::Dead => "DS",
        }
    }
}

impl fmt::Display for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
