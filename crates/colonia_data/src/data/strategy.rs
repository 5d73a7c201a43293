use serde::{Deserialize, Serialize};
use std::fmt;

/// Input alphabet of the morphology automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "e")]
    E,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D, Symbol::E];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Symbol::A),
            'b' => Some(Symbol::B),
            'c' => Some(Symbol::C),
            'd' => Some(Symbol::D),
            'e' => Some(Symbol::E),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'a',
            Symbol::B => 'b',
            Symbol::C => 'c',
            Symbol::D => 'd',
            Symbol::E => 'e',
        }
    }

    /// Position of the symbol in [`Symbol::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Evolutionary-game disposition adopted by every colony of a run.
///
/// Each variant carries a fixed cooperation propensity, from the full
/// cooperator `A` down to the full defector `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[default]
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "e")]
    E,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::A,
        Strategy::B,
        Strategy::C,
        Strategy::D,
        Strategy::E,
    ];

    /// Probability in `[0, 1]` that a colony cooperates on a given step.
    pub fn propensity(self) -> f64 {
        match self {
            Strategy::A => 1.0,
            Strategy::B => 0.75,
            Strategy::C => 0.5,
            Strategy::D => 0.25,
            Strategy::E => 0.0,
        }
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Strategy::A => Symbol::A,
            Strategy::B => Symbol::B,
            Strategy::C => Symbol::C,
            Strategy::D => Symbol::D,
            Strategy::E => Symbol::E,
        }
    }

    /// Parses a single-character label such as `"c"`. Surrounding whitespace
    /// is ignored, case is not.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c).map(Strategy::from),
            _ => None,
        }
    }
}

impl From<Symbol> for Strategy {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::A => Strategy::A,
            Symbol::B => Strategy::B,
            Symbol::C => Strategy::C,
            Symbol::D => Strategy::D,
            Symbol::E => Strategy::E,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of a colony's per-step cooperate/defect draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Cooperate,
    Defect,
}

impl Decision {
    pub fn from_defect(defects: bool) -> Self {
        if defects {
            Decision::Defect
        } else {
            Decision::Cooperate
        }
    }

    pub fn defects(self) -> bool {
        matches!(self, Decision::Defect)
    }

    /// Input symbol fed to the automaton: the pure cooperator and pure
    /// defector ends of the alphabet.
    pub fn symbol(self) -> Symbol {
        match self {
            Decision::Cooperate => Symbol::A,
            Decision::Defect => Symbol::E,
        }
    }
}
