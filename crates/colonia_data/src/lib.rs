pub mod data;

pub use data::geometry::Vec2;
pub use data::report::{ColonySnapshot, PopulationReport};
pub use data::state::{Morphology, State};
pub use data::strategy::{Decision, Strategy, Symbol};
