//! Core data structures for the Colonia simulation.

pub mod geometry;
pub mod report;
pub mod state;
pub mod strategy;
