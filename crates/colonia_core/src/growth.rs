//! Per-step growth vector update rules.
//!
//! Every rule keeps the growth vector on the colony's birth direction; only
//! its magnitude changes.

use colonia_data::{Decision, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs available to a growth rule for one colony and one step.
#[derive(Debug, Clone, Copy)]
pub struct GrowthContext {
    pub growth: Vec2,
    /// Unit vector along the birth position.
    pub direction: Vec2,
    pub intensity: f64,
    pub payoff: f64,
    pub decision: Decision,
}

/// Strategy for producing the next growth vector.
pub trait GrowthRule: Send + Sync + fmt::Debug {
    fn next_growth(&self, ctx: &GrowthContext) -> Vec2;

    fn name(&self) -> &str;
}

/// Extends the growth vector by `rate * payoff / (1 + intensity)` along the
/// birth direction. Harsher cells slow growth down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffGrowth {
    pub rate: f64,
}

impl Default for PayoffGrowth {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

impl GrowthRule for PayoffGrowth {
    fn next_growth(&self, ctx: &GrowthContext) -> Vec2 {
        let delta = self.rate * ctx.payoff / (1.0 + ctx.intensity);
        ctx.growth + ctx.direction * delta
    }

    fn name(&self) -> &str {
        "payoff"
    }
}

/// Leaves the growth vector untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticGrowth;

impl GrowthRule for StaticGrowth {
    fn next_growth(&self, ctx: &GrowthContext) -> Vec2 {
        ctx.growth
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Config-level selector for the shipped rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthRuleKind {
    #[default]
    Payoff,
    Static,
}

impl GrowthRuleKind {
    pub fn build(self, rate: f64) -> Box<dyn GrowthRule> {
        match self {
            GrowthRuleKind::Payoff => Box::new(PayoffGrowth { rate }),
            GrowthRuleKind::Static => Box::new(StaticGrowth),
        }
    }
}
