//! Simulator: owns the field, the colonies and the random source, and
//! drives one discrete step at a time.
//!
//! A step runs in two phases. The first evaluates every living colony
//! against the field, the payoff model and its automaton without mutating
//! anything, so any error leaves the population exactly as it was. The
//! second applies the results in creation order and draws the next defect
//! flags from the seeded random source. Only the first phase runs on rayon
//! when the `parallel` feature is enabled; all random draws stay sequential,
//! which keeps parallel and sequential runs identical for the same seed.

use crate::automaton::{Automaton, TransitionTable};
use crate::colony::{birth_vectors, Colony, ColonyUpdate};
use crate::config::SimConfig;
use crate::error::Result;
use crate::field::GrowthField;
use crate::growth::{GrowthContext, GrowthRule, PayoffGrowth};
use crate::metrics::Metrics;
use crate::payoff;
use colonia_data::{PopulationReport, State, Strategy, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// What happened during one call to [`Simulator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSummary {
    /// Index of the step just completed, starting at 1.
    pub step: u64,
    /// Colonies that took part (everything not already dead).
    pub advanced: usize,
    /// Colonies that reached `DEAD` during this step.
    pub deaths: usize,
    /// Colonies that acted on a defect decision.
    pub defections: usize,
    /// Colonies still alive after the step.
    pub living: usize,
}

#[derive(Debug)]
pub struct Simulator {
    field: GrowthField,
    strategy: Strategy,
    prototype: Automaton,
    colonies: Vec<Colony>,
    rng: ChaCha8Rng,
    growth_rule: Box<dyn GrowthRule>,
    parallel: bool,
    step: u64,
    metrics: Metrics,
}

impl Simulator {
    /// Creates an empty simulator. `seed` fixes the random source; `None`
    /// seeds it from entropy.
    pub fn new(
        field: GrowthField,
        strategy: Strategy,
        automaton: Automaton,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut prototype = automaton;
        prototype.reset();
        Self {
            field,
            strategy,
            prototype,
            colonies: Vec::new(),
            rng,
            growth_rule: Box::new(PayoffGrowth::default()),
            parallel: cfg!(feature = "parallel"),
            step: 0,
            metrics: Metrics::new(),
        }
    }

    /// Creates an empty simulator from a raw matrix, which must be square.
    pub fn with_matrix(
        matrix: Vec<Vec<f64>>,
        strategy: Strategy,
        automaton: Automaton,
        seed: Option<u64>,
    ) -> Result<Self> {
        let field = GrowthField::new(matrix)?;
        Ok(Self::new(field, strategy, automaton, seed))
    }

    /// Builds a simulator and spawns `colony.initial_colonies` colonies.
    ///
    /// Without an explicit `field` a uniform one is built from `[world]`.
    pub fn from_config(
        config: &SimConfig,
        table: Arc<TransitionTable>,
        field: Option<GrowthField>,
    ) -> Result<Self> {
        config.validate()?;
        let field = match field {
            Some(field) => field,
            None => GrowthField::uniform(
                config.world.field_size,
                config.world.field_intensity,
                config.world.side_length,
            )?,
        };
        let automaton = Automaton::from_table(
            table,
            State(config.automaton.initial_state),
            State(config.automaton.terminal_state),
        )?;

        let mut sim = Self::new(field, config.colony.strategy, automaton, config.world.seed)
            .with_growth_rule(config.growth.rule.build(config.growth.rate));
        sim.spawn_colonies(config.colony.initial_colonies);

        tracing::info!(
            strategy = %sim.strategy,
            colonies = sim.colonies.len(),
            field_size = sim.field.size(),
            growth_rule = sim.growth_rule.name(),
            "Simulator ready"
        );
        Ok(sim)
    }

    pub fn with_growth_rule(mut self, rule: Box<dyn GrowthRule>) -> Self {
        self.growth_rule = rule;
        self
    }

    /// Chooses between the rayon and the sequential evaluation phase. Has no
    /// effect without the `parallel` feature.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Creates a colony, appends it to the population and returns its id.
    pub fn spawn_colony(&mut self) -> Uuid {
        let (position, growth) = birth_vectors(&mut self.rng);
        let id = Uuid::from_u128(self.rng.gen::<u128>());
        let defects = payoff::draw_defect(self.strategy.propensity(), &mut self.rng);

        let mut automaton = self.prototype.clone();
        automaton.reset();
        self.colonies.push(Colony::new(
            id,
            position,
            growth,
            automaton,
            self.strategy,
            defects,
        ));
        self.metrics.record_birth();

        tracing::debug!(
            colony = %id,
            x = position.x,
            y = position.y,
            defects = defects,
            population = self.colonies.len(),
            "Colony born"
        );
        id
    }

    pub fn spawn_colonies(&mut self, count: usize) -> Vec<Uuid> {
        (0..count).map(|_| self.spawn_colony()).collect()
    }

    /// Harshness of the field at `position`.
    pub fn lookup(&self, position: Vec2) -> Result<f64> {
        self.field.intensity_at(position)
    }

    /// Payoff the colony would receive for its current decision.
    pub fn payoff_for(&self, colony: &Colony) -> Result<f64> {
        payoff::payoff(
            colony.decision(),
            colony.strategy().propensity(),
            self.colonies.len(),
        )
    }

    /// Advances every living colony by exactly one step.
    pub fn step(&mut self) -> Result<StepSummary> {
        let started = Instant::now();
        let population = self.colonies.len();
        let step = self.step + 1;
        let _span = tracing::info_span!("step", step, population).entered();

        let updates = self.plan_updates(population)?;

        let mut summary = StepSummary {
            step,
            ..StepSummary::default()
        };
        for (colony, update) in self.colonies.iter_mut().zip(updates) {
            let Some(update) = update else {
                continue;
            };
            summary.advanced += 1;
            if colony.defects() {
                summary.defections += 1;
            }
            colony.apply(update);

            if colony.is_dead() {
                summary.deaths += 1;
                tracing::warn!(colony = %colony.id(), step, "Colony died");
            } else {
                summary.living += 1;
                let defects = payoff::draw_defect(colony.strategy().propensity(), &mut self.rng);
                colony.set_defects(defects);
            }
        }

        self.step = step;
        self.metrics.record_step(
            started.elapsed(),
            summary.living,
            summary.deaths,
            summary.defections,
        );
        Ok(summary)
    }

    /// Runs `steps` steps and returns the final report.
    pub fn run(&mut self, steps: u64) -> Result<PopulationReport> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(self.report())
    }

    fn plan_updates(&self, population: usize) -> Result<Vec<Option<ColonyUpdate>>> {
        let field = &self.field;
        let rule = self.growth_rule.as_ref();

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return self
                    .colonies
                    .par_iter()
                    .map(|colony| plan_update(colony, field, rule, population))
                    .collect();
            }
        }

        self.colonies
            .iter()
            .map(|colony| plan_update(colony, field, rule, population))
            .collect()
    }

    pub fn report(&self) -> PopulationReport {
        let colonies: Vec<_> = self.colonies.iter().map(Colony::snapshot).collect();
        PopulationReport {
            step: self.step,
            population: colonies.len(),
            living: colonies.iter().filter(|c| !c.dead).count(),
            dead: colonies.iter().filter(|c| c.dead).count(),
            terminal: colonies.iter().filter(|c| c.terminal).count(),
            defecting: colonies.iter().filter(|c| !c.dead && c.defects).count(),
            colonies,
        }
    }

    /// Colonies in creation order, dead ones included.
    pub fn colonies(&self) -> &[Colony] {
        &self.colonies
    }

    pub fn colony(&self, id: Uuid) -> Option<&Colony> {
        self.colonies.iter().find(|c| c.id() == id)
    }

    pub fn population(&self) -> usize {
        self.colonies.len()
    }

    pub fn living(&self) -> usize {
        self.colonies.iter().filter(|c| !c.is_dead()).count()
    }

    /// True when every colony is dead or sitting in the terminal state.
    pub fn is_settled(&self) -> bool {
        !self.colonies.is_empty()
            && self
                .colonies
                .iter()
                .all(|c| c.is_dead() || c.is_terminal())
    }

    pub fn field(&self) -> &GrowthField {
        &self.field
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn automaton(&self) -> &Automaton {
        &self.prototype
    }

    pub fn growth_rule(&self) -> &dyn GrowthRule {
        self.growth_rule.as_ref()
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

fn plan_update(
    colony: &Colony,
    field: &GrowthField,
    rule: &dyn GrowthRule,
    population: usize,
) -> Result<Option<ColonyUpdate>> {
    if colony.is_dead() {
        return Ok(None);
    }
    let intensity = field.intensity_at(colony.position())?;
    let decision = colony.decision();
    let payoff = payoff::payoff(decision, colony.strategy().propensity(), population)?;
    let growth = rule.next_growth(&GrowthContext {
        growth: colony.growth(),
        direction: colony.direction(),
        intensity,
        payoff,
        decision,
    });
    let next_state = colony.automaton().peek(decision.symbol())?;

    tracing::trace!(
        colony = %colony.id(),
        intensity,
        payoff,
        ?decision,
        next_state = %next_state,
        "Colony planned"
    );
    Ok(Some(ColonyUpdate { growth, next_state }))
}
