//! Headless driver: builds a simulator from config plus command-line
//! overrides, steps it, and prints each colony's morphology after every step.

use anyhow::{Context, Result};
use colonia_core::{SimConfig, Simulator, TransitionTable};
use colonia_data::{PopulationReport, Strategy};
use colonia_io::{append_report_jsonl, load_field_json, load_table_csv, write_report_json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a run needs besides the config file itself.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: PathBuf,
    pub table: PathBuf,
    pub field: Option<PathBuf>,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
    pub steps: Option<u64>,
    pub colonies: Option<usize>,
    /// Final report, pretty JSON.
    pub report: Option<PathBuf>,
    /// Per-step reports, JSON Lines.
    pub log: Option<PathBuf>,
}

/// Loads the config file and applies command-line overrides on top.
pub fn resolve_config(opts: &RunOptions) -> Result<SimConfig> {
    let mut config = SimConfig::load(&opts.config)
        .with_context(|| format!("loading config {}", opts.config.display()))?;
    if let Some(strategy) = opts.strategy {
        config.colony.strategy = strategy;
    }
    if let Some(seed) = opts.seed {
        config.world.seed = Some(seed);
    }
    if let Some(steps) = opts.steps {
        config.run.steps = steps;
    }
    if let Some(colonies) = opts.colonies {
        config.colony.initial_colonies = colonies;
    }
    config.validate()?;
    Ok(config)
}

pub fn build_simulator(opts: &RunOptions, config: &SimConfig) -> Result<Simulator> {
    let table = load_table_csv(&opts.table)?;
    let field = opts
        .field
        .as_ref()
        .map(|path| load_field_json(path, config.world.side_length))
        .transpose()?;
    let sim = Simulator::from_config(config, Arc::new(table), field)?;
    Ok(sim)
}

/// Steps `sim` up to `config.run.steps` times, stopping early once every
/// colony is dead or terminal. Any simulation error ends the run.
pub fn drive<W: Write>(
    sim: &mut Simulator,
    config: &SimConfig,
    log: Option<&Path>,
    out: &mut W,
) -> Result<PopulationReport> {
    writeln!(
        out,
        "strategy {} ({:.2} cooperation), {} colonies",
        sim.strategy(),
        sim.strategy().propensity(),
        sim.population()
    )?;

    for _ in 0..config.run.steps {
        if sim.is_settled() {
            break;
        }
        let summary = sim
            .step()
            .with_context(|| format!("step {} failed", sim.step_count() + 1))?;
        let report = sim.report();

        writeln!(
            out,
            "step {}: {} living, {} dead, {} terminal, {} defected",
            summary.step, report.living, report.dead, report.terminal, summary.defections
        )?;
        if config.run.report_every > 0 && summary.step % config.run.report_every == 0 {
            write_colonies(&report, out)?;
        }
        if let Some(path) = log {
            append_report_jsonl(path, &report)
                .with_context(|| format!("appending to {}", path.display()))?;
        }
    }

    let report = sim.report();
    if report.is_settled() {
        writeln!(out, "settled after {} steps", report.step)?;
    }
    tracing::info!(
        steps = report.step,
        living = report.living,
        dead = report.dead,
        deaths = sim.metrics().deaths(),
        elapsed_ms = sim.metrics().elapsed().as_millis() as u64,
        "Run finished"
    );
    Ok(report)
}

fn write_colonies<W: Write>(report: &PopulationReport, out: &mut W) -> Result<()> {
    for colony in &report.colonies {
        let id = colony.id.simple().to_string();
        writeln!(
            out,
            "  {} {:<26} pos ({:+.3}, {:+.3}) growth {:.3}{}",
            &id[..8],
            colony.label(),
            colony.position.x,
            colony.position.y,
            colony.growth.length(),
            if colony.defects { " defect" } else { "" }
        )?;
    }
    Ok(())
}

/// Full `run` command.
pub fn run<W: Write>(opts: &RunOptions, out: &mut W) -> Result<PopulationReport> {
    let config = resolve_config(opts)?;
    let mut sim = build_simulator(opts, &config)?;
    let report = drive(&mut sim, &config, opts.log.as_deref(), out)?;
    if let Some(path) = &opts.report {
        write_report_json(path, &report)
            .with_context(|| format!("writing report {}", path.display()))?;
    }
    Ok(report)
}

/// `check-table` command: loads a table and lists its rows.
pub fn check_table<W: Write>(path: &Path, out: &mut W) -> Result<TransitionTable> {
    let table = load_table_csv(path)?;
    writeln!(out, "{}: {} states", path.display(), table.states().len())?;
    for &state in table.states() {
        let label = state
            .morphology()
            .map(|m| m.abbreviation())
            .unwrap_or("-");
        write!(out, "  {state:>3} {label:<3}")?;
        for symbol in colonia_data::Symbol::ALL {
            write!(out, " {symbol}->{}", table.transition(state, symbol)?)?;
        }
        writeln!(out)?;
    }
    Ok(table)
}
