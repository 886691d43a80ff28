//! bank-contagion — run one pandemic/financial co-contagion simulation.
//!
//! ```text
//! bank-contagion --settings demos/bank-contagion/settings.json \
//!     --set pandemic.transmission_rate=0.3 --set general.cycles=10 \
//!     --output output/bank-contagion
//! ```
//!
//! Settings not given on the command line come from the JSON file, or from
//! the built-in defaults when no file is passed.  Log verbosity is read from
//! `CC_LOG` (`error`, `warn`, `info`, `debug`, `trace`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cc_agent::{Category, Condition, ImpactTier};
use cc_core::{Cycle, Phase, Settings, Step};
use cc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use cc_sim::{Histogram, SimBuilder, SimObserver, SimView};

// ── Command line ──────────────────────────────────────────────────────────────

/// Co-simulation of pandemic and financial contagion across a bank network.
#[derive(Parser, Debug)]
#[command(name = "bank-contagion")]
#[command(version)]
struct Args {
    /// Settings JSON file (defaults are used when omitted)
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// Override one setting, e.g. `--set financial.lockdown_severity=0.25`
    #[arg(long = "set", value_name = "GROUP.KEY=VALUE")]
    overrides: Vec<String>,

    /// Directory for the CSV exports
    #[arg(long, short, default_value = "output/bank-contagion")]
    output: PathBuf,
}

fn load_settings(path: Option<&Path>, overrides: &[String]) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing settings from {}", path.display()))?
        }
        None => Settings::default(),
    };

    for raw in overrides {
        let Some((key, value)) = raw.split_once('=') else {
            bail!("override `{raw}` is not of the form group.key=value");
        };
        settings.set_field(key.trim(), value.trim())?;
    }

    settings.validate()?;
    Ok(settings)
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints one line per cycle and iteration, and forwards everything to the
/// CSV observer.
struct ProgressObserver<W: OutputWriter> {
    inner:      SimOutputObserver<W>,
    iterations: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, iterations: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_sim_start(&mut self, view: &SimView<'_>) {
        self.inner.on_sim_start(view);
    }

    fn on_cycle_start(&mut self, cycle: Cycle) {
        println!("Cycle #{}", cycle.ordinal());
        self.inner.on_cycle_start(cycle);
    }

    fn on_iteration_end(&mut self, step: Step, view: &SimView<'_>) {
        self.iterations += 1;
        match step.phase {
            Phase::Pandemic => {
                let counts = view.conditions.last().map(|e| &e.counts);
                println!(
                    "  Pandemic Iteration #{}: {}",
                    step.iteration,
                    counts.map(summary).unwrap_or_default()
                );
            }
            Phase::Financial => {
                let counts = view.impacts.last().map(|e| &e.counts);
                println!(
                    "  Financial Iteration #{}: {}",
                    step.iteration,
                    counts.map(summary).unwrap_or_default()
                );
            }
            Phase::Initial => {}
        }
        self.inner.on_iteration_end(step, view);
    }

    fn on_cycle_end(&mut self, cycle: Cycle, view: &SimView<'_>) {
        self.inner.on_cycle_end(cycle, view);
    }

    fn on_sim_end(&mut self, view: &SimView<'_>) {
        self.inner.on_sim_end(view);
    }
}

/// `susceptible=40 infectious=9 removed=1`, zero counts omitted.
fn summary<K: Category>(counts: &Histogram<K>) -> String {
    counts
        .iter()
        .filter(|&(_, n)| n > 0)
        .map(|(k, n)| format!("{}={n}", k.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Surface the first export error stored during the run.
fn check_output<W: OutputWriter>(obs: &mut SimOutputObserver<W>) -> Result<()> {
    match obs.take_error() {
        Some(e) => {
            log::error!("output error: {e}");
            Err(e).context("writing CSV output")
        }
        None => Ok(()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CC_LOG", "warn")).init();

    let args = Args::parse();
    let settings = load_settings(args.settings.as_deref(), &args.overrides)?;

    let g = &settings.general;
    println!("=== bank-contagion ===");
    println!(
        "Agents: {}  |  Cycles: {}  |  Topology: {}  |  Seed: {}",
        g.agent_count, g.cycles, g.topology_kind, g.seed
    );
    println!(
        "Pandemic: p={} × {} it/cycle, transmission {}, recovery {}",
        settings.pandemic.edge_probability,
        settings.pandemic.iterations_per_cycle,
        settings.pandemic.transmission_rate,
        settings.pandemic.time_to_recover
    );
    println!(
        "Financial: p={} × {} it/cycle, lockdown {}, loan divisor {}",
        settings.financial.edge_probability,
        settings.financial.iterations_per_cycle,
        settings.financial.lockdown_severity,
        settings.financial.loan_threshold_divisor
    );
    println!();

    let mut sim = SimBuilder::new(settings).build()?;
    println!(
        "Pandemic topology: {} edges  |  Financial topology: {} edges",
        sim.pandemic.edge_count(),
        sim.financial.edge_count()
    );

    let writer = CsvWriter::new(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    check_output(&mut obs.inner)?;

    println!();
    println!("Simulation complete in {:.3} s ({} iterations)", elapsed.as_secs_f64(), obs.iterations);

    // Final histograms.
    if let (Some(c), Some(i)) = (sim.condition_history().last(), sim.impact_history().last()) {
        println!();
        println!("{:<14} {:>6}", "Condition", "Agents");
        println!("{}", "-".repeat(21));
        for cond in Condition::ALL {
            println!("{:<14} {:>6}", cond.as_str(), c.counts.get(*cond));
        }
        println!();
        println!("{:<14} {:>6}", "Impact", "Agents");
        println!("{}", "-".repeat(21));
        for tier in ImpactTier::ALL {
            println!("{:<14} {:>6}", tier.as_str(), i.counts.get(*tier));
        }
    }

    println!();
    println!("Consolidated graph data: {}", obs.inner.writer().consolidated_path().display());
    Ok(())
}
