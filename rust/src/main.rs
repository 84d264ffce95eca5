//! Command line entry point for the bridge crossing solvers.

use anyhow::{Context, Result};
use clap::{arg, Command};
use std::io;
use std::path::PathBuf;

use torchcross::{
    load_roster, log_decisions, write_plan, GreedySolver, Method, RunConfig, ShieldingSolver,
};

fn cli() -> Command {
    Command::new("torchcross")
        .about("Computes the fastest way for a group sharing one torch to cross a narrow bridge")
        .arg(
            arg!(--people <FILE> "Path to a YAML file listing people and their crossing times")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--method [METHOD] "Crossing method: naive, shielding, or both")
                .default_value("both"),
        )
        .arg(arg!(-v --verbose ... "Increase verbosity (repeatable)"))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = RunConfig {
        method: matches.get_one::<String>("method").unwrap().clone(),
        verbosity: matches.get_count("verbose"),
    };
    let method = config.resolve_method()?;

    let path = matches.get_one::<PathBuf>("people").unwrap();
    let roster =
        load_roster(path).with_context(|| format!("loading people from {}", path.display()))?;

    if roster.is_empty() {
        log_decisions!(config.verbosity, "No people found in {}", path.display());
    } else {
        log_decisions!(config.verbosity, "List of all people:");
        for person in roster.people() {
            log_decisions!(config.verbosity, "  {}", person);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches!(method, Method::Naive | Method::Both) {
        // Each solver consumes its own copy of the roster.
        let plan = GreedySolver::new(roster.clone())
            .with_verbosity(config.verbosity)
            .solve();
        write_plan(&mut out, "naive", &plan)?;
    }
    if matches!(method, Method::Shielding | Method::Both) {
        let plan = ShieldingSolver::new(roster)
            .with_verbosity(config.verbosity)
            .solve();
        write_plan(&mut out, "optimal", &plan)?;
    }

    Ok(())
}
