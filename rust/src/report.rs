//! Renders crossing plans for the output sink.
//!
//! Solvers emit structured events; everything about presentation lives here,
//! so tests can assert on either layer independently of the other.

use std::io::{self, Write};

use crate::models::CrossingPlan;

/// Write the crossing sequence for one solver run: a blank separator, a
/// header, one line per event, and the closing total line.
///
/// `label` is the lowercase strategy name shown in the total line ("naive",
/// "optimal"); the header capitalizes it.
pub fn write_plan<W: Write>(out: &mut W, label: &str, plan: &CrossingPlan) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} sequence of bridge crossings:", capitalized(label))?;
    for event in &plan.events {
        writeln!(out, "{}", event)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "The {} fastest total time is: {}",
        label, plan.total_minutes
    )
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
