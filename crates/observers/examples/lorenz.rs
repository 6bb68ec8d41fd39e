//! Lorenz ensemble run.
//!
//! Integrates three starts that differ by 1e-5 in `z` and reports how far the
//! trajectories drift apart. The full history of the first member can be
//! written as CSV.
//!
//! # Usage
//!
//! ```text
//! cargo run --example lorenz
//! cargo run --example lorenz -- 40
//! cargo run --example lorenz -- 40 csv > lorenz.csv
//! ```
//!
//! The first argument is the span in time units (100 by default).

use std::{error::Error, io};

use orrery_core::State;
use orrery_observers::{CsvWriter, FiniteGuard, chain};
use orrery_solvers::{
    fixed_step::{Method, Stepper},
    transient::{self, Solution},
};
use orrery_systems::{Lorenz, scenario};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let span: f64 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(scenario::LORENZ_SPAN);
    let write_csv = args.next().as_deref() == Some("csv");

    let stepper = Stepper::rk4(Lorenz::default());
    let config = transient::Config::over_span(0.0, span, Method::Rk4.default_dt())?;

    let starts = scenario::lorenz_ensemble(scenario::LORENZ_ENSEMBLE, scenario::LORENZ_EPSILON);

    let mut members = Vec::new();
    for (i, start) in starts.into_iter().enumerate() {
        let mut guard = FiniteGuard::new();
        let solution = if i == 0 && write_csv {
            let mut csv = CsvWriter::new(io::BufWriter::new(io::stdout().lock()));
            let observer = chain(&mut csv, &mut guard);
            let solution = transient::solve(&stepper, start, &config, observer)?;
            csv.finish()?;
            solution
        } else {
            transient::solve(&stepper, start, &config, &mut guard)?
        };

        if let Some(bad) = guard.tripped() {
            eprintln!("member {i} went non-finite at t = {}", bad.time);
        }
        members.push(solution);
    }

    report(&members);
    Ok(())
}

/// Prints the distance of each member from the first at a few checkpoints.
fn report(members: &[Solution]) {
    let Some((reference, others)) = members.split_first() else {
        return;
    };

    let len = reference.history.len();
    for k in [0, len / 10, len / 4, len / 2, len - 1] {
        let sample = &reference.history[k];
        let distances: Vec<String> = others
            .iter()
            .filter_map(|m| m.history.get(k))
            .map(|other| format!("{:.3e}", distance(&sample.state, &other.state)))
            .collect();
        eprintln!("t = {:>8.3}  separation {}", sample.time, distances.join("  "));
    }
}

fn distance(a: &State, b: &State) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
