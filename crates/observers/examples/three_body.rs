//! Live three-body run.
//!
//! Ticks a [`Session`] the way an animation loop would, then writes the
//! retained trail of each body as CSV.
//!
//! # Usage
//!
//! ```text
//! cargo run --example three_body
//! cargo run --example three_body -- euler 5000
//! ```
//!
//! The first argument picks the method (`rk4` by default, with dt = 0.001;
//! `euler` uses dt = 0.01). The second is the number of ticks.

use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

use orrery_solvers::{
    fixed_step::{Config, Method, Stepper},
    transient::Session,
};
use orrery_systems::{Gravity, scenario};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let method = match args.next().as_deref() {
        None | Some("rk4") => Method::Rk4,
        Some("euler") => Method::Euler,
        Some(other) => {
            eprintln!("Unknown method: {other}");
            eprintln!("Usage: three_body [rk4|euler] [ticks]");
            std::process::exit(1);
        }
    };
    let ticks: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(2_000);

    let stepper = Stepper::new(Gravity::three_body(), Config::new(method));
    let mut session = Session::new(
        stepper,
        scenario::three_body_initial(),
        method.default_dt(),
        scenario::MAX_HISTORY,
    )?;

    for _ in 0..ticks {
        session.tick()?;
    }

    let field = session.stepper().field();
    let drift = (field.energy(session.latest()) - field.energy(session.initial()))
        / field.energy(session.initial());
    eprintln!(
        "{ticks} ticks to t = {:.3}, relative energy drift {drift:.3e}",
        session.time()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "time,x1,y1,x2,y2,x3,y3")?;
    for sample in session.trajectory() {
        let s = &sample.state;
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            sample.time, s[0], s[1], s[4], s[5], s[8], s[9]
        )?;
    }
    out.flush()?;

    Ok(())
}
