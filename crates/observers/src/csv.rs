use std::io::{self, Write};

use orrery_core::Observer;

use crate::traits::{CanStopEarly, HasState};

/// Writes each observed sample as a CSV row.
///
/// The first event writes a header, `step,time,s0,s1,…`, sized to its state.
/// Values use Rust's shortest round-trip formatting, so rows parse back to
/// the exact bits that were integrated.
///
/// The first I/O error stops the run and is returned from
/// [`finish`](CsvWriter::finish); nothing is written after it.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    out: W,
    header: bool,
    error: Option<io::Error>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: false,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event<E: HasState>(&mut self, event: &E) -> io::Result<()> {
        let state = event.state();

        if !self.header {
            write!(self.out, "step,time")?;
            for i in 0..state.len() {
                write!(self.out, ",s{i}")?;
            }
            writeln!(self.out)?;
            self.header = true;
        }

        write!(self.out, "{},{}", event.step(), event.time())?;
        for value in state.iter() {
            write!(self.out, ",{value}")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write, E: HasState, A: CanStopEarly> Observer<E, A> for CsvWriter<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        match self.write_event(event) {
            Ok(()) => None,
            Err(error) => {
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut CsvWriter` to be passed to drivers that take an observer by
/// value.
impl<W: Write, E: HasState, A: CanStopEarly> Observer<E, A> for &mut CsvWriter<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
