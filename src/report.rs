use std::io::Write;
use std::time::Duration;

use crate::errors::Result;

/// One timed membership check: whether the probe was found, and how long the
/// lookup took.
#[derive(Clone, Debug)]
pub struct Measurement {
    pub label: &'static str,
    pub found: bool,
    pub elapsed: Duration,
}

/// The four measurements of a run, in protocol order.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub sequential_existing: Measurement,
    pub set_existing: Measurement,
    pub sequential_absent: Measurement,
    pub set_absent: Measurement,
}

impl RunReport {
    /// Reporting order is fixed: sequential+existing, set+existing,
    /// sequential+absent, set+absent.
    pub fn measurements(&self) -> [&Measurement; 4] {
        [
            &self.sequential_existing,
            &self.set_existing,
            &self.sequential_absent,
            &self.set_absent,
        ]
    }
}

/// Write one line per measurement to `out`, elapsed in milliseconds to three
/// decimal places.
pub fn render<W: Write>(report: &RunReport, out: &mut W) -> Result<()> {
    for m in report.measurements() {
        writeln!(out, "{}: {}, took {} ms", m.label, m.found, format_ms(m.elapsed))?;
    }
    Ok(())
}

pub fn format_ms(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1_000.0)
}
