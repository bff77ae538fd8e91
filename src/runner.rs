use std::time::Instant;

use rand::Rng;

use crate::errors::{Error, Result};
use crate::ids;
use crate::report::{Measurement, RunReport};
use crate::views::{SequentialView, SetView};

pub const DEFAULT_COUNT: usize = 1_000_000;

#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of identifiers to generate.
    pub count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
        }
    }
}

/// Execute the measurement protocol: generate the collection, build both
/// views over it, pick one existing and one fresh absent probe, then time the
/// four membership checks in the fixed reporting order.
#[tracing::instrument]
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let count = config.count;
    if count == 0 {
        return Err(Error::AssertionFailed(
            "count must be at least 1 to sample an existing probe".to_string(),
        ));
    }

    tracing::info!(count, "generating identifiers");
    let ids = ids::generate_id_batch(count);
    tracing::info!("identifier generation done");

    tracing::info!("building sequential and set views");
    let set = SetView::from_ids(&ids);
    let sequential = SequentialView::new(ids);
    tracing::info!("views built");

    // One probe known to be present, one fresh and practically guaranteed
    // absent. No disjointness check: the views must stay untouched until the
    // timed section.
    let index = rand::thread_rng().gen_range(0..sequential.len());
    let existing = match sequential.get(index) {
        Some(id) => id.to_string(),
        None => {
            return Err(Error::AssertionFailed(format!(
                "sampled index {index} out of range"
            )));
        }
    };
    let absent = ids::generate_id();

    tracing::info!("checking existing probe via linear scan");
    let sequential_existing = time_lookup("sequential.contains(existing)", || {
        sequential.contains(&existing)
    });
    tracing::info!("checking existing probe via hash lookup");
    let set_existing = time_lookup("set.contains(existing)", || set.contains(&existing));
    tracing::info!("checking absent probe via linear scan");
    let sequential_absent = time_lookup("sequential.contains(absent)", || {
        sequential.contains(&absent)
    });
    tracing::info!("checking absent probe via hash lookup");
    let set_absent = time_lookup("set.contains(absent)", || set.contains(&absent));

    Ok(RunReport {
        sequential_existing,
        set_existing,
        sequential_absent,
        set_absent,
    })
}

fn time_lookup(label: &'static str, lookup: impl FnOnce() -> bool) -> Measurement {
    let start = Instant::now();
    let found = lookup();
    let elapsed = start.elapsed();
    tracing::debug!(label, found, ?elapsed, "lookup timed");
    Measurement {
        label,
        found,
        elapsed,
    }
}
