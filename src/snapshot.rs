use std::time::Instant;

pub use self::percent::Percent;

mod percent;


/// the most recently sampled metrics.
///
/// one of these lives for the lifetime of the dashboard, and is updated in place on every tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// cpu utilization.
    pub cpu: Percent,
    /// memory utilization.
    pub ram: Percent,
    /// utilization of the root filesystem.
    pub disk: Percent,
    /// names of the processes visible at the last sample, in sampling order.
    pub processes: Vec<String>,
    /// when the last tick that touched this snapshot fired.
    pub taken: Option<Instant>,
}

// === impl Snapshot ===

impl Snapshot {
    /// returns an empty snapshot, with every metric at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces the process listing with the names that could be looked up.
    ///
    /// returns the number of processes that were skipped.
    pub(crate) fn replace_processes<E>(
        &mut self,
        lookups: impl IntoIterator<Item = Result<String, E>>,
    ) -> usize
    where
        E: std::fmt::Display,
    {
        let Self { processes, .. } = self;

        processes.clear();
        let mut skipped = 0;
        for lookup in lookups {
            match lookup {
                Ok(name) => processes.push(name),
                Err(error) => {
                    tracing::trace!(%error, "skipping process");
                    skipped += 1;
                }
            }
        }

        skipped
    }
}
