use {
    crate::error::{LookupError, SampleError},
    std::{cell::RefCell, collections::VecDeque, path::Path, time::Instant},
};

pub use self::{clock::*, host::SysinfoSource, metrics::*, mock::*};

mod host;
mod mock;

mod clock {
    use super::*;

    pub trait Clock {
        fn now(&self) -> Instant;
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }

    /// a mock clock, which hands out a scripted sequence of instants.
    #[derive(Default)]
    pub struct MockClock {
        times: RefCell<VecDeque<Instant>>,
    }

    impl MockClock {
        pub fn new(times: impl IntoIterator<Item = Instant>) -> Self {
            Self {
                times: RefCell::new(times.into_iter().collect()),
            }
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> Instant {
            let MockClock { times } = self;

            times
                .borrow_mut()
                .pop_front()
                .expect("mock times should not be empty")
        }
    }
}

/// abstracts over providers of host metrics.
mod metrics {
    use super::*;

    /// the outcome of looking up a single process's name.
    pub type Lookup = Result<String, LookupError>;

    /// a source of host metrics.
    ///
    /// every percentage is expected to lie within `[0, 100]`.
    pub trait MetricsSource {
        /// samples the system-wide cpu utilization.
        fn cpu_percent(&mut self) -> Result<f64, SampleError>;

        /// samples the memory utilization.
        fn memory_percent(&mut self) -> Result<f64, SampleError>;

        /// samples the utilization of the filesystem mounted at `path`.
        fn disk_percent(&mut self, path: &Path) -> Result<f64, SampleError>;

        /// enumerates the visible processes, looking up each of their names.
        ///
        /// a failure to enumerate at all is an error. a failure to look up one process's name is
        /// reported in its entry, and does not affect the others.
        fn process_names(&mut self) -> Result<Vec<Lookup>, SampleError>;
    }
}
