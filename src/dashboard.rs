use {
    crate::{error::SampleError, snapshot::Snapshot, source::MetricsSource, view},
    std::{
        path::Path,
        time::{Duration, Instant},
    },
};


/// how long to wait between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// samples host metrics on each tick, and keeps track of whether it should keep doing so.
pub struct Dashboard<S> {
    /// the underlying source of host metrics.
    source: S,
    /// the last sampled metrics.
    snapshot: Snapshot,
    state: State,
}

/// the state of a [`Dashboard`].
#[derive(Clone, Debug, PartialEq)]
pub enum State {
    /// sampling on every tick.
    Running,
    /// a sample failed. no further ticks are scheduled.
    Errored(SampleError),
    /// the user asked to quit. no further ticks are scheduled.
    Quit,
}

/// what the event loop should do after the dashboard handles an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// fire the next tick after the given delay.
    Schedule(Duration),
    /// stop the event loop.
    Stop,
}

// === impl Dashboard ===

impl<S: MetricsSource> Dashboard<S> {
    /// the filesystem whose utilization is sampled.
    const ROOT: &str = "/";

    /// creates a new [`Dashboard`], with an empty snapshot.
    ///
    /// the returned command schedules the first tick immediately.
    pub fn new(source: S) -> (Self, Command) {
        let dashboard = Self {
            source,
            snapshot: Snapshot::new(),
            state: State::Running,
        };

        (dashboard, Command::Schedule(Duration::ZERO))
    }

    /// samples every metric, in order, and updates the snapshot.
    ///
    /// any failure stops the dashboard. samples taken before the failure, during this tick, are
    /// kept.
    pub fn on_tick(&mut self, now: Instant) -> Command {
        let Self {
            source,
            snapshot,
            state,
        } = self;

        if state.is_terminal() {
            tracing::debug!(?state, "ignoring tick, dashboard has stopped");
            return Command::Stop;
        }

        match Self::sample(source, snapshot, now) {
            Ok(()) => Command::Schedule(TICK_INTERVAL),
            Err(error) => {
                tracing::debug!(%error, "sampling failed, stopping dashboard");
                *state = State::Errored(error);
                Command::Stop
            }
        }
    }

    /// handles a request to quit.
    pub fn on_quit(&mut self) -> Command {
        let Self { state, .. } = self;

        if let State::Running = state {
            tracing::info!("quit requested, stopping dashboard");
            *state = State::Quit;
        }

        Command::Stop
    }

    fn sample(source: &mut S, snapshot: &mut Snapshot, now: Instant) -> Result<(), SampleError> {
        snapshot.cpu = source.cpu_percent()?.into();
        snapshot.taken = Some(now);
        snapshot.ram = source.memory_percent()?.into();
        snapshot.disk = source.disk_percent(Path::new(Self::ROOT))?.into();

        let lookups = source.process_names()?;
        let total = lookups.len();
        let skipped = snapshot.replace_processes(lookups);

        tracing::debug!(
            cpu = %snapshot.cpu,
            ram = %snapshot.ram,
            disk = %snapshot.disk,
            processes = total - skipped,
            skipped,
            "sampled host metrics"
        );

        Ok(())
    }
}

impl<S> Dashboard<S> {
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// renders the current view.
    pub fn view(&self) -> String {
        let Self {
            snapshot, state, ..
        } = self;

        view::render(state, snapshot)
    }
}

// === impl State ===

impl State {
    /// returns true if no further ticks will be processed.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Running => false,
            Self::Errored(_) | Self::Quit => true,
        }
    }
}
