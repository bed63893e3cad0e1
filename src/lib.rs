//! a compact host resource dashboard.
//!
//! once a second, the dashboard samples the host's cpu, memory, and root filesystem utilization
//! along with the names of its running processes, and redraws them as text. pressing `q`, or
//! `ctrl+c`, quits. a failed sample stops the dashboard, and leaves the error on screen.

use std::io::Write;

pub use self::{
    config::Config,
    dashboard::{Command, Dashboard, State, TICK_INTERVAL},
    error::{DisplayError, LookupError, SampleError},
    event::{Action, Event, EventSource, Events},
    snapshot::{Percent, Snapshot},
    source::{
        Call, Clock, Lookup, MetricsSource, MockClock, MockSource, SysinfoSource, SystemClock,
    },
    view::render,
    window::Window,
};

pub mod config;

/// the controller, which samples metrics on each tick.
mod dashboard;
mod error;
/// keyboard input and tick deadlines, funneled into one queue.
mod event;
mod snapshot;
/// sources of host metrics, and of time.
mod source;
mod view;
mod window;


pub struct App<S = SysinfoSource> {
    dashboard: Dashboard<S>,
    /// what to do first.
    first: Command,
}

// === impl App ===

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// initializes a new application, sampling the host it runs on.
    pub fn new() -> Self {
        Self::with_source(SysinfoSource::new())
    }
}

impl<S: MetricsSource> App<S> {
    /// initializes a new application, sampling the given source.
    pub fn with_source(source: S) -> Self {
        let (dashboard, first) = Dashboard::new(source);
        Self { dashboard, first }
    }

    /// runs the application in the terminal, until the user quits or a sample fails.
    ///
    /// returns the state the dashboard stopped in.
    pub fn run(self) -> Result<State, DisplayError> {
        let mut window = Window::terminal()?;
        let mut events = Events::spawn();
        tracing::info!("dashboard started");

        let dashboard = self.drive(&mut events, &mut window)?;

        let state = dashboard.state().clone();
        tracing::info!(?state, "dashboard stopped");
        Ok(state)
    }

    /// handles events, one at a time, drawing a frame after each one that changes the view.
    ///
    /// returns the dashboard once it stops scheduling ticks.
    pub fn drive<W: Write>(
        self,
        events: &mut impl EventSource,
        window: &mut Window<W>,
    ) -> Result<Dashboard<S>, DisplayError> {
        let Self {
            mut dashboard,
            first,
        } = self;

        window.draw(&dashboard.view())?;

        let mut scheduled = events.now();
        let mut command = first;
        while let Command::Schedule(delay) = command {
            let deadline = scheduled + delay;
            command = match events.next(deadline)? {
                Event::Tick(now) => {
                    tracing::trace!(late = ?now.saturating_duration_since(deadline), "tick");
                    scheduled = now;
                    dashboard.on_tick(now)
                }
                Event::Input(key) => match Action::from(&key) {
                    Action::Quit => dashboard.on_quit(),
                    Action::Ignore => continue,
                },
            };
            window.draw(&dashboard.view())?;
        }

        Ok(dashboard)
    }
}
