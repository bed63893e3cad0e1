//! the dashboard's ordered queue of events.
//!
//! two producers feed the queue: a keyboard thread, which forwards key presses, and the tick
//! deadline, which the consumer waits on. events are handled one at a time, in order.

use {
    crate::{
        error::DisplayError,
        source::{Clock, SystemClock},
    },
    crossterm::event::{self as term, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    std::{
        io,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
            mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError},
        },
        thread::{self, JoinHandle},
        time::{Duration, Instant},
    },
};

#[cfg(test)]
mod tests;

/// an event delivered to the dashboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// the tick deadline passed.
    Tick(Instant),
    /// a key was pressed.
    Input(KeyEvent),
}

/// what a key press asks the dashboard to do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    Ignore,
}

/// a source of dashboard events.
pub trait EventSource {
    /// returns the current time, according to this source.
    fn now(&self) -> Instant;

    /// waits for the next event.
    ///
    /// returns [`Event::Tick`] once `deadline` has passed, unless input is already waiting.
    fn next(&mut self, deadline: Instant) -> Result<Event, DisplayError>;
}

/// the terminal's event queue.
pub struct Events<C = SystemClock> {
    /// the clock used to measure tick deadlines.
    clock: C,
    /// key presses, or input failures, sent by the keyboard.
    keys: Receiver<io::Result<KeyEvent>>,
    /// the thread reading from the keyboard, if one was spawned.
    keyboard: Option<Keyboard>,
}

/// a thread forwarding key presses from the terminal.
struct Keyboard {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

// === impl Action ===

impl From<&KeyEvent> for Action {
    fn from(key: &KeyEvent) -> Self {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = key;

        if *kind != KeyEventKind::Press {
            return Self::Ignore;
        }

        let control = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') if control => Self::Quit,
            KeyCode::Char('q') if !control => Self::Quit,
            _ => Self::Ignore,
        }
    }
}

// === impl Events ===

impl Events {
    /// spawns a keyboard thread, and returns a queue of its key presses and tick deadlines.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        let keyboard = Keyboard::spawn(tx);

        Self {
            clock: SystemClock,
            keys: rx,
            keyboard: Some(keyboard),
        }
    }
}

impl<C: Clock> Events<C> {
    /// returns a queue fed by the given channel of key presses, rather than the terminal.
    pub fn from_channel(keys: Receiver<io::Result<KeyEvent>>, clock: C) -> Self {
        Self {
            clock,
            keys,
            keyboard: None,
        }
    }

    fn input(key: io::Result<KeyEvent>) -> Result<Event, DisplayError> {
        key.map(Event::Input).map_err(DisplayError::Io)
    }
}

impl<C: Clock> EventSource for Events<C> {
    fn now(&self) -> Instant {
        self.clock.now()
    }

    fn next(&mut self, deadline: Instant) -> Result<Event, DisplayError> {
        loop {
            let now = self.clock.now();

            // once the deadline has passed, input that is already waiting still goes first.
            let timeout = deadline.saturating_duration_since(now);
            if timeout.is_zero() {
                return match self.keys.try_recv() {
                    Ok(key) => Self::input(key),
                    Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(Event::Tick(now)),
                };
            }

            match self.keys.recv_timeout(timeout) {
                Ok(key) => return Self::input(key),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::trace!(?timeout, "keyboard disconnected, sleeping until deadline");
                    thread::sleep(timeout);
                }
            }
        }
    }
}

impl<C> Drop for Events<C> {
    fn drop(&mut self) {
        if let Some(keyboard) = self.keyboard.take() {
            keyboard.stop();
        }
    }
}

// === impl Keyboard ===

impl Keyboard {
    /// how long the keyboard thread waits for input before checking whether it should stop.
    const POLL: Duration = Duration::from_millis(50);

    fn spawn(tx: Sender<io::Result<KeyEvent>>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let handle = {
            let stop = stop.clone();
            thread::spawn(move || Self::forward(tx, &stop))
        };

        Self { stop, handle }
    }

    fn forward(tx: Sender<io::Result<KeyEvent>>, stop: &AtomicBool) {
        while !stop.load(Ordering::Relaxed) {
            let key = match Self::read() {
                Ok(Some(key)) => Ok(key),
                Ok(None) => continue,
                Err(error) => Err(error),
            };

            let failed = key.is_err();
            if tx.send(key).is_err() || failed {
                break;
            }
        }

        tracing::debug!("keyboard thread exiting");
    }

    /// waits briefly for a key press.
    fn read() -> io::Result<Option<KeyEvent>> {
        if !term::poll(Self::POLL)? {
            return Ok(None);
        }

        match term::read()? {
            term::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn stop(self) {
        let Self { stop, handle } = self;

        stop.store(true, Ordering::Relaxed);
        if handle.join().is_err() {
            tracing::warn!("keyboard thread panicked");
        }
    }
}
