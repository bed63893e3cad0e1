use {
    super::*,
    crate::source::MockClock,
    crossterm::event::{KeyEventKind, KeyEventState},
};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn q() -> KeyEvent {
    key(KeyCode::Char('q'), KeyModifiers::NONE)
}

mod action_tests {
    use super::*;

    #[test]
    fn q_quits() {
        assert_eq!(Action::from(&q()), Action::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(&ctrl_c), Action::Quit);
    }

    #[test]
    fn plain_c_is_ignored() {
        let c = key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(Action::from(&c), Action::Ignore);
    }

    #[test]
    fn ctrl_q_is_ignored() {
        let ctrl_q = key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(&ctrl_q), Action::Ignore);
    }

    #[test]
    fn other_keys_are_ignored() {
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('Q'),
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::Up,
        ] {
            assert_eq!(Action::from(&key(code, KeyModifiers::NONE)), Action::Ignore);
        }
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..q()
        };
        assert_eq!(Action::from(&release), Action::Ignore);
    }

    #[test]
    fn repeats_are_ignored() {
        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq!(Action::from(&repeat), Action::Ignore);
    }
}

mod queue_tests {
    use super::*;

    #[test]
    fn tick_once_deadline_has_passed() {
        let start = Instant::now();
        let now = start + Duration::from_secs(2);
        let (_tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([now]));

        let event = events.next(start + Duration::from_secs(1)).unwrap();

        assert_eq!(event, Event::Tick(now));
    }

    #[test]
    fn tick_at_deadline() {
        let start = Instant::now();
        let (_tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([start]));

        assert_eq!(events.next(start).unwrap(), Event::Tick(start));
    }

    #[test]
    fn input_before_deadline() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([start]));
        tx.send(Ok(q())).unwrap();

        let event = events.next(start + Duration::from_secs(60)).unwrap();

        assert_eq!(event, Event::Input(q()));
    }

    #[test]
    fn waiting_input_goes_before_tick() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([start, start]));
        let x = key(KeyCode::Char('x'), KeyModifiers::NONE);
        tx.send(Ok(x)).unwrap();

        assert_eq!(events.next(start).unwrap(), Event::Input(x));
        assert_eq!(events.next(start).unwrap(), Event::Tick(start));
    }

    #[test]
    fn input_keeps_order() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([start, start]));
        let first = key(KeyCode::Char('a'), KeyModifiers::NONE);
        let second = key(KeyCode::Char('b'), KeyModifiers::NONE);
        tx.send(Ok(first)).unwrap();
        tx.send(Ok(second)).unwrap();

        let deadline = start + Duration::from_secs(60);
        assert_eq!(events.next(deadline).unwrap(), Event::Input(first));
        assert_eq!(events.next(deadline).unwrap(), Event::Input(second));
    }

    #[test]
    fn input_failure_is_an_error() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut events = Events::from_channel(rx, MockClock::new([start]));
        tx.send(Err(io::Error::other("tty went away"))).unwrap();

        let error = events.next(start + Duration::from_secs(60)).unwrap_err();

        assert!(matches!(error, DisplayError::Io(_)));
    }

    #[test]
    fn disconnected_keyboard_still_ticks() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel::<io::Result<KeyEvent>>();
        drop(tx);
        let mut events = Events::from_channel(rx, MockClock::new([start]));

        assert_eq!(events.next(start).unwrap(), Event::Tick(start));
    }

    #[test]
    fn now_comes_from_the_clock() {
        let start = Instant::now();
        let (_tx, rx) = mpsc::channel();
        let events = Events::from_channel(rx, MockClock::new([start]));

        assert_eq!(events.now(), start);
    }
}
