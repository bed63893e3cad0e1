use {
    crate::error::DisplayError,
    crossterm::{
        ExecutableCommand, QueueableCommand, cursor,
        terminal::{self, ClearType},
    },
    std::io::{self, Stdout, Write},
};

/// a text surface that the dashboard draws frames onto.
pub struct Window<W: Write = Stdout> {
    out: W,
    /// whether this window put the terminal into raw mode, and must restore it.
    raw: bool,
}

// === impl Window ===

impl Window {
    /// prepares the terminal for drawing.
    ///
    /// the terminal is put into raw mode, so that key presses arrive immediately, and restored
    /// when the window is dropped. frames are drawn on the main screen, so the final frame remains
    /// visible once the dashboard exits.
    pub fn terminal() -> Result<Self, DisplayError> {
        terminal::enable_raw_mode().map_err(DisplayError::Init)?;

        let mut window = Self {
            out: io::stdout(),
            raw: true,
        };
        window
            .out
            .execute(cursor::Hide)
            .map_err(DisplayError::Init)?;

        Ok(window)
    }
}

impl<W: Write> Window<W> {
    /// returns a window that writes frames to `out`, leaving the terminal mode alone.
    pub fn new(out: W) -> Self {
        Self { out, raw: false }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// clears the screen, and draws a frame.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        let Self { out, .. } = self;

        out.queue(terminal::Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;

        // raw mode does not return the carriage on a newline.
        for (i, line) in frame.split('\n').enumerate() {
            if i > 0 {
                out.write_all(b"\r\n")?;
            }
            out.write_all(line.as_bytes())?;
        }

        out.flush()
    }
}

impl<W: Write> Drop for Window<W> {
    fn drop(&mut self) {
        let Self { out, raw } = self;

        if !*raw {
            return;
        }

        if let Err(error) = out.execute(cursor::Show).map(drop) {
            tracing::warn!(%error, "failed to show the cursor");
        }
        if let Err(error) = terminal::disable_raw_mode() {
            tracing::warn!(%error, "failed to restore the terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(frame: &str) -> String {
        let mut window = Window::new(Vec::new());
        window.draw(frame).unwrap();
        String::from_utf8(window.get_ref().clone()).unwrap()
    }

    #[test]
    fn clears_before_drawing() {
        let out = drawn("Quitting...\n");
        let frame = out.find("Quitting").unwrap();
        let clear = out.find("\x1b[2J").unwrap();
        assert!(clear < frame);
    }

    #[test]
    fn returns_the_carriage() {
        let out = drawn("CPU Usage: 1.00%\nRAM Usage: 2.00%\n\nRunning Tasks:\na");
        assert!(out.ends_with("CPU Usage: 1.00%\r\nRAM Usage: 2.00%\r\n\r\nRunning Tasks:\r\na"));
    }

    #[test]
    fn trailing_newline_is_kept() {
        assert!(drawn("Quitting...\n").ends_with("Quitting...\r\n"));
    }

    #[test]
    fn single_line() {
        assert!(drawn("Error: disk full").ends_with("Error: disk full"));
    }

    #[test]
    fn frames_accumulate() {
        let mut window = Window::new(Vec::new());
        window.draw("one").unwrap();
        window.draw("two").unwrap();
        let out = String::from_utf8(window.get_ref().clone()).unwrap();
        assert_eq!(out.matches("\x1b[2J").count(), 2);
        assert!(out.ends_with("two"));
    }
}
