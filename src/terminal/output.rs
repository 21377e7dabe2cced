//! Shared output stream for the terminal front end.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

const LOG_TARGET: &str = "card_recall::terminal";

/// A writer shared by the board and the input field.
///
/// Write failures are logged and otherwise ignored; a broken terminal must
/// not stop the game logic.
#[derive(Clone)]
pub struct Output {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

impl Output {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Output to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Write one line.
    pub fn line(&self, args: fmt::Arguments<'_>) {
        let mut out = self.inner.lock();
        if let Err(err) = out.write_fmt(args).and_then(|()| out.write_all(b"\n")) {
            warn!(target: LOG_TARGET, %err, "terminal write failed");
        }
    }

    /// Write without a newline and flush (prompts).
    pub fn prompt(&self, text: &str) {
        let mut out = self.inner.lock();
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(target: LOG_TARGET, %err, "terminal write failed");
        }
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with<T>(&self, f: impl FnOnce(&mut dyn Write) -> T) -> T {
        let mut out = self.inner.lock();
        f(&mut **out)
    }
}


#[cfg(test)]
mod tests {
    use super::capture::Capture;
    use super::*;

    #[test]
    fn test_line_and_prompt() {
        let capture = Capture::default();
        let out = Output::new(capture.clone());

        out.line(format_args!("hello {}", 42));
        out.prompt("> ");
        assert_eq!(capture.text(), "hello 42\n> ");
    }
}
