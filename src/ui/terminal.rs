// src/ui/terminal.rs
//! Mouse capture around the ratatui terminal lifecycle.
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::Write;

use crate::error::Result;
use crate::log_warn;

pub fn enable_mouse<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, EnableMouseCapture)?;
    Ok(())
}

/// Release the mouse, then run `restore`. `restore` always runs; a failed
/// release is only logged.
pub fn teardown<W: Write, F: FnOnce()>(out: &mut W, restore: F) {
    if let Err(e) = execute!(out, DisableMouseCapture) {
        log_warn!("Failed to disable mouse capture: {}", e);
    }
    restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    #[test]
    fn test_restore_runs_even_when_release_fails() {
        let mut restored = false;
        teardown(&mut BrokenPipe, || restored = true);
        assert!(restored);
    }

    #[test]
    fn test_enable_reports_write_failure() {
        assert!(enable_mouse(&mut BrokenPipe).is_err());
        let mut out = Vec::new();
        enable_mouse(&mut out).unwrap();
        assert!(!out.is_empty());
    }
}
