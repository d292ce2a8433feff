// src/activation/haptics.rs
use std::io::Write;
use std::time::Duration;

use crate::error::Result;

/// Short physical feedback on activation. Optional; hosts without it pass `None`.
pub trait Haptics: Send + Sync + std::fmt::Debug {
    fn pulse(&self, duration: Duration) -> Result<()>;
}

/// The closest a terminal gets to a vibration: the bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&self, _duration: Duration) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}
