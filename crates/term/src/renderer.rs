//! TerminalSession: owns the terminal while the animation runs.
//!
//! Entering switches to raw mode and the alternate screen with the cursor
//! hidden. Dropping the session restores everything, so every exit path out of
//! the frame loop (return, `?`, unwinding) leaves the terminal usable. Signal
//! handlers call [`restore_terminal`] directly; restoration runs at most once.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use log::{debug, warn};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::error::{check_dims, StartupError};
use crate::types::Dims;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Read the terminal size and reject terminals that are too small.
pub fn query_dims() -> Result<Dims, StartupError> {
    let (columns, rows) = terminal::size().map_err(StartupError::SizeUnavailable)?;
    check_dims(Dims::new(columns, rows))
}

pub struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        // From here on, dropping the session undoes whatever succeeded.
        let mut session = Self {
            stdout: io::stdout(),
        };

        let mut buf = Vec::with_capacity(64);
        buf.queue(terminal::EnterAlternateScreen)?;
        buf.queue(cursor::Hide)?;
        buf.queue(terminal::DisableLineWrap)?;
        buf.queue(terminal::Clear(terminal::ClearType::All))?;
        session.draw(&buf)?;
        debug!("terminal session entered");
        Ok(session)
    }

    /// Write one encoded frame.
    pub fn draw(&mut self, frame: &[u8]) -> Result<()> {
        self.stdout.write_all(frame)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!("failed to restore terminal: {e}");
        }
    }
}

/// Undo [`TerminalSession::enter`]. Does nothing if no session is active or
/// it was already restored.
pub fn restore_terminal() -> Result<()> {
    if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }

    let mut buf = Vec::with_capacity(64);
    buf.queue(ResetColor)?;
    buf.queue(SetAttribute(Attribute::Reset))?;
    buf.queue(terminal::EnableLineWrap)?;
    buf.queue(cursor::Show)?;
    buf.queue(terminal::LeaveAlternateScreen)?;

    let mut stdout = io::stdout();
    let written = stdout.write_all(&buf).and_then(|_| stdout.flush());
    terminal::disable_raw_mode()?;
    written?;
    debug!("terminal session restored");
    Ok(())
}
