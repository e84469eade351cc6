use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::cell::RefCell;
use std::io::IsTerminal;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere a generated password can be handed off to.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through the terminal with the OSC 52 escape sequence.
///
/// Works over SSH and inside multiplexers that forward OSC 52. Terminals that
/// ignore the sequence give no feedback, so success only means it was sent.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        execute!(stdout, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        log::debug!("Sent {} chars to clipboard via OSC 52", text.chars().count());
        Ok(())
    }
}

/// In-memory clipboard for tests and headless runs.
///
/// Clones share the same storage, so a caller can hand one clone to the TUI
/// and read what was copied through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
    deny: bool,
}

impl MemoryClipboard {
    /// A clipboard that rejects every write, like a host without permission.
    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Unavailable("permission denied".to_string()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
