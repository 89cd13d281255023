//! Mapping from terminal events to the exit decision.

use crossterm::event::{Event, KeyEventKind};

/// Whether an event should stop the animation.
///
/// Any key press, mouse action or paste counts: the byte itself is irrelevant.
/// Resize and focus changes are not user input and are ignored, as are key
/// releases from terminals that report them.
pub fn is_exit_event(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind != KeyEventKind::Release,
        Event::Resize(..) | Event::FocusGained | Event::FocusLost => false,
        _ => true,
    }
}
