//! Keybinding definitions for logwash
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Log View keys
// =============================================================================

/// Double the cutoff
pub const SHOW_MORE: KeyCode = KeyCode::Char('+');

/// Add the configured cutoff once more
pub const SHOW_MORE_STEP: KeyCode = KeyCode::Char('=');

/// Drop the cutoff entirely
pub const SHOW_ALL: KeyCode = KeyCode::Char('a');

/// Activate the selected row (the "show more" row doubles the cutoff)
pub const ACTIVATE: KeyCode = KeyCode::Enter;

/// Toggle the author/date margin
pub const TOGGLE_MARGIN: KeyCode = KeyCode::Char('m');

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_MOVE: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Cyan,
};
pub const HINT_MORE: KeyHint = KeyHint {
    key: "+",
    label: "More",
    color: Color::Green,
};
pub const HINT_STEP: KeyHint = KeyHint {
    key: "=",
    label: "Step",
    color: Color::Green,
};
pub const HINT_ALL: KeyHint = KeyHint {
    key: "a",
    label: "All",
    color: Color::Yellow,
};
pub const HINT_MARGIN: KeyHint = KeyHint {
    key: "m",
    label: "Margin",
    color: Color::Magenta,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

/// Hints for the log view
///
/// Growth hints are left out once the cutoff is unbounded.
pub fn log_view_hints(unbounded: bool) -> Vec<KeyHint> {
    let mut hints = vec![HINT_MOVE];
    if !unbounded {
        hints.extend([HINT_MORE, HINT_STEP, HINT_ALL]);
    }
    hints.extend([HINT_MARGIN, HINT_REFRESH, HINT_QUIT]);
    hints
}
