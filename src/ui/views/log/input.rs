//! Input handling for LogView

use crossterm::event::KeyEvent;

use crate::keys;
use crate::wash::Growth;

use super::{LogAction, LogView};

impl LogView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> LogAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down();
                LogAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                LogAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                LogAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom();
                LogAction::None
            }
            k if k == keys::TOGGLE_MARGIN => {
                self.toggle_margin();
                LogAction::None
            }
            k if k == keys::ACTIVATE => {
                if self.is_show_more_selected() {
                    self.grow(Growth::Double)
                } else {
                    LogAction::None
                }
            }
            k if k == keys::SHOW_MORE => self.grow(Growth::Double),
            k if k == keys::SHOW_MORE_STEP => {
                let step = i64::try_from(self.step).unwrap_or(i64::MAX);
                self.grow(Growth::Add(step))
            }
            k if k == keys::SHOW_ALL => self.grow(Growth::Unbounded),
            _ => LogAction::None,
        }
    }

    /// Growth is a no-op once the cutoff is unbounded
    fn grow(&self, growth: Growth) -> LogAction {
        if self.unbounded {
            LogAction::None
        } else {
            LogAction::Grow(growth)
        }
    }
}
