//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys;
use crate::ui::views::LogAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh_log();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            _ => {
                let action = self.log_view.handle_key(key);
                self.handle_log_action(action);
            }
        }
    }

    fn handle_log_action(&mut self, action: LogAction) {
        match action {
            LogAction::None => {}
            LogAction::Grow(growth) => self.grow(growth),
        }
    }
}
