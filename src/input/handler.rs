use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should close.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingLabel => handle_label_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            false
        }

        // Direct slot selection: '1' is the first slot
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select(digit as usize - 1);
            }
            false
        }

        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_selected();
            false
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.stop_selected();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_selected();
            false
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.begin_label_edit();
            false
        }

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,

        _ => false,
    }
}

/// Handle keys while typing a label
fn handle_label_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.finish_label_edit();
            false
        }
        KeyCode::Backspace => {
            app.label_backspace();
            false
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(c) => {
            app.label_add_char(c);
            false
        }
        _ => false,
    }
}
