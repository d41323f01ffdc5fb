pub mod chrono_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;

use crate::app::AppState;
use chrono_pane::render_chrono_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{widgets::Paragraph, Frame};
use styles::hint_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_chrono_pane(f, app, layout.chrono_area);

    let status = format!(" saving to {}", app.save_path().display());
    f.render_widget(Paragraph::new(status).style(hint_style()), layout.status_area);
}
