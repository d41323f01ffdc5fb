use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hint text for the current mode
pub fn hints(mode: UiMode) -> Line<'static> {
    match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ or 1-3 select   "),
            Span::raw("s/Enter start   "),
            Span::raw("x stop   "),
            Span::raw("r reset   "),
            Span::raw("e edit label   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingLabel => Line::from(vec![
            Span::raw(" type to edit label   "),
            Span::raw("Backspace delete   "),
            Span::raw("Enter/Esc done"),
        ]),
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(hints(mode)).style(hint_style());
    f.render_widget(paragraph, area);
}
