use crate::app::{AppState, SlotDisplay};
use crate::domain::{RunStatus, UiMode, SLOT_COUNT};
use crate::ui::styles::{
    border_style, clock_style, default_style, editing_style, running_style, selected_style,
    stopped_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Placeholder shown for an empty label
const EMPTY_LABEL: &str = "(no label)";

/// Render the timers pane, one row per slot
pub fn render_chrono_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = (0..SLOT_COUNT)
        .map(|idx| {
            let selected = idx == app.selected_index;
            let editing = selected && app.ui_mode == UiMode::EditingLabel;
            let status = RunStatus::from_running(app.store.is_running(idx));
            let line = create_slot_line(
                idx,
                app.store.label(idx),
                &app.display.rows[idx],
                status,
                editing,
            );
            let style = if selected && !editing {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" ChronoWork ⏱ ", title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a slot
/// Format: 1  Website redesign        01:02:03   0.1 J/H   ⏱ RUNNING
pub fn create_slot_line(
    index: usize,
    label: &str,
    display: &SlotDisplay,
    status: RunStatus,
    editing: bool,
) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!(" {}  ", index + 1)));

    if editing {
        spans.push(Span::styled(label.to_string(), editing_style()));
        spans.push(Span::styled("█".to_string(), editing_style())); // Cursor
    } else if label.is_empty() {
        spans.push(Span::styled(format!("{:<24}", EMPTY_LABEL), stopped_style()));
    } else {
        spans.push(Span::raw(format!("{:<24}", label)));
    }

    spans.push(Span::raw("  ".to_string()));
    spans.push(Span::styled(display.clock.clone(), clock_style()));
    spans.push(Span::raw(format!("   {:>10}   ", display.work_days)));

    let (glyph, badge_style) = match status {
        RunStatus::Running => ("⏱", running_style()),
        RunStatus::Stopped => ("⏸", stopped_style()),
    };
    spans.push(Span::styled(format!("{} {}", glyph, status.to_tag()), badge_style));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_slot_line() {
        let display = SlotDisplay {
            clock: "01:01:01".to_string(),
            work_days: "0.1 J/H".to_string(),
        };
        let line = create_slot_line(0, "Website", &display, RunStatus::Running, false);
        let text = line_text(&line);

        assert!(text.starts_with(" 1  Website"));
        assert!(text.contains("01:01:01"));
        assert!(text.contains("0.1 J/H"));
        assert!(text.contains("RUNNING"));
    }

    #[test]
    fn test_empty_label_placeholder() {
        let line = create_slot_line(2, "", &SlotDisplay::default(), RunStatus::Stopped, false);
        let text = line_text(&line);

        assert!(text.contains(EMPTY_LABEL));
        assert!(text.contains("00:00:00"));
        assert!(text.contains("STOPPED"));
    }

    #[test]
    fn test_editing_shows_cursor() {
        let line = create_slot_line(1, "Aud", &SlotDisplay::default(), RunStatus::Stopped, true);
        assert!(line_text(&line).contains("Aud█"));
    }
}
