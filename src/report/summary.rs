use crate::domain::{format_clock, format_work_days, non_negative, ChronoStore, SLOT_COUNT};
use serde::Serialize;

/// One row of the `show` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    /// 1-based slot number, as shown in the UI
    pub slot: usize,
    pub label: String,
    pub seconds: u64,
    pub clock: String,
    pub work_days: String,
}

/// Summarize every slot at `now`
pub fn summarize(store: &ChronoStore, now: i64) -> Vec<SlotSummary> {
    (0..SLOT_COUNT)
        .map(|idx| {
            let seconds = non_negative(store.elapsed_seconds(idx, now));
            SlotSummary {
                slot: idx + 1,
                label: store.label(idx).to_string(),
                seconds,
                clock: format_clock(seconds),
                work_days: format_work_days(seconds),
            }
        })
        .collect()
}

/// Plain-text table, one line per slot
pub fn render_text(rows: &[SlotSummary]) -> String {
    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{}  {:<width$}  {}  {}\n",
            row.slot,
            row.label,
            row.clock,
            row.work_days,
            width = label_width
        ));
    }
    out
}

/// JSON array of the rows
pub fn render_json(rows: &[SlotSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChronoSlot;
    use pretty_assertions::assert_eq;

    fn sample_store() -> ChronoStore {
        ChronoStore::from_slots([
            ChronoSlot::stopped(3_661, "Website".to_string()),
            ChronoSlot::stopped(0, String::new()),
            ChronoSlot::stopped(25_200, "Audit".to_string()),
        ])
    }

    #[test]
    fn test_summarize() {
        let rows = summarize(&sample_store(), 0);

        assert_eq!(rows.len(), SLOT_COUNT);
        assert_eq!(
            rows[0],
            SlotSummary {
                slot: 1,
                label: "Website".to_string(),
                seconds: 3_661,
                clock: "01:01:01".to_string(),
                work_days: "0.1 J/H".to_string(),
            }
        );
        assert_eq!(rows[2].work_days, "1.0 J/H");
    }

    #[test]
    fn test_summarize_counts_running_time() {
        let mut store = sample_store();
        store.start(1, 100);
        let rows = summarize(&store, 160);
        assert_eq!(rows[1].seconds, 60);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&summarize(&sample_store(), 0));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1  Website  01:01:01  0.1 J/H");
        assert_eq!(lines[1], "2           00:00:00  0.0 J/H");
        assert_eq!(lines[2], "3  Audit    07:00:00  1.0 J/H");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&summarize(&sample_store(), 0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["label"], "Website");
        assert_eq!(value[0]["seconds"], 3_661);
        assert_eq!(value[2]["clock"], "07:00:00");
    }
}
