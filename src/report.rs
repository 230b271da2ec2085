//! Salida en texto de los resultados

use anpr_common::{messages, DisplayGroup, ResultView, ValueStyle};

fn format_value(value: &str, style: ValueStyle) -> String {
    match style {
        ValueStyle::Plain => value.to_string(),
        ValueStyle::Swatch => format!("● {}", value),
        ValueStyle::PlateBadge => format!("[ {} ]", value),
    }
}

pub fn render_groups(groups: &[DisplayGroup]) -> String {
    let width = groups
        .iter()
        .flat_map(|g| g.rows.iter())
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("■ {}\n", group.title()));
        for row in &group.rows {
            let pad = width.saturating_sub(row.label.chars().count());
            out.push_str(&format!(
                "  {}{}  {}\n",
                row.label,
                " ".repeat(pad),
                format_value(&row.value, row.style)
            ));
        }
        out.push('\n');
    }
    out
}

pub fn render_view(view: &ResultView) -> String {
    match view {
        ResultView::Busy => format!("{}\n", messages::BUSY_TEXT),
        ResultView::Groups(groups) => render_groups(groups),
        ResultView::Empty => format!("{}\n", messages::EMPTY_STATE),
    }
}
