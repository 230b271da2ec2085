//! Panel de resultados

use super::busy_indicator::BusyIndicator;
use anpr_common::{messages, DisplayGroup, ResultView, ValueStyle};
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(result: Memo<ResultView>, has_record: Signal<bool>) -> impl IntoView {
    view! {
        <section class="card results-card">
            <div class="card-accent reverse" />
            <div class="card-header">
                <h2>{messages::RESULTS_TITLE}</h2>
                <p class="text-muted">{move || messages::results_description(has_record.get())}</p>
            </div>

            {move || match result.get() {
                ResultView::Busy => view! { <BusyIndicator /> }.into_any(),
                ResultView::Groups(groups) => view! {
                    <div class="result-groups">
                        {groups
                            .into_iter()
                            .map(|group| view! { <ResultGroup group=group /> })
                            .collect_view()}
                    </div>
                }.into_any(),
                ResultView::Empty => view! {
                    <div class="empty-state">
                        <div class="empty-icon">"🖼"</div>
                        <p class="text-muted">{messages::EMPTY_STATE}</p>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ResultGroup(group: DisplayGroup) -> impl IntoView {
    let class = format!("result-group {}", group.kind.as_str());
    let title = group.title();

    view! {
        <div class=class>
            <h3>{title}</h3>
            <table>
                <tbody>
                    {group
                        .rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td class="label">{row.label}</td>
                                <td>{value_cell(row.value, row.style)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn value_cell(value: String, style: ValueStyle) -> AnyView {
    match style {
        ValueStyle::Plain => view! { <span>{value}</span> }.into_any(),
        ValueStyle::Swatch => view! {
            <span class="swatch-value">
                <span class="swatch" />
                {value}
            </span>
        }.into_any(),
        ValueStyle::PlateBadge => view! { <span class="plate-badge">{value}</span> }.into_any(),
    }
}
