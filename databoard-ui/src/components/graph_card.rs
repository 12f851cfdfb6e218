//! Graph Card Component
//!
//! One chart with its own chart-type selector.

use databoard::{ChartKind, ChartSpec};
use leptos::*;

use crate::components::ChartCanvas;
use crate::state::AppState;

/// Card for the graph at `index` in the dashboard's graph list
#[component]
pub fn GraphCard(state: AppState, index: usize) -> impl IntoView {
    // Memoized so a change on another card does not repaint this one
    let chart = create_memo(move |_| {
        state
            .dashboard
            .with(|d| d.chart(index))
            .unwrap_or_else(|| ChartSpec::new(None, ChartKind::default()))
    });
    let kind = create_memo(move |_| chart.with(|c| c.kind));

    let on_change = move |ev: ev::Event| match event_target_value(&ev).parse::<ChartKind>() {
        Ok(kind) => state.set_card_kind(index, kind),
        Err(e) => web_sys::console::error_1(&e.to_string().into()),
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <div class="flex items-center justify-between mb-3">
                <span class="text-gray-500 dark:text-gray-400 text-sm">
                    {format!("Graph {}", index + 1)}
                </span>

                <select
                    on:change=on_change
                    prop:value=move || kind.get().value()
                    class="bg-gray-100 dark:bg-gray-700 rounded px-2 py-1 text-sm"
                >
                    {ChartKind::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.value()>{option.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <ChartCanvas spec=chart />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use databoard::GraphDescriptor;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn selected_kind() -> String {
        document()
            .query_selector("select")
            .unwrap()
            .unwrap()
            .dyn_into::<web_sys::HtmlSelectElement>()
            .unwrap()
            .value()
    }

    fn load_one_graph(state: AppState) {
        state.dashboard.update(|d| {
            d.begin_upload();
            d.finish_upload(Ok(vec![GraphDescriptor::placeholder()]));
        });
    }

    #[wasm_bindgen_test]
    fn test_selector_tracks_card_kind_across_uploads() {
        let state = AppState::new();
        load_one_graph(state);
        mount_to_body(move || view! { <GraphCard state=state index=0 /> });

        state.set_card_kind(0, ChartKind::Line);
        assert_eq!(selected_kind(), "line");

        // Same position, new upload: the card is reused and reset to bar
        load_one_graph(state);
        assert_eq!(selected_kind(), "bar");
    }
}
