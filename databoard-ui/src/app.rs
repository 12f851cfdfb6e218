//! App Root Component
//!
//! Owns the dashboard state and lays out the sidebar, the graph list and the
//! upload panel.

use databoard::UploadStatus;
use leptos::*;

use crate::components::{ChatBox, GraphCard, InlineLoading, Sidebar, Toast, UploadForm};
use crate::state::dashboard::{last_upload_text, status_text};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let theme_class = move || state.dashboard.with(|d| d.theme_class());
    let uploading = Signal::derive(move || state.is_uploading());

    view! {
        <div class=theme_class>
            <div class="min-h-screen flex bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-white">
                <Sidebar state=state />

                <main id="dashboard" class="flex-1 grid grid-cols-1 lg:grid-cols-3 gap-6 px-6 py-8 pb-24">
                    // Left column: one card per graph
                    <GraphList state=state />

                    // Right column: upload and extras
                    <section class="lg:col-span-2 space-y-6">
                        <h1 class="text-3xl font-bold">"Data Dashboard"</h1>

                        <UploadForm
                            on_upload=move |file: web_sys::File| state.upload(file)
                            uploading=uploading
                        />
                        <UploadStatusLine state=state />

                        <FeatureLinks />

                        <ChatBox />
                    </section>
                </main>

                // Footer with last upload time
                <Footer state=state />

                // Toast notifications
                <Toast state=state />
            </div>
        </div>
    }
}

/// Cards keyed by their position in the graph list
#[component]
fn GraphList(state: AppState) -> impl IntoView {
    let count = create_memo(move |_| state.dashboard.with(|d| d.cards().len()));

    view! {
        <section class="space-y-4">
            <h2 class="text-xl font-semibold">"Graphs"</h2>

            <Show
                when=move || count.get() > 0
                fallback=|| view! {
                    <p class="text-sm text-gray-500">"Upload a file to see its graphs here."</p>
                }
            >
                <For
                    each=move || 0..count.get()
                    key=|index| *index
                    children=move |index| view! { <GraphCard state=state index=index /> }
                />
            </Show>
        </section>
    }
}

#[component]
fn UploadStatusLine(state: AppState) -> impl IntoView {
    let status = create_memo(move |_| state.dashboard.with(|d| d.status().clone()));

    view! {
        {move || {
            status.with(|s| {
                let class = if matches!(s, UploadStatus::Failed(_)) {
                    "text-sm text-red-500"
                } else {
                    "text-sm text-gray-500"
                };
                status_text(s).map(|text| view! { <p class=class>{text}</p> })
            })
        }}
    }
}

#[component]
fn FeatureLinks() -> impl IntoView {
    view! {
        <div id="download" class="flex flex-wrap gap-3">
            {["Feature 1", "Feature 2", "Feature 3"]
                .into_iter()
                .map(|label| view! {
                    <a
                        href="#"
                        class="px-4 py-2 rounded-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 hover:border-gray-400 transition-colors"
                    >
                        {label}
                    </a>
                })
                .collect_view()}
        </div>
    }
}

/// Footer showing the last upload time and whether an upload is pending
#[component]
fn Footer(state: AppState) -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || last_upload_text(state.last_upload.get())}
                </div>

                // Loading indicator
                {move || {
                    if state.is_uploading() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <InlineLoading />
                                <span>"Uploading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
