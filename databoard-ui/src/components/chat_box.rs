//! Chat Box Component
//!
//! Placeholder for asking questions about the uploaded data. Not wired to
//! anything yet.

use leptos::*;

#[component]
pub fn ChatBox() -> impl IntoView {
    let (draft, set_draft) = create_signal(String::new());

    view! {
        <section id="chat" class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <h2 class="text-lg font-semibold mb-3">"AI Chat"</h2>

            <div class="h-32 overflow-y-auto rounded bg-gray-50 dark:bg-gray-900 p-3 mb-3 text-sm text-gray-500">
                "Chatting with your data is coming soon."
            </div>

            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Ask about data..."
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="flex-1 rounded-lg px-3 py-2 bg-gray-100 dark:bg-gray-700"
                />
                <button
                    disabled=true
                    class="px-4 py-2 rounded-lg bg-gray-300 dark:bg-gray-600 text-gray-500 cursor-not-allowed"
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}
