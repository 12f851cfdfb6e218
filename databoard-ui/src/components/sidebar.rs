//! Sidebar Component
//!
//! Left navigation with the dark mode toggle.

use leptos::*;

use crate::state::AppState;

#[component]
pub fn Sidebar(state: AppState) -> impl IntoView {
    let dark_mode = move || state.dashboard.with(|d| d.dark_mode());

    view! {
        <nav class="w-56 shrink-0 bg-gray-800 text-gray-300 min-h-screen p-4 space-y-1">
            <div class="flex items-center space-x-3 px-3 py-4 mb-4">
                <span class="text-2xl">"📊"</span>
                <span class="text-xl font-bold text-white">"Databoard"</span>
            </div>

            <SidebarLink href="#dashboard" label="Dashboard" />
            <SidebarLink href="#download" label="Download" />

            <button
                on:click=move |_| state.toggle_dark_mode()
                class="w-full text-left px-4 py-2 rounded-lg hover:text-white hover:bg-gray-700 transition-colors"
            >
                {move || if dark_mode() { "☀ Dark Mode" } else { "☾ Dark Mode" }}
            </button>

            <SidebarLink href="#chat" label="AI Chat" />
        </nav>
    }
}

/// Individual navigation link
#[component]
fn SidebarLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="block px-4 py-2 rounded-lg hover:text-white hover:bg-gray-700 transition-colors"
        >
            {label}
        </a>
    }
}
