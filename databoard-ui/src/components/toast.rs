//! Toast Notification Component
//!
//! Shows the outcome of the latest upload.

use leptos::*;

use crate::state::{AppState, ToastVariant};

/// Toast notification container
#[component]
pub fn Toast(state: AppState) -> impl IntoView {
    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.toast.get().map(|toast| view! {
                    <ToastMessage message=toast.text variant=toast.variant />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
