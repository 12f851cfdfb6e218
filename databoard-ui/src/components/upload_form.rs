//! Upload Form Component
//!
//! File picker plus submit button. Hands the first selected file to the
//! caller; submitting with nothing selected does nothing.

use databoard::submit_first;
use leptos::*;

use crate::components::InlineLoading;

#[component]
pub fn UploadForm(
    /// Called with the selected file on submit
    #[prop(into)]
    on_upload: Callback<web_sys::File>,
    /// Whether any upload is still pending
    #[prop(into)]
    uploading: Signal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let files: Vec<web_sys::File> = input_ref
            .get()
            .and_then(|input| input.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        submit_first(files, |file| on_upload.call(file));
    };

    view! {
        <form on:submit=on_submit class="flex flex-wrap items-center gap-3">
            <input
                type="file"
                node_ref=input_ref
                class="text-sm file:mr-3 file:px-4 file:py-2 file:rounded-lg file:border-0 file:bg-gray-200 dark:file:bg-gray-700"
            />
            <button
                type="submit"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors flex items-center space-x-2"
            >
                {move || {
                    if uploading.get() {
                        view! {
                            <InlineLoading />
                            <span>"Uploading..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Upload"</span> }.into_view()
                    }
                }}
            </button>
        </form>
    }
}
