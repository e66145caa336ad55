use leptos::prelude::*;

/// Small inline spinner with a status label, shown inside busy buttons.
#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2" role="status" aria-live="polite">
            <span class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-white/40 border-t-white"></span>
            {label}
        </span>
    }
}
