//! Alert banners for form feedback. Messages come from the auth API's
//! `detail` field or fixed copy, never from tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, role) = match kind {
        AlertKind::Error => (
            "mb-4 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            "alert",
        ),
        AlertKind::Success => (
            "mb-4 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800",
            "status",
        ),
    };

    view! { <div class=class role=role>{message}</div> }
}
