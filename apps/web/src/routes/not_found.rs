//! Fallback for unknown paths.

use crate::{components::AppShell, features::auth::navigation::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
                <h1 class="text-7xl font-black text-gray-200 select-none">"404"</h1>
                <p class="mt-4 text-gray-500">"There is nothing at this address."</p>
                <A
                    href=paths::LOGIN
                    {..}
                    class="mt-6 inline-flex items-center rounded-md bg-blue-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-700"
                >
                    "Go to sign in"
                </A>
            </div>
        </AppShell>
    }
}
