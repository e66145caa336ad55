//! Page frame shared by every route: a slim header, the centered content
//! column, and a footer with the build commit.

use crate::{app_lib::build_info, features::auth::navigation::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <div class="min-h-screen flex flex-col bg-gray-100">
            <header class="bg-white shadow-sm">
                <div class="max-w-screen-lg mx-auto flex items-center justify-between px-6 py-4">
                    <A href=paths::LOGIN {..} class="text-lg font-semibold text-gray-800">
                        "LogPages"
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-lg mx-auto px-6 py-10">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                "build " <span class="font-mono">{commit}</span>
            </footer>
        </div>
    }
}
