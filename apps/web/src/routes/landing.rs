//! Authenticated landing page. The session guard runs once on mount: without
//! a stored access token the user is sent back to login, otherwise the token's
//! claims (if readable) are shown. Nothing here is an access control boundary.

use crate::{
    components::{AppShell, Button, ButtonVariant},
    features::auth::{
        claims::Claims,
        guard::{self, GuardOutcome},
        navigation::Destination,
        state::session_store,
    },
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let (destination, set_destination) = signal::<Option<Destination>>(None);
    let (session, set_session) = signal::<Option<Option<Claims>>>(None);

    Effect::new(move |_| {
        if let Some(destination) = destination.get() {
            navigate(destination.path(), Default::default());
        }
    });

    Effect::new(move |_| {
        let navigator = move |destination: Destination| set_destination.set(Some(destination));
        let outcome = guard::activate(&session_store(), &navigator);
        if let GuardOutcome::Authenticated { claims } = outcome {
            set_session.set(Some(claims));
        }
    });

    let on_logout = move |_| {
        set_session.set(None);
        let navigator = move |destination: Destination| set_destination.set(Some(destination));
        guard::logout(&session_store(), &navigator);
    };

    view! {
        <AppShell>
            <Show when=move || session.with(Option::is_some)>
                <div class="rounded-lg bg-white p-8 shadow">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h1 class="text-2xl font-semibold text-gray-900">"Signed in"</h1>
                            <p class="mt-2 text-gray-600">
                                "Your one-time code was accepted and the identity provider issued a session."
                            </p>
                        </div>
                        <Button variant=ButtonVariant::Danger on:click=on_logout>
                            "Sign out"
                        </Button>
                    </div>

                    {move || session.get().flatten().map(|claims| view! { <ClaimsPanel claims=claims /> })}

                    <div class="mt-8 rounded-md border border-cyan-200 bg-cyan-50 p-5 text-sm text-cyan-900">
                        <h2 class="mb-2 font-semibold">"How this login works"</h2>
                        <ol class="list-decimal space-y-1 pl-5">
                            <li>"You enter your email address."</li>
                            <li>"The server generates a one-time code and emails it to you."</li>
                            <li>"You enter the code."</li>
                            <li>"The server exchanges it for tokens from the identity provider."</li>
                            <li>"You land on this page."</li>
                        </ol>
                    </div>
                </div>
            </Show>
        </AppShell>
    }
}

/// Summary line plus the raw decoded claims.
#[component]
fn ClaimsPanel(claims: Claims) -> impl IntoView {
    let name = claims.display_name().map(str::to_string);
    let email = claims.email().map(str::to_string);
    let expires_at = claims.expires_at();
    let pretty = claims.to_pretty_json();

    view! {
        <div class="mt-6 rounded-md border border-gray-200 bg-gray-50 p-5">
            <h2 class="mb-3 font-semibold text-gray-700">"Token claims"</h2>
            <dl class="mb-4 grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 text-sm">
                {name.map(|name| view! { <dt class="text-gray-500">"User"</dt><dd>{name}</dd> })}
                {email.map(|email| view! { <dt class="text-gray-500">"Email"</dt><dd>{email}</dd> })}
                {expires_at
                    .map(|exp| {
                        view! {
                            <dt class="text-gray-500">"Expires"</dt>
                            <dd class="font-mono">{exp}" (unix)"</dd>
                        }
                    })}
            </dl>
            <pre class="overflow-auto rounded border border-gray-200 bg-white p-4 text-xs">{pretty}</pre>
        </div>
    }
}
