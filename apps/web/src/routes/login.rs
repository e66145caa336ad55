//! Login page: email step, then one-time code step.
//!
//! All transitions live in `features::auth::flow`; this page renders the
//! current `LoginFlow` and forwards input and submissions to it.

use crate::{
    app_lib::config::AppConfig,
    components::{
        Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, ButtonVariant, Spinner,
    },
    features::auth::{
        claims::decode_claims,
        client::HttpAuthGateway,
        flow::{LoginFlow, submit},
        guard,
        navigation::Destination,
        state::session_store,
        validate::CODE_LENGTH,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::new());
    let demo_email = AppConfig::load().demo_email;
    let stored_session = session_store().load();
    let stored_email = stored_session
        .as_ref()
        .and_then(|credentials| decode_claims(credentials.access_token()))
        .and_then(|claims| claims.email().map(str::to_string));
    let (signed_in, set_signed_in) = signal(stored_session.is_some());

    let busy = Signal::derive(move || flow.with(LoginFlow::is_busy));
    let code_entry = move || flow.with(LoginFlow::is_code_entry);

    let (destination, set_destination) = signal::<Option<Destination>>(None);
    Effect::new(move |_| {
        if let Some(destination) = destination.get() {
            navigate(destination.path(), Default::default());
        }
    });

    let on_sign_out = move |()| {
        let navigator = move |destination: Destination| set_destination.set(Some(destination));
        guard::logout(&session_store(), &navigator);
        set_signed_in.set(false);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        spawn_local(async move {
            let navigator = move |destination: Destination| set_destination.set(Some(destination));
            submit(&flow, &HttpAuthGateway, &session_store(), &navigator).await;
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto rounded-lg bg-white p-8 shadow">
                <h1 class="mb-2 text-2xl font-semibold text-gray-900">"Sign in"</h1>
                <p class="mb-6 text-sm text-gray-500">
                    {move || {
                        if code_entry() {
                            "Enter the one-time code we emailed you."
                        } else {
                            "Enter your email address to receive a one-time code."
                        }
                    }}
                </p>

                {move || {
                    flow.with(|state| state.error().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                {move || {
                    flow.with(|state| state.info().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
                }}

                <Show when=move || signed_in.get()>
                    <AlreadySignedInPanel email=stored_email.clone() on_sign_out=on_sign_out />
                </Show>

                <form on:submit=on_submit novalidate>
                    <Show
                        when=code_entry
                        fallback=move || {
                            view! {
                                <div class="mb-5">
                                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                                        "Email address"
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        class="block w-full rounded-md border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500"
                                        autocomplete="email"
                                        placeholder="your@email.com"
                                        autofocus
                                        required
                                        prop:value=move || flow.with(|state| state.email().to_string())
                                        on:input=move |event| {
                                            flow.update(|state| state.set_email(event_target_value(&event)))
                                        }
                                    />
                                </div>
                                <Button button_type="submit" disabled=busy>
                                    {move || {
                                        if busy.get() {
                                            view! { <Spinner label="Sending..." /> }.into_any()
                                        } else {
                                            "Send code".into_any()
                                        }
                                    }}
                                </Button>
                            }
                        }
                    >
                        <div class="mb-5">
                            <label class="block mb-2 text-sm font-medium text-gray-900" for="code">
                                {format!("One-time code ({CODE_LENGTH} digits)")}
                            </label>
                            <input
                                id="code"
                                type="text"
                                inputmode="numeric"
                                class="block w-full rounded-md border border-gray-300 bg-gray-50 p-2.5 text-center font-mono text-lg tracking-widest text-gray-900 focus:border-blue-500 focus:ring-blue-500"
                                autocomplete="one-time-code"
                                placeholder="123456"
                                maxlength=CODE_LENGTH.to_string()
                                pattern="[0-9]{6}"
                                autofocus
                                required
                                prop:value=move || {
                                    flow.with(|state| state.code().unwrap_or_default().to_string())
                                }
                                on:input=move |event| {
                                    flow.update(|state| state.set_code(event_target_value(&event)))
                                }
                            />
                        </div>
                        <Button button_type="submit" disabled=busy>
                            {move || {
                                if busy.get() {
                                    view! { <Spinner label="Verifying..." /> }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }
                            }}
                        </Button>
                        <Button
                            variant=ButtonVariant::Link
                            disabled=busy
                            on:click=move |_| {
                                flow.update(|state| {
                                    state.change_email();
                                });
                            }
                        >
                            "Use a different email"
                        </Button>
                    </Show>
                </form>

                {demo_email
                    .map(|email| {
                        view! {
                            <p class="mt-6 text-xs text-gray-500">"Demo account: " {email}</p>
                        }
                    })}
            </div>
        </AppShell>
    }
}
