use crate::{components::ui::{Button, ButtonVariant}, features::auth::navigation::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Notice shown on the login page when a session is already stored.
#[component]
pub fn AlreadySignedInPanel(
    /// Email from the stored token's claims, when readable.
    email: Option<String>,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-6 rounded-md border border-blue-200 bg-blue-50 p-4 text-sm text-blue-900">
            <p class="mb-3">
                {match email {
                    Some(email) => format!("You are already signed in as {email}."),
                    None => "You are already signed in.".to_string(),
                }}
            </p>
            <div class="flex items-center gap-3">
                <A
                    href=paths::LANDING
                    {..}
                    class="rounded-md bg-blue-600 px-4 py-2 font-medium text-white hover:bg-blue-700"
                >
                    "Continue"
                </A>
                <Button variant=ButtonVariant::Danger on:click=move |_| on_sign_out.run(())>
                    "Sign out"
                </Button>
            </div>
        </div>
    }
}
