mod landing;
mod login;
mod not_found;

pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use crate::features::auth::navigation::paths;
use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Routes},
    path,
};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::LOGIN /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/test") view=LandingPage />
        </Routes>
    }
}
