//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::ApiClient;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// The shared API client registered by [`App`].
///
/// # Panics
///
/// Panics when called outside the component tree rooted at [`App`].
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

/// Root application component.
///
/// Registers the shared API client and auth state for the whole tree, then
/// installs client-side routing.
#[component]
pub fn App(client: ApiClient) -> impl IntoView {
    provide_meta_context();

    provide_context(client);
    provide_context(RwSignal::new(AuthState::loading()));

    view! {
        <Title text="Lab Requisition"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
