//! Signed-in landing page showing the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Looks the user up once on mount through `/api/auth/user/`, stores the
//! result in the `AuthState` context and redirects to `/login` when nobody is
//! signed in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_api;
use crate::net::AuthService;
use crate::state::auth::{AuthState, should_redirect_unauth};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let auth = AuthService::new(use_api());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    Effect::new(move || {
        if should_redirect_unauth(&auth_state.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "csr")]
    {
        use crate::net::types::CurrentUser;

        auth_state.set(AuthState::loading());
        let lookup = auth.clone();
        leptos::task::spawn_local(async move {
            let user = match lookup.get_current_user().await {
                Ok(body) => CurrentUser::from_value(&body),
                Err(e) => {
                    log::info!("current user lookup failed: {e}");
                    None
                }
            };
            auth_state.set(AuthState::settled(user));
        });
    }

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.logout().await {
                    Ok(()) => {
                        auth_state.set(AuthState::settled(None));
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/login");
                        }
                    }
                    Err(e) => info.set(format!("Logout failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &auth;
        }
    };

    let username = move || auth_state.get().user.map(|u| u.username).unwrap_or_default();
    let role = move || auth_state.get().user.and_then(|u| u.role).unwrap_or_default();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>{move || if auth_state.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <span class="toolbar__user">{username}</span>
                    <span class="toolbar__role">{role}</span>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>
                <Show when=move || !info.get().is_empty()>
                    <p class="home-page__message">{move || info.get()}</p>
                </Show>
            </div>
        </Show>
    }
}
