//! Page chrome shared by every route
//!
//! Shows the brand header and, for a signed-in user, their first name and a
//! sign-out action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_session_context;
use crate::ui::common::ButtonVariant;
use crate::ui::icon::{Icon, icons};

/// Header bar
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        session.teardown();
        navigate("/register", Default::default());
    };

    view! {
        <nav class="navbar bg-body-tertiary mb-4">
            <div class="container">
                <A href="/" attr:class="navbar-brand fw-bold">"RideShare"</A>
                {move || {
                    if session.loading.get() || !session.authenticated.get() {
                        return ().into_any();
                    }
                    let name = session.first_name().unwrap_or_default();
                    let handle_logout = handle_logout.clone();
                    view! {
                        <div class="d-flex align-items-center gap-3">
                            <span class="text-secondary">{name}</span>
                            <button
                                type="button"
                                class=format!("{} btn-sm", ButtonVariant::Secondary.class())
                                on:click=handle_logout
                            >
                                <Icon name=icons::LOGOUT class="icon-text" />
                                " Sign out"
                            </button>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </nav>
    }
}

/// Header plus a centered content container
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <Header />
        <main class="container pb-5">{children()}</main>
    }
}
