//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::common::ButtonVariant;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageShell;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell>
            <div class="text-center py-5">
                <Icon name=icons::ALERT_CIRCLE class="icon-large mb-4" />

                <h1 class="display-4 fw-bold mb-3">"404"</h1>
                <h2 class="text-title mb-2">"Page Not Found"</h2>
                <p class="text-secondary mb-4">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="d-flex justify-content-center gap-3">
                    <A href="/register" attr:class=ButtonVariant::Primary.class()>"Register"</A>
                    <A href="/main-passenger" attr:class=ButtonVariant::Secondary.class()>
                        "Find a ride"
                    </A>
                </div>
            </div>
        </PageShell>
    }
}
