//! Driver landing page

use leptos::prelude::*;

use crate::core::rides::{PLACEHOLDER_RIDE_COUNT, placeholder_rides};
use crate::ui::auth::use_session_context;
use crate::ui::common::InfoMessage;
use crate::ui::layout::PageShell;
use crate::ui::ride_card::RideGrid;

/// Driver landing page component
#[component]
pub fn MainDriverPage() -> impl IntoView {
    let session = use_session_context();
    let rides = Signal::stored(placeholder_rides(PLACEHOLDER_RIDE_COUNT));

    let greeting = move || match session.first_name() {
        Some(name) => format!("Welcome back, {}", name),
        None => "Welcome back".to_string(),
    };

    let notice = Signal::derive(move || {
        (!session.loading.get() && !session.authenticated.get())
            .then(|| "Register as a driver to start accepting trips".to_string())
    });

    view! {
        <PageShell>
            <h2 class="text-title mb-2 text-center">{greeting}</h2>
            <InfoMessage message=notice />
            <p class="text-center text-secondary my-4">"Your upcoming trips"</p>
            <RideGrid rides=rides />
        </PageShell>
    }
}
