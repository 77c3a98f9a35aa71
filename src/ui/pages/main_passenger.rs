//! Passenger landing page
//!
//! Lists upcoming rides with a search bar on top.

use leptos::prelude::*;

use crate::core::rides::{PLACEHOLDER_RIDE_COUNT, filter_rides, placeholder_rides};
use crate::ui::common::SearchField;
use crate::ui::layout::PageShell;
use crate::ui::ride_card::RideGrid;

/// Passenger landing page component
#[component]
pub fn MainPassengerPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let rides = StoredValue::new(placeholder_rides(PLACEHOLDER_RIDE_COUNT));

    let visible = Signal::derive(move || {
        let query = query.get();
        rides.with_value(|rides| filter_rides(rides, &query))
    });

    view! {
        <PageShell>
            <SearchField
                placeholder="Where to?"
                value=query.into()
                on_input=Callback::new(move |value| query.set(value))
            />

            <div>
                <h2 class="text-title mb-4 text-center">"Next scheduled rides"</h2>
                <RideGrid rides=visible />
            </div>
        </PageShell>
    }
}
