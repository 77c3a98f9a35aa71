use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::RideSummary;
use crate::ui::icon::{Icon, icons};

/// Highest driver rating
const MAX_RATING: u8 = 5;

/// Card summarizing one ride
#[component]
pub fn RideCard(ride: RideSummary) -> impl IntoView {
    let date = ride.formatted_date();
    let time = ride.formatted_time();
    let price = ride.formatted_price();

    let stars = (1..=MAX_RATING)
        .map(|n| {
            let name = if n <= ride.driver_rating {
                icons::STAR
            } else {
                icons::STAR_OUTLINE
            };
            view! { <Icon name=name class="icon-star" /> }
        })
        .collect_view();

    view! {
        <div class="card h-100 ride-card">
            <div class="card-body">
                <div class="d-flex align-items-center gap-3 mb-3">
                    <img
                        src=ride.driver_photo
                        class="rounded-circle driver-photo"
                        alt=ride.driver_name.clone()
                    />
                    <div>
                        <h5 class="card-title mb-1">{ride.driver_name}</h5>
                        <div class="d-flex" title=format!("{} of {}", ride.driver_rating, MAX_RATING)>
                            {stars}
                        </div>
                    </div>
                </div>

                <p class="mb-1">
                    <Icon name=icons::MAP_PIN class="icon-text" />
                    {ride.pickup}
                </p>
                <p class="mb-3">
                    <Icon name=icons::FLAG class="icon-text" />
                    {ride.destination}
                </p>

                <div class="d-flex justify-content-between align-items-center">
                    <span class="text-secondary">
                        <Icon name=icons::CALENDAR class="icon-text" />
                        {date}" "{time}
                    </span>
                    <span class="fw-bold">{price}</span>
                </div>
            </div>
            <div class="card-footer bg-transparent border-0">
                <A href=ride.link attr:class="btn btn-outline-primary w-100">
                    "View ride"
                </A>
            </div>
        </div>
    }
}

/// Responsive grid of ride cards
#[component]
pub fn RideGrid(
    /// Rides to show
    #[prop(into)]
    rides: Signal<Vec<RideSummary>>,
) -> impl IntoView {
    view! {
        <div class="row row-cols-1 row-cols-md-2 row-cols-xl-3 g-3">
            {move || {
                let rides = rides.get();
                if rides.is_empty() {
                    view! {
                        <p class="text-center text-secondary w-100">"No rides match your search"</p>
                    }.into_any()
                } else {
                    rides
                        .into_iter()
                        .map(|ride| view! {
                            <div class="col">
                                <RideCard ride=ride />
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
