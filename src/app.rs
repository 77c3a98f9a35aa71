use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::Config;
use crate::ui::pages::{MainDriverPage, MainPassengerPage, NotFoundPage, RegisterPage};
use crate::ui::provide_session_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Backend location and submission policies, fixed at build time
    let config = Config::from_build_env();
    provide_session_context(config.token_check);
    provide_context(config);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/rideshare.css"/>

        // sets the document title
        <Title text="RideShare"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=RegisterPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/main-passenger") view=MainPassengerPage />
                <Route path=path!("/main-driver") view=MainDriverPage />
            </Routes>
        </Router>
    }
}
