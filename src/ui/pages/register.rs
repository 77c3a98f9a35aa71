//! Registration page component

use leptos::prelude::*;

use crate::ui::auth::RegistrationForm;
use crate::ui::layout::PageShell;

/// Registration page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PageShell>
            <h2 class="text-title text-center mb-4">"Registration"</h2>
            <RegistrationForm />
        </PageShell>
    }
}
