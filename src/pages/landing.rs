//! Public landing screen shown at the root location.

use leptos::prelude::*;

use crate::routes::{SIGN_IN_PATH, SIGN_UP_PATH};

/// Landing page — entry point into the public screen group.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Welcome"</h1>
            <a href=SIGN_IN_PATH class="btn btn--primary">"Sign in"</a>
            <a href=SIGN_UP_PATH class="btn">"Create an account"</a>
        </div>
    }
}
