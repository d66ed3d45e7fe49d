//! Sign-up screen (public group).

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::routes::SIGN_IN_PATH;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
            <a href=config.register_url() rel="external" class="btn btn--primary">
                "Continue"
            </a>
            <a href=SIGN_IN_PATH class="auth-page__switch">"Already registered?"</a>
        </div>
    }
}
