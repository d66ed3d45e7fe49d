//! Sign-in screen (public group).

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::routes::SIGN_UP_PATH;

/// Sign-in page — hands off to the identity service's hosted login.
#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <a href=config.login_url() rel="external" class="btn btn--primary">
                "Continue"
            </a>
            <a href=SIGN_UP_PATH class="auth-page__switch">"No account yet?"</a>
        </div>
    }
}
