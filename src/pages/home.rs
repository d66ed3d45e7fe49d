//! Protected home screen; the gate's redirect target.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Home page — only reachable in practice once a session is confirmed.
///
/// Guarding deep links into protected screens is left to those screens; this
/// one simply renders nothing personal without an identity.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let signed_in = move || session.with(SessionState::is_authenticated);

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <Show when=signed_in fallback=|| view! { <p>"You are not signed in."</p> }>
                <p>"Welcome back."</p>
            </Show>
        </div>
    }
}
