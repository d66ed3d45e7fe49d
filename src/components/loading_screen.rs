//! Neutral waiting indicator shown while the session is resolving.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-busy="true">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}
