//! Root application component with routing, session context and the gate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::auth::gate::GatePhase;
use crate::auth::redirect::{RedirectTracker, gate_step};
use crate::components::loading_screen::LoadingScreen;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, landing::LandingPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::routes::Location;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session cell. The write half goes to the resolver task only;
/// descendants get the read half and the client config through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let (session, set_session) = signal(SessionState::Loading);
    provide_context(session);
    provide_context(config.clone());

    spawn_session_resolver(&config, set_session);

    view! {
        <Stylesheet id="leptos" href="/pkg/session-gate.css"/>
        <Title text="Session Gate"/>

        <Router>
            <RouteGate/>
            <Show when=move || !session.get().is_resolving() fallback=|| view! { <LoadingScreen/> }>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                </Routes>
            </Show>
        </Router>
    }
}

/// Schedule the launch-time identity check on the event loop.
///
/// A response that arrives after the root has been torn down finds a
/// disposed signal and is dropped.
fn spawn_session_resolver(config: &ClientConfig, set_session: WriteSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::auth::resolver::{LAUNCH, SessionResolver};
        use crate::net::api::HttpIdentitySource;

        let source = HttpIdentitySource::new(config);
        leptos::task::spawn_local(async move {
            let resolver = SessionResolver::new(source, &LAUNCH);
            if let Some(outcome) = resolver.resolve().await {
                let _ = set_session.try_update(|state| state.settle(outcome));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, set_session);
    }
}

/// Navigation adapter for the route gate.
///
/// Re-runs `decide` whenever the session or the pathname changes and applies
/// its answer with history replacement. Renders nothing.
#[component]
pub fn RouteGate() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let tracker = Rc::new(RefCell::new(RedirectTracker::default()));
    let phase = Rc::new(Cell::new(GatePhase::Deferring));

    Effect::new(move || {
        let location = Location::from_path(&pathname.get());
        let step = session.with(|state| {
            let now = GatePhase::of(state);
            if phase.replace(now) != now {
                leptos::logging::log!("gate: {now:?}");
            }
            gate_step(&mut tracker.borrow_mut(), state, &location)
        });

        if let Some((target, options)) = step {
            leptos::logging::log!("gate: {location} -> {target}");
            navigate(target, options);
        }
    });
}
