//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::desk::DeskPage;
use crate::state::events::TicketEvents;
use crate::state::role::RoleState;

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
/// Provides the viewer role and ticket event contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let role = RwSignal::new(RoleState::default());
    let events = RwSignal::new(TicketEvents::default());

    provide_context(role);
    provide_context(events);

    view! {
        <Stylesheet id="leptos" href="/pkg/ticketdesk.css"/>
        <Title text="Support Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DeskPage/>
            </Routes>
        </Router>
    }
}
