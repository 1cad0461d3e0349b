//! Support desk page: stats, composer, and ticket list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the only route. It turns the composer's creation callback
//! into a `TicketEvents` publication and hands list and stats the derived
//! sequence, so each child can be mounted and tested on its own.

use leptos::prelude::*;

use crate::components::role_toggle::RoleToggle;
use crate::components::stats_summary::StatsSummary;
use crate::components::ticket_composer::TicketComposer;
use crate::components::ticket_list::TicketList;
use crate::net::types::Ticket;
use crate::state::events::TicketEvents;

#[component]
pub fn DeskPage() -> impl IntoView {
    let events = expect_context::<RwSignal<TicketEvents>>();

    let on_created = Callback::new(move |ticket: Ticket| {
        leptos::logging::log!("ticket {} created", ticket.id);
        events.update(TicketEvents::publish_created);
    });
    let refresh = Signal::derive(move || events.with(TicketEvents::created_seq));

    view! {
        <div class="desk-page">
            <header class="desk-page__header toolbar">
                <div class="toolbar__brand">
                    <h1>"Support Desk"</h1>
                    <p class="toolbar__tagline">"Tickets, triage, and status at a glance"</p>
                </div>
                <span class="toolbar__spacer"></span>
                <RoleToggle/>
            </header>

            <StatsSummary refresh=refresh/>

            <div class="desk-page__grid">
                <TicketComposer on_created=on_created/>
                <TicketList refresh=refresh/>
            </div>
        </div>
    }
}
