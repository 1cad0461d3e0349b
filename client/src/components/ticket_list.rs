//! Ticket list with filters and admin status transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads on mount, whenever `refresh` advances, and whenever the filter
//! changes. A successful status change triggers a full reload rather than a
//! local patch.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::ticket_card::TicketCard;
use crate::net::types::{TicketFilter, TicketStatus};
use crate::state::role::RoleState;
use crate::state::tickets::TicketsState;

#[component]
pub fn TicketList(
    /// Advances each time the list must be refetched.
    #[prop(into)]
    refresh: Signal<u64>,
) -> impl IntoView {
    let role = expect_context::<RwSignal<RoleState>>();
    let tickets = RwSignal::new(TicketsState::default());
    let filter = RwSignal::new(TicketFilter::default());

    Effect::new(move || {
        refresh.track();
        let current = filter.get();
        load_tickets(tickets, current);
    });

    let on_transition = Callback::new(move |(id, target): (String, TicketStatus)| {
        let role_now = role.get_untracked().role();
        let Some(patch) = tickets.try_update(|s| s.begin_transition(role_now, &id, target)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_ticket_status(&id, patch).await;
            let reload = tickets.try_update(|s| s.finish_transition(&id, result)).unwrap_or(false);
            if reload {
                load_tickets(tickets, filter.get_untracked());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = patch;
    });

    view! {
        <section class="panel ticket-list">
            <header class="panel__header ticket-list__header">
                <h2>"Tickets"</h2>
                <span class="ticket-list__count">
                    {move || format!("{} total", tickets.with(|s| s.items.len()))}
                </span>
            </header>
            <FilterBar filter=filter/>
            <Show when=move || tickets.with(|s| s.notice.is_some())>
                <p class="ticket-list__notice" role="alert">
                    {move || tickets.with(|s| s.notice.clone().unwrap_or_default())}
                    <button class="btn ticket-list__retry" on:click=move |_| load_tickets(tickets, filter.get_untracked())>
                        "Retry"
                    </button>
                </p>
            </Show>
            <Show
                when=move || !tickets.with(TicketsState::is_initial_load)
                fallback=|| view! { <p class="ticket-list__loading">"Loading tickets..."</p> }
            >
                <Show
                    when=move || !tickets.with(TicketsState::is_empty)
                    fallback=|| {
                        view! {
                            <div class="ticket-list__empty">
                                <p>"No tickets yet"</p>
                                <p class="ticket-list__empty-hint">"Create your first ticket to get started."</p>
                            </div>
                        }
                    }
                >
                    <div class="ticket-list__items">
                        {move || {
                            tickets
                                .get()
                                .items
                                .into_iter()
                                .map(|ticket| {
                                    let id = ticket.id.clone();
                                    let busy = Signal::derive(move || tickets.with(|s| s.is_transitioning(&id)));
                                    view! { <TicketCard ticket=ticket busy=busy on_transition=on_transition/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

fn load_tickets(tickets: RwSignal<TicketsState>, filter: TicketFilter) {
    let seq = tickets.try_update(TicketsState::begin_load).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_tickets(&filter).await;
        tickets.update(|s| s.finish_load(seq, result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, filter);
}
