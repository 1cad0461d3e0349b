//! Single ticket row in the list, with admin status controls.

use leptos::prelude::*;

use crate::net::types::{Ticket, TicketStatus};
use crate::state::role::RoleState;
use crate::util::format::{description_preview, format_created_at};

#[component]
pub fn TicketCard(
    ticket: Ticket,
    /// True while a status change for this ticket is in flight.
    #[prop(into)]
    busy: Signal<bool>,
    on_transition: Callback<(String, TicketStatus)>,
) -> impl IntoView {
    let role = expect_context::<RwSignal<RoleState>>();
    let status = ticket.status;
    let id = ticket.id.clone();

    let transition_controls = move || {
        let id = id.clone();
        TicketStatus::ALL
            .into_iter()
            .map(|target| {
                let id = id.clone();
                view! {
                    <button
                        class=format!("btn status-option status-option--{}", target.as_str())
                        class:status-option--active={target == status}
                        disabled=move || busy.get() || target == status
                        on:click=move |_| on_transition.run((id.clone(), target))
                    >
                        {target.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <article class=format!("ticket-card ticket-card--priority-{}", ticket.priority.as_str())>
            <header class="ticket-card__header">
                <span class="ticket-card__icon" title=ticket.category.label()>{ticket.category.icon()}</span>
                <h3 class="ticket-card__title">{ticket.title.clone()}</h3>
                <span class="ticket-card__id">"#"{ticket.id.clone()}</span>
            </header>
            <p class="ticket-card__description">{description_preview(&ticket.description)}</p>
            <div class="ticket-card__meta">
                <span class=format!("badge badge--category-{}", ticket.category.as_str())>
                    {ticket.category.label()}
                </span>
                <span class=format!("badge badge--priority-{}", ticket.priority.as_str())>
                    {ticket.priority.label()}
                </span>
                <span class=format!("badge badge--status-{}", status.as_str())>{status.label()}</span>
                <time class="ticket-card__time" datetime=ticket.created_at.clone()>
                    {format_created_at(&ticket.created_at)}
                </time>
            </div>
            <Show when=move || role.get().role().can_transition()>
                <div class="ticket-card__actions">
                    <span class="ticket-card__actions-label">"Status:"</span>
                    {transition_controls.clone()}
                    <Show when=move || busy.get()>
                        <span class="ticket-card__updating">"Updating..."</span>
                    </Show>
                </div>
            </Show>
        </article>
    }
}
