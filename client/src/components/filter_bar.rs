//! Category/priority/status/search narrowing for the ticket list.

use leptos::prelude::*;

use crate::net::types::{Category, Priority, TicketFilter, TicketStatus};

#[component]
pub fn FilterBar(filter: RwSignal<TicketFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <select
                class="filter-bar__select"
                aria-label="Category"
                prop:value=move || filter.with(|f| f.category.map_or("", Category::as_str).to_owned())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.category = Category::parse(&value));
                }
            >
                <option value="">"All categories"</option>
                {Category::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="filter-bar__select"
                aria-label="Priority"
                prop:value=move || filter.with(|f| f.priority.map_or("", Priority::as_str).to_owned())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.priority = Priority::parse(&value));
                }
            >
                <option value="">"All priorities"</option>
                {Priority::ALL
                    .into_iter()
                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="filter-bar__select"
                aria-label="Status"
                prop:value=move || filter.with(|f| f.status.map_or("", TicketStatus::as_str).to_owned())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.status = TicketStatus::parse(&value));
                }
            >
                <option value="">"All statuses"</option>
                {TicketStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            // Search applies on change (enter or blur), not per keystroke.
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search title or description"
                prop:value=move || filter.with(|f| f.search.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                }
            />
            <Show when=move || !filter.with(TicketFilter::is_empty)>
                <button class="btn filter-bar__clear" on:click=move |_| filter.set(TicketFilter::default())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
