//! Ticket creation form with AI-assisted category/priority suggestion.

use leptos::prelude::*;

use crate::net::types::{Category, Priority, Ticket};
use crate::state::composer::ComposerState;
#[cfg(feature = "hydrate")]
use crate::state::composer::deliver_created;

/// Form for creating a ticket. `on_created` runs once per successful create.
#[component]
pub fn TicketComposer(on_created: Callback<Ticket>) -> impl IntoView {
    let composer = RwSignal::new(ComposerState::default());

    let on_classify = move |_| {
        let Some(request) = composer.try_update(ComposerState::begin_classify).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::classify_ticket(&request).await;
            composer.update(|s| s.finish_classify(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = composer.try_update(ComposerState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_ticket(&body).await;
            let outcome = composer.try_update(|s| s.finish_submit(result)).flatten();
            if let Some(seq) = deliver_created(outcome, |ticket| on_created.run(ticket)) {
                let delay = std::time::Duration::from_millis(u64::from(crate::state::composer::SUCCESS_NOTICE_MS));
                gloo_timers::future::sleep(delay).await;
                let _ = composer.try_update(|s| s.dismiss_success(seq));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (&body, &on_created);
    };

    view! {
        <section class="panel composer">
            <header class="panel__header">
                <h2>"Create Ticket"</h2>
                <p class="panel__subtitle">"AI-powered classification"</p>
            </header>
            <form class="composer__form" on:submit=on_submit>
                <label class="composer__label">
                    "Title"
                    <input
                        class="composer__input"
                        type="text"
                        maxlength="200"
                        placeholder="Brief summary of the issue"
                        prop:value=move || composer.with(|s| s.title.clone())
                        on:input=move |ev| composer.update(|s| s.title = event_target_value(&ev))
                    />
                </label>
                <label class="composer__label">
                    "Description"
                    <textarea
                        class="composer__input composer__input--multiline"
                        rows="4"
                        placeholder="Describe what happened"
                        prop:value=move || composer.with(|s| s.description.clone())
                        on:input=move |ev| composer.update(|s| s.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <button
                    class="btn composer__suggest"
                    type="button"
                    disabled=move || !composer.with(ComposerState::can_classify)
                    on:click=on_classify
                >
                    {move || {
                        if composer.with(|s| s.classify.is_pending()) {
                            "Analyzing..."
                        } else {
                            "Suggest category & priority"
                        }
                    }}
                </button>

                <fieldset class="composer__choices">
                    <legend>"Category"</legend>
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class="chip"
                                    class:chip--active=move || composer.with(|s| s.effective_category() == category)
                                    on:click=move |_| composer.update(|s| s.category = Some(category))
                                >
                                    <span class="chip__icon">{category.icon()}</span>
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <fieldset class="composer__choices">
                    <legend>"Priority"</legend>
                    {Priority::ALL
                        .into_iter()
                        .map(|priority| {
                            view! {
                                <button
                                    type="button"
                                    class=format!("chip chip--priority-{}", priority.as_str())
                                    class:chip--active=move || composer.with(|s| s.effective_priority() == priority)
                                    on:click=move |_| composer.update(|s| s.priority = Some(priority))
                                >
                                    {priority.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <button
                    class="btn btn--primary composer__submit"
                    type="submit"
                    disabled=move || !composer.with(ComposerState::can_submit)
                >
                    {move || if composer.with(|s| s.submit.is_pending()) { "Submitting..." } else { "Submit Ticket" }}
                </button>

                <Show when=move || composer.with(|s| s.show_success)>
                    <p class="composer__success" role="status">"Ticket created successfully."</p>
                </Show>
            </form>
        </section>
    }
}
