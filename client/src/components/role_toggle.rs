//! User/admin switch in the desk header.

use leptos::prelude::*;

use crate::state::role::{Role, RoleState};

#[component]
pub fn RoleToggle() -> impl IntoView {
    let role = expect_context::<RwSignal<RoleState>>();

    view! {
        <div class="role-toggle" role="group" aria-label="Viewer role">
            {Role::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="btn role-toggle__option"
                            class:role-toggle__option--active=move || role.get().role() == option
                            aria-pressed=move || if role.get().role() == option { "true" } else { "false" }
                            on:click=move |_| role.update(|r| r.set_role(option))
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="role-toggle__hint">
                {move || {
                    if role.get().role().can_transition() {
                        "Admin mode: status changes enabled"
                    } else {
                        "User mode"
                    }
                }}
            </span>
        </div>
    }
}
