//! Stats cards with count-up animation.

use leptos::prelude::*;

use crate::net::types::StatsSnapshot;
use crate::state::stats::StatsState;

#[component]
pub fn StatsSummary(
    /// Advances each time the counters must be refetched.
    #[prop(into)]
    refresh: Signal<u64>,
) -> impl IntoView {
    let stats = RwSignal::new(StatsState::default());

    Effect::new(move || {
        refresh.track();
        stats.update(StatsState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_stats().await;
            if let Some(snapshot) = stats.try_update(|s| s.finish_load(result)) {
                animate(stats, &snapshot);
            }
        });
    });

    view! {
        <section class="stats">
            <Show
                when=move || !stats.with(StatsState::is_loading)
                fallback=|| {
                    view! {
                        <div class="stats__cards">
                            <div class="stat-card stat-card--placeholder"></div>
                            <div class="stat-card stat-card--placeholder"></div>
                            <div class="stat-card stat-card--placeholder"></div>
                        </div>
                    }
                }
            >
                <div class="stats__cards">
                    <StatCard label="Total Tickets" value=Signal::derive(move || stats.with(|s| s.displayed.total.to_string()))/>
                    <StatCard label="Open Tickets" value=Signal::derive(move || stats.with(|s| s.displayed.open.to_string()))/>
                    <StatCard label="Avg / Day" value=Signal::derive(move || stats.with(|s| s.displayed.avg_label()))/>
                </div>
                <Show when=move || stats.with(|s| s.snapshot.as_ref().is_some_and(StatsSnapshot::has_breakdown))>
                    <Breakdown snapshot=Signal::derive(move || stats.with(|s| s.snapshot.clone().unwrap_or_default()))/>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn Breakdown(snapshot: Signal<StatsSnapshot>) -> impl IntoView {
    let rows = move || {
        let snapshot = snapshot.get();
        [("Status", snapshot.by_status), ("Priority", snapshot.by_priority), ("Category", snapshot.by_category)]
            .into_iter()
            .filter(|(_, counts)| !counts.is_empty())
            .map(|(heading, counts)| {
                view! {
                    <div class="stats-breakdown__group">
                        <h4>{heading}</h4>
                        <ul>
                            {counts
                                .into_iter()
                                .map(|(key, count)| view! { <li><span>{key}</span>" "<strong>{count.to_string()}</strong></li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <div class="stats-breakdown">{rows}</div> }
}

/// Run the count-up from zero to `snapshot`, abandoning the run as soon as a
/// newer one starts.
#[cfg(feature = "hydrate")]
fn animate(stats: RwSignal<StatsState>, snapshot: &StatsSnapshot) {
    use crate::util::count_up::CountUp;

    let Some(run) = stats.try_update(StatsState::begin_animation) else {
        return;
    };
    let count_up = CountUp::new(snapshot);
    leptos::task::spawn_local(async move {
        let interval = std::time::Duration::from_millis(u64::from(count_up.step_interval_ms()));
        for frame in count_up.frames() {
            gloo_timers::future::sleep(interval).await;
            if !stats.try_update(|s| s.apply_frame(run, frame)).unwrap_or(false) {
                break;
            }
        }
    });
}
