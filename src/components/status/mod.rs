//! Status bar component.
//!
//! Displays session, pod, and location information plus a loading marker.

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::derive_name;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::pod_summary;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar component displaying session, pod, and location information.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Full labels: `Session: alice.example \| Pod: alice @ Inrupt \| Location: notes` |
/// | Mobile (< 480px) | Values only, pod hidden |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let session_name = Signal::derive(move || ctx.connection.with(|c| c.display_name()));
    let pod_name = Signal::derive(move || {
        ctx.dashboard.with(|d| {
            d.pod_info
                .as_ref()
                .map(pod_summary)
                .unwrap_or_else(|| "-".to_string())
        })
    });
    let location = Signal::derive(move || {
        ctx.dashboard.with(|d| {
            d.path
                .as_ref()
                .map(|p| derive_name(p.current()))
                .unwrap_or_else(|| "-".to_string())
        })
    });
    let loading = Signal::derive(move || ctx.dashboard.with(|d| d.loading));

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelText>"Session:"</span>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{session_name}</span>
                </span>

                <span class=css::labelPurple>
                    <span class=css::labelText>"Pod:"</span>
                    <span class=css::labelIcon><Icon icon=ic::POD /></span>
                    <span class=css::value>{pod_name}</span>
                </span>

                <span class=css::labelCyan>
                    <span class=css::labelText>"Location:"</span>
                    <span class=css::labelIcon><Icon icon=ic::LOCATION /></span>
                    <span class=css::value>{location}</span>
                </span>
            </div>

            <Show when=move || loading.get()>
                <span class=css::loading aria-live="polite">"Loading..."</span>
            </Show>
        </header>
    }
}
