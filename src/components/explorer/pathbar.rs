//! Path bar component (breadcrumbs).
//!
//! Displays the navigation path at the bottom of the explorer; every
//! ancestor segment jumps back to that folder.

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::{Breadcrumb, Intent};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Path bar component displayed at the bottom of the explorer.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| {
        ctx.dashboard
            .with(|d| d.path.as_ref().map(|p| p.breadcrumbs()).unwrap_or_default())
    });

    view! {
        <nav class=css::pathbar aria-label="Breadcrumbs">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);

                crumbs
                    .into_iter()
                    .map(|crumb: Breadcrumb| {
                        let icon = if crumb.index == 0 { ic::HOME } else { ic::FOLDER };
                        let show_separator = crumb.index > 0;
                        let index = crumb.index;

                        view! {
                            <>
                                {show_separator.then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {if index < last {
                                    view! {
                                        <SegmentLink
                                            icon=icon
                                            label=crumb.label
                                            title=crumb.url
                                            on_click=move || ctx.dispatch(Intent::JumpTo(index))
                                        />
                                    }.into_any()
                                } else {
                                    view! {
                                        <SegmentCurrent icon=icon label=crumb.label />
                                    }.into_any()
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, title: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment title=title on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
