//! Main explorer component.
//!
//! Header, error banner, folder listing with the opened file beside it, and
//! the breadcrumb path bar at the bottom.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: listing on the left, opened file on the right
//! - **Mobile (< 768px)**: the opened file covers the listing

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::Intent;

use super::pathbar::PathBar;
use super::{CreateSheet, FileList, Header};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::viewer::FilePanel;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Pod explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_open_file = Signal::derive(move || ctx.dashboard.with(|d| d.open_file.is_some()));
    let has_root = Signal::derive(move || ctx.dashboard.with(|d| d.path.is_some()));
    let sheet_open = Signal::derive(move || ctx.sheet.get().is_open());

    view! {
        <div class=css::explorer>
            <Header />
            <ErrorBanner />

            <div class=css::body>
                <Show
                    when=move || has_root.get()
                    fallback=|| view! {
                        <div class=css::emptyState>
                            <p>"Could not determine the root folder of this pod."</p>
                            <p class=css::hint>"Check the WebID or enter the pod URL directly."</p>
                        </div>
                    }
                >
                    <div class=move || {
                        if has_open_file.get() {
                            format!("{} {}", css::fileListPane, css::fileListPaneWithViewer)
                        } else {
                            css::fileListPane.to_string()
                        }
                    }>
                        <FileList />
                    </div>
                </Show>

                <Show when=move || has_open_file.get()>
                    <FilePanel />
                </Show>
            </div>

            <PathBar />

            <Show when=move || sheet_open.get()>
                <CreateSheet />
            </Show>
        </div>
    }
}

/// Dismissible banner for the last error.
#[component]
fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let error = Signal::derive(move || ctx.dashboard.with(|d| d.error.clone()));

    view! {
        {move || error.get().map(|msg| view! {
            <div class=css::errorBanner role="alert">
                <span class=css::errorIcon><Icon icon=ic::ALERT /></span>
                <span class=css::errorText>{msg}</span>
                <button
                    class=css::errorDismiss
                    on:click=move |_| ctx.dispatch(Intent::DismissError)
                    title="Dismiss"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        })}
    }
}
