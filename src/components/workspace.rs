//! Top-level layout.
//!
//! Status bar on top; below it either the connect form or the explorer,
//! depending on the connection state.

use leptos::prelude::*;

use super::connect::ConnectPanel;
use super::explorer::Explorer;
use super::status::Status;
use crate::app::AppContext;
use crate::models::ConnectionState;

stylance::import_crate_style!(css, "src/components/workspace.module.css");

#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let connected = Memo::new(move |_| ctx.connection.with(ConnectionState::is_connected));

    view! {
        <div class=css::workspace>
            <Status />
            <main class=css::main>
                <Show when=move || connected.get() fallback=|| view! { <ConnectPanel /> }>
                    <Explorer />
                </Show>
            </main>
        </div>
    }
}
