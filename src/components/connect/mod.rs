//! Connect form.
//!
//! Asks for a WebID and/or a pod URL. Authentication itself is left to the
//! browser: requests carry its credentials for the pod origin.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::core::session_store;
use crate::models::{ConnectForm, ConnectionState};

stylance::import_crate_style!(css, "src/components/connect/connect.module.css");

#[component]
pub fn ConnectPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let remembered = session_store::load()
        .map(|session| ConnectForm::from_session(&session))
        .unwrap_or_default();
    let web_id = RwSignal::new(remembered.web_id);
    let pod_url = RwSignal::new(remembered.pod_url);
    let form_error = RwSignal::new(None::<String>);

    let connecting = Signal::derive(move || {
        ctx.connection.with(|c| matches!(c, ConnectionState::Connecting))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ConnectForm {
            web_id: web_id.get_untracked(),
            pod_url: pod_url.get_untracked(),
        };
        match form.to_session() {
            Ok(session) => {
                form_error.set(None);
                ctx.connect(session);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class=css::panel>
            <form class=css::card on:submit=on_submit>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::POD /></span>
                    {APP_NAME}
                </h1>
                <p class=css::hint>
                    "Enter your WebID to discover your pod, or the pod URL directly."
                </p>

                <label class=css::field>
                    <span class=css::fieldLabel>"WebID"</span>
                    <input
                        class=css::input
                        type="url"
                        placeholder="https://alice.solidcommunity.net/profile/card#me"
                        prop:value=move || web_id.get()
                        on:input=move |ev| web_id.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span class=css::fieldLabel>"Pod URL"</span>
                    <input
                        class=css::input
                        type="url"
                        placeholder="https://alice.solidcommunity.net/"
                        prop:value=move || pod_url.get()
                        on:input=move |ev| pod_url.set(event_target_value(&ev))
                    />
                </label>

                {move || form_error.get().map(|msg| view! {
                    <p class=css::error role="alert">
                        <span class=css::errorIcon><Icon icon=ic::ALERT /></span>
                        {msg}
                    </p>
                })}

                <button class=css::submit type="submit" disabled=move || connecting.get()>
                    {move || if connecting.get() { "Connecting..." } else { "Connect" }}
                </button>

                <p class=css::version>{format!("{} v{}", APP_NAME, APP_VERSION)}</p>
            </form>
        </div>
    }
}
