//! Create-item sheet.
//!
//! Slides up over the explorer with a small form: item kind, name, and the
//! text content for files. Validation happens in the dashboard reducer; the
//! sheet stays open when it rejects the request so the input is not lost.

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::{CreateRequest, Intent, ItemKind};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::SheetState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/sheet.module.css");

const NAME_INPUT_ID: &str = "create-item-name";

#[component]
pub fn CreateSheet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let initial = match ctx.sheet.get_untracked() {
        SheetState::Open(kind) => kind,
        SheetState::Closed => ItemKind::default(),
    };
    let kind = RwSignal::new(initial);
    let name = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let is_file = Signal::derive(move || kind.get() == ItemKind::File);
    let title = Signal::derive(move || SheetState::Open(kind.get()).title());

    Effect::new(move |_| {
        dom::focus_element(&format!("#{}", NAME_INPUT_ID));
    });

    let close = move || ctx.sheet.set(SheetState::Closed);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = CreateRequest {
            name: name.get_untracked(),
            kind: kind.get_untracked(),
            content: content.get_untracked(),
        };
        ctx.dispatch(Intent::Create(request));
        if ctx.dashboard.with_untracked(|d| d.error.is_none()) {
            close();
        }
    };

    let kind_button = move |target: ItemKind, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if kind.get() == target {
                        format!("{} {}", css::kindButton, css::kindButtonActive)
                    } else {
                        css::kindButton.to_string()
                    }
                }
                on:click=move |_| kind.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class=css::backdrop on:click=move |_| close()></div>
        <form class=css::sheet on:submit=on_submit>
            <div class=css::sheetHeader>
                <span class=css::sheetTitle>{move || title.get()}</span>
                <button type="button" class=css::closeButton on:click=move |_| close() title="Close">
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            <div class=css::sheetContent>
                <div class=css::kindToggle role="group" aria-label="Item kind">
                    {kind_button(ItemKind::Folder, "Folder")}
                    {kind_button(ItemKind::File, "File")}
                </div>

                <label class=css::field>
                    <span class=css::fieldLabel>"Name"</span>
                    <input
                        id=NAME_INPUT_ID
                        class=css::input
                        type="text"
                        autocomplete="off"
                        placeholder=move || if is_file.get() { "notes.ttl" } else { "photos" }
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || is_file.get()>
                    <label class=css::field>
                        <span class=css::fieldLabel>"Content"</span>
                        <textarea
                            class=css::textarea
                            rows="6"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                </Show>
            </div>

            <div class=css::sheetActions>
                <button type="button" class=css::secondaryButton on:click=move |_| close()>
                    "Cancel"
                </button>
                <button type="submit" class=css::primaryButton>
                    "Create"
                </button>
            </div>
        </form>
    }
}
