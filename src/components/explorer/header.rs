//! Explorer header component.
//!
//! Contains navigation buttons, current folder title, and action buttons.

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::{Intent, ItemKind, derive_name};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::SheetState;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with navigation and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (new_menu_open, set_new_menu_open) = signal(false);

    let at_root = Signal::derive(move || {
        ctx.dashboard
            .with(|d| d.path.as_ref().is_none_or(|p| p.len() <= 1))
    });
    let has_folder = Signal::derive(move || ctx.dashboard.with(|d| d.folder.is_some()));

    let current_name = Memo::new(move |_| {
        ctx.dashboard.with(|d| {
            d.path
                .as_ref()
                .map(|p| derive_name(p.current()))
                .unwrap_or_default()
        })
    });

    let current_icon = Memo::new(move |_| if at_root.get() { ic::HOME } else { ic::FOLDER });

    view! {
        <header class=css::header>
            <NavButtons at_root=at_root has_folder=has_folder />

            <div class=css::title>
                <span class=css::titleIcon>
                    {move || view! { <Icon icon=current_icon.get() /> }}
                </span>
                <span class=css::titleLabel>{move || current_name.get()}</span>
            </div>

            <div class=css::actionButtons>
                <NewMenu
                    menu_open=new_menu_open
                    set_menu_open=set_new_menu_open
                    enabled=has_folder
                />
                <button
                    class=css::actionButton
                    on:click=move |_| ctx.dispatch(Intent::Logout)
                    title="Log out"
                >
                    <Icon icon=ic::LOGOUT />
                </button>
            </div>
        </header>
    }
}

/// Navigation buttons (back, refresh).
#[component]
fn NavButtons(at_root: Signal<bool>, has_folder: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::navButtons>
            <button
                class=move || nav_button_class(at_root.get())
                on:click=move |_| ctx.dispatch(Intent::Back)
                disabled=move || at_root.get()
                title="Go to parent folder"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=move || nav_button_class(!has_folder.get())
                on:click=move |_| ctx.dispatch(Intent::Refresh)
                disabled=move || !has_folder.get()
                title="Refresh"
            >
                <Icon icon=ic::REFRESH />
            </button>
        </div>
    }
}

fn nav_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::navButton, css::navButtonDisabled)
    } else {
        css::navButton.to_string()
    }
}

/// New file/folder dropdown menu.
#[component]
fn NewMenu(
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
    enabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open_sheet = move |kind: ItemKind| {
        set_menu_open.set(false);
        ctx.sheet.set(SheetState::Open(kind));
    };

    // Close when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        let Some(related) = event.related_target() else {
            set_menu_open.set(false);
            return;
        };
        if let Some(current) = event.current_target()
            && let (Some(wrapper), Some(target)) = (
                current.dyn_ref::<web_sys::Node>(),
                related.dyn_ref::<web_sys::Node>(),
            )
            && !wrapper.contains(Some(target))
        {
            set_menu_open.set(false);
        }
    };

    view! {
        <div class=css::dropdownWrapper on:focusout=on_focusout>
            <button
                class=css::actionButton
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
                disabled=move || !enabled.get()
                title="New file or folder"
            >
                <Icon icon=ic::PLUS />
            </button>
            <Show when=move || menu_open.get()>
                <div class=css::dropdownMenu>
                    <button class=css::dropdownItem on:click=move |_| open_sheet(ItemKind::File)>
                        <span class=css::dropdownIcon><Icon icon=ic::FILE /></span>
                        "New File"
                    </button>
                    <button class=css::dropdownItem on:click=move |_| open_sheet(ItemKind::Folder)>
                        <span class=css::dropdownIcon><Icon icon=ic::FOLDER /></span>
                        "New Folder"
                    </button>
                </div>
            </Show>
        </div>
    }
}
