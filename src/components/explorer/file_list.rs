//! File list component for explorer view.
//!
//! Displays the current folder's resources, folders first.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::url::has_image_extension;
use podview_core::{Intent, ResourceNode};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::display_name;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Icon for a resource based on its kind and extension.
fn get_icon(node: &ResourceNode) -> IconData {
    if node.is_folder {
        ic::FOLDER
    } else if has_image_extension(&node.url) {
        ic::FILE_IMAGE
    } else if node.name.ends_with(".ttl") {
        ic::FILE_DATA
    } else if node.name.ends_with(".txt") || node.name.ends_with(".md") {
        ic::FILE_TEXT
    } else {
        ic::FILE
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Signal::derive(move || {
        ctx.dashboard
            .with(|d| d.folder.as_ref().map(|f| f.items.clone()).unwrap_or_default())
    });
    let is_empty = Signal::derive(move || {
        ctx.dashboard
            .with(|d| d.folder.as_ref().is_some_and(|f| f.items.is_empty()))
    });

    view! {
        <div class=css::list role="grid" aria-label="Folder contents">
            // Column header (desktop only, hidden on mobile via CSS)
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerUrl>"Location"</span>
                <span class=css::headerChevron></span>
            </div>
            <For
                each=move || entries.get()
                key=|node| node.url.clone()
                children=move |node| {
                    view! { <FileListItem node=node /> }
                }
            />
            <Show when=move || is_empty.get()>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(node: ResourceNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = get_icon(&node);
    let is_folder = node.is_folder;
    let label = display_name(&node);
    let url = node.url.clone();
    let node_url = node.url.clone();

    let is_open = Signal::derive(move || {
        ctx.dashboard.with(|d| {
            d.open_file
                .as_ref()
                .is_some_and(|open| open.node.url == node_url)
        })
    });

    let activate = move || {
        if is_folder {
            ctx.dispatch(Intent::OpenFolder(node.url.clone()));
        } else {
            ctx.dispatch(Intent::OpenFile(node.clone()));
        }
    };
    let activate_on_key = activate.clone();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            activate_on_key();
        }
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameDir)
    } else {
        format!("{} {}", css::name, css::nameFile)
    };

    let item_class = move || {
        if is_open.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };

    let aria_label = if is_folder {
        format!("Folder: {}", label)
    } else {
        format!("File: {}", label)
    };

    view! {
        <div
            class=item_class
            on:click=move |_| activate()
            on:keydown=on_keydown
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_open.get()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{label}</span>
            <span class=css::itemUrl>{url}</span>
            <span class=css::chevron aria-hidden="true">
                {is_folder.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}
