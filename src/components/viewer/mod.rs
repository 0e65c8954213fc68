//! Opened file panel.
//!
//! Shows the file chosen in the explorer: images inline, plain text as-is,
//! and linked data as a tree of entities with nested entities indented one
//! level per depth.

use leptos::prelude::*;
use leptos_icons::Icon;
use podview_core::{
    FileView, Intent, OpenFile, RenderedEntity, RenderedProperty, RenderedValue, Scalar,
};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NESTED_INDENT_REM;
use crate::utils::format::{format_locale_datetime, type_line};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn FilePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open_file = Memo::new(move |_| ctx.dashboard.with(|d| d.open_file.clone()));

    view! {
        <aside class=css::panel>
            {move || open_file.get().map(|OpenFile { node, view: shown }| {
                let url = node.url.clone();
                view! {
                    <div class=css::panelHeader>
                        <span class=css::filename title=url.clone()>{node.name}</span>
                        <div class=css::panelActions>
                            <a
                                class=css::actionButton
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Open original"
                            >
                                <Icon icon=ic::EXTERNAL_LINK />
                            </a>
                            <button
                                class=css::actionButton
                                on:click=move |_| ctx.dispatch(Intent::CloseFile)
                                title="Close"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    </div>
                    <div class=css::panelContent>{file_view(shown)}</div>
                }
            })}
        </aside>
    }
}

fn file_view(view: FileView) -> AnyView {
    match view {
        FileView::Image { url } => view! {
            <div class=css::imagePreview>
                <img src=url.clone() alt=url class=css::image />
            </div>
        }
        .into_any(),
        FileView::Text(text) => view! { <pre class=css::text>{text}</pre> }.into_any(),
        FileView::Structured(entities) => view! {
            <div class=css::entities>{entity_list(entities)}</div>
        }
        .into_any(),
    }
}

/// Entities keyed by subject, falling back to position for blank nodes.
fn entity_list(entities: Vec<RenderedEntity>) -> AnyView {
    view! {
        <For
            each=move || entities.clone().into_iter().enumerate()
            key=|(index, entity)| entity.key(*index)
            children=|(_, entity)| entity_view(entity)
        />
    }
    .into_any()
}

fn entity_view(entity: RenderedEntity) -> AnyView {
    // Each nesting level sits inside its parent, so one step per level.
    let indent = if entity.depth > 0 {
        format!("margin-left: {}rem", NESTED_INDENT_REM)
    } else {
        String::new()
    };
    let types = type_line(&entity.types);
    let subject = (!entity.subject.is_empty() && entity.depth == 0).then_some(entity.subject);

    view! {
        <div class=css::entity style=indent>
            {subject.map(|s| view! { <div class=css::subject>{s}</div> })}
            {types.map(|t| view! { <div class=css::types>{t}</div> })}
            <dl class=css::properties>
                {entity.properties.into_iter().map(property_view).collect_view()}
            </dl>
        </div>
    }
    .into_any()
}

fn property_view(property: RenderedProperty) -> AnyView {
    let RenderedProperty { key, value } = property;
    let body = match value {
        RenderedValue::Scalar(scalar) => scalar_view(scalar),
        RenderedValue::List(items) => view! {
            <ul class=css::list>
                {items
                    .into_iter()
                    .map(|item| view! { <li>{scalar_view(item)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        RenderedValue::Nested(entities) => view! {
            <div class=css::nested>{entity_list(entities)}</div>
        }
        .into_any(),
    };

    view! {
        <div class=css::property>
            <dt class=css::key>{key}</dt>
            <dd class=css::value>{body}</dd>
        </div>
    }
    .into_any()
}

fn scalar_view(scalar: Scalar) -> AnyView {
    match scalar {
        Scalar::Text(text) => view! { <span>{text}</span> }.into_any(),
        Scalar::Link { href } => {
            let label = href.clone();
            view! {
                <a class=css::link href=href target="_blank" rel="noopener noreferrer">
                    {label}
                </a>
            }
            .into_any()
        }
        Scalar::Image { src, alt } => view! {
            <img class=css::inlineImage src=src alt=alt />
        }
        .into_any(),
        Scalar::DateTime { raw, value } => view! {
            <time title=raw>{format_locale_datetime(value.timestamp_millis())}</time>
        }
        .into_any(),
    }
}
