//! Core logic for the podview linked-data explorer.
//!
//! This crate is UI-agnostic and builds natively. It provides:
//! - [`turtle`] - best-effort Turtle block parser producing [`ParsedEntity`] records
//! - [`render`] - display tree for parsed property values
//! - [`navigator`] - container listing, naming, sorting and path state
//! - [`dashboard`] - intent/effect reducer plus an async driver over [`pod`] collaborators
//! - [`pod`] - collaborator traits and pod discovery helpers

pub mod config;
pub mod dashboard;
pub mod error;
pub mod navigator;
pub mod pod;
pub mod render;
pub mod session;
pub mod turtle;
pub mod url;

pub use dashboard::{
    ContentKind, CreateItem, CreateRequest, Dashboard, DashboardState, Effect, FileView, Intent,
    ItemKind, OpenFile, Outcome, classify_content, execute, new_file_body, open_file_view,
};
pub use error::PodError;
pub use navigator::{
    Breadcrumb, FolderView, NavigationPath, ResourceNode, derive_name, list_children,
};
pub use pod::{
    ContainerSource, PodInfo, ResourceCreator, ResourceFetcher, RootResolver,
    contained_resources_in, discover_root, storage_from_profile,
};
pub use render::{
    RenderedEntity, RenderedProperty, RenderedValue, Scalar, render_entity, render_property,
};
pub use session::{Session, SessionTransition};
pub use turtle::{ParsedEntity, Properties, PropertyValue, parse};
