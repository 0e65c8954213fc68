//! Pod explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`FileList`] - Listing of the current folder
//! - [`CreateSheet`] - Form for creating a folder or file

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;
mod sheet;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use sheet::CreateSheet;
