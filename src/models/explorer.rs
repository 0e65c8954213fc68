//! Explorer-related view state.

use podview_core::ItemKind;

/// Create-item sheet state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetState {
    #[default]
    Closed,
    /// Open with the given item kind preselected.
    Open(ItemKind),
}

impl SheetState {
    pub fn is_open(self) -> bool {
        matches!(self, SheetState::Open(_))
    }

    /// Sheet title for the selected kind.
    pub fn title(self) -> &'static str {
        match self {
            SheetState::Open(ItemKind::File) => "Create New File",
            _ => "Create New Folder",
        }
    }
}
