//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuCircleAlert as Alert, LuDatabase as Pod, LuExternalLink as ExternalLink,
        LuFile as File, LuFileCode as FileData, LuFileText as FileText, LuFolder as Folder,
        LuHouse as Home, LuImage as FileImage, LuLogOut as Logout, LuMapPin as Location,
        LuPlus as Plus, LuRefreshCw as Refresh, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsBoxArrowUpRight as ExternalLink,
        BsArrowClockwise as Refresh, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDatabase as Pod, BsExclamationCircle as Alert,
        BsFileEarmark as File, BsFileEarmarkCode as FileData,
        BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText,
        BsFolderFill as Folder, BsGeoAltFill as Location, BsHouseFill as Home,
        BsPerson as User, BsPlusLg as Plus, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_DATA, FileData);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(PLUS, Plus);
themed_icon!(REFRESH, Refresh);
themed_icon!(LOGOUT, Logout);
themed_icon!(CLOSE, Close);
themed_icon!(ALERT, Alert);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(USER, User);
themed_icon!(POD, Pod);
themed_icon!(LOCATION, Location);
