//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuDownload as Download, LuEye as Eye, LuFile as File,
        LuFileSpreadsheet as FileSpreadsheet, LuFolder as Folder, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsDownload as Download, BsEye as Eye, BsFileEarmark as File,
        BsFileEarmarkSpreadsheet as FileSpreadsheet, BsFolderFill as Folder, BsUpload as Upload,
        BsXLg as Close,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_SPREADSHEET, FileSpreadsheet);
themed_icon!(EYE, Eye);
themed_icon!(DOWNLOAD, Download);
themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
