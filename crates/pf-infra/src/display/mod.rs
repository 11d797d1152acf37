mod html_file_display;

pub use html_file_display::{
    HtmlFileDisplay, APPEARANCE_FILE, CATALOG_FILE, DETAIL_FILE, VIEWER_FILE,
};
