pub mod api;
pub mod api_utils;
pub mod components;
pub mod download;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
