pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod flash;
pub mod icons;
pub mod list;
pub mod page_frame;
pub mod storage;
