pub mod flash;
pub mod list_options;
pub mod list_query;
pub mod pagination;
pub mod table;
