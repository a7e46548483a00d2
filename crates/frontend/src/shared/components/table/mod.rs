pub mod data_table;
pub mod sortable_header_cell;
pub mod table_cell_value;

pub use data_table::{data_table, TableHandlers};
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_value::TableCellValue;
