pub mod cell_format;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;

pub use cell_format::*;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::{HeaderCheckboxState, TableHeaderCheckbox};
