//! Spreadsheet readers.

mod workbook;

pub use workbook::CalamineSheetReader;
