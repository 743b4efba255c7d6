use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::SheetError;

/// One data row of a worksheet, keyed by header name.
pub type SheetRow = HashMap<String, String>;

/// Reads tabular files whose first row is a header.
#[async_trait]
pub trait SheetReader: Send + Sync {
    /// Read every data row of the file's first worksheet.
    async fn read_rows(&self, path: &Path) -> Result<Vec<SheetRow>, SheetError>;
}
