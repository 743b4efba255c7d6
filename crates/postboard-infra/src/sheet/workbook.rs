//! Workbook reader backed by calamine (xlsx, xlsm, xlsb, xls, ods).

use std::path::Path;

use async_trait::async_trait;
use calamine::{Data, Range, Reader, open_workbook_auto};

use postboard_core::error::SheetError;
use postboard_core::ports::{SheetReader, SheetRow};

/// Reads the first worksheet of a workbook, using its first row as header.
///
/// Empty cells are left out of the row map and rows without any value are
/// skipped. Workbook parsing runs on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineSheetReader;

impl CalamineSheetReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SheetReader for CalamineSheetReader {
    async fn read_rows(&self, path: &Path) -> Result<Vec<SheetRow>, SheetError> {
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || read_first_sheet(&path))
            .await
            .map_err(|e| SheetError::Malformed(format!("reader task failed: {e}")))?
    }
}

fn read_first_sheet(path: &Path) -> Result<Vec<SheetRow>, SheetError> {
    let location = path.display().to_string();

    let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::Open {
        path: location.clone(),
        reason: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheet(location.clone()))?
        .map_err(|e| SheetError::Malformed(e.to_string()))?;

    let rows = rows_from_range(&range)?;
    tracing::debug!(path = %location, rows = rows.len(), "Read worksheet");

    Ok(rows)
}

fn rows_from_range(range: &Range<Data>) -> Result<Vec<SheetRow>, SheetError> {
    let mut rows = range.rows();

    let header: Vec<String> = rows
        .next()
        .ok_or(SheetError::MissingHeader)?
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default().trim().to_string())
        .collect();

    if header.iter().all(String::is_empty) {
        return Err(SheetError::MissingHeader);
    }

    let records = rows
        .filter_map(|cells| {
            let row: SheetRow = header
                .iter()
                .zip(cells)
                .filter(|(name, _)| !name.is_empty())
                .filter_map(|(name, cell)| cell_text(cell).map(|value| (name.clone(), value)))
                .collect();

            (!row.is_empty()).then_some(row)
        })
        .collect();

    Ok(records)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(cells: &[&[&str]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));

        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                }
            }
        }
        range
    }

    #[test]
    fn test_rows_keyed_by_header() {
        let range = range(&[
            &["title", "content", "name"],
            &["Hello", "World", "kim"],
        ]);

        let rows = rows_from_range(&range).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Hello");
        assert_eq!(rows[0]["name"], "kim");
    }

    #[test]
    fn test_header_is_matched_by_name_not_position() {
        let range = range(&[&[" name ", "title", "content"], &["lee", "T", "C"]]);

        let rows = rows_from_range(&range).unwrap();

        assert_eq!(rows[0]["name"], "lee");
        assert_eq!(rows[0]["title"], "T");
    }

    #[test]
    fn test_blank_rows_skipped_and_empty_cells_omitted() {
        let range = range(&[
            &["title", "content", "name"],
            &["", "", ""],
            &["Only title", "", ""],
        ]);

        let rows = rows_from_range(&range).unwrap();

        assert_eq!(rows.len(), 1);
        assert!(!rows[0].contains_key("content"));
    }

    #[test]
    fn test_numeric_cells_render_as_text() {
        let mut range = range(&[&["title", "content", "name"], &["", "body", "park"]]);
        range.set_value((1, 0), Data::Float(2024.0));

        let rows = rows_from_range(&range).unwrap();

        assert_eq!(rows[0]["title"], "2024");
    }

    #[tokio::test]
    async fn test_reads_first_sheet_of_workbook_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, value) in ["title", "content", "name"].iter().enumerate() {
            sheet.write_string(0, col as u16, *value).unwrap();
        }
        for (col, value) in ["Hello", "World", "kim"].iter().enumerate() {
            sheet.write_string(1, col as u16, *value).unwrap();
        }
        workbook.save(&path).unwrap();

        let rows = CalamineSheetReader::new().read_rows(&path).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["content"], "World");
    }

    #[tokio::test]
    async fn test_missing_file_reports_its_path() {
        let err = CalamineSheetReader::new()
            .read_rows(Path::new("/no/such/posts.xlsx"))
            .await
            .unwrap_err();

        match err {
            SheetError::Open { path, .. } => assert_eq!(path, "/no/such/posts.xlsx"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_sheet_has_no_header() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(
            rows_from_range(&range),
            Err(SheetError::MissingHeader)
        ));
    }
}
