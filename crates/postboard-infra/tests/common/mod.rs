//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use postboard_core::PostService;
use postboard_infra::{CalamineSheetReader, InMemoryPostRepository};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Write a single-sheet xlsx workbook; the first row is the header.
pub fn write_workbook(dir: &Path, file_name: &str, rows: &[&[&str]]) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet
                    .write_string(r as u32, c as u16, *value)
                    .expect("write cell");
            }
        }
    }

    workbook.save(&path).expect("save workbook");
    path
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn service() -> PostService {
    PostService::new(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(CalamineSheetReader::new()),
    )
}

pub fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}
