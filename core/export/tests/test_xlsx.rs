//! FILENAME: tests/test_xlsx.rs
//! Integration tests for workbook exports, read back with calamine.

mod common;

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use common::{dataset_from, nested_wiki_json, wiki_by_channel, wiki_totals};
use dataset::Dataset;
use export::{prepare_download_async, ExportOptions, Writable, XLSX_MIME_TYPE};

fn rows_of(body: Writable) -> (Vec<String>, Vec<Vec<Data>>) {
    let bytes = match body {
        Writable::Binary(bytes) => bytes,
        Writable::Text(_) => panic!("expected a binary workbook"),
    };
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    let names = workbook.sheet_names().to_vec();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    (names, range.rows().map(|r| r.to_vec()).collect())
}

#[tokio::test]
async fn test_workbook_has_one_typed_sheet() {
    let ds = dataset_from(&nested_wiki_json());
    let download = prepare_download_async(
        &wiki_by_channel(),
        &ds,
        Some("wiki"),
        Some("xlsx"),
        &ExportOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(download.file_name, "wiki.xlsx");
    assert_eq!(download.content_type, format!("{};charset=utf-8", XLSX_MIME_TYPE));

    let (names, rows) = rows_of(download.body);
    assert_eq!(names, vec!["Sheet1".to_string()]);
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0],
        vec![
            Data::String("Channel".into()),
            Data::String("Page".into()),
            Data::String("Count".into()),
            Data::String("Added".into()),
        ]
    );
    assert_eq!(
        rows[1],
        vec![
            Data::String("en".into()),
            Data::String("Main".into()),
            Data::Float(6.0),
            Data::Float(120.5),
        ]
    );
}

#[tokio::test]
async fn test_custom_sheet_name() {
    let ds = dataset_from(&nested_wiki_json());
    let options = ExportOptions {
        sheet_name: "Edits".to_string(),
        ..ExportOptions::default()
    };
    let download =
        prepare_download_async(&wiki_by_channel(), &ds, None, Some("xlsx"), &options)
            .await
            .unwrap();
    assert!(download.file_name.ends_with("-data.xlsx"));

    let (names, _) = rows_of(download.body);
    assert_eq!(names, vec!["Edits".to_string()]);
}

#[tokio::test]
async fn test_empty_dataset_has_heading_only() {
    let download = prepare_download_async(
        &wiki_totals(),
        &Dataset::default(),
        Some("empty"),
        Some("xlsx"),
        &ExportOptions::default(),
    )
    .await
    .unwrap();

    let (_, rows) = rows_of(download.body);
    assert_eq!(
        rows,
        vec![vec![Data::String("Count".into()), Data::String("Added".into())]]
    );
}
