use crate::error::{NoteError, Result};
use calamine::Reader;
use std::io::Cursor;

/// Extracts note text from an uploaded file, dispatching on the lowercase
/// extension. Spreadsheets (csv, xlsx, xls) become one line per row with
/// cell values joined by spaces. PDF has no parser here and yields a
/// placeholder message rather than an error, matching how the upload
/// surface reports it inline.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| {
            NoteError::UnsupportedInput(format!("file without extension: {}", file_name))
        })?;

    match extension.as_str() {
        "txt" | "md" => as_utf8(bytes),
        "json" => {
            let value: serde_json::Value = serde_json::from_slice(bytes)
                .map_err(|e| NoteError::UnsupportedInput(format!("invalid JSON: {}", e)))?;
            serde_json::to_string_pretty(&value)
                .map_err(|e| NoteError::UnsupportedInput(e.to_string()))
        }
        "csv" => {
            let text = as_utf8(bytes)?;
            Ok(text
                .lines()
                .map(|line| {
                    line.split(',')
                        .map(str::trim)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        "xlsx" | "xls" => {
            let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
                .map_err(|e| NoteError::UnsupportedInput(format!("unreadable workbook: {}", e)))?;
            let range = workbook
                .worksheet_range_at(0)
                .ok_or_else(|| NoteError::UnsupportedInput("workbook has no sheets".to_string()))?
                .map_err(|e| {
                    NoteError::UnsupportedInput(format!("unreadable worksheet: {}", e))
                })?;
            Ok(range
                .rows()
                .map(|row| {
                    row.iter()
                        .filter_map(cell_text)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        "pdf" => {
            log::warn!("no parser for .{} files, emitting placeholder", extension);
            Ok(format!(
                "{} parsing not supported. Please convert to text first.",
                extension.to_uppercase()
            ))
        }
        other => Err(NoteError::UnsupportedInput(format!(
            "unsupported file type: {}",
            other
        ))),
    }
}

fn as_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| NoteError::UnsupportedInput(format!("not valid UTF-8: {}", e)))
}

fn cell_text(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::Empty => None,
        calamine::Data::String(s) => Some(s.clone()),
        // Whole numbers come back as floats; print them without the ".0".
        calamine::Data::Float(v) if v.fract() == 0.0 => Some(format!("{}", *v as i64)),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_text("notes.txt", b"line one\nline two").unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let text = extract_text("data.json", br#"{"a":1}"#).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(extract_text("data.json", b"{not json").is_err());
    }

    #[test]
    fn test_csv_cells_joined() {
        let text = extract_text("sheet.csv", b"a, b,c\n1,2 ,3").unwrap();
        assert_eq!(text, "a b c\n1 2 3");
    }

    #[test]
    fn test_xlsx_rows_joined_like_csv() {
        let bytes = include_bytes!("../tests/fixtures/inventory.xlsx");
        let text = extract_text("inventory.xlsx", bytes).unwrap();
        assert_eq!(text, "item qty\npens 12\npaper 3");
    }

    #[test]
    fn test_garbage_workbook_is_rejected() {
        assert!(matches!(
            extract_text("broken.xlsx", b"not a workbook"),
            Err(NoteError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_pdf_placeholder() {
        let text = extract_text("doc.PDF", b"%PDF-1.4").unwrap();
        assert!(text.starts_with("PDF parsing not supported"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            extract_text("image.png", &[0u8; 4]),
            Err(NoteError::UnsupportedInput(_))
        ));
        assert!(extract_text("no_extension", b"text").is_err());
    }
}
