use crate::ui::table::row::value_text;
use crate::utils::{PantryError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const LINE_ENDING: &str = "\r\n";

/// Render records as CSV. The header comes from the first record's fields;
/// later records are written in that column order.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let objects = rows
        .iter()
        .map(|row| -> Result<Map<String, Value>> {
            match serde_json::to_value(row)? {
                Value::Object(map) => Ok(map),
                other => Err(PantryError::export_error(format!(
                    "expected an object per row, got {}",
                    other
                ))),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = objects.first() else {
        return Ok(String::new());
    };
    let header: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(objects.len() + 1);
    lines.push(
        header
            .iter()
            .map(|key| escape_field(key))
            .collect::<Vec<_>>()
            .join(","),
    );
    for object in &objects {
        lines.push(
            header
                .iter()
                .map(|key| {
                    let text = object.get(key.as_str()).map(value_text).unwrap_or_default();
                    escape_field(&text)
                })
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    Ok(lines.join(LINE_ENDING))
}

fn escape_field(field: &str) -> String {
    let needs_quotes = field.contains([',', '"', '\n', '\r'])
        || field.starts_with(' ')
        || field.ends_with(' ');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// File name for an export, with path separators neutralised.
pub fn export_file_name(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "export.csv".to_string()
    } else {
        format!("{}.csv", cleaned)
    }
}

/// Write `<export_dir>/<filename>.csv` and return its path.
pub fn export_csv<T: Serialize>(rows: &[T], export_dir: &Path, filename: &str) -> Result<PathBuf> {
    let csv = to_csv(rows)?;

    fs::create_dir_all(export_dir).map_err(|e| {
        PantryError::export_error(format!(
            "Failed to create export directory {}: {}",
            export_dir.display(),
            e
        ))
    })?;

    let path = export_dir.join(export_file_name(filename));
    fs::write(&path, csv).map_err(|e| {
        log::error!("[export] failed to write {}: {}", path.display(), e);
        PantryError::export_error(format!("Failed to write {}: {}", path.display(), e))
    })?;

    log::info!("[export] wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}
