//! Output formatting helpers for human-readable and JSON output.

use gatehouse::UserRecord;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Print rows under a header, padding every column to its widest cell.
///
/// Rows shorter than the header are padded with empty cells.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("{}", render_row(headers, &widths));
    for row in rows {
        let cells: Vec<&str> = (0..headers.len())
            .map(|col| row.get(col).map_or("", String::as_str))
            .collect();
        println!("{}", render_row(&cells, &widths));
    }
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// Public view of an account. Never includes the password.
pub fn user_json(user: &UserRecord) -> serde_json::Value {
    serde_json::json!({
        "username": user.username,
        "avatar": user.avatar,
        "biometricEnabled": user.uses_biometrics(),
    })
}
