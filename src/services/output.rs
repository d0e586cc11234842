//! Report emission: plain text on stdout, or the `{ok, data}` envelope
//! when `--json` is set.

use crate::domain::models::JsonOut;
use serde::Serialize;

fn print_envelope<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Rule lists and count reports: one text line per row.
pub fn print_lines<T: Serialize>(
    json: bool,
    rows: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_envelope(rows);
    }
    for row in rows {
        println!("{}", line(row));
    }
    Ok(())
}

/// A single batch summary record.
pub fn print_summary<T: Serialize>(
    json: bool,
    summary: T,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_envelope(summary);
    }
    println!("{}", line(&summary));
    Ok(())
}

/// Spreadsheet-bound output. Text mode writes the CSV body verbatim so it
/// can be pasted into a sheet; JSON mode emits the rows instead, and the
/// CSV is never rendered.
pub fn print_csv<T: Serialize>(
    json: bool,
    rows: &[T],
    render: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    if json {
        return print_envelope(rows);
    }
    print!("{}", render()?);
    Ok(())
}
