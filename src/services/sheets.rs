//! Rule sheet (CSV) access and the derived count column.

use crate::domain::constants::RULE_COLUMN;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

// Color prefix emitted by cvc5's rule-count dump; older captures lost the ESC byte.
const COLOR_PREFIXES: [&str; 2] = ["\u{1b}[92m+", "[92m+"];

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("column `{column}` not found in {origin} (columns: {available})")]
    MissingColumn {
        column: String,
        origin: String,
        available: String,
    },
    #[error("{origin}:{line}: expected `name,count`, got `{text}`")]
    MalformedCount {
        origin: String,
        line: usize,
        text: String,
    },
}

/// Cells of the `RARE` column, verbatim and in table order.
pub fn read_rule_column(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open rule sheet {}", path.display()))?;
    read_rule_column_from(file, &path.display().to_string())
}

pub fn read_rule_column_from(
    reader: impl std::io::Read,
    origin: &str,
) -> anyhow::Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers().with_context(|| format!("failed to read header of {origin}"))?;
    tracing::debug!(columns = ?headers.iter().collect::<Vec<_>>(), origin, "rule sheet");
    let idx = headers
        .iter()
        .position(|h| h == RULE_COLUMN)
        .ok_or_else(|| TableError::MissingColumn {
            column: RULE_COLUMN.to_string(),
            origin: origin.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut rules = Vec::new();
    for record in rdr.records() {
        let record = record.with_context(|| format!("malformed row in {origin}"))?;
        rules.push(record.get(idx).unwrap_or_default().to_string());
    }
    Ok(rules)
}

/// Non-empty names, sorted.
pub fn sorted_rule_names(column: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = column.into_iter().filter(|r| !r.is_empty()).collect();
    names.sort();
    names
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountLine {
    /// No comma: headers, banners, blank lines.
    Ignored,
    Entry(String, i64),
    Malformed,
}

pub fn parse_count_line(raw: &str) -> CountLine {
    if !raw.contains(',') {
        return CountLine::Ignored;
    }
    let mut line = raw.trim_end();
    for prefix in COLOR_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            line = rest;
            break;
        }
    }
    match line.split(',').collect::<Vec<_>>().as_slice() {
        [name, num] => match num.trim().parse::<i64>() {
            Ok(n) => CountLine::Entry(name.to_string(), n),
            Err(_) => CountLine::Malformed,
        },
        _ => CountLine::Malformed,
    }
}

/// Rule counts from a `name,count` listing; later lines win on duplicates.
pub fn parse_count_listing(text: &str, origin: &str) -> Result<HashMap<String, i64>, TableError> {
    let mut counts = HashMap::new();
    for (i, raw) in text.lines().enumerate() {
        match parse_count_line(raw) {
            CountLine::Ignored => {}
            CountLine::Entry(name, n) => {
                counts.insert(name, n);
            }
            CountLine::Malformed => {
                return Err(TableError::MalformedCount {
                    origin: origin.to_string(),
                    line: i + 1,
                    text: raw.trim_end().to_string(),
                })
            }
        }
    }
    Ok(counts)
}

/// Single-column CSV aligned with `rules`; unknown rules get an empty cell.
pub fn render_count_column(
    rules: &[String],
    counts: &HashMap<String, i64>,
) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([RULE_COLUMN])?;
    for rule in rules {
        let cell = counts.get(rule).map(|n| n.to_string()).unwrap_or_default();
        wtr.write_record([cell])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "Name,RARE,Notes\nEq sym,bv-eq-sym-1,x\nPending,,todo\nULE,bv-ule-self,\n";

    #[test]
    fn reads_rare_column_in_table_order() {
        let col = read_rule_column_from(SHEET.as_bytes(), "sheet.csv").unwrap();
        assert_eq!(col, vec!["bv-eq-sym-1", "", "bv-ule-self"]);
    }

    #[test]
    fn sorted_names_drop_empty_cells() {
        let names = sorted_rule_names(vec!["b".into(), "".into(), "a".into()]);
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn missing_column_is_a_hard_error() {
        let err = read_rule_column_from("Name,Other\nx,y\n".as_bytes(), "sheet.csv").unwrap_err();
        let table = err.downcast_ref::<TableError>().expect("table error");
        assert!(matches!(table, TableError::MissingColumn { .. }));
        assert!(err.to_string().contains("Name, Other"));
    }

    #[test]
    fn count_lines_accept_color_prefix() {
        assert_eq!(
            parse_count_line("\u{1b}[92m+bv-ule-self,12  \n"),
            CountLine::Entry("bv-ule-self".to_string(), 12)
        );
        assert_eq!(
            parse_count_line("[92m+bv-eq-sym-1,3"),
            CountLine::Entry("bv-eq-sym-1".to_string(), 3)
        );
        assert_eq!(parse_count_line("Rule counts:"), CountLine::Ignored);
        assert_eq!(parse_count_line("a,b,c"), CountLine::Malformed);
        assert_eq!(parse_count_line("a,many"), CountLine::Malformed);
    }

    #[test]
    fn malformed_listing_names_the_line() {
        let err = parse_count_listing("header\nx,1\ny,z\n", "counts.txt").unwrap_err();
        assert_eq!(err.to_string(), "counts.txt:3: expected `name,count`, got `y,z`");
    }

    #[test]
    fn renders_counts_with_blank_cells_for_missing_rules() {
        let rules = read_rule_column_from(SHEET.as_bytes(), "sheet.csv").unwrap();
        let counts = parse_count_listing("bv-ule-self,7\nother,1\n", "counts.txt").unwrap();
        let rendered = render_count_column(&rules, &counts).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "RARE");
        assert!(lines[1].trim_matches('"').is_empty());
        assert!(lines[2].trim_matches('"').is_empty());
        assert_eq!(lines[3], "7");
    }
}
