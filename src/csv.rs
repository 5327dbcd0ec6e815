// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// One tokenized row plus the 1-based line it started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenizeMode {
    /// Whole-text scan; quoted fields may span lines.
    #[default]
    Records,
    /// Split on '\n' first, then tokenize each physical line.
    /// A quoted newline breaks the record in two.
    Lines,
}

impl TokenizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizeMode::Records => "records",
            TokenizeMode::Lines => "lines",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "records" | "record" => Some(TokenizeMode::Records),
            "lines" | "line" | "line-split" => Some(TokenizeMode::Lines),
            _ => None,
        }
    }
}

pub fn tokenize(text: &str, mode: TokenizeMode) -> Vec<CsvRow> {
    match mode {
        TokenizeMode::Records => parse_rows(text),
        TokenizeMode::Lines => parse_lines(text),
    }
}

/// RFC 4180 scanner over the whole text (quotes, doubled-quote escapes,
/// embedded commas and newlines). '\r' outside quotes is dropped.
/// A newline at the very end does not produce an extra empty row.
pub fn parse_rows(text: &str) -> Vec<CsvRow> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut row_start = 1usize;
    let mut at_line_start = true;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                at_line_start = false;
            }
            ',' => {
                // move the field without cloning
                row.push(take(&mut field));
                at_line_start = false;
            }
            '\n' => {
                row.push(take(&mut field));
                rows.push(CsvRow { line: row_start, fields: take(&mut row) });
                line += 1;
                row_start = line;
                at_line_start = true;
            }
            '\r' => {}
            _ => {
                field.push(ch);
                at_line_start = false;
            }
        }
    }

    // Flush the trailing field/row even if quotes were unterminated.
    if !at_line_start || !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(CsvRow { line: row_start, fields: row });
    }

    // Blank lines at the end of the file are not rows.
    while rows.last().is_some_and(|r| r.fields.len() == 1 && r.fields[0].is_empty()) {
        rows.pop();
    }

    rows
}

/// Line-split variant: trim the text, split on '\n', tokenize each line.
pub fn parse_lines(text: &str) -> Vec<CsvRow> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .enumerate()
        .map(|(i, raw)| {
            let l = raw.strip_suffix('\r').unwrap_or(raw);
            CsvRow { line: i + 1, fields: parse_line(l) }
        })
        .collect()
}

/// Tokenize a single physical line. Newlines are not special here.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => out.push(take(&mut field)),
                _ => field.push(ch),
            }
        }
    }

    out.push(field);
    out
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote a single field if it needs it (RFC 4180).
pub fn quote_field(field: &str, sep: char) -> String {
    if needs_quotes(field, sep) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        s!(field)
    }
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "{}", quote_field(cell.as_ref(), sep))?;
    }
    writeln!(w)
}

/// Stringify a header + rows as-is.
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
