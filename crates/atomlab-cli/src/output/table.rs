//! Aligned plain-text tables for `--format table`.

const SEPARATOR: &str = "  ";
const MIN_COLUMN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to squeeze into, if known.
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Debug)]
struct Column<'a> {
    header: &'a str,
    width: usize,
    /// Every cell in the column reads as a number.
    numeric: bool,
}

impl Column<'_> {
    fn floor(&self) -> usize {
        self.header.chars().count().max(MIN_COLUMN_WIDTH)
    }
}

/// Render string rows under `headers`. Missing cells print as `-`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let cell = |row: &Vec<String>, index: usize| -> String {
        row.get(index).cloned().unwrap_or_else(|| String::from("-"))
    };

    let mut columns = headers
        .iter()
        .enumerate()
        .map(|(index, &header)| {
            let values = rows.iter().map(|row| cell(row, index)).collect::<Vec<_>>();
            let column = Column {
                header,
                width: 0,
                numeric: !values.is_empty() && values.iter().all(|v| looks_numeric(v)),
            };
            let widest = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
            Column {
                width: widest.max(column.floor()),
                ..column
            }
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut columns, max_width);
    }

    let header_line = columns
        .iter()
        .map(|column| pad(&clip(column.header, column.width), column.width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let header_line = header_line.trim_end();

    let mut out = String::new();
    out.push_str(header_line);
    out.push('\n');
    out.push_str(&"-".repeat(header_line.chars().count()));

    for row in rows {
        let line = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let text = clip(&cell(row, index), column.width);
                let padded = pad(&text, column.width, column.numeric);
                if options.color {
                    padded.replacen(&text, &colorize_word(&text), 1)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        out.push('\n');
        out.push_str(line.trim_end());
    }
    out
}

/// Narrow the widest shrinkable column one char at a time until the table fits.
fn shrink_to(columns: &mut [Column<'_>], max_width: usize) {
    let separators = columns.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = columns.iter().map(|c| c.width).sum::<usize>() + separators;

    while total > max_width {
        let Some(widest) = columns
            .iter_mut()
            .filter(|c| c.width > c.floor())
            .max_by_key(|c| c.width)
        else {
            break;
        };
        widest.width -= 1;
        total -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept = value.chars().take(width.saturating_sub(1)).collect::<String>();
    format!("{kept}…")
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Color quiz and state keywords: green for good news, red for bad.
#[must_use]
pub fn colorize_word(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "correct" | "true" | "complete" | "outstanding" | "great" => "32",
        "awaiting_advance" | "good" | "pending" => "33",
        "incorrect" | "false" | "keep_studying" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
