//! Plain-text tables for terminal output.

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Column-aligned rows under a header and a rule.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render as `-`.
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        if let Some(max) = options.max_width {
            shrink_to(&mut widths, max);
        }

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(title, width)| pad(&clip(title, *width), *width, false))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string();
        let rule = "-".repeat(header.chars().count());

        let mut lines = vec![header, rule];
        for row in &self.rows {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let raw = row.get(index).map_or("-", String::as_str);
                    let text = pad(&clip(raw, *width), *width, is_number(raw));
                    let column = self.headers[index].as_str();
                    if options.color {
                        paint(column, raw, text)
                    } else {
                        text
                    }
                })
                .collect::<Vec<_>>();
            lines.push(cells.join(GAP).trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, title)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN)
            })
            .collect()
    }
}

/// Narrow the widest column one character at a time until the row fits.
fn shrink_to(widths: &mut [usize], max: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn clip(text: &str, width: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut clipped: String = single_line.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok()
}

/// Color status-like cells. Other columns pass through.
fn paint(column: &str, raw: &str, text: String) -> String {
    let code = match (column, raw) {
        ("status", "active" | "success" | "sent") | ("report_type", "hunt") => "32",
        ("status", "pending") | ("report_type", "analysis") => "33",
        ("status", "failed" | "error") => "31",
        _ => return text,
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
