use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Self {
        // padding must be at least 1
        PaddingWidth(std::cmp::max(width, 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Self {
        // left must be at least 1
        LeftWidth(std::cmp::max(width, 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Self {
        // middle must be at least 2 (so we can hyphenate)
        MiddleWidth(std::cmp::max(width, 2))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RightWidth(usize);

impl RightWidth {
    pub(crate) fn new(width: usize) -> Self {
        RightWidth(std::cmp::max(width, 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

/// Renders rows of `left | middle | right` columns, wrapping the middle column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
    right: Option<RightWidth>,
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use a heuristic to chose the middle width.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        right: Option<RightWidth>,
        total_width: TotalWidth,
    ) -> Self {
        // We always have a left and a middle (and a padding between them).
        let mut non_middle: usize = left.0 + padding.0;

        if let Some(r) = &right {
            non_middle += padding.0 + r.0;
        }

        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        let selected = if guided_middle + non_middle <= target_total_width {
            guided_middle
        } else if non_middle < total_width.0 {
            std::cmp::max(total_width.0 - non_middle, MINIMUM_MIDDLE_WIDTH)
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_middle} within total {t}.  Selecting middle: {selected}.", t = total_width.0);
        }

        Self::new(padding, left, MiddleWidth::new(selected), right)
    }

    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        right: Option<RightWidth>,
    ) -> Self {
        Self {
            padding,
            left,
            middle,
            right,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str, right: &str) -> Vec<String> {
        let padding = format!("{:width$}", "", width = self.padding.0);
        let left_width = self.left.0;
        let middle_width = self.middle.0;
        let middle_parts = chunk(middle, middle_width);
        let first_middle = middle_parts.first().map(String::as_str).unwrap_or("");
        let mut out = Vec::default();

        let first = match &self.right {
            Some(_) if !right.is_empty() => format!(
                "{:indent$}{left:left_width$}{padding}{first_middle:middle_width$}{padding}{right}",
                ""
            ),
            _ => format!("{:indent$}{left:left_width$}{padding}{first_middle}", ""),
        };
        out.push(first.trim_end().to_string());

        for part in middle_parts.iter().skip(1) {
            out.push(format!("{:indent$}{:left_width$}{padding}{part}", "", ""));
        }

        out
    }
}

/// Split the paragraph into lines of at most `width` characters, hyphenating words that are too long.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut characters: Vec<char> = word.chars().collect();

    while characters.len() > width {
        let rest = characters.split_off(increment);
        let mut line: String = characters.into_iter().collect();
        line.push('-');
        lines.push(line);
        characters = rest;
    }

    current.extend(characters);
}

/// Where the parser writes its messages.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
#[derive(Default)]
pub(crate) struct BlackHole {}

#[cfg(any(test, feature = "unit_test"))]
impl UserInterface for BlackHole {
    fn print(&self, _message: String) {
        // Do nothing
    }

    fn print_error(&self, _error: &ParseError) {
        // Do nothing
    }
}
