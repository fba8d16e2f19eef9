use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::{Prefix, ValueType};
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, RightWidth, TotalWidth};
use crate::schema::ParameterSpec;

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Formats the usage message from the declared parameters.
#[derive(Debug)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn render<'s>(
        &self,
        program: &str,
        about: Option<&str>,
        prefix: Prefix,
        specs: impl IntoIterator<Item = &'s ParameterSpec>,
    ) -> Vec<String> {
        let mut specs: Vec<&ParameterSpec> = specs.into_iter().collect();
        specs.sort_by(|a, b| a.name().cmp(b.name()));
        let grammars: Vec<String> = specs
            .iter()
            .map(|spec| match spec.value_type() {
                ValueType::Flag => format!("{prefix}{n}", n = spec.name()),
                value_type @ (ValueType::Integer | ValueType::Text) => {
                    format!("{prefix}{n}{VALUE_SEPARATOR}{value_type}", n = spec.name())
                }
            })
            .collect();
        let mut summary = vec![program.to_string()];

        for (spec, grammar) in specs.iter().zip(&grammars) {
            if spec.required() {
                summary.push(grammar.clone());
            } else {
                summary.push(format!("[{grammar}]"));
            }
        }

        let mut lines = vec![format!("usage: {s}", s = summary.join(" "))];

        if let Some(about) = about {
            lines.push("".to_string());
            lines.push(about.to_string());
        }

        if specs.is_empty() {
            return lines;
        }

        let left_column_width = grammars.iter().map(|g| g.chars().count()).max().unwrap_or(0);
        let middle_column_width = specs
            .iter()
            .map(|spec| spec.description().chars().count())
            .max()
            .unwrap_or(0);
        let right_column_width = if specs.iter().any(|spec| spec.required()) {
            Some(RightWidth::new(REQUIRED_MARKER.len()))
        } else {
            None
        };
        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                PaddingWidth::new(PADDING_WIDTH),
                LeftWidth::new(left_column_width),
                MiddleWidth::new(middle_column_width),
                right_column_width,
                TotalWidth(*tw),
            ),
            // Without a terminal, there is nothing to wrap to.
            None => ColumnRenderer::new(
                PaddingWidth::new(PADDING_WIDTH),
                LeftWidth::new(left_column_width),
                MiddleWidth::new(middle_column_width),
                right_column_width,
            ),
        };

        lines.push("".to_string());
        lines.push("parameters:".to_string());

        for (spec, grammar) in specs.iter().zip(&grammars) {
            let marker = if spec.required() { REQUIRED_MARKER } else { "" };
            lines.extend(column_renderer.render(MAIN_INDENT, grammar, spec.description(), marker));
        }

        lines
    }
}
