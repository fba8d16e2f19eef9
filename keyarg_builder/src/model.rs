/// The declared type of a parameter.
///
/// This is a closed set: every site that branches on the type matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A whole number, specified as `-NAME=VALUE`.
    Integer,
    /// Verbatim text, specified as `-NAME=VALUE`.
    Text,
    /// A boolean switch, specified as `-NAME` (no value).
    Flag,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Integer => write!(f, "INTEGER"),
            ValueType::Text => write!(f, "TEXT"),
            ValueType::Flag => write!(f, "FLAG"),
        }
    }
}

/// A value captured from the command line, tagged by the type that was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Captured from an [`ValueType::Integer`] parameter.
    Integer(i64),
    /// Captured from an [`ValueType::Text`] parameter.
    Text(String),
    /// Captured from an [`ValueType::Flag`] parameter.
    Flag(bool),
}

impl ParsedValue {
    /// The [`ValueType`] tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            ParsedValue::Integer(_) => ValueType::Integer,
            ParsedValue::Text(_) => ValueType::Text,
            ParsedValue::Flag(_) => ValueType::Flag,
        }
    }
}

/// The option prefix convention of a parser.
///
/// Chosen once per parser; tokens are never interpreted with a mix of conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prefix {
    /// `-NAME` / `-NAME=VALUE`.
    #[default]
    Single,
    /// `--NAME` / `--NAME=VALUE`.
    Double,
}

impl Prefix {
    /// The number of marker characters in this prefix.
    pub fn width(&self) -> usize {
        match self {
            Prefix::Single => 1,
            Prefix::Double => 2,
        }
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.width() {
            write!(f, "{}", crate::constant::PREFIX_MARKER)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParsedValue::Integer(-3), ValueType::Integer)]
    #[case(ParsedValue::Text("".to_string()), ValueType::Text)]
    #[case(ParsedValue::Flag(true), ValueType::Flag)]
    fn parsed_value_type(#[case] value: ParsedValue, #[case] expected: ValueType) {
        assert_eq!(value.value_type(), expected);
    }

    #[rstest]
    #[case(Prefix::Single, "-")]
    #[case(Prefix::Double, "--")]
    fn prefix_display(#[case] prefix: Prefix, #[case] expected: &str) {
        assert_eq!(prefix.to_string(), expected);
        assert_eq!(prefix.width(), expected.len());
    }

    #[test]
    fn prefix_default() {
        assert_eq!(Prefix::default(), Prefix::Single);
    }
}
