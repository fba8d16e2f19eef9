pub(crate) const PREFIX_MARKER: char = '-';
pub(crate) const VALUE_SEPARATOR: char = '=';
pub(crate) const REQUIRED_MARKER: &str = "required";
