use crate::model::ValueType;
use crate::schema::ParameterSpec;

/// A parameter to declare on the command line parser.
///
/// ### Example
/// ```
/// # use keyarg_builder as keyarg;
/// use keyarg::{CommandLineParser, Parameter};
///
/// let mut parser = CommandLineParser::new("program")
///     .add(Parameter::text("name").help("Who to greet.").required())
///     .add(Parameter::integer("times").help("How many greetings."))
///     .add(Parameter::flag("loud"))
///     .build();
///
/// parser.parse_tokens(&["program", "-name=world", "-loud"]).unwrap();
///
/// assert_eq!(parser.get_str("name"), Some("world"));
/// assert_eq!(parser.get::<i64>("times"), None);
/// assert_eq!(parser.get::<bool>("loud"), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    help: Option<String>,
    value_type: ValueType,
    required: bool,
}

impl Parameter {
    fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            help: None,
            value_type,
            required: false,
        }
    }

    /// Create an integer parameter, specified as `-NAME=VALUE`.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Integer)
    }

    /// Create a text parameter, specified as `-NAME=VALUE`.
    /// The value is taken verbatim, and may be empty.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Text)
    }

    /// Create a flag parameter, specified as `-NAME`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Flag)
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Require this parameter to be specified on the command line.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl From<Parameter> for ParameterSpec {
    fn from(value: Parameter) -> Self {
        let Parameter {
            name,
            help,
            value_type,
            required,
        } = value;
        ParameterSpec::new(name, help.unwrap_or_default(), value_type, required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Parameter::integer("abc"), ValueType::Integer)]
    #[case(Parameter::text("abc"), ValueType::Text)]
    #[case(Parameter::flag("abc"), ValueType::Flag)]
    fn into_spec(#[case] parameter: Parameter, #[case] value_type: ValueType) {
        // Execute
        let spec = ParameterSpec::from(parameter);

        // Verify
        assert_eq!(spec.name(), "abc");
        assert_eq!(spec.description(), "");
        assert_eq!(spec.value_type(), value_type);
        assert!(!spec.required());
    }

    #[test]
    fn help_required() {
        // Execute
        let spec = ParameterSpec::from(
            Parameter::integer("abc")
                .help("--this will get discarded--")
                .help("The message.")
                .required(),
        );

        // Verify
        assert_eq!(spec.description(), "The message.");
        assert!(spec.required());
    }
}
