use std::env;

use crate::model::{ParsedValue, Prefix, ValueType};
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ValueStore;
use crate::prelude::Extractable;
use crate::schema::{ConfigError, ParameterSpec, SchemaRegistry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via `CommandLineParser::build`.
///
/// A `GeneralParser` owns both the parameter schema and the values captured from the most recent parse(s).
/// It provides no internal locking; use it from one thread at a time.
pub struct GeneralParser {
    program: String,
    about: Option<String>,
    prefix: Prefix,
    registry: SchemaRegistry,
    values: ValueStore,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .field("prefix", &self.prefix)
            .field("registry", &self.registry)
            .field("values", &self.values)
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        prefix: Prefix,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            prefix,
            registry: SchemaRegistry::default(),
            values: ValueStore::default(),
            user_interface,
        }
    }

    /// Declare a parameter.
    ///
    /// Fails with [`ConfigError::AlreadyExists`] if `name` is already declared, leaving the existing declaration intact.
    /// The `name` must not include the prefix nor the `=` character.
    ///
    /// Parameters may be declared between parses; clear the captured values first (see [`GeneralParser::reset_values`]).
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, ValueType};
    ///
    /// let mut parser = CommandLineParser::new("program").build();
    /// parser.register("count", "How many.", ValueType::Integer, false).unwrap();
    /// assert!(parser.register("count", "Again.", ValueType::Text, true).is_err());
    ///
    /// parser.parse_tokens(&["program", "-count=3"]).unwrap();
    /// assert_eq!(parser.get::<i64>("count"), Some(3));
    /// ```
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        value_type: ValueType,
        required: bool,
    ) -> Result<(), ConfigError> {
        self.register_spec(ParameterSpec::new(name, description, value_type, required))
    }

    pub(crate) fn register_spec(&mut self, spec: ParameterSpec) -> Result<(), ConfigError> {
        self.registry.register(spec)
    }

    /// Run the parser against the raw argument list, where `args[0]` is the program name.
    ///
    /// Each subsequent token must be of the form `-NAME` or `-NAME=VALUE` (or `--NAME`, `--NAME=VALUE` under [`Prefix::Double`]).
    /// Parsing stops at the first error.
    /// Values captured before the error remain, so after a failure it is typical to [`GeneralParser::reset_values`].
    ///
    /// When a parameter appears more than once, the last occurrence wins.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, ErrorCode, Parameter};
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::integer("count").required())
    ///     .build();
    ///
    /// let error = parser.parse_tokens(&["program"]).unwrap_err();
    /// assert_eq!(error.code(), ErrorCode::MissingParameter);
    /// ```
    pub fn parse_tokens(&mut self, args: &[&str]) -> Result<(), ParseError> {
        self.parse_tokens_with(args, |_| {})
    }

    /// Run the parser against the raw argument list, notifying `on_error` of the failure (if any).
    ///
    /// `on_error` is invoked at most once, and never on success.
    /// The error is also returned, so `on_error` is purely a notification.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, ErrorCode, Parameter};
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::flag("verbose"))
    ///     .build();
    ///
    /// let mut reported = Vec::default();
    /// let result = parser.parse_tokens_with(&["program", "-verbose=1"], |error| {
    ///     reported.push((error.code(), error.parameter().to_string(), error.token().to_string()));
    /// });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(
    ///     reported,
    ///     vec![(ErrorCode::FlagHasValue, "verbose".to_string(), "-verbose=1".to_string())]
    /// );
    /// ```
    pub fn parse_tokens_with(
        &mut self,
        args: &[&str],
        on_error: impl FnOnce(&ParseError),
    ) -> Result<(), ParseError> {
        let tokens = match args.split_first() {
            Some((program, tokens)) => {
                self.program = program.to_string();
                tokens
            }
            None => args,
        };
        let parser = Parser::new(self.prefix, &self.registry);
        let result = parser.consume(tokens, &mut self.values);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsed {n} tokens: {result:?}.", n = tokens.len());
        }

        if let Err(error) = &result {
            on_error(error);
        }

        result
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// If the parser encounters an error, it will display the error and usage message, then exit with error code `1` (via `std::process::exit`).
    pub fn parse(&mut self) {
        let args: Vec<String> = env::args().collect();
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        if let Err(error) = self.parse_tokens(tokens.as_slice()) {
            self.user_interface.print_error(&error);
            self.print_usage();
            std::process::exit(1);
        }
    }

    /// Get the value of a parameter as type `T`.
    ///
    /// Returns `None` when the parameter is unknown, was not specified, or was declared with a different type.
    /// The exception is a declared flag that was not specified, which is `Some(false)` as a `bool`.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, Parameter};
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::integer("count"))
    ///     .add(Parameter::flag("verbose"))
    ///     .build();
    /// parser.parse_tokens(&["program", "-count=0x10"]).unwrap();
    ///
    /// assert_eq!(parser.get::<i64>("count"), Some(16));
    /// assert_eq!(parser.get::<String>("count"), None);
    /// assert_eq!(parser.get::<bool>("verbose"), Some(false));
    /// assert_eq!(parser.get::<bool>("missing"), None);
    /// ```
    pub fn get<T: Extractable>(&self, name: &str) -> Option<T> {
        match self.values.get(name) {
            Some(value) => T::extract(value),
            None => self.registry.get(name).and_then(T::absent),
        }
    }

    /// Get the value of a text parameter, by reference.
    ///
    /// Follows the same rules as `get::<String>`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParsedValue::Text(value)) => Some(value.as_str()),
            Some(ParsedValue::Integer(_)) | Some(ParsedValue::Flag(_)) | None => None,
        }
    }

    /// Check whether the parameter was specified on the command line.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains(name)
    }

    /// The declared parameters, in no particular order.
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.registry.iter()
    }

    /// The program name; taken from the most recent parse, or otherwise the configured name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Clear both the declared parameters and the captured values.
    pub fn reset(&mut self) {
        self.values.clear();
        self.registry.clear();
    }

    /// Clear only the captured values, keeping the declared parameters.
    /// This allows parsing another argument list against the same parameters.
    pub fn reset_values(&mut self) {
        self.values.clear();
    }

    /// The usage message, listing each parameter along with its description.
    pub fn usage(&self) -> String {
        self.usage_lines().join("\n")
    }

    /// Display the usage message.
    pub fn print_usage(&self) {
        for line in self.usage_lines() {
            self.user_interface.print(line);
        }
    }

    fn usage_lines(&self) -> Vec<String> {
        Printer::terminal().render(
            &self.program,
            self.about.as_deref(),
            self.prefix,
            self.registry.iter(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::parser::BlackHole;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn general_parser(prefix: Prefix) -> GeneralParser {
        let mut parser = GeneralParser::new("program", None, prefix, Box::new(BlackHole::default()));
        parser
            .register("flag", "A flag", ValueType::Flag, false)
            .unwrap();
        parser
            .register("intParam", "An integer", ValueType::Integer, false)
            .unwrap();
        parser
            .register("stringParam", "A string", ValueType::Text, false)
            .unwrap();
        parser
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["program"])]
    fn parse_tokens_empty(#[case] args: Vec<&str>) {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        parser.parse_tokens(args.as_slice()).unwrap();

        // Verify
        assert!(!parser.is_set("flag"));
        assert_eq!(parser.get::<bool>("flag"), Some(false));
        assert_eq!(parser.get::<i64>("intParam"), None);
        assert_eq!(parser.get::<String>("stringParam"), None);
    }

    #[test]
    fn parse_tokens_flag() {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        parser.parse_tokens(&["program", "-flag"]).unwrap();

        // Verify
        assert!(parser.is_set("flag"));
        assert_eq!(parser.get::<bool>("flag"), Some(true));
        assert_eq!(parser.get::<i64>("flag"), None);
    }

    #[test]
    fn parse_tokens_flag_has_value() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        let mut reported = Vec::default();

        // Execute
        let error = parser
            .parse_tokens_with(&["program", "-flag=2"], |error| {
                reported.push((
                    error.code(),
                    error.parameter().to_string(),
                    error.token().to_string(),
                ))
            })
            .unwrap_err();

        // Verify
        assert_eq!(error.code(), ErrorCode::FlagHasValue);
        assert_eq!(
            reported,
            vec![(
                ErrorCode::FlagHasValue,
                "flag".to_string(),
                "-flag=2".to_string()
            )]
        );
        assert!(!parser.is_set("flag"));
        assert_eq!(parser.get::<bool>("flag"), Some(false));
    }

    #[rstest]
    #[case("-intParam=4", 4)]
    #[case("-intParam=0", 0)]
    #[case("-intParam=-7", -7)]
    #[case("-intParam=0x1F", 31)]
    #[case("-intParam= 4", 4)]
    fn parse_tokens_integer(#[case] token: &str, #[case] expected: i64) {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        parser.parse_tokens(&["program", token]).unwrap();

        // Verify
        assert!(parser.is_set("intParam"));
        assert_eq!(parser.get::<i64>("intParam"), Some(expected));
        assert_eq!(parser.get::<String>("intParam"), None);
        assert_eq!(parser.get_str("intParam"), None);
        assert_eq!(parser.get::<bool>("intParam"), None);
    }

    #[rstest]
    #[case("-intParam", ErrorCode::MissingValue)]
    #[case("-intParam=43asd", ErrorCode::WrongValueType)]
    #[case("-intParam=43 asd", ErrorCode::WrongValueType)]
    #[case("-intParam=abc", ErrorCode::WrongValueType)]
    #[case("-intParam=", ErrorCode::WrongValueType)]
    #[case("-intParam=4 2", ErrorCode::WrongValueType)]
    fn parse_tokens_integer_error(#[case] token: &str, #[case] code: ErrorCode) {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        let mut calls = 0;

        // Execute
        let error = parser
            .parse_tokens_with(&["program", token], |error| {
                calls += 1;
                assert_eq!(error.code(), code);
                assert_eq!(error.parameter(), "intParam");
                assert_eq!(error.token(), token);
            })
            .unwrap_err();

        // Verify
        assert_eq!(error.code(), code);
        assert_eq!(calls, 1);
        assert!(!parser.is_set("intParam"));
    }

    #[rstest]
    #[case("-stringParam= random string with \n escaped \t chars ", " random string with \n escaped \t chars ")]
    #[case("-stringParam=", "")]
    #[case("-stringParam=a=b", "a=b")]
    #[case("-stringParam==", "=")]
    fn parse_tokens_text(#[case] token: &str, #[case] expected: &str) {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        parser.parse_tokens(&["program", token]).unwrap();

        // Verify
        assert!(parser.is_set("stringParam"));
        assert_eq!(parser.get::<String>("stringParam"), Some(expected.to_string()));
        assert_eq!(parser.get_str("stringParam"), Some(expected));
        assert_eq!(parser.get::<i64>("stringParam"), None);
    }

    #[test]
    fn parse_tokens_with_success_never_notifies() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        parser
            .register("required", "Needed", ValueType::Integer, true)
            .unwrap();
        let mut calls = 0;

        // Execute
        parser
            .parse_tokens_with(&["program", "-required=1", "-flag"], |_| calls += 1)
            .unwrap();

        // Verify
        assert_eq!(calls, 0);
        assert_eq!(parser.get::<i64>("required"), Some(1));
    }

    #[test]
    fn parse_tokens_with_missing_parameter() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        parser
            .register("required", "Needed", ValueType::Integer, true)
            .unwrap();
        let mut calls = 0;

        // Execute
        let error = parser
            .parse_tokens_with(&["program", "-flag", "-stringParam=x"], |error| {
                calls += 1;
                assert_eq!(error.code(), ErrorCode::MissingParameter);
                assert_eq!(error.parameter(), "required");
                assert_eq!(error.token(), "");
                assert_eq!(
                    error.to_string(),
                    "Parse error: required parameter 'required' was not provided."
                );
            })
            .unwrap_err();

        // Verify
        assert_eq!(calls, 1);
        assert_matches!(error, ParseError::MissingParameter { name } => {
            assert_eq!(name, "required");
        });
    }

    #[test]
    fn parse_tokens_double_prefix() {
        // Setup
        let mut parser = general_parser(Prefix::Double);

        // Execute
        parser
            .parse_tokens(&["program", "--flag", "--intParam=3", "--stringParam=x"])
            .unwrap();
        let error = parser.parse_tokens(&["program", "-flag"]).unwrap_err();

        // Verify
        assert_eq!(parser.get::<bool>("flag"), Some(true));
        assert_eq!(parser.get::<i64>("intParam"), Some(3));
        assert_eq!(parser.get_str("stringParam"), Some("x"));
        assert_matches!(error, ParseError::WrongParamFormat { token, prefix } => {
            assert_eq!(token, "-flag");
            assert_eq!(prefix, Prefix::Double);
        });
    }

    #[test]
    fn parse_tokens_last_occurrence_wins() {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        parser
            .parse_tokens(&["program", "-intParam=1", "-stringParam=a", "-intParam=2"])
            .unwrap();

        // Verify
        assert_eq!(parser.get::<i64>("intParam"), Some(2));
        assert_eq!(parser.get_str("stringParam"), Some("a"));
    }

    #[test]
    fn parse_tokens_records_program() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        assert_eq!(parser.program(), "program");

        // Execute
        parser.parse_tokens(&["/usr/bin/other"]).unwrap();

        // Verify
        assert_eq!(parser.program(), "/usr/bin/other");
        assert_contains!(parser.usage(), "usage: /usr/bin/other ");
    }

    #[test]
    fn reset_values() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        parser.parse_tokens(&["program", "-flag", "-intParam=1"]).unwrap();

        // Execute
        parser.reset_values();
        parser.parse_tokens(&["program", "-stringParam=s"]).unwrap();

        // Verify
        assert!(!parser.is_set("flag"));
        assert_eq!(parser.get::<bool>("flag"), Some(false));
        assert_eq!(parser.get::<i64>("intParam"), None);
        assert_eq!(parser.get_str("stringParam"), Some("s"));
        assert_eq!(parser.parameters().count(), 3);
    }

    #[test]
    fn reset() {
        // Setup
        let mut parser = general_parser(Prefix::Single);
        parser.parse_tokens(&["program", "-flag"]).unwrap();

        // Execute
        parser.reset();

        // Verify
        assert_eq!(parser.parameters().count(), 0);
        assert!(!parser.is_set("flag"));
        assert_eq!(parser.get::<bool>("flag"), None);
        let error = parser.parse_tokens(&["program", "-flag"]).unwrap_err();
        assert_eq!(error.code(), ErrorCode::UnknownParameter);
        parser
            .register("flag", "Now an integer", ValueType::Integer, true)
            .unwrap();
    }

    #[test]
    fn register_duplicate() {
        // Setup
        let mut parser = general_parser(Prefix::Single);

        // Execute
        let error = parser
            .register("flag", "Another", ValueType::Integer, true)
            .unwrap_err();

        // Verify
        assert_eq!(error.code(), ErrorCode::AlreadyExists);
        parser.parse_tokens(&["program"]).unwrap();
        assert_eq!(parser.get::<bool>("flag"), Some(false));
    }

    #[test]
    fn print_usage() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut parser = GeneralParser::new(
            "program",
            None,
            Prefix::Single,
            Box::new(interface.clone()),
        );
        parser
            .register("flag", "A flag", ValueType::Flag, false)
            .unwrap();

        // Execute
        parser.print_usage();

        // Verify
        let message = interface.consume_message();
        assert_contains!(message, "usage: program [-flag]\n");
        assert_contains!(message, " -flag   A flag");
    }
}
