use crate::api::Parameter;
use crate::model::Prefix;
use crate::parser::{ConsoleInterface, GeneralParser, UserInterface};
use crate::schema::{ConfigError, ParameterSpec};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use keyarg_builder as keyarg;
/// use keyarg::{CommandLineParser};
///
/// let mut parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&["program"]).unwrap();
/// ```
#[derive(Debug)]
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
    prefix: Prefix,
    parameters: Vec<ParameterSpec>,
}

impl CommandLineParser {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(&[]).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            prefix: Prefix::default(),
            parameters: Vec::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Set the option prefix convention (default: [`Prefix::Single`]).
    /// If repeated, only the final prefix will apply.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, Parameter, Prefix};
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .prefix(Prefix::Double)
    ///     .add(Parameter::integer("count"))
    ///     .build();
    ///
    /// parser.parse_tokens(&["program", "--count=2"]).unwrap();
    /// assert_eq!(parser.get::<i64>("count"), Some(2));
    /// ```
    pub fn prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Add a parameter to the command line parser.
    ///
    /// The order of parameters does not affect the command line parser semantics.
    /// A repeated parameter name is reported when building.
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.parameters.push(ParameterSpec::from(parameter));
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let CommandLineParser {
            program,
            about,
            prefix,
            parameters,
        } = self;
        let mut parser = GeneralParser::new(program, about, prefix, user_interface);

        for spec in parameters {
            parser.register_spec(spec)?;
        }

        Ok(parser)
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`GeneralParser`] that never writes to the console, for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use keyarg_builder as keyarg;
    /// use keyarg::{CommandLineParser, Parameter};
    ///
    /// // Function under test.
    /// // We want to make sure the parameters are wired up correctly.
    /// pub fn setup_fn(clp: CommandLineParser) -> CommandLineParser {
    ///     clp.add(Parameter::integer("value").required())
    /// }
    ///
    /// let mut parser = setup_fn(CommandLineParser::new("test")).build_quiet().unwrap();
    /// parser.parse_tokens(&["test", "-value=2"]).unwrap();
    /// assert_eq!(parser.get::<i64>("value"), Some(2));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_quiet(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(crate::parser::BlackHole::default()))
    }
}
