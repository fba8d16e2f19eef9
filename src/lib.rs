//! `keyarg` is a small command line parser for Rust.
//!
//! A program declares a schema of named parameters, then parses its argument list against that schema.
//! Every parameter is specified on the command line as a key, or key-value pair:
//! ```console
//! $ program -count=3 -name=world -verbose
//! ```
//! `keyarg` prioritizes the following design concerns:
//! * *Type safe extraction*:
//! Each parameter is declared as an integer, text, or flag.
//! Values are converted while parsing, and extracted by type (never converted across types).
//! * *Fail fast*:
//! Parsing stops at the first error, which is reported as a structured [`ParseError`].
//! * *Small surface*:
//! There are no positional arguments, sub-commands, repeated parameters, or short/long aliases.
//!
//! # Usage
//! ```
//! use keyarg::{CommandLineParser, Parameter};
//!
//! let mut parser = CommandLineParser::new("greeter")
//!     .about("Greets somebody.")
//!     .add(Parameter::text("name").help("Who to greet.").required())
//!     .add(Parameter::integer("times").help("How many greetings."))
//!     .add(Parameter::flag("loud").help("Shout the greeting."))
//!     .build();
//!
//! // Typically, `parser.parse()` reads the program's own arguments.
//! parser
//!     .parse_tokens(&["greeter", "-name=world", "-times=2"])
//!     .unwrap();
//!
//! let name: String = parser.get("name").unwrap();
//! let times: i64 = parser.get("times").unwrap_or(1);
//! let loud: bool = parser.get("loud").unwrap();
//!
//! assert_eq!(name, "world");
//! assert_eq!(times, 2);
//! assert!(!loud);
//! ```
//!
//! The usage message is generated from the schema:
//! ```console
//! usage: greeter [-loud] -name=TEXT [-times=INTEGER]
//!
//! Greets somebody.
//!
//! parameters:
//!  -loud            Shout the greeting.
//!  -name=TEXT       Who to greet.         required
//!  -times=INTEGER   How many greetings.
//! ```
//!
//! # Cli Semantics
//! `keyarg` parses the Cli tokens according to the following set of rules.
//!
//! * The first token is the program name; it is not parsed.
//! * Every other token must start with the prefix: `-` by default, or `--` via [`Prefix::Double`].
//! The prefix is fixed per parser; the two conventions are never mixed.
//! * The token is split at the first `=` character into the parameter name, and value.
//! For example, `-key=123=456` specifies the value `123=456` for `key`.
//! * A flag must not have a value (`-verbose`), while integers and text must (`-count=3`).
//! * Integers accept an optional sign, and an optional base prefix: `0x` for hexadecimal or `0` for octal.
//! Leading whitespace is skipped, but the rest of the value must be a number, so `-count=4 ` (trailing space) is rejected.
//! * Text is taken verbatim, including whitespace.
//! An empty value (`-name=`) is the empty string.
//! * When a parameter is specified more than once, the last occurrence wins.
//! * Required parameters are checked only after all the tokens parse successfully.
//!
//! ### Errors
//! ```console
//! ErrorCode          | Trigger
//! ---------------------------------------------------------------------
//! WrongParamFormat   | token lacks the prefix
//! UnknownParameter   | name is not declared
//! FlagHasValue       | a flag is given a value
//! MissingValue       | an integer/text is given without a value
//! WrongValueType     | a value cannot convert to an integer
//! MissingParameter   | a required parameter is not specified
//! AlreadyExists      | a parameter is declared twice (see ConfigError)
//! ```
//!
//! To be notified of the failure as it happens, pass a handler to [`GeneralParser::parse_tokens_with`].
//!
//! ### Extraction
//! [`GeneralParser::get`] extracts any type implementing [Extractable](./prelude/trait.Extractable.html): `i64`, `String`, and `bool`.
//! It returns `None` when the parameter is unknown, unspecified, or declared with another type.
//! The exception is a declared flag that is not specified, which extracts as `Some(false)`.
//!
//! ### Reuse
//! The same schema may parse several argument lists.
//! Use [`GeneralParser::reset_values`] between parses, or [`GeneralParser::reset`] to also clear the schema.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing.
pub use keyarg_builder::*;
