use std::collections::HashMap;
use thiserror::Error;

use crate::model::ValueType;
use crate::parser::ErrorCode;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of the parameter schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The parameter name has already been registered.
    #[error("Config error: cannot duplicate the parameter '{0}'.")]
    AlreadyExists(String),
}

impl ConfigError {
    /// The [`ErrorCode`] of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::AlreadyExists(_) => ErrorCode::AlreadyExists,
        }
    }
}

/// The declared metadata of a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    name: String,
    description: String,
    value_type: ValueType,
    required: bool,
}

impl ParameterSpec {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value_type: ValueType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value_type,
            required,
        }
    }

    /// The unique name of the parameter (without prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description shown in the usage message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Whether the parameter must appear on the command line.
    pub fn required(&self) -> bool {
        self.required
    }
}

/// The catalog of declared parameters, keyed by name.
#[derive(Debug, Default)]
pub(crate) struct SchemaRegistry {
    specs: HashMap<String, ParameterSpec>,
}

impl SchemaRegistry {
    /// Insert the spec, unless its name is already taken (in which case the registry is unchanged).
    pub(crate) fn register(&mut self, spec: ParameterSpec) -> Result<(), ConfigError> {
        if self.specs.contains_key(spec.name()) {
            return Err(ConfigError::AlreadyExists(spec.name().to_string()));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering parameter: {spec:?}.");
        }

        self.specs.insert(spec.name().to_string(), spec);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.specs.get(name)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.specs.values()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.specs.clear();
    }
}
