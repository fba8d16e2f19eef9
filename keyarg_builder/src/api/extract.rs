use crate::model::{ParsedValue, ValueType};
use crate::prelude::Extractable;
use crate::schema::ParameterSpec;

impl Extractable for i64 {
    fn extract(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Integer(v) => Some(*v),
            ParsedValue::Text(_) | ParsedValue::Flag(_) => None,
        }
    }
}

impl Extractable for String {
    fn extract(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Text(v) => Some(v.clone()),
            ParsedValue::Integer(_) | ParsedValue::Flag(_) => None,
        }
    }
}

impl Extractable for bool {
    fn extract(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Flag(v) => Some(*v),
            ParsedValue::Integer(_) | ParsedValue::Text(_) => None,
        }
    }

    // A declared flag that wasn't specified is simply off.
    fn absent(spec: &ParameterSpec) -> Option<Self> {
        match spec.value_type() {
            ValueType::Flag => Some(false),
            ValueType::Integer | ValueType::Text => None,
        }
    }
}
