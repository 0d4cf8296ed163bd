//! Loosely-typed input accepted by the data description helper.
//!
//! [`DataInput`] lists every shape the helper knows how to describe. The
//! variant order is also the order in which shapes are checked.

use std::collections::BTreeMap;

use super::{Employee, PerformanceReview};

/// A value whose shape is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    /// A full employee record.
    Employee(Employee),
    /// A performance review.
    Review(PerformanceReview),
    /// Free text. Text starting with `E` is treated as an employee id.
    Text(String),
    /// An ordered collection of values.
    List(Vec<DataInput>),
    /// A keyed collection of values.
    Map(BTreeMap<String, DataInput>),
    /// Anything else, described only by its type name.
    Other(String),
}

impl From<Employee> for DataInput {
    fn from(employee: Employee) -> Self {
        DataInput::Employee(employee)
    }
}

impl From<&Employee> for DataInput {
    fn from(employee: &Employee) -> Self {
        DataInput::Employee(employee.clone())
    }
}

impl From<PerformanceReview> for DataInput {
    fn from(review: PerformanceReview) -> Self {
        DataInput::Review(review)
    }
}

impl From<&str> for DataInput {
    fn from(text: &str) -> Self {
        DataInput::Text(text.to_string())
    }
}

impl From<String> for DataInput {
    fn from(text: String) -> Self {
        DataInput::Text(text)
    }
}

impl<T: Into<DataInput>> From<Vec<T>> for DataInput {
    fn from(items: Vec<T>) -> Self {
        DataInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for DataInput {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => DataInput::Text(text),
            Value::Array(items) => DataInput::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => DataInput::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
            Value::Null => DataInput::Other("null".to_string()),
            Value::Bool(_) => DataInput::Other("bool".to_string()),
            Value::Number(_) => DataInput::Other("number".to_string()),
        }
    }
}
