//! Typed access to the key-value document embedded in a notification.
//!
//! The API ships the body of each notification as a small YAML document whose
//! field set depends on the notification type. `Payload` keeps the decoded
//! document as-is and hands fields out through accessors that fail with a
//! `PayloadError` when a field is missing or has the wrong shape.

use serde_yaml::{Mapping, Value};

use crate::error::PayloadError;

/// Decoded notification body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Mapping,
}

impl Payload {
    /// Decode the embedded text of a notification.
    ///
    /// An empty document decodes to an empty payload.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Decode` if the text is not valid YAML or its top
    /// level is not a mapping.
    pub fn decode(text: &str) -> Result<Self, PayloadError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(text).map_err(PayloadError::decode)?;
        match untag(&value) {
            Value::Mapping(fields) => Ok(Self {
                fields: fields.clone(),
            }),
            Value::Null => Ok(Self::default()),
            other => Err(PayloadError::decode(format!(
                "expected a mapping at the top level, found {}",
                describe(other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn value(&self, field: &'static str) -> Result<&Value, PayloadError> {
        self.fields
            .get(field)
            .map(untag)
            .ok_or(PayloadError::missing(field))
    }

    fn sequence(&self, field: &'static str) -> Result<&[Value], PayloadError> {
        match self.value(field)? {
            Value::Sequence(items) => Ok(items),
            _ => Err(PayloadError::mismatch(field, "a list")),
        }
    }

    pub fn int(&self, field: &'static str) -> Result<i64, PayloadError> {
        self.value(field)?
            .as_i64()
            .ok_or(PayloadError::mismatch(field, "an integer"))
    }

    /// Read an integer field as a typed entity id.
    pub fn id<T: From<i64>>(&self, field: &'static str) -> Result<T, PayloadError> {
        self.int(field).map(T::from)
    }

    /// Read a numeric field. Integers are widened, so `shieldValue: 1` reads as `1.0`.
    ///
    /// `.nan` and `.inf` are rejected.
    pub fn float(&self, field: &'static str) -> Result<f64, PayloadError> {
        self.value(field)?
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or(PayloadError::mismatch(field, "a finite number"))
    }

    /// Read a scalar field as text.
    pub fn string(&self, field: &'static str) -> Result<String, PayloadError> {
        match self.value(field)? {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(PayloadError::mismatch(field, "a scalar")),
        }
    }

    pub fn int_list(&self, field: &'static str) -> Result<Vec<i64>, PayloadError> {
        self.sequence(field)?
            .iter()
            .map(|item| {
                untag(item)
                    .as_i64()
                    .ok_or(PayloadError::mismatch(field, "a list of integers"))
            })
            .collect()
    }

    /// Read the integer at `index` of a list field.
    pub fn int_at(&self, field: &'static str, index: usize) -> Result<i64, PayloadError> {
        let items = self.sequence(field)?;
        let item = items.get(index).ok_or(PayloadError::IndexOutOfRange {
            field,
            index,
            len: items.len(),
        })?;
        untag(item)
            .as_i64()
            .ok_or(PayloadError::mismatch(field, "a list with an integer at that index"))
    }

    pub fn id_at<T: From<i64>>(&self, field: &'static str, index: usize) -> Result<T, PayloadError> {
        self.int_at(field, index).map(T::from)
    }

    /// Read the last element of a list field as an integer.
    ///
    /// Link data (`ownerCorpLinkData`, `characterLinkData`, ...) is a list
    /// whose final element is the id being linked to.
    pub fn last_int(&self, field: &'static str) -> Result<i64, PayloadError> {
        let items = self.sequence(field)?;
        match items.len() {
            0 => Err(PayloadError::IndexOutOfRange {
                field,
                index: 0,
                len: 0,
            }),
            len => self.int_at(field, len - 1),
        }
    }

    pub fn last_id<T: From<i64>>(&self, field: &'static str) -> Result<T, PayloadError> {
        self.last_int(field).map(T::from)
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
