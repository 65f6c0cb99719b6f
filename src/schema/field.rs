//! Leaf field kinds and string coercion.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// The scalar kind a leaf field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoerceError {
    #[error("expected {expected}, found {value:?}")]
    Mismatch { expected: ValueKind, value: String },

    #[error("unsupported field type `{0}`")]
    Unsupported(&'static str),
}

/// A mutable borrow of one leaf field, tagged with its kind.
pub enum FieldMut<'a> {
    Text(&'a mut String),
    Integer(&'a mut dyn IntegerField),
    Boolean(&'a mut bool),
    /// A field the coercer cannot write. Carries the Rust type name.
    Unsupported(&'static str),
}

impl FieldMut<'_> {
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            FieldMut::Text(_) => Some(ValueKind::Text),
            FieldMut::Integer(_) => Some(ValueKind::Integer),
            FieldMut::Boolean(_) => Some(ValueKind::Boolean),
            FieldMut::Unsupported(_) => None,
        }
    }

    /// Coerces `raw` into the field's kind and stores it.
    ///
    /// The field is left untouched when coercion fails.
    pub fn assign(self, raw: &str) -> Result<(), CoerceError> {
        match self {
            FieldMut::Text(slot) => {
                raw.clone_into(slot);
                Ok(())
            }
            FieldMut::Integer(slot) => {
                slot.set_parsed(raw).map_err(|_| CoerceError::Mismatch {
                    expected: ValueKind::Integer,
                    value: raw.to_string(),
                })
            }
            FieldMut::Boolean(slot) => {
                *slot = parse_bool(raw).ok_or_else(|| CoerceError::Mismatch {
                    expected: ValueKind::Boolean,
                    value: raw.to_string(),
                })?;
                Ok(())
            }
            FieldMut::Unsupported(type_name) => Err(CoerceError::Unsupported(type_name)),
        }
    }
}

/// Accepts `true/false/1/0/t/f` in any letter case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    const TRUTHY: [&str; 3] = ["true", "t", "1"];
    const FALSY: [&str; 3] = ["false", "f", "0"];

    if TRUTHY.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if FALSY.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

/// An integer field of any width.
pub trait IntegerField {
    /// Parses `raw` as a base-10 integer of this width and stores it.
    fn set_parsed(&mut self, raw: &str) -> Result<(), ParseIntError>;
}

/// A type that can be bound to an INI key.
///
/// The declarative macros require every leaf field to implement this, so a
/// field type the coercer cannot handle fails to compile.
pub trait IniField {
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

impl IniField for String {
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Text(self)
    }
}

impl IniField for bool {
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Boolean(self)
    }
}

macro_rules! impl_integer_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerField for $ty {
                fn set_parsed(&mut self, raw: &str) -> Result<(), ParseIntError> {
                    *self = raw.parse::<$ty>()?;
                    Ok(())
                }
            }

            impl IniField for $ty {
                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Integer(self)
                }
            }
        )*
    };
}

impl_integer_field!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
