//! Declared shape of a bind target.
//!
//! A target is an [`IniDocument`]: a record whose fields are sections. Each
//! section is an [`IniSection`]: a record whose fields are scalar leaves.
//! Both expose their annotations as static tables in declaration order, and
//! resolution is a linear scan over those tables where the first match wins.
//!
//! The [`ini_document!`](crate::ini_document) and
//! [`ini_section!`](crate::ini_section) macros generate both traits from a
//! struct definition.

mod field;
mod macros;

use thiserror::Error;

pub use field::{parse_bool, CoerceError, FieldMut, IniField, IntegerField, ValueKind};

/// A record whose fields are INI sections.
pub trait IniDocument {
    /// Section annotations, in field declaration order.
    fn sections(&self) -> &'static [&'static str];

    /// Returns the section field at `index` in [`sections`](Self::sections).
    fn section_mut(&mut self, index: usize) -> Option<&mut dyn IniSection>;
}

/// A record whose fields are bound to INI keys.
pub trait IniSection {
    /// Key annotations, in field declaration order.
    fn keys(&self) -> &'static [&'static str];

    /// Returns the leaf field at `index` in [`keys`](Self::keys).
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

/// The target does not have the shape of a section record.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsageError {
    #[error("target `{0}` declares no sections")]
    NoSections(&'static str),

    #[error("target `{target}` declares section '{section}' but does not expose it")]
    MissingSection {
        target: &'static str,
        section: &'static str,
    },

    #[error("section '{section}' declares key '{key}' but does not expose it")]
    MissingField {
        section: &'static str,
        key: &'static str,
    },
}

/// Finds the section field annotated with `name`.
pub fn resolve_section(target: &dyn IniDocument, name: &str) -> Option<usize> {
    target.sections().iter().position(|s| *s == name)
}

/// Finds the leaf field annotated with `key` in `section`.
pub fn resolve_key(section: &dyn IniSection, key: &str) -> Option<usize> {
    section.keys().iter().position(|k| *k == key)
}

/// Verifies that every declared section and key is reachable.
///
/// A section without keys is valid and simply binds nothing.
///
/// `type_name` only labels the error.
pub fn check_target(target: &mut dyn IniDocument, type_name: &'static str) -> Result<(), UsageError> {
    let sections = target.sections();
    if sections.is_empty() {
        return Err(UsageError::NoSections(type_name));
    }

    for (index, &name) in sections.iter().enumerate() {
        let section = target.section_mut(index).ok_or(UsageError::MissingSection {
            target: type_name,
            section: name,
        })?;

        for (key_index, &key) in section.keys().iter().enumerate() {
            if section.field_mut(key_index).is_none() {
                return Err(UsageError::MissingField { section: name, key });
            }
        }
    }

    Ok(())
}
