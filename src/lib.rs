//! Bind INI files into statically declared config structs.
//!
//! A target struct declares which section each of its fields binds to, and
//! each section struct declares which key each of its fields binds to:
//!
//! ```no_run
//! ini_bind::ini_section! {
//!     #[derive(Debug, Default)]
//!     pub struct MysqlConfig {
//!         pub address: String => "address",
//!         pub port: u16 => "port",
//!     }
//! }
//!
//! ini_bind::ini_document! {
//!     #[derive(Debug, Default)]
//!     pub struct Config {
//!         pub mysql: MysqlConfig => "mysql",
//!     }
//! }
//!
//! let mut config = Config::default();
//! ini_bind::load_ini("conf.ini", &mut config)?;
//! # Ok::<(), ini_bind::Error>(())
//! ```
//!
//! Sections and keys the target does not declare are skipped, so a file may
//! carry entries an older binary doesn't know about.

use std::any::type_name;
use std::path::Path;

mod error;
pub mod ini;
pub mod loader;
pub mod schema;

pub use error::Error;
pub use loader::Loader;
pub use schema::{FieldMut, IniDocument, IniField, IniSection, IntegerField, ValueKind};

/// Reads the INI file at `path` and binds it into `target`.
///
/// The target is checked before the file is opened. On a parse error, the
/// lines before the failing one stay applied.
pub fn load_ini<T: IniDocument>(path: impl AsRef<Path>, target: &mut T) -> Result<(), Error> {
    Loader::builder().with_file(path, true).load_into(target)
}

/// Binds INI `content` into `target`.
pub fn bind_str<T: IniDocument>(content: &str, target: &mut T) -> Result<(), Error> {
    schema::check_target(target, type_name::<T>())?;
    ini::bind(content, target)?;
    Ok(())
}

/// Binds raw INI bytes into `target`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD before parsing.
pub fn bind_bytes<T: IniDocument>(content: &[u8], target: &mut T) -> Result<(), Error> {
    bind_str(&String::from_utf8_lossy(content), target)
}
