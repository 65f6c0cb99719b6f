use std::any::type_name;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::apply_env_vars;
use crate::ini;
use crate::schema::{check_target, IniDocument};
use crate::Error;

/// A source in the loading pipeline.
#[derive(Debug)]
enum IniSource {
    File { path: PathBuf, required: bool },
    Text(String),
    Env { prefix: String, separator: String },
}

/// Builder for binding one or more INI sources into a target.
///
/// Sources are applied in registration order onto the same target, so a key
/// set by a later source overrides the value from an earlier one. Keys a
/// source does not mention keep whatever value the target already had.
///
/// ## Example
///
/// ```no_run
/// use ini_bind::Loader;
///
/// ini_bind::ini_section! {
///     #[derive(Debug, Default)]
///     pub struct Server {
///         pub host: String => "host",
///         pub port: u16 => "port",
///     }
/// }
///
/// ini_bind::ini_document! {
///     #[derive(Debug, Default)]
///     pub struct AppConfig {
///         pub server: Server => "server",
///     }
/// }
///
/// let config: AppConfig = Loader::builder()
///     .with_file("config/default.ini", true)
///     .with_file("config/local.ini", false)
///     .with_env("MYAPP", "__")
///     .load()?;
/// # Ok::<(), ini_bind::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .load() or .load_into() is called"]
pub struct Loader {
    sources: Vec<IniSource>,
}

impl Loader {
    /// Creates a loader with no sources.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Queues the INI file at `path`.
    ///
    /// A missing `required` file fails the load with
    /// [`Error::FileNotFound`]. A missing optional file contributes nothing,
    /// which lets a deployment drop in overrides like `local.ini` only where
    /// it needs them.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let path = path.as_ref().to_path_buf();
        self.sources.push(IniSource::File { path, required });
        self
    }

    /// Adds INI text held in memory.
    pub fn with_str(mut self, content: impl Into<String>) -> Self {
        self.sources.push(IniSource::Text(content.into()));
        self
    }

    /// Adds environment variable overrides.
    ///
    /// A variable named `{prefix}{separator}{section}{separator}{key}` is
    /// bound to `key` in `section`. Section and key match their annotations
    /// ignoring ASCII case, and variables are applied in name order.
    ///
    /// ```no_run
    /// # use ini_bind::Loader;
    /// # ini_bind::ini_section! { #[derive(Default)] struct Mysql { port: u16 => "port" } }
    /// # ini_bind::ini_document! { #[derive(Default)] struct AppConfig { mysql: Mysql => "mysql" } }
    /// // With MYAPP__MYSQL__PORT=3307
    /// let config: AppConfig = Loader::builder()
    ///     .with_file("conf.ini", true)
    ///     .with_env("MYAPP", "__")
    ///     .load()?;
    /// # Ok::<(), ini_bind::Error>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        self.sources.push(IniSource::Env {
            prefix: prefix.into(),
            separator,
        });
        self
    }

    /// Binds every source into `target`, in order.
    ///
    /// The target's shape is checked before any source is read. The first
    /// failing source stops the load; earlier sources stay applied.
    pub fn load_into<T: IniDocument>(self, target: &mut T) -> Result<(), Error> {
        check_target(target, type_name::<T>())?;
        let target: &mut dyn IniDocument = target;

        for source in self.sources {
            match source {
                IniSource::File { path, required } => {
                    if let Some(content) = load_ini_file(&path, required)? {
                        ini::bind(&content, target)
                            .map_err(|source| Error::ParseFile { path, source })?;
                    }
                }
                IniSource::Text(content) => ini::bind(&content, target)?,
                IniSource::Env { prefix, separator } => {
                    apply_env_vars(target, &prefix, &separator)?;
                }
            }
        }

        Ok(())
    }

    /// Binds every source into a fresh `T::default()`.
    pub fn load<T: IniDocument + Default>(self) -> Result<T, Error> {
        let mut target = T::default();
        self.load_into(&mut target)?;
        Ok(target)
    }
}

/// Reads the raw bytes of an INI file and decodes them as UTF-8.
///
/// Invalid byte sequences become U+FFFD, so a stray Latin-1 byte only affects
/// the line it sits on. `Ok(None)` means an optional file is absent.
fn load_ini_file(path: &Path, required: bool) -> Result<Option<String>, Error> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "optional config file absent");
            return Ok(None);
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(Error::ReadError {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
