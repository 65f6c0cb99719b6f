//! Loading INI sources into a bind target.

mod builder;
mod env;

pub use builder::Loader;
