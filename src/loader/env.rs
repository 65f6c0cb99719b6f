use tracing::{debug, trace};

use crate::schema::IniDocument;
use crate::Error;

/// Binds `{prefix}{separator}{section}{separator}{key}` variables from the
/// process environment.
///
/// Variables whose name or value is not valid Unicode are ignored.
pub(super) fn apply_env_vars(
    target: &mut dyn IniDocument,
    prefix: &str,
    separator: &str,
) -> Result<(), Error> {
    let vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    apply_vars(target, vars, prefix, separator)
}

fn apply_vars(
    target: &mut dyn IniDocument,
    vars: impl IntoIterator<Item = (String, String)>,
    prefix: &str,
    separator: &str,
) -> Result<(), Error> {
    let prefix_with_sep = format!("{prefix}{separator}");
    let mut vars: Vec<_> = vars
        .into_iter()
        .filter(|(key, _)| key.starts_with(&prefix_with_sep))
        .collect();
    vars.sort();

    for (var, value) in vars {
        let path: Vec<&str> = var[prefix_with_sep.len()..].split(separator).collect();

        let [section_name, key] = path.as_slice() else {
            debug!(var = %var, "ignoring env var without a section and key");
            continue;
        };

        let Some(section_index) = position_ignore_case(target.sections(), section_name) else {
            debug!(var = %var, section = %section_name, "skipping env var for undeclared section");
            continue;
        };
        let Some(section) = target.section_mut(section_index) else {
            continue;
        };
        let Some(key_index) = position_ignore_case(section.keys(), key) else {
            debug!(var = %var, key = %key, "skipping env var for undeclared key");
            continue;
        };
        let Some(field) = section.field_mut(key_index) else {
            continue;
        };

        match field.assign(&value) {
            Ok(()) => trace!(var = %var, "assigned from environment"),
            Err(source) => return Err(Error::EnvValue { var, source }),
        }
    }

    Ok(())
}

/// Env var names are conventionally upper case, so annotations are matched
/// without regard to ASCII case here.
fn position_ignore_case(annotations: &[&str], name: &str) -> Option<usize> {
    annotations.iter().position(|a| a.eq_ignore_ascii_case(name))
}
