use tracing::{debug, trace};

use super::error::ParseError;
use super::lines::{classify, split_lines, Line};
use crate::schema::{resolve_key, resolve_section, CoerceError, IniDocument};

/// Which section, if any, subsequent assignments land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    NoActiveSection,
    InSection(usize),
}

/// Binds INI `content` into `target`, line by line.
///
/// Undeclared sections and keys are skipped. The first malformed line or
/// rejected value stops the bind; fields assigned by earlier lines keep their
/// new values.
pub fn bind(content: &str, target: &mut dyn IniDocument) -> Result<(), ParseError> {
    let mut cursor = Cursor::NoActiveSection;

    for (line_no, raw) in split_lines(content) {
        match classify(line_no, raw)? {
            None => {}
            Some(Line::Section(name)) => {
                cursor = match resolve_section(target, name) {
                    Some(index) => Cursor::InSection(index),
                    None => {
                        debug!(line = line_no, section = name, "skipping undeclared section");
                        Cursor::NoActiveSection
                    }
                };
            }
            Some(Line::Assignment { key, value }) => {
                let Cursor::InSection(index) = cursor else {
                    debug!(line = line_no, key, "skipping assignment outside a section");
                    continue;
                };
                apply(target, index, line_no, key, value)?;
            }
        }
    }

    Ok(())
}

fn apply(
    target: &mut dyn IniDocument,
    section_index: usize,
    line_no: usize,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    let section_name = target.sections()[section_index];
    let Some(section) = target.section_mut(section_index) else {
        return Ok(());
    };
    let Some(field_index) = resolve_key(section, key) else {
        debug!(line = line_no, section = section_name, key, "skipping undeclared key");
        return Ok(());
    };
    let Some(field) = section.field_mut(field_index) else {
        return Ok(());
    };

    field.assign(value).map_err(|e| match e {
        CoerceError::Mismatch { expected, value } => ParseError::ValueType {
            line: line_no,
            key: key.to_string(),
            expected,
            value,
        },
        CoerceError::Unsupported(type_name) => ParseError::UnsupportedFieldKind {
            line: line_no,
            key: key.to_string(),
            type_name,
        },
    })?;

    trace!(line = line_no, section = section_name, key, "assigned");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::SyntaxErrorKind;
    use crate::schema::{FieldMut, IniSection, ValueKind};

    crate::ini_section! {
        #[derive(Debug, Default, PartialEq)]
        struct MysqlConfig {
            address: String => "address",
            port: i32 => "port",
            username: String => "username",
            password: String => "password",
        }
    }

    crate::ini_section! {
        #[derive(Debug, Default, PartialEq)]
        struct RedisConfig {
            host: String => "host",
            port: i32 => "post",
            password: String => "password",
            database: i32 => "database",
            test: bool => "test",
        }
    }

    crate::ini_document! {
        #[derive(Debug, Default, PartialEq)]
        struct Config {
            mysql: MysqlConfig => "mysql",
            redis: RedisConfig => "redis",
        }
    }

    fn bind_new(content: &str) -> (Config, Result<(), ParseError>) {
        let mut config = Config::default();
        let result = bind(content, &mut config);
        (config, result)
    }

    #[test]
    fn test_end_to_end() {
        let content = "[mysql]\r\naddress=127.0.0.1\r\nport=3306\r\n[redis]\r\nhost=127.0.0.1\r\ntest=true\r\n";
        let (config, result) = bind_new(content);
        result.unwrap();

        assert_eq!(
            config,
            Config {
                mysql: MysqlConfig {
                    address: "127.0.0.1".into(),
                    port: 3306,
                    ..Default::default()
                },
                redis: RedisConfig {
                    host: "127.0.0.1".into(),
                    test: true,
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_lf_only_file_binds_every_line() {
        let (config, result) = bind_new("[mysql]\nport = 1\n[redis]\ndatabase = 2\n");
        result.unwrap();
        assert_eq!(config.mysql.port, 1);
        assert_eq!(config.redis.database, 2);
    }

    #[test]
    fn test_last_write_wins() {
        let (config, result) = bind_new(
            "[mysql]\nport = 1\n[redis]\nhost = a\n[mysql]\nport = 2\nport = 3\n",
        );
        result.unwrap();
        assert_eq!(config.mysql.port, 3);
        assert_eq!(config.redis.host, "a");
    }

    #[test]
    fn test_undeclared_section_skipped_until_next_header() {
        let (config, result) = bind_new(
            "[postgres]\nport = 5432\naddress = db\n[mysql]\naddress = 10.0.0.1\n",
        );
        result.unwrap();
        assert_eq!(config.mysql.port, 0);
        assert_eq!(config.mysql.address, "10.0.0.1");
    }

    #[test]
    fn test_undeclared_section_resets_active_section() {
        let (config, result) = bind_new("[mysql]\nport = 1\n[unknown]\nport = 2\n");
        result.unwrap();
        assert_eq!(config.mysql.port, 1);
    }

    #[test]
    fn test_undeclared_key_skipped_siblings_applied() {
        let (config, result) = bind_new("[redis]\nhost = cache\ntimeout = abc\ntest = 1\n");
        result.unwrap();
        assert_eq!(config.redis.host, "cache");
        assert!(config.redis.test);
    }

    #[test]
    fn test_key_matches_annotation_not_field_name() {
        let (config, result) = bind_new("[redis]\nport = 6379\npost = 6380\n");
        result.unwrap();
        assert_eq!(config.redis.port, 6380);
    }

    #[test]
    fn test_assignment_before_any_section_skipped() {
        let (config, result) = bind_new("port = 3306\naddress = x\n");
        result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_comments_and_whitespace() {
        let (config, result) = bind_new(
            "; top comment\n\n  [ mysql ]  \n# port = 9\n   username   =  root user  \n",
        );
        result.unwrap();
        assert_eq!(config.mysql.username, "root user");
        assert_eq!(config.mysql.port, 0);
    }

    #[test]
    fn test_syntax_errors_report_line() {
        let cases = [
            ("[mysql]\nport = 1\n[section\n", 3, SyntaxErrorKind::UnterminatedSection),
            ("\n[]\n", 2, SyntaxErrorKind::EmptySectionName),
            ("[mysql]\n=value\n", 2, SyntaxErrorKind::MissingKey),
            ("; c\n[mysql]\n\nnovalue\n", 4, SyntaxErrorKind::MissingEquals),
        ];
        for (content, line, kind) in cases {
            let (_, result) = bind_new(content);
            assert_eq!(result, Err(ParseError::Syntax { line, kind }), "{content:?}");
        }
    }

    #[test]
    fn test_malformed_line_in_undeclared_section_still_fails() {
        let (_, result) = bind_new("[other]\nnovalue\n");
        assert_eq!(result.unwrap_err().line(), 2);
    }

    #[test]
    fn test_value_type_errors() {
        let (_, result) = bind_new("[mysql]\nport = abc\n");
        assert_eq!(
            result,
            Err(ParseError::ValueType {
                line: 2,
                key: "port".into(),
                expected: ValueKind::Integer,
                value: "abc".into(),
            })
        );

        let (_, result) = bind_new("[redis]\n\ntest = maybe\n");
        assert!(matches!(
            result,
            Err(ParseError::ValueType {
                line: 3,
                expected: ValueKind::Boolean,
                ..
            })
        ));
    }

    #[test]
    fn test_fail_fast_keeps_earlier_assignments() {
        let (config, result) = bind_new("[mysql]\naddress = a\nport = x\nusername = u\n");
        assert_eq!(result.unwrap_err().line(), 3);
        assert_eq!(config.mysql.address, "a");
        assert_eq!(config.mysql.username, "");
    }

    #[derive(Default)]
    struct Metrics {
        ratio: f64,
    }

    impl IniSection for Metrics {
        fn keys(&self) -> &'static [&'static str] {
            &["ratio"]
        }

        fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
            (index == 0).then_some(FieldMut::Unsupported("f64"))
        }
    }

    #[derive(Default)]
    struct Doc {
        metrics: Metrics,
    }

    impl IniDocument for Doc {
        fn sections(&self) -> &'static [&'static str] {
            &["metrics"]
        }

        fn section_mut(&mut self, index: usize) -> Option<&mut dyn IniSection> {
            match index {
                0 => Some(&mut self.metrics),
                _ => None,
            }
        }
    }

    #[test]
    fn test_unsupported_field_kind() {
        let mut doc = Doc::default();
        let result = bind("[metrics]\nratio = 0.5\n", &mut doc);
        assert_eq!(
            result,
            Err(ParseError::UnsupportedFieldKind {
                line: 2,
                key: "ratio".into(),
                type_name: "f64",
            })
        );
        assert_eq!(doc.metrics.ratio, 0.0);
    }
}
