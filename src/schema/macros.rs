/// Declares a struct whose fields bind to INI keys.
///
/// Each field carries its key after `=>`. Every field type must implement
/// [`IniField`](crate::IniField).
///
/// ```
/// ini_bind::ini_section! {
///     #[derive(Debug, Default)]
///     pub struct Redis {
///         pub host: String => "host",
///         pub port: u16 => "port",
///         pub test: bool => "test",
///     }
/// }
/// ```
#[macro_export]
macro_rules! ini_section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::IniSection for $name {
            fn keys(&self) -> &'static [&'static str] {
                &[$($key),*]
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn field_mut(&mut self, index: usize) -> ::core::option::Option<$crate::FieldMut<'_>> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return ::core::option::Option::Some(
                            $crate::IniField::as_field_mut(&mut self.$field),
                        );
                    }
                    position += 1;
                )*
                ::core::option::Option::None
            }
        }
    };
}

/// Declares a struct whose fields are INI sections.
///
/// Each field carries its section name after `=>`. Every field type must
/// implement [`IniSection`](crate::IniSection), usually via
/// [`ini_section!`](crate::ini_section).
///
/// ```
/// ini_bind::ini_section! {
///     #[derive(Debug, Default)]
///     pub struct Mysql {
///         pub address: String => "address",
///         pub port: i32 => "port",
///     }
/// }
///
/// ini_bind::ini_document! {
///     #[derive(Debug, Default)]
///     pub struct Settings {
///         pub mysql: Mysql => "mysql",
///     }
/// }
///
/// let mut settings = Settings::default();
/// ini_bind::bind_str("[mysql]\nport = 3306\n", &mut settings)?;
/// assert_eq!(settings.mysql.port, 3306);
/// # Ok::<(), ini_bind::Error>(())
/// ```
#[macro_export]
macro_rules! ini_document {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $section:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::IniDocument for $name {
            fn sections(&self) -> &'static [&'static str] {
                &[$($section),*]
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn section_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn $crate::IniSection> {
                let mut position = 0usize;
                $(
                    if index == position {
                        let section: &mut dyn $crate::IniSection = &mut self.$field;
                        return ::core::option::Option::Some(section);
                    }
                    position += 1;
                )*
                ::core::option::Option::None
            }
        }
    };
}
