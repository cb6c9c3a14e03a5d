//! Macro for implementing Display and FromStr for domain enums
//!
//! Handles case-insensitive parsing and a consistent lowercase string
//! representation, so configuration values and log fields agree.
//!
//! # Example
//!
//! ```rust
//! use agendar_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReminderChannel {
//!     Whatsapp,
//!     Email,
//! }
//!
//! impl_domain_enum_conversions!(ReminderChannel {
//!     Whatsapp => "whatsapp",
//!     Email => "email",
//! });
//!
//! assert_eq!("EMAIL".parse::<ReminderChannel>().unwrap(), ReminderChannel::Email);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPanel {
        Form,
        Confirmation,
    }

    impl_domain_enum_conversions!(TestPanel {
        Form => "form",
        Confirmation => "confirmation",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestPanel::Form.to_string(), "form");
        assert_eq!(TestPanel::Confirmation.to_string(), "confirmation");
    }

    #[test]
    fn test_fromstr_mixed_case_and_whitespace() {
        assert_eq!(TestPanel::from_str("Form").unwrap(), TestPanel::Form);
        assert_eq!(TestPanel::from_str(" CONFIRMATION ").unwrap(), TestPanel::Confirmation);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestPanel::from_str("summary");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestPanel: summary"));
    }

    mod with_result_alias_in_scope {
        use std::str::FromStr;

        #[allow(dead_code)]
        type Result<T> = std::result::Result<T, String>;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Channel {
            Whatsapp,
            Email,
        }

        impl_domain_enum_conversions!(Channel {
            Whatsapp => "whatsapp",
            Email => "email",
        });

        #[test]
        fn expands_next_to_single_parameter_result_alias() {
            assert_eq!(Channel::from_str("EMAIL").unwrap(), Channel::Email);
            assert_eq!(Channel::Whatsapp.to_string(), "whatsapp");
        }
    }

    #[test]
    fn test_roundtrip() {
        for panel in [TestPanel::Form, TestPanel::Confirmation] {
            assert_eq!(TestPanel::from_str(&panel.to_string()).unwrap(), panel);
        }
    }
}
