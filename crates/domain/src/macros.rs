//! Macro for implementing wire-code conversions on closed enums
//!
//! Bucket codes, cell ids, event tags and status categories all travel as
//! fixed strings (`"Ø"`, `"HRD_ONLINE"`, `"OPEN"`, `"won"`). This macro keeps
//! the variant ↔ string table in one place and derives Display, FromStr and
//! serde support from it.
//!
//! # Example
//!
//! ```rust
//! use orgboard_domain::impl_wire_code_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Rail {
//!     Online,
//!     Offline,
//! }
//!
//! impl_wire_code_conversions!(Rail {
//!     Online => "ONLINE",
//!     Offline => "OFFLINE",
//! });
//!
//! assert_eq!(Rail::Online.to_string(), "ONLINE");
//! assert_eq!("offline".parse::<Rail>().unwrap(), Rail::Offline);
//! ```

/// Implements Display, FromStr, Serialize and Deserialize for wire-code enums
///
/// This macro generates:
/// - `as_str()`: the canonical wire string
/// - Display trait: writes the canonical wire string
/// - FromStr trait: ASCII case-insensitive parse of the wire string
/// - serde Serialize/Deserialize through the same table
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
#[macro_export]
macro_rules! impl_wire_code_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire string for this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl $crate::__serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err($crate::__serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    // Test enum for macro validation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestTier {
        Empty,
        Small,
        Large,
    }

    impl_wire_code_conversions!(TestTier {
        Empty => "Ø",
        Small => "P5",
        Large => "S0",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestTier::Empty.to_string(), "Ø");
        assert_eq!(TestTier::Small.to_string(), "P5");
        assert_eq!(TestTier::Large.as_str(), "S0");
    }

    #[test]
    fn test_fromstr_case_insensitive() {
        assert_eq!(TestTier::from_str("p5").unwrap(), TestTier::Small);
        assert_eq!(TestTier::from_str(" S0 ").unwrap(), TestTier::Large);
        assert_eq!(TestTier::from_str("Ø").unwrap(), TestTier::Empty);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestTier::from_str("P9");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestTier: P9"));
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&vec![TestTier::Empty, TestTier::Large]).unwrap();
        assert_eq!(json, r#"["Ø","S0"]"#);

        let parsed: Vec<TestTier> = serde_json::from_str(r#"["p5","Ø"]"#).unwrap();
        assert_eq!(parsed, vec![TestTier::Small, TestTier::Empty]);

        assert!(serde_json::from_str::<TestTier>(r#""P9""#).is_err());
    }
}
