//! Closed catalog of engine-level PRAGMA options and its introspection surface.

use serde::Serialize;

/// Metadata describing one configurable driver option, independent of any
/// particular connection's chosen value.
///
/// This is the record handed to generic driver-property discovery tooling
/// (connection wizards, property editors). `choices` is the closed set of
/// legal values; an empty slice means the option is freeform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub choices: &'static [&'static str],
    /// Always `false`: no driver option is mandatory.
    pub required: bool,
}

/// Declares a closed pragma catalog as an enum.
///
/// Every accessor (`name`, `description`, `choices`, `from_name`,
/// `descriptors`, `ALL`) is generated from the one declaration, so adding an
/// option is a single-point change and the compiler enforces exhaustiveness
/// wherever the enum is matched. Runtime registration is impossible by
/// construction.
///
/// Canonical names must be lowercase and unique; both are checked at compile
/// time.
#[macro_export]
macro_rules! pragmas {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    name: $key:literal,
                    description: $desc:literal,
                    choices: [$($choice:literal),* $(,)?] $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Every declared option, in declaration order.
            $vis const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Canonical key a caller must use in the raw settings bag.
            $vis const fn name(&self) -> &'static str {
                match *self { $( $name::$variant => $key, )* }
            }

            /// Human-readable explanation of the option.
            $vis const fn description(&self) -> &'static str {
                match *self { $( $name::$variant => $desc, )* }
            }

            /// Closed set of legal values; empty means unconstrained.
            $vis const fn choices(&self) -> &'static [&'static str] {
                match *self { $( $name::$variant => &[ $( $choice, )* ], )* }
            }

            /// Case-insensitive lookup by canonical key.
            $vis fn from_name(key: &str) -> ::core::option::Option<$name> {
                match key.to_lowercase().as_str() {
                    $( $key => ::core::option::Option::Some($name::$variant), )*
                    _ => ::core::option::Option::None,
                }
            }

            /// One descriptor per declared option, in declaration order.
            /// No option is ever required.
            $vis fn descriptors() -> ::std::vec::Vec<$crate::pragma::PropertyInfo> {
                $name::ALL
                    .iter()
                    .map(|p| $crate::pragma::PropertyInfo {
                        name: p.name(),
                        description: p.description(),
                        choices: p.choices(),
                        required: false,
                    })
                    .collect()
            }
        }

        const _: () = $crate::pragma::assert_canonical_names(&[ $( $key, )* ]);
    };
}

/// Rejects duplicate or non-lowercase canonical names at compile time.
/// Registry defects are build-time defects, never runtime conditions.
#[doc(hidden)]
pub const fn assert_canonical_names(names: &[&str]) {
    let mut i = 0;
    while i < names.len() {
        let bytes = names[i].as_bytes();
        assert!(!bytes.is_empty(), "pragma name must not be empty");
        let mut k = 0;
        while k < bytes.len() {
            assert!(
                !bytes[k].is_ascii_uppercase(),
                "pragma name must be a lowercase canonical key"
            );
            k += 1;
        }
        let mut j = i + 1;
        while j < names.len() {
            assert!(
                !str_eq(names[i], names[j]),
                "duplicate pragma name in registry"
            );
            j += 1;
        }
        i += 1;
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

pragmas! {
    /// Engine-level options recognized by this driver build.
    ///
    /// The set is fixed at compile time and versioned with the driver; it is
    /// the whitelist used both for introspection and for strict settings
    /// validation.
    pub enum Pragma {
        /// `PRAGMA journal_mode` of the connection.
        JournalMode {
            name: "journal_mode",
            description: "Journal mode used by the connection",
            choices: ["DELETE", "WAL", "MEMORY", "TRUNCATE", "PERSIST", "OFF"],
        },
        /// `PRAGMA synchronous`: how aggressively writes are flushed.
        Synchronous {
            name: "synchronous",
            description: "How aggressively the engine flushes writes to disk",
            choices: ["OFF", "NORMAL", "FULL", "EXTRA"],
        },
        /// `PRAGMA busy_timeout` in milliseconds; freeform non-negative integer.
        BusyTimeout {
            name: "busy_timeout",
            description: "Milliseconds to wait on a locked database before failing",
            choices: [],
        },
        /// Legacy toggle: maps to journal_mode WAL (on) or DELETE (off).
        Wal {
            name: "wal",
            description: "Enable or disable write-ahead logging",
            choices: ["true", "false", "1", "0"],
        },
    }
}

/// Descriptor export for the generic driver-property discovery protocol.
///
/// Deterministic and side-effect-free; safe for concurrent callers, since the
/// catalog is fixed at compile time.
pub fn driver_property_info() -> Vec<PropertyInfo> {
    Pragma::descriptors()
}
