//! Per-connection settings bag with a defensive-copy contract.

use std::collections::HashMap;

use crate::pragma::Pragma;
use crate::{ConfigError, Result};

/// The frozen record of the settings a connection was opened with.
///
/// A `Configuration` owns a private copy of the caller's bag: it never
/// aliases the original map and never hands out its internal storage, so a
/// caller cannot mutate driver state after construction and the driver never
/// observes later edits to the caller's own map. There are no mutating
/// operations; every read returns a fresh copy.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    settings: HashMap<String, String>,
}

impl Configuration {
    /// Wrap a raw settings bag, copying every entry eagerly.
    ///
    /// Unknown keys and values outside a constrained pragma's choice set are
    /// accepted and stored as-is for forward compatibility, but logged so
    /// typos are not silently lost. Use [`Configuration::strict`] to reject
    /// them instead.
    pub fn new(raw: &HashMap<String, String>) -> Self {
        for (key, value) in raw {
            match Pragma::from_name(key) {
                None => {
                    tracing::warn!("Unknown pragma parameter '{}', passing through", key);
                }
                Some(pragma) if !value_in_choices(pragma, value) => {
                    tracing::warn!(
                        "Value '{}' for pragma '{}' is outside its allowed choices, passing through",
                        value,
                        key
                    );
                }
                Some(_) => {}
            }
        }

        Self {
            settings: raw.clone(),
        }
    }

    /// Wrap a raw settings bag, rejecting unknown keys and out-of-choice
    /// values.
    pub fn strict(raw: &HashMap<String, String>) -> Result<Self> {
        for (key, value) in raw {
            let pragma =
                Pragma::from_name(key).ok_or_else(|| ConfigError::UnknownPragma(key.clone()))?;
            if !value_in_choices(pragma, value) {
                return Err(ConfigError::InvalidPragmaValue {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            settings: raw.clone(),
        })
    }

    /// Value for a registry entry, if the bag sets it under its canonical key.
    pub fn get(&self, pragma: Pragma) -> Option<&str> {
        self.settings.get(pragma.name()).map(String::as_str)
    }

    /// Fresh, independent copy of the settings map.
    ///
    /// Two calls never share storage; mutating one result affects neither
    /// this `Configuration` nor any other copy.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.settings.clone()
    }

    /// Settings export for the transport layer. Same contract as
    /// [`Configuration::snapshot`]: always a fresh copy.
    pub fn to_properties(&self) -> HashMap<String, String> {
        self.settings.clone()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl From<HashMap<String, String>> for Configuration {
    /// Ownership transfer still isolates: the caller gave the map up, so no
    /// aliasing is possible.
    fn from(settings: HashMap<String, String>) -> Self {
        Self { settings }
    }
}

/// Choice membership, case-insensitive the way the engine treats pragma
/// values. An unconstrained option accepts anything.
fn value_in_choices(pragma: Pragma, value: &str) -> bool {
    let choices = pragma.choices();
    choices.is_empty() || choices.iter().any(|c| c.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_tolerant_accepts_unknown_keys() {
        let raw = bag(&[("unknown_param", "value"), ("busy_timeout", "5000")]);
        let cfg = Configuration::new(&raw);
        assert_eq!(cfg.len(), 2);
        assert_eq!(cfg.snapshot(), raw);
    }

    #[test]
    fn test_strict_rejects_unknown_key() {
        let raw = bag(&[("bussy_timeout", "5000")]);
        match Configuration::strict(&raw) {
            Err(ConfigError::UnknownPragma(key)) => assert_eq!(key, "bussy_timeout"),
            other => panic!("expected UnknownPragma, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_out_of_choice_value() {
        let raw = bag(&[("synchronous", "MAYBE")]);
        match Configuration::strict(&raw) {
            Err(ConfigError::InvalidPragmaValue { key, value }) => {
                assert_eq!(key, "synchronous");
                assert_eq!(value, "MAYBE");
            }
            other => panic!("expected InvalidPragmaValue, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_choice_check_case_insensitive() {
        let raw = bag(&[("journal_mode", "wal"), ("synchronous", "normal")]);
        let cfg = Configuration::strict(&raw).unwrap();
        assert_eq!(cfg.get(Pragma::JournalMode), Some("wal"));
    }

    #[test]
    fn test_strict_accepts_freeform_option() {
        // busy_timeout has no choice set; any value passes the strict path.
        let raw = bag(&[("busy_timeout", "not-a-number")]);
        assert!(Configuration::strict(&raw).is_ok());
    }

    #[test]
    fn test_typed_accessor_uses_canonical_key() {
        let raw = bag(&[("busy_timeout", "5000")]);
        let cfg = Configuration::new(&raw);
        assert_eq!(cfg.get(Pragma::BusyTimeout), Some("5000"));
        assert_eq!(cfg.get(Pragma::JournalMode), None);
    }

    #[test]
    fn test_from_owned_map() {
        let cfg = Configuration::from(bag(&[("wal", "true")]));
        assert_eq!(cfg.get(Pragma::Wal), Some("true"));
        assert!(!cfg.is_empty());
    }
}
