//! Store behavior configuration.
//!
//! Both knobs default to the behavior existing callers rely on: room counts
//! are never consumed by bookings, and a facility update replaces the
//! hotel's facility list with the newly offered entries.

use core::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use innkeep_core::DomainError;

pub const ROOM_ACCOUNTING_ENV: &str = "INNKEEP_ROOM_ACCOUNTING";
pub const FACILITY_UPDATE_ENV: &str = "INNKEEP_FACILITY_UPDATE";

/// How a successful booking affects a hotel's available-room count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomAccounting {
    /// Capacity checks use the configured count; bookings never decrement it.
    #[default]
    Static,
    /// Each booking decrements the hotel's count by the rooms it took.
    Depleting,
}

impl FromStr for RoomAccounting {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "depleting" => Ok(Self::Depleting),
            other => Err(DomainError::validation(format!(
                "room accounting must be one of: static, depleting (got {other:?})"
            ))),
        }
    }
}

/// What a facility update does with the hotel's current facilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityUpdate {
    /// The new-only entries become the hotel's whole facility list.
    #[default]
    Replace,
    /// The new-only entries are appended to the current list.
    Append,
}

impl FromStr for FacilityUpdate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "append" => Ok(Self::Append),
            other => Err(DomainError::validation(format!(
                "facility update must be one of: replace, append (got {other:?})"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub room_accounting: RoomAccounting,
    pub facility_update: FacilityUpdate,
}

impl StoreConfig {
    /// Read overrides from `INNKEEP_ROOM_ACCOUNTING` / `INNKEEP_FACILITY_UPDATE`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with a caller-supplied key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ROOM_ACCOUNTING_ENV) {
            config.room_accounting = raw
                .parse()
                .with_context(|| format!("invalid {ROOM_ACCOUNTING_ENV}"))?;
        }
        if let Some(raw) = lookup(FACILITY_UPDATE_ENV) {
            config.facility_update = raw
                .parse()
                .with_context(|| format!("invalid {FACILITY_UPDATE_ENV}"))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_keep_static_rooms_and_replace_facilities() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.room_accounting, RoomAccounting::Static);
        assert_eq!(config.facility_update, FacilityUpdate::Replace);
    }

    #[test]
    fn overrides_are_case_insensitive() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ROOM_ACCOUNTING_ENV, "Depleting"),
            (FACILITY_UPDATE_ENV, " APPEND "),
        ]))
        .unwrap();
        assert_eq!(config.room_accounting, RoomAccounting::Depleting);
        assert_eq!(config.facility_update, FacilityUpdate::Append);
    }

    #[test]
    fn unknown_value_is_an_error_naming_the_variable() {
        let err = StoreConfig::from_lookup(lookup_from(&[(FACILITY_UPDATE_ENV, "merge")]))
            .unwrap_err();
        assert!(err.to_string().contains(FACILITY_UPDATE_ENV));
    }

    #[test]
    fn deserializes_partial_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "room_accounting": "depleting" }"#).unwrap();
        assert_eq!(config.room_accounting, RoomAccounting::Depleting);
        assert_eq!(config.facility_update, FacilityUpdate::Replace);
    }
}
