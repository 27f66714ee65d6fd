use serde::{Deserialize, Serialize};

use innkeep_core::Entity;

/// Aadhar card number: the opaque numeric key a user is registered under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AadharNumber(pub u64);

impl AadharNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AadharNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for AadharNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A registered user. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub aadhar_card_no: AadharNumber,
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(aadhar_card_no: u64, name: impl Into<String>, age: u32) -> Self {
        Self {
            aadhar_card_no: AadharNumber(aadhar_card_no),
            name: name.into(),
            age,
        }
    }
}

impl Entity for User {
    type Id = AadharNumber;

    fn id(&self) -> &Self::Id {
        &self.aadhar_card_no
    }
}
