use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// Survey instrument a submission was collected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Household,
    Business,
    Building,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Household => "household",
            Self::Business => "business",
            Self::Building => "building",
        }
    }

    /// Kind of the base record this form produces.
    pub fn base_entity(self) -> EntityKind {
        match self {
            Self::Household => EntityKind::Household,
            Self::Business => EntityKind::Business,
            Self::Building => EntityKind::Building,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "household" => Ok(Self::Household),
            "business" => Ok(Self::Business),
            "building" => Ok(Self::Building),
            other => Err(format!("unknown form kind: {other}")),
        }
    }
}
