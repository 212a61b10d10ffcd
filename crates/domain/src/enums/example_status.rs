use core::str::FromStr;

use serde::{Deserialize, Serialize};

use scaffold_core::DomainError;

/// Example lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleStatus {
    Active,
    Inactive,
    Pending,
}

impl ExampleStatus {
    pub const ALL: [ExampleStatus; 3] = [Self::Active, Self::Inactive, Self::Pending];

    /// Stored / serialized value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    fn constant_name(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Pending => "PENDING",
        }
    }
}

impl core::fmt::Display for ExampleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ExampleStatus.{}", self.constant_name())
    }
}

impl FromStr for ExampleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown example status: {s:?}")))
    }
}
