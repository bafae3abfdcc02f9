use crate::error::{CoreError, CoreResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Framework {
    CIS,
    NIST,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::CIS, Framework::NIST];

    pub fn as_str(self) -> &'static str {
        match self {
            Framework::CIS => "CIS",
            Framework::NIST => "NIST",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Framework::CIS => "CIS Controls",
            Framework::NIST => "NIST 800-53",
        }
    }
}

impl std::str::FromStr for Framework {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CIS" => Ok(Framework::CIS),
            "NIST" => Ok(Framework::NIST),
            other => Err(CoreError::InvalidInput(format!(
                "unknown framework: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImplementationGroup {
    IG1,
    IG2,
    IG3,
}

impl ImplementationGroup {
    pub const ALL: [ImplementationGroup; 3] = [
        ImplementationGroup::IG1,
        ImplementationGroup::IG2,
        ImplementationGroup::IG3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImplementationGroup::IG1 => "IG1",
            ImplementationGroup::IG2 => "IG2",
            ImplementationGroup::IG3 => "IG3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImplementationGroup::IG1 => "IG1 - Basic",
            ImplementationGroup::IG2 => "IG2 - Foundational",
            ImplementationGroup::IG3 => "IG3 - Organizational",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ControlStatus {
    Implemented,
    InProgress,
    Planned,
    NotImplemented,
}

impl ControlStatus {
    pub const ALL: [ControlStatus; 4] = [
        ControlStatus::Implemented,
        ControlStatus::InProgress,
        ControlStatus::Planned,
        ControlStatus::NotImplemented,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlStatus::Implemented => "implemented",
            ControlStatus::InProgress => "in-progress",
            ControlStatus::Planned => "planned",
            ControlStatus::NotImplemented => "not-implemented",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlStatus::Implemented => "Implemented",
            ControlStatus::InProgress => "In Progress",
            ControlStatus::Planned => "Planned",
            ControlStatus::NotImplemented => "Not Implemented",
        }
    }
}

impl std::str::FromStr for ControlStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        ControlStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown status: {}", s)))
    }
}

pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityControl {
    pub id: String,
    pub name: String,
    pub description: String,
    pub nist_mapping: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_level: Option<ImplementationGroup>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
    pub status: ControlStatus,
    /// `None` means the control was never scored. The number is kept as it
    /// was stored, so imported values outside 0-5 or with a fraction survive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SecurityControl {
    pub fn score_value(&self) -> Option<f64> {
        self.score.as_ref().and_then(Number::as_f64)
    }

    pub fn score_or_zero(&self) -> f64 {
        self.score_value().unwrap_or(0.0)
    }
}

// Stored and imported records are not type-checked field by field: a value
// of the wrong type reads as absent instead of failing the whole list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawControl {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nist_mapping: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub implementation_level: Option<ImplementationGroup>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub framework: Option<Framework>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ControlStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl RawControl {
    pub fn normalize(self) -> SecurityControl {
        SecurityControl {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            nist_mapping: self.nist_mapping.unwrap_or_default(),
            implementation_level: self.implementation_level,
            category: self.category.unwrap_or_default(),
            framework: self.framework,
            status: self.status.unwrap_or(ControlStatus::Planned),
            score: self.score,
            notes: self.notes,
        }
    }
}

pub fn score_label(score: Option<f64>) -> String {
    let Some(score) = score else {
        return "Not Scored".to_string();
    };
    let label = match score {
        s if s == 0.0 => "Not Implemented (0)",
        s if s == 1.0 => "Initial (1)",
        s if s == 2.0 => "Developing (2)",
        s if s == 3.0 => "Defined (3)",
        s if s == 4.0 => "Managed (4)",
        s if s == 5.0 => "Optimized (5)",
        other => return format!("Score: {}", other),
    };
    label.to_string()
}
