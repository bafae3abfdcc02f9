use crate::error::CoreResult;
use crate::persistence::slot::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UnknownIdPolicy {
    #[default]
    REJECT,
    IGNORE,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    pub slot_key: String,
    pub unknown_id_policy: UnknownIdPolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            unknown_id_policy: UnknownIdPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssessmentConfig {
    pub data_dir: PathBuf,
    pub slot_key: String,
    pub unknown_id_policy: UnknownIdPolicy,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".assessment"),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            unknown_id_policy: UnknownIdPolicy::default(),
        }
    }
}

impl AssessmentConfig {
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            slot_key: self.slot_key.clone(),
            unknown_id_policy: self.unknown_id_policy,
        }
    }
}
