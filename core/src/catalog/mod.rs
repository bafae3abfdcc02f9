pub mod model;

mod cis;
mod nist;

use model::{ControlStatus, Framework, ImplementationGroup, SecurityControl};
use std::collections::BTreeMap;
use std::sync::Arc;

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    nist_mapping: &'static [&'static str],
    level: ImplementationGroup,
    category: &'static str,
}

impl CatalogEntry {
    fn to_control(&self, framework: Framework) -> SecurityControl {
        SecurityControl {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            nist_mapping: self.nist_mapping.iter().map(|m| m.to_string()).collect(),
            implementation_level: Some(self.level),
            category: self.category.to_string(),
            framework: Some(framework),
            status: ControlStatus::Planned,
            score: Some(0u8.into()),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    controls: Arc<[SecurityControl]>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let controls: Vec<SecurityControl> = cis::CIS_CONTROLS
            .iter()
            .map(|entry| entry.to_control(Framework::CIS))
            .chain(
                nist::NIST_CONTROLS
                    .iter()
                    .map(|entry| entry.to_control(Framework::NIST)),
            )
            .collect();
        Self::from_controls(controls)
    }

    pub fn from_controls(controls: Vec<SecurityControl>) -> Self {
        Self {
            controls: controls.into(),
        }
    }

    pub fn defaults(&self) -> Vec<SecurityControl> {
        self.controls.to_vec()
    }

    pub fn controls(&self) -> &[SecurityControl] {
        &self.controls
    }

    pub fn get(&self, id: &str) -> Option<&SecurityControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn frameworks(&self) -> BTreeMap<Framework, usize> {
        let mut counts = BTreeMap::new();
        for framework in self.controls.iter().filter_map(|c| c.framework) {
            *counts.entry(framework).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
