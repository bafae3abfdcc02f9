use crate::catalog::model::{ControlStatus, Framework, SecurityControl, MAX_SCORE};
use crate::catalog::Catalog;
use crate::config::{StoreSettings, UnknownIdPolicy};
use crate::error::{CoreError, CoreResult};
use crate::metrics::{self, CategoryProgress, FrameworkCoverage, GroupProgress, StatusShare};
use crate::persistence::codec;
use crate::persistence::slot::SlotStore;
use crate::persistence::transfer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::Date;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MutationOutcome {
    APPLIED,
    IGNORED,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadOutcome {
    LOADED { count: usize },
    NOTHING_SAVED,
}

pub struct AssessmentStore<S: SlotStore> {
    catalog: Catalog,
    storage: S,
    settings: StoreSettings,
    controls: Vec<SecurityControl>,
}

impl<S: SlotStore> AssessmentStore<S> {
    pub fn open(catalog: Catalog, storage: S, settings: StoreSettings) -> CoreResult<Self> {
        // Only unparseable text is replaced by the catalog. Any other failure
        // leaves the slot as it is and surfaces.
        let controls = match read_saved(&storage, &settings.slot_key) {
            Ok(Some(saved)) => {
                tracing::info!(count = saved.len(), "restored saved assessment");
                saved
            }
            Ok(None) => catalog.defaults(),
            Err(CoreError::Parse(e)) => {
                tracing::warn!(error = %e, "saved assessment is not JSON, starting from catalog");
                catalog.defaults()
            }
            Err(e) => return Err(e),
        };
        Self::with_controls(catalog, storage, settings, controls)
    }

    // Ignores whatever the slot holds and persists the catalog defaults.
    pub fn open_fresh(catalog: Catalog, storage: S, settings: StoreSettings) -> CoreResult<Self> {
        let controls = catalog.defaults();
        tracing::info!(count = controls.len(), "starting from catalog defaults");
        Self::with_controls(catalog, storage, settings, controls)
    }

    fn with_controls(
        catalog: Catalog,
        storage: S,
        settings: StoreSettings,
        controls: Vec<SecurityControl>,
    ) -> CoreResult<Self> {
        let mut store = Self {
            catalog,
            storage,
            settings,
            controls,
        };
        store.save()?;
        Ok(store)
    }

    pub fn controls(&self) -> &[SecurityControl] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&SecurityControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn update_score(&mut self, id: &str, score: u8) -> CoreResult<MutationOutcome> {
        if score > MAX_SCORE {
            return Err(CoreError::InvalidInput(format!(
                "score must be between 0 and {}, got {}",
                MAX_SCORE, score
            )));
        }
        self.mutate(id, |c| c.score = Some(score.into()))
    }

    pub fn update_status(&mut self, id: &str, status: ControlStatus) -> CoreResult<MutationOutcome> {
        self.mutate(id, |c| c.status = status)
    }

    pub fn update_notes(&mut self, id: &str, notes: &str) -> CoreResult<MutationOutcome> {
        let notes = notes.to_string();
        self.mutate(id, move |c| c.notes = Some(notes))
    }

    fn mutate(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut SecurityControl),
    ) -> CoreResult<MutationOutcome> {
        let Some(index) = self.controls.iter().position(|c| c.id == id) else {
            return match self.settings.unknown_id_policy {
                UnknownIdPolicy::REJECT => Err(CoreError::NotFound(id.to_string())),
                UnknownIdPolicy::IGNORE => {
                    tracing::debug!(control_id = id, "mutation ignored, unknown id");
                    Ok(MutationOutcome::IGNORED)
                }
            };
        };
        let mut next = self.controls.clone();
        apply(&mut next[index]);
        self.commit(next)?;
        Ok(MutationOutcome::APPLIED)
    }

    // Persist first; memory only changes once the write succeeded.
    fn commit(&mut self, next: Vec<SecurityControl>) -> CoreResult<()> {
        let text = codec::serialize(&next)?;
        self.storage.write(&self.settings.slot_key, &text)?;
        self.controls = next;
        Ok(())
    }

    pub fn save(&mut self) -> CoreResult<()> {
        let text = codec::serialize(&self.controls)?;
        self.storage.write(&self.settings.slot_key, &text)
    }

    pub fn load(&mut self) -> CoreResult<LoadOutcome> {
        match read_saved(&self.storage, &self.settings.slot_key)? {
            Some(saved) => {
                let count = saved.len();
                self.controls = saved;
                tracing::info!(count, "assessment loaded");
                Ok(LoadOutcome::LOADED { count })
            }
            None => Ok(LoadOutcome::NOTHING_SAVED),
        }
    }

    pub fn reset(&mut self) -> CoreResult<()> {
        self.commit(self.catalog.defaults())?;
        tracing::info!(count = self.controls.len(), "assessment reset to catalog defaults");
        Ok(())
    }

    pub fn import_json(&mut self, text: &str) -> CoreResult<usize> {
        self.replace_with_import(transfer::decode_import(text))
    }

    pub fn import_file(&mut self, path: &Path) -> CoreResult<usize> {
        self.replace_with_import(transfer::read_import(path))
    }

    // A rejected payload leaves memory and storage untouched.
    fn replace_with_import(
        &mut self,
        imported: CoreResult<Vec<SecurityControl>>,
    ) -> CoreResult<usize> {
        let imported = match imported {
            Ok(controls) => controls,
            Err(e) => {
                tracing::warn!(error = %e, "import rejected");
                return Err(e);
            }
        };
        let count = imported.len();
        self.commit(imported)?;
        tracing::info!(count, "assessment imported");
        Ok(count)
    }

    pub fn export_json(&self) -> CoreResult<String> {
        codec::serialize_pretty(&self.controls)
    }

    pub fn export_to_dir(&self, dir: &Path, date: Date) -> CoreResult<PathBuf> {
        transfer::write_export(dir, &self.controls, date)
    }

    pub fn overall_score(&self) -> f64 {
        metrics::overall_score(&self.controls)
    }

    pub fn framework_score(&self, framework: Framework) -> f64 {
        metrics::framework_score(&self.controls, framework)
    }

    pub fn implementation_group_progress(&self) -> Vec<GroupProgress> {
        metrics::implementation_group_progress(&self.controls)
    }

    pub fn controls_by_status(&self) -> Vec<StatusShare> {
        metrics::status_distribution(&self.controls)
    }

    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        metrics::category_progress(&self.controls)
    }

    pub fn cis_control_progress(&self) -> Vec<CategoryProgress> {
        metrics::cis_control_progress(&self.controls)
    }

    pub fn framework_coverage(&self) -> Vec<FrameworkCoverage> {
        metrics::framework_coverage(&self.controls)
    }
}

fn read_saved<S: SlotStore>(storage: &S, key: &str) -> CoreResult<Option<Vec<SecurityControl>>> {
    match storage.read(key)? {
        Some(text) => Ok(Some(codec::deserialize(&text)?)),
        None => Ok(None),
    }
}
