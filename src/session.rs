use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::form::{ConfirmPort, FormState};
use crate::io::store::StorePort;
use crate::io::transfer::{self, ExportPayload};
use crate::model::Resume;
use crate::normalize::{self, DocumentKind};

/// Upper bound on the summary length, so the printed page keeps the summary
/// and personal details on one sheet.
pub const SUMMARY_MAX_CHARS: usize = 1000;

/// Orchestrates the editing session over one persistence slot.
///
/// The in-memory [`Resume`] is the single source of truth; the form is a
/// projection derived from it on demand and edits flow back through the
/// session, never by re-reading the rendering. Every mutation writes a full
/// snapshot to the slot — there is no debounce and no partial save.
pub struct Session<S: StorePort> {
    store: S,
    resume: Resume,
}

impl<S: StorePort> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            resume: Resume::default(),
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Cold start: read the slot and rebuild the résumé from it. An absent
    /// slot leaves the template defaults; an unparsable slot is logged and
    /// treated the same way rather than aborting the session.
    #[instrument(level = "info", skip_all)]
    pub fn load(&mut self) -> Result<()> {
        self.resume = Resume::default();
        let Some(text) = self.store.get()? else {
            debug!("persistence slot absent, starting from template defaults");
            return Ok(());
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(document) => {
                let kind = self.restore(&document);
                info!(kind = ?kind, "restored résumé from persistence slot");
            }
            Err(error) => {
                warn!(%error, "stored payload is not valid JSON, keeping defaults");
            }
        }
        Ok(())
    }

    /// Serializes the current résumé and overwrites the slot with it.
    #[instrument(level = "debug", skip_all)]
    pub fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.resume)?;
        self.store.set(&payload)?;
        debug!(bytes = payload.len(), "snapshot written to persistence slot");
        Ok(())
    }

    /// Applies an edit to the résumé and immediately persists the result.
    pub fn edit<F: FnOnce(&mut Resume)>(&mut self, apply: F) -> Result<()> {
        apply(&mut self.resume);
        self.save()
    }

    /// Replaces the summary, truncating at [`SUMMARY_MAX_CHARS`]. Returns
    /// whether truncation happened so the caller can warn the user.
    pub fn set_summary(&mut self, text: &str) -> Result<bool> {
        let truncated = text.chars().count() > SUMMARY_MAX_CHARS;
        self.resume.summary = if truncated {
            text.chars().take(SUMMARY_MAX_CHARS).collect()
        } else {
            text.to_string()
        };
        self.save()?;
        Ok(truncated)
    }

    /// Projects the current résumé into form shape: scalar header fields
    /// plus one instantiated item-group per experience and education entry,
    /// in order.
    pub fn form_state(&self) -> FormState {
        let mut form = FormState::new();
        form.personal = self.resume.personal.clone();
        form.summary = self.resume.summary.clone();
        form.skills = self.resume.skills.clone();
        for entry in &self.resume.experience {
            form.experience.instantiate(entry);
        }
        for entry in &self.resume.education {
            form.education.instantiate(entry);
        }
        form
    }

    /// Absorbs an edited form wholesale: scalar fields are taken directly
    /// and the dynamic lists are extracted group-by-group, then the new
    /// snapshot is persisted.
    pub fn apply_form(&mut self, form: &FormState) -> Result<()> {
        self.resume = Resume {
            personal: form.personal.clone(),
            summary: form.summary.clone(),
            skills: form.skills.clone(),
            experience: form.experience.extract(),
            education: form.education.extract(),
        };
        self.save()
    }

    /// Forces a save and hands back the slot's exact bytes under the dated
    /// export filename.
    #[instrument(level = "info", skip_all)]
    pub fn export(&mut self, today: NaiveDate) -> Result<ExportPayload> {
        self.save()?;
        let payload = self.store.get()?.unwrap_or_default();
        let file_name = transfer::export_file_name(today);
        info!(file = %file_name, bytes = payload.len(), "export prepared");
        Ok(ExportPayload {
            file_name,
            bytes: payload.into_bytes(),
        })
    }

    /// Imports externally supplied bytes. Parse failure surfaces as
    /// [`crate::ResumeError::MalformedDocument`] and leaves both the résumé
    /// and the slot untouched; on success the normalized document becomes
    /// the new durable state immediately.
    #[instrument(level = "info", skip_all)]
    pub fn import(&mut self, bytes: &[u8]) -> Result<DocumentKind> {
        let document = transfer::parse_import(bytes)?;
        let kind = self.restore(&document);
        self.save()?;
        info!(kind = ?kind, "imported document into session");
        Ok(kind)
    }

    /// Wipes the slot and restarts from template defaults. Gated by the
    /// confirmation port; declining changes nothing and reports `false`.
    #[instrument(level = "info", skip_all)]
    pub fn clear(&mut self, confirm: &dyn ConfirmPort) -> Result<bool> {
        if !confirm.confirm("Erase all data? This cannot be undone.") {
            debug!("clear declined");
            return Ok(false);
        }
        self.store.remove()?;
        self.load()?;
        info!("persistence slot cleared");
        Ok(true)
    }

    /// Removes one experience entry after confirmation and persists the
    /// removal immediately, so it is durable without another field edit.
    pub fn remove_experience(&mut self, index: usize, confirm: &dyn ConfirmPort) -> Result<bool> {
        self.remove_entry(index, confirm, |resume| &mut resume.experience)
    }

    /// Removes one education entry after confirmation, same contract as
    /// [`Session::remove_experience`].
    pub fn remove_education(&mut self, index: usize, confirm: &dyn ConfirmPort) -> Result<bool> {
        self.remove_entry(index, confirm, |resume| &mut resume.education)
    }

    fn remove_entry<T, F>(&mut self, index: usize, confirm: &dyn ConfirmPort, list: F) -> Result<bool>
    where
        F: FnOnce(&mut Resume) -> &mut Vec<T>,
    {
        let entries = list(&mut self.resume);
        if index >= entries.len() {
            return Ok(false);
        }
        if !confirm.confirm("Remove this entry?") {
            return Ok(false);
        }
        entries.remove(index);
        self.save()?;
        Ok(true)
    }

    fn restore(&mut self, document: &Value) -> DocumentKind {
        let (resume, kind) = normalize::normalize_with_kind(document);
        self.resume = resume;
        kind
    }
}
