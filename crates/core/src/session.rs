//! The editor session: a working copy of the catalog plus the snapshot it
//! was loaded from.
//!
//! All edits go through the validator first. A rejected edit or an
//! out-of-range index leaves the session exactly as it was.

use crate::catalog::{Company, Model};
use crate::changelog::{detect_changes, ChangeReport};
use crate::error::CoreError;
use crate::options::FieldOptions;
use crate::transfer::{build_csv, parse_dataset, to_pretty_json};
use crate::validation::{validate_company, validate_model, CompanyForm, ModelForm};

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    working: Vec<Company>,
    snapshot: Option<Vec<Company>>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- loading ------------------------------------------------------------

    /// Replace the working copy and take a fresh snapshot of it.
    pub fn load(&mut self, companies: Vec<Company>) {
        let model_count: usize = companies.iter().map(|c| c.models.len()).sum();
        tracing::info!(companies = companies.len(), models = model_count, "Dataset loaded");
        self.snapshot = Some(companies.clone());
        self.working = companies;
    }

    /// Drop all data. The session then asks for a manual import.
    pub fn reset(&mut self) {
        tracing::info!("Session reset, import required");
        self.working.clear();
        self.snapshot = None;
    }

    /// Parse `text` as a dataset and load it. On error nothing changes.
    pub fn import_text(&mut self, text: &str) -> Result<usize, CoreError> {
        let companies = parse_dataset(text).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected dataset import");
        })?;
        let count = companies.len();
        self.load(companies);
        Ok(count)
    }

    pub fn is_import_required(&self) -> bool {
        self.working.is_empty() && self.snapshot.as_ref().map_or(true, Vec::is_empty)
    }

    // -- reads --------------------------------------------------------------

    pub fn companies(&self) -> &[Company] {
        &self.working
    }

    pub fn company(&self, index: usize) -> Result<&Company, CoreError> {
        self.working.get(index).ok_or(CoreError::NotFound {
            entity: "company",
            index,
        })
    }

    pub fn snapshot(&self) -> Option<&[Company]> {
        self.snapshot.as_deref()
    }

    pub fn model(&self, company_index: usize, model_index: usize) -> Result<&Model, CoreError> {
        self.company(company_index)?
            .models
            .get(model_index)
            .ok_or(CoreError::NotFound {
                entity: "model",
                index: model_index,
            })
    }

    /// An edit form prefilled from the stored model.
    pub fn model_form(
        &self,
        company_index: usize,
        model_index: usize,
    ) -> Result<ModelForm, CoreError> {
        let model = self.model(company_index, model_index)?;
        Ok(ModelForm::from_model(model, &self.options()))
    }

    pub fn options(&self) -> FieldOptions {
        FieldOptions::from_companies(&self.working)
    }

    // -- company edits ------------------------------------------------------

    /// Validate and append a new company. Returns its index.
    pub fn add_company(&mut self, form: &CompanyForm) -> Result<usize, CoreError> {
        let company = validate_company(form)?;
        tracing::info!(company = %company.name, "Company added");
        self.working.push(company);
        Ok(self.working.len() - 1)
    }

    /// Replace a company's own fields. Its models and unknown keys are kept.
    pub fn update_company(
        &mut self,
        index: usize,
        form: &CompanyForm,
    ) -> Result<&Company, CoreError> {
        self.company(index)?;
        let updated = validate_company(form)?;

        let company = &mut self.working[index];
        company.name = updated.name;
        company.icon_path = updated.icon_path;
        company.proprietary_license_desc = updated.proprietary_license_desc;
        company.proprietary_reuse_specificities = updated.proprietary_reuse_specificities;
        tracing::info!(index, company = %company.name, "Company updated");
        Ok(company)
    }

    pub fn delete_company(&mut self, index: usize) -> Result<Company, CoreError> {
        self.company(index)?;
        let removed = self.working.remove(index);
        tracing::info!(index, company = %removed.name, "Company deleted");
        Ok(removed)
    }

    // -- model edits --------------------------------------------------------

    /// Validate and append a model to a company. Returns the model's index.
    pub fn add_model(&mut self, company_index: usize, form: &ModelForm) -> Result<usize, CoreError> {
        self.company(company_index)?;
        let model = validate_model(form)?;

        let company = &mut self.working[company_index];
        tracing::info!(company = %company.name, model = model.identity_key(), "Model added");
        company.models.push(model);
        Ok(company.models.len() - 1)
    }

    /// Replace a model with the validated form.
    ///
    /// Keys the form does not cover are carried over from the stored model.
    pub fn update_model(
        &mut self,
        company_index: usize,
        model_index: usize,
        form: &ModelForm,
    ) -> Result<&Model, CoreError> {
        self.model(company_index, model_index)?;
        let mut updated = validate_model(form)?;

        let company = &mut self.working[company_index];
        let slot = &mut company.models[model_index];
        updated.inherit_extra(slot);
        *slot = updated;
        tracing::info!(
            company = %company.name,
            model = slot.identity_key(),
            "Model updated"
        );
        Ok(slot)
    }

    pub fn delete_model(
        &mut self,
        company_index: usize,
        model_index: usize,
    ) -> Result<Model, CoreError> {
        self.model(company_index, model_index)?;
        let company = &mut self.working[company_index];
        let removed = company.models.remove(model_index);
        tracing::info!(company = %company.name, model = removed.identity_key(), "Model deleted");
        Ok(removed)
    }

    // -- reporting ----------------------------------------------------------

    /// Changes of the working copy relative to the loaded snapshot.
    pub fn changelog(&self) -> ChangeReport {
        detect_changes(self.snapshot().unwrap_or(&[]), &self.working)
    }

    pub fn export_json(&self) -> Result<String, CoreError> {
        to_pretty_json(&self.working)
    }

    pub fn export_csv(&self) -> Result<String, CoreError> {
        build_csv(&self.working)
    }
}
