//! Raw form payloads, exactly as an editor front end submits them.

use serde::{Deserialize, Serialize};

use crate::catalog::{Company, Model};
use crate::options::FieldOptions;

/// Dropdown value meaning "use the free-form companion field instead".
pub const CUSTOM_OPTION: &str = "__custom__";

/// Company form. Every field is an unvalidated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyForm {
    pub name: String,
    pub icon_path: String,
    pub proprietary_license_desc: String,
    pub proprietary_reuse_specificities: String,
}

impl CompanyForm {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            icon_path: company.icon_path.clone().unwrap_or_default(),
            proprietary_license_desc: company.proprietary_license_desc.clone().unwrap_or_default(),
            proprietary_reuse_specificities: company
                .proprietary_reuse_specificities
                .clone()
                .unwrap_or_default(),
        }
    }
}

/// Model form.
///
/// `license`, `status` and `endpoint_api_type` are dropdowns; selecting
/// [`CUSTOM_OPTION`] makes the matching `*_custom` field authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelForm {
    pub id: String,
    pub simple_name: String,
    pub license: String,
    pub license_custom: String,
    pub status: String,
    pub status_custom: String,
    pub release_date: String,
    pub params: String,
    pub active_params: String,
    pub arch: String,
    pub url: String,
    pub desc: String,
    pub size_desc: String,
    pub fyi: String,
    pub reasoning: bool,
    pub new: bool,
    pub endpoint_api_type: String,
    pub endpoint_api_type_custom: String,
    pub endpoint_api_model_id: String,
    pub endpoint_api_base: String,
}

impl ModelForm {
    /// Prefill a form from an existing model.
    ///
    /// Dropdown values that are not among `options` go through the custom
    /// field, the way an edit dialog would present them.
    pub fn from_model(model: &Model, options: &FieldOptions) -> Self {
        let (license, license_custom) = choice(model.license.as_deref(), &options.licenses);
        let (status, status_custom) = choice(model.status.as_deref(), &options.statuses);
        let endpoint = model.endpoint.as_ref();
        let (endpoint_api_type, endpoint_api_type_custom) =
            choice(endpoint.map(|e| e.api_type.as_str()), &options.api_types);

        Self {
            id: model.id.clone().unwrap_or_default(),
            simple_name: model.simple_name.clone().unwrap_or_default(),
            license,
            license_custom,
            status,
            status_custom,
            release_date: model.release_date.clone().unwrap_or_default(),
            params: model.params.as_ref().map(ToString::to_string).unwrap_or_default(),
            active_params: model.active_params.map(|p| p.to_string()).unwrap_or_default(),
            arch: model.arch.clone().unwrap_or_default(),
            url: model.url.clone().unwrap_or_default(),
            desc: model.desc.clone().unwrap_or_default(),
            size_desc: model.size_desc.clone().unwrap_or_default(),
            fyi: model.fyi.clone().unwrap_or_default(),
            reasoning: model.is_reasoning(),
            new: model.is_new(),
            endpoint_api_type,
            endpoint_api_type_custom,
            endpoint_api_model_id: endpoint.map(|e| e.api_model_id.clone()).unwrap_or_default(),
            endpoint_api_base: endpoint
                .and_then(|e| e.api_base.clone())
                .unwrap_or_default(),
        }
    }
}

/// Split a stored value into `(dropdown, custom)` form fields.
fn choice(value: Option<&str>, known: &[String]) -> (String, String) {
    match value {
        None | Some("") => (String::new(), String::new()),
        Some(v) if known.iter().any(|k| k == v) => (v.to_string(), String::new()),
        Some(v) => (CUSTOM_OPTION.to_string(), v.to_string()),
    }
}
