//! Form evaluator: pure logic, no dataset access.
//!
//! Every rule runs independently and all violations are collected, so the
//! caller can show the operator the whole list at once. A record is only
//! returned when no rule fired.

use std::sync::LazyLock;

use regex::Regex;

use super::forms::{CompanyForm, ModelForm, CUSTOM_OPTION};
use super::rules::*;
use crate::catalog::{Architecture, Company, Endpoint, Model, ParamCount, SizeClass};

static RELEASE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{4}$").expect("valid regex"));

/// Validate a company form.
///
/// The returned company always has an empty model list; when editing, the
/// caller re-attaches the existing models.
pub fn validate_company(form: &CompanyForm) -> Result<Company, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = non_empty(&form.name);
    if name.is_none() {
        errors.push("name", MSG_COMPANY_NAME_REQUIRED);
    }

    let mut company = Company::named(name.unwrap_or_default());
    company.icon_path = non_empty(&form.icon_path);
    company.proprietary_license_desc = non_empty(&form.proprietary_license_desc);
    company.proprietary_reuse_specificities = non_empty(&form.proprietary_reuse_specificities);

    errors.into_result(company)
}

/// Validate a model form.
pub fn validate_model(form: &ModelForm) -> Result<Model, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut model = Model::default();

    model.simple_name = non_empty(&form.simple_name);
    if model.simple_name.is_none() {
        errors.push("simple_name", MSG_SIMPLE_NAME_REQUIRED);
    }

    model.license = non_empty(resolve_choice(&form.license, &form.license_custom));
    if model.license.is_none() {
        errors.push("license", MSG_LICENSE_REQUIRED);
    }

    model.status = non_empty(resolve_choice(&form.status, &form.status_custom));
    model.id = non_empty(&form.id);

    if let Some(date) = non_empty(&form.release_date) {
        if RELEASE_DATE_RE.is_match(&date) {
            model.release_date = Some(date);
        } else {
            errors.push("release_date", MSG_RELEASE_DATE_FORMAT);
        }
    }

    if let Some(raw) = non_empty(&form.params) {
        match parse_params(&raw) {
            Some(params) => model.params = Some(params),
            None => errors.push("params", MSG_PARAMS_INVALID),
        }
    }

    if let Some(raw) = non_empty(&form.active_params) {
        match parse_positive(&raw) {
            Some(count) => model.active_params = Some(count),
            None => errors.push("active_params", MSG_ACTIVE_PARAMS_INVALID),
        }
    }

    if let Some(raw) = non_empty(&form.arch) {
        match raw.parse::<Architecture>() {
            Ok(arch) => model.arch = Some(arch.as_str().to_string()),
            Err(()) => errors.push("arch", MSG_ARCH_INVALID),
        }
    }

    if let Some(raw) = non_empty(&form.url) {
        if url::Url::parse(&raw).is_ok() {
            model.url = Some(raw);
        } else {
            errors.push("url", MSG_URL_INVALID);
        }
    }

    model.desc = non_empty(&form.desc);
    model.size_desc = non_empty(&form.size_desc);
    model.fyi = non_empty(&form.fyi);
    model.reasoning = form.reasoning.then_some(true);
    model.new = form.new.then_some(true);

    let api_type = non_empty(resolve_choice(
        &form.endpoint_api_type,
        &form.endpoint_api_type_custom,
    ));
    let api_model_id = non_empty(&form.endpoint_api_model_id);
    match (api_type, api_model_id) {
        (None, None) => {}
        (Some(api_type), Some(api_model_id)) => {
            model.endpoint = Some(Endpoint::new(
                api_type,
                api_model_id,
                non_empty(&form.endpoint_api_base),
            ));
        }
        _ => errors.push("endpoint", MSG_ENDPOINT_INCOMPLETE),
    }

    errors.into_result(model)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trimmed value, or `None` when nothing is left.
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn resolve_choice<'a>(selected: &'a str, custom: &'a str) -> &'a str {
    if selected == CUSTOM_OPTION {
        custom
    } else {
        selected
    }
}

fn parse_params(raw: &str) -> Option<ParamCount> {
    if let Ok(size) = raw.parse::<SizeClass>() {
        return Some(ParamCount::Size(size));
    }
    parse_positive(raw).map(ParamCount::Billions)
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
