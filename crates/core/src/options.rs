//! Value sets offered by the editor's dropdowns.
//!
//! Licenses, statuses and API types are open sets discovered from the loaded
//! data; the validator never restricts input to them. Architectures and size
//! classes are closed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Architecture, Company, Model, SizeClass};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    pub licenses: Vec<String>,
    pub statuses: Vec<String>,
    pub api_types: Vec<String>,
    pub architectures: Vec<String>,
    pub size_classes: Vec<String>,
}

impl FieldOptions {
    pub fn from_companies(companies: &[Company]) -> Self {
        Self {
            licenses: existing_licenses(companies),
            statuses: existing_statuses(companies),
            api_types: existing_api_types(companies),
            architectures: Architecture::ALL
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
            size_classes: SizeClass::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

pub fn existing_licenses(companies: &[Company]) -> Vec<String> {
    distinct_values(companies, |m| m.license.as_deref())
}

pub fn existing_statuses(companies: &[Company]) -> Vec<String> {
    distinct_values(companies, |m| m.status.as_deref())
}

pub fn existing_api_types(companies: &[Company]) -> Vec<String> {
    distinct_values(companies, |m| m.endpoint.as_ref().map(|e| e.api_type.as_str()))
}

/// Sorted, de-duplicated, trimmed non-empty values of one model field.
fn distinct_values<F>(companies: &[Company], field: F) -> Vec<String>
where
    F: Fn(&Model) -> Option<&str>,
{
    companies
        .iter()
        .flat_map(|c| c.models.iter())
        .filter_map(|m| field(m))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Endpoint;

    fn model(license: &str, status: Option<&str>, api_type: Option<&str>) -> Model {
        Model {
            simple_name: Some(format!("{license}-model")),
            license: Some(license.into()),
            status: status.map(Into::into),
            endpoint: api_type.map(|t| Endpoint::new(t.into(), "x".into(), None)),
            ..Default::default()
        }
    }

    fn dataset() -> Vec<Company> {
        let mut a = Company::named("A");
        a.models = vec![
            model("MIT", None, Some("openai")),
            model(" Apache-2.0 ", Some("archived"), None),
        ];
        let mut b = Company::named("B");
        b.models = vec![
            model("MIT", Some("deprecated"), Some("huggingface")),
            model("  ", None, Some("openai")),
        ];
        vec![a, b]
    }

    #[test]
    fn licenses_are_sorted_distinct_and_trimmed() {
        assert_eq!(existing_licenses(&dataset()), vec!["Apache-2.0", "MIT"]);
    }

    #[test]
    fn statuses_and_api_types_are_discovered() {
        let data = dataset();
        assert_eq!(existing_statuses(&data), vec!["archived", "deprecated"]);
        assert_eq!(existing_api_types(&data), vec!["huggingface", "openai"]);
    }

    #[test]
    fn closed_sets_do_not_depend_on_data() {
        let options = FieldOptions::from_companies(&[]);
        assert!(options.licenses.is_empty());
        assert_eq!(
            options.architectures,
            vec!["dense", "moe", "maybe-moe", "maybe-dense", "matformer"]
        );
        assert_eq!(options.size_classes, vec!["XL", "L", "M", "S"]);
    }
}
