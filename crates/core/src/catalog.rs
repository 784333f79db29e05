//! Catalog data model: companies and the models they publish.
//!
//! Records mirror the canonical `models.json` layout. Optional fields are
//! omitted from the serialized form when absent, so the presence of a key
//! always carries meaning. Keys the editor does not know about are kept in
//! `extra` and written back untouched.

use std::fmt;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// Top-level catalog entry: a model provider and its models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    /// Display name, also the key used to match companies across versions.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_license_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_reuse_specificities: Option<String>,
    /// Models in display order.
    pub models: Vec<Model>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// A company with no optional fields and no models.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_path: None,
            proprietary_license_desc: None,
            proprietary_reuse_specificities: None,
            models: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Company {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::deserialize(deserializer)?;

        let name = match fields.remove("name") {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "company name must be a string, found {other}"
                )))
            }
            None => return Err(D::Error::missing_field("name")),
        };
        let models = match fields.remove("models") {
            Some(value) => Vec::<Model>::deserialize(value).map_err(D::Error::custom)?,
            None => Vec::new(),
        };

        Ok(Self {
            name,
            icon_path: take_field(&mut fields, "icon_path"),
            proprietary_license_desc: take_field(&mut fields, "proprietary_license_desc"),
            proprietary_reuse_specificities: take_field(
                &mut fields,
                "proprietary_reuse_specificities",
            ),
            models,
            extra: fields,
        })
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Metadata for a single AI model.
///
/// Loading is lenient: a value that does not fit its typed field (a
/// non-boolean `reasoning`, a numeric `desc`, an explicit `null`) is kept
/// verbatim in `extra` instead of failing the whole dataset. Closed-set and
/// format checks belong to the form validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Absent means the model is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamCount>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_number"
    )]
    pub active_params: Option<f64>,
    /// One of [`Architecture::ALL`] once validated; loaded data may hold
    /// anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fyi: Option<String>,
    /// The validator only ever sets `Some(true)`; an explicit `false` comes
    /// from loaded data and is written back as is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    /// Keys held by the typed fields above.
    pub const FIELDS: [&'static str; 15] = [
        "id",
        "simple_name",
        "license",
        "status",
        "release_date",
        "params",
        "active_params",
        "arch",
        "url",
        "desc",
        "size_desc",
        "fyi",
        "reasoning",
        "new",
        "endpoint",
    ];

    /// Key used to match a model across dataset versions: `simple_name`,
    /// falling back to `id`, falling back to the empty string.
    pub fn identity_key(&self) -> &str {
        [self.simple_name.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    pub fn is_reasoning(&self) -> bool {
        self.reasoning.unwrap_or(false)
    }

    pub fn is_new(&self) -> bool {
        self.new.unwrap_or(false)
    }

    /// Take over the unmodelled keys of `previous`, the record this one
    /// replaces. Leftover copies of typed keys are dropped so they cannot
    /// shadow the edited values. An explicit `false` flag on `previous`
    /// survives when the edit leaves that flag unset.
    pub fn inherit_extra(&mut self, previous: &mut Model) {
        if self.reasoning.is_none() && previous.reasoning == Some(false) {
            self.reasoning = Some(false);
        }
        if self.new.is_none() && previous.new == Some(false) {
            self.new = Some(false);
        }

        let mut extra = std::mem::take(&mut previous.extra);
        extra.retain(|key, _| !Self::FIELDS.contains(&key.as_str()));
        self.extra = extra;

        if let (Some(endpoint), Some(old)) = (self.endpoint.as_mut(), previous.endpoint.as_mut()) {
            let mut extra = std::mem::take(&mut old.extra);
            extra.retain(|key, _| !Endpoint::FIELDS.contains(&key.as_str()));
            endpoint.extra = extra;
        }
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::deserialize(deserializer)?;
        Ok(Self {
            id: take_field(&mut fields, "id"),
            simple_name: take_field(&mut fields, "simple_name"),
            license: take_field(&mut fields, "license"),
            status: take_field(&mut fields, "status"),
            release_date: take_field(&mut fields, "release_date"),
            params: take_field(&mut fields, "params"),
            active_params: take_field(&mut fields, "active_params"),
            arch: take_field(&mut fields, "arch"),
            url: take_field(&mut fields, "url"),
            desc: take_field(&mut fields, "desc"),
            size_desc: take_field(&mut fields, "size_desc"),
            fyi: take_field(&mut fields, "fyi"),
            reasoning: take_field(&mut fields, "reasoning"),
            new: take_field(&mut fields, "new"),
            endpoint: take_field(&mut fields, "endpoint"),
            extra: fields,
        })
    }
}

/// How to reach a model through an inference API.
///
/// An endpoint object missing `api_type` or `api_model_id` does not load as
/// an `Endpoint`; it stays in the model's `extra` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub api_type: String,
    pub api_model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Endpoint {
    pub const FIELDS: [&'static str; 3] = ["api_type", "api_model_id", "api_base"];

    pub fn new(api_type: String, api_model_id: String, api_base: Option<String>) -> Self {
        Self {
            api_type,
            api_model_id,
            api_base,
            extra: Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter count
// ---------------------------------------------------------------------------

/// Coarse size bucket used when the exact parameter count is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Xl,
    L,
    M,
    S,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [Self::Xl, Self::L, Self::M, Self::S];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xl => "XL",
            Self::L => "L",
            Self::M => "M",
            Self::S => "S",
        }
    }
}

impl FromStr for SizeClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model size: either a size bucket or a count in billions of parameters.
///
/// Serializes as the bare token (`"XL"`) or as a JSON number (`70`, `1.5`).
/// Any other string found in loaded data is kept as [`ParamCount::Text`] and
/// written back unchanged; the validator never produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamCount {
    Size(SizeClass),
    Billions(f64),
    Text(String),
}

impl fmt::Display for ParamCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(size) => write!(f, "{size}"),
            Self::Billions(count) => write!(f, "{count}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for ParamCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Size(size) => serializer.serialize_str(size.as_str()),
            Self::Billions(count) => serialize_number(*count, serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for ParamCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(count) => Self::Billions(count),
            Raw::Text(text) => match text.parse::<SizeClass>() {
                Ok(size) => Self::Size(size),
                Err(()) => Self::Text(text),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Architecture
// ---------------------------------------------------------------------------

/// Network architecture family. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    Dense,
    Moe,
    MaybeMoe,
    MaybeDense,
    Matformer,
}

impl Architecture {
    pub const ALL: [Architecture; 5] = [
        Self::Dense,
        Self::Moe,
        Self::MaybeMoe,
        Self::MaybeDense,
        Self::Matformer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Moe => "moe",
            Self::MaybeMoe => "maybe-moe",
            Self::MaybeDense => "maybe-dense",
            Self::Matformer => "matformer",
        }
    }
}

impl FromStr for Architecture {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|a| a.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Move `key` out of `fields` when its value fits `T`. Values that do not
/// fit, `null` included, stay in `fields` as they are.
fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    let parsed = match fields.get(key) {
        None | Some(Value::Null) => return None,
        Some(value) => T::deserialize(value).ok()?,
    };
    fields.remove(key);
    Some(parsed)
}

/// Whole numbers are written as integers so `70` does not become `70.0`.
fn serialize_number<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

fn serialize_opt_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(*v, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let model = Model {
            simple_name: Some("m1".into()),
            license: Some("MIT".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value, json!({"simple_name": "m1", "license": "MIT"}));
    }

    #[test]
    fn whole_param_counts_serialize_as_integers() {
        let model = Model {
            params: Some(ParamCount::Billions(70.0)),
            active_params: Some(1.5),
            ..Default::default()
        };
        let text = serde_json::to_string(&model).unwrap();
        assert_eq!(text, r#"{"params":70,"active_params":1.5}"#);
    }

    #[test]
    fn params_accept_tokens_and_numbers() {
        let model: Model = serde_json::from_value(json!({"params": "XL"})).unwrap();
        assert_eq!(model.params, Some(ParamCount::Size(SizeClass::Xl)));

        let model: Model = serde_json::from_value(json!({"params": 8})).unwrap();
        assert_eq!(model.params, Some(ParamCount::Billions(8.0)));

        let model: Model = serde_json::from_value(json!({"params": "70"})).unwrap();
        assert_eq!(model.params, Some(ParamCount::Text("70".into())));
        assert_eq!(serde_json::to_value(&model).unwrap(), json!({"params": "70"}));
    }

    #[test]
    fn off_type_values_load_into_extra_and_write_back_unchanged() {
        let input = json!({
            "simple_name": "Hybrid 8B",
            "license": "MIT",
            "arch": "hybrid",
            "reasoning": "hybrid",
            "new": false,
            "desc": null,
            "active_params": "3",
            "endpoint": {"api_type": "openai"}
        });
        let model: Model = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(model.arch.as_deref(), Some("hybrid"));
        assert_eq!(model.new, Some(false));
        assert!(!model.is_reasoning());
        assert_eq!(model.extra["reasoning"], "hybrid");
        assert!(model.extra["desc"].is_null());
        assert_eq!(model.extra["active_params"], "3");
        assert!(model.endpoint.is_none());
        assert_eq!(model.extra["endpoint"], json!({"api_type": "openai"}));

        assert_eq!(serde_json::to_value(&model).unwrap(), input);
    }

    #[test]
    fn company_name_is_required() {
        assert!(serde_json::from_value::<Company>(json!({"models": []})).is_err());
        assert!(serde_json::from_value::<Company>(json!({"name": 3})).is_err());
    }

    #[test]
    fn inherit_extra_drops_stale_typed_keys() {
        let mut previous: Model = serde_json::from_value(json!({
            "simple_name": "m",
            "reasoning": "maybe",
            "quantized": true,
            "endpoint": {"api_type": "openai", "api_model_id": "m", "region": "eu"}
        }))
        .unwrap();

        let mut edited = Model {
            simple_name: Some("m".into()),
            reasoning: Some(true),
            endpoint: Some(Endpoint::new("openai".into(), "m-2".into(), None)),
            ..Default::default()
        };
        edited.inherit_extra(&mut previous);

        assert_eq!(
            serde_json::to_value(&edited).unwrap(),
            json!({
                "simple_name": "m",
                "reasoning": true,
                "quantized": true,
                "endpoint": {"api_type": "openai", "api_model_id": "m-2", "region": "eu"}
            })
        );
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let input = json!({
            "name": "Acme",
            "homepage": "https://acme.test",
            "models": [{"simple_name": "a", "license": "MIT", "quantized": true}]
        });
        let company: Company = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(company.extra["homepage"], "https://acme.test");
        assert_eq!(serde_json::to_value(&company).unwrap(), input);
    }

    #[test]
    fn missing_models_default_to_empty() {
        let company: Company = serde_json::from_value(json!({"name": "Solo"})).unwrap();
        assert!(company.models.is_empty());
    }

    #[test]
    fn identity_key_falls_back_to_id() {
        let mut model = Model {
            id: Some("org/model-7b".into()),
            ..Default::default()
        };
        assert_eq!(model.identity_key(), "org/model-7b");

        model.simple_name = Some("Model 7B".into());
        assert_eq!(model.identity_key(), "Model 7B");

        assert_eq!(Model::default().identity_key(), "");
    }

    #[test]
    fn architecture_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(Architecture::MaybeMoe).unwrap(),
            json!("maybe-moe")
        );
        assert_eq!("matformer".parse::<Architecture>(), Ok(Architecture::Matformer));
        assert!("sparse".parse::<Architecture>().is_err());
    }
}
