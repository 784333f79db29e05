//! Non-blocking length advisories for free-text fields.

use serde::{Deserialize, Serialize};

use super::forms::ModelForm;

/// How a text field is presented, which decides its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SimpleName,
    Textarea,
}

impl FieldKind {
    /// `(warning, danger)` thresholds in characters.
    pub fn thresholds(self) -> (usize, usize) {
        match self {
            Self::SimpleName => (40, 60),
            Self::Textarea => (800, 1200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthLevel {
    Ok,
    Warning,
    Danger,
}

pub fn length_level(kind: FieldKind, length: usize) -> LengthLevel {
    let (warning, danger) = kind.thresholds();
    if length >= danger {
        LengthLevel::Danger
    } else if length >= warning {
        LengthLevel::Warning
    } else {
        LengthLevel::Ok
    }
}

/// A text field long enough to deserve the operator's attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthAdvisory {
    pub field: String,
    pub length: usize,
    pub level: LengthLevel,
}

/// Advisories for the model form's free-text fields. Fields below the
/// warning threshold are not reported.
pub fn length_advisories(form: &ModelForm) -> Vec<LengthAdvisory> {
    [
        ("simple_name", FieldKind::SimpleName, &form.simple_name),
        ("desc", FieldKind::Textarea, &form.desc),
        ("size_desc", FieldKind::Textarea, &form.size_desc),
        ("fyi", FieldKind::Textarea, &form.fyi),
    ]
    .into_iter()
    .filter_map(|(field, kind, value)| {
        let length = value.chars().count();
        match length_level(kind, length) {
            LengthLevel::Ok => None,
            level => Some(LengthAdvisory {
                field: field.to_string(),
                length,
                level,
            }),
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(length_level(FieldKind::SimpleName, 39), LengthLevel::Ok);
        assert_eq!(length_level(FieldKind::SimpleName, 40), LengthLevel::Warning);
        assert_eq!(length_level(FieldKind::SimpleName, 60), LengthLevel::Danger);
        assert_eq!(length_level(FieldKind::Textarea, 1199), LengthLevel::Warning);
    }

    #[test]
    fn short_fields_produce_no_advisories() {
        let form = ModelForm {
            simple_name: "Llama 3".into(),
            desc: "A model.".into(),
            ..Default::default()
        };
        assert!(length_advisories(&form).is_empty());
    }

    #[test]
    fn long_fields_are_reported_in_form_order() {
        let form = ModelForm {
            simple_name: "n".repeat(45),
            fyi: "é".repeat(1200),
            ..Default::default()
        };
        let advisories = length_advisories(&form);
        assert_eq!(
            advisories,
            vec![
                LengthAdvisory {
                    field: "simple_name".into(),
                    length: 45,
                    level: LengthLevel::Warning,
                },
                LengthAdvisory {
                    field: "fyi".into(),
                    length: 1200,
                    level: LengthLevel::Danger,
                },
            ]
        );
    }
}
