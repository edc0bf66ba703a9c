//! The reflection record: three guided steps plus metadata.

use crate::types::LocalStamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version written into the metadata of newly constructed records.
pub const APP_VERSION: &str = "v1.0.4";

/// Unknown persisted fields, carried through load and save untouched.
pub type Extra = Map<String, Value>;

/// Record metadata. `created_at` is set once at first construction; a
/// persisted value always survives a load-merge. `updated_at` is
/// rewritten on every successful save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub version: String,
    pub created_at: LocalStamp,
    pub updated_at: LocalStamp,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Step one: pause.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepOne {
    pub feel: String,
    pub seconds: u32,
    pub note: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for StepOne {
    fn default() -> Self {
        Self {
            feel: String::new(),
            seconds: 45,
            note: String::new(),
            extra: Extra::new(),
        }
    }
}

/// Step two: observe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepTwo {
    pub thought: String,
    pub body: String,
    pub score: u8,
    pub note: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for StepTwo {
    fn default() -> Self {
        Self {
            thought: String::new(),
            body: String::new(),
            score: 5,
            note: String::new(),
            extra: Extra::new(),
        }
    }
}

/// Step three: redirect.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepThree {
    pub old_reaction: String,
    pub new_reaction: String,
    pub tried_ten_percent: bool,
    pub note: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The singleton reflection record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub meta: Meta,
    pub step1: StepOne,
    pub step2: StepTwo,
    pub step3: StepThree,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record {
    /// Fresh defaults with both stamps set to the current local time.
    pub fn fresh() -> Self {
        let now = LocalStamp::now();
        Record {
            meta: Meta {
                version: APP_VERSION.to_string(),
                created_at: now.clone(),
                updated_at: now,
                extra: Extra::new(),
            },
            step1: StepOne::default(),
            step2: StepTwo::default(),
            step3: StepThree::default(),
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_defaults() {
        let record = Record::fresh();
        assert_eq!(record.meta.version, APP_VERSION);
        assert_eq!(record.meta.created_at, record.meta.updated_at);
        assert_eq!(record.step1.seconds, 45);
        assert_eq!(record.step2.score, 5);
        assert!(!record.step3.tried_ten_percent);
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let value = serde_json::to_value(Record::fresh()).unwrap();
        assert!(value["meta"]["createdAt"].is_string());
        assert!(value["meta"]["updatedAt"].is_string());
        assert!(value["step3"]["oldReaction"].is_string());
        assert!(value["step3"]["triedTenPercent"].is_boolean());
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let blob = r#"{
            "meta": {"version": "v0.9", "createdAt": "2025-01-01 08:00", "updatedAt": "2025-01-01 08:00"},
            "step1": {"feel": "tense", "seconds": 30, "note": "", "mood": "gray"},
            "step2": {"thought": "", "body": "", "score": 5, "note": ""},
            "step3": {"oldReaction": "", "newReaction": "", "triedTenPercent": false, "note": ""},
            "theme": "dark"
        }"#;
        let record: Record = serde_json::from_str(blob).unwrap();
        assert_eq!(record.extra["theme"], "dark");
        assert_eq!(record.step1.extra["mood"], "gray");

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["theme"], "dark");
        assert_eq!(out["step1"]["mood"], "gray");
    }
}
