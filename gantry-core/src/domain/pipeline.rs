//! Pipeline domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Pipeline configuration registered for an application
///
/// Mirrors the gate's JSON representation. `application`, `id` and `name` are
/// required; the collections default to empty and the remaining scalars are
/// optional. Fields this type does not model are kept in `extra` so that
/// re-encoding a decoded pipeline reproduces what the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub application: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_waiting_pipelines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_concurrent: Option<bool>,
    #[serde(default)]
    pub parameter_config: Vec<ParameterConfig>,
    #[serde(default)]
    pub stages: Vec<StageConfig>,
    #[serde(default)]
    pub triggers: Vec<JsonValue>,
    /// Milliseconds since epoch, string encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_ts: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl PipelineConfig {
    /// Last update time parsed from `updateTs`
    ///
    /// Returns `None` when the field is absent or not a millisecond count.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.update_ts.as_deref()?.trim().parse::<i64>().ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParameterConfig> {
        self.parameter_config.iter().find(|p| p.name == name)
    }

    /// Look up a stage by its reference id
    pub fn stage(&self, ref_id: &str) -> Option<&StageConfig> {
        self.stages.iter().find(|s| s.ref_id == ref_id)
    }

    /// Parameters that must be supplied when the pipeline is triggered
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterConfig> {
        self.parameter_config.iter().filter(|p| p.required)
    }
}

/// Parameter accepted by a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Stage within a pipeline
///
/// `requisite_stage_ref_ids` lists the stages that must finish first, which
/// makes the stages of a pipeline a DAG keyed by `ref_id`. Type-specific
/// settings (`waitTime` for `wait` stages, and so on) live in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    pub ref_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub stage_type: String,
    #[serde(default)]
    pub requisite_stage_ref_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl StageConfig {
    /// True when the stage has no upstream dependencies
    pub fn is_initial(&self) -> bool {
        self.requisite_stage_ref_ids.is_empty()
    }
}
