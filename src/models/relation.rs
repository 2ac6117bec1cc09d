use serde::{Deserialize, Serialize};
use serde_json::Value;

/// <https://api.scoro.com/api/#relationsApiDocs>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
    /// Map of related ids per type in `list` responses; a plain id list in
    /// `modify`/`delete` requests.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub related_objects: Value,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
