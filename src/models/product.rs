use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Bool, DateTime, Decimal, LocalizedString};

/// <https://api.scoro.com/api/#productsApiDocs>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(rename = "product_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "LocalizedString::is_empty")]
    pub names: LocalizedString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_price: Option<Decimal>,
    #[serde(skip_serializing_if = "LocalizedString::is_empty")]
    pub description: LocalizedString,
    #[serde(skip_serializing_if = "LocalizedString::is_empty")]
    pub description2: LocalizedString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(rename = "productgroup_id", skip_serializing_if = "Option::is_none")]
    pub product_group_id: Option<i64>,
    pub is_active: Bool,
    pub is_service: Bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_vat_code_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_object_id: Option<i64>,
    #[serde(skip_serializing_if = "DateTime::is_empty")]
    pub modified_date: DateTime,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    pub is_deleted: Bool,
    #[serde(skip_serializing_if = "DateTime::is_empty")]
    pub deleted_date: DateTime,
}
