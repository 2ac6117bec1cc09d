use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Bool, DateTime, Decimal, LocalizedString};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteLine {
    pub product_id: i64,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    pub amount: Decimal,
    pub sum: Decimal,
    pub vat: Decimal,
    #[serde(skip_serializing_if = "LocalizedString::is_empty")]
    pub comment: LocalizedString,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount2: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount3: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_party_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_party_address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_sent: Bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<QuoteLine>,
    #[serde(skip_serializing_if = "DateTime::is_empty")]
    pub modified_date: DateTime,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    pub is_deleted: Bool,
    #[serde(skip_serializing_if = "DateTime::is_empty")]
    pub deleted_date: DateTime,
}
