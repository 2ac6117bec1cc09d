use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Bool, Date, DateTime};

/// <https://api.scoro.com/api/#contactsApiDocs>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "contact_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// `"person"` or `"company"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_code: Option<String>,
    #[serde(rename = "bankaccount", skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Date::is_empty")]
    pub birthday: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(rename = "vatno", skip_serializing_if = "Option::is_none")]
    pub vat_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_supplier: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_client: Option<Bool>,
    #[serde(skip_serializing_if = "DateTime::is_empty")]
    pub modified_date: DateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(skip_serializing_if = "MeansOfContact::is_empty")]
    pub means_of_contact: MeansOfContact,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    pub is_deleted: Bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "zipcode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeansOfContact {
    #[serde(rename = "mobile", skip_serializing_if = "Vec::is_empty")]
    pub mobiles: Vec<String>,
    #[serde(rename = "phone", skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(rename = "email", skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(rename = "website", skip_serializing_if = "Vec::is_empty")]
    pub websites: Vec<String>,
    #[serde(rename = "skype", skip_serializing_if = "Vec::is_empty")]
    pub skypes: Vec<String>,
    #[serde(rename = "fax", skip_serializing_if = "Vec::is_empty")]
    pub faxes: Vec<String>,
}

impl MeansOfContact {
    pub fn is_empty(&self) -> bool {
        self.mobiles.is_empty()
            && self.phones.is_empty()
            && self.emails.is_empty()
            && self.websites.is_empty()
            && self.skypes.is_empty()
            && self.faxes.is_empty()
    }
}
