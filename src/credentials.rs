use serde::Serialize;

/// Identifies the customer and authorizes each call.
///
/// Both values are listed in Scoro under Settings > External Connections > API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "apiKey")]
    api_key: String,
    #[serde(rename = "company_account_id")]
    company_id: String,
    /// Host label used instead of the company id when set.
    #[serde(skip)]
    subdomain: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            company_id: company_id.into(),
            subdomain: None,
        }
    }

    pub fn with_subdomain(self, subdomain: impl Into<String>) -> Self {
        let subdomain = subdomain.into();
        Self {
            subdomain: (!subdomain.is_empty()).then_some(subdomain),
            ..self
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// First label of the API host name.
    pub fn host(&self) -> &str {
        self.subdomain.as_deref().unwrap_or(&self.company_id)
    }
}
