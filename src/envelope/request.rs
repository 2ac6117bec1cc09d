use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credentials;

pub const API_HOST: &str = "scoro.com";
pub const API_PATH: &str = "api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    List,
    Modify,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::List => "list",
            Action::Modify => "modify",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `https://{host}.scoro.com/api/v1/{entity}/{action}[/{param}...]`
pub fn make_url(credentials: &Credentials, entity: &str, action: Action, params: &[&str]) -> String {
    let base = format!("https://{}.{API_HOST}/{API_PATH}", credentials.host());

    [base.as_str(), entity, action.as_str()]
        .into_iter()
        .chain(params.iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}

/// JSON body shared by every action. Unused optional fields are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody<'a> {
    #[serde(flatten)]
    pub credentials: &'a Credentials,
    pub lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

impl<'a> RequestBody<'a> {
    pub fn new(credentials: &'a Credentials, lang: &'a str) -> Self {
        Self {
            credentials,
            lang,
            page: None,
            per_page: None,
            request: None,
            filter: None,
        }
    }
}
