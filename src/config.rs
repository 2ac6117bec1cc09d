use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::Result;
use crate::types::DEFAULT_LANG;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub scoro: ScoroConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoroConfig {
    pub api_key: String,
    pub company_id: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HttpConfig {
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl ScoroConfig {
    pub fn credentials(&self) -> Credentials {
        let credentials = Credentials::new(&self.api_key, &self.company_id);
        match &self.subdomain {
            Some(subdomain) => credentials.with_subdomain(subdomain),
            None => credentials,
        }
    }
}

impl Settings {
    /// `config/default.*` if present, overridden by `SCORO__`-prefixed
    /// environment variables (`SCORO__SCORO__API_KEY`, ...).
    pub fn new() -> Result<Self> {
        Self::load(File::with_name("config/default").required(false))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(File::from(path.as_ref()))
    }

    fn load(file: File<FileSourceFile, FileFormat>) -> Result<Self> {
        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("SCORO").separator("__"))
            .build()?;

        if let Ok(headers) = config.get_table("http.headers") {
            debug!(
                headers = ?headers.keys().collect::<Vec<_>>(),
                "Loaded extra HTTP headers from configuration"
            );
        }

        let settings: Settings = config.try_deserialize()?;

        debug!(
            company_id = %settings.scoro.company_id,
            lang = %settings.scoro.lang,
            "Parsed Scoro settings"
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_credentials_and_headers() {
        let file = write_config(
            "scoro:\n  api_key: key-1\n  company_id: acme\n  subdomain: acme-eu\nhttp:\n  headers:\n    x-trace: \"on\"\n",
        );
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.scoro.lang, "eng");
        assert_eq!(settings.http.headers.get("x-trace").map(String::as_str), Some("on"));

        let credentials = settings.scoro.credentials();
        assert_eq!(credentials.api_key(), "key-1");
        assert_eq!(credentials.company_id(), "acme");
        assert_eq!(credentials.host(), "acme-eu");
    }

    #[test]
    fn http_section_is_optional() {
        let file = write_config("scoro:\n  api_key: k\n  company_id: c\n  lang: est\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert!(settings.http.headers.is_empty());
        assert_eq!(settings.scoro.lang, "est");
        assert_eq!(settings.scoro.credentials().host(), "c");
    }

    #[test]
    fn missing_credentials_are_a_config_error() {
        let file = write_config("http:\n  headers: {}\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
