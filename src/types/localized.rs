use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::DEFAULT_LANG;

/// Text keyed by language code (`"eng"`, `"rus"`, ...).
///
/// Requests always carry the full dictionary. For some fields the API answers
/// with a single string in the requested language instead; that string is
/// stored under [`DEFAULT_LANG`] whatever language was actually asked for,
/// so decoding then re-encoding yields an object, not the original string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary holding a single language.
    pub fn single(text: impl Into<String>, lang: impl Into<String>) -> Self {
        let mut values = BTreeMap::new();
        values.insert(lang.into(), text.into());
        LocalizedString(values)
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(lang.into(), text.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for LocalizedString {
    fn from(values: BTreeMap<String, String>) -> Self {
        LocalizedString(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LocalizedString(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for LocalizedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(LocalizedString::new()),
            Value::String(text) => Ok(LocalizedString::single(text, DEFAULT_LANG)),
            Value::Object(map) => map
                .into_iter()
                .map(|(lang, text)| match text {
                    Value::String(text) => Ok((lang, text)),
                    other => Err(D::Error::custom(format!(
                        "localized text for {lang:?} must be a string, got {other}"
                    ))),
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(LocalizedString),
            other => Err(D::Error::custom(format!(
                "expected localized string or dictionary, got {other}"
            ))),
        }
    }
}
