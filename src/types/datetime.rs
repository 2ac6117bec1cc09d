use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// What the vendor sends for "no value".
pub const EMPTY_DATE_TIME: &str = "0000-00-00 00:00:00";
pub const EMPTY_DATE: &str = "0000-00-00";

/// Exact layouts checked before parsing. `9` is any ASCII digit; every other
/// byte must match.
const DATE_TIME_SHAPE: &[u8] = b"9999-99-99 99:99:99";
const DATE_SHAPE: &[u8] = b"9999-99-99";

fn has_shape(s: &str, shape: &[u8]) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape).all(|(c, &expected)| match expected {
            b'9' => c.is_ascii_digit(),
            _ => c == expected,
        })
}

/// Timestamp written verbatim as `YYYY-MM-DD hh:mm:ss`, no timezone applied.
///
/// `null` and the `0000-00-00 00:00:00` sentinel both read as the empty
/// value. The empty value is written back as the sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(Option<NaiveDateTime>);

impl DateTime {
    pub const EMPTY: DateTime = DateTime(None);

    /// Sub-second precision is dropped; the wire format has none.
    pub fn new(value: NaiveDateTime) -> Self {
        DateTime(Some(value.with_nanosecond(0).unwrap_or(value)))
    }

    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn get(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(value) => serializer.collect_str(&value.format(DATE_TIME_PATTERN)),
            None => serializer.serialize_str(EMPTY_DATE_TIME),
        }
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(DateTime::EMPTY),
            Some(s) if s == EMPTY_DATE_TIME => Ok(DateTime::EMPTY),
            Some(s) if !has_shape(&s, DATE_TIME_SHAPE) => Err(D::Error::custom(format!(
                "invalid date-time {s:?}: expected YYYY-MM-DD hh:mm:ss"
            ))),
            Some(s) => NaiveDateTime::parse_from_str(&s, DATE_TIME_PATTERN)
                .map(|value| DateTime(Some(value)))
                .map_err(|e| D::Error::custom(format!("invalid date-time {s:?}: {e}"))),
        }
    }
}

/// Calendar date written as `YYYY-MM-DD`; `0000-00-00` is the empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(Option<NaiveDate>);

impl Date {
    pub const EMPTY: Date = Date(None);

    pub fn new(value: NaiveDate) -> Self {
        Date(Some(value))
    }

    pub fn get(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self::new(value)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(value) => serializer.collect_str(&value.format(DATE_PATTERN)),
            None => serializer.serialize_str(EMPTY_DATE),
        }
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Date::EMPTY),
            Some(s) if s == EMPTY_DATE => Ok(Date::EMPTY),
            Some(s) if !has_shape(&s, DATE_SHAPE) => Err(D::Error::custom(format!(
                "invalid date {s:?}: expected YYYY-MM-DD"
            ))),
            Some(s) => NaiveDate::parse_from_str(&s, DATE_PATTERN)
                .map(|value| Date(Some(value)))
                .map_err(|e| D::Error::custom(format!("invalid date {s:?}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 59)
            .unwrap()
    }

    #[test]
    fn date_time_encodes_in_vendor_pattern() {
        let encoded = serde_json::to_string(&DateTime::new(sample())).unwrap();
        assert_eq!(encoded, r#""2024-03-09 14:05:59""#);
    }

    #[test]
    fn date_time_decodes_what_it_encodes() {
        let value = DateTime::new(sample());
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: DateTime = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn date_time_drops_sub_second_precision() {
        let precise = sample().with_nanosecond(123_000_000).unwrap();
        assert_eq!(DateTime::new(precise).get(), Some(sample()));
    }

    #[test]
    fn date_time_sentinels_are_empty() {
        let from_null: DateTime = serde_json::from_str("null").unwrap();
        let from_zero: DateTime = serde_json::from_str(r#""0000-00-00 00:00:00""#).unwrap();
        assert!(from_null.is_empty());
        assert!(from_zero.is_empty());
    }

    #[test]
    fn empty_date_time_encodes_as_sentinel() {
        let encoded = serde_json::to_string(&DateTime::EMPTY).unwrap();
        assert_eq!(encoded, r#""0000-00-00 00:00:00""#);
    }

    #[test]
    fn date_time_rejects_malformed_input() {
        assert!(serde_json::from_str::<DateTime>(r#""not-a-date""#).is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2024-03-09""#).is_err());
        assert!(serde_json::from_str::<DateTime>("20240309").is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2024-3-9 1:2:3""#).is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2024-03-0914:05:59""#).is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2024-03-09   14:05:59""#).is_err());
        assert!(serde_json::from_str::<DateTime>(r#""2024-02-30 10:00:00""#).is_err());
    }

    #[test]
    fn date_round_trip_and_sentinels() {
        let value = Date::new(NaiveDate::from_ymd_opt(1984, 4, 3).unwrap());
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, r#""1984-04-03""#);
        assert_eq!(serde_json::from_str::<Date>(&encoded).unwrap(), value);

        assert!(serde_json::from_str::<Date>("null").unwrap().is_empty());
        assert!(serde_json::from_str::<Date>(r#""0000-00-00""#).unwrap().is_empty());
        assert!(serde_json::from_str::<Date>(r#""not-a-date""#).is_err());
        assert!(serde_json::from_str::<Date>(r#""2024-03-09 10:00:00""#).is_err());
        assert!(serde_json::from_str::<Date>(r#""2024-3-9""#).is_err());
        assert!(serde_json::from_str::<Date>(r#""+12024-03-09""#).is_err());
        assert!(serde_json::from_str::<Date>(r#"" 2024-03-09""#).is_err());
    }
}
