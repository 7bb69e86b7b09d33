//! Front-matter parsing

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use thiserror::Error;

use super::DocumentId;

const DELIMITER: &str = "---";

/// Why a front-matter block could not be read
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("front-matter is missing its closing '---' line")]
    Unterminated,

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Front-matter header of a blog document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<DocumentId>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "deserialize_categories")]
    categories: Vec<String>,
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<String>,
}

impl FrontMatter {
    /// Split a document into its front-matter and body.
    ///
    /// A document that does not open with a `---` line has no front-matter
    /// and is returned whole as the body.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let rest = match content.split_once('\n') {
            Some((first, rest)) if first.trim_end() == DELIMITER => rest,
            None if content.trim_end() == DELIMITER => return Err(FrontMatterError::Unterminated),
            _ => return Ok((FrontMatter::default(), content)),
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                let yaml = &rest[..offset];
                let body = &rest[offset + line.len()..];

                if yaml.trim().is_empty() {
                    return Ok((FrontMatter::default(), body));
                }

                let fm: FrontMatter = serde_yaml::from_str(yaml)?;
                return Ok((fm, body));
            }
            offset += line.len();
        }

        Err(FrontMatterError::Unterminated)
    }

    /// Categories in the order they were written
    pub fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Categories may be written as a list or as a single name. Bare numbers
/// and booleans (`[React, 2024]`) are taken as names too.
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(items)) => items,
        Some(other) => vec![other],
    };

    items
        .into_iter()
        .map(|item| {
            scalar_name(item)
                .ok_or_else(|| D::Error::custom("categories must be a name or a list of names"))
        })
        .collect()
}

fn scalar_name(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_name(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Resolve a wall-clock time in `tz`. A time skipped by a daylight-saving
/// change resolves to the same wall-clock time one hour later; an ambiguous
/// one resolves to the earlier instant.
fn resolve_local<Tz: TimeZone>(tz: &Tz, dt: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&dt).earliest().or_else(|| {
        let shifted = dt.checked_add_signed(Duration::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

/// Parse a date string in the formats blog authors commonly write
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return resolve_local(&Local, dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return resolve_local(&Local, d.and_hms_opt(0, 0, 0)?);
        }
    }

    None
}
