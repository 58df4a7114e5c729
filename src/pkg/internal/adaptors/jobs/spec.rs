use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use sqlx::{FromRow, types::BigDecimal};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    #[serde(serialize_with = "serialize_decimal")]
    pub equity: Option<BigDecimal>,
    pub company_handle: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "salary cannot be negative"))]
    pub salary: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<BigDecimal>,
    #[serde(alias = "company_handle")]
    #[validate(length(min = 1, max = 25, message = "companyHandle must be 1-25 characters"))]
    pub company_handle: String,
}

/// Replacement values for a job's mutable columns. `company_handle` is not
/// accepted here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct JobUpdate {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 0, message = "salary cannot be negative"))]
    pub salary: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<BigDecimal>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
    pub title: Option<String>,
}

/// Equity is a fraction of the company, so only `[0, 1]` is meaningful.
fn validate_equity(equity: &BigDecimal) -> core::result::Result<(), ValidationError> {
    if *equity < BigDecimal::from(0) || *equity > BigDecimal::from(1) {
        return Err(ValidationError::new("range").with_message("equity must be between 0 and 1".into()));
    }
    Ok(())
}

fn serialize_decimal<S>(value: &Option<BigDecimal>, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_str(&d.to_plain_string()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_decimal<'de, D>(deserializer: D) -> core::result::Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => {
            return Err(de::Error::custom(format!(
                "expected a decimal number or string, got {}",
                other
            )));
        }
    };
    BigDecimal::from_str(&raw)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("invalid decimal {:?}: {}", raw, e)))
}
