//! Book model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// Output format for record timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Required text fields, in the order validation failures are reported
const REQUIRED_FIELDS: [&str; 3] = ["author", "title", "publisher"];

/// Default number of records per page when `limit` is absent
const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Book record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the database
    pub id: i64,
    pub author: String,
    pub title: String,
    pub publisher: String,
    /// Creation timestamp (YYYY-MM-DD HH:MM:SS)
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (YYYY-MM-DD HH:MM:SS)
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker, never exposed to clients
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "not_blank"))]
    pub author: String,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub publisher: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl CreateBook {
    /// Validate required fields, reporting the first failing one
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(first_failure_message(&e)))
    }
}

/// Build a client-facing message naming the first failing required field
fn first_failure_message(errors: &ValidationErrors) -> String {
    let failed = errors.field_errors();
    for field in REQUIRED_FIELDS {
        if failed.contains_key(field) {
            return format!("{} must not be empty", field);
        }
    }
    "Invalid book payload".to_string()
}

/// Raw pagination query parameters
///
/// Kept as strings so that non-numeric values can be rejected with a
/// parameter-specific message instead of a generic deserialization error.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Page number (1-based, default 1)
    pub page: Option<String>,
    /// Records per page (default 10)
    pub limit: Option<String>,
}

/// Validated pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Row offset for this page.
    ///
    /// Saturates instead of overflowing on huge page numbers; a saturated
    /// offset is simply past the end of the table and yields an empty page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl TryFrom<&BookQuery> for PageRequest {
    type Error = AppError;

    fn try_from(query: &BookQuery) -> Result<Self, Self::Error> {
        let page = match query.page.as_deref() {
            None => 1,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest("Invalid page number".to_string()))?,
        };

        let limit = match query.limit.as_deref() {
            None => DEFAULT_PAGE_LIMIT,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest("Invalid limit number".to_string()))?,
        };

        if page < 1 || limit < 1 {
            return Err(AppError::BadRequest(
                "Page and limit must be greater than 0".to_string(),
            ));
        }

        Ok(Self { page, limit })
    }
}
