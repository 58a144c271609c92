// src/models/envelope.rs
// DOCUMENTATION: Uniform response envelope and pagination helpers
// PURPOSE: Every endpoint answers with {success, data, source?, note?, ...}

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Response envelope shared by all endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            source: None,
            note: None,
            count: None,
            total: None,
            pagination: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// List response carrying the item count
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        let mut response = Self::ok(items);
        response.count = Some(count);
        response
    }

    /// Paginated list response with total matches and page metadata
    pub fn paginated(items: Vec<T>, total: i64, params: &PageParams) -> Self {
        let mut response = Self::list(items);
        response.total = Some(total);
        response.pagination = Some(Pagination {
            page: params.page(),
            pages: params.pages(total),
        });
        response
    }
}

impl ApiResponse<()> {
    /// Envelope with a message and no payload (e.g. after a delete)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            source: None,
            note: None,
            count: None,
            total: None,
            pagination: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub pages: i64,
}

/// Page/limit query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    #[cfg(test)]
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to 1..=MAX_PAGE_SIZE
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Rows to skip; saturates so huge page numbers just yield an empty page
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Number of pages needed to show `total` items
    pub fn pages(&self, total: i64) -> i64 {
        let limit = self.limit();
        (total.max(0) + limit - 1) / limit
    }
}

/// A payload together with where it came from
/// DOCUMENTATION: Produced by services that wrap a third-party API.
/// `note` is set only when fallback data was substituted
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub data: T,
    pub source: String,
    pub note: Option<String>,
}

impl<T> Sourced<T> {
    pub fn live(data: T, source: &str) -> Self {
        Self {
            data,
            source: source.to_string(),
            note: None,
        }
    }

    pub fn fallback(data: T, source: &str, note: &str) -> Self {
        Self {
            data,
            source: source.to_string(),
            note: Some(note.to_string()),
        }
    }

    #[cfg(test)]
    pub fn is_fallback(&self) -> bool {
        self.note.is_some()
    }

    pub fn into_response(self) -> ApiResponse<T> {
        ApiResponse::ok(self.data)
            .with_source(self.source)
            .with_note(self.note)
    }
}
