use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Confirmation body for operations without a resource to return.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Pagination summary attached to paginated listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_requests: u64,
    pub has_next: bool,
    pub has_prev: bool,
}
