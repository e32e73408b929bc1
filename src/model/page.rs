use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageDto {
    pub id: i32,
    pub title: String,
    /// URL path of the page, e.g. `/faq`
    pub alias: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Entry of the wiki index listing.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageSummaryDto {
    pub id: i32,
    pub title: String,
    pub alias: String,
}

/// Prefilled "add page" form, returned when a visitor navigates to a `wiki-` URL that has no page yet.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewPageDto {
    pub title: String,
    pub alias: String,
}

/// Body of the page creation route.
#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct NewPageForm {
    pub title: String,
    pub body: String,
}
