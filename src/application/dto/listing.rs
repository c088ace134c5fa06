use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ArticleDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub meta: ListMeta,
}

/// Describes which selections were applied to a listing. Serializes to `{}`
/// when the full, unsorted, unfiltered set was returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_articles: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortMeta {
    pub field: String,
    pub order: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterMeta {
    pub field: String,
    pub value: Option<String>,
}
