// src/presentation/http/controllers/articles.rs
use crate::application::{
    ApplicationError,
    commands::articles::CreateArticleCommand,
    dto::{ArticleDto, ArticleListDto},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{RawQuery, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string accepted by the listing endpoint. Numeric values are kept as
/// text so malformed input falls back to defaults instead of being rejected.
#[derive(Debug, Default, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size; defaults to 2 when pagination is requested.
    pub per_page: Option<String>,
    /// `title` or `created_at`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`, case-insensitive.
    pub sort_order: Option<String>,
    /// `status` or `created_at`; the value is read from the parameter of the same name.
    pub filter_by: Option<String>,
    pub status: Option<String>,
    /// RFC 3339 timestamp matched exactly.
    pub created_at: Option<String>,
}

impl ArticleListParams {
    /// Decodes a raw query string. Unknown keys are ignored and a repeated
    /// key keeps its last value.
    pub fn from_query(raw: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;

        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                "sort_by" => &mut params.sort_by,
                "sort_order" => &mut params.sort_order,
                "filter_by" => &mut params.filter_by,
                "status" => &mut params.status,
                "created_at" => &mut params.created_at,
                _ => continue,
            };
            *slot = Some(value);
        }
        Ok(params)
    }
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            filter_by: params.filter_by,
            status: params.status,
            created_at: params.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub article: ArticlePayload,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticlePayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<ArticlePayload> for CreateArticleCommand {
    fn from(payload: ArticlePayload) -> Self {
        Self {
            title: payload.title,
            body: payload.body,
            status: payload.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles with pagination, sort and filter metadata.", body = ArticleListDto),
        (status = 400, description = "Malformed query string.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unsupported sort or filter field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    RawQuery(raw): RawQuery,
) -> HttpResult<Json<ArticleListDto>> {
    let params = ArticleListParams::from_query(raw.as_deref().unwrap_or_default())
        .map_err(|err| HttpError::from_error(ApplicationError::bad_request(err.to_string())))?;

    state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Malformed request body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(request) = payload.map_err(|rejection| {
        HttpError::from_error(ApplicationError::bad_request(rejection.body_text()))
    })?;

    state
        .services
        .article_commands
        .create_article(request.article.into())
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let params =
            ArticleListParams::from_query("filter_by=status&status=draft&status=published")
                .unwrap();
        assert_eq!(params.filter_by.as_deref(), Some("status"));
        assert_eq!(params.status.as_deref(), Some("published"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = ArticleListParams::from_query("utm_source=feed&page=2").unwrap();
        assert_eq!(params.page.as_deref(), Some("2"));
        assert!(params.sort_by.is_none());
    }

    #[test]
    fn empty_query_yields_no_params() {
        let params = ArticleListParams::from_query("").unwrap();
        assert!(params.page.is_none() && params.filter_by.is_none());
    }
}
