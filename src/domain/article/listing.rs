//! Request-scoped listing selections for articles.
//!
//! Raw query parameters are validated against fixed whitelists and turned
//! into an [`ArticleListQuery`], built in three explicit stages: filter, then
//! sort, then paginate. Repositories only ever see these typed values, never
//! the raw parameter names.

use crate::domain::article::entity::Article;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 2;

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedAt,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::CreatedAt => "created_at",
        }
    }

    pub const fn column(self) -> &'static str {
        self.as_str()
    }
}

/// Fails with `InvalidSort` when the field is present but not sortable.
pub fn validate_sort_field(field: Option<&str>) -> DomainResult<Option<SortField>> {
    match present(field) {
        None => Ok(None),
        Some("title") => Ok(Some(SortField::Title)),
        Some("created_at") => Ok(Some(SortField::CreatedAt)),
        Some(other) => Err(DomainError::InvalidSort(format!(
            "Invalid sort param '{other}': allowed fields are 'title', 'created_at'"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than a case-insensitive `desc` sorts ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.to_lowercase() == "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub const fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl ArticleSort {
    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let ordering = match self.field {
            SortField::Title => a.title.as_str().cmp(b.title.as_str()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        let ordering = match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    CreatedAt,
}

impl FilterField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::CreatedAt => "created_at",
        }
    }

    pub const fn column(self) -> &'static str {
        self.as_str()
    }

    /// Typed extraction of the filter value carried by the parameter of the
    /// same name. Timestamps that fail to parse keep the filter but match
    /// nothing.
    pub fn extract(self, raw: &str) -> ArticleFilter {
        match self {
            Self::Status => ArticleFilter::Status(raw.to_string()),
            Self::CreatedAt => ArticleFilter::CreatedAt(
                DateTime::parse_from_rfc3339(raw.trim())
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc)),
            ),
        }
    }
}

/// Fails with `InvalidFilter` when the field is present but not filterable.
pub fn validate_filter_field(field: Option<&str>) -> DomainResult<Option<FilterField>> {
    match present(field) {
        None => Ok(None),
        Some("status") => Ok(Some(FilterField::Status)),
        Some("created_at") => Ok(Some(FilterField::CreatedAt)),
        Some(other) => Err(DomainError::InvalidFilter(format!(
            "Invalid filter field '{other}': must use either 'status' or 'created_at'."
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    Status(String),
    CreatedAt(Option<DateTime<Utc>>),
}

impl ArticleFilter {
    pub const fn field(&self) -> FilterField {
        match self {
            Self::Status(_) => FilterField::Status,
            Self::CreatedAt(_) => FilterField::CreatedAt,
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::Status(value) => article.status.as_str() == value,
            Self::CreatedAt(Some(at)) => article.created_at == *at,
            Self::CreatedAt(None) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Pagination applies only when at least one of the parameters is
    /// present. Missing, non-numeric and non-positive values fall back to the
    /// defaults independently.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Option<Self> {
        let page = present(page);
        let per_page = present(per_page);
        if page.is_none() && per_page.is_none() {
            return None;
        }

        Some(Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            per_page: parse_positive(per_page).unwrap_or(DEFAULT_PER_PAGE),
        })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

/// Positive integers too large for a page number saturate instead of falling
/// back to the default.
fn parse_positive(value: Option<&str>) -> Option<u32> {
    let raw = value?.trim();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match digits.parse::<u32>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => Some(u32::MAX),
    }
}

/// The typed form of a list request handed to repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub filter: Option<ArticleFilter>,
    pub sort: Option<ArticleSort>,
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filtered(mut self, filter: Option<ArticleFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted(mut self, sort: Option<ArticleSort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginated(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    /// Evaluates the query over an in-memory set, returning the selected page
    /// and the filtered total.
    pub fn apply(&self, mut articles: Vec<Article>) -> (Vec<Article>, u64) {
        if let Some(filter) = &self.filter {
            articles.retain(|article| filter.matches(article));
        }

        match &self.sort {
            Some(sort) => articles.sort_by(|a, b| sort.compare(a, b)),
            None => articles.sort_by_key(|article| article.id),
        }

        let total = articles.len() as u64;

        let articles = match &self.pagination {
            Some(page) => {
                let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
                let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
                articles.into_iter().skip(offset).take(limit).collect()
            }
            None => articles,
        };

        (articles, total)
    }
}
