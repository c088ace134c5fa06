use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListDto, FilterMeta, ListMeta, SortMeta},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleListQuery, ArticlePage, ArticleSort, FilterField, Pagination, SortField,
            SortOrder, validate_filter_field, validate_sort_field,
        },
        errors::DomainResult,
    },
};

/// Raw, untrusted listing parameters as received from the client.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub filter_by: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl ListArticlesQuery {
    /// Each filterable field reads its value from the parameter of the same name.
    fn filter_value(&self, field: FilterField) -> Option<&str> {
        let raw = match field {
            FilterField::Status => self.status.as_deref(),
            FilterField::CreatedAt => self.created_at.as_deref(),
        };
        raw.filter(|v| !v.trim().is_empty())
    }

    fn sort_order_supplied(&self) -> bool {
        self.sort_order
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}

/// A validated listing: the repository query plus what the response metadata
/// needs to know about how it was built.
#[derive(Debug, Clone)]
pub struct ListPlan {
    pub query: ArticleListQuery,
    meta: ListMeta,
}

impl ListPlan {
    pub fn build(params: &ListArticlesQuery) -> DomainResult<Self> {
        let sort_field = validate_sort_field(params.sort_by.as_deref())?;
        let filter_field = validate_filter_field(params.filter_by.as_deref())?;

        let mut meta = ListMeta::default();
        let query = ArticleListQuery::all();
        let query = filter_stage(query, params, filter_field, &mut meta);
        let query = sort_stage(query, params, sort_field, &mut meta);
        let query = paginate_stage(query, params);

        Ok(Self { query, meta })
    }

    pub fn assemble(self, page: ArticlePage) -> ArticleListDto {
        let mut meta = self.meta;

        if let Some(pagination) = self.query.pagination {
            meta.current_page = Some(pagination.page);
            meta.total_pages = Some(pagination.total_pages(page.total));
            meta.total_articles = Some(page.total);
        }

        ArticleListDto {
            articles: page.articles.into_iter().map(Into::into).collect(),
            meta,
        }
    }
}

fn filter_stage(
    query: ArticleListQuery,
    params: &ListArticlesQuery,
    field: Option<FilterField>,
    meta: &mut ListMeta,
) -> ArticleListQuery {
    let Some(field) = field else {
        return query;
    };

    let value = params.filter_value(field);
    meta.filter = Some(FilterMeta {
        field: field.as_str().to_string(),
        value: value.map(str::to_string),
    });

    query.filtered(value.map(|raw| field.extract(raw)))
}

fn sort_stage(
    query: ArticleListQuery,
    params: &ListArticlesQuery,
    field: Option<SortField>,
    meta: &mut ListMeta,
) -> ArticleListQuery {
    let Some(field) = field else {
        return query;
    };

    let order = SortOrder::from_param(params.sort_order.as_deref());
    if params.sort_order_supplied() {
        meta.sort = Some(SortMeta {
            field: field.as_str().to_string(),
            order: order.as_str().to_string(),
        });
    }

    query.sorted(Some(ArticleSort { field, order }))
}

fn paginate_stage(query: ArticleListQuery, params: &ListArticlesQuery) -> ArticleListQuery {
    query.paginated(Pagination::from_params(
        params.page.as_deref(),
        params.per_page.as_deref(),
    ))
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let plan = ListPlan::build(&query).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected article listing parameters");
        })?;
        tracing::debug!(query = ?plan.query, "listing articles");

        let page = self.read_repo.list(&plan.query).await?;
        Ok(plan.assemble(page))
    }
}
