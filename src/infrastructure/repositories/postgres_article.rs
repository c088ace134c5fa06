// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, map_write_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleListQuery, ArticlePage,
    ArticleReadRepository, ArticleSort, ArticleStatus, ArticleTitle, ArticleWriteRepository,
    NewArticle, Pagination,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, body, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt =
            |err: DomainError| DomainError::Persistence(format!("invalid article row {id}: {err}"));

        Ok(Article {
            id: ArticleId::new(row.id).map_err(corrupt)?,
            title: ArticleTitle::new(Some(row.title)).map_err(corrupt)?,
            body: ArticleBody::new(row.body).map_err(corrupt)?,
            status: row.status.parse::<ArticleStatus>().map_err(corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            status,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, body, status, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(body.as_ref().map(ArticleBody::as_str))
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_write_sqlx(err, status.as_str()))?;

        Article::try_from(row)
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&ArticleFilter>) {
        match filter {
            None => {}
            Some(ArticleFilter::Status(value)) => {
                builder.push(" WHERE status = ");
                builder.push_bind(value.clone());
            }
            Some(ArticleFilter::CreatedAt(Some(at))) => {
                builder.push(" WHERE created_at = ");
                builder.push_bind(*at);
            }
            Some(ArticleFilter::CreatedAt(None)) => {
                builder.push(" WHERE FALSE");
            }
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: Option<&ArticleSort>) {
        match sort {
            Some(sort) => {
                builder.push(" ORDER BY ");
                builder.push(sort.field.column());
                builder.push(" ");
                builder.push(sort.order.sql());
                builder.push(", id ASC");
            }
            None => {
                builder.push(" ORDER BY id ASC");
            }
        }
    }

    fn apply_pagination(builder: &mut QueryBuilder<'_, Postgres>, pagination: Option<&Pagination>) {
        if let Some(page) = pagination {
            builder.push(" LIMIT ");
            builder.push_bind(i64::try_from(page.limit()).unwrap_or(i64::MAX));
            builder.push(" OFFSET ");
            builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        }
    }

    /// Filter, then sort, then paginate, with every request value bound.
    fn select_query(query: &ArticleListQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_filter(&mut builder, query.filter.as_ref());
        Self::apply_ordering(&mut builder, query.sort.as_ref());
        Self::apply_pagination(&mut builder, query.pagination.as_ref());
        builder
    }

    fn count_query(query: &ArticleListQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_filter(&mut builder, query.filter.as_ref());
        builder
    }
}

/// Page and count must come from the same snapshot, otherwise a concurrent
/// insert can make `total` disagree with the returned rows.
const SNAPSHOT_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list(&self, query: &ArticleListQuery) -> DomainResult<ArticlePage> {
        if query.pagination.is_none() {
            let rows = Self::select_query(query)
                .build_query_as::<ArticleRow>()
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;
            let articles = into_articles(rows)?;
            let total = articles.len() as u64;
            return Ok(ArticlePage { articles, total });
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query(SNAPSHOT_READ)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let rows = Self::select_query(query)
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let count: i64 = Self::count_query(query)
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(ArticlePage {
            articles: into_articles(rows)?,
            total: u64::try_from(count).unwrap_or_default(),
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}
