pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use listing::{
    ArticleFilter, ArticleListQuery, ArticleSort, FilterField, Pagination, SortField, SortOrder,
    validate_filter_field, validate_sort_field,
};
pub use repository::{ArticlePage, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
