mod list;
mod service;

pub use list::{ListArticlesQuery, ListPlan};
pub use service::ArticleQueryService;
