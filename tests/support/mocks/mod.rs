// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート

pub mod article_repos;
pub mod time;

pub use article_repos::FailingArticleRepo;
pub use time::{SteppingClock, fixed_now};
