pub mod articles;
pub mod listing;
pub mod serde_time;

pub use articles::ArticleDto;
pub use listing::{ArticleListDto, FilterMeta, ListMeta, SortMeta};
