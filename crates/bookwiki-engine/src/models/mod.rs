pub mod article;
pub mod block;
pub mod category;

pub use article::{Article, ArticleId};
pub use block::{BlockId, BlockKind, ContentBlock, InfoboxEntry};
pub use category::{Category, SubCategory, find_subcategory};
