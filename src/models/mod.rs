pub mod developer;
pub mod fixtures;
pub mod search_result;
pub mod snippet;

pub use developer::Developer;
pub use search_result::AiSearchResult;
pub use snippet::{Snippet, SnippetLanguage};
