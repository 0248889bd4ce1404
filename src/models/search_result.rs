use crate::models::SnippetLanguage;
use serde::{Deserialize, Serialize};

/// A snippet as surfaced by the AI search, carrying its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language: SnippetLanguage,
    pub code: String,
    pub tags: Vec<String>,
    /// Percentage, 0-100
    pub relevance_score: u8,
    pub author: String,
    pub likes: u32,
    pub views: u32,
}
