use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored code snippet
///
/// `id` is only unique inside whichever list currently holds the record. Counters are
/// display data and are never written back anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language: SnippetLanguage,
    pub code: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: String,
    pub likes: u32,
    pub forks: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    JavaScript,
    TypeScript,
    Python,
    React,
    Vue,
    Angular,
    Css,
    Scss,
    Html,
    Sql,
    Bash,
    Php,
    Java,
    #[serde(rename = "c++")]
    Cpp,
    #[serde(rename = "c#")]
    CSharp,
    Go,
    Rust,
    Ruby,
    Kotlin,
    Swift,
}

const JAVASCRIPT_TEMPLATE: &str = r#"// JavaScript function template
function exampleFunction(param) {
  // Your code here
  return param;
}

// Usage
const result = exampleFunction("Hello World");
console.log(result);"#;

const REACT_TEMPLATE: &str = r#"import React, { useState, useEffect } from 'react';

const ExampleComponent = () => {
  const [data, setData] = useState(null);

  useEffect(() => {
    // Your effect logic here
  }, []);

  return (
    <div>
      {/* Your JSX here */}
    </div>
  );
};

export default ExampleComponent;"#;

const PYTHON_TEMPLATE: &str = r#"# Python function template
def example_function(param):
    """
    Example function description
    """
    # Your code here
    return param

# Usage
result = example_function("Hello World")
print(result)"#;

const CSS_TEMPLATE: &str = r#"/* CSS styles template */
.example-class {
  /* Your styles here */
  display: flex;
  align-items: center;
  justify-content: center;
}

/* Responsive design */
@media (max-width: 768px) {
  .example-class {
    flex-direction: column;
  }
}"#;

const SQL_TEMPLATE: &str = r#"-- SQL query template
SELECT
  column1,
  column2,
  COUNT(*) as total
FROM
  table_name
WHERE
  condition = 'value'
GROUP BY
  column1, column2
ORDER BY
  total DESC
LIMIT 10;"#;

impl SnippetLanguage {
    /// Every language the editor offers, in menu order
    pub const ALL: [SnippetLanguage; 20] = [
        SnippetLanguage::JavaScript,
        SnippetLanguage::TypeScript,
        SnippetLanguage::Python,
        SnippetLanguage::React,
        SnippetLanguage::Vue,
        SnippetLanguage::Angular,
        SnippetLanguage::Css,
        SnippetLanguage::Scss,
        SnippetLanguage::Html,
        SnippetLanguage::Sql,
        SnippetLanguage::Bash,
        SnippetLanguage::Php,
        SnippetLanguage::Java,
        SnippetLanguage::Cpp,
        SnippetLanguage::CSharp,
        SnippetLanguage::Go,
        SnippetLanguage::Rust,
        SnippetLanguage::Ruby,
        SnippetLanguage::Kotlin,
        SnippetLanguage::Swift,
    ];

    /// Stable lowercase identifier, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "javascript",
            SnippetLanguage::TypeScript => "typescript",
            SnippetLanguage::Python => "python",
            SnippetLanguage::React => "react",
            SnippetLanguage::Vue => "vue",
            SnippetLanguage::Angular => "angular",
            SnippetLanguage::Css => "css",
            SnippetLanguage::Scss => "scss",
            SnippetLanguage::Html => "html",
            SnippetLanguage::Sql => "sql",
            SnippetLanguage::Bash => "bash",
            SnippetLanguage::Php => "php",
            SnippetLanguage::Java => "java",
            SnippetLanguage::Cpp => "c++",
            SnippetLanguage::CSharp => "c#",
            SnippetLanguage::Go => "go",
            SnippetLanguage::Rust => "rust",
            SnippetLanguage::Ruby => "ruby",
            SnippetLanguage::Kotlin => "kotlin",
            SnippetLanguage::Swift => "swift",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        Self::ALL.iter().copied().find(|lang| lang.id() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "JavaScript",
            SnippetLanguage::TypeScript => "TypeScript",
            SnippetLanguage::Python => "Python",
            SnippetLanguage::React => "React",
            SnippetLanguage::Vue => "Vue",
            SnippetLanguage::Angular => "Angular",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Scss => "SCSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Sql => "SQL",
            SnippetLanguage::Bash => "Bash",
            SnippetLanguage::Php => "PHP",
            SnippetLanguage::Java => "Java",
            SnippetLanguage::Cpp => "C++",
            SnippetLanguage::CSharp => "C#",
            SnippetLanguage::Go => "Go",
            SnippetLanguage::Rust => "Rust",
            SnippetLanguage::Ruby => "Ruby",
            SnippetLanguage::Kotlin => "Kotlin",
            SnippetLanguage::Swift => "Swift",
        }
    }

    /// File extension used to pick a syntax definition for highlighting
    pub fn file_extension(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript | SnippetLanguage::React => "js",
            SnippetLanguage::TypeScript | SnippetLanguage::Angular => "ts",
            SnippetLanguage::Python => "py",
            SnippetLanguage::Vue => "vue",
            SnippetLanguage::Css => "css",
            SnippetLanguage::Scss => "scss",
            SnippetLanguage::Html => "html",
            SnippetLanguage::Sql => "sql",
            SnippetLanguage::Bash => "sh",
            SnippetLanguage::Php => "php",
            SnippetLanguage::Java => "java",
            SnippetLanguage::Cpp => "cpp",
            SnippetLanguage::CSharp => "cs",
            SnippetLanguage::Go => "go",
            SnippetLanguage::Rust => "rs",
            SnippetLanguage::Ruby => "rb",
            SnippetLanguage::Kotlin => "kt",
            SnippetLanguage::Swift => "swift",
        }
    }

    /// Boilerplate the editor starts from. Languages without one start empty.
    pub fn template(&self) -> Option<&'static str> {
        match self {
            SnippetLanguage::JavaScript => Some(JAVASCRIPT_TEMPLATE),
            SnippetLanguage::React => Some(REACT_TEMPLATE),
            SnippetLanguage::Python => Some(PYTHON_TEMPLATE),
            SnippetLanguage::Css => Some(CSS_TEMPLATE),
            SnippetLanguage::Sql => Some(SQL_TEMPLATE),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        let index = self.position();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = self.position();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|lang| lang == self)
            .unwrap_or_default()
    }
}

impl Default for SnippetLanguage {
    fn default() -> Self {
        SnippetLanguage::JavaScript
    }
}

impl std::fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Snippet {
    /// Case-insensitive substring match over title, description and tags.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// First `max_lines` lines of code, for card previews
    pub fn preview(&self, max_lines: usize) -> String {
        self.code
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Midnight UTC on the given calendar day; fixtures only carry dates.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snippet {
        Snippet {
            id: "1".to_string(),
            title: "React useEffect Hook Pattern".to_string(),
            description: "Advanced pattern for async cleanup".to_string(),
            language: SnippetLanguage::React,
            code: "line one\nline two\nline three".to_string(),
            tags: vec!["hooks".to_string(), "Async".to_string()],
            is_public: true,
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 16),
            author: "Vansh Singh".to_string(),
            likes: 1,
            forks: 2,
            views: 3,
        }
    }

    #[test]
    fn test_matches_query_is_case_insensitive_across_fields() {
        let snippet = sample();
        assert!(snippet.matches_query("REACT"));
        assert!(snippet.matches_query("cleanup"));
        assert!(snippet.matches_query("async"));
        assert!(!snippet.matches_query("python"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(sample().matches_query(""));
    }

    #[test]
    fn test_language_ids_round_trip() {
        for lang in SnippetLanguage::ALL {
            assert_eq!(SnippetLanguage::from_id(lang.id()), Some(lang));
        }
        assert_eq!(SnippetLanguage::from_id("C++"), Some(SnippetLanguage::Cpp));
        assert_eq!(SnippetLanguage::from_id("cobol"), None);
    }

    #[test]
    fn test_only_five_languages_have_templates() {
        let with_templates: Vec<_> = SnippetLanguage::ALL
            .iter()
            .filter(|lang| lang.template().is_some())
            .collect();
        assert_eq!(with_templates.len(), 5);
        assert!(SnippetLanguage::Rust.template().is_none());
    }

    #[test]
    fn test_language_cycling_wraps() {
        assert_eq!(SnippetLanguage::Swift.next(), SnippetLanguage::JavaScript);
        assert_eq!(SnippetLanguage::JavaScript.previous(), SnippetLanguage::Swift);
    }

    #[test]
    fn test_serializes_with_camel_case_and_language_ids() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isPublic"], true);
        assert_eq!(json["language"], "react");

        let mut cpp = sample();
        cpp.language = SnippetLanguage::Cpp;
        let json = serde_json::to_value(cpp).unwrap();
        assert_eq!(json["language"], "c++");
    }

    #[test]
    fn test_preview_takes_leading_lines() {
        let snippet = sample();
        assert_eq!(snippet.preview(2), "line one\nline two");
        assert_eq!(snippet.line_count(), 3);
    }
}
