//! Sample data backing every view
//!
//! The vault has no persistence layer; these lists are rebuilt whenever a view is
//! mounted, so likes and views never survive a restart.

use crate::models::snippet::date;
use crate::models::{AiSearchResult, Developer, Snippet, SnippetLanguage};

pub const DEMO_AUTHOR: &str = "Vansh Singh";

pub const TRENDING_TAGS: [&str; 10] = [
    "react",
    "python",
    "typescript",
    "css",
    "node.js",
    "machine-learning",
    "animation",
    "hooks",
    "sql",
    "docker",
];

pub const POPULAR_TAGS: [&str; 8] = [
    "react",
    "hooks",
    "javascript",
    "typescript",
    "css",
    "python",
    "api",
    "utils",
];

pub const AI_SUGGESTIONS: [&str; 6] = [
    "Find React hooks for state management",
    "Show me Python data visualization snippets",
    "CSS animations for loading spinners",
    "SQL queries for user analytics",
    "JavaScript utility functions",
    "TypeScript interface examples",
];

/// Headline figures on the landing page: (value, label)
/// Platform-wide figures shown above the community feed
pub const COMMUNITY_STATS: [(&str, &str); 4] = [
    ("15,234", "Active Developers"),
    ("52,891", "Public Snippets"),
    ("234,567", "Total Likes"),
    ("1.2M", "Monthly Views"),
];

pub const HERO_STATS: [(&str, &str); 4] = [
    ("50K+", "Code Snippets"),
    ("15K+", "Developers"),
    ("200+", "Languages"),
    ("99.9%", "Uptime"),
];

pub const HERO_FEATURES: [&str; 3] = [
    "AI-Powered Search",
    "Team Collaboration",
    "Version Control",
];

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn snippet(
    id: &str,
    title: &str,
    description: &str,
    language: SnippetLanguage,
    code: &str,
    tag_list: &[&str],
    is_public: bool,
    created: (i32, u32, u32),
    updated: (i32, u32, u32),
    author: &str,
    (likes, forks, views): (u32, u32, u32),
) -> Snippet {
    Snippet {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        language,
        code: code.to_string(),
        tags: tags(tag_list),
        is_public,
        created_at: date(created.0, created.1, created.2),
        updated_at: date(updated.0, updated.1, updated.2),
        author: author.to_string(),
        likes,
        forks,
        views,
    }
}

/// The signed-in user's own snippets, shown on the dashboard
pub fn dashboard_snippets() -> Vec<Snippet> {
    vec![
        snippet(
            "1",
            "React useEffect Hook Pattern",
            "Advanced useEffect pattern for handling async operations with cleanup",
            SnippetLanguage::React,
            USE_EFFECT_CODE,
            &["react", "hooks", "async", "cleanup"],
            true,
            (2024, 1, 15),
            (2024, 1, 16),
            DEMO_AUTHOR,
            (234, 45, 1200),
        ),
        snippet(
            "2",
            "Python Data Processing Pipeline",
            "Efficient data processing pipeline with pandas and error handling",
            SnippetLanguage::Python,
            PANDAS_PIPELINE_CODE,
            &["python", "pandas", "data-processing", "pipeline"],
            false,
            (2024, 1, 14),
            (2024, 1, 14),
            DEMO_AUTHOR,
            (156, 23, 890),
        ),
        snippet(
            "3",
            "CSS Grid Layout Template",
            "Responsive CSS Grid layout with modern design patterns",
            SnippetLanguage::Css,
            CSS_GRID_CODE,
            &["css", "grid", "responsive", "modern"],
            true,
            (2024, 1, 13),
            (2024, 1, 13),
            DEMO_AUTHOR,
            (89, 12, 567),
        ),
        snippet(
            "4",
            "SQL Optimization Query",
            "Optimized SQL query for complex joins and aggregations",
            SnippetLanguage::Sql,
            SQL_RANKED_SALES_CODE,
            &["sql", "optimization", "cte", "performance"],
            true,
            (2024, 1, 12),
            (2024, 1, 12),
            DEMO_AUTHOR,
            (445, 67, 2100),
        ),
    ]
}

/// Public snippets from other developers, in trending order
pub fn community_snippets() -> Vec<Snippet> {
    vec![
        snippet(
            "c1",
            "Advanced React Custom Hooks",
            "Collection of powerful custom hooks for React applications",
            SnippetLanguage::React,
            CUSTOM_HOOKS_CODE,
            &["react", "hooks", "custom", "utilities"],
            true,
            (2024, 1, 15),
            (2024, 1, 16),
            "Alex Rodriguez",
            (1240, 185, 5600),
        ),
        snippet(
            "c2",
            "Machine Learning Data Pipeline",
            "Complete ML pipeline with preprocessing and model training",
            SnippetLanguage::Python,
            ML_PIPELINE_CODE,
            &["python", "machine-learning", "scikit-learn", "pipeline"],
            true,
            (2024, 1, 14),
            (2024, 1, 14),
            "Sarah Chen",
            (890, 145, 3200),
        ),
        snippet(
            "c3",
            "Modern CSS Animation Library",
            "Lightweight CSS animations with GPU acceleration",
            SnippetLanguage::Css,
            CSS_ANIMATIONS_CODE,
            &["css", "animations", "gpu", "performance"],
            true,
            (2024, 1, 13),
            (2024, 1, 13),
            "Mike Johnson",
            (567, 89, 2100),
        ),
    ]
}

pub fn featured_developers() -> Vec<Developer> {
    let developer = |name: &str, avatar: &str, snippets, followers, total_likes, specs: &[&str]| {
        Developer {
            name: name.to_string(),
            avatar: avatar.to_string(),
            snippets,
            followers,
            total_likes,
            specialties: tags(specs),
        }
    };

    vec![
        developer(
            "Alex Rodriguez",
            "AR",
            45,
            1200,
            5600,
            &["React", "TypeScript", "Node.js"],
        ),
        developer(
            "Sarah Chen",
            "SC",
            32,
            890,
            4200,
            &["Python", "ML", "Data Science"],
        ),
        developer(
            "Mike Johnson",
            "MJ",
            28,
            650,
            3100,
            &["CSS", "Animation", "Design"],
        ),
    ]
}

/// The fixed answer to every AI search, whatever was asked
pub fn ai_search_results() -> Vec<AiSearchResult> {
    let result = |id: &str,
                  title: &str,
                  description: &str,
                  language,
                  code: &str,
                  tag_list: &[&str],
                  relevance_score,
                  author: &str,
                  likes,
                  views| AiSearchResult {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        language,
        code: code.to_string(),
        tags: tags(tag_list),
        relevance_score,
        author: author.to_string(),
        likes,
        views,
    };

    vec![
        result(
            "ai1",
            "Advanced React State Management Hook",
            "Custom hook for complex state management with undo/redo functionality",
            SnippetLanguage::React,
            STATE_HISTORY_CODE,
            &["react", "hooks", "state-management", "undo-redo"],
            98,
            "Sarah Chen",
            456,
            2300,
        ),
        result(
            "ai2",
            "Python Data Visualization Utility",
            "Comprehensive plotting functions for data analysis and visualization",
            SnippetLanguage::Python,
            DATA_VISUALIZER_CODE,
            &["python", "matplotlib", "seaborn", "data-visualization"],
            95,
            "Mike Johnson",
            234,
            1890,
        ),
        result(
            "ai3",
            "CSS Loading Animation Collection",
            "Modern CSS-only loading animations with smooth transitions",
            SnippetLanguage::Css,
            LOADING_ANIMATIONS_CODE,
            &["css", "animations", "loading", "spinners"],
            92,
            "Alex Rodriguez",
            123,
            1567,
        ),
    ]
}

const USE_EFFECT_CODE: &str = r#"useEffect(() => {
  let cancelled = false;

  const fetchData = async () => {
    try {
      const result = await api.getData();
      if (!cancelled) {
        setData(result);
      }
    } catch (error) {
      if (!cancelled) {
        setError(error);
      }
    }
  };

  fetchData();

  return () => {
    cancelled = true;
  };
}, []);"#;

const PANDAS_PIPELINE_CODE: &str = r#"import pandas as pd
from typing import Optional

def process_data(df: pd.DataFrame) -> Optional[pd.DataFrame]:
    try:
        # Clean data
        df_clean = df.dropna()

        # Transform
        df_clean['processed'] = df_clean['value'].apply(
            lambda x: x * 2 if x > 0 else 0
        )

        return df_clean

    except Exception as e:
        print(f"Error processing data: {e}")
        return None"#;

const CSS_GRID_CODE: &str = r#".grid-container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  padding: 2rem;
}

.grid-item {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  border-radius: 12px;
  padding: 1.5rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
  transition: transform 0.3s ease;
}

.grid-item:hover {
  transform: translateY(-5px);
}"#;

const SQL_RANKED_SALES_CODE: &str = r#"WITH ranked_sales AS (
  SELECT
    product_id,
    customer_id,
    sale_amount,
    sale_date,
    ROW_NUMBER() OVER (
      PARTITION BY product_id
      ORDER BY sale_amount DESC
    ) as rank
  FROM sales s
  WHERE sale_date >= CURRENT_DATE - INTERVAL '30 days'
),
top_sales AS (
  SELECT *
  FROM ranked_sales
  WHERE rank <= 5
)
SELECT
  p.product_name,
  c.customer_name,
  ts.sale_amount,
  ts.sale_date
FROM top_sales ts
JOIN products p ON ts.product_id = p.id
JOIN customers c ON ts.customer_id = c.id
ORDER BY ts.sale_amount DESC;"#;

const CUSTOM_HOOKS_CODE: &str = r#"export const useDebounce = (value, delay) => {
  const [debouncedValue, setDebouncedValue] = useState(value);

  useEffect(() => {
    const handler = setTimeout(() => {
      setDebouncedValue(value);
    }, delay);

    return () => {
      clearTimeout(handler);
    };
  }, [value, delay]);

  return debouncedValue;
};

export const useLocalStorage = (key, initialValue) => {
  const [storedValue, setStoredValue] = useState(() => {
    try {
      const item = window.localStorage.getItem(key);
      return item ? JSON.parse(item) : initialValue;
    } catch (error) {
      console.log(error);
      return initialValue;
    }
  });

  const setValue = (value) => {
    try {
      setStoredValue(value);
      window.localStorage.setItem(key, JSON.stringify(value));
    } catch (error) {
      console.log(error);
    }
  };

  return [storedValue, setValue];
};"#;

const ML_PIPELINE_CODE: &str = r#"import pandas as pd
from sklearn.model_selection import train_test_split
from sklearn.preprocessing import StandardScaler
from sklearn.ensemble import RandomForestClassifier
from sklearn.metrics import classification_report

class MLPipeline:
    def __init__(self):
        self.scaler = StandardScaler()
        self.model = RandomForestClassifier(
            n_estimators=100,
            random_state=42
        )

    def preprocess(self, X):
        return self.scaler.fit_transform(X)

    def train(self, X, y):
        X_scaled = self.preprocess(X)
        X_train, X_test, y_train, y_test = train_test_split(
            X_scaled, y, test_size=0.2, random_state=42
        )

        self.model.fit(X_train, y_train)
        predictions = self.model.predict(X_test)

        return classification_report(y_test, predictions)"#;

const CSS_ANIMATIONS_CODE: &str = r#"/* Modern CSS Animations */
@keyframes slideInUp {
  from {
    opacity: 0;
    transform: translate3d(0, 100%, 0);
  }
  to {
    opacity: 1;
    transform: translate3d(0, 0, 0);
  }
}

@keyframes bounceIn {
  0%, 20%, 40%, 60%, 80%, 100% {
    transition-timing-function: cubic-bezier(0.215, 0.61, 0.355, 1);
  }
  0% {
    opacity: 0;
    transform: scale3d(0.3, 0.3, 0.3);
  }
  20% {
    transform: scale3d(1.1, 1.1, 1.1);
  }
  40% {
    transform: scale3d(0.9, 0.9, 0.9);
  }
  60% {
    opacity: 1;
    transform: scale3d(1.03, 1.03, 1.03);
  }
  80% {
    transform: scale3d(0.97, 0.97, 0.97);
  }
  100% {
    opacity: 1;
    transform: scale3d(1, 1, 1);
  }
}

.animate-slide-up {
  animation: slideInUp 0.6s ease-out;
}

.animate-bounce-in {
  animation: bounceIn 0.75s ease-in-out;
}"#;

const STATE_HISTORY_CODE: &str = r#"const useStateHistory = (initialState) => {
  const [history, setHistory] = useState([initialState]);
  const [currentIndex, setCurrentIndex] = useState(0);

  const currentState = history[currentIndex];

  const setState = (newState) => {
    const newHistory = history.slice(0, currentIndex + 1);
    newHistory.push(newState);
    setHistory(newHistory);
    setCurrentIndex(newHistory.length - 1);
  };

  const undo = () => {
    if (currentIndex > 0) {
      setCurrentIndex(currentIndex - 1);
    }
  };

  const redo = () => {
    if (currentIndex < history.length - 1) {
      setCurrentIndex(currentIndex + 1);
    }
  };

  return {
    state: currentState,
    setState,
    undo,
    redo,
    canUndo: currentIndex > 0,
    canRedo: currentIndex < history.length - 1
  };
};"#;

const DATA_VISUALIZER_CODE: &str = r#"import matplotlib.pyplot as plt
import seaborn as sns
import pandas as pd

class DataVisualizer:
    def __init__(self, figsize=(12, 8)):
        plt.style.use('seaborn-v0_8')
        self.figsize = figsize

    def plot_correlation_heatmap(self, df, title="Correlation Matrix"):
        plt.figure(figsize=self.figsize)
        correlation_matrix = df.corr()

        sns.heatmap(
            correlation_matrix,
            annot=True,
            cmap='coolwarm',
            center=0,
            square=True,
            fmt='.2f'
        )

        plt.title(title, fontsize=16, fontweight='bold')
        plt.tight_layout()
        return plt

    def plot_distribution(self, data, column, bins=30):
        fig, (ax1, ax2) = plt.subplots(1, 2, figsize=self.figsize)

        # Histogram
        ax1.hist(data[column], bins=bins, alpha=0.7, color='skyblue')
        ax1.set_title(f'Distribution of {column}')
        ax1.set_xlabel(column)
        ax1.set_ylabel('Frequency')

        # Box plot
        ax2.boxplot(data[column])
        ax2.set_title(f'Box Plot of {column}')
        ax2.set_ylabel(column)

        plt.tight_layout()
        return fig"#;

const LOADING_ANIMATIONS_CODE: &str = r#"/* Pulse Loading Animation */
.pulse-loader {
  display: inline-block;
  width: 40px;
  height: 40px;
  background-color: #3498db;
  border-radius: 50%;
  animation: pulse 1.5s ease-in-out infinite;
}

@keyframes pulse {
  0% {
    transform: scale(0);
    opacity: 1;
  }
  100% {
    transform: scale(1);
    opacity: 0;
  }
}

/* Spinning Dots */
.dot-spinner {
  display: inline-block;
  position: relative;
  width: 80px;
  height: 80px;
}

.dot-spinner div {
  position: absolute;
  top: 33px;
  width: 13px;
  height: 13px;
  border-radius: 50%;
  background: #3498db;
  animation-timing-function: cubic-bezier(0, 1, 1, 0);
}

.dot-spinner div:nth-child(1) {
  left: 8px;
  animation: dot1 0.6s infinite;
}

.dot-spinner div:nth-child(2) {
  left: 8px;
  animation: dot2 0.6s infinite;
}

.dot-spinner div:nth-child(3) {
  left: 32px;
  animation: dot2 0.6s infinite;
}

.dot-spinner div:nth-child(4) {
  left: 56px;
  animation: dot3 0.6s infinite;
}

@keyframes dot1 {
  0% { transform: scale(0); }
  100% { transform: scale(1); }
}

@keyframes dot3 {
  0% { transform: scale(1); }
  100% { transform: scale(0); }
}

@keyframes dot2 {
  0% { transform: translate(0, 0); }
  100% { transform: translate(24px, 0); }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique_within_each_list() {
        let dashboard: HashSet<_> = dashboard_snippets().into_iter().map(|s| s.id).collect();
        assert_eq!(dashboard.len(), 4);

        let community: HashSet<_> = community_snippets().into_iter().map(|s| s.id).collect();
        assert_eq!(community.len(), 3);
    }

    #[test]
    fn test_ai_results_are_ordered_by_relevance() {
        let results = ai_search_results();
        assert_eq!(results.len(), 3);
        assert!(
            results
                .windows(2)
                .all(|w| w[0].relevance_score >= w[1].relevance_score)
        );
    }

    #[test]
    fn test_dashboard_snippets_belong_to_demo_author() {
        assert!(
            dashboard_snippets()
                .iter()
                .all(|s| s.author == DEMO_AUTHOR && !s.title.is_empty())
        );
    }
}
