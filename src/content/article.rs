//! Article model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A searchable article as handed to the search widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Navigation target, unique per article
    pub url: String,

    /// Grouping label shown in "Recently updated"
    pub category: String,

    pub title: String,

    pub description: String,

    /// Free-text tags, comma separated
    pub tags: String,

    /// Publication date
    pub published: DateTime<Local>,

    /// Last updated date, drives recency ordering
    pub modified: DateTime<Local>,
}

impl Article {
    /// Create an article with empty description and tags
    pub fn new(
        url: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        published: DateTime<Local>,
    ) -> Self {
        Self {
            url: url.into(),
            category: category.into(),
            title: title.into(),
            description: String::new(),
            tags: String::new(),
            published,
            modified: published,
        }
    }

    /// Date label in the `Mon Jan 15 2024` form used in the dropdown
    pub fn modified_label(&self) -> String {
        self.modified.format("%a %b %d %Y").to_string()
    }

    /// The text fields a query is matched against
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.category, &self.title, &self.description, &self.tags]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_modified_label() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let article = Article::new("/rust/intro/", "Rust", "Intro", date);
        assert_eq!(article.modified_label(), "Mon Jan 15 2024");
    }

    #[test]
    fn test_new_defaults_modified_to_published() {
        let date = Local.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let article = Article::new("/a/", "A", "Title", date);
        assert_eq!(article.modified, article.published);
        assert!(article.tags.is_empty());
    }
}
