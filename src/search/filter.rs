//! Query matching, recency ordering and category shortcuts

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::content::Article;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Lower-case and drop all whitespace
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Whether `needle` occurs in `haystack` once both are normalized
pub fn includes(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// Whether the query occurs in the category, title, description or tags
pub fn matches(article: &Article, query: &str) -> bool {
    let query = normalize(query);
    article
        .searchable_fields()
        .iter()
        .any(|field| normalize(field).contains(&query))
}

/// Newest `modified` first; equal timestamps keep their input order
pub fn sort_by_recency(articles: &[Article]) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| b.modified.cmp(&a.modified));
    sorted
}

/// First `limit` distinct categories, in order of first appearance
pub fn recent_categories<'a>(sorted: &[&'a Article], limit: usize) -> Vec<&'a str> {
    sorted
        .iter()
        .map(|article| article.category.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .take(limit)
        .collect()
}

/// Articles matching the query, preserving the order of `articles`
pub fn filter<'a>(articles: &[&'a Article], query: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .copied()
        .filter(|article| matches(article, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, TimeZone};

    fn article(url: &str, category: &str, title: &str, days: i64) -> Article {
        let base = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut article = Article::new(url, category, title, base);
        article.modified = base + Duration::days(days);
        article
    }

    fn fixture() -> Vec<Article> {
        let mut tagged = article("/rust/ownership/", "Rust", "Ownership Explained", 3);
        tagged.tags = "borrow checker, lifetimes".to_string();
        let mut described = article("/ops/nginx/", "Ops", "Reverse proxies", 5);
        described.description = "Setting up Nginx in front of an app".to_string();
        vec![
            article("/rust/intro/", "Rust", "Getting Started", 1),
            tagged,
            described,
            article("/go/intro/", "Go", "Hello Go", 5),
            article("/linux/kernel/", "Linux", "Kernel Modules", 2),
            article("/web/css/", "Web", "CSS Grid", 0),
            article("/db/pg/", "Databases", "Postgres Tuning", 4),
            article("/security/tls/", "Security", "TLS Basics", 6),
        ]
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello\tWorld \n"), "helloworld");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_includes_ignores_case_and_whitespace() {
        assert!(includes("Borrow Checker", "borrowcheck"));
        assert!(includes("borrowchecker", "BORROW check"));
        assert!(!includes("Borrow Checker", "lifetime"));
        assert!(includes("anything", ""));
    }

    #[test]
    fn test_matches_every_searchable_field() {
        let articles = fixture();
        assert!(matches(&articles[0], "rust"));
        assert!(matches(&articles[1], "lifetimes"));
        assert!(matches(&articles[2], "nginx"));
        assert!(matches(&articles[3], "hello go"));
        assert!(!matches(&articles[3], "rust"));
    }

    #[test]
    fn test_sort_by_recency_is_stable() {
        let articles = fixture();
        let sorted = sort_by_recency(&articles);
        let urls: Vec<_> = sorted.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/security/tls/",
                "/ops/nginx/",
                "/go/intro/",
                "/db/pg/",
                "/rust/ownership/",
                "/linux/kernel/",
                "/rust/intro/",
                "/web/css/",
            ]
        );
    }

    #[test]
    fn test_recent_categories_distinct_and_bounded() {
        let articles = fixture();
        let sorted = sort_by_recency(&articles);
        let recent = recent_categories(&sorted, 5);
        assert_eq!(recent, vec!["Security", "Ops", "Go", "Databases", "Rust"]);

        let all = recent_categories(&sorted, usize::MAX);
        let unique: IndexSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all.len(), 7);

        assert!(recent_categories(&[], 5).is_empty());
    }

    #[test]
    fn test_filter_keeps_order_and_is_idempotent() {
        let articles = fixture();
        let sorted = sort_by_recency(&articles);
        let once = filter(&sorted, "rust");
        let urls: Vec<_> = once.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["/rust/ownership/", "/rust/intro/"]);

        for query in ["rust", "o", "TLS", "x y z", ""] {
            let once = filter(&sorted, query);
            let twice = filter(&once, query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_contains_every_substring_match() {
        let articles = fixture();
        let sorted = sort_by_recency(&articles);
        for article in &articles {
            for field in article.searchable_fields() {
                let normalized = normalize(field);
                if normalized.len() < 3 {
                    continue;
                }
                let query = &normalized[1..3];
                let result = filter(&sorted, query);
                assert!(result.iter().any(|a| a.url == article.url));
            }
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let articles = fixture();
        let sorted = sort_by_recency(&articles);
        assert_eq!(filter(&sorted, ""), sorted);
    }
}
