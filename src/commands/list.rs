//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::search::{recent_categories, sort_by_recency};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let articles = site.articles()?;
    let sorted = sort_by_recency(&articles);

    match content_type {
        "post" | "posts" => {
            println!("Articles ({}):", sorted.len());
            for article in &sorted {
                println!(
                    "  {} - {} [{}] {}",
                    article.modified.format("%Y-%m-%d"),
                    article.title,
                    article.category,
                    article.url
                );
            }
        }
        "category" | "categories" => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for article in &sorted {
                *counts.entry(article.category.as_str()).or_insert(0) += 1;
            }
            println!("Recently updated:");
            for (i, category) in recent_categories(&sorted, site.config.recent_categories)
                .iter()
                .enumerate()
            {
                println!("  {}. {} ({})", i + 1, category, counts[category]);
            }
            println!("Categories ({}):", counts.len());
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (category, count) in counts {
                println!("  {} ({})", category, count);
            }
        }
        "tag" | "tags" => {
            let mut tags: HashMap<&str, usize> = HashMap::new();
            for article in &sorted {
                for tag in article.tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    *tags.entry(tag).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag",
                content_type
            );
        }
    }

    Ok(())
}
