//! Content loader - builds the article list from the source directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Article, FrontMatter};
use crate::Site;

/// Loads articles from `source/_posts`
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all published articles, in directory walk order
    pub fn load_articles(&self) -> Result<Vec<Article>> {
        let posts_dir = self.site.source_dir.join("_posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_article(path) {
                Ok(Some(article)) => articles.push(article),
                Ok(None) => tracing::debug!("Skipping unpublished {:?}", path),
                Err(e) => tracing::warn!("Failed to load article {:?}: {}", path, e),
            }
        }

        Ok(articles)
    }

    /// Load a single article, `None` when it is marked unpublished
    fn load_article(&self, path: &Path) -> Result<Option<Article>> {
        let content = fs::read_to_string(path)?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let published = fm
            .parse_date()
            .or(file_modified)
            .unwrap_or_else(Local::now);
        let modified = fm.parse_updated().or(file_modified).unwrap_or(published);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let category = fm
            .category
            .first()
            .cloned()
            .unwrap_or_else(|| self.site.config.default_category.clone());

        let url = match &fm.url {
            Some(url) => url.clone(),
            None => self.article_url(&category, stem),
        };

        let mut article = Article::new(
            url,
            category,
            fm.title.clone().unwrap_or_else(|| stem.to_string()),
            published,
        );
        article.modified = modified;
        article.description = fm.description.clone().unwrap_or_default();
        article.tags = fm.tags_text();

        Ok(Some(article))
    }

    /// `{root}{category}/{stem}/`, both slugified
    fn article_url(&self, category: &str, stem: &str) -> String {
        format!(
            "{}/{}/{}/",
            self.site.config.root.trim_end_matches('/'),
            slug::slugify(category),
            slug::slugify(stem)
        )
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let posts = dir.join("source").join("_posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_posts_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let articles = ContentLoader::new(&site).load_articles().unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_load_articles() {
        let tmp = TempDir::new().unwrap();
        write_post(
            tmp.path(),
            "Hello World.md",
            "---\ntitle: Hello\ndescription: Greeting\ncategory: Getting Started\ntags: [intro, rust]\ndate: 2024-01-01\nupdated: 2024-02-01\n---\nBody\n",
        );
        write_post(
            tmp.path(),
            "draft.md",
            "---\ntitle: Draft\npublished: false\n---\nBody\n",
        );
        write_post(
            tmp.path(),
            "pinned.md",
            "---\ntitle: Pinned\nurl: /pinned/\n---\nBody\n",
        );
        write_post(tmp.path(), "notes.txt", "not an article");

        let site = Site::new(tmp.path()).unwrap();
        let articles = ContentLoader::new(&site).load_articles().unwrap();
        assert_eq!(articles.len(), 2);

        let hello = &articles[0];
        assert_eq!(hello.title, "Hello");
        assert_eq!(hello.url, "/getting-started/hello-world/");
        assert_eq!(hello.category, "Getting Started");
        assert_eq!(hello.tags, "intro, rust");
        assert_eq!(hello.description, "Greeting");
        assert!(hello.modified > hello.published);

        let pinned = &articles[1];
        assert_eq!(pinned.url, "/pinned/");
        assert_eq!(pinned.category, "uncategorized");
    }
}
