//! Article search widget
//!
//! Incremental, client-style filtering over an already loaded article list.
//! The widget keeps the query, open/closed state, the last key pressed and
//! the current selection. Navigation is delegated to a [`Navigator`] so the
//! selection logic stays free of platform side effects.

pub mod filter;

use std::fmt::Write as _;

use crate::content::Article;

pub use filter::{filter, includes, matches, normalize, recent_categories, sort_by_recency};

/// Text shown when a non-empty query matches nothing
pub const NO_ARTICLES_FOUND: &str = "No articles found";

/// Default length of the "Recently updated" category list
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Moves the browser (or whatever hosts the widget) to a new location
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, url: &str) {
        self(url)
    }
}

/// How a keyboard commit of an option is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Only navigate when the last key pressed in the input was Enter
    #[default]
    RequireEnter,
    /// Every committed selection navigates
    AnyCommit,
}

/// How an option was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Click or tap on the option
    Pointer,
    /// Committed from the keyboard (arrow keys + confirm)
    Keyboard,
}

/// What the results panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    Results(Vec<&'a Article>),
    NoArticlesFound,
}

/// Search box state over a fixed article snapshot
#[derive(Debug, Clone)]
pub struct SearchWidget<'a> {
    sorted: Vec<&'a Article>,
    recent_limit: usize,
    policy: SelectionPolicy,
    query: String,
    open: bool,
    last_key: Option<String>,
    selected: Option<&'a Article>,
}

impl<'a> SearchWidget<'a> {
    /// Create a widget over `articles`; the list may be empty
    pub fn new(articles: &'a [Article]) -> Self {
        Self {
            sorted: sort_by_recency(articles),
            recent_limit: DEFAULT_RECENT_LIMIT,
            policy: SelectionPolicy::default(),
            query: String::new(),
            open: false,
            last_key: None,
            selected: None,
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&'a Article> {
        self.selected
    }

    /// Articles ordered by `modified`, newest first
    pub fn sorted_by_recency(&self) -> &[&'a Article] {
        &self.sorted
    }

    /// Categories for the "Recently updated" shortcuts
    pub fn recent_categories(&self) -> Vec<&'a str> {
        recent_categories(&self.sorted, self.recent_limit)
    }

    /// Typing into the input replaces the query and opens the panel
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.open = true;
    }

    /// Record the most recent key pressed in the input
    pub fn key_down(&mut self, key: &str) {
        self.last_key = Some(key.to_string());
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dismiss the panel; the next open starts unfiltered
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Jump to a "Recently updated" category
    pub fn select_category(&mut self, category: &str) {
        self.query = category.to_string();
        self.open = true;
    }

    /// Articles currently visible in the panel
    pub fn visible(&self) -> Vec<&'a Article> {
        if self.query.is_empty() {
            self.sorted.clone()
        } else {
            filter(&self.sorted, &self.query)
        }
    }

    pub fn listing(&self) -> Listing<'a> {
        let visible = self.visible();
        if visible.is_empty() && !self.query.is_empty() {
            Listing::NoArticlesFound
        } else {
            Listing::Results(visible)
        }
    }

    /// Text shown in the input: the query while typing, else the selection
    pub fn display_value(&self) -> &str {
        if !self.query.is_empty() {
            return &self.query;
        }
        self.selected.map(|a| a.title.as_str()).unwrap_or_default()
    }

    /// Commit the option at `index` of the visible list.
    ///
    /// Returns the url navigated to, if any. A commit always records the
    /// selection and closes the panel, even when it does not navigate.
    pub fn select<N: Navigator>(
        &mut self,
        index: usize,
        activation: Activation,
        navigator: &mut N,
    ) -> Option<&'a str> {
        let article = *self.visible().get(index)?;

        self.selected = Some(article);
        self.close();

        let confirmed = match (activation, self.policy) {
            (Activation::Pointer, _) | (Activation::Keyboard, SelectionPolicy::AnyCommit) => true,
            (Activation::Keyboard, SelectionPolicy::RequireEnter) => {
                self.last_key.as_deref() == Some("Enter")
            }
        };

        if !confirmed || article.url.is_empty() {
            return None;
        }

        tracing::debug!("Navigating to {}", article.url);
        navigator.navigate(&article.url);
        Some(article.url.as_str())
    }

    /// Plain-text rendering of the results panel
    pub fn render_listing(&self) -> String {
        let mut out = String::new();
        match self.listing() {
            Listing::NoArticlesFound => {
                out.push_str(NO_ARTICLES_FOUND);
                out.push('\n');
            }
            Listing::Results(articles) => {
                for (i, article) in articles.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "{:>3}. {}  ({})  {}",
                        i,
                        article.title,
                        article.modified_label(),
                        article.url
                    );
                }
            }
        }
        out
    }
}
