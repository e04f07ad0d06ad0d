//! Run the article search from the terminal

use anyhow::Result;

use crate::search::{Activation, SearchWidget, SelectionPolicy};
use crate::Site;

/// Options for a terminal search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Query typed into the search box
    pub query: String,
    /// Jump straight to a "Recently updated" category instead of typing
    pub category: Option<usize>,
    /// Commit the option at this index of the results
    pub select: Option<usize>,
    /// Last key pressed before a keyboard commit; pointer activation if unset
    pub key: Option<String>,
    pub any_commit: bool,
}

/// Print the results panel and, when selecting, the navigation target
pub fn run(site: &Site, options: &SearchOptions) -> Result<()> {
    let articles = site.articles()?;
    let policy = if options.any_commit {
        SelectionPolicy::AnyCommit
    } else {
        SelectionPolicy::RequireEnter
    };
    let mut widget = SearchWidget::new(&articles)
        .with_policy(policy)
        .with_recent_limit(site.config.recent_categories);

    let recent = widget.recent_categories();
    match options.category {
        Some(index) => {
            let Some(category) = recent.get(index) else {
                anyhow::bail!(
                    "No recent category at {} ({} available)",
                    index,
                    recent.len()
                );
            };
            widget.select_category(category);
        }
        None => widget.input(&options.query),
    }

    print!("{}", widget.render_listing());

    if let Some(index) = options.select {
        let activation = match &options.key {
            Some(key) => {
                widget.key_down(key);
                Activation::Keyboard
            }
            None => Activation::Pointer,
        };
        let mut navigate = |url: &str| println!("Navigate: {}", url);
        if widget.select(index, activation, &mut navigate).is_none() {
            println!("No navigation");
        }
    }

    if options.query.is_empty() && options.category.is_none() {
        println!();
        println!("Recently updated:");
        for (i, category) in recent.iter().enumerate() {
            println!("  {}. {}", i, category);
        }
    }

    Ok(())
}
