//! Recipe detail modal
//!
//! Holds what is local to one opening of the modal: the active tab, the
//! comment thread and the comment being typed. Recipe data itself stays in
//! the catalog and is looked up by id.

use crate::error::HubError;
use crate::seed::seed_comments;
use chrono::{DateTime, Utc};
use recipe_model::{Comment, CommentId, Recipe, RecipeId, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Details,
    Comments,
}

#[derive(Debug, Clone)]
pub struct DetailView {
    recipe_id: RecipeId,
    tab: DetailTab,
    comments: Vec<Comment>,
    pub pending_comment: String,
}

impl DetailView {
    /// Fresh view on the details tab with the starter comments
    #[must_use]
    pub fn open(recipe_id: RecipeId, now: DateTime<Utc>) -> Self {
        Self {
            recipe_id,
            tab: DetailTab::Details,
            comments: seed_comments(now),
            pending_comment: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn recipe_id(&self) -> &RecipeId {
        &self.recipe_id
    }

    #[inline]
    #[must_use]
    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    #[inline]
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// "Comments (3)"
    #[must_use]
    pub fn comments_label(&self) -> String {
        format!("Comments ({})", self.comments.len())
    }

    /// Post the pending comment as `author`
    ///
    /// # Errors
    /// - `EmptyComment` when the pending text is blank; nothing is appended
    pub fn post_comment(&mut self, author: &UserProfile, now: DateTime<Utc>) -> Result<&Comment, HubError> {
        let text = self.pending_comment.trim();
        if text.is_empty() {
            return Err(HubError::EmptyComment);
        }

        let comment = Comment::new(CommentId::generate(), author.as_author(), text, now);
        tracing::debug!(recipe = %self.recipe_id, comment = %comment.id, "comment posted");
        self.comments.push(comment);
        self.pending_comment.clear();
        Ok(&self.comments[self.comments.len() - 1])
    }
}

/// Purchase prompt, when `recipe` is still locked
#[must_use]
pub fn purchase_prompt(recipe: &Recipe, unlocked: bool, default_price: f64, currency: &str) -> Option<String> {
    (recipe.is_premium && !unlocked)
        .then(|| format!("Purchase for {}", format_price(recipe.price_or(default_price), currency)))
}

/// Two decimals followed by the currency code
#[must_use]
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{price:.2} {currency}")
}
