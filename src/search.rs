//! Genre search: an optional term becomes a case-insensitive substring filter.
//!
//! SQLite's `LIKE` folds ASCII letters only, so non-ASCII characters compare exactly.

use sea_orm::{
    Condition,
    sea_query::{Expr, LikeExpr},
};
use serde::Deserialize;

use crate::entities::movie;

const LIKE_ESCAPE: char = '\\';

/// Query string of the search page (`/search/?genre=...`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenreQuery {
    #[serde(default)]
    genre: Option<String>,
}

impl GenreQuery {
    pub fn new(genre: impl Into<String>) -> Self {
        Self { genre: Some(genre.into()) }
    }

    /// The raw term as submitted, echoed back to the page.
    pub fn term(&self) -> &str {
        self.genre.as_deref().unwrap_or_default()
    }

    /// `None` when the term is absent or empty: an empty search matches nothing.
    pub fn condition(&self) -> Option<Condition> {
        let term = self.term();
        if term.is_empty() {
            return None;
        }

        let pattern = format!("%{}%", escape_like(term));
        let expr =
            Expr::col(movie::Column::Genre).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE));
        Some(Condition::all().add(expr))
    }

    /// In-memory counterpart of [`GenreQuery::condition`].
    pub fn matches(&self, genre: &str) -> bool {
        let term = self.term();
        !term.is_empty() && genre.to_ascii_lowercase().contains(&term.to_ascii_lowercase())
    }
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_term_has_no_condition() {
        assert!(GenreQuery::default().condition().is_none());
        assert!(GenreQuery::new("").condition().is_none());
        assert_eq!(GenreQuery::default().term(), "");
    }

    #[test]
    fn term_is_echoed_verbatim() {
        assert_eq!(GenreQuery::new(" Sci-Fi").term(), " Sci-Fi");
        assert!(GenreQuery::new("drama").condition().is_some());
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
        assert_eq!(escape_like("Drama"), "Drama");
    }

    #[test]
    fn in_memory_match_is_case_insensitive_containment() {
        let q = GenreQuery::new("drama");
        assert!(q.matches("Drama"));
        assert!(q.matches("Romantic DRAMA"));
        assert!(!q.matches("Sci-Fi"));
        assert!(!GenreQuery::new("").matches("Drama"));
    }

    #[test]
    fn in_memory_match_folds_ascii_only() {
        assert!(GenreQuery::new("ÉPOPÉE").matches("Épopée ÉPOPÉE"));
        assert!(GenreQuery::new("ÉPopÉe").matches("ÉPOPÉE"));
        assert!(!GenreQuery::new("épopée").matches("ÉPOPÉE"));
    }
}
