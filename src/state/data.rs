//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the gallery store and the UI layer.

/// Represents a single picture in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// Primary key, unique within the gallery
    pub id: i32,
    /// Display name of the author (trimmed, never empty)
    pub author: String,
    /// Opaque resource locator of the image (trimmed, never empty)
    pub url: String,
}

impl Picture {
    pub fn new(id: i32, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            url: url.into(),
        }
    }

    /// Case-insensitive substring match against the author name
    pub fn matches_author(&self, query: &str) -> bool {
        fold_case(&self.author).contains(&fold_case(query))
    }

    /// Case-insensitive url comparison, the rule used for uniqueness
    pub fn has_url(&self, url: &str) -> bool {
        fold_case(&self.url) == fold_case(url)
    }
}

/// Fold every char on its own, through upper then lower case.
///
/// Whole-string lowercasing is context-sensitive (final sigma), so a
/// literal substring could stop matching. Chars whose case mapping
/// expands to several chars are kept as-is, which keeps positions aligned.
fn fold_case(s: &str) -> String {
    s.chars().map(|c| lower(upper(c))).collect()
}

fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// The demo set every gallery starts with
pub fn sample_pictures() -> Vec<Picture> {
    vec![
        Picture::new(1, "Human 1", "https://i.pravatar.cc/300"),
        Picture::new(2, "Human 2", "https://i.pravatar.cc/306"),
        Picture::new(3, "Human 3", "https://i.pravatar.cc/302"),
        Picture::new(4, "Human 4", "https://i.pravatar.cc/303"),
        Picture::new(5, "Human 5", "https://i.pravatar.cc/308"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_author_ignores_case() {
        let picture = Picture::new(1, "Nina Simone", "http://x/img");
        assert!(picture.matches_author("nina"));
        assert!(picture.matches_author("SIMONE"));
        assert!(!picture.matches_author("bob"));
    }

    #[test]
    fn test_has_url_ignores_case() {
        let picture = Picture::new(1, "A", "http://x/IMG");
        assert!(picture.has_url("http://x/img"));
        assert!(!picture.has_url("http://x/img2"));
    }

    #[test]
    fn test_final_sigma_matches_any_sigma() {
        let picture = Picture::new(1, "ΟΔΟΣ", "u1");
        assert!(picture.matches_author("Σ"));
        assert!(picture.matches_author("σ"));
        assert!(picture.matches_author("ς"));
        assert!(picture.matches_author("οδος"));
    }

    #[test]
    fn test_greek_urls_compare_per_char() {
        let picture = Picture::new(1, "A", "ΑΣ");
        assert!(picture.has_url("ας"));
        assert!(picture.has_url("ασ"));
    }

    #[test]
    fn test_expanding_case_maps_keep_their_char() {
        let picture = Picture::new(1, "Straße", "u");
        assert!(picture.matches_author("STRAßE"));
        assert!(picture.matches_author("ße"));
    }

    #[test]
    fn test_sample_ids_are_one_to_five() {
        let ids: Vec<i32> = sample_pictures().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
