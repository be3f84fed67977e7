use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Topic area a post is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Notice,
    Qna,
    Free,
}

impl Category {
    pub const VARIANTS: [Category; 3] = [Category::Notice, Category::Qna, Category::Free];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Notice => "NOTICE",
            Category::Qna => "QNA",
            Category::Free => "FREE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::VARIANTS
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category filter for listing. `All` is a filter value only and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Post entity - a user-authored record on the board.
///
/// Serialized with camelCase field names; that layout is also the persisted
/// format, so renaming a field is a breaking change for existing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: Category,
    pub user_id: String,
    /// Author email, when the writer of the record supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Lexically sortable timestamp (RFC 3339, fixed width).
    pub created_at: String,
}

impl Post {
    /// Create a post owned by `user_id`, stamping a fresh id and the current time.
    pub fn new(data: NewPost, user_id: impl Into<String>) -> Self {
        Self {
            id: Self::generate_id(),
            title: data.title,
            body: data.body,
            category: data.category,
            user_id: user_id.into(),
            email: None,
            tags: data.tags,
            created_at: Self::timestamp_now(),
        }
    }

    pub fn generate_id() -> String {
        format!("post-{}", Uuid::new_v4().simple())
    }

    /// Current time as `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Merge the fields present in `patch` over this post.
    ///
    /// `id`, `user_id` and `created_at` are not part of a patch and never change.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Fields supplied by the caller when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.category.is_none() && self.tags.is_none()
    }
}

/// Maximum number of tags kept by [`parse_tags`].
pub const MAX_TAGS: usize = 5;
/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LEN: usize = 24;

/// Split a comma-separated tag list the way the post editor does.
///
/// Entries are trimmed, blanks and over-long tags dropped, the first
/// [`MAX_TAGS`] kept, then duplicates removed (case-sensitive, first wins).
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let candidates = input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| tag.chars().count() <= MAX_TAG_LEN)
        .take(MAX_TAGS);

    for tag in candidates {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            NewPost {
                title: "Hello".to_string(),
                body: "World".to_string(),
                category: Category::Free,
                tags: vec!["a".to_string()],
            },
            "user-1",
        )
    }

    #[test]
    fn test_new_post_stamps_id_and_timestamp() {
        let post = sample();
        assert!(post.id.starts_with("post-"));
        assert_eq!(post.user_id, "user-1");
        assert_eq!(post.created_at.len(), "2024-05-01T12:00:00.000Z".len());
        assert!(post.created_at.ends_with('Z'));
    }

    #[test]
    fn test_apply_keeps_identity_fields() {
        let mut post = sample();
        let before = post.clone();

        post.apply(PostPatch {
            title: Some("x".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "x");
        assert_eq!(post.body, before.body);
        assert_eq!(post.id, before.id);
        assert_eq!(post.user_id, before.user_id);
        assert_eq!(post.created_at, before.created_at);
    }

    #[test]
    fn test_persisted_layout_is_camel_case() {
        let post = sample();
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["category"], "FREE");
    }

    #[test]
    fn test_author_email_survives_round_trip() {
        let post = sample();
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("email").is_none());

        let raw = r#"{"id":"p1","title":"t","body":"","category":"QNA","userId":"user-1",
            "email":"writer@example.com","tags":[],"createdAt":"2024-01-01"}"#;
        let mut stored: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(stored.email.as_deref(), Some("writer@example.com"));

        stored.apply(PostPatch {
            body: Some("edited".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["email"], "writer@example.com");
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "qna".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Qna)
        );
        assert!("misc".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_parse_tags_normalizes_like_editor() {
        let long = "x".repeat(MAX_TAG_LEN + 1);
        let input = format!(" rust, , {long}, Rust, rust, a, b, c, d");
        // the repeated "rust" still uses up one of the five slots
        assert_eq!(parse_tags(&input), vec!["rust", "Rust", "a", "b"]);
    }
}
