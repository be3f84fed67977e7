//! Filter and sort semantics shared with the remote backend.

use std::cmp::Ordering;

use board_core::domain::{Post, PostQuery, SortField, SortOrder};

/// Filter `posts` by `query` and sort them if a sort field is given.
///
/// Without a sort field the input order (insertion order) is kept. The sort
/// is stable, so equal keys keep their relative order in both directions.
pub fn apply_query(posts: Vec<Post>, query: &PostQuery) -> Vec<Post> {
    let needle = non_empty(query.search.as_deref()).map(str::to_lowercase);

    let mut matched: Vec<Post> = posts
        .into_iter()
        .filter(|post| matches_with(post, query, needle.as_deref()))
        .collect();

    if let Some(field) = query.sort_field {
        let order = query.sort_order.unwrap_or(SortOrder::Desc);
        matched.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    matched
}

/// Whether a single post passes every filter of `query`.
pub fn matches_query(post: &Post, query: &PostQuery) -> bool {
    let needle = non_empty(query.search.as_deref()).map(str::to_lowercase);
    matches_with(post, query, needle.as_deref())
}

fn matches_with(post: &Post, query: &PostQuery, needle: Option<&str>) -> bool {
    if let Some(user_id) = non_empty(query.user_id.as_deref()) {
        if post.user_id != user_id {
            return false;
        }
    }

    if let Some(needle) = needle {
        let hit = post.title.to_lowercase().contains(needle)
            || post.body.to_lowercase().contains(needle)
            || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }

    query.category.matches(post.category)
}

fn compare(a: &Post, b: &Post, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

// Empty strings filter nothing, same as an absent parameter.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use board_core::domain::{Category, CategoryFilter};

    use super::*;

    fn post(id: &str, title: &str, category: Category, created_at: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            body: String::new(),
            category,
            user_id: "user-1".to_string(),
            email: None,
            tags: Vec::new(),
            created_at: created_at.to_string(),
        }
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    fn dated() -> Vec<Post> {
        vec![
            post("jan", "b", Category::Free, "2024-01-01"),
            post("mar", "C", Category::Qna, "2024-03-01"),
            post("feb", "a", Category::Notice, "2024-02-01"),
        ]
    }

    #[test]
    fn test_no_sort_field_keeps_insertion_order() {
        let query = PostQuery {
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&apply_query(dated(), &query)), ["jan", "mar", "feb"]);
    }

    #[test]
    fn test_sort_created_at() {
        let asc = PostQuery::new().sort_by(SortField::CreatedAt, SortOrder::Asc);
        assert_eq!(ids(&apply_query(dated(), &asc)), ["jan", "feb", "mar"]);

        let desc = PostQuery::new().sort_by(SortField::CreatedAt, SortOrder::Desc);
        assert_eq!(ids(&apply_query(dated(), &desc)), ["mar", "feb", "jan"]);
    }

    #[test]
    fn test_sort_order_defaults_to_descending() {
        let query = PostQuery {
            sort_field: Some(SortField::CreatedAt),
            ..Default::default()
        };
        assert_eq!(ids(&apply_query(dated(), &query)), ["mar", "feb", "jan"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let query = PostQuery::new().sort_by(SortField::Title, SortOrder::Asc);
        assert_eq!(ids(&apply_query(dated(), &query)), ["feb", "jan", "mar"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let posts = vec![
            post("first", "same", Category::Free, "2024-01-01"),
            post("second", "Same", Category::Free, "2024-01-01"),
        ];
        let desc = PostQuery::new().sort_by(SortField::Title, SortOrder::Desc);
        assert_eq!(ids(&apply_query(posts, &desc)), ["first", "second"]);
    }

    #[test]
    fn test_search_title_body_and_tags() {
        let mut hello = post("hello", "Hello World", Category::Free, "2024-01-01");
        hello.body = "nothing".to_string();
        hello.tags = vec!["foo".to_string()];

        assert!(matches_query(&hello, &PostQuery::new().search("hello")));
        assert!(matches_query(&hello, &PostQuery::new().search("NOTH")));
        assert!(matches_query(&hello, &PostQuery::new().search("foo")));
        assert!(!matches_query(&hello, &PostQuery::new().search("xyz")));
    }

    #[test]
    fn test_empty_filters_are_ignored() {
        let query = PostQuery::new().search("").owned_by("");
        assert_eq!(apply_query(dated(), &query).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let all = PostQuery::new().category(CategoryFilter::All);
        assert_eq!(apply_query(dated(), &all).len(), 3);

        let qna = PostQuery::new().category(Category::Qna);
        assert_eq!(ids(&apply_query(dated(), &qna)), ["mar"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut posts = dated();
        posts[1].user_id = "user-2".to_string();

        let query = PostQuery::new().owned_by("user-2").category(Category::Free);
        assert!(apply_query(posts.clone(), &query).is_empty());

        let query = PostQuery::new().owned_by("user-2").category(Category::Qna);
        assert_eq!(ids(&apply_query(posts, &query)), ["mar"]);
    }
}
