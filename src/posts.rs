use chrono::{DateTime, Duration, Utc};
use convert_case::{Case, Casing};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SITE;

/// A blog entry as the content layer hands it over.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
    pub title: String,
    pub pub_datetime: DateTime<Utc>,
    #[serde(default)]
    pub mod_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Post {
    /// Posts are ordered by their last touch: the modification time when one
    /// exists, the publication time otherwise.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }
}

pub fn slugify(text: &str) -> String {
    text.to_case(Case::Kebab)
}

pub fn slugify_all(tags: &[String]) -> Vec<String> {
    tags.iter().map(|tag| slugify(tag)).collect()
}

/// Publishable posts, newest first. A post counts as publishable once its
/// publication time is no more than the configured scheduling margin in the
/// future and it is not a draft.
pub fn get_sorted_posts<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Vec<&'a Post> {
    let publish_deadline =
        Utc::now() + Duration::milliseconds(SITE.scheduled_post_margin_in_milliseconds as i64);
    posts
        .into_iter()
        .filter(|post| !post.draft && post.pub_datetime <= publish_deadline)
        .sorted_by(|first, second| second.sort_key().cmp(&first.sort_key()))
        .collect()
}

/// Non-archived posts carrying the given tag, newest first. The tag and the
/// posts' tags are compared by slug, so `"Astro Paper"` and `"astro-paper"`
/// name the same tag.
pub fn get_posts_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    let tag_slug = slugify(tag);
    let matching = get_sorted_posts(
        posts
            .iter()
            .filter(|post| !post.archived && slugify_all(&post.tags).contains(&tag_slug)),
    );
    debug!("{} posts match tag {:?}", matching.len(), tag_slug);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn post(title: &str, pub_datetime: &str, tags: &[&str]) -> Post {
        Post {
            title: title.into(),
            pub_datetime: pub_datetime.parse().unwrap(),
            mod_datetime: None,
            tags: tags.iter().map(|tag| (*tag).into()).collect(),
            draft: false,
            archived: false,
        }
    }

    #[test_case("Astro Paper", "astro-paper")]
    #[test_case("TypeScript", "type-script")]
    #[test_case("release notes", "release-notes")]
    #[test_case("FAQ", "faq")]
    fn slugs_are_kebab_case(tag: &str, expected: &str) {
        assert_eq!(slugify(tag), expected);
    }

    #[test]
    fn posts_by_tag_match_by_slug_and_skip_archived() {
        let mut archived = post("old", "2021-06-01T00:00:00Z", &["Astro Paper"]);
        archived.archived = true;
        let posts = vec![
            post("first", "2022-01-01T00:00:00Z", &["Astro Paper", "rust"]),
            post("second", "2023-01-01T00:00:00Z", &["astro paper"]),
            post("unrelated", "2023-06-01T00:00:00Z", &["rust"]),
            archived,
        ];

        let titles: Vec<_> = get_posts_by_tag(&posts, "astro-paper")
            .into_iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn sorted_posts_drop_drafts_and_far_scheduled_posts() {
        let mut draft = post("draft", "2022-01-01T00:00:00Z", &[]);
        draft.draft = true;
        let posts = vec![
            post("scheduled", "9999-01-01T00:00:00Z", &[]),
            post("published", "2022-01-01T00:00:00Z", &[]),
            draft,
        ];

        let titles: Vec<_> = get_sorted_posts(&posts)
            .into_iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["published"]);
    }

    #[test]
    fn modification_time_wins_over_publication_time() {
        let mut touched_up = post("touched up", "2021-01-01T00:00:00Z", &[]);
        touched_up.mod_datetime = Some("2023-06-01T00:00:00Z".parse().unwrap());
        let posts = vec![post("newer", "2022-01-01T00:00:00Z", &[]), touched_up];

        let titles: Vec<_> = get_sorted_posts(&posts)
            .into_iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["touched up", "newer"]);
    }

    #[test]
    fn frontmatter_shaped_record_deserializes_with_defaults() {
        let post: Post = serde_json::from_str(
            r#"{"title":"hello","pub_datetime":"2023-01-05T00:00:00Z","tags":["rust"]}"#,
        )
        .unwrap();
        assert_eq!(post.title, "hello");
        assert!(post.mod_datetime.is_none());
        assert!(!post.draft);
        assert!(!post.archived);
    }
}
