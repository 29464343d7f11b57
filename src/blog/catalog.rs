// Selection functions - pure, read-only views over the in-memory catalog.
// Anything that depends on the wall clock takes `now`/`today` explicitly
// so callers (and tests) control time.
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::blog::models::{Comment, Post, PostId};

/// The post and comment stores. Built once at startup and read-only
/// afterwards; every consumer observes the same snapshot.
#[derive(Debug, Clone)]
pub struct PostCatalog {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Title,
    Views,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub posts: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub comments: usize,
}

impl PostCatalog {
    /// Invariant: slugs are unique across `posts`; `comments` holds
    /// top-level comments with their replies already nested.
    pub fn new(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self { posts, comments }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts created within the trailing window, newest first. An empty
    /// result is a valid answer, not an error.
    pub fn recent(&self, now: DateTime<Utc>, window_days: i64) -> Vec<&Post> {
        let cutoff = now - Duration::days(window_days);
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.created_at >= cutoff)
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Top `limit` posts by view count, ties broken by like count. Short
    /// catalogs simply return everything.
    pub fn popular(&self, limit: usize) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| {
            b.view_count
                .cmp(&a.view_count)
                .then(b.like_count.cmp(&a.like_count))
        });
        posts.truncate(limit);
        posts
    }

    /// Posts published on this calendar day one year before `today`, in
    /// store order. A Feb-29 `today` has no match in a non-leap prior
    /// year and yields an empty list.
    pub fn same_day_last_year(&self, today: DateTime<Utc>) -> Vec<&Post> {
        let last_year = today.year() - 1;
        self.posts
            .iter()
            .filter(|p| {
                p.created_at.year() == last_year
                    && p.created_at.month() == today.month()
                    && p.created_at.day() == today.day()
            })
            .collect()
    }

    /// Posts published in this calendar month one year before `today`.
    pub fn same_month_last_year(&self, today: DateTime<Utc>, limit: usize) -> Vec<&Post> {
        let last_year = today.year() - 1;
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.created_at.year() == last_year && p.created_at.month() == today.month())
            .collect();
        posts.truncate(limit);
        posts
    }

    /// `count` posts drawn by shuffling the whole catalog and taking a
    /// prefix. Oversized counts return every post once.
    pub fn random_sample<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.shuffle(rng);
        posts.truncate(count);
        posts
    }

    /// Exact, case-sensitive slug lookup. `None` means "render the
    /// not-found page", never a failure.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug.as_str() == slug)
    }

    pub fn find_by_id(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn featured(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    /// Top-level comments (replies nested) for a post, in store order.
    /// No chronological re-sort happens here.
    pub fn comments_for(&self, post_id: &PostId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| &c.post_id == post_id)
            .collect()
    }

    /// Case-insensitive substring match on title or body.
    pub fn search(&self, term: &str) -> Vec<&Post> {
        let term = term.to_lowercase();
        self.posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&term) || p.body.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// The admin list view's sortable table.
    pub fn sorted(&self, field: SortField, order: SortOrder) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| {
            let ordering = match field {
                SortField::Date => a.created_at.cmp(&b.created_at),
                SortField::Title => a.title.cmp(&b.title),
                SortField::Views => a.view_count.cmp(&b.view_count),
            };
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        posts
    }

    /// Dashboard tallies. Comment count includes nested replies.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            posts: self.posts.len(),
            total_views: self.posts.iter().map(|p| p.view_count as u64).sum(),
            total_likes: self.posts.iter().map(|p| p.like_count as u64).sum(),
            comments: self.comments.iter().map(Comment::total_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::models::{Author, AuthorId, CommentId, Slug};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn author() -> Author {
        Author {
            id: AuthorId::new("1"),
            name: "John Doe".to_string(),
            avatar_url: "https://example.com/john.png".to_string(),
            bio: Some("Senior Writer".to_string()),
        }
    }

    fn post(id: &str, slug: &str, created_at: DateTime<Utc>, views: u32, likes: u32) -> Post {
        Post {
            id: PostId::new(id),
            title: format!("Post {id}"),
            slug: Slug::new_unchecked(slug),
            excerpt: "An excerpt.".to_string(),
            body: "Body text.".to_string(),
            cover_image_url: "https://example.com/cover.jpg".to_string(),
            author: author(),
            created_at,
            updated_at: created_at,
            tags: vec!["Web Development".to_string()],
            like_count: likes,
            view_count: views,
            featured: false,
        }
    }

    fn comment(id: &str, post_id: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            id: CommentId::new(id),
            post_id: PostId::new(post_id),
            parent_id: None,
            author: author(),
            content: "Nice post".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 4, 15, 14, 35, 0).unwrap(),
            like_count: 0,
            replies,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn recent_filters_by_window_and_sorts_descending() {
        let now = day(2024, 4, 16);
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 4, 14), 0, 0),
                post("2", "b", day(2024, 4, 16), 0, 0),
                post("3", "c", day(2024, 4, 1), 0, 0),
            ],
            vec![],
        );

        let recent = catalog.recent(now, 7);
        let ids: Vec<&str> = recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn recent_with_no_matches_is_empty_not_an_error() {
        let catalog = PostCatalog::new(vec![post("1", "a", day(2020, 1, 1), 0, 0)], vec![]);
        assert!(catalog.recent(day(2024, 4, 16), 7).is_empty());
    }

    #[test]
    fn popular_orders_by_views_then_likes() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 1, 1), 100, 5),
                post("2", "b", day(2024, 1, 2), 300, 1),
                post("3", "c", day(2024, 1, 3), 100, 9),
            ],
            vec![],
        );

        let popular = catalog.popular(2);
        let ids: Vec<&str> = popular.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        // Every returned post has views >= every excluded post
        let excluded_max = catalog
            .posts()
            .iter()
            .filter(|p| !ids.contains(&p.id.as_str()))
            .map(|p| p.view_count)
            .max()
            .unwrap();
        assert!(popular.iter().all(|p| p.view_count >= excluded_max));
    }

    #[test]
    fn popular_with_limit_beyond_len_returns_all() {
        let catalog = PostCatalog::new(vec![post("1", "a", day(2024, 1, 1), 10, 0)], vec![]);
        assert_eq!(catalog.popular(50).len(), 1);
    }

    #[test]
    fn same_day_last_year_matches_month_and_day() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 4, 16), 0, 0),
                post("2", "b", day(2023, 4, 16), 0, 0),
                post("3", "c", day(2023, 4, 17), 0, 0),
                post("4", "d", day(2022, 4, 16), 0, 0),
            ],
            vec![],
        );

        let hits = catalog.same_day_last_year(day(2024, 4, 16));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
    }

    #[test]
    fn leap_day_today_with_non_leap_prior_year_is_empty() {
        let catalog = PostCatalog::new(vec![post("1", "a", day(2023, 2, 28), 0, 0)], vec![]);
        let hits = catalog.same_day_last_year(day(2024, 2, 29));
        assert!(hits.is_empty());
    }

    #[test]
    fn same_month_last_year_truncates() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2023, 4, 2), 0, 0),
                post("2", "b", day(2023, 4, 20), 0, 0),
                post("3", "c", day(2023, 5, 1), 0, 0),
            ],
            vec![],
        );
        let hits = catalog.same_month_last_year(day(2024, 4, 16), 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
    }

    #[test]
    fn random_sample_oversized_count_returns_every_post_once() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 1, 1), 0, 0),
                post("2", "b", day(2024, 1, 2), 0, 0),
                post("3", "c", day(2024, 1, 3), 0, 0),
            ],
            vec![],
        );
        let mut rng = StdRng::seed_from_u64(7);
        let sample = catalog.random_sample(10, &mut rng);
        assert_eq!(sample.len(), 3);
        let mut ids: Vec<&str> = sample.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn random_sample_respects_count() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 1, 1), 0, 0),
                post("2", "b", day(2024, 1, 2), 0, 0),
                post("3", "c", day(2024, 1, 3), 0, 0),
            ],
            vec![],
        );
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(catalog.random_sample(2, &mut rng).len(), 2);
    }

    #[test]
    fn find_by_slug_is_exact_and_case_sensitive() {
        let catalog = PostCatalog::new(vec![post("1", "hello-world", day(2024, 1, 1), 0, 0)], vec![]);
        assert!(catalog.find_by_slug("hello-world").is_some());
        assert!(catalog.find_by_slug("Hello-World").is_none());
        assert!(catalog.find_by_slug("hello").is_none());
    }

    #[test]
    fn comments_for_returns_only_matching_post() {
        let catalog = PostCatalog::new(
            vec![post("1", "a", day(2024, 1, 1), 0, 0)],
            vec![
                comment("c1", "1", vec![]),
                comment("c2", "2", vec![]),
                comment("c3", "1", vec![]),
            ],
        );
        let comments = catalog.comments_for(&PostId::new("1"));
        let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn search_matches_title_and_body_case_insensitively() {
        let mut p1 = post("1", "a", day(2024, 1, 1), 0, 0);
        p1.title = "The Future of Web Development".to_string();
        let mut p2 = post("2", "b", day(2024, 1, 2), 0, 0);
        p2.body = "All about WEBASSEMBLY and more.".to_string();
        let p3 = post("3", "c", day(2024, 1, 3), 0, 0);
        let catalog = PostCatalog::new(vec![p1, p2, p3], vec![]);

        assert_eq!(catalog.search("future").len(), 1);
        assert_eq!(catalog.search("webassembly").len(), 1);
        assert!(catalog.search("nonexistent").is_empty());
    }

    #[test]
    fn sorted_by_views_ascending() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 1, 1), 300, 0),
                post("2", "b", day(2024, 1, 2), 100, 0),
                post("3", "c", day(2024, 1, 3), 200, 0),
            ],
            vec![],
        );
        let ids: Vec<&str> = catalog
            .sorted(SortField::Views, SortOrder::Asc)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn sorted_by_title_descending() {
        let mut p1 = post("1", "a", day(2024, 1, 1), 0, 0);
        p1.title = "Alpha".to_string();
        let mut p2 = post("2", "b", day(2024, 1, 2), 0, 0);
        p2.title = "Zulu".to_string();
        let catalog = PostCatalog::new(vec![p1, p2], vec![]);
        let ids: Vec<&str> = catalog
            .sorted(SortField::Title, SortOrder::Desc)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn stats_counts_nested_replies() {
        let catalog = PostCatalog::new(
            vec![
                post("1", "a", day(2024, 1, 1), 100, 10),
                post("2", "b", day(2024, 1, 2), 50, 5),
            ],
            vec![comment("c1", "1", vec![comment("c2", "1", vec![])])],
        );
        let stats = catalog.stats();
        assert_eq!(stats.posts, 2);
        assert_eq!(stats.total_views, 150);
        assert_eq!(stats.total_likes, 15);
        assert_eq!(stats.comments, 2);
    }
}
