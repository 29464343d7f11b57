// Homepage feed assembly. Pulls every rail the front page renders out
// of the catalog in one pass so the caller gets a consistent snapshot.
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::blog::catalog::PostCatalog;
use crate::blog::models::Post;
use crate::config::FeedConfig;

#[derive(Debug, Clone)]
pub struct HomeFeed<'a> {
    /// First featured post, if any; the front page's hero slot.
    pub featured: Option<&'a Post>,
    pub recent: Vec<&'a Post>,
    /// Posts published exactly one year ago today.
    pub flashback_day: Vec<&'a Post>,
    /// Fallback rail: posts from this month one year ago.
    pub flashback_month: Vec<&'a Post>,
    pub popular: Vec<&'a Post>,
    pub discover: Vec<&'a Post>,
}

impl<'a> HomeFeed<'a> {
    pub fn assemble<R: Rng>(
        catalog: &'a PostCatalog,
        now: DateTime<Utc>,
        config: &FeedConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            featured: catalog.featured().first().copied(),
            recent: catalog.recent(now, config.recent_window_days),
            flashback_day: catalog.same_day_last_year(now),
            flashback_month: catalog.same_month_last_year(now, config.popular_limit),
            popular: catalog.popular(config.popular_limit),
            discover: catalog.random_sample(config.random_count, rng),
        }
    }
}
