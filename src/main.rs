use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use kwento::blog::catalog::PostCatalog;
use kwento::blog::feed::HomeFeed;
use kwento::blog::models::Post;
use kwento::blog::seed;
use kwento::blog::thread::CommentThread;
use kwento::config::{Cli, Config};
use kwento::session::cache::SessionCache;
use kwento::session::SessionManager;
use kwento::share::{share_url, ShareTarget};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let data_dir = Config::data_dir(&cli);
    std::fs::create_dir_all(&data_dir)?;
    tracing::info!("Data directory: {}", data_dir.display());

    let config = Config::load(&cli)?;

    // Build the in-memory catalog and restore the session
    let now = Utc::now();
    let catalog = seed::catalog(now);
    let cache = SessionCache::new(config.cache_path());
    let session = SessionManager::hydrate(cache, config.auth.clone());

    match session.user() {
        Some(user) => tracing::info!("Signed in as {} ({})", user.name, user.email),
        None => tracing::info!("Browsing anonymously"),
    }

    match &cli.post {
        Some(slug) => show_post(&catalog, slug),
        None => {
            let mut rng: StdRng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let feed = HomeFeed::assemble(&catalog, now, &config.feed, &mut rng);
            show_home(&feed);
        }
    }

    Ok(())
}

fn show_home(feed: &HomeFeed) {
    if let Some(post) = feed.featured {
        println!("== Featured ==");
        print_post_line(post);
    }

    print_rail("Recent Posts", &feed.recent);
    print_rail("One Year Ago Today", &feed.flashback_day);
    if feed.flashback_day.is_empty() {
        print_rail("This Month Last Year", &feed.flashback_month);
    }
    print_rail("Popular Posts", &feed.popular);
    print_rail("Discover", &feed.discover);
}

fn print_rail(title: &str, posts: &[&Post]) {
    if posts.is_empty() {
        return;
    }
    println!("\n== {title} ==");
    for post in posts {
        print_post_line(post);
    }
}

fn print_post_line(post: &Post) {
    println!(
        "  {}  [{}]  {} views, {} likes  /post/{}",
        post.title,
        post.primary_tag().unwrap_or("untagged"),
        post.view_count,
        post.like_count,
        post.slug
    );
}

fn show_post(catalog: &PostCatalog, slug: &str) {
    let Some(post) = catalog.find_by_slug(slug) else {
        println!("No post at /post/{slug} - nothing published under that slug.");
        return;
    };

    println!("# {}", post.title);
    println!(
        "by {} on {}  ({} views, {} likes)",
        post.author.name,
        post.created_at.format("%Y-%m-%d"),
        post.view_count,
        post.like_count
    );
    println!("\n{}\n", post.body);

    let page_url = format!("https://blog.example.com/post/{}", post.slug);
    println!("Share:");
    for target in ShareTarget::ALL {
        println!("  {:?}: {}", target, share_url(target, &page_url, &post.title));
    }

    let thread = CommentThread::for_post(catalog, &post.id);
    println!("\n{} comment(s):", thread.total_count());
    for comment in thread.comments() {
        println!("  {}: {}", comment.author.name, comment.content);
        for reply in &comment.replies {
            println!("    ↳ {}: {}", reply.author.name, reply.content);
        }
    }
}
