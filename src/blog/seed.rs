// The in-memory sample dataset. Dates are laid out relative to `now` so
// the recency window, the anniversary rail and the popular rail all
// have something to show no matter when the process starts.
use chrono::{DateTime, Datelike, Duration, Utc};

use crate::blog::catalog::PostCatalog;
use crate::blog::models::{Author, AuthorId, Comment, CommentId, Post, PostId, Slug};

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: AuthorId::new("1"),
            name: "John Doe".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e".to_string(),
            bio: Some("Senior Writer & Tech Enthusiast".to_string()),
        },
        Author {
            id: AuthorId::new("2"),
            name: "Jane Smith".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330".to_string(),
            bio: Some("Creative Director & Lifestyle Blogger".to_string()),
        },
    ]
}

/// The same calendar day one year earlier. Feb 29 has no counterpart in
/// a non-leap year; fall back to 365 days back.
fn one_year_before(now: DateTime<Utc>) -> DateTime<Utc> {
    now.with_year(now.year() - 1)
        .unwrap_or(now - Duration::days(365))
}

pub fn catalog(now: DateTime<Utc>) -> PostCatalog {
    let authors = authors();
    let john = authors[0].clone();
    let jane = authors[1].clone();
    let last_year = one_year_before(now);

    let make = |id: &str,
                title: &str,
                slug: &str,
                excerpt: &str,
                body: &str,
                cover: &str,
                author: &Author,
                created_at: DateTime<Utc>,
                tags: &[&str],
                likes: u32,
                views: u32,
                featured: bool| Post {
        id: PostId::new(id),
        title: title.to_string(),
        slug: Slug::new_unchecked(slug),
        excerpt: excerpt.to_string(),
        body: body.to_string(),
        cover_image_url: cover.to_string(),
        author: author.clone(),
        created_at,
        updated_at: created_at,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        like_count: likes,
        view_count: views,
        featured,
    };

    let posts = vec![
        make(
            "1",
            "The Future of Web Development",
            "the-future-of-web-development",
            "Exploring emerging trends and technologies shaping the future of web development.",
            "# The Future of Web Development\n\n\
             Web development continues to evolve at a rapid pace. From AI-assisted \
             coding to new frameworks, the landscape is constantly shifting.\n\n\
             ## The Rise of Edge Computing\n\n\
             Edge computing brings computation closer to data sources and reduces latency:\n\n\
             1. Faster response times\n\
             2. Reduced bandwidth usage\n\
             3. Better performance in remote areas\n\n\
             ## WebAssembly Revolution\n\n\
             WebAssembly enables high-performance applications on the web, opening \
             doors to new possibilities.",
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b",
            &john,
            now - Duration::hours(6),
            &["Web Development", "Future Tech", "AI", "WebAssembly"],
            45,
            1200,
            true,
        ),
        make(
            "2",
            "Building Responsive Designs with Modern CSS",
            "responsive-designs-modern-css",
            "Learn how to create stunning, responsive layouts using the latest CSS features.",
            "# Building Responsive Designs with Modern CSS\n\n\
             Container queries let elements adapt to their parent container rather \
             than the viewport. Combined with Grid, Flexbox and custom properties, \
             modern CSS offers unprecedented layout control without JavaScript.",
            "https://images.unsplash.com/photo-1523437113738-bbd3cc89fb19",
            &jane,
            now - Duration::days(1),
            &["CSS", "Responsive Design", "Web Development"],
            27,
            985,
            false,
        ),
        make(
            "3",
            "Understanding React Hooks",
            "understanding-react-hooks",
            "A comprehensive guide to React Hooks and how they can simplify your components.",
            "Detailed content about React Hooks...",
            "https://images.unsplash.com/photo-1518770660439-4636190af475",
            &john,
            now - Duration::days(2),
            &["React", "JavaScript", "Web Development"],
            36,
            1100,
            false,
        ),
        make(
            "4",
            "TypeScript Best Practices",
            "typescript-best-practices",
            "Discover the most effective ways to use TypeScript in your projects.",
            "Detailed content about TypeScript best practices...",
            "https://images.unsplash.com/photo-1587620962725-abab7fe55159",
            &jane,
            last_year,
            &["TypeScript", "JavaScript", "Best Practices"],
            52,
            1890,
            false,
        ),
        make(
            "5",
            "The Complete Guide to Web Accessibility",
            "complete-guide-web-accessibility",
            "Learn how to make your web applications accessible to everyone.",
            "Detailed content about web accessibility...",
            "https://images.unsplash.com/photo-1581089781785-603411fa81e5",
            &john,
            last_year - Duration::hours(4),
            &["Accessibility", "Web Development", "UI/UX"],
            41,
            1450,
            false,
        ),
        make(
            "6",
            "10 Performance Tips for Modern Web Apps",
            "performance-tips-modern-web-apps",
            "Optimize your web application with these essential performance tips.",
            "Detailed content about performance optimization...",
            "https://images.unsplash.com/photo-1461749280684-dccba630e2f6",
            &john,
            now - Duration::days(18),
            &["Performance", "Optimization", "Web Development"],
            89,
            3200,
            false,
        ),
        make(
            "7",
            "Getting Started with Tailwind CSS",
            "getting-started-tailwind-css",
            "A beginner's guide to using Tailwind CSS in your projects.",
            "Detailed content about Tailwind CSS...",
            "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d",
            &jane,
            now - Duration::days(64),
            &["CSS", "Tailwind", "Web Development"],
            75,
            2900,
            false,
        ),
        make(
            "8",
            "Web3 Development: The Essential Toolkit",
            "web3-development-toolkit",
            "Explore the tools and technologies you need to start building Web3 applications.",
            "Detailed content about Web3 development...",
            "https://images.unsplash.com/photo-1639322537504-6427a16b0a28",
            &john,
            now - Duration::days(85),
            &["Web3", "Blockchain", "Ethereum", "Development"],
            62,
            2100,
            false,
        ),
        make(
            "9",
            "Advanced Git Workflows for Team Collaboration",
            "advanced-git-workflows-teams",
            "Improve your team's productivity with these advanced Git strategies.",
            "Detailed content about Git workflows...",
            "https://images.unsplash.com/photo-1556075798-4825dfaaf498",
            &jane,
            now - Duration::days(160),
            &["Git", "Collaboration", "Development"],
            55,
            1850,
            false,
        ),
        make(
            "10",
            "Creating Stunning Animations with CSS and GSAP",
            "animations-css-gsap",
            "Learn how to combine CSS and GSAP for beautiful web animations.",
            "Detailed content about web animations...",
            "https://images.unsplash.com/photo-1550063873-ab792950096b",
            &john,
            now - Duration::days(210),
            &["CSS", "GSAP", "Animations", "Web Development"],
            48,
            1680,
            false,
        ),
    ];

    let comments = vec![
        Comment {
            id: CommentId::new("1"),
            post_id: PostId::new("1"),
            parent_id: None,
            author: jane.clone(),
            content: "This is such an insightful post! Thanks for sharing your knowledge."
                .to_string(),
            created_at: now - Duration::hours(4),
            like_count: 3,
            replies: vec![],
        },
        Comment {
            id: CommentId::new("2"),
            post_id: PostId::new("1"),
            parent_id: None,
            author: john.clone(),
            content: "I've been working on something similar. Would love to chat more about this \
                      topic."
                .to_string(),
            created_at: now - Duration::hours(2),
            like_count: 1,
            replies: vec![Comment {
                id: CommentId::new("3"),
                post_id: PostId::new("1"),
                parent_id: Some(CommentId::new("2")),
                author: jane.clone(),
                content: "Absolutely! Feel free to contact me anytime.".to_string(),
                created_at: now - Duration::hours(1),
                like_count: 0,
                replies: vec![],
            }],
        },
        Comment {
            id: CommentId::new("4"),
            post_id: PostId::new("2"),
            parent_id: None,
            author: john,
            content: "Great perspectives on this emerging technology!".to_string(),
            created_at: now - Duration::hours(20),
            like_count: 0,
            replies: vec![],
        },
    ];

    PostCatalog::new(posts, comments)
}
