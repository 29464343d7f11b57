// The client route table. Paths map to views; the slug segment is
// passed through verbatim to the catalog lookup, which decides whether
// it resolves.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Post { slug: String },
    Login,
    Register,
    AdminDashboard,
    AdminPosts,
    AdminPostNew,
    AdminPostEdit { slug: String },
    NotFound,
}

impl Route {
    /// Match a path against the route table. Unknown paths fall through
    /// to `NotFound`, the catch-all view.
    pub fn parse(path: &str) -> Route {
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["post", slug] => Route::Post {
                slug: (*slug).to_string(),
            },
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin"] => Route::AdminDashboard,
            ["admin", "posts"] => Route::AdminPosts,
            ["admin", "posts", "new"] => Route::AdminPostNew,
            ["admin", "posts", "edit", slug] => Route::AdminPostEdit {
                slug: (*slug).to_string(),
            },
            _ => Route::NotFound,
        }
    }

    /// True for routes behind the admin gate.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminDashboard
                | Route::AdminPosts
                | Route::AdminPostNew
                | Route::AdminPostEdit { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Post { slug } => write!(f, "/post/{slug}"),
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::AdminDashboard => write!(f, "/admin"),
            Route::AdminPosts => write!(f, "/admin/posts"),
            Route::AdminPostNew => write!(f, "/admin/posts/new"),
            Route::AdminPostEdit { slug } => write!(f, "/admin/posts/edit/{slug}"),
            Route::NotFound => write!(f, "/404"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_table_entry() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(
            Route::parse("/post/hello-world"),
            Route::Post {
                slug: "hello-world".to_string()
            }
        );
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register"), Route::Register);
        assert_eq!(Route::parse("/admin"), Route::AdminDashboard);
        assert_eq!(Route::parse("/admin/posts"), Route::AdminPosts);
        assert_eq!(Route::parse("/admin/posts/new"), Route::AdminPostNew);
        assert_eq!(
            Route::parse("/admin/posts/edit/hello-world"),
            Route::AdminPostEdit {
                slug: "hello-world".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/post"), Route::NotFound);
        assert_eq!(Route::parse("/post/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/admin/users"), Route::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/login/"), Route::Login);
        assert_eq!(
            Route::parse("/post/hello-world/"),
            Route::Post {
                slug: "hello-world".to_string()
            }
        );
    }

    #[test]
    fn slug_segment_is_passed_through_verbatim() {
        // Even a slug that can never resolve still parses; the catalog
        // lookup is the one that answers "not found".
        assert_eq!(
            Route::parse("/post/No-Such-Post"),
            Route::Post {
                slug: "No-Such-Post".to_string()
            }
        );
    }

    #[test]
    fn admin_routes_require_admin() {
        assert!(Route::parse("/admin").requires_admin());
        assert!(Route::parse("/admin/posts/edit/x").requires_admin());
        assert!(!Route::parse("/").requires_admin());
        assert!(!Route::parse("/login").requires_admin());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::Post {
                slug: "hello".to_string(),
            },
            Route::Login,
            Route::Register,
            Route::AdminDashboard,
            Route::AdminPosts,
            Route::AdminPostNew,
            Route::AdminPostEdit {
                slug: "hello".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
