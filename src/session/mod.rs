// Session state - pure transitions between Anonymous and Authenticated,
// with a manager that owns the cache mirror side effects.
//
// The login policy is a demo stand-in, not a security design: any
// non-empty email/password pair signs in, and one reserved pair signs
// in as the administrator.
pub mod cache;

use crate::blog::models::{Role, User};
use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use cache::SessionCache;

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// Get state name for debugging/logging
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Anonymous => "Anonymous",
            Self::Authenticated(_) => "Authenticated",
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Derived projection of the user's role; never stored separately.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Authenticated(User {
                role: Role::Admin,
                ..
            })
        )
    }

    /// Transition: * -> Authenticated. Empty email or password is the
    /// only failure; the reserved admin pair yields the admin account,
    /// anything else a regular user named after the email's local part.
    pub fn login(self, email: &str, password: &str, auth: &AuthConfig) -> AppResult<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        if email == auth.admin_email && password == auth.admin_password {
            return Ok(Self::Authenticated(admin_user(email)));
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(Self::Authenticated(regular_user(name, email)))
    }

    /// Transition: * -> Authenticated with the supplied display name.
    pub fn register(self, name: &str, email: &str, password: &str) -> AppResult<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }
        Ok(Self::Authenticated(regular_user(name.to_string(), email)))
    }

    /// Transition: * -> Anonymous.
    pub fn logout(self) -> Session {
        Self::Anonymous
    }
}

fn admin_user(email: &str) -> User {
    User {
        id: "admin1".to_string(),
        name: "Admin User".to_string(),
        email: email.to_string(),
        avatar_url: Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e".to_string(),
        ),
        role: Role::Admin,
    }
}

fn regular_user(name: String, email: &str) -> User {
    User {
        id: uuid::Uuid::now_v7().to_string(),
        name,
        email: email.to_string(),
        avatar_url: None,
        role: Role::User,
    }
}

/// Owns the current session, the dark-mode flag and the cache mirror.
/// Constructed explicitly and passed to consumers; there is no global.
#[derive(Debug)]
pub struct SessionManager {
    auth: AuthConfig,
    cache: SessionCache,
    session: Session,
    dark_mode: bool,
}

impl SessionManager {
    /// Build the manager, hydrating from the cache mirror. A missing or
    /// malformed cache entry means Anonymous, never an error.
    pub fn hydrate(cache: SessionCache, auth: AuthConfig) -> Self {
        let session = match cache.load() {
            Some(user) => {
                tracing::debug!("Restored session for {}", user.email);
                Session::Authenticated(user)
            }
            None => Session::Anonymous,
        };
        Self {
            auth,
            cache,
            session,
            dark_mode: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Sign in and mirror the user into the cache. A failed login leaves
    /// the current session in place.
    pub fn login(&mut self, email: &str, password: &str) -> AppResult<&User> {
        let next = self.session.clone().login(email, password, &self.auth)?;
        self.commit(next)
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> AppResult<&User> {
        let next = self.session.clone().register(name, email, password)?;
        self.commit(next)
    }

    /// Sign out and drop the cache mirror unconditionally.
    pub fn logout(&mut self) -> AppResult<()> {
        self.session = Session::Anonymous;
        self.cache.clear()
    }

    fn commit(&mut self, next: Session) -> AppResult<&User> {
        if let Some(user) = next.user() {
            self.cache.save(user)?;
        }
        self.session = next;
        Ok(self.session.user().expect("commit only stores Authenticated"))
    }
}
