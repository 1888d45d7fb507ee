use cached::{Cached, TimedSizedCache};
use derive_getters::Getters;
use dto::user::User;

const STORAGE_SIZE: usize = 100;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24 * 7;

/// The authenticated state behind one session cookie: the backend bearer
/// token and the identity it was last validated against. The token itself
/// never leaves the server.
///
/// Lifecycle: created on login, updated on each revalidation against the
/// backend, removed on logout or when the backend rejects the token.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }

    pub fn role(&self) -> Option<&str> {
        Some(self.user.role().as_str())
    }

    /// A refresh keeps the token but swaps in the re-verified identity.
    pub fn with_user(self, user: User) -> Self {
        Self { user, ..self }
    }
}

/// A container for live sessions. Only 100 sessions can be stored at a time,
/// and they expire after one week.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, Session>,
}

impl SessionStorage {
    pub fn store(&mut self, id: String, session: Session) {
        self.sessions.cache_set(id, session);
    }

    pub fn get(&mut self, id: &str) -> Option<&Session> {
        self.sessions.cache_get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Session> {
        self.sessions.cache_remove(id)
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions =
            TimedSizedCache::with_size_and_lifespan(STORAGE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
