//! Application session
//!
//! Holds who is signed in and whether onboarding has been shown. One
//! `Session` is created at app start and shared by reference
//! (`Rc<RefCell<Session>>`) with the parts that need it; signing out clears
//! it. Nothing reads these flags from ambient storage.

use tracing::debug;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    user_id: Option<String>,
    token: Option<String>,
    onboarding_complete: bool,
}

impl Session {
    /// A signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already signed in as `user_id`
    pub fn signed_in(user_id: &str, token: &str) -> Self {
        let mut session = Self::new();
        session.sign_in(user_id, token);
        session
    }

    pub fn sign_in(&mut self, user_id: &str, token: &str) {
        debug!(user_id, "signed in");
        self.user_id = Some(user_id.to_string());
        self.token = Some(token.to_string());
    }

    /// Clears credentials and per-user flags
    pub fn sign_out(&mut self) {
        debug!(user_id = ?self.user_id, "signed out");
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    pub fn complete_onboarding(&mut self) {
        self.onboarding_complete = true;
    }

    /// Signed in but the tutorial has not been shown yet
    pub fn needs_onboarding(&self) -> bool {
        self.is_authenticated() && !self.onboarding_complete
    }
}
