use kernel::model::user::Identity;
use kernel::repository::identity::IdentityProvider;
use std::sync::{PoisonError, RwLock};

/// In-process session slot. The original app reached the auth session
/// through an ambient singleton; here the session is a value the registry
/// owns and hands to whoever needs it.
#[derive(Default)]
pub struct SessionIdentityProvider {
    current: RwLock<Option<Identity>>,
}

impl SessionIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::info!(user = %identity.id, "session opened");
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(identity);
    }
}

impl IdentityProvider for SessionIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn sign_out(&self) {
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(identity) = previous {
            tracing::info!(user = %identity.id, "session closed");
        }
    }
}
