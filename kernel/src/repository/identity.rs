use crate::model::user::Identity;

/// Answers "who is the current user". Passed to consumers explicitly so
/// they can be tested without an ambient session.
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<Identity>;

    fn sign_out(&self);
}
