use crate::model::id::UserId;
use derive_new::new;

/// The currently signed-in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
}
