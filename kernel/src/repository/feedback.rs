use crate::model::feedback::Toast;
use async_trait::async_trait;

/// Loading indicator and transient message presentation. Presenters own
/// their failures; a toast that cannot be rendered is dropped, never
/// propagated into the submission flow.
#[async_trait]
pub trait FeedbackPresenter: Send + Sync {
    /// Shows the blocking loading indicator.
    async fn show_loading(&self);

    async fn dismiss_loading(&self);

    async fn present_toast(&self, toast: Toast);
}
