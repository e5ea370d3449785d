use async_trait::async_trait;
use kernel::model::feedback::{Toast, ToastTone};
use kernel::repository::feedback::FeedbackPresenter;

/// Feedback sink for the headless shell: loading and toast events are
/// rendered as log lines.
#[derive(Debug, Default)]
pub struct TracePresenter;

impl TracePresenter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FeedbackPresenter for TracePresenter {
    async fn show_loading(&self) {
        tracing::info!("loading indicator shown");
    }

    async fn dismiss_loading(&self) {
        tracing::info!("loading indicator dismissed");
    }

    async fn present_toast(&self, toast: Toast) {
        match toast.tone {
            ToastTone::Success => tracing::info!(message = %toast.message, "toast"),
            ToastTone::Danger => tracing::warn!(message = %toast.message, "toast"),
        }
    }
}
