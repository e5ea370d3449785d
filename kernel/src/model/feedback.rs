/// Toast duration used across the app, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub duration_ms: u32,
    pub tone: ToastTone,
    pub icon: String,
    pub position: ToastPosition,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_ms: TOAST_DURATION_MS,
            tone: ToastTone::Success,
            icon: "checkmark-circle-outline".to_string(),
            position: ToastPosition::Middle,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_ms: TOAST_DURATION_MS,
            tone: ToastTone::Danger,
            icon: "alert-circle-outline".to_string(),
            position: ToastPosition::Middle,
        }
    }
}
