//! Toast Notifications
//!
//! Transient on-screen messages. One toast is visible at a time; a new one
//! replaces it. Every emitted toast is also queued so a presentation layer
//! that is not continuously redrawn (the terminal) can print them.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Default visible lifetime of a toast
pub const DEFAULT_TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    #[serde(skip)]
    shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    ttl: Duration,
    visible: Option<Toast>,
    pending: Vec<Toast>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_MS))
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            visible: None,
            pending: Vec::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        };
        tracing::debug!(kind = kind.as_str(), message = %toast.message, "toast");

        self.pending.push(toast.clone());
        self.visible = Some(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    /// The toast on screen at `now`, if it has not timed out
    pub fn visible_at(&self, now: Instant) -> Option<&Toast> {
        self.visible
            .as_ref()
            .filter(|toast| !toast.is_expired(self.ttl, now))
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible_at(Instant::now())
    }

    /// Every toast emitted since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }

    /// Toasts emitted since the last drain, without consuming them
    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn dismiss(&mut self) {
        self.visible = None;
    }
}
