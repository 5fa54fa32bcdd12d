use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Unknown kinds are shown as `Info`.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-triangle",
            NotificationKind::Info => "info-circle",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

/// Transient user-facing messages.
pub trait Notifier {
    /// Show `notification`, replacing anything currently shown.
    fn notify(&mut self, notification: Notification);
}

/// Keeps only the notification currently on screen.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    current: Option<Notification>,
    shown: usize,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Total notifications shown so far, including replaced ones.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, notification: Notification) {
        info!(
            "event=notification kind={} icon={}",
            notification.kind,
            notification.icon()
        );
        self.current = Some(notification);
        self.shown += 1;
    }
}
