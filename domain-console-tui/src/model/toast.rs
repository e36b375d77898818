//! 通知队列

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use domain_console_core::{Notification, NotificationLevel};

use crate::i18n::notification_text;

/// 通知显示时长
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// 最多同时保留的通知数
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// 短暂显示的操作结果
#[derive(Debug, Default)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推入一条本地化的通知
    pub fn notify(&mut self, notification: Notification) {
        self.push(notification.level(), notification_text(notification));
    }

    pub fn push(&mut self, level: NotificationLevel, text: impl Into<String>) {
        self.push_at(level, text, Instant::now());
    }

    fn push_at(&mut self, level: NotificationLevel, text: impl Into<String>, now: Instant) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            text: text.into(),
            level,
            created_at: now,
        });
    }

    /// 移除超过显示时长的通知
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created_at) < TOAST_TTL);
    }

    /// 最新的一条
    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
