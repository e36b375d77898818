//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

use domain_console_core::{Notification, ValidationError};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 通知的本地化文本
pub fn notification_text(notification: Notification) -> &'static str {
    let toast = &t().toast;
    match notification {
        Notification::Added => toast.added,
        Notification::AddFailed => toast.add_failed,
        Notification::Updated => toast.updated,
        Notification::UpdateFailed => toast.update_failed,
        Notification::Verified => toast.verified,
        Notification::VerifyFailed => toast.verify_failed,
        Notification::Deleted => toast.deleted,
        Notification::DeleteFailed => toast.delete_failed,
        Notification::MissingIdentifier => toast.missing_id,
        Notification::Copied => toast.copied,
    }
}

/// 表单校验错误的本地化文本
pub fn validation_text(error: ValidationError) -> &'static str {
    let validation = &t().drawer.validation;
    match error {
        ValidationError::Required => validation.required,
        ValidationError::InvalidPattern => validation.invalid_pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_texts_match_core_messages() {
        // Default language is en-US; the table mirrors the core messages.
        for n in [
            Notification::Added,
            Notification::AddFailed,
            Notification::Updated,
            Notification::UpdateFailed,
            Notification::Verified,
            Notification::VerifyFailed,
            Notification::Deleted,
            Notification::DeleteFailed,
            Notification::MissingIdentifier,
            Notification::Copied,
        ] {
            let text = match n {
                Notification::Added => en_us::TRANSLATIONS.toast.added,
                Notification::AddFailed => en_us::TRANSLATIONS.toast.add_failed,
                Notification::Updated => en_us::TRANSLATIONS.toast.updated,
                Notification::UpdateFailed => en_us::TRANSLATIONS.toast.update_failed,
                Notification::Verified => en_us::TRANSLATIONS.toast.verified,
                Notification::VerifyFailed => en_us::TRANSLATIONS.toast.verify_failed,
                Notification::Deleted => en_us::TRANSLATIONS.toast.deleted,
                Notification::DeleteFailed => en_us::TRANSLATIONS.toast.delete_failed,
                Notification::MissingIdentifier => en_us::TRANSLATIONS.toast.missing_id,
                Notification::Copied => en_us::TRANSLATIONS.toast.copied,
            };
            assert_eq!(text, n.message(), "{n:?}");
        }
        assert_eq!(
            en_us::TRANSLATIONS.drawer.validation.invalid_pattern,
            ValidationError::InvalidPattern.to_string()
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("fr-FR"), None);
        assert_eq!(Language::ZhCn.code(), "zh-CN");
    }
}
