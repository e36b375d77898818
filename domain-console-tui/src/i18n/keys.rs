//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **列表内容归 `table.*`**，**侧边面板内容归 `drawer.*`**
//! 3. **通知文本归 `toast.*`**
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 域名列表文本
    pub table: TableTexts,
    /// 侧边面板（表单）文本
    pub drawer: DrawerTexts,
    /// 通知文本
    pub toast: ToastTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub select: &'static str,
    pub page: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub verify: &'static str,
    pub delete: &'static str,
    pub copy: &'static str,
    pub search: &'static str,
    pub sort: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub toggle: &'static str,
    pub next_field: &'static str,
    pub done: &'static str,
    pub clear: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 域名列表文本
pub struct TableTexts {
    pub title: &'static str,
    pub add_domain: &'static str,
    pub col_domain: &'static str,
    pub col_active: &'static str,
    pub col_status: &'static str,
    pub col_created: &'static str,
    pub active: &'static str,
    pub not_active: &'static str,
    pub status_pending: &'static str,
    pub status_verified: &'static str,
    pub status_rejected: &'static str,
    pub sort_asc: &'static str,
    pub sort_desc: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub page: &'static str,
    pub no_domains: &'static str,
    pub no_matches: &'static str,
    pub deleting: &'static str,
}

/// 侧边面板文本
pub struct DrawerTexts {
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub domain_label: &'static str,
    pub domain_placeholder: &'static str,
    pub active_label: &'static str,
    pub add_button: &'static str,
    pub update_button: &'static str,
    pub cancel_button: &'static str,
    pub submitting: &'static str,
    /// 表单校验
    pub validation: ValidationTexts,
}

// ============================================================================
// 通知
// ============================================================================

/// 操作结果通知
pub struct ToastTexts {
    pub added: &'static str,
    pub add_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub verified: &'static str,
    pub verify_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub missing_id: &'static str,
    pub copied: &'static str,
    pub load_failed: &'static str,
    pub copy_failed: &'static str,
}

/// 表单校验文本
pub struct ValidationTexts {
    pub required: &'static str,
    pub invalid_pattern: &'static str,
}

// ============================================================================
// 状态栏 / 帮助
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub refreshing: &'static str,
    pub records: &'static str,
    pub busy_deleting: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub drawer_section: &'static str,
    pub close_hint: &'static str,
}
