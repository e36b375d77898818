//! 侧边面板状态

use domain_console_api::Domain;
use domain_console_core::DomainForm;

/// 面板中的可聚焦字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerField {
    #[default]
    Domain,
    Active,
}

impl DrawerField {
    /// 两个字段之间循环切换
    pub fn toggle(self) -> Self {
        match self {
            Self::Domain => Self::Active,
            Self::Active => Self::Domain,
        }
    }
}

/// 添加 / 编辑面板
#[derive(Debug, Clone)]
pub struct DrawerState {
    pub form: DomainForm,
    pub focus: DrawerField,
    /// 进行中的提交凭据；存在期间忽略重复提交
    pub pending: Option<u64>,
}

impl DrawerState {
    /// 空白的添加表单
    pub fn add() -> Self {
        Self {
            form: DomainForm::new(),
            focus: DrawerField::default(),
            pending: None,
        }
    }

    /// 以 `record` 预填的编辑表单
    pub fn edit(record: &Domain) -> Self {
        Self {
            form: DomainForm::editing(record),
            focus: DrawerField::default(),
            pending: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.form.is_delegated()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// 结果是否属于本面板发出的提交
    pub fn awaits(&self, ticket: u64) -> bool {
        self.pending == Some(ticket)
    }
}
