//! 应用主状态结构

use domain_console_core::TableState;

use super::{DrawerState, ToastQueue};
use crate::message::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列表状态
    pub table: TableState,

    /// 侧边面板
    pub drawer: Option<DrawerState>,

    /// 是否正在输入搜索关键字
    pub search_active: bool,

    /// 帮助弹窗是否打开
    pub help_open: bool,

    /// 通知队列
    pub toasts: ToastQueue,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 待交给 Backend 的命令
    pub commands: Vec<Command>,

    /// 当前连接的服务端地址（显示在标题栏）
    pub api_base_url: String,

    /// 最近一次提交的凭据，每次提交递增
    pub last_ticket: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(api_base_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            should_quit: false,
            table: TableState::new(page_size),
            drawer: None,
            search_active: false,
            help_open: false,
            toasts: ToastQueue::new(),
            status_message: None,
            commands: Vec::new(),
            api_base_url: api_base_url.into(),
            last_ticket: 0,
        }
    }

    /// 首次加载列表
    pub fn request_list(&mut self) {
        self.table.set_loading(true);
        self.commands.push(Command::LoadList);
    }

    /// 取出所有待执行的命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
