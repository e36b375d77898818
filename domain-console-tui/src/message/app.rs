//! 应用主消息枚举

use super::{BackendMessage, DrawerMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 强制从服务端刷新列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 主循环心跳（用于过期通知）
    Tick,

    /// 列表相关消息
    Table(TableMessage),

    /// 侧边面板相关消息
    Drawer(DrawerMessage),

    /// 后台请求结果
    Backend(BackendMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
