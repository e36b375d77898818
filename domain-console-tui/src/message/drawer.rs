//! 侧边面板消息

/// 侧边面板（添加 / 编辑表单）消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerMessage {
    /// 向域名输入框输入字符
    Input(char),
    /// 删除域名输入框最后一个字符
    Backspace,
    /// 切换到下一个字段
    NextField,
    /// 切换到上一个字段
    PreviousField,
    /// 切换启用状态开关
    ToggleActive,
    /// 提交表单
    Submit,
    /// 关闭面板
    Close,
}
