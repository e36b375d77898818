//! 列表页消息

/// 列表页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    /// 选择下一行
    SelectNext,
    /// 选择上一行
    SelectPrevious,
    /// 下一页
    NextPage,
    /// 上一页
    PreviousPage,

    /// 打开添加面板
    Add,
    /// 编辑选中行
    Edit,
    /// 验证选中行
    Verify,
    /// 删除选中行
    Delete,
    /// 复制选中行的域名
    Copy,

    /// 切换排序方向
    ToggleSort,

    // === 搜索 ===
    /// 进入搜索输入
    StartSearch,
    /// 结束搜索输入（保留关键字）
    EndSearch,
    /// 清空关键字并结束搜索输入
    ClearSearch,
    SearchInput(char),
    SearchBackspace,
}
