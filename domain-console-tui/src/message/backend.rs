//! 后台请求结果消息

use domain_console_api::Domain;
use domain_console_core::CoreResult;

/// 后台任务完成后送回主循环的结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表加载（或刷新）完成，也包括列表缓存失效后的重新读取
    ListLoaded(CoreResult<Vec<Domain>>),
    /// 创建完成；`ticket` 为发起提交时面板持有的凭据
    Created { ticket: u64, result: CoreResult<Domain> },
    /// 编辑完成
    Updated { ticket: u64, result: CoreResult<Domain> },
    /// 验证完成
    Verified { id: String, result: CoreResult<Domain> },
    /// 删除完成，成功时携带服务端的原始文本响应
    Deleted { id: String, result: CoreResult<String> },
    /// 复制到剪贴板完成
    Copied(Result<(), String>),
}
