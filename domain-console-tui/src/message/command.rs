//! Update 层发出的副作用请求

use domain_console_core::DomainFormValues;

/// 交给 Backend 执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 读取列表（命中缓存时不发请求）
    LoadList,
    /// 强制从服务端重新获取列表
    Refetch,
    /// 创建域名
    Create {
        ticket: u64,
        values: DomainFormValues,
    },
    /// 编辑域名；`id` 缺失时由服务层拒绝
    Update {
        ticket: u64,
        id: Option<String>,
        values: DomainFormValues,
    },
    /// 验证域名
    Verify(String),
    /// 删除域名
    Delete(String),
    /// 复制文本到剪贴板
    Copy(String),
}
