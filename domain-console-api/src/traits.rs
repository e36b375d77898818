use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Domain, DomainDraft, DomainPatch, Mutation};

/// Source of the creation timestamp stamped on new records.
pub trait Clock: Send + Sync {
    /// Current time in epoch seconds.
    fn now_epoch_seconds(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// 域名集合 API
///
/// Typed access to the remote domain collection. Mutations report the cache
/// tags they invalidate so the caller can refetch dependent queries.
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// 获取全部域名
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// 获取单个域名，不存在时返回 `ApiError::NotFound`
    async fn get_domain(&self, id: &str) -> Result<Domain>;

    /// 创建域名
    ///
    /// The backend assigns `id`. The client forces `status = pending` and
    /// stamps `createdDate` at call time. Invalidates the collection.
    async fn add_domain(&self, draft: &DomainDraft) -> Result<Mutation<Domain>>;

    /// 更新域名（服务端合并字段），失效该条目的缓存
    async fn update_domain(&self, id: &str, patch: &DomainPatch) -> Result<Mutation<Domain>>;

    /// 删除域名
    ///
    /// The response body is plain text and returned verbatim. Invalidates the
    /// collection.
    async fn delete_domain(&self, id: &str) -> Result<Mutation<String>>;
}
