//! 域名管理服务

use std::sync::Arc;

use domain_console_api::{ApiError, CacheTag, Domain, DomainApi, DomainPatch};

use crate::cache::{Invalidation, QueryCache, QueryKey};
use crate::error::{CoreError, CoreResult};
use crate::form::{DomainFormValues, validate_domain};

/// 域名管理服务
///
/// Reads go through the query cache. Mutations never touch the cache
/// optimistically: they apply the tags the API reports, then refetch every
/// invalidated query that is still cached.
pub struct DomainService {
    api: Arc<dyn DomainApi>,
    cache: Arc<QueryCache>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(api: Arc<dyn DomainApi>) -> Self {
        Self::with_cache(api, Arc::new(QueryCache::new()))
    }

    #[must_use]
    pub fn with_cache(api: Arc<dyn DomainApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    // ========== Queries ==========

    /// 列出所有域名（命中缓存时不发请求）
    pub async fn list_domains(&self) -> CoreResult<Vec<Domain>> {
        if let Some(domains) = self.cache.list().await {
            return Ok(domains);
        }
        self.refetch_list().await
    }

    /// 强制从服务端重新获取列表
    pub async fn refetch_list(&self) -> CoreResult<Vec<Domain>> {
        let domains = self
            .api
            .list_domains()
            .await
            .map_err(|e| log_failure("list domains", e))?;
        self.cache.store_list(domains.clone()).await;
        Ok(domains)
    }

    /// 获取域名详情
    pub async fn get_domain(&self, id: &str) -> CoreResult<Domain> {
        if let Some(domain) = self.cache.one(id).await {
            return Ok(domain);
        }
        self.refetch_one(id).await
    }

    async fn refetch_one(&self, id: &str) -> CoreResult<Domain> {
        match self.api.get_domain(id).await {
            Ok(domain) => {
                self.cache.store_one(domain.clone()).await;
                Ok(domain)
            }
            Err(e) => {
                if matches!(e, ApiError::NotFound { .. }) {
                    self.cache.evict(&QueryKey::One(id.to_string())).await;
                }
                Err(log_failure("get domain", e))
            }
        }
    }

    // ========== Mutations ==========

    /// 新增域名（状态固定为 pending）
    pub async fn add_domain(&self, values: &DomainFormValues) -> CoreResult<Domain> {
        validate_domain(&values.domain)?;
        let mutation = self
            .api
            .add_domain(&values.to_draft())
            .await
            .map_err(|e| log_failure("add domain", e))?;
        self.settle(&mutation.invalidates).await;
        Ok(mutation.value)
    }

    /// 更新域名的可编辑字段
    ///
    /// Fails with [`CoreError::MissingIdentifier`] before any request when the
    /// id is absent or blank.
    pub async fn update_domain(
        &self,
        id: Option<&str>,
        values: &DomainFormValues,
    ) -> CoreResult<Domain> {
        let id = require_id(id)?;
        validate_domain(&values.domain)?;
        self.apply_patch(id, &values.to_patch(), "update domain").await
    }

    /// 将域名标记为已验证（只修改 status）
    pub async fn verify_domain(&self, id: &str) -> CoreResult<Domain> {
        let id = require_id(Some(id))?;
        self.apply_patch(id, &DomainPatch::verify(), "verify domain")
            .await
    }

    /// 删除域名，返回服务端的原始文本响应
    pub async fn delete_domain(&self, id: &str) -> CoreResult<String> {
        let id = require_id(Some(id))?;
        let mutation = self
            .api
            .delete_domain(id)
            .await
            .map_err(|e| log_failure("delete domain", e))?;
        self.cache.evict(&QueryKey::One(id.to_string())).await;
        self.settle(&mutation.invalidates).await;
        Ok(mutation.value)
    }

    async fn apply_patch(&self, id: &str, patch: &DomainPatch, action: &str) -> CoreResult<Domain> {
        let mutation = self
            .api
            .update_domain(id, patch)
            .await
            .map_err(|e| log_failure(action, e))?;
        self.settle(&mutation.invalidates).await;
        Ok(mutation.value)
    }

    /// Invalidate `tags`, refetch what they hit, then notify subscribers.
    ///
    /// A failed refetch leaves the entry stale and does not fail the mutation.
    async fn settle(&self, tags: &[CacheTag]) {
        let keys = self.cache.invalidate(tags).await;
        for key in &keys {
            let result = match key {
                QueryKey::List => self.refetch_list().await.map(|_| ()),
                QueryKey::One(id) => self.refetch_one(id).await.map(|_| ()),
            };
            if let Err(e) = result {
                log::warn!("Refetch of {key:?} after mutation failed: {e}");
            }
        }
        self.cache.publish(Invalidation {
            tags: tags.to_vec(),
            keys,
        });
    }
}

fn require_id(id: Option<&str>) -> CoreResult<&str> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => {
            log::warn!("Domain ID is missing");
            Err(CoreError::MissingIdentifier)
        }
    }
}

fn log_failure(action: &str, e: ApiError) -> CoreError {
    let err = CoreError::RequestFailed(e);
    if err.is_expected() {
        log::warn!("Failed to {action}: {err}");
    } else {
        log::error!("Failed to {action}: {err}");
    }
    err
}
