//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_console_api::{
    ApiError, CacheTag, Domain, DomainApi, DomainDraft, DomainPatch, Mutation, Result,
    VerificationStatus,
};
use tokio::sync::RwLock;

use crate::services::DomainService;

// ===== MockDomainApi =====

/// In-memory backend that behaves like the remote collection.
pub struct MockDomainApi {
    records: RwLock<BTreeMap<String, Domain>>,
    next_id: RwLock<u64>,
    /// 如果 Some，所有请求都返回该状态码的错误
    failure: RwLock<Option<u16>>,
    list_calls: RwLock<usize>,
    get_calls: RwLock<usize>,
    mutation_calls: RwLock<usize>,
}

impl MockDomainApi {
    /// Timestamp stamped on created records.
    pub const NOW: i64 = 1_738_000_000;

    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: RwLock::new(100),
            failure: RwLock::new(None),
            list_calls: RwLock::new(0),
            get_calls: RwLock::new(0),
            mutation_calls: RwLock::new(0),
        }
    }

    pub async fn seed(&self, domains: Vec<Domain>) {
        let mut records = self.records.write().await;
        for domain in domains {
            records.insert(domain.id.clone(), domain);
        }
    }

    pub async fn set_failure(&self, status: Option<u16>) {
        *self.failure.write().await = status;
    }

    pub async fn list_calls(&self) -> usize {
        *self.list_calls.read().await
    }

    pub async fn get_calls(&self) -> usize {
        *self.get_calls.read().await
    }

    pub async fn mutation_calls(&self) -> usize {
        *self.mutation_calls.read().await
    }

    async fn check_failure(&self) -> Result<()> {
        match *self.failure.read().await {
            Some(status) => Err(ApiError::RequestFailed {
                status,
                body: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DomainApi for MockDomainApi {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        *self.list_calls.write().await += 1;
        self.check_failure().await?;
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get_domain(&self, id: &str) -> Result<Domain> {
        *self.get_calls.write().await += 1;
        self.check_failure().await?;
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }

    async fn add_domain(&self, draft: &DomainDraft) -> Result<Mutation<Domain>> {
        *self.mutation_calls.write().await += 1;
        self.check_failure().await?;
        let wire = draft.stamped(Self::NOW);
        let id = {
            let mut next = self.next_id.write().await;
            *next += 1;
            next.to_string()
        };
        let domain = Domain {
            id: id.clone(),
            domain: wire.domain,
            is_active: wire.is_active,
            status: wire.status,
            created_date: wire.created_date.unwrap_or_default(),
        };
        self.records.write().await.insert(id, domain.clone());
        Ok(Mutation::new(domain, vec![CacheTag::Collection]))
    }

    async fn update_domain(&self, id: &str, patch: &DomainPatch) -> Result<Mutation<Domain>> {
        *self.mutation_calls.write().await += 1;
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        if let Some(domain) = &patch.domain {
            record.domain.clone_from(domain);
        }
        if let Some(is_active) = patch.is_active {
            record.is_active = is_active;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        Ok(Mutation::new(record.clone(), vec![CacheTag::item(id)]))
    }

    async fn delete_domain(&self, id: &str) -> Result<Mutation<String>> {
        *self.mutation_calls.write().await += 1;
        self.check_failure().await?;
        self.records
            .write()
            .await
            .remove(id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        Ok(Mutation::new(format!("deleted {id}"), vec![CacheTag::Collection]))
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `DomainService`
pub fn create_test_domain_service() -> (DomainService, Arc<MockDomainApi>) {
    let api = Arc::new(MockDomainApi::new());
    let service = DomainService::new(api.clone());
    (service, api)
}

/// 创建一个 pending 状态的测试域名
pub fn test_domain(id: &str, domain: &str) -> Domain {
    Domain {
        id: id.to_string(),
        domain: domain.to_string(),
        is_active: true,
        status: VerificationStatus::Pending,
        created_date: 1_700_000_000,
    }
}
