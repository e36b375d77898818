//! `DomainApi` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DomainApi;
use crate::types::{CacheTag, Domain, DomainDraft, DomainPatch, Mutation, Operation};

use super::RestDomainApi;

#[async_trait]
impl DomainApi for RestDomainApi {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let url = self.collection_url();
        self.request_json::<_, ()>(Operation::List, &url, None, None)
            .await
    }

    async fn get_domain(&self, id: &str) -> Result<Domain> {
        let url = self.item_url(id);
        self.request_json::<_, ()>(Operation::GetOne, &url, Some(id), None)
            .await
    }

    async fn add_domain(&self, draft: &DomainDraft) -> Result<Mutation<Domain>> {
        let url = self.collection_url();
        let body = draft.stamped(self.clock.now_epoch_seconds());
        let created: Domain = self
            .request_json(Operation::Create, &url, None, Some(&body))
            .await?;
        log::info!("Created domain {} ({})", created.id, created.domain);
        Ok(Mutation::new(created, vec![CacheTag::Collection]))
    }

    async fn update_domain(&self, id: &str, patch: &DomainPatch) -> Result<Mutation<Domain>> {
        let url = self.item_url(id);
        let updated: Domain = self
            .request_json(Operation::Update, &url, Some(id), Some(patch))
            .await?;
        log::info!("Updated domain {id}");
        Ok(Mutation::new(updated, vec![CacheTag::item(id)]))
    }

    async fn delete_domain(&self, id: &str) -> Result<Mutation<String>> {
        let url = self.item_url(id);
        let text = self.request_text(Operation::Delete, &url, Some(id)).await?;
        log::info!("Deleted domain {id}");
        Ok(Mutation::new(text, vec![CacheTag::Collection]))
    }
}
