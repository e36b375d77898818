//! Command 分发：在 tokio 运行时上执行请求

use std::future::Future;
use std::sync::Arc;

use domain_console_api::CacheTag;
use domain_console_core::{DomainService, Subscription};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{BackendMessage, Command};
use crate::util::clipboard;

/// 主循环与 DomainService 之间的桥
pub struct Backend {
    runtime: Handle,
    service: Arc<DomainService>,
    tx: UnboundedSender<BackendMessage>,
}

impl Backend {
    /// 创建 Backend，返回结果接收端（由主循环持有）
    ///
    /// 同时订阅列表缓存的失效事件：创建或删除之后，服务层重新获取的列表
    /// 经由订阅以 `ListLoaded` 送回，主循环无需再发请求。
    pub fn new(
        runtime: Handle,
        service: Arc<DomainService>,
    ) -> (Self, UnboundedReceiver<BackendMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = service.cache().subscribe(vec![CacheTag::Collection]);
        runtime.spawn(forward_list_invalidations(
            subscription,
            Arc::clone(&service),
            tx.clone(),
        ));
        (
            Self {
                runtime,
                service,
                tx,
            },
            rx,
        )
    }

    /// 执行一条命令；网络请求在后台任务中完成，结果经通道送回
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {command:?}");
        let service = Arc::clone(&self.service);

        match command {
            Command::LoadList => self.spawn(async move {
                BackendMessage::ListLoaded(service.list_domains().await)
            }),
            Command::Refetch => self.spawn(async move {
                BackendMessage::ListLoaded(service.refetch_list().await)
            }),
            Command::Create { ticket, values } => self.spawn(async move {
                let result = service.add_domain(&values).await;
                BackendMessage::Created { ticket, result }
            }),
            Command::Update { ticket, id, values } => self.spawn(async move {
                let result = service.update_domain(id.as_deref(), &values).await;
                BackendMessage::Updated { ticket, result }
            }),
            Command::Verify(id) => self.spawn(async move {
                let result = service.verify_domain(&id).await;
                BackendMessage::Verified { id, result }
            }),
            Command::Delete(id) => self.spawn(async move {
                let result = service.delete_domain(&id).await;
                BackendMessage::Deleted { id, result }
            }),
            // 终端输出必须留在 UI 线程
            Command::Copy(text) => {
                let result = clipboard::copy(&text).map_err(|e| e.to_string());
                self.send(BackendMessage::Copied(result));
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = task.await;
            if tx.send(msg).is_err() {
                log::debug!("UI has shut down, dropping backend result");
            }
        });
    }

    fn send(&self, msg: BackendMessage) {
        if self.tx.send(msg).is_err() {
            log::debug!("UI has shut down, dropping backend result");
        }
    }
}

/// 列表缓存失效后读取（已重新获取的）缓存并送回主循环
async fn forward_list_invalidations(
    mut subscription: Subscription,
    service: Arc<DomainService>,
    tx: UnboundedSender<BackendMessage>,
) {
    while let Some(invalidation) = subscription.next().await {
        log::debug!("List invalidated by {:?}", invalidation.tags);
        let result = service.list_domains().await;
        if tx.send(BackendMessage::ListLoaded(result)).is_err() {
            break;
        }
    }
}
