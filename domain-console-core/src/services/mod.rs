//! 业务逻辑服务层

mod domain_service;

pub use domain_service::DomainService;
