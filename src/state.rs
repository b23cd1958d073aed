//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AppService, CatalogService, DomainService, ReviewService, TokenService, UsageService,
};
use crate::infrastructure::persistence::MemoryRegistry;

/// Application state shared across all request handlers.
///
/// Every service is backed by the same [`MemoryRegistry`], so compound
/// operations (publish, usage, reviews) observe one consistent store.
/// Cloning is cheap: services are behind `Arc` and the registry shares its
/// inner state.
#[derive(Clone)]
pub struct AppState {
    pub app_service: Arc<AppService<MemoryRegistry>>,
    pub catalog_service: Arc<CatalogService<MemoryRegistry>>,
    pub domain_service: Arc<DomainService<MemoryRegistry>>,
    pub usage_service: Arc<UsageService<MemoryRegistry>>,
    pub review_service: Arc<ReviewService<MemoryRegistry>>,
    pub token_service: Arc<TokenService<MemoryRegistry>>,
    /// Direct store handle, used by the health check.
    pub registry: MemoryRegistry,
    /// Apex domain apps are served under, e.g. `tai.lat`.
    pub platform_domain: String,
}

impl AppState {
    /// Wires every service to the given registry.
    pub fn new(registry: MemoryRegistry, platform_domain: String) -> Self {
        let repository = Arc::new(registry.clone());

        Self {
            app_service: Arc::new(AppService::new(
                repository.clone(),
                platform_domain.clone(),
            )),
            catalog_service: Arc::new(CatalogService::new(
                repository.clone(),
                platform_domain.clone(),
            )),
            domain_service: Arc::new(DomainService::new(repository.clone())),
            usage_service: Arc::new(UsageService::new(repository.clone())),
            review_service: Arc::new(ReviewService::new(repository.clone())),
            token_service: Arc::new(TokenService::new(repository)),
            registry,
            platform_domain,
        }
    }
}
