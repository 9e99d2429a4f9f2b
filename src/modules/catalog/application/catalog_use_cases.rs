use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    DeleteCatalogEntityUseCase, GetCatalogEntitiesUseCase, GetCatalogEntityUseCase,
    ToggleAvailabilityUseCase, UpdateCatalogEntityUseCase,
};
use crate::catalog::application::ports::outgoing::CatalogRepository;
use crate::catalog::application::services::{
    CatalogQueryService, DeleteCatalogEntityService, ToggleAvailabilityService,
    UpdateCatalogEntityService,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub get_list: Arc<dyn GetCatalogEntitiesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCatalogEntityUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCatalogEntityUseCase + Send + Sync>,
    pub toggle_availability: Arc<dyn ToggleAvailabilityUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCatalogEntityUseCase + Send + Sync>,
}

impl CatalogUseCases {
    pub fn wire<R>(repository: R) -> Self
    where
        R: CatalogRepository + Clone + 'static,
    {
        let queries = Arc::new(CatalogQueryService::new(repository.clone()));
        Self {
            get_list: queries.clone(),
            get_single: queries,
            update: Arc::new(UpdateCatalogEntityService::new(repository.clone())),
            toggle_availability: Arc::new(ToggleAvailabilityService::new(repository.clone())),
            delete: Arc::new(DeleteCatalogEntityService::new(repository)),
        }
    }
}
