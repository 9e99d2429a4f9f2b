use std::sync::Arc;

use crate::system::application::ports::incoming::use_cases::{
    GetSystemUseCase, GetSystemsUseCase, SetSystemAvailabilityUseCase,
    UpdateSystemContentUseCase, UpdateSystemUseCase,
};
use crate::system::application::ports::outgoing::SystemRepository;
use crate::system::application::services::{
    SystemAvailabilityService, SystemQueryService, UpdateSystemContentService,
    UpdateSystemService,
};

#[derive(Clone)]
pub struct SystemUseCases {
    pub get_list: Arc<dyn GetSystemsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSystemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSystemUseCase + Send + Sync>,
    pub update_content: Arc<dyn UpdateSystemContentUseCase + Send + Sync>,
    pub set_availability: Arc<dyn SetSystemAvailabilityUseCase + Send + Sync>,
}

impl SystemUseCases {
    pub fn wire<R>(repository: R) -> Self
    where
        R: SystemRepository + Clone + 'static,
    {
        let queries = Arc::new(SystemQueryService::new(repository.clone()));
        Self {
            get_list: queries.clone(),
            get_single: queries,
            update: Arc::new(UpdateSystemService::new(repository.clone())),
            update_content: Arc::new(UpdateSystemContentService::new(repository.clone())),
            set_availability: Arc::new(SystemAvailabilityService::new(repository)),
        }
    }
}
