use std::sync::Arc;

use crate::catalog::application::CatalogUseCases;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::system::application::SystemUseCases;
use crate::tests::support::fakes::{
    RecordingNotifier, StubOtpAuthenticator, StubPasswordHasher, StubTokenProvider,
};
use crate::tests::support::in_memory::{
    InMemoryCatalogStore, InMemorySystemStore, InMemoryUserStore,
};
use crate::user::application::{UserCollaborators, UserUseCases};
use crate::AppState;

/// Real services over in-memory stores and stub collaborators.
#[derive(Default)]
pub struct TestAppStateBuilder {
    users: InMemoryUserStore,
    catalog: InMemoryCatalogStore,
    systems: InMemorySystemStore,
    notifier: Option<Arc<dyn UserEmailNotifier + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_store(mut self, store: InMemoryUserStore) -> Self {
        self.users = store;
        self
    }

    pub fn with_catalog_store(mut self, store: InMemoryCatalogStore) -> Self {
        self.catalog = store;
        self
    }

    pub fn with_system_store(mut self, store: InMemorySystemStore) -> Self {
        self.systems = store;
        self
    }

    pub fn with_notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn build(self) -> AppState {
        let deps = UserCollaborators {
            hasher: Arc::new(StubPasswordHasher),
            otp: Arc::new(StubOtpAuthenticator),
            tokens: Arc::new(StubTokenProvider),
            notifier: self
                .notifier
                .unwrap_or_else(|| Arc::new(RecordingNotifier::new())),
        };

        AppState {
            user: UserUseCases::wire(self.users.clone(), self.users, deps),
            catalog: CatalogUseCases::wire(self.catalog),
            system: SystemUseCases::wire(self.systems),
        }
    }
}
