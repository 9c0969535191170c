//! Shared application state
//!
//! Cloned into every request; all members are reference counted.

use std::sync::Arc;

use crate::domain::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::handlers::CreateClienteHandler;
use crate::projection::ProjectionService;
use crate::repository::ClienteStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClienteStore>,
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// State using the system date and the thread RNG
    pub fn new(store: Arc<dyn ClienteStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn create_handler(&self) -> CreateClienteHandler {
        CreateClienteHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn projection(&self) -> ProjectionService {
        ProjectionService::new(self.store.clone(), self.clock.clone(), self.random.clone())
    }
}
