use crate::storage::SubscriptionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubscriptionStore>,
}
