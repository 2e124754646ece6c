//! Collaborators the flow builder talks to, injected through context so
//! components never reach for globals.

pub mod api;
pub mod i18n;
pub mod notify;

use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{AppError, Queue, User};
use std::rc::Rc;

pub use api::HttpReferenceDataClient;
pub use i18n::{Catalog, Locale};
pub use notify::ToastNotifier;

/// Queues and users, fetched together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceData {
    pub queues: Vec<Queue>,
    pub users: Vec<User>,
}

/// Read access to the listings backing the selection dropdowns.
///
/// Futures are `?Send`: on the web they wrap browser `fetch` promises.
#[async_trait(?Send)]
pub trait ReferenceDataClient {
    async fn list_queues(&self) -> Result<Vec<Queue>, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
}

/// Where user-visible messages go.
pub trait NotificationSink {
    fn error(&self, message: String);
    fn success(&self, message: String);
}

/// Key-based string lookup.
pub trait Translator {
    fn t(&self, key: &str) -> String;

    /// Like [`t`](Translator::t) but `None` when the key has no entry.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Services provided at the app root.
#[derive(Clone)]
pub struct Services {
    pub reference_data: Rc<dyn ReferenceDataClient>,
    pub translator: Rc<dyn Translator>,
}

/// Hook to access the injected services.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Issue both listing requests concurrently. Either failing fails the whole
/// load; there is no partial result.
pub async fn fetch_reference_data(
    client: &dyn ReferenceDataClient,
) -> Result<ReferenceData, AppError> {
    let (queues, users) = futures::try_join!(client.list_queues(), client.list_users())?;
    tracing::debug!(queues = queues.len(), users = users.len(), "Reference data loaded");
    Ok(ReferenceData { queues, users })
}
