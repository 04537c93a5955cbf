use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use audiohook::application::ports::{ClassificationSpec, MediaService, MediaServiceError};
use audiohook::application::services::WebhookRegistrar;
use audiohook::domain::{SpeakerChannel, WebhookSubscription};

/// Stands in for the remote webhook registry: `create_webhook` appends,
/// `list_webhooks` returns everything appended so far.
#[derive(Default)]
struct FakeRegistry {
    subscriptions: Mutex<Vec<WebhookSubscription>>,
}

struct FakeMediaService {
    registry: Arc<FakeRegistry>,
}

#[async_trait]
impl MediaService for FakeMediaService {
    async fn create_audio(
        &self,
        _channels: &[SpeakerChannel],
    ) -> Result<String, MediaServiceError> {
        unimplemented!("not exercised by registrar tests")
    }

    async fn submit_transload(
        &self,
        _audio_id: &str,
        _source_url: &str,
        _tags: &[String],
    ) -> Result<String, MediaServiceError> {
        unimplemented!("not exercised by registrar tests")
    }

    async fn submit_classification(
        &self,
        _audio_id: &str,
        _spec: &ClassificationSpec,
        _tags: &[String],
    ) -> Result<String, MediaServiceError> {
        unimplemented!("not exercised by registrar tests")
    }

    async fn resolve_document_link(
        &self,
        _document_id: &str,
    ) -> Result<String, MediaServiceError> {
        unimplemented!("not exercised by registrar tests")
    }

    async fn list_webhooks(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookSubscription>, MediaServiceError> {
        Ok(self
            .registry
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.event == event && s.enabled)
            .cloned()
            .collect())
    }

    async fn create_webhook(
        &self,
        url: &str,
        event: &str,
        _secret: &str,
    ) -> Result<WebhookSubscription, MediaServiceError> {
        let mut subscriptions = self.registry.subscriptions.lock().unwrap();
        let subscription = WebhookSubscription {
            id: format!("wh-{}", subscriptions.len() + 1),
            url: url.to_string(),
            event: event.to_string(),
            enabled: true,
        };
        subscriptions.push(subscription.clone());
        Ok(subscription)
    }
}

fn registrar_with(registry: Arc<FakeRegistry>) -> WebhookRegistrar<FakeMediaService> {
    let media = Arc::new(FakeMediaService { registry });
    WebhookRegistrar::new(media, "shared-secret".to_string())
}

#[tokio::test]
async fn given_no_subscription_when_ensuring_then_one_is_created() {
    let registry = Arc::new(FakeRegistry::default());
    let registrar = registrar_with(Arc::clone(&registry));

    let subscription = registrar
        .ensure("https://bridge.example.com/hooks/operations")
        .await
        .unwrap();

    assert_eq!(subscription.url, "https://bridge.example.com/hooks/operations");
    assert_eq!(registry.subscriptions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_ensure_called_twice_with_same_url_then_exactly_one_subscription_exists() {
    let registry = Arc::new(FakeRegistry::default());
    let registrar = registrar_with(Arc::clone(&registry));

    let first = registrar
        .ensure("https://bridge.example.com/hooks/operations")
        .await
        .unwrap();
    let second = registrar
        .ensure("https://bridge.example.com/hooks/operations")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(registry.subscriptions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_existing_subscription_for_other_url_when_ensuring_then_new_one_is_created() {
    let registry = Arc::new(FakeRegistry::default());
    let registrar = registrar_with(Arc::clone(&registry));

    registrar
        .ensure("https://old.example.com/hooks/operations")
        .await
        .unwrap();
    registrar
        .ensure("https://new.example.com/hooks/operations")
        .await
        .unwrap();

    assert_eq!(registry.subscriptions.lock().unwrap().len(), 2);
}
