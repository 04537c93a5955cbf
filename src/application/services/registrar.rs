use std::sync::Arc;

use crate::application::ports::{MediaService, MediaServiceError};
use crate::domain::{EVENT_OPERATION_COMPLETE, WebhookSubscription};

/// Ensures an `operation.complete` subscription exists for the configured
/// callback URL. Safe to run on every startup: an existing subscription
/// with the same URL short-circuits without creating a duplicate.
pub struct WebhookRegistrar<M>
where
    M: MediaService,
{
    media: Arc<M>,
    secret: String,
}

impl<M> WebhookRegistrar<M>
where
    M: MediaService,
{
    pub fn new(media: Arc<M>, secret: String) -> Self {
        Self { media, secret }
    }

    pub async fn ensure(&self, url: &str) -> Result<WebhookSubscription, MediaServiceError> {
        let existing = self.media.list_webhooks(EVENT_OPERATION_COMPLETE).await?;

        if let Some(subscription) = existing.into_iter().find(|s| s.url == url) {
            tracing::debug!(
                webhook_id = %subscription.id,
                url = %url,
                "Webhook subscription already registered"
            );
            return Ok(subscription);
        }

        let subscription = self
            .media
            .create_webhook(url, EVENT_OPERATION_COMPLETE, &self.secret)
            .await?;

        tracing::info!(
            webhook_id = %subscription.id,
            url = %url,
            "Webhook subscription created"
        );

        Ok(subscription)
    }
}
