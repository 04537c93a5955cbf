use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassificationSpec, MediaService, MediaServiceError};
use crate::domain::{SpeakerChannel, WebhookSubscription};

/// reqwest-backed client for the remote audio-processing REST surface.
pub struct HttpMediaService {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpMediaService {
    pub fn new(base_url: &str, api_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, MediaServiceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| MediaServiceError::RequestFailed(format!("request: {}", e)))?;

        Self::decode(response).await
    }

    async fn get_json<R>(&self, path: &str) -> Result<R, MediaServiceError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| MediaServiceError::RequestFailed(format!("request: {}", e)))?;

        Self::decode(response).await
    }

    async fn decode<R>(response: reqwest::Response) -> Result<R, MediaServiceError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(MediaServiceError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MediaServiceError::InvalidResponse(e.to_string()))
    }
}

#[derive(Serialize)]
struct CreateAudioRequest<'a> {
    speakers: &'a [SpeakerChannel],
}

#[derive(Serialize)]
struct TransloadRequest<'a> {
    audio_id: &'a str,
    source_url: &'a str,
    tags: &'a [String],
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    audio_id: &'a str,
    language: &'a str,
    redact_pii: bool,
    tags: &'a [String],
}

#[derive(Serialize)]
struct CreateWebhookRequest<'a> {
    url: &'a str,
    event: &'a str,
    secret: &'a str,
}

#[derive(Deserialize)]
struct CreatedResponse {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Deserialize)]
struct DocumentLinkResponse {
    url: String,
}

#[async_trait]
impl MediaService for HttpMediaService {
    async fn create_audio(
        &self,
        channels: &[SpeakerChannel],
    ) -> Result<String, MediaServiceError> {
        let created: CreatedResponse = self
            .post_json("/v1/audio", &CreateAudioRequest { speakers: channels })
            .await?;

        tracing::debug!(audio_id = %created.id, "Audio entity created");
        Ok(created.id)
    }

    async fn submit_transload(
        &self,
        audio_id: &str,
        source_url: &str,
        tags: &[String],
    ) -> Result<String, MediaServiceError> {
        let created: CreatedResponse = self
            .post_json(
                "/v1/operations/transload",
                &TransloadRequest {
                    audio_id,
                    source_url,
                    tags,
                },
            )
            .await?;

        Ok(created.id)
    }

    async fn submit_classification(
        &self,
        audio_id: &str,
        spec: &ClassificationSpec,
        tags: &[String],
    ) -> Result<String, MediaServiceError> {
        let created: CreatedResponse = self
            .post_json(
                "/v1/operations/classify",
                &ClassifyRequest {
                    audio_id,
                    language: &spec.language,
                    redact_pii: spec.redact_pii,
                    tags,
                },
            )
            .await?;

        Ok(created.id)
    }

    async fn resolve_document_link(
        &self,
        document_id: &str,
    ) -> Result<String, MediaServiceError> {
        let link: DocumentLinkResponse = self
            .get_json(&format!("/v1/documents/{}/link", document_id))
            .await?;

        Ok(link.url)
    }

    async fn list_webhooks(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookSubscription>, MediaServiceError> {
        self.get_json(&format!("/v1/webhooks?event={}&enabled=true", event))
            .await
    }

    async fn create_webhook(
        &self,
        url: &str,
        event: &str,
        secret: &str,
    ) -> Result<WebhookSubscription, MediaServiceError> {
        self.post_json("/v1/webhooks", &CreateWebhookRequest { url, event, secret })
            .await
    }
}
