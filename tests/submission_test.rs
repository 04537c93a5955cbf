use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use audiohook::application::ports::{ClassificationSpec, MediaService, MediaServiceError};
use audiohook::application::services::SubmissionService;
use audiohook::domain::{SpeakerChannel, SpeakerRole, WebhookSubscription};

#[derive(Default)]
struct RecordedSubmissions {
    audio_channels: Mutex<Vec<Vec<SpeakerChannel>>>,
    transloads: Mutex<Vec<(String, String, Vec<String>)>>,
    classifications: Mutex<Vec<(String, ClassificationSpec, Vec<String>)>>,
}

struct MockMediaService {
    calls: Arc<RecordedSubmissions>,
}

#[async_trait]
impl MediaService for MockMediaService {
    async fn create_audio(
        &self,
        channels: &[SpeakerChannel],
    ) -> Result<String, MediaServiceError> {
        self.calls
            .audio_channels
            .lock()
            .unwrap()
            .push(channels.to_vec());
        Ok("audio-1".to_string())
    }

    async fn submit_transload(
        &self,
        audio_id: &str,
        source_url: &str,
        tags: &[String],
    ) -> Result<String, MediaServiceError> {
        self.calls.transloads.lock().unwrap().push((
            audio_id.to_string(),
            source_url.to_string(),
            tags.to_vec(),
        ));
        Ok("op-t-1".to_string())
    }

    async fn submit_classification(
        &self,
        audio_id: &str,
        spec: &ClassificationSpec,
        tags: &[String],
    ) -> Result<String, MediaServiceError> {
        self.calls.classifications.lock().unwrap().push((
            audio_id.to_string(),
            spec.clone(),
            tags.to_vec(),
        ));
        Ok("op-c-1".to_string())
    }

    async fn resolve_document_link(
        &self,
        _document_id: &str,
    ) -> Result<String, MediaServiceError> {
        unimplemented!("not exercised by submission tests")
    }

    async fn list_webhooks(
        &self,
        _event: &str,
    ) -> Result<Vec<WebhookSubscription>, MediaServiceError> {
        unimplemented!("not exercised by submission tests")
    }

    async fn create_webhook(
        &self,
        _url: &str,
        _event: &str,
        _secret: &str,
    ) -> Result<WebhookSubscription, MediaServiceError> {
        unimplemented!("not exercised by submission tests")
    }
}

fn service_with(calls: Arc<RecordedSubmissions>) -> SubmissionService<MockMediaService> {
    let media = Arc::new(MockMediaService { calls });
    SubmissionService::new(media, ClassificationSpec::default())
}

#[tokio::test]
async fn given_audio_id_when_analyzing_then_classification_is_tagged_with_it() {
    let calls = Arc::new(RecordedSubmissions::default());
    let service = service_with(Arc::clone(&calls));

    let operation_id = service.analyze_audio("audio-42").await.unwrap();

    assert_eq!(operation_id, "op-c-1");
    let classifications = calls.classifications.lock().unwrap();
    assert_eq!(classifications.len(), 1);
    assert_eq!(classifications[0].0, "audio-42");
    assert_eq!(classifications[0].2, vec!["audio-42".to_string()]);
}

#[tokio::test]
async fn given_source_url_when_uploading_then_audio_is_created_with_fixed_roles() {
    let calls = Arc::new(RecordedSubmissions::default());
    let service = service_with(Arc::clone(&calls));

    let receipt = service
        .upload("https://recordings.example.com/call.wav", &[])
        .await
        .unwrap();

    assert_eq!(receipt.audio_id, "audio-1");
    assert_eq!(receipt.operation_id, "op-t-1");

    let channels = calls.audio_channels.lock().unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0][0].channel, 0);
    assert_eq!(channels[0][0].role, SpeakerRole::Agent);
    assert_eq!(channels[0][1].channel, 1);
    assert_eq!(channels[0][1].role, SpeakerRole::Customer);
}

#[tokio::test]
async fn given_caller_tags_when_uploading_then_transload_carries_audio_id_and_tags() {
    let calls = Arc::new(RecordedSubmissions::default());
    let service = service_with(Arc::clone(&calls));

    service
        .upload(
            "https://recordings.example.com/call.wav",
            &["campaign-7".to_string()],
        )
        .await
        .unwrap();

    let transloads = calls.transloads.lock().unwrap();
    assert_eq!(transloads.len(), 1);
    assert_eq!(transloads[0].0, "audio-1");
    assert_eq!(transloads[0].1, "https://recordings.example.com/call.wav");
    assert_eq!(
        transloads[0].2,
        vec!["audio-1".to_string(), "campaign-7".to_string()]
    );
}
