use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use audiohook::application::ports::TranscriptStore;
use audiohook::application::services::{
    CallbackDispatcher, SignatureKey, SubmissionService, WebhookRegistrar,
};
use audiohook::infrastructure::download::HttpTranscriptFetcher;
use audiohook::infrastructure::media::HttpMediaService;
use audiohook::infrastructure::observability::{TracingConfig, init_tracing};
use audiohook::infrastructure::storage::LocalTranscriptStore;
use audiohook::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let media = Arc::new(HttpMediaService::new(
        &settings.media.base_url,
        &settings.media.api_token,
    ));

    let store: Option<Arc<dyn TranscriptStore>> = match &settings.storage.transcript_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Storing transcripts locally");
            Some(Arc::new(LocalTranscriptStore::new(dir.clone())?))
        }
        None => {
            tracing::warn!("TRANSCRIPT_DIR not set; transcript links will be logged, not fetched");
            None
        }
    };

    let fetcher = Arc::new(HttpTranscriptFetcher::new(Arc::clone(&media), store));
    let submissions = Arc::new(SubmissionService::new(
        Arc::clone(&media),
        settings.classification.to_spec(),
    ));
    let dispatcher = Arc::new(CallbackDispatcher::new(
        SignatureKey::new(&settings.webhook.secret),
        submissions,
        fetcher,
    ));

    let registrar = WebhookRegistrar::new(Arc::clone(&media), settings.webhook.secret.clone());
    match registrar.ensure(&settings.webhook.callback_url).await {
        Ok(subscription) => {
            tracing::info!(webhook_id = %subscription.id, "Webhook subscription ensured");
        }
        Err(e) => {
            // An earlier registration may still deliver; a remote outage
            // at boot must not take the receiver down with it.
            tracing::error!(error = %e, "Webhook registration failed, continuing");
        }
    }

    let callback_path = settings.webhook.callback_path();
    let router = create_router(AppState { dispatcher }, &callback_path);

    let ip = settings.server.host.parse()?;
    let addr = SocketAddr::new(ip, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
