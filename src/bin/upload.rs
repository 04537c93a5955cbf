use std::process::ExitCode;
use std::sync::Arc;

use audiohook::application::services::{SubmissionService, UploadReceipt};
use audiohook::infrastructure::media::HttpMediaService;
use audiohook::presentation::config::{ClassificationSettings, MediaSettings};

/// Offline entry point: submits an upload-from-URL operation and prints
/// the new identifiers to stdout. Completion arrives later through the
/// webhook receiver, not this process.
#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((source_url, tags)) = args.split_first() else {
        eprintln!("usage: upload <source-url> [tag ...]");
        return ExitCode::from(1);
    };

    match run(source_url, tags).await {
        Ok(receipt) => {
            println!(
                "{}",
                serde_json::json!({
                    "audio": { "_id": receipt.audio_id },
                    "operation": { "_id": receipt.operation_id },
                })
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("upload failed: {e}");
            ExitCode::from(1)
        }
    }
}

async fn run(source_url: &str, tags: &[String]) -> anyhow::Result<UploadReceipt> {
    let media_settings = MediaSettings::from_env()?;
    let classification = ClassificationSettings::from_env();

    let media = Arc::new(HttpMediaService::new(
        &media_settings.base_url,
        &media_settings.api_token,
    ));
    let submissions = SubmissionService::new(media, classification.to_spec());

    Ok(submissions.upload(source_url, tags).await?)
}
