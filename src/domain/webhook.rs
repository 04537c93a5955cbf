use serde::Deserialize;

/// Remote subscription binding a callback URL to an event type. Uniqueness
/// key on the remote side is (owner, event, url).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebhookSubscription {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    pub event: String,
    #[serde(default)]
    pub enabled: bool,
}
