mod settings;

pub use settings::{
    ClassificationSettings, DEFAULT_CALLBACK_PATH, MediaSettings, ServerSettings, Settings,
    SettingsError, StorageSettings, WebhookSettings, derive_callback_path,
};
