mod http_media_service;

pub use http_media_service::HttpMediaService;
