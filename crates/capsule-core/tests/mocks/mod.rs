pub mod caption_source;
pub mod completion_service;
