pub mod chat;
pub mod summarizer;
