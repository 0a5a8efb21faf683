pub mod document;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod sessions;
