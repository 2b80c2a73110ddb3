pub mod error;
pub mod json;

pub use json::ApiJson;
