pub mod activation;
pub mod loader;
pub mod source;
pub mod types;
