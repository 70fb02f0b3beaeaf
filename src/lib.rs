pub mod classify;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod http;
pub mod render;

// re-export the types threaded through the pipeline
pub use crate::classify::{classify, ClassifiedResult};
pub use crate::error::FinderError;
