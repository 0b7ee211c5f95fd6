//! Command implementations.

pub mod annotate;
pub mod extract;
pub mod pipeline;

pub use self::annotate::execute_annotate;
pub use self::extract::execute_extract;
pub use self::pipeline::execute_pipeline;
