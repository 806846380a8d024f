pub mod registry;

pub use registry::{DuplicateKey, Registry};
