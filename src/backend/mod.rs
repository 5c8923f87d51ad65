pub mod cloud;
pub mod common;
pub mod local;

pub use cloud::CloudBackend;
pub use common::TextBackend;
pub use local::LocalBackend;
