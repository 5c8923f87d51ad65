pub mod backend;
pub mod command;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod settings;

pub use command::{OllamaCli, OllamaCliArgs};
pub use dispatch::{Dispatcher, Route};
pub use error::DispatchError;
pub use settings::{CloudCredential, Settings};
