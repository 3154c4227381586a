pub mod cli;
pub mod commands;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod request;
pub mod settings;

pub use cli::{Cli, Command};
pub use commands::{execute, run, Outcome};
pub use error::{CommandError, InputError};
pub use fallback::{fallback_payload, Flow};
pub use settings::Settings;
