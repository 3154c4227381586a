pub mod config;
pub mod ensemble;
pub mod error;
pub mod factory;
pub mod inspect;
pub mod traits;
pub mod types;

pub use config::*;
pub use ensemble::{ForestClassifier, ForestRegressor};
pub use error::ModelError;
pub use factory::*;
pub use inspect::*;
pub use traits::*;
pub use types::*;
