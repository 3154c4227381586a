pub mod assessment;
pub mod category;
pub mod conditions;
pub mod history;
pub mod ledger;
pub mod lifetime;
pub mod lifetime_review;
pub mod recommend;
pub mod record;
pub mod risk;
pub mod screening;
pub mod subset;
pub mod verdict;

pub use assessment::*;
pub use category::*;
pub use conditions::*;
pub use history::*;
pub use ledger::*;
pub use lifetime::*;
pub use lifetime_review::*;
pub use recommend::*;
pub use record::*;
pub use risk::*;
pub use screening::*;
pub use subset::*;
pub use verdict::*;

/// Rounds half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
