pub mod order;
pub mod report;

pub use order::{Order, PremiumFlag};
pub use report::{ProductCount, StateCount};
