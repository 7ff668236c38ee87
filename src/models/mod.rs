pub mod account;
pub mod campaign;
pub mod dashboard;
pub mod date_range;
pub mod metrics;

pub use account::*;
pub use campaign::*;
pub use dashboard::*;
pub use date_range::*;
pub use metrics::*;
