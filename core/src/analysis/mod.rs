pub mod filter;
pub mod spread;

pub use filter::AlertFilter;
pub use spread::{base_radius, spread_radius};
