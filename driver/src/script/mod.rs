pub mod steps;

pub use steps::{Script, Step};
