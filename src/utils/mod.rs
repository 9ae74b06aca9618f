pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{trim_control, wrap_lines_after};
