//! Core types used across the checkout bridge.

mod amount;
mod common;
mod environment;
mod error_code;
mod session;
mod style;

pub use amount::*;
pub use common::*;
pub use environment::*;
pub use error_code::*;
pub use session::*;
pub use style::*;
