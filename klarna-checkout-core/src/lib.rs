//! Klarna Express Checkout core library.
//!
//! This library holds the decision logic of the Express Checkout button bridge:
//!
//! - [`options`]: the Configuration Translator, turning an untyped configuration map into
//!   validated [`ButtonOptions`](options::ButtonOptions).
//! - [`normalizer`]: the Error Normalizer, mapping native SDK error names onto the closed
//!   [`ErrorCode`](types::ErrorCode) taxonomy.
//! - [`events`]: the uniform event records forwarded to the application layer.
//! - [`native`]: the boundary traits the native SDK is driven and observed through.
//!
//! Everything here is pure: no I/O, no locking, no hidden state.

pub mod errors;
pub mod events;
pub mod native;
pub mod normalizer;
pub mod options;
pub mod types;
