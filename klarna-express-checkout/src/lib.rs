//! # Klarna Express Checkout
//!
//! Klarna Express Checkout is a bridge exposing the native Express Checkout button to
//! cross-platform application layers.
//!
//! This crate is **not a payment SDK**. The native SDK renders the button and talks to the
//! payment provider; this crate validates what the application layer asks for, routes its
//! commands and normalizes what the native SDK reports back.
//!
//! ## Related Crates
//!
//! - **[`klarna-checkout-core`](https://docs.rs/klarna-checkout-core)**: configuration types, the
//!   configuration translator and the error normalizer. No I/O, no locking.
//! - **[`klarna-checkout-bridge`](https://docs.rs/klarna-checkout-bridge)**: the plugin shell with
//!   the button controllers, the registry and the event sink.
//!
//! ## Core Components Overview
//!
//! ### Configuration
//!
//! - **[`options`]**: [`translate`](options::translate) turns the untyped configuration map of a
//!   button into validated [`ButtonOptions`](options::ButtonOptions).
//! - **[`types`]**: session, style and environment types, the error code taxonomy and amounts in
//!   minor units.
//!
//! ### Native SDK Boundary
//!
//! - **[`native`]**: the [`NativeButtonFactory`](native::NativeButtonFactory) and
//!   [`ButtonDelegate`](native::ButtonDelegate) traits a native binding implements.
//! - **[`normalizer`]**: maps native error names to [`ErrorCode`](types::ErrorCode)s.
//! - **[`events`]**: the `authorized` and `error` events forwarded to the application layer.
//!
//! ### Plugin Shell
//!
//! - **[`plugin`]**: [`ExpressCheckoutPlugin`](plugin::ExpressCheckoutPlugin), the entry point.
//! - **[`controller`]**, **[`registry`]**, **[`sink`]** and **[`command`]**: the parts it is built
//!   from.
//!
//! ## Translating Configuration
//!
//! Missing identity credentials are fatal; anything unrecognized falls back to its default:
//!
//! ```
//! use klarna_express_checkout::{
//!     options::translate,
//!     types::{ButtonStyle, ErrorCode, Region, Theme},
//! };
//!
//! let config = serde_json::json!({
//!     "sessionType": "serverSide",
//!     "clientToken": "server-issued-token",
//!     "theme": "neon",
//!     "region": "eu",
//! });
//! let options = translate(Some(&config)).unwrap();
//! assert_eq!(options.style.theme, Theme::Dark);
//! assert_eq!(options.style.style, ButtonStyle::Filled);
//! assert_eq!(options.environment.region, Region::Eu);
//!
//! let err = translate(Some(&serde_json::json!({ "sessionType": "serverSide" }))).unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidConfiguration);
//! assert!(err.is_fatal);
//! ```
//!
//! ## Normalizing Native Errors
//!
//! Rules are checked in a fixed order, so a network failure during a session timeout is still a
//! network error:
//!
//! ```
//! use klarna_express_checkout::{normalizer::normalize, types::ErrorCode};
//!
//! assert_eq!(normalize("NetworkSessionTimeout"), ErrorCode::NetworkError);
//! assert_eq!(normalize("SessionExpiredError"), ErrorCode::SessionExpired);
//! assert_eq!(normalize("XyzFooBar"), ErrorCode::Unknown);
//! ```
//!
//! ## Binding a Native SDK
//!
//! A native binding implements [`NativeButtonFactory`](native::NativeButtonFactory). It receives
//! the validated options and a delegate to report the authorization result or errors through,
//! from any thread:
//!
//! ```
//! use std::{convert::Infallible, sync::Arc};
//!
//! use klarna_express_checkout::{
//!     events::ButtonEvent,
//!     native::{AuthorizationResponse, ButtonDelegate, NativeButton, NativeButtonFactory},
//!     options::ButtonOptions,
//!     plugin::ExpressCheckoutPlugin,
//! };
//!
//! struct InstantApproval {
//!     delegate: Arc<dyn ButtonDelegate>,
//! }
//!
//! impl InstantApproval {
//!     fn tap(&self) {
//!         self.delegate.on_authorized(AuthorizationResponse {
//!             approved: true,
//!             authorization_token: Some("auth-token".to_string()),
//!             ..Default::default()
//!         });
//!     }
//! }
//!
//! impl NativeButton for InstantApproval {}
//!
//! struct InstantApprovalSdk;
//!
//! impl NativeButtonFactory for InstantApprovalSdk {
//!     type Button = InstantApproval;
//!     type Error = Infallible;
//!
//!     fn create(
//!         &self,
//!         _options: &ButtonOptions,
//!         delegate: Arc<dyn ButtonDelegate>,
//!     ) -> Result<InstantApproval, Infallible> {
//!         Ok(InstantApproval { delegate })
//!     }
//! }
//!
//! let plugin = ExpressCheckoutPlugin::new(InstantApprovalSdk);
//! plugin.on_listen(|event: &ButtonEvent| {
//!     let data = event.as_authorized().unwrap();
//!     assert_eq!(data.authorization_token.as_deref(), Some("auth-token"));
//! });
//!
//! let button = plugin.create_button(7, Some(&serde_json::json!({ "clientId": "client-id" })));
//! button.with_native_button(|native| native.tap());
//! ```

pub mod errors {
    pub use klarna_checkout_core::errors::*;
}

pub mod events {
    pub use klarna_checkout_core::events::*;
}

pub mod native {
    pub use klarna_checkout_core::native::*;
}

pub mod normalizer {
    pub use klarna_checkout_core::normalizer::*;
}

pub mod options {
    pub use klarna_checkout_core::options::*;
}

pub mod types {
    pub use klarna_checkout_core::types::*;
}

pub mod command {
    pub use klarna_checkout_bridge::command::*;
}

pub mod controller {
    pub use klarna_checkout_bridge::controller::*;
}

pub mod plugin {
    pub use klarna_checkout_bridge::plugin::*;
}

pub mod registry {
    pub use klarna_checkout_bridge::registry::*;
}

pub mod sink {
    pub use klarna_checkout_bridge::sink::*;
}

pub use klarna_checkout_bridge::errors::CommandError;
