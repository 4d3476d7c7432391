//! # Klarna Checkout Bridge
//!
//! The plugin shell that sits between an application layer and the native Express Checkout SDK.
//!
//! This crate provides [`ExpressCheckoutPlugin`](plugin::ExpressCheckoutPlugin), which creates one
//! [`ButtonController`](controller::ButtonController) per embedded button view, routes inbound
//! commands to it through a [`Registry`](registry::Registry) and forwards native callbacks as
//! events through a single [`EventSink`](sink::EventSink).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{convert::Infallible, sync::Arc};
//!
//! use klarna_checkout_bridge::{
//!     command::MethodCall,
//!     plugin::ExpressCheckoutPlugin,
//! };
//! use klarna_checkout_core::{
//!     events::ButtonEvent,
//!     native::{ButtonDelegate, NativeButton, NativeButtonFactory},
//!     options::ButtonOptions,
//! };
//!
//! struct SdkButton;
//! impl NativeButton for SdkButton {}
//!
//! struct Sdk;
//! impl NativeButtonFactory for Sdk {
//!     type Button = SdkButton;
//!     type Error = Infallible;
//!
//!     fn create(
//!         &self,
//!         _options: &ButtonOptions,
//!         _delegate: Arc<dyn ButtonDelegate>,
//!     ) -> Result<SdkButton, Infallible> {
//!         Ok(SdkButton)
//!     }
//! }
//!
//! let plugin = ExpressCheckoutPlugin::new(Sdk);
//! plugin.on_listen(|event: &ButtonEvent| println!("{:?}", event.to_json()));
//!
//! let button = plugin.create_button(1, Some(&serde_json::json!({ "clientId": "klarna-client-id" })));
//! assert!(button.is_active());
//!
//! let result = plugin.handle_method_call(
//!     &MethodCall::builder()
//!         .method("finalizeSession")
//!         .arguments(serde_json::json!({ "viewId": 1 }))
//!         .build(),
//! );
//! assert_eq!(result.error_code(), Some("NOT_SUPPORTED"));
//! ```
//!
//! ## Modules
//!
//! - [`plugin`]: The [`ExpressCheckoutPlugin`](plugin::ExpressCheckoutPlugin) entry point.
//! - [`controller`]: Per-button lifecycle and native callback handling.
//! - [`registry`]: Identifier to controller mapping, safe against concurrent disposal.
//! - [`sink`]: The single-listener outbound event stream and its [`Dispatcher`](sink::Dispatcher).
//! - [`command`]: Method-call parsing, responses and channel names.
//! - [`errors`]: Command-dispatch errors and their wire codes.
//!
//! ## Limitations
//!
//! The native SDK cannot change the session, finalization behaviour or logging level of a
//! constructed button. `updateSession`, `finalizeSession` and `setLoggingLevel` are therefore
//! always rejected with a `notSupported` event and a `NOT_SUPPORTED` response; dispose the button
//! and create a new one instead.

pub mod command;
pub mod controller;
pub mod errors;
pub mod plugin;
pub mod registry;
pub mod sink;
