//! The plugin shell tying the pieces together.
//!
//! For details, see the [`ExpressCheckoutPlugin`] struct documentation.

use std::sync::Arc;

use bon::Builder;

use klarna_checkout_core::{
    native::NativeButtonFactory,
    types::{AnyJson, LoggingLevel},
};

use crate::{
    command::{Command, MethodCall, MethodResult},
    controller::ButtonController,
    errors::CommandError,
    registry::Registry,
    sink::{EventListener, EventSink},
};

/// The Express Checkout plugin.
///
/// Owns the native button factory, the [`Registry`] of active buttons and the single
/// [`EventSink`] shared by all of them.
///
/// ## Type Parameters
///
/// - `F`: The native SDK entry point, see [`NativeButtonFactory`].
///
/// ## Lifecycle
///
/// 1. **Create** ([`create_button`](ExpressCheckoutPlugin::create_button)): the platform embeds a
///    view and hands over its identifier and configuration.
/// 2. **Command** ([`handle_method_call`](ExpressCheckoutPlugin::handle_method_call) or the typed
///    methods): commands are routed to the addressed button through the registry.
/// 3. **Dispose** ([`dispose_button`](ExpressCheckoutPlugin::dispose_button)): the view goes away
///    and the native button is released.
///
/// Events from every button flow to the listener attached with
/// [`on_listen`](ExpressCheckoutPlugin::on_listen).
#[derive(Builder)]
pub struct ExpressCheckoutPlugin<F: NativeButtonFactory> {
    factory: F,
    #[builder(default, into)]
    sink: Arc<EventSink>,
    #[builder(skip)]
    registry: Registry<ButtonController<F::Button>>,
}

impl<F: NativeButtonFactory> std::fmt::Debug for ExpressCheckoutPlugin<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressCheckoutPlugin")
            .field("sink", &self.sink)
            .field("view_ids", &self.registry.view_ids())
            .finish_non_exhaustive()
    }
}

impl<F: NativeButtonFactory> ExpressCheckoutPlugin<F> {
    /// A plugin delivering events inline.
    pub fn new(factory: F) -> Self {
        Self::builder().factory(factory).build()
    }

    /// Attaches the event listener, replacing any previous one.
    pub fn on_listen(&self, listener: impl EventListener + 'static) {
        self.sink.on_listen(listener);
    }

    /// Detaches the event listener. Later events are dropped.
    pub fn on_cancel(&self) {
        self.sink.on_cancel();
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn events(&self) -> &Arc<EventSink> {
        &self.sink
    }

    pub fn registry(&self) -> &Registry<ButtonController<F::Button>> {
        &self.registry
    }

    /// Creates the button for a newly embedded view.
    ///
    /// A button still registered under `view_id` is disposed first. The returned controller is
    /// registered only if it reached the active state.
    pub fn create_button(
        &self,
        view_id: i64,
        config: Option<&AnyJson>,
    ) -> Arc<ButtonController<F::Button>> {
        if let Some(previous) = self.registry.remove(view_id) {
            #[cfg(feature = "tracing")]
            tracing::warn!("View {view_id} created twice; disposing the previous button");
            previous.dispose(&self.registry);
        }

        ButtonController::create(view_id, config, &self.factory, Arc::clone(&self.sink), &self.registry)
    }

    /// Disposes the button registered under `view_id`.
    pub fn dispose_button(&self, view_id: i64) -> Result<(), CommandError> {
        let controller = self.registry.get(view_id)?;
        controller.dispose(&self.registry);
        Ok(())
    }

    pub fn update_session(&self, view_id: i64, client_token: &str) -> Result<(), CommandError> {
        self.registry.get(view_id)?.update_session(client_token)
    }

    pub fn finalize_session(&self, view_id: i64) -> Result<(), CommandError> {
        self.registry.get(view_id)?.finalize_session()
    }

    pub fn set_logging_level(&self, view_id: i64, level: LoggingLevel) -> Result<(), CommandError> {
        self.registry.get(view_id)?.set_logging_level(level)
    }

    /// Executes a parsed command.
    pub fn execute(&self, command: Command) -> Result<(), CommandError> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Executing '{}'", command.method());

        match command {
            Command::Initialize { environment } => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Initialize acknowledged (environment='{environment}')");
                #[cfg(not(feature = "tracing"))]
                let _ = environment;
                Ok(())
            }
            Command::LoadButton => Ok(()),
            Command::UpdateSession {
                view_id,
                client_token,
            } => self.update_session(view_id, &client_token),
            Command::FinalizeSession { view_id } => self.finalize_session(view_id),
            Command::SetLoggingLevel { view_id, level } => self.set_logging_level(view_id, level),
        }
    }

    /// Entrypoint of the method channel.
    pub fn handle_method_call(&self, call: &MethodCall) -> MethodResult {
        let result = Command::try_from(call).and_then(|command| self.execute(command));

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!("Method '{}' failed: {err}", call.method);
        }

        result.into()
    }
}
