//! The Button Controller: one instance per rendered button.
//!
//! A controller translates its configuration, asks the native SDK for a button, receives the
//! native callbacks and turns them into [`ButtonEvent`]s.
//!
//! ```text
//! Uninitialized ──▶ Configuring ──▶ Active ──▶ Disposed
//!                        │
//!                        └────────▶ Failed
//! ```
//!
//! Events are sent while the state lock is held, so no event leaves a controller once it is
//! disposed. The lock is reentrant: a listener may dispose the button it is being told about.

use std::{cell::Cell, sync::Arc};

use parking_lot::{Mutex, ReentrantMutex};

use klarna_checkout_core::{
    errors::ValidationError,
    events::{ButtonEvent, ErrorData},
    native::{AuthorizationResponse, ButtonDelegate, NativeButton, NativeButtonFactory, NativeError},
    options::{ButtonOptions, translate},
    types::{AnyJson, ErrorCode, LoggingLevel},
};

use crate::{errors::CommandError, registry::Registry, sink::EventSink};

/// Lifecycle state of a [`ButtonController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Uninitialized,
    Configuring,
    /// The native button exists and the controller is registered.
    Active,
    /// Translation or native construction failed; nothing is rendered.
    Failed,
    Disposed,
}

/// Where the native button currently is.
enum NativeSlot<B> {
    Empty,
    Ready(B),
    /// Handed out by [`ButtonController::with_native_button`].
    Lent,
}

/// Owns one native button and forwards its callbacks as events.
pub struct ButtonController<B: NativeButton> {
    view_id: i64,
    sink: Arc<EventSink>,
    state: ReentrantMutex<Cell<ButtonState>>,
    options: Option<ButtonOptions>,
    native: Mutex<NativeSlot<B>>,
}

impl<B: NativeButton> std::fmt::Debug for ButtonController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonController")
            .field("view_id", &self.view_id)
            .field("state", &self.state())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<B: NativeButton> ButtonController<B> {
    /// Creates a controller for `view_id` and drives it to [`ButtonState::Active`] or
    /// [`ButtonState::Failed`].
    ///
    /// On success the native button is constructed and the controller registers itself in
    /// `registry`. On failure exactly one `error` event is sent and nothing is registered.
    pub fn create<F>(
        view_id: i64,
        config: Option<&AnyJson>,
        factory: &F,
        sink: Arc<EventSink>,
        registry: &Registry<Self>,
    ) -> Arc<Self>
    where
        F: NativeButtonFactory<Button = B>,
    {
        let translated = translate(config);

        let controller = Arc::new(ButtonController {
            view_id,
            sink,
            state: ReentrantMutex::new(Cell::new(ButtonState::Uninitialized)),
            options: translated.as_ref().ok().cloned(),
            native: Mutex::new(NativeSlot::Empty),
        });
        controller.transition(ButtonState::Configuring);

        match translated {
            Ok(options) => controller.build(&options, factory, registry),
            Err(err) => controller.reject_configuration(err),
        }
        controller
    }

    fn build<F>(self: &Arc<Self>, options: &ButtonOptions, factory: &F, registry: &Registry<Self>)
    where
        F: NativeButtonFactory<Button = B>,
    {
        let delegate: Arc<dyn ButtonDelegate> = Arc::new(Arc::downgrade(self));

        match factory.create(options, delegate) {
            Ok(button) => {
                *self.native.lock() = NativeSlot::Ready(button);
                self.transition(ButtonState::Active);

                if let Some(previous) = registry.insert(self.view_id, Arc::clone(self)) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("View {} was still registered; releasing it", self.view_id);
                    previous.shutdown();
                }
            }
            Err(err) => {
                let state = self.state.lock();
                self.set_state(&state, ButtonState::Failed);
                self.emit(ButtonEvent::error(
                    ErrorData::builder()
                        .code(ErrorCode::InitializationError)
                        .message(format!("Failed to create native button: {err}"))
                        .is_fatal(true)
                        .build(),
                ));
            }
        }
    }

    fn reject_configuration(&self, err: ValidationError) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "View {} configuration rejected (fatal={}): {err}",
            self.view_id,
            err.is_fatal
        );

        let state = self.state.lock();
        self.set_state(&state, ButtonState::Failed);
        self.emit(ButtonEvent::error(err));
    }

    pub fn view_id(&self) -> i64 {
        self.view_id
    }

    pub fn state(&self) -> ButtonState {
        self.state.lock().get()
    }

    pub fn is_active(&self) -> bool {
        self.state() == ButtonState::Active
    }

    /// The options the native button was built with; `None` if translation failed.
    pub fn options(&self) -> Option<&ButtonOptions> {
        self.options.as_ref()
    }

    /// Runs `f` against the native button.
    ///
    /// Returns `None` when there is no native button, or while another call has it. No lock is
    /// held while `f` runs, so native callbacks fired from `f` may dispose the button; it is then
    /// released once `f` returns.
    pub fn with_native_button<R>(&self, f: impl FnOnce(&mut B) -> R) -> Option<R> {
        let taken = std::mem::replace(&mut *self.native.lock(), NativeSlot::Lent);
        let mut button = match taken {
            NativeSlot::Ready(button) => button,
            other => {
                *self.native.lock() = other;
                return None;
            }
        };

        let result = f(&mut button);

        let mut slot = self.native.lock();
        if matches!(*slot, NativeSlot::Lent) {
            *slot = NativeSlot::Ready(button);
        } else {
            // Disposed while lent.
            drop(slot);
            button.release();
        }
        Some(result)
    }

    /// Rejected: the native SDK cannot swap the session of a constructed button.
    pub fn update_session(&self, _client_token: &str) -> Result<(), CommandError> {
        self.reject_unsupported("updateSession")
    }

    /// Rejected: finalization behaviour is fixed at construction.
    pub fn finalize_session(&self) -> Result<(), CommandError> {
        self.reject_unsupported("finalizeSession")
    }

    /// Rejected: the logging level is fixed at construction.
    pub fn set_logging_level(&self, _level: LoggingLevel) -> Result<(), CommandError> {
        self.reject_unsupported("setLoggingLevel")
    }

    /// Unregisters the controller and releases the native button.
    pub fn dispose(self: &Arc<Self>, registry: &Registry<Self>) {
        registry.remove_entry(self.view_id, self);
        self.shutdown();
    }

    fn shutdown(&self) {
        {
            let state = self.state.lock();
            if state.get() == ButtonState::Disposed {
                return;
            }
            self.set_state(&state, ButtonState::Disposed);
        }

        let released = std::mem::replace(&mut *self.native.lock(), NativeSlot::Empty);
        if let NativeSlot::Ready(mut button) = released {
            button.release();
        }
    }

    fn reject_unsupported(&self, command: &'static str) -> Result<(), CommandError> {
        let state = self.state.lock();
        if state.get() != ButtonState::Active {
            return Err(CommandError::ViewNotFound(self.view_id));
        }

        let err = CommandError::NotSupported {
            view_id: self.view_id,
            command,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("View {}: {err}", self.view_id);

        self.emit(ButtonEvent::error(
            ErrorData::builder()
                .code(ErrorCode::NotSupported)
                .message(err.to_string())
                .is_fatal(false)
                .build(),
        ));
        Err(err)
    }

    fn transition(&self, next: ButtonState) {
        let state = self.state.lock();
        self.set_state(&state, next);
    }

    fn set_state(&self, state: &Cell<ButtonState>, next: ButtonState) {
        let previous = state.replace(next);

        #[cfg(feature = "tracing")]
        tracing::debug!("View {} state: {previous:?} -> {next:?}", self.view_id);
        #[cfg(not(feature = "tracing"))]
        let _ = previous;
    }

    /// Sends `event` if the controller is active. Holds the state lock until the event is sent.
    fn emit_if_active(&self, event: impl FnOnce() -> ButtonEvent) {
        let state = self.state.lock();
        if state.get() != ButtonState::Active {
            #[cfg(feature = "tracing")]
            tracing::debug!("View {} is not active; dropping native callback", self.view_id);
            return;
        }
        self.emit(event());
    }

    fn emit(&self, event: ButtonEvent) {
        self.sink.send(event);
    }
}

impl<B: NativeButton> ButtonDelegate for ButtonController<B> {
    fn on_authorized(&self, response: AuthorizationResponse) {
        self.emit_if_active(|| ButtonEvent::authorized(response.into()));
    }

    fn on_error(&self, error: NativeError) {
        self.emit_if_active(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "View {} native error '{}' normalized to '{}'",
                self.view_id,
                error.name,
                error.code()
            );
            ButtonEvent::error(error)
        });
    }
}
