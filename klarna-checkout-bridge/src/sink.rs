//! The single outbound event stream.
//!
//! The application layer attaches at most one [`EventListener`]. Events sent while no listener
//! is attached are dropped, never queued or retried.

use std::{fmt::Debug, sync::Arc};

use parking_lot::Mutex;

use klarna_checkout_core::events::ButtonEvent;

/// Receives events forwarded to the application layer.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &ButtonEvent);
}

impl<F> EventListener for F
where
    F: Fn(&ButtonEvent) + Send + Sync,
{
    fn on_event(&self, event: &ButtonEvent) {
        self(event)
    }
}

/// A delivery task handed to a [`Dispatcher`].
pub type Task = Box<dyn FnOnce() + Send>;

/// Moves event delivery onto the thread the application layer expects it on,
/// typically the platform's main thread.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, task: Task);
}

impl<F> Dispatcher for F
where
    F: Fn(Task) + Send + Sync,
{
    fn dispatch(&self, task: Task) {
        self(task)
    }
}

/// Delivers events synchronously on the sending thread.
///
/// Listeners may call back into the plugin, including disposing the button that sent the event.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn dispatch(&self, task: Task) {
        task()
    }
}

type ListenerSlot = Arc<Mutex<Option<Arc<dyn EventListener>>>>;

/// Fire-and-forget event sink with a single listener slot.
pub struct EventSink {
    listener: ListenerSlot,
    dispatcher: Arc<dyn Dispatcher>,
}

impl Default for EventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSink")
            .field("has_listener", &self.has_listener())
            .finish_non_exhaustive()
    }
}

impl EventSink {
    /// A sink delivering inline, see [`InlineDispatcher`].
    pub fn new() -> Self {
        Self::with_dispatcher(InlineDispatcher)
    }

    pub fn with_dispatcher(dispatcher: impl Dispatcher + 'static) -> Self {
        EventSink {
            listener: Arc::new(Mutex::new(None)),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Attaches `listener`, replacing any listener attached before.
    pub fn on_listen(&self, listener: impl EventListener + 'static) {
        *self.listener.lock() = Some(Arc::new(listener));
    }

    /// Detaches the current listener.
    pub fn on_cancel(&self) {
        *self.listener.lock() = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }

    /// Sends `event` through the dispatcher.
    ///
    /// The listener slot is read when the dispatched task runs, not when `send` is called.
    pub fn send(&self, event: ButtonEvent) {
        let slot = Arc::clone(&self.listener);

        self.dispatcher.dispatch(Box::new(move || {
            // Release the slot before calling out so a listener may detach itself.
            let listener = slot.lock().clone();
            match listener {
                Some(listener) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Sending '{}' event", event.event_type());
                    listener.on_event(&event);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "No listener attached; dropping '{}' event",
                        event.event_type()
                    );
                }
            }
        }));
    }
}
