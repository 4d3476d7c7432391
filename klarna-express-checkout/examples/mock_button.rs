//! Drives the plugin against a simulated native SDK.
//!
//! Run with `cargo run --example mock_button`.

use std::{
    convert::Infallible,
    sync::{Arc, mpsc},
    thread,
    time::Duration,
};

use klarna_express_checkout::{
    command::MethodCall,
    events::ButtonEvent,
    native::{AuthorizationResponse, ButtonDelegate, NativeButton, NativeButtonFactory},
    options::ButtonOptions,
    plugin::ExpressCheckoutPlugin,
    sink::{EventSink, Task},
};

/// Approves every session shortly after the button is built, from a background thread.
struct SimulatedSdk;

struct SimulatedButton;

impl NativeButton for SimulatedButton {
    fn release(&mut self) {
        tracing::info!("Native button released");
    }
}

impl NativeButtonFactory for SimulatedSdk {
    type Button = SimulatedButton;
    type Error = Infallible;

    fn create(
        &self,
        options: &ButtonOptions,
        delegate: Arc<dyn ButtonDelegate>,
    ) -> Result<SimulatedButton, Infallible> {
        tracing::info!(
            "Building native button in {} ({})",
            options.environment.environment,
            options.environment.region
        );

        let collect = options
            .session
            .as_client_side()
            .is_some_and(|session| session.collect_shipping_address);

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            delegate.on_authorized(AuthorizationResponse {
                approved: true,
                session_id: None,
                authorization_token: Some("simulated-auth-token".to_string()),
                collected_shipping_address: collect
                    .then(|| r#"{"city":"Stockholm","country":"SE"}"#.to_string()),
                finalize_required: Some(false),
            });
        });

        Ok(SimulatedButton)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // Deliveries are queued and run on the main thread below.
    let (tx, rx) = mpsc::channel::<Task>();
    let tx = std::sync::Mutex::new(tx);
    let sink = EventSink::with_dispatcher(move |task: Task| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(task);
        }
    });

    let plugin = ExpressCheckoutPlugin::builder()
        .factory(SimulatedSdk)
        .sink(sink)
        .build();

    plugin.on_listen(|event: &ButtonEvent| match event.to_json() {
        Ok(json) => tracing::info!("Event: {json}"),
        Err(err) => tracing::error!("Failed to encode event: {err}"),
    });

    let client_id = std::env::var("KLARNA_CLIENT_ID").unwrap_or_else(|_| "demo-client-id".to_string());
    let config = serde_json::json!({
        "clientId": client_id,
        "amount": 49.90,
        "currency": "SEK",
        "collectShippingAddress": true,
        "environment": "sandbox",
        "region": "EU",
        "shape": "pill",
    });

    let button = plugin.create_button(1, Some(&config));
    tracing::info!("Button state: {:?}", button.state());

    let result = plugin.handle_method_call(
        &MethodCall::builder()
            .method("updateSession")
            .arguments(serde_json::json!({ "viewId": 1, "clientToken": "new-token" }))
            .build(),
    );
    tracing::info!("updateSession -> {}", result.to_json());

    // One notSupported event, then the authorization.
    let delivered = rx.iter().take(2).map(|task| task()).count();
    tracing::info!("Delivered {delivered} events");

    if let Err(err) = plugin.dispose_button(1) {
        tracing::error!("Dispose failed: {err}");
    }
}
