//! Telegram alert forwarding.
//!
//! `AlertLayer` is a `tracing` layer that picks up every `ERROR` event and every event logged
//! with `target: "alert"`, formats it as a short text line and hands it to a background task
//! that posts it to the Telegram Bot API. Delivery is best effort: failures are logged at
//! `warn` and the alert is dropped.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, Layer};

use crate::server::config::TelegramConfig;

/// Target for business events that should be forwarded as alerts.
pub const ALERT_TARGET: &str = "alert";

/// Target of delivery failure warnings, never forwarded.
const DELIVERY_TARGET: &str = "alert_delivery";

/// Layer forwarding alert-worthy events to the delivery task.
pub struct AlertLayer {
    sender: UnboundedSender<String>,
    debug: bool,
}

impl AlertLayer {
    /// Creates the layer and spawns the Telegram delivery task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(http: reqwest::Client, telegram: &TelegramConfig, debug: bool) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let url = format!("{}/bot{}/sendMessage", telegram.api_url, telegram.token);
        let chat_id = telegram.target(debug).to_string();

        tokio::spawn(deliver(receiver, http, url, chat_id));

        Self { sender, debug }
    }

    /// Creates a layer writing into an existing channel instead of Telegram.
    pub fn with_sender(sender: UnboundedSender<String>, debug: bool) -> Self {
        Self { sender, debug }
    }
}

impl<S: Subscriber> Layer<S> for AlertLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if metadata.target() == DELIVERY_TARGET {
            return;
        }

        let kind = if *metadata.level() == Level::ERROR {
            "ERROR"
        } else if metadata.target() == ALERT_TARGET {
            "INFO"
        } else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let alert = format_alert(kind, self.debug, Utc::now(), &visitor.message);
        let _ = self.sender.send(alert);
    }
}

/// `"<KIND>[-DEBUG] [<time>]: <message>"`
pub fn format_alert(kind: &str, debug: bool, time: DateTime<Utc>, message: &str) -> String {
    let suffix = if debug { "-DEBUG" } else { "" };
    format!("{}{} [{}]: {}", kind, suffix, time.to_rfc3339(), message)
}

async fn deliver(
    mut receiver: UnboundedReceiver<String>,
    http: reqwest::Client,
    url: String,
    chat_id: String,
) {
    while let Some(text) = receiver.recv().await {
        let result = http
            .post(&url)
            .json(&serde_json::json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(err) = result {
            tracing::warn!(target: DELIVERY_TARGET, "Failed to deliver Telegram alert: {}", err);
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.message, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.message, " {}={:?}", field.name(), value);
        }
    }
}
