//! The inbound method-call surface.
//!
//! The application layer sends `{ method, arguments }` pairs over [`METHOD_CHANNEL`] and receives
//! a [`MethodResult`]. [`Command`] is the parsed, typed form of a call.

use bon::Builder;
use serde_json::json;

use klarna_checkout_core::types::{AnyJson, ConfigMap, Environment, LoggingLevel};

use crate::errors::CommandError;

/// Name of the method channel commands arrive on.
pub const METHOD_CHANNEL: &str = "klarna_express_checkout";

/// Name of the event channel events are delivered on.
pub const EVENT_CHANNEL: &str = "klarna_express_checkout/events";

/// View type the application layer uses to embed a button.
pub const BUTTON_VIEW_TYPE: &str = "klarna_express_checkout_button";

/// A raw call received on the method channel.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct MethodCall {
    #[builder(into)]
    pub method: String,
    pub arguments: Option<AnyJson>,
}

/// The response to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Option<AnyJson>),
    Error {
        code: String,
        message: String,
        details: Option<AnyJson>,
    },
    /// The method name is not part of the surface.
    NotImplemented,
}

impl MethodResult {
    pub fn success() -> Self {
        MethodResult::Success(None)
    }

    /// The error code, if this is an error response.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResult::Error { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Renders the response the way the method channel encodes it.
    pub fn to_json(&self) -> AnyJson {
        match self {
            MethodResult::Success(value) => json!({ "success": value }),
            MethodResult::Error {
                code,
                message,
                details,
            } => json!({
                "error": {
                    "code": code,
                    "message": message,
                    "details": details,
                }
            }),
            MethodResult::NotImplemented => json!({ "notImplemented": true }),
        }
    }
}

impl From<CommandError> for MethodResult {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::UnknownMethod(_) => MethodResult::NotImplemented,
            err => MethodResult::Error {
                code: err.code().to_string(),
                message: err.to_string(),
                details: err.details(),
            },
        }
    }
}

impl<T: Into<AnyJson>> From<Result<T, CommandError>> for MethodResult {
    fn from(result: Result<T, CommandError>) -> Self {
        match result {
            Ok(value) => match value.into() {
                AnyJson::Null => MethodResult::Success(None),
                value => MethodResult::Success(Some(value)),
            },
            Err(err) => err.into(),
        }
    }
}

/// A parsed method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Acknowledged without side effects; buttons initialize individually.
    Initialize { environment: Environment },
    /// Acknowledged without side effects; embedding a view creates the button.
    LoadButton,
    UpdateSession { view_id: i64, client_token: String },
    FinalizeSession { view_id: i64 },
    SetLoggingLevel { view_id: i64, level: LoggingLevel },
}

impl Command {
    /// The method name this command is sent under.
    pub fn method(&self) -> &'static str {
        match self {
            Command::Initialize { .. } => "initialize",
            Command::LoadButton => "loadButton",
            Command::UpdateSession { .. } => "updateSession",
            Command::FinalizeSession { .. } => "finalizeSession",
            Command::SetLoggingLevel { .. } => "setLoggingLevel",
        }
    }
}

struct Arguments<'a>(Option<ConfigMap<'a>>);

impl<'a> Arguments<'a> {
    fn of(call: &'a MethodCall) -> Self {
        Arguments(call.arguments.as_ref().and_then(ConfigMap::from_json))
    }

    fn view_id(&self) -> Result<i64, CommandError> {
        self.0
            .and_then(|args| args.i64("viewId"))
            .ok_or_else(|| CommandError::InvalidArguments("viewId is required".to_string()))
    }

    fn required_str(&self, key: &str) -> Result<&'a str, CommandError> {
        self.0
            .and_then(|args| args.non_blank_str(key))
            .ok_or_else(|| CommandError::InvalidArguments(format!("{key} is required")))
    }
}

impl TryFrom<&MethodCall> for Command {
    type Error = CommandError;

    fn try_from(call: &MethodCall) -> Result<Self, Self::Error> {
        let args = Arguments::of(call);

        let command = match call.method.as_str() {
            "initialize" => Command::Initialize {
                environment: args
                    .0
                    .map(|args| args.enum_or_default("environment"))
                    .unwrap_or_default(),
            },
            "loadButton" => Command::LoadButton,
            "updateSession" => Command::UpdateSession {
                view_id: args.view_id()?,
                client_token: args.required_str("clientToken")?.to_string(),
            },
            "finalizeSession" => Command::FinalizeSession {
                view_id: args.view_id()?,
            },
            "setLoggingLevel" => {
                let view_id = args.view_id()?;
                let level = args.required_str("level")?;
                Command::SetLoggingLevel {
                    view_id,
                    level: level.parse().unwrap_or_else(|_| {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("Unrecognized logging level '{level}'; using default");
                        LoggingLevel::default()
                    }),
                }
            }
            method => return Err(CommandError::UnknownMethod(method.to_string())),
        };

        Ok(command)
    }
}
