pub mod classify;
pub mod config;

use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: String,
    message: String,
}

impl CommandResult {
    pub fn payload<T: Serialize>(command: &str, value: &T, pretty: bool) -> Self {
        let rendered =
            if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
        match rendered {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: error_class.to_string(),
            message: message.into(),
        };
        Self { exit_code, output: serialize_outcome(payload) }
    }
}

fn serialize_outcome(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
