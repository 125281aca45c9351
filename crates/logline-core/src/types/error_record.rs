//! Structured error context attached to log entries

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a failure happened
///
/// All fields are optional; callers fill in what they know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationInfo {
    /// Command or function that was running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,
    /// Script or source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_in_line: Option<u32>,
    /// Human-readable position, e.g. the offending source line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_message: Option<String>,
}

impl InvocationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command_name = Some(command.into());
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script_name = Some(script.into());
        self
    }

    pub fn with_position(mut self, line: u32, offset: u32) -> Self {
        self.line_number = Some(line);
        self.offset_in_line = Some(offset);
        self
    }

    pub fn with_position_message(mut self, message: impl Into<String>) -> Self {
        self.position_message = Some(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for InvocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(command) = &self.command_name {
            parts.push(command.clone());
        }
        match (&self.script_name, self.line_number) {
            (Some(script), Some(line)) => match self.offset_in_line {
                Some(offset) => parts.push(format!("{}:{}:{}", script, line, offset)),
                None => parts.push(format!("{}:{}", script, line)),
            },
            (Some(script), None) => parts.push(script.clone()),
            (None, Some(line)) => parts.push(format!("line {}", line)),
            (None, None) => {}
        }
        if let Some(position) = &self.position_message {
            parts.push(position.clone());
        }
        f.write_str(&parts.join(" "))
    }
}

/// Caller-populated description of a failure
///
/// Replaces runtime exception reflection: the caller states the
/// exception text, its category, the stack trace and where it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub exception: String,
    pub category: String,
    pub stack_trace: String,
    pub invocation: InvocationInfo,
}

impl ErrorRecord {
    /// Create a record from the exception text alone
    pub fn new(exception: impl Into<String>) -> Self {
        Self {
            exception: exception.into(),
            ..Self::default()
        }
    }

    /// Create a record from any `std::error::Error`, folding its source
    /// chain into the stack trace
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(format!("caused by: {}", cause));
            source = cause.source();
        }
        Self {
            exception: error.to_string(),
            category: String::new(),
            stack_trace: chain.join("\n"),
            invocation: InvocationInfo::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = stack_trace.into();
        self
    }

    pub fn with_invocation(mut self, invocation: InvocationInfo) -> Self {
        self.invocation = invocation;
        self
    }

    /// Append the record's fields to a message body, one field per line
    pub fn append_to(&self, body: &str) -> String {
        let details = format!(
            "Exception: {}\nCategory: {}\nStackTrace: {}\nInvocationInfo: {}",
            self.exception, self.category, self.stack_trace, self.invocation
        );
        if body.is_empty() {
            details
        } else {
            format!("{}\n{}", body, details)
        }
    }

    /// Compact single-line JSON used as the body of trace records
    ///
    /// `Message` is only present when a message accompanied the error.
    pub fn to_compact_json(&self, message: Option<&str>) -> String {
        let payload = TracePayload {
            exception: &self.exception,
            category: &self.category,
            stack_trace: &self.stack_trace,
            invocation_info: &self.invocation,
            message,
        };
        // Only strings and optional integers are serialized, which cannot fail.
        serde_json::to_string(&payload).unwrap_or_else(|_| self.exception.clone())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TracePayload<'a> {
    exception: &'a str,
    category: &'a str,
    stack_trace: &'a str,
    invocation_info: &'a InvocationInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ErrorRecord {
        ErrorRecord::new("Access is denied")
            .with_category("PermissionDenied")
            .with_stack_trace("at Deploy-App, deploy.ps1: line 12")
            .with_invocation(
                InvocationInfo::new()
                    .with_command("Deploy-App")
                    .with_script("deploy.ps1")
                    .with_position(12, 5),
            )
    }

    #[test]
    fn test_append_to_message() {
        let body = sample().append_to("deploy failed");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "deploy failed");
        assert_eq!(lines[1], "Exception: Access is denied");
        assert_eq!(lines[2], "Category: PermissionDenied");
        assert_eq!(lines[3], "StackTrace: at Deploy-App, deploy.ps1: line 12");
        assert_eq!(lines[4], "InvocationInfo: Deploy-App deploy.ps1:12:5");
    }

    #[test]
    fn test_append_to_empty_message() {
        let body = sample().append_to("");
        assert!(body.starts_with("Exception: Access is denied"));
    }

    #[test]
    fn test_compact_json_keys() {
        let json = sample().to_compact_json(None);
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("Exception"));
        assert!(object.contains_key("Category"));
        assert!(object.contains_key("StackTrace"));
        assert!(object.contains_key("InvocationInfo"));
        assert!(!object.contains_key("Message"));
        assert_eq!(value["InvocationInfo"]["LineNumber"], 12);

        let with_message = sample().to_compact_json(Some("deploy failed"));
        let value: serde_json::Value = serde_json::from_str(&with_message).unwrap();
        assert_eq!(value["Message"], "deploy failed");
    }

    #[test]
    fn test_from_std_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let record = ErrorRecord::from_error(&io);
        assert_eq!(record.exception, "missing.txt");
        assert!(record.invocation.is_empty());
    }
}
