use crate::error::{Level, PluckErrorExt};

/// Call shape quoted in every malformed-call diagnostic.
pub const EXPECTED_SHAPE: &str = "pluck lookup expects: data (list of objects), select value, result field, [{'select_key': 'selector'}, where selector is by default 'name']";

#[derive(Debug, Clone)]
pub struct InvalidArguments {
    level: Level,
    message: String,
    issuer: String,
}

impl InvalidArguments {
    /// Error for a malformed lookup call; `detail` names the specific failure.
    pub fn new(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let message = if detail.is_empty() {
            format!("{}.", EXPECTED_SHAPE)
        } else {
            format!("{}. {}", EXPECTED_SHAPE, detail)
        };
        InvalidArguments {
            level: Level::Error,
            message,
            issuer: "pluck.lookup.terms".to_string(),
        }
    }

    /// More explicit constructor when you need to set level/message.
    pub fn with(level: Level, message: String, issuer: String) -> Self {
        InvalidArguments { level, message, issuer }
    }
}

impl std::fmt::Display for InvalidArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidArguments {}

impl PluckErrorExt for InvalidArguments {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }
}

#[derive(Debug, Clone)]
pub struct NoMatchFound {
    level: Level,
    message: String,
    issuer: String,
    match_field: String,
    select_value: String,
    result_field: String,
}

impl NoMatchFound {
    pub fn new(match_field: &str, select_value: &str, result_field: &str) -> Self {
        NoMatchFound {
            level: Level::Error,
            message: format!(
                "Failed to find match for '{}: {}' with result field '{}'.",
                match_field, select_value, result_field
            ),
            issuer: "pluck.lookup.select".to_string(),
            match_field: match_field.to_string(),
            select_value: select_value.to_string(),
            result_field: result_field.to_string(),
        }
    }

    /// Field name that was compared against the select value.
    pub fn match_field(&self) -> &str {
        &self.match_field
    }

    pub fn select_value(&self) -> &str {
        &self.select_value
    }

    pub fn result_field(&self) -> &str {
        &self.result_field
    }
}

impl std::fmt::Display for NoMatchFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NoMatchFound {}

impl PluckErrorExt for NoMatchFound {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }
}
