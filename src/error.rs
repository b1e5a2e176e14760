use serde::Serialize;

/// One rejected custom-button row from a settings save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonUrlError {
    /// 1-based row index as shown in the admin form.
    pub row: usize,
    pub label: String,
    pub reason: String,
}

impl std::fmt::Display for ButtonUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Custom button \"{}\" (row {}): {}",
            self.label, self.row, self.reason
        )
    }
}

/// Crate-wide error type. Every fallible function returns `Result<T, AppError>`.
/// Serializes cleanly so an admin surface gets structured error messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Settings rejected: {} invalid custom button(s)", .0.len())]
    InvalidSettings(Vec<ButtonUrlError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database",
            AppError::Pool(_) => "pool",
            AppError::InvalidSettings(_) => "invalid_settings",
            AppError::Io(_) => "io",
            AppError::Serde(_) => "serde",
        }
    }
}

/// Serialized as `{ error: "...", kind: "..." }`, plus `details` with one
/// message per row for rejected settings saves.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let details = match self {
            AppError::InvalidSettings(rows) => Some(
                rows.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            ),
            _ => None,
        };
        let len = if details.is_some() { 3 } else { 2 };
        let mut s = serializer.serialize_struct("AppError", len)?;
        s.serialize_field("error", &self.to_string())?;
        s.serialize_field("kind", self.kind())?;
        if let Some(details) = details {
            s.serialize_field("details", &details)?;
        }
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_settings_serializes_row_details() {
        let err = AppError::InvalidSettings(vec![ButtonUrlError {
            row: 2,
            label: "Mistral".into(),
            reason: "Invalid URL format".into(),
        }]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_settings");
        assert_eq!(
            json["details"][0],
            "Custom button \"Mistral\" (row 2): Invalid URL format"
        );
    }

    #[test]
    fn plain_errors_have_no_details() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only data dir");
        let json = serde_json::to_value(AppError::from(io)).unwrap();
        assert_eq!(json["kind"], "io");
        assert_eq!(json["error"], "IO error: read-only data dir");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn serde_errors_convert_and_serialize() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let json = serde_json::to_value(AppError::from(parse)).unwrap();
        assert_eq!(json["kind"], "serde");
        assert!(json["error"].as_str().unwrap().starts_with("Serialization error:"));
    }
}
