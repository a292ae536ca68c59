/// A task rejected before reaching the database.
///
/// Carried inside `anyhow::Error` so the HTTP layer can recover it with
/// `downcast_ref` and answer 400 instead of 500.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidTask(pub &'static str);

/// Validate a task title: must be present and non-empty.
pub fn validate_title(title: Option<&str>) -> Result<&str, InvalidTask> {
    match title {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(InvalidTask("Title is required")),
    }
}
