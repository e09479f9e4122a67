use thiserror::Error;

/// Failures a [`ToggleHost`](crate::ToggleHost) can report.
///
/// None of these ever reach the page: the widget logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
    #[error("element is not attached to this host")]
    UnknownElement,
    #[error("malformed markup: {0}")]
    Markup(String),
    #[error("host call failed: {0}")]
    Js(String),
}

pub type HostResult<T> = Result<T, HostError>;
