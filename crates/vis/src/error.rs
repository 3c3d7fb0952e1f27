//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [RenderError] as the error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// The error type for rendering the station dashboard.
#[derive(Debug)]
pub enum RenderError {
    /// A [std::io::Error] encountered while writing dashboard files.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// the page template.
    Template(TinyTemplateError),

    /// A [serde_json::Error] encountered while embedding the chart
    /// spec into the page.
    Json(serde_json::Error),
}

impl Error for RenderError {}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Io(error) => write!(f, "{render_error} I/O error: {error}"),
            RenderError::Template(error) => write!(f, "{render_error} template error: {error}"),
            RenderError::Json(error) => write!(f, "{render_error} chart spec error: {error}"),
        }
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}

impl From<IoError> for RenderError {
    fn from(error: IoError) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::Json(error)
    }
}
