use std::fmt::Display;

use aquaprobe_readings::error::CatalogError;
use aquaprobe_vis::error::RenderError;

#[derive(Debug)]
pub(crate) enum CliError {
    Catalog(CatalogError),
    Render(RenderError),
    Path(String),
}

impl From<CatalogError> for CliError {
    fn from(error: CatalogError) -> Self {
        CliError::Catalog(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Catalog(error) => write!(f, "{cli_error} {error}"),
            CliError::Render(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
