//! The on-disk dashboard layout.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::template::Context;
use crate::template::TemplateEngine;
use crate::view::DashboardView;

/// The dashboard directory is structured as follows:
///
/// ./dashboard/index.html
/// ./dashboard/style.css
///
/// The stylesheet is written once at init; the index is rewritten
/// wholesale by every polling cycle.
pub struct Dashboard {
    root_path: PathBuf,
    index_file_path: PathBuf,
}

impl Dashboard {
    const MAIN_DIR_NAME: &str = "dashboard";
    const INDEX_FILE_NAME: &str = "index.html";
    const STYLE_FILE_NAME: &str = "style.css";
    const STYLE_SHEET: &str = include_str!("./template/style.css");

    /// Initialize the dashboard directory under the given path.
    pub fn init(path: &Path) -> Result<Dashboard> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        if !root_path.exists() {
            fs::create_dir(&root_path)?;
        }

        fs::write(root_path.join(Self::STYLE_FILE_NAME), Self::STYLE_SHEET)?;

        Ok(Self {
            root_path,
            index_file_path,
        })
    }

    /// The directory the dashboard lives in.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Render one view into the index page, replacing it entirely.
    pub fn render(&self, view: &DashboardView) -> Result<()> {
        let context = Context::from_view(view)?;
        let text = TemplateEngine::new().render(&context)?;

        let mut file = File::create(&self.index_file_path)?;

        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}
