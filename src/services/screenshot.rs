//! Optional e-paper screenshot step
//!
//! Captures the served dashboard page with a headless browser and hands the
//! image to an external display-update command. Disabled by default; both
//! subprocess failures are logged and never fatal.

use tokio::process::Command;
use tracing::{info, warn};

use crate::config::{Config, ScreenshotConfig};
use crate::utils::DashboardError;

pub struct ScreenshotService {
    settings: ScreenshotConfig,
    page_url: String,
}

impl ScreenshotService {
    pub fn new(config: &Config) -> Self {
        Self {
            settings: config.screenshot.clone(),
            page_url: config.page_url(),
        }
    }

    /// Capture one screenshot and push it to the display.
    pub async fn run_cycle(&self) -> Result<(), DashboardError> {
        info!("capturing {} for the display", self.page_url);

        let status = Command::new(&self.settings.browser_path)
            .arg("--headless")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg(format!(
                "--window-size={},{}",
                self.settings.viewport.0, self.settings.viewport.1
            ))
            .arg(format!(
                "--screenshot={}",
                self.settings.output_path.display()
            ))
            .arg(&self.page_url)
            .status()
            .await?;

        if !status.success() {
            warn!("browser exited with {}", status);
            return Ok(());
        }

        if let Some(command) = &self.settings.display_command {
            let status = Command::new(command)
                .arg(&self.settings.output_path)
                .status()
                .await?;
            info!("display command exited with {}", status);
        }

        Ok(())
    }
}
