use std::path::PathBuf;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use futures::StreamExt;
use log::{debug, warn};
use tempfile::TempDir;
use tokio::task::JoinHandle;

use patocash_core::export::{BrowserEngine, BrowserError, BrowserSession, PdfOptions, Viewport};

const CONTENT_HEIGHT_SCRIPT: &str = "document.body ? document.body.scrollHeight : 0";

/// Launch options for the headless browser.
#[derive(Debug, Clone)]
pub struct ChromiumConfig {
    /// Explicit Chrome/Chromium binary. Auto-detected when `None`.
    pub executable: Option<PathBuf>,
    /// Disable to run inside containers without user namespaces.
    pub sandbox: bool,
}

impl Default for ChromiumConfig {
    fn default() -> Self {
        Self {
            executable: None,
            sandbox: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChromiumEngine {
    config: ChromiumConfig,
}

impl ChromiumEngine {
    pub fn new(config: ChromiumConfig) -> Self {
        Self { config }
    }

    fn browser_config(
        &self,
        profile_dir: &TempDir,
        viewport: Viewport,
    ) -> Result<BrowserConfig, BrowserError> {
        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile_dir.path())
            .window_size(viewport.width, viewport.height);
        if !self.config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(executable) = &self.config.executable {
            builder = builder.chrome_executable(executable);
        }
        builder.build().map_err(BrowserError::Launch)
    }
}

#[async_trait]
impl BrowserEngine for ChromiumEngine {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let profile_dir = TempDir::new()
            .map_err(|e| BrowserError::Launch(format!("profile directory: {}", e)))?;
        let config = self.browser_config(&profile_dir, Viewport::default())?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // The DevTools connection only makes progress while the handler is polled.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Chromium handler stopped: {}", e);
                    break;
                }
            }
        });

        debug!("Chromium launched with profile {}", profile_dir.path().display());
        Ok(Box::new(ChromiumSession {
            browser: Some(browser),
            page: None,
            handler_task: Some(handler_task),
            profile_dir: Some(profile_dir),
        }))
    }
}

/// One browser process and its single page.
pub struct ChromiumSession {
    browser: Option<Browser>,
    page: Option<Page>,
    handler_task: Option<JoinHandle<()>>,
    /// Removed from disk on drop.
    #[allow(dead_code)]
    profile_dir: Option<TempDir>,
}

impl ChromiumSession {
    fn page(&self) -> Result<&Page, BrowserError> {
        self.page
            .as_ref()
            .ok_or_else(|| BrowserError::Page("no page open".to_string()))
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn open_page(&mut self, viewport: Viewport) -> Result<(), BrowserError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| BrowserError::Page("browser already closed".to_string()))?;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Page(e.to_string()))?;
        page.execute(SetDeviceMetricsOverrideParams::new(
            i64::from(viewport.width),
            i64::from(viewport.height),
            1.0,
            false,
        ))
        .await
        .map_err(|e| BrowserError::Page(e.to_string()))?;
        self.page = Some(page);
        Ok(())
    }

    async fn navigate(&mut self, url: &str) -> Result<Option<u16>, BrowserError> {
        let page = self.page()?;
        // Load event stands in for network idle: the report page has no subresources.
        page.goto(url)
            .await
            .map_err(|e| BrowserError::Navigation(e.to_string()))?;
        let request = page
            .wait_for_navigation_response()
            .await
            .map_err(|e| BrowserError::Navigation(e.to_string()))?;
        let status = request
            .as_ref()
            .and_then(|r| r.response.as_ref())
            .and_then(|response| u16::try_from(response.status).ok());
        Ok(status)
    }

    async fn content_height(&mut self) -> Result<f64, BrowserError> {
        let page = self.page()?;
        page.evaluate(CONTENT_HEIGHT_SCRIPT)
            .await
            .map_err(|e| BrowserError::Script(e.to_string()))?
            .into_value::<f64>()
            .map_err(|e| BrowserError::Script(e.to_string()))
    }

    async fn print_pdf(&mut self, options: &PdfOptions) -> Result<Vec<u8>, BrowserError> {
        let page = self.page()?;
        let params = PrintToPdfParams {
            print_background: Some(options.print_background),
            paper_width: Some(options.paper_width),
            paper_height: Some(options.paper_height),
            display_header_footer: Some(options.display_header_footer),
            prefer_css_page_size: Some(options.prefer_css_page_size),
            ..Default::default()
        };
        page.pdf(params)
            .await
            .map_err(|e| BrowserError::Print(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        self.page = None;
        let mut result = Ok(());
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!("Chromium did not acknowledge close: {}", e);
                result = Err(BrowserError::Close(e.to_string()));
            }
            if let Err(e) = browser.wait().await {
                warn!("Failed to reap Chromium process: {}", e);
            }
        }
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
        self.profile_dir = None;
        result
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}
