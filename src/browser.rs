//! Opening external links in the user's browser.

use std::fmt::Debug;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Default target of the empty-state call to action.
pub const DEFAULT_DOCS_URL: &str = "https://github.com/FeatureProbe/FeatureProbe";

/// Opens a URL in a new browser context.
pub trait UrlOpener: Send + Debug {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the platform's default opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn program() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let program = Self::program();
        // Detached: the opener's output would corrupt the TUI
        Command::new(program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run {} for {}", program, url))?;
        Ok(())
    }
}
