use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Headless browsers tried in order when no binary is configured.
const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

/// Find a usable headless-browser binary.
///
/// A configured override is taken as-is if it responds to `--version`;
/// otherwise the well-known candidates are probed on PATH.
fn resolve_browser(configured: Option<&str>) -> Result<String> {
    let candidates: Vec<&str> = configured
        .into_iter()
        .chain(BROWSER_CANDIDATES.iter().copied())
        .collect();

    for candidate in &candidates {
        let probe = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if matches!(probe, Ok(status) if status.success()) {
            debug!("Using browser binary: {}", candidate);
            return Ok(candidate.to_string());
        }
    }

    bail!(
        "No headless browser found for PDF conversion (tried: {}). \
         Set \"pdf_browser\" in the config file to a Chromium-compatible binary.",
        candidates.join(", ")
    )
}

/// Convert an already-written HTML file to PDF next to it.
///
/// The HTML artifact stays on disk whether or not this succeeds.
pub fn convert(html_path: &Path, pdf_path: &Path, configured_browser: Option<&str>) -> Result<()> {
    let browser = resolve_browser(configured_browser)?;

    let html_path = html_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve HTML path: {}", html_path.display()))?;

    let status = Command::new(&browser)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-pdf-header-footer")
        .arg(format!("--print-to-pdf={}", pdf_path.display()))
        .arg(&html_path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("Failed to run {}", browser))?;

    if !status.success() {
        bail!("{} exited with {} while printing to PDF", browser, status);
    }

    info!("Wrote PDF: {}", pdf_path.display());

    Ok(())
}
