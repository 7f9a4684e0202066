//! Writes `sitemap.xml` and `robots.txt` for the static build.
//!
//! Usage: `sitemap [OUT_DIR]` (defaults to `dist`). `SITE_URL` overrides the
//! production origin.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ngodingin::sitemap::{to_xml, SitemapConfig, DEFAULT_SITE_URL, SITE_ROUTES};

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let site_url = env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
    let out_dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| "dist".to_string()));

    let config = SitemapConfig::with_site_url(&site_url);
    let entries = config
        .entries(SITE_ROUTES, Utc::now())
        .context("Failed to build sitemap entries")?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let sitemap_path = out_dir.join("sitemap.xml");
    fs::write(&sitemap_path, to_xml(&entries))
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;
    info!("Wrote {} urls to {}", entries.len(), sitemap_path.display());

    let robots_path = out_dir.join("robots.txt");
    fs::write(&robots_path, config.robots_txt())
        .with_context(|| format!("Failed to write {}", robots_path.display()))?;
    info!("Wrote {}", robots_path.display());

    Ok(())
}
