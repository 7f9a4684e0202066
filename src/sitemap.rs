//! `sitemap.xml` and `robots.txt` generation.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

use crate::error::{Result, SiteError};

pub const DEFAULT_SITE_URL: &str = "https://www.ngodingin-assist.tech";

/// Every path the router serves.
pub const SITE_ROUTES: &[&str] = &["/", "/services", "/pricing", "/about", "/blog"];

/// In-page sections listed as virtual paths.
pub const ANCHOR_PATHS: &[&str] = &["/#services", "/#portfolio", "/#team", "/#pricing", "/#contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    pub priority: f64,
    pub lastmod: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapConfig {
    pub site_url: String,
    /// Exact paths, or prefixes written as `/dir/*`.
    pub exclude: Vec<String>,
    pub additional_paths: Vec<String>,
    pub auto_lastmod: bool,
    /// Priority of paths no rule matches.
    pub default_priority: f64,
    pub policies: Vec<RobotsPolicy>,
    pub additional_sitemaps: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self::with_site_url(DEFAULT_SITE_URL)
    }
}

impl SitemapConfig {
    pub fn with_site_url(site_url: &str) -> Self {
        let site_url = site_url.trim().trim_end_matches('/').to_string();
        let hidden = ["/pricing", "/about", "/services", "/blog", "/docs"];
        let mut exclude = strings(&["/api/*", "/admin/*", "/private/*"]);
        exclude.extend(strings(&hidden));
        let mut disallow = strings(&["/api/", "/admin/", "/private/"]);
        disallow.extend(strings(&hidden));

        SitemapConfig {
            additional_sitemaps: vec![format!("{site_url}/sitemap.xml")],
            site_url,
            exclude,
            additional_paths: strings(ANCHOR_PATHS),
            auto_lastmod: true,
            default_priority: 0.7,
            policies: vec![
                RobotsPolicy { user_agent: "*".into(), allow: strings(&["/"]), disallow: Vec::new() },
                RobotsPolicy { user_agent: "*".into(), allow: Vec::new(), disallow },
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.site_url.is_empty() {
            return Err(SiteError::EmptySiteUrl);
        }
        check_priority("*", self.default_priority)
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.iter().any(|pattern| match pattern.strip_suffix('*') {
            Some(prefix) => path.starts_with(prefix),
            None => path == pattern,
        })
    }

    pub fn transform(&self, path: &str, now: DateTime<Utc>) -> SitemapEntry {
        let (priority, changefreq) = if path == "/" {
            (1.0, ChangeFreq::Daily)
        } else if path.contains("/blog") {
            (0.8, ChangeFreq::Weekly)
        } else if path.contains("/about") || path.contains("/pricing") {
            (0.9, ChangeFreq::Monthly)
        } else {
            (self.default_priority, ChangeFreq::Weekly)
        };
        SitemapEntry {
            loc: format!("{}{}", self.site_url, path),
            changefreq,
            priority,
            lastmod: self.auto_lastmod.then(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    /// Entries for the routes that survive exclusion, then the additional
    /// paths, without duplicates.
    pub fn entries(&self, routes: &[&str], now: DateTime<Utc>) -> Result<Vec<SitemapEntry>> {
        self.validate()?;
        let mut seen: Vec<&str> = Vec::new();
        let mut entries = Vec::new();
        let paths = routes
            .iter()
            .copied()
            .filter(|p| !self.is_excluded(p))
            .chain(self.additional_paths.iter().map(String::as_str));
        for path in paths {
            if seen.contains(&path) {
                continue;
            }
            seen.push(path);
            let entry = self.transform(path, now);
            check_priority(path, entry.priority)?;
            entries.push(entry);
        }
        Ok(entries)
    }

    pub fn robots_txt(&self) -> String {
        let mut out = String::new();
        for policy in &self.policies {
            let _ = writeln!(out, "# {}", policy.user_agent);
            let _ = writeln!(out, "User-agent: {}", policy.user_agent);
            for path in &policy.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in &policy.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "# Host\nHost: {}\n", self.site_url);
        out.push_str("# Sitemaps\n");
        let own = format!("{}/sitemap.xml", self.site_url);
        let _ = writeln!(out, "Sitemap: {own}");
        for sitemap in self.additional_sitemaps.iter().filter(|s| **s != own) {
            let _ = writeln!(out, "Sitemap: {sitemap}");
        }
        out
    }
}

fn check_priority(path: &str, priority: f64) -> Result<()> {
    if (0.0..=1.0).contains(&priority) {
        Ok(())
    } else {
        Err(SiteError::InvalidPriority { path: path.to_string(), priority })
    }
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        out.push_str("<url>");
        let _ = write!(out, "<loc>{}</loc>", escape(entry.loc.as_str()));
        if let Some(lastmod) = &entry.lastmod {
            let _ = write!(out, "<lastmod>{}</lastmod>", escape(lastmod.as_str()));
        }
        let _ = write!(out, "<changefreq>{}</changefreq>", entry.changefreq.as_str());
        let _ = write!(out, "<priority>{:.1}</priority>", entry.priority);
        out.push_str("</url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn priorities_follow_path() {
        let cfg = SitemapConfig::default();
        let home = cfg.transform("/", now());
        assert_eq!((home.priority, home.changefreq), (1.0, ChangeFreq::Daily));
        assert_eq!(home.loc, "https://www.ngodingin-assist.tech/");
        assert_eq!(cfg.transform("/blog/post", now()).priority, 0.8);
        assert_eq!(cfg.transform("/pricing", now()).changefreq, ChangeFreq::Monthly);
        assert_eq!(cfg.transform("/about", now()).priority, 0.9);
        assert_eq!(cfg.transform("/#team", now()).priority, 0.7);
        assert_eq!(home.lastmod.as_deref(), Some("2026-03-01T12:00:00.000Z"));
    }

    #[test]
    fn exclusion_globs_and_exact_paths() {
        let cfg = SitemapConfig::default();
        assert!(cfg.is_excluded("/api/contact"));
        assert!(cfg.is_excluded("/pricing"));
        assert!(!cfg.is_excluded("/pricing/extra"));
        assert!(!cfg.is_excluded("/"));
    }

    #[test]
    fn entries_are_home_plus_anchors() {
        let cfg = SitemapConfig::default();
        let entries = cfg.entries(SITE_ROUTES, now()).unwrap();
        let locs: Vec<_> = entries.iter().map(|e| e.loc.trim_start_matches(DEFAULT_SITE_URL)).collect();
        assert_eq!(locs, vec!["/", "/#services", "/#portfolio", "/#team", "/#pricing", "/#contact"]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let empty = SitemapConfig::with_site_url("  ");
        assert_eq!(empty.validate(), Err(SiteError::EmptySiteUrl));
        let cfg = SitemapConfig { default_priority: 1.5, ..SitemapConfig::default() };
        assert!(matches!(cfg.entries(SITE_ROUTES, now()), Err(SiteError::InvalidPriority { .. })));
    }

    #[test]
    fn xml_is_escaped() {
        let entry = SitemapEntry {
            loc: "https://x.tech/?a=1&b=<2>".into(),
            changefreq: ChangeFreq::Weekly,
            priority: 0.7,
            lastmod: None,
        };
        let xml = to_xml(&[entry]);
        assert!(xml.contains("<loc>https://x.tech/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn robots_lists_policies_and_sitemap_once() {
        let robots = SitemapConfig::default().robots_txt();
        assert!(robots.contains("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(robots.contains("Host: https://www.ngodingin-assist.tech\n"));
        assert_eq!(robots.matches("Sitemap: https://www.ngodingin-assist.tech/sitemap.xml").count(), 1);
    }
}
