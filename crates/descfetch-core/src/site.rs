//! Declarative settings handed to the dashboard framework.
//!
//! Nothing here is interpreted: the values are serialized as-is for the
//! framework, which owns sidebar, theming, routing and Markdown rendering.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Named themes understood by the dashboard framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    Light,
    Dark,
    Air,
    Alt,
    Coffee,
    Cotton,
    Dashboard,
    DeepSpace,
    Glacier,
    Ink,
    Midnight,
    NearMidnight,
    OceanFloor,
    Parchment,
    Slate,
    Stark,
    SunFaded,
    Wide,
}

/// Table-of-contents toggle and heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub show: bool,
    pub label: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            show: false,
            label: "Contenido".to_string(),
        }
    }
}

/// Site settings (optional `[site]` table in config.toml). Field names match
/// the framework's option names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Used in the sidebar and page titles.
    pub title: String,
    /// Extra markup for the page head (favicon link).
    pub head: String,
    /// Path to the source root.
    pub root: String,
    pub theme: Theme,
    /// Header HTML.
    pub header: String,
    /// Footer HTML.
    pub footer: String,
    pub sidebar: bool,
    pub toc: TocConfig,
    /// Previous/next links in the footer.
    pub pager: bool,
    /// Smart quotes and other typographic replacements.
    pub typographer: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Explorador de Indicadores de Empleo en Chile".to_string(),
            head: r#"<link rel="icon" href="favicon.ico" type="image/png" sizes="32x32">"#
                .to_string(),
            root: "src".to_string(),
            theme: Theme::Default,
            header: concat!(
                r#"Un relato con datos <img src="./favicon.ico" height="20px"> "#,
                r#"<a href="https://www.relatoscondatos.cl" target="_blank">www.relatoscondatos.cl</a> "#,
            )
            .to_string(),
            footer: concat!(
                r#"Relatos con datos <i class="fas fa-envelope"></i> "#,
                r#"<a href="mailto:contacto@relatoscondatos.cl">contacto@relatoscondatos.cl</a>"#,
            )
            .to_string(),
            sidebar: false,
            toc: TocConfig::default(),
            pager: false,
            typographer: true,
        }
    }
}

impl SiteConfig {
    /// Compact JSON with fields in declaration order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
