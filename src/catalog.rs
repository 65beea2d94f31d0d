// src/catalog.rs
//! Tracked bridge catalog: feed-side phrases and the canonical record names
//! they resolve to.
//!
//! Load order:
//! 1) `$BRIDGE_CATALOG_PATH`
//! 2) `config/catalog.toml`
//! 3) `config/catalog.json`
//! 4) built-in seed (`Catalog::default_seed()`)

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CATALOG_PATH: &str = "BRIDGE_CATALOG_PATH";

/// One tracked bridge: the literal phrase searched for in feed text and the
/// name of the persisted record it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub phrase: String,
    #[serde(default)]
    pub canonical: Option<String>,
}

impl CatalogEntry {
    pub fn new(phrase: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            canonical: Some(canonical.into()),
        }
    }

    pub fn canonical_name(&self) -> &str {
        self.canonical.as_deref().unwrap_or(&self.phrase)
    }
}

/// Immutable after load; shared read-only across pipeline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: clean_entries(entries),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seattle movable bridges as announced on the city's traffic feeds.
    pub fn default_seed() -> Self {
        Self::new(vec![
            CatalogEntry::new("Ballard Bridge", "Ballard Bridge"),
            CatalogEntry::new("Fremont Bridge", "Fremont Bridge"),
            CatalogEntry::new("Montlake Bridge", "Montlake Bridge"),
            CatalogEntry::new("Lower Spokane St Bridge", "Spokane St Swing Bridge"),
            CatalogEntry::new("South Park Bridge", "South Park Bridge"),
            CatalogEntry::new("University Bridge", "University Bridge"),
            CatalogEntry::new("1st Ave S Bridge", "1 Ave S Bridge"),
        ])
    }

    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_catalog(&content, ext.as_str())
            .with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Load using env var + fallbacks, ending at the built-in seed.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CATALOG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!("{ENV_CATALOG_PATH} points to non-existent path"));
            }
        }
        let toml_p = PathBuf::from("config/catalog.toml");
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from("config/catalog.json");
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default_seed())
    }
}

fn parse_catalog(s: &str, hint_ext: &str) -> Result<Catalog> {
    if hint_ext == "toml" {
        return parse_toml(s);
    }
    if hint_ext == "json" {
        return parse_json(s);
    }
    parse_toml(s).or_else(|_| parse_json(s))
}

fn parse_toml(s: &str) -> Result<Catalog> {
    #[derive(Deserialize)]
    struct TomlCatalog {
        bridges: Vec<CatalogEntry>,
    }
    let v: TomlCatalog = toml::from_str(s)?;
    Ok(Catalog::new(v.bridges))
}

fn parse_json(s: &str) -> Result<Catalog> {
    let v: Vec<CatalogEntry> = serde_json::from_str(s)?;
    Ok(Catalog::new(v))
}

// Drop blank phrases, collapse duplicates by phrase (first wins).
fn clean_entries(items: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        if it.phrase.trim().is_empty() || !seen.insert(it.phrase.clone()) {
            continue;
        }
        let canonical = it
            .canonical
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        out.push(CatalogEntry {
            phrase: it.phrase,
            canonical,
        });
    }
    out
}
