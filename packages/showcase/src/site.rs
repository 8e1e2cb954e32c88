//! Static site assembly
//!
//! Builds every page in memory, then writes them with an `index.json` that
//! describes the stories, their controls and the preview parameters.

use anyhow::{Context, Result};
use button_core::{button_arg_types, list_stories, ArgType, Story};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::views::{docs, landing, story, ViewContext};

/// A rendered page and its path relative to the site root.
#[derive(Debug, Clone)]
pub struct Page {
    pub path: PathBuf,
    pub html: String,
}

/// Regexes that pick a color or date control for matching arg names.
#[derive(Debug, Clone, Serialize)]
pub struct ControlMatchers {
    pub color: &'static str,
    pub date: &'static str,
}

impl Default for ControlMatchers {
    fn default() -> Self {
        Self {
            color: "(?i)(background|color)$",
            date: "(?i)Date$",
        }
    }
}

/// Machine-readable description of the generated site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteIndex {
    pub generated_at: DateTime<Utc>,
    pub component: String,
    pub stylesheet: String,
    pub matchers: ControlMatchers,
    pub arg_types: Vec<ArgType>,
    pub stories: Vec<StoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryEntry {
    #[serde(flatten)]
    pub story: Story,
    pub page: String,
}

#[derive(Debug)]
pub struct Site {
    pub pages: Vec<Page>,
    pub index: SiteIndex,
}

impl Site {
    /// Render the landing page, the docs page and one page per story.
    pub fn build(cx: &ViewContext) -> Result<Self> {
        let stories = list_stories();
        let mut pages = vec![
            Page {
                path: PathBuf::from("index.html"),
                html: landing::render(cx).into_string(),
            },
            Page {
                path: PathBuf::from("button.html"),
                html: docs::render(cx)
                    .context("rendering button docs")?
                    .into_string(),
            },
        ];

        let mut entries = Vec::with_capacity(stories.len());
        for entry in stories {
            let path = story_path(&entry);
            let html = story::render(cx, &entry)
                .with_context(|| format!("rendering story {}", entry.id))?
                .into_string();
            tracing::debug!("Rendered story {}", entry.id);

            entries.push(StoryEntry {
                page: path.to_string_lossy().replace('\\', "/"),
                story: entry,
            });
            pages.push(Page { path, html });
        }

        Ok(Self {
            pages,
            index: SiteIndex {
                generated_at: Utc::now(),
                component: cx.i18n.t("docs.title"),
                stylesheet: cx.config.stylesheet.clone(),
                matchers: ControlMatchers::default(),
                arg_types: button_arg_types(),
                stories: entries,
            },
        })
    }

    /// Write all pages and `index.json` below `out_dir`.
    pub fn write(&self, out_dir: &Path) -> Result<()> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;

        for page in &self.pages {
            let target = out_dir.join(&page.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&target, &page.html)
                .with_context(|| format!("writing {}", target.display()))?;
        }

        let index = serde_json::to_string_pretty(&self.index)?;
        let index_path = out_dir.join("index.json");
        fs::write(&index_path, index)
            .with_context(|| format!("writing {}", index_path.display()))?;

        tracing::info!(
            "Wrote {} pages and index.json to {}",
            self.pages.len(),
            out_dir.display()
        );
        Ok(())
    }
}

fn story_path(story: &Story) -> PathBuf {
    Path::new("stories").join(format!("{}.html", story.id))
}
