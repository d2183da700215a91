//! Page shell assembly and output.
//!
//! The shell names the sections the page displays, in order. Each section id
//! must have a table in the loaded data; a shell section with no table is a
//! fatal initialization error, not an empty list.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::data::TableData;
use crate::error::RenderError;
use crate::models::RustcVersion;
use crate::render::{self, Element};

const INDEX_FILE: &str = "index.html";

/// The sections the generated page displays, in order.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub heading: String,
}

impl Default for PageShell {
    fn default() -> Self {
        PageShell::new("Are we async yet?")
            .section("async-blockers", "Blockers")
            .section("async-extensions", "Extensions")
            .section("async-ecosystem", "Ecosystem")
    }
}

impl PageShell {
    pub fn new(title: impl Into<String>) -> PageShell {
        PageShell {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, id: impl Into<String>, heading: impl Into<String>) -> PageShell {
        self.sections.push(Section {
            id: id.into(),
            heading: heading.into(),
        });
        self
    }

    /// Render the full page.
    ///
    /// `stable` drives the channel badges; `generated` is stamped into the
    /// footer. Both are explicit so output is deterministic under test.
    pub fn render(
        &self,
        data: &TableData,
        stable: RustcVersion,
        generated: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        let mut body = Element::new("body");
        body.append(Element::new("h1").text(self.title.as_str()));
        for section in &self.sections {
            let records = data
                .get(&section.id)
                .ok_or_else(|| RenderError::MissingSection(section.id.clone()))?;
            body.append(Element::new("h2").text(section.heading.as_str()));
            let mut list = Element::new("ul").attr("id", section.id.clone());
            render::fill_list(records, stable, &mut list)?;
            body.append(list);
        }
        body.append(
            Element::new("footer").text(format!("Generated at {}", generated.to_rfc2822())),
        );

        // Head is assembled by hand: meta and link are void elements the
        // node tree does not model.
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&Element::new("title").text(self.title.as_str()).to_html());
        html.push_str("\n<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n");
        html.push_str(&body.to_html());
        html.push_str("\n</html>\n");
        Ok(html)
    }
}

/// Render the page and write `index.html` into a fresh `out_dir`, copying
/// `static_dir` (when it exists) beside it.
pub fn generate(
    shell: &PageShell,
    data: &TableData,
    stable: RustcVersion,
    out_dir: &Path,
    static_dir: Option<&Path>,
) -> Result<()> {
    let html = shell
        .render(data, stable, Utc::now())
        .context("failed to render page")?;

    reset_dir(out_dir).context("failed to reset out dir")?;
    if let Some(static_dir) = static_dir {
        if static_dir.is_dir() {
            copy_dir(static_dir, out_dir).context("failed to copy static files")?;
        } else {
            tracing::debug!(path = %static_dir.display(), "no static dir, skipping copy");
        }
    }
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, html)
        .with_context(|| format!("failed to write {}", index.display()))?;
    tracing::info!(path = %index.display(), "wrote page");
    Ok(())
}

/// Clear `dir` if it exists, create it otherwise.
fn reset_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        return fs::create_dir_all(dir);
    }
    for entry in dir.read_dir()? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn copy_dir(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in src.read_dir()? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
