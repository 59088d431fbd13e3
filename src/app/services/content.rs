//! Content discovery and page rendering.
//!
//! A site is a directory with markdown pages under `content/` (or directly at
//! the root when there is no `content/` subdirectory). Pages render through
//! pulldown-cmark to the small HTML subset FLTK's HelpView understands.

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser, html};

use crate::app::infrastructure::error::Result;

/// One markdown page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub path: PathBuf,
}

/// Collect every `.md` file under the site's content root, sorted by path so
/// the sidebar order is stable across runs.
pub fn scan_site(site_dir: &Path) -> Result<Vec<Page>> {
    let content_dir = site_dir.join("content");
    let root = if content_dir.is_dir() {
        content_dir
    } else {
        site_dir.to_path_buf()
    };

    let mut pages = Vec::new();
    collect_pages(&root, &mut pages)?;
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

fn collect_pages(dir: &Path, pages: &mut Vec<Page>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so a link loop inside the
        // site directory cannot recurse forever
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect_pages(&path, pages)?;
        } else if file_type.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            pages.push(Page {
                title: page_title(&path),
                path,
            });
        }
    }
    Ok(())
}

/// Title from the page's first heading, or the file stem when there is none.
pub fn page_title(path: &Path) -> String {
    if let Ok(contents) = fs::read_to_string(path) {
        for line in contents.lines() {
            if let Some(rest) = line.trim().strip_prefix('#') {
                let title = rest.trim_start_matches('#').trim();
                if !title.is_empty() {
                    return title.to_string();
                }
            }
        }
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Read and render a page for display.
pub fn render_page(path: &Path) -> Result<String> {
    let markdown = fs::read_to_string(path)?;
    Ok(render_markdown(&markdown))
}

/// Render markdown to an HTML document HelpView can display.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!("<html><body>{}</body></html>", body)
}

/// Indices of pages whose title matches the query, case-insensitive.
/// An empty or whitespace query matches everything.
pub fn filter_pages(pages: &[Page], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return (0..pages.len()).collect();
    }

    pages
        .iter()
        .enumerate()
        .filter(|(_, page)| page.title.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}
