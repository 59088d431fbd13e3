//! FerrisDocs: a minimalist desktop viewer for static markdown sites.
//!
//! Point it at a site directory and it lists the pages under `content/` in a
//! collapsible sidebar, renders the selected page, and remembers your
//! light/dark preference across runs.

pub mod app;
pub mod ui;
