//! Inventory formatting module.
//!
//! Walks an [`Inventory`] once and hands every event (role start, item start,
//! link, metadata, item end, role end) to the [`Renderer`] selected by the
//! run's [`OutputMode`]. Renderers only decide decoration; which roles and
//! items are printed never depends on the mode.
//!
//! # Module Organization
//!
//! - `html` - `<dl>`/`<table>` markup
//! - `rst` - reStructuredText field lists
//! - `plain` - terse, rewrite and default text listings

mod html;
mod plain;
mod rst;

use crate::inventory::{Inventory, InventoryEntry};
use std::io::{self, Write};

pub use html::HtmlRenderer;
pub use plain::{RewriteRenderer, TerseRenderer, TextRenderer};
pub use rst::RstRenderer;

/// Output style, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Html,
    Terse,
    Rst,
    Rewrite,
    #[default]
    Text,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Html => "html",
            OutputMode::Terse => "terse",
            OutputMode::Rst => "rst",
            OutputMode::Rewrite => "rewrite",
            OutputMode::Text => "text",
        }
    }

    /// The renderer implementing this mode's formatting rules
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputMode::Html => Box::new(HtmlRenderer),
            OutputMode::Terse => Box::new(TerseRenderer),
            OutputMode::Rst => Box::new(RstRenderer),
            OutputMode::Rewrite => Box::new(RewriteRenderer),
            OutputMode::Text => Box::new(TextRenderer),
        }
    }
}

/// The two textual forms of a cross-reference to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkForms {
    /// ``:role:`domain:item` ``
    pub short: String,
    /// ``:role:`item <domain:item>` ``
    pub long: String,
    has_title: bool,
}

impl LinkForms {
    pub fn for_entry(entry: &InventoryEntry) -> Self {
        let domain = entry.domain.to_lowercase();
        LinkForms {
            short: format!(":{}:`{}:{}`", entry.role, domain, entry.name),
            long: format!(":{}:`{} <{}:{}>`", entry.role, entry.name, domain, entry.name),
            has_title: entry.has_title(),
        }
    }

    /// Short form for titled entries, long form otherwise
    pub fn preferred(&self) -> &str {
        if self.has_title { &self.short } else { &self.long }
    }
}

/// Per-mode formatting rules.
///
/// Only `link` is mandatory; every other hook prints nothing by default.
pub trait Renderer {
    fn begin(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn start_role(&self, _out: &mut dyn Write, _role: &str) -> io::Result<()> {
        Ok(())
    }

    fn start_item(&self, _out: &mut dyn Write, _entry: &InventoryEntry) -> io::Result<()> {
        Ok(())
    }

    fn link(&self, out: &mut dyn Write, entry: &InventoryEntry, links: &LinkForms) -> io::Result<()>;

    fn metadata(&self, _out: &mut dyn Write, _entry: &InventoryEntry) -> io::Result<()> {
        Ok(())
    }

    fn end_item(&self, _out: &mut dyn Write, _entry: &InventoryEntry) -> io::Result<()> {
        Ok(())
    }

    fn end_role(&self, _out: &mut dyn Write, _role: &str) -> io::Result<()> {
        Ok(())
    }

    fn finish(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Metadata rows shown for each entry, in display order
pub(crate) fn metadata_fields(entry: &InventoryEntry) -> [(&'static str, &str); 4] {
    [
        ("Domain", entry.domain.as_str()),
        ("Version", entry.version.as_str()),
        ("URL", entry.location.as_str()),
        ("Title", entry.title.as_str()),
    ]
}

/// Render a whole inventory with the given mode.
pub fn format_inventory(inventory: &Inventory, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
    let renderer = mode.renderer();

    renderer.begin(out)?;
    for (role, entries) in inventory.roles() {
        renderer.start_role(out, role)?;
        for entry in entries {
            renderer.start_item(out, entry)?;
            renderer.link(out, entry, &LinkForms::for_entry(entry))?;
            renderer.metadata(out, entry)?;
            renderer.end_item(out, entry)?;
        }
        renderer.end_role(out, role)?;
    }
    renderer.finish(out)?;

    out.flush()
}
