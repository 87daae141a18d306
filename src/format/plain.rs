//! Plain text listings.

use super::{LinkForms, Renderer, metadata_fields};
use crate::inventory::InventoryEntry;
use std::io::{self, Write};

/// One preferred link per line, nothing else
pub struct TerseRenderer;

impl Renderer for TerseRenderer {
    fn link(&self, out: &mut dyn Write, _entry: &InventoryEntry, links: &LinkForms) -> io::Result<()> {
        writeln!(out, "{}", links.preferred())
    }
}

/// Short and long form side by side, for search-and-replace over sources.
/// The title never changes the line.
pub struct RewriteRenderer;

impl Renderer for RewriteRenderer {
    fn link(&self, out: &mut dyn Write, _entry: &InventoryEntry, links: &LinkForms) -> io::Result<()> {
        writeln!(out, "{}\t{}", links.short, links.long)
    }
}

/// Human-readable listing used when no mode flag is given
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn start_role(&self, out: &mut dyn Write, role: &str) -> io::Result<()> {
        writeln!(out, "Role: {}", role)
    }

    fn link(&self, out: &mut dyn Write, entry: &InventoryEntry, links: &LinkForms) -> io::Result<()> {
        writeln!(out, "\t{}:{} :: {}", entry.role, entry.name, links.preferred())
    }

    fn metadata(&self, out: &mut dyn Write, entry: &InventoryEntry) -> io::Result<()> {
        for (label, value) in metadata_fields(entry) {
            writeln!(out, "\t\t{}: {}", label, value)?;
        }
        Ok(())
    }

    fn end_role(&self, out: &mut dyn Write, _role: &str) -> io::Result<()> {
        writeln!(out)
    }
}
