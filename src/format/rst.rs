//! reStructuredText output: one field list per item, grouped under role lines.

use super::{LinkForms, Renderer, metadata_fields};
use crate::inventory::InventoryEntry;
use std::io::{self, Write};

pub struct RstRenderer;

impl Renderer for RstRenderer {
    fn start_role(&self, out: &mut dyn Write, role: &str) -> io::Result<()> {
        writeln!(out, "{}", role)
    }

    fn start_item(&self, out: &mut dyn Write, entry: &InventoryEntry) -> io::Result<()> {
        writeln!(out, "\t:{}:{}:", entry.role, entry.name)
    }

    fn link(&self, out: &mut dyn Write, _entry: &InventoryEntry, links: &LinkForms) -> io::Result<()> {
        writeln!(out, "\t\t:Link:\t{}", links.preferred())
    }

    fn metadata(&self, out: &mut dyn Write, entry: &InventoryEntry) -> io::Result<()> {
        for (label, value) in metadata_fields(entry) {
            writeln!(out, "\t\t:{}:\t{}", label, value)?;
        }
        Ok(())
    }

    fn end_role(&self, out: &mut dyn Write, _role: &str) -> io::Result<()> {
        writeln!(out)
    }
}
