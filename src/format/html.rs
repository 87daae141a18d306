//! HTML definition-list output.
//!
//! Every interpolated value is escaped; long-form links contain `<...>`.

use super::{LinkForms, Renderer, metadata_fields};
use crate::inventory::InventoryEntry;
use html_escape::encode_text;
use std::io::{self, Write};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn begin(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<dl>")
    }

    fn start_role(&self, out: &mut dyn Write, role: &str) -> io::Result<()> {
        writeln!(out, "<dt>Role: {}</dt>", encode_text(role))?;
        writeln!(out, "<dd>")?;
        writeln!(out, "<dl>")
    }

    fn start_item(&self, out: &mut dyn Write, entry: &InventoryEntry) -> io::Result<()> {
        writeln!(out, "<dt>{}:{}</dt>", encode_text(&entry.role), encode_text(&entry.name))?;
        writeln!(out, "<dd>")?;
        writeln!(out, "<table>")?;
        writeln!(out, "<tbody>")
    }

    fn link(&self, out: &mut dyn Write, _entry: &InventoryEntry, links: &LinkForms) -> io::Result<()> {
        table_row(out, "Link", links.preferred())
    }

    fn metadata(&self, out: &mut dyn Write, entry: &InventoryEntry) -> io::Result<()> {
        for (label, value) in metadata_fields(entry) {
            table_row(out, label, value)?;
        }
        Ok(())
    }

    fn end_item(&self, out: &mut dyn Write, _entry: &InventoryEntry) -> io::Result<()> {
        writeln!(out, "</tbody></table>")?;
        writeln!(out, "</dd>")
    }

    fn end_role(&self, out: &mut dyn Write, _role: &str) -> io::Result<()> {
        writeln!(out, "</dl>")?;
        writeln!(out, "</dd>")
    }

    fn finish(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "</dl>")
    }
}

fn table_row(out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "<tr><th>{}:</th><td>{}</td></tr>", label, encode_text(value))
}
