//! Sphinx `objects.inv` decoding.
//!
//! Supports both on-disk formats:
//! - version 1: plain text `name type location` lines
//! - version 2: a zlib stream of `name role priority location title` lines
//!
//! Both start with a three line plain-text header naming the format version,
//! the project and the project version.

use super::types::{Inventory, InventoryEntry};
use crate::error::{Error, Result};
use flate2::bufread::ZlibDecoder;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::io::{BufRead, BufReader};

const VERSION_1_HEADER: &str = "# Sphinx inventory version 1";
const VERSION_2_HEADER: &str = "# Sphinx inventory version 2";
const PROJECT_PREFIX: &str = "# Project:";
const VERSION_PREFIX: &str = "# Version:";

lazy_static! {
    static ref ENTRY_LINE: Regex =
        Regex::new(r"^(.+?)\s+(\S+)\s+(-?\d+)\s+?(\S*)\s+(.*)").expect("entry line pattern is valid");
}

/// Join a location onto a base reference with POSIX path semantics.
///
/// An absolute location replaces the base, an empty base yields the
/// location unchanged.
pub fn posix_join(base: &str, location: &str) -> String {
    if location.starts_with('/') || base.is_empty() {
        location.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, location)
    } else {
        format!("{}/{}", base, location)
    }
}

/// Decode an inventory of either format version.
///
/// # Arguments
/// * `stream` - Inventory bytes, starting at the version header line
/// * `base_uri` - Reference every location is joined onto ("" for none)
/// * `join` - Path-join function applied as `join(base_uri, location)`
pub fn read_inventory<R, J>(mut stream: R, base_uri: &str, join: J) -> Result<Inventory>
where
    R: BufRead,
    J: Fn(&str, &str) -> String,
{
    let header = read_text_line(&mut stream)?
        .ok_or_else(|| Error::Decode("empty inventory stream".to_string()))?;

    match header.trim_end() {
        VERSION_1_HEADER => read_inventory_v1(stream, base_uri, join),
        VERSION_2_HEADER => read_inventory_v2(stream, base_uri, join),
        other => Err(Error::Decode(format!("unknown or unsupported inventory version: {:?}", other))),
    }
}

/// Decode a version 1 inventory whose version line was already consumed.
pub fn read_inventory_v1<R, J>(mut stream: R, base_uri: &str, join: J) -> Result<Inventory>
where
    R: BufRead,
    J: Fn(&str, &str) -> String,
{
    let (project, version) = read_project_header(&mut stream)?;
    let mut inventory = Inventory::new();

    while let Some(line) = read_text_line(&mut stream)? {
        if line.trim().is_empty() {
            continue;
        }
        let (name, kind, location) = split_v1_fields(&line)
            .ok_or_else(|| Error::Decode(format!("expected `name type location`, got {:?}", line.trim_end())))?;

        let location = join(base_uri, location);
        let (role, location) = if kind == "mod" {
            ("py:module".to_string(), format!("{}#module-{}", location, name))
        } else {
            (format!("py:{}", kind), format!("{}#{}", location, name))
        };

        let entry = InventoryEntry {
            role,
            name: name.to_string(),
            domain: project.clone(),
            version: version.clone(),
            location,
            title: "-".to_string(),
        };
        debug!("{}:{} :: {:?}", entry.role, entry.name, entry);
        inventory.insert(entry);
    }

    info!("decoded {} entries in {} roles (inventory v1)", inventory.len(), inventory.role_count());
    Ok(inventory)
}

/// Decode a version 2 inventory whose version line was already consumed.
pub fn read_inventory_v2<R, J>(mut stream: R, base_uri: &str, join: J) -> Result<Inventory>
where
    R: BufRead,
    J: Fn(&str, &str) -> String,
{
    let (project, version) = read_project_header(&mut stream)?;

    let compression = read_text_line(&mut stream)?.unwrap_or_default();
    if !compression.contains("zlib") {
        return Err(Error::Decode(format!("invalid inventory header (not compressed): {:?}", compression.trim_end())));
    }

    let mut inventory = Inventory::new();
    let decoder = BufReader::new(ZlibDecoder::new(stream));

    for raw in decoder.split(b'\n') {
        let raw = raw.map_err(|e| Error::Decode(format!("corrupt zlib stream: {}", e)))?;
        let line = String::from_utf8(raw).map_err(|e| Error::Decode(format!("entry is not UTF-8: {}", e)))?;

        let Some(caps) = ENTRY_LINE.captures(line.trim_end()) else {
            continue;
        };
        let name = &caps[1];
        let role = &caps[2];
        let location = &caps[4];
        let title = &caps[5];

        if !role.contains(':') {
            debug!("skipping {:?}: role {:?} has no domain prefix", name, role);
            continue;
        }
        // Old Sphinx releases wrote some modules twice; the first one wins.
        if role == "py:module" && inventory.contains(role, name) {
            continue;
        }

        let location = match location.strip_suffix('$') {
            Some(prefix) => format!("{}{}", prefix, name),
            None => location.to_string(),
        };

        let entry = InventoryEntry {
            role: role.to_string(),
            name: name.to_string(),
            domain: project.clone(),
            version: version.clone(),
            location: join(base_uri, &location),
            title: title.to_string(),
        };
        debug!("{}:{} :: {:?}", entry.role, entry.name, entry);
        inventory.insert(entry);
    }

    info!("decoded {} entries in {} roles (inventory v2)", inventory.len(), inventory.role_count());
    Ok(inventory)
}

/// Read the `# Project:` and `# Version:` header lines
fn read_project_header<R: BufRead>(stream: &mut R) -> Result<(String, String)> {
    let project = header_value(read_text_line(stream)?, PROJECT_PREFIX)?;
    let version = header_value(read_text_line(stream)?, VERSION_PREFIX)?;
    Ok((project, version))
}

fn header_value(line: Option<String>, prefix: &str) -> Result<String> {
    let line = line.ok_or_else(|| Error::Decode(format!("inventory header ends before {:?}", prefix)))?;
    line.trim_end()
        .strip_prefix(prefix)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| Error::Decode(format!("expected {:?} header line, got {:?}", prefix, line.trim_end())))
}

/// Read one newline-terminated line as UTF-8; `None` at end of stream
fn read_text_line<R: BufRead>(stream: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if stream.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| Error::Decode(format!("header is not UTF-8: {}", e)))
}

/// Split a version 1 line into name, type and location
fn split_v1_fields(line: &str) -> Option<(&str, &str, &str)> {
    let (name, rest) = line.trim().split_once(char::is_whitespace)?;
    let (kind, location) = rest.trim_start().split_once(char::is_whitespace)?;
    Some((name, kind, location.trim_start()))
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;
