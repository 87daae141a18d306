/// Inventory input resolution
///
/// This module handles:
/// - Completing inventory URLs with the conventional objects.inv filename
/// - HTTP requests for remote inventories
/// - Opening local inventory files
use crate::config::InventorySource;
use crate::error::Result;
use crate::ui;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};

const USER_AGENT: &str = concat!("inventory-fmt/", env!("CARGO_PKG_VERSION"));

/// Upper bound on how much Content-Length may pre-allocate
const MAX_PREALLOC: usize = 1 << 24;

/// Conventional filename of a Sphinx inventory
pub const INVENTORY_FILENAME: &str = "objects.inv";

/// Complete a documentation URL to point at its inventory file
///
/// URLs that already name the inventory past the scheme are kept as-is.
pub fn inventory_url(url: &str) -> String {
    match url.rfind(INVENTORY_FILENAME) {
        Some(idx) if idx > 5 => url.to_string(),
        _ => format!("{}/{}", url.trim_end_matches('/'), INVENTORY_FILENAME),
    }
}

/// Base reference for locations in the inventory found at `url`
///
/// A URL naming the inventory file itself loses that last segment.
pub fn base_href(url: &str) -> String {
    match url.strip_suffix(INVENTORY_FILENAME) {
        Some(dir) if dir.len() > 5 => dir.trim_end_matches('/').to_string(),
        _ => url.to_string(),
    }
}

/// Download data from a URL using HTTP GET
///
/// Returns the final URL after redirects together with the body.
pub fn http_get_bytes(url: &str) -> Result<(String, Vec<u8>)> {
    let resp = ureq::get(url).set("User-Agent", USER_AGENT).call()?;
    let final_url = resp.get_url().to_string();
    let mut data: Vec<u8> = Vec::with_capacity(prealloc_len(resp.header("Content-Length")));
    resp.into_reader().read_to_end(&mut data)?;
    debug!("fetched {} bytes from {}", data.len(), final_url);
    Ok((final_url, data))
}

/// Buffer size to reserve for a body of the advertised Content-Length
fn prealloc_len(content_length: Option<&str>) -> usize {
    content_length.and_then(|s| s.parse::<usize>().ok()).unwrap_or(0).min(MAX_PREALLOC)
}

/// Open the inventory named by `source` as a buffered byte stream
pub fn open_inventory(source: &InventorySource) -> Result<Box<dyn BufRead>> {
    match source {
        InventorySource::File(path) => {
            info!("Reading inventory from {}", path.display());
            let file = File::open(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
        InventorySource::Url(url) => {
            let target = inventory_url(url);
            info!("Retrieving {} from {}", INVENTORY_FILENAME, target);
            let (resolved, data) = http_get_bytes(&target)?;
            ui::status(&format!("URL resolved to: {}", resolved));
            Ok(Box::new(Cursor::new(data)))
        }
    }
}
