/// End-to-end tests for the inventory-fmt binary
///
/// Every test writes its own objects.inv into a scratch directory or serves
/// it from a loopback listener, so no outside network access is needed.
use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;

const ENTRIES: &str = "\
foo py:function 1 api.html#$ -
bar py:function 1 api.html#bar Bar helper
Widget py:class 1 api.html#$ -
";

// Helper to encode a version 2 inventory with the given entry lines
fn inventory_bytes(body: &str) -> Vec<u8> {
    let mut data = b"# Sphinx inventory version 2\n# Project: MyDomain\n# Version: 1.0\n\
# The remainder of this file is compressed using zlib.\n"
        .to_vec();
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body.as_bytes()).unwrap();
    data.extend(encoder.finish().unwrap());
    data
}

// Helper to write a version 2 inventory into `dir`
fn write_inventory(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("objects.inv");
    fs::write(&path, inventory_bytes(body)).unwrap();
    path
}

// Helper to serve `body` to a single HTTP request; the handle yields the request line
fn serve_once(body: Vec<u8>) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();

        request_line.trim_end().to_string()
    });

    (base, handle)
}

// Helper to run the binary with arguments
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inventory-fmt"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run inventory-fmt {}: {}", args.join(" "), e))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_source_is_usage_error() {
    let output = run(&["--rst"]);

    assert_eq!(output.status.code(), Some(22), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Need to specify either a file or a URL."));
    assert!(stderr(&output).contains("Usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_two_mode_flags_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);

    let output = run(&["--file", inv.to_str().unwrap(), "--rst", "--html"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_rst_output_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);

    let output = run(&["--file", inv.to_str().unwrap(), "--rst"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    let idx = lines.iter().position(|l| l.contains(":py:function:foo")).expect("foo item header");
    assert!(lines[idx + 1].contains(":Link:"));
    assert!(lines[idx + 1].contains(":py:function:`foo <mydomain:foo>`"));

    // Titled entries use the short form
    assert!(out.contains("\t\t:Link:\t:py:function:`mydomain:bar`"));
    // No base reference: locations stay relative
    assert!(out.contains("\t\t:URL:\tapi.html#foo"));
}

#[test]
fn test_terse_output() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);

    let output = run(&["--file", inv.to_str().unwrap(), "--terse"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        ":py:class:`Widget <mydomain:Widget>`\n:py:function:`mydomain:bar`\n:py:function:`foo <mydomain:foo>`\n"
    );
}

#[test]
fn test_rewrite_one_line_per_item() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);

    let output = run(&["--file", inv.to_str().unwrap(), "--rewrite"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&":py:function:`mydomain:bar`\t:py:function:`bar <mydomain:bar>`"));
    assert!(lines.contains(&":py:function:`mydomain:foo`\t:py:function:`foo <mydomain:foo>`"));
}

#[test]
fn test_file_with_url_uses_url_as_base() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);

    let output = run(&["--file", inv.to_str().unwrap(), "--url", "http://docs.example.invalid/en", "--html"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stdout(&output).contains("<tr><th>URL:</th><td>http://docs.example.invalid/en/api.html#foo</td></tr>"));
    assert!(stderr(&output).contains("Using: http://docs.example.invalid/en as base HREF"));
}

#[test]
fn test_output_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write_inventory(dir.path(), ENTRIES);
    let out_path = dir.path().join("links.txt");
    fs::write(&out_path, "stale content that is much longer than the new output\n".repeat(50)).unwrap();

    let output = run(&["--file", inv.to_str().unwrap(), "--terse", "--output", out_path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(!written.contains("stale content"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.inv");

    let output = run(&["--file", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("IO error"));
}

#[test]
fn test_malformed_inventory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objects.inv");
    fs::write(&path, "this is not an inventory\n").unwrap();

    let output = run(&["--file", path.to_str().unwrap(), "--rst"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Malformed inventory"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_error_prefix_is_plain_when_redirected() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.inv");

    let output = Command::new(env!("CARGO_BIN_EXE_inventory-fmt"))
        .args(["--file", missing.to_str().unwrap()])
        .env("TERM", "xterm")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).contains("\x1b["), "stderr has escape codes: {:?}", stderr(&output));
    assert!(stderr(&output).starts_with("error: IO error"));
}

#[test]
fn test_unreachable_url_is_transport_error() {
    let output = run(&["--url", "http://127.0.0.1:1/docs", "--terse"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("HTTP error"), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_url_fetches_inventory_and_joins_locations() {
    let (base, server) = serve_once(inventory_bytes(ENTRIES));
    let url = format!("{}/docs", base);

    let output = run(&["--url", &url, "--rst"]);
    let request_line = server.join().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(request_line, "GET /docs/objects.inv HTTP/1.1");
    assert!(stderr(&output).contains(&format!("URL resolved to: {}/docs/objects.inv", base)));
    assert!(stderr(&output).contains(&format!("Using: {} as base HREF", url)));
    assert!(stdout(&output).contains(&format!("\t\t:URL:\t{}/docs/api.html#foo", base)));
}

#[test]
fn test_url_naming_inventory_uses_its_directory_as_base() {
    let (base, server) = serve_once(inventory_bytes(ENTRIES));
    let url = format!("{}/docs/objects.inv", base);

    let output = run(&["--url", &url, "--rst"]);
    let request_line = server.join().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(request_line, "GET /docs/objects.inv HTTP/1.1");
    assert!(stdout(&output).contains(&format!("\t\t:URL:\t{}/docs/api.html#foo", base)));
}

#[test]
#[ignore] // Requires network access
fn test_fetch_remote_inventory() {
    let output = run(&["--url", "https://docs.python.org/3", "--terse"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("URL resolved to:"));
    assert!(stdout(&output).contains(":py:function:"));
}
