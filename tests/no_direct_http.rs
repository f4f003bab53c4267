// tests/no_direct_http.rs
// Fails if HTTP calls are made anywhere except the transport implementation.
// Everything else must go through `SheetsTransport` so reads and writes stay
// sequenced by the bulk update pipeline.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/api/transport.rs") || p.contains("\\api\\transport.rs")
}

#[test]
fn no_direct_http_outside_transport() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);
    assert!(!files.is_empty(), "no sources found under {:?}", src_dir);

    let bad_patterns = [
        "reqwest::get(",
        "reqwest::blocking",
        ".bearer_auth(",
        "Client::new()",
        ".request(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for pat in &bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Direct HTTP calls found outside the transport:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!(
                "  {} contains pattern '{}': route through SheetsTransport instead\n",
                file, pat
            ));
        }
        panic!("{}", msg);
    }
}
