use cargo_lock::Lockfile;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Serialize)]
struct DepInfo {
    name: String,
    version: String,
    checksum: Option<String>,
    source: Option<String>,
}

fn git_hash() -> String {
    match Command::new("git").args(["rev-parse", "--short=12", "HEAD"]).output() {
        Ok(o) if o.status.success() => {
            String::from_utf8_lossy(&o.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

// Missing or unreadable Cargo.lock yields an empty list rather than a build failure
fn locked_dependencies(manifest_dir: &Path) -> Vec<DepInfo> {
    let Ok(lockfile) = Lockfile::load(manifest_dir.join("Cargo.lock")) else {
        println!("cargo:warning=Cargo.lock not readable; build-info will list no dependencies");
        return Vec::new();
    };
    lockfile
        .packages
        .into_iter()
        .map(|pkg| DepInfo {
            name: pkg.name.as_str().to_string(),
            version: pkg.version.to_string(),
            checksum: pkg.checksum.map(|c| c.to_string()),
            source: pkg.source.map(|s| s.to_string()),
        })
        .collect()
}

fn main() {
    println!("cargo:rustc-env=GPSMATH_GIT_HASH={}", git_hash());
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.lock");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let deps = locked_dependencies(Path::new(&manifest_dir));
    let json = serde_json::to_string(&deps).expect("dependency list serializes");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("deps_info.json");
    fs::write(&dest_path, json).expect("Failed to write deps_info.json");
    println!("cargo:rustc-env=GPSMATH_DEPS_PATH={}", dest_path.display());
}
