use std::env;
use std::process::Command;

/// Version baked into the binary, first match wins:
/// `GHRD_VERSION` from the build environment (packagers), then the nearest git tag,
/// then the version in Cargo.toml.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=GHRD_VERSION");

    let version = env::var("GHRD_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(git_version)
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=GHRD_VERSION={}", version.trim());
}

/// `v1.2.0-3-gabc1234-dirty` becomes `1.2.0-3-gabc1234-dirty`.
fn git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let version = described.strip_prefix('v').unwrap_or(described);

    (!version.is_empty()).then(|| version.to_string())
}
