use std::process::Command;
use chrono::TimeZone;

/// Short commit hash for the footer, or "unknown" outside a git checkout
fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Local build time, suffixed with the zone abbreviation when it resolves
fn build_timestamp() -> String {
    let now = chrono::Local::now();
    let zone = iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<chrono_tz::Tz>().ok())
        .map(|tz| tz.from_utc_datetime(&now.naive_utc()).format("%Z").to_string());
    let local = now.format("%Y-%m-%d %H:%M:%S");
    match zone {
        Some(zone) => format!("{} {}", local, zone),
        None => local.to_string(),
    }
}

fn main() {
    // Shown in the catalog footer
    println!("cargo:rustc-env=BUILD_HASH={}", git_short_hash());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp());

    // The app reads CATALOG_API_URL with option_env!
    println!("cargo:rerun-if-env-changed=CATALOG_API_URL");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
