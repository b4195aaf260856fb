use chrono::{DateTime, Local};
use std::{env, fs::File, io::Write, path::Path, process::Command};
include!("./src/egor/config.rs");

fn launch(cmd: &mut Command) -> String {
    cmd.output()
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_default()
}
fn exec<I: std::iter::IntoIterator<Item = impl AsRef<std::ffi::OsStr>>>(
    cmd: &str,
    args: I,
) -> String {
    launch(Command::new(cmd).args(args))
}

fn set_short_version(out_dir: &Path, date: &DateTime<Local>, branch: &str, profile: &str) {
    write!(
        File::create(out_dir.join("version")).expect("Failed to create version file"),
        "(git@{} {} {}) {}",
        exec("git", &["log", "-1", "--pretty=format:%h"]),
        branch,
        date.format("%Y-%m-%d"),
        profile
    )
    .unwrap();
}
fn set_long_version(out_dir: &Path, date: &DateTime<Local>, branch: &str, profile: &str) {
    let mut f = std::io::BufWriter::new(
        File::create(out_dir.join("long_version")).expect("Failed to create long version"),
    );
    writeln!(&mut f, "{}", profile).unwrap();
    writeln!(
        &mut f,
        "commit: {} git@{}",
        branch,
        exec("git", &["log", "-1", "--pretty=format:%H"])
    )
    .unwrap();
    writeln!(
        &mut f,
        "rustc: {} {}",
        exec(env::var("RUSTC").unwrap().as_str(), &["--version"]),
        env::var("TARGET").unwrap()
    )
    .unwrap();
    writeln!(&mut f, "date: {}", date.to_rfc3339()).unwrap();
    writeln!(&mut f, "host: {}", launch(&mut Command::new("hostname"))).unwrap();
    writeln!(
        &mut f,
        r#"config: {} (mode {:o})
defaults:
    server.port: {}
    lang.default: {}
    config_file_name: {}
    version: {}"#,
        CONFIG_FILE,
        permission::CONFIG_MODE,
        defaults::SERVER_PORT,
        defaults::LANG,
        defaults::META_FILE,
        defaults::VERSION
    )
    .unwrap();
}
fn get_branch() -> String {
    let branch = exec("git", &["symbolic-ref", "--short", "-q", "HEAD"]);
    if branch.is_empty() {
        exec("git", &["describe", "--tags", "--exact-match", "HEAD"])
    } else {
        branch
    }
}

fn main() {
    let profile = env::var("PROFILE").unwrap();
    let buf = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(buf.as_str());
    let branch = get_branch();
    let time = Local::now();
    set_short_version(out_dir, &time, &branch, &profile);
    set_long_version(out_dir, &time, &branch, &profile);
}
