use std::process::Command;

fn main() {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let git_sha = match output {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|sha| sha.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    };

    // Shown by `polyroot --version`
    println!("cargo:rustc-env=POLYROOT_GIT_SHA={}", git_sha);
    println!("cargo:rerun-if-changed=.git/HEAD");
}
