use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer must never depend on.
const DOMAIN_FORBIDDEN: &[&str] = &["dexview-engine", "reqwest", "tokio", "axum"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo run -p xtask -- <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = domain_violations(&metadata)?;

    if !violations.is_empty() {
        anyhow::bail!(
            "dexview-domain depends on engine-side crates: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed");
    Ok(())
}

/// Normal (non-dev, non-build) dependencies of the domain crate that are on
/// the forbidden list.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == "dexview-domain")
        .context("dexview-domain not found in workspace")?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.is_none())
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(domain_deps: serde_json::Value) -> Metadata {
        serde_json::from_value(serde_json::json!({
            "packages": [
                { "name": "dexview-domain", "dependencies": domain_deps },
                { "name": "dexview-engine", "dependencies": [
                    { "name": "reqwest", "kind": null }
                ] }
            ]
        }))
        .expect("valid metadata")
    }

    #[test]
    fn test_clean_domain_passes() {
        let metadata = metadata(serde_json::json!([
            { "name": "serde", "kind": null },
            { "name": "thiserror", "kind": null },
            { "name": "tokio", "kind": "dev" }
        ]));
        assert!(domain_violations(&metadata).expect("domain present").is_empty());
    }

    #[test]
    fn test_engine_dependency_is_flagged() {
        let metadata = metadata(serde_json::json!([
            { "name": "serde", "kind": null },
            { "name": "reqwest", "kind": null }
        ]));
        assert_eq!(
            domain_violations(&metadata).expect("domain present"),
            vec!["reqwest"]
        );
    }
}
