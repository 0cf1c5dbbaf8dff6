use anyhow::Context;
use serde::Deserialize;

/// Crates the domain crate must never depend on: UI, transport and runtime
/// concerns belong to the player crate.
const DOMAIN_FORBIDDEN: &[&str] = &[
    "pokedex-player",
    "dioxus",
    "reqwest",
    "gloo-net",
    "tokio",
    "tracing-subscriber",
];

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
    /// `null` for normal dependencies, `"dev"` or `"build"` otherwise
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
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

    let violations = domain_violations(&metadata);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} layering violation(s)", violations.len());
    }

    println!("arch-check: ok ({} packages)", metadata.packages.len());
    Ok(())
}

fn domain_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|p| p.name == "pokedex-domain")
        .flat_map(|p| {
            p.dependencies
                .iter()
                .filter(|d| d.kind.as_deref() != Some("dev"))
                .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
                .map(move |d| format!("{} must not depend on {}", p.name, d.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: serde_json::Value) -> Metadata {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn clean_domain_passes() {
        let m = metadata(serde_json::json!({
            "packages": [
                {"name": "pokedex-domain", "dependencies": [
                    {"name": "serde", "kind": null},
                    {"name": "tokio", "kind": "dev"}
                ]},
                {"name": "pokedex-player", "dependencies": [
                    {"name": "dioxus", "kind": null}
                ]}
            ]
        }));
        assert!(domain_violations(&m).is_empty());
    }

    #[test]
    fn ui_dependency_in_domain_is_reported() {
        let m = metadata(serde_json::json!({
            "packages": [
                {"name": "pokedex-domain", "dependencies": [
                    {"name": "dioxus", "kind": null},
                    {"name": "reqwest", "kind": "build"}
                ]}
            ]
        }));
        assert_eq!(
            domain_violations(&m),
            [
                "pokedex-domain must not depend on dioxus",
                "pokedex-domain must not depend on reqwest"
            ]
        );
    }
}
