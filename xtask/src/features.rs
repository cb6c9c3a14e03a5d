use std::process::Command;

use anyhow::{Context, Result};

/// `(package, features)`; an empty list means the package defaults,
/// `None` means `--no-default-features`.
const FEATURE_COMBINATIONS: &[(&str, Option<&[&str]>)] = &[
    ("agendar-common", Some(&[])), // default
    ("agendar-common", None),
    ("agendar-common", Some(&["test-utils"])),
    ("agendar-domain", Some(&[])),
    ("agendar-domain", Some(&["ts-gen"])),
    ("agendar-app", Some(&["ts-gen"])),
];

/// Check that all required feature combinations compile successfully.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, (package, features)) in FEATURE_COMBINATIONS.iter().enumerate() {
        let (display_label, extra_args) = match features {
            None => ("no-default".to_string(), vec!["--no-default-features".to_string()]),
            Some(list) if list.is_empty() => ("default".to_string(), Vec::new()),
            Some(list) => {
                let joined = list.join(",");
                (joined.clone(), vec!["--features".to_string(), joined])
            }
        };

        println!(
            "\n[{}/{}] cargo check -p {package} {}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            extra_args.join(" ")
        );

        let status = Command::new("cargo")
            .arg("check")
            .arg("-p")
            .arg(package)
            .args(&extra_args)
            .status()
            .with_context(|| format!("Failed to run cargo check for {package} '{display_label}'"))?;

        if !status.success() {
            anyhow::bail!("{package} with '{display_label}' failed to compile");
        }

        println!("✅ {package} '{display_label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
