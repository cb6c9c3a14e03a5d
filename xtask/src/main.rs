//! Workspace chores for Agendar.
//!
//! Run with: `cargo xtask <command>`. Output goes straight to the terminal.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{bail, Context, Result};

mod features;

const BINDINGS_DIR: &str = "crates/domain/bindings";
const WEB_TYPES_DIR: &str = "web/src/types/generated";

type Task = fn() -> Result<()>;

const TASKS: &[(&str, &str, Task)] = &[
    ("ci", "Everything CI runs, in order", run_ci),
    ("fmt", "Check formatting", run_fmt),
    ("clippy", "Lint every target with all features", run_clippy),
    ("test", "Run the workspace tests", run_test),
    ("codegen", "Export booking types to the web page", run_codegen),
    ("test-features", "Compile each supported feature set", features::test_feature_matrix),
    ("deny", "License and advisory checks (cargo-deny)", run_deny),
    ("audit", "Vulnerability audit (cargo-audit)", run_audit),
];

fn main() -> ExitCode {
    let Some(name) = env::args().nth(1).filter(|name| name != "help") else {
        print_help();
        return ExitCode::SUCCESS;
    };

    let Some((_, _, task)) = TASKS.iter().find(|(task_name, _, _)| *task_name == name) else {
        eprintln!("Unknown task: {name}\n");
        print_help();
        return ExitCode::FAILURE;
    };

    match task() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Agendar workspace tasks\n");
    println!("USAGE:\n    cargo xtask <TASK>\n");
    println!("TASKS:");
    for (name, about, _) in TASKS {
        println!("    {name:<14} {about}");
    }
}

/// Run `cargo <args>` and fail with `failure` on a non-zero exit
fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("could not start `cargo {}`", args.join(" ")))?;
    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}

/// Fail early when an optional cargo subcommand is missing
fn require_subcommand(name: &str) -> Result<()> {
    let installed = Command::new("cargo")
        .args([name, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());
    if !installed {
        bail!("cargo-{name} not found; install it with `cargo install cargo-{name}`");
    }
    Ok(())
}

fn run_ci() -> Result<()> {
    let steps: [(&str, Task); 6] = [
        ("formatting", run_fmt),
        ("clippy", run_clippy),
        ("agendar-app build", check_app_crate),
        ("tests", run_test),
        ("cargo-deny", run_deny),
        ("cargo-audit", run_audit),
    ];

    for (index, (label, step)) in steps.iter().enumerate() {
        println!("==> [{}/{}] {label}", index + 1, steps.len());
        step()?;
    }

    println!("\n✓ CI checks passed");
    Ok(())
}

fn run_fmt() -> Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "formatting differs; run `cargo fmt --all`")
}

fn run_clippy() -> Result<()> {
    cargo(&["clippy", "--all-targets", "--all-features"], "clippy reported problems")
}

/// The binary and library of the application crate must both build
fn check_app_crate() -> Result<()> {
    cargo(&["check", "-p", "agendar-app", "--bins", "--lib"], "agendar-app does not compile")
}

fn run_test() -> Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "tests failed")
}

fn run_deny() -> Result<()> {
    require_subcommand("deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

fn run_audit() -> Result<()> {
    require_subcommand("audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

/// ts-rs writes bindings while the domain tests run; copy them to the web
/// page and rebuild its `index.ts`
fn run_codegen() -> Result<()> {
    println!("==> Exporting TypeScript bindings");
    cargo(
        &["test", "-p", "agendar-domain", "--features", "ts-gen", "--lib"],
        "ts-gen export tests failed",
    )?;

    let bindings = Path::new(BINDINGS_DIR);
    if !bindings.is_dir() {
        bail!("no bindings at {BINDINGS_DIR}; the export did not run");
    }

    let web_types = Path::new(WEB_TYPES_DIR);
    fs::create_dir_all(web_types).with_context(|| format!("creating {WEB_TYPES_DIR}"))?;

    let copied = ts_modules(bindings)?
        .iter()
        .map(|module| {
            let file = format!("{module}.ts");
            fs::copy(bindings.join(&file), web_types.join(&file))
                .with_context(|| format!("copying {file} to {WEB_TYPES_DIR}"))
        })
        .collect::<Result<Vec<_>>>()?
        .len();
    println!("  copied {copied} files to {WEB_TYPES_DIR}");

    write_index(web_types)
}

/// Module names of the `.ts` files in `dir`, sorted
fn ts_modules(dir: &Path) -> Result<Vec<String>> {
    let mut modules: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let module = name.strip_suffix(".ts")?;
            (module != "index" && !module.ends_with(".test")).then(|| module.to_string())
        })
        .collect();
    modules.sort();
    Ok(modules)
}

fn write_index(dir: &Path) -> Result<()> {
    let modules = ts_modules(dir)?;

    let mut index = String::from(
        "// Generated by `cargo xtask codegen` from the Agendar domain types.\n\
         // Do not edit by hand.\n\n",
    );
    for module in &modules {
        let _ = writeln!(index, "export type {{ {module} }} from './{module}';");
    }

    let path = dir.join("index.ts");
    fs::write(&path, index).with_context(|| format!("writing {}", path.display()))?;
    println!("  index.ts exports {} types", modules.len());
    Ok(())
}
