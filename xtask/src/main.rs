use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for movesquare")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests and docs
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates, denying warnings
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Launch the desktop window
    Run {
        /// Extra arguments passed to movesquare-desktop
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run a short headless simulation as a smoke test
    Smoke,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [Step::Fmt, Step::Clippy, Step::Test, Step::Doc] {
                step.run()?;
            }
        }
        Commands::Fmt => Step::Fmt.run()?,
        Commands::Clippy => Step::Clippy.run()?,
        Commands::Test => Step::Test.run()?,
        Commands::Doc => Step::Doc.run()?,
        Commands::Build => Step::Build.run()?,
        Commands::Smoke => Step::Smoke.run()?,
        Commands::Run { args } => {
            let mut full = vec!["run", "-p", "movesquare-desktop", "--"];
            full.extend(args.iter().map(String::as_str));
            cargo("run", &full)?;
        }
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Step {
    Fmt,
    Clippy,
    Test,
    Doc,
    Build,
    Smoke,
}

impl Step {
    fn args(self) -> &'static [&'static str] {
        match self {
            Step::Fmt => &["fmt", "--all", "--", "--check"],
            Step::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Step::Test => &["test", "--workspace"],
            Step::Doc => &["doc", "--workspace", "--no-deps"],
            Step::Build => &["build", "--workspace"],
            Step::Smoke => &[
                "run",
                "-p",
                "movesquare-cli",
                "--",
                "simulate",
                "--frames",
                "120",
                "--script",
                "d:0-60,s:30-90",
            ],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Step::Fmt => "fmt",
            Step::Clippy => "clippy",
            Step::Test => "test",
            Step::Doc => "doc",
            Step::Build => "build",
            Step::Smoke => "smoke",
        }
    }

    fn run(self) -> Result<()> {
        cargo(self.name(), self.args())
    }
}

fn cargo(name: &str, args: &[&str]) -> Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{name} step failed");
    }
    Ok(())
}
