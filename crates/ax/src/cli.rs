//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// AX - project scaffolding from remote templates
#[derive(Parser, Debug)]
#[command(name = "ax")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a remote template
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name (also the target directory)
    pub name: String,

    /// Overwrite target directory if it exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from(["ax", "create", "myapp"]).unwrap();
        let Commands::Create(args) = cli.command;
        assert_eq!(args.name, "myapp");
        assert!(!args.force);
    }

    #[test]
    fn test_parse_create_force() {
        let cli = Cli::try_parse_from(["ax", "create", "myapp", "-f"]).unwrap();
        let Commands::Create(args) = cli.command;
        assert!(args.force);

        let cli = Cli::try_parse_from(["ax", "create", "myapp", "--force"]).unwrap();
        let Commands::Create(args) = cli.command;
        assert!(args.force);
    }

    #[test]
    fn test_missing_project_name() {
        let err = Cli::try_parse_from(["ax", "create"]).unwrap_err();
        assert!(err.to_string().contains("<NAME>"));
    }

    #[test]
    fn test_unknown_option() {
        let err = Cli::try_parse_from(["ax", "create", "myapp", "--frobnicate"]).unwrap_err();
        assert!(err.to_string().contains("--frobnicate"));
    }
}
