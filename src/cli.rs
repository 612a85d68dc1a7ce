// src/cli.rs
//! Command line of the `lipi` operator binary.

use clap::{Parser, Subcommand};

/// Env var read by `create-admin` when `--password-stdin` is not given.
pub const ADMIN_PASSWORD_ENV: &str = "LIPI_ADMIN_PASSWORD";

#[derive(Debug, Parser)]
#[command(name = "lipi")]
#[command(version)]
#[command(about = "Multilingual CMS core: migrations, slugs and admin bootstrap", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command, `migrate` when none was given.
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Migrate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations.
    Migrate,
    /// Print the slug and detected language of some text.
    Slug {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Create a super admin account.
    ///
    /// The password is read from stdin with `--password-stdin`, otherwise
    /// from LIPI_ADMIN_PASSWORD, otherwise prompted for twice.
    CreateAdmin {
        #[arg(long, env = "LIPI_ADMIN_NAME")]
        name: String,
        #[arg(long, env = "LIPI_ADMIN_EMAIL")]
        email: String,
        #[arg(long)]
        password_stdin: bool,
    },
}
