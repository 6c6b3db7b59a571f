use clap::{Parser, Subcommand};

const PWGAUGE_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("PWGAUGE_GIT_SHA"), "\n",
"build time (UTC): ", env!("PWGAUGE_BUILD_TIME"), "\n",
"target: ", env!("PWGAUGE_TARGET"), "\n",
"profile: ", env!("PWGAUGE_PROFILE")
);

#[derive(Parser)]
#[command(
    name = "pwgauge",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PWGAUGE_LONG_VERSION,
    about = " 🔎 pwgauge — Password Strength Checker client"
)]
pub struct Cli {
    /// Analysis server base URL (overrides PWGAUGE_SERVER_URL and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive Terminal UI
    Tui,
    /// Analyze one password and print the report
    Analyze {
        /// Password to analyze (prompted without echo when omitted)
        password: Option<String>,
        /// Output the rendered report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the server to create its sample data
    Bootstrap,
    /// Manage the stored API key
    #[command(subcommand)]
    Key(KeyCommand),
    /// Inspect resolved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum KeyCommand {
    /// Store the API key sent with analysis requests
    Set {
        /// API key (prompted when omitted)
        key: Option<String>,
    },
    /// Show the stored API key (masked unless --reveal)
    Show {
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print resolved settings
    Show,
    /// Print the config.toml location
    Path,
}
