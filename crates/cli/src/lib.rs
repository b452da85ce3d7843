//! Psyche CLI library — exposed for integration tests

pub mod account;
pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "psyche")]
#[command(about = "The metaphor library, from your terminal", long_about = None)]
#[command(version = psyche_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storefront API base URL override
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog and bundles (default command)
    Browse,

    /// Show an item's preview
    Preview {
        /// Item id
        id: String,
    },

    /// Read an item's full content
    Read {
        /// Item id
        id: String,
    },

    /// Purchase an item or bundle
    Buy {
        /// Item (or bundle) id
        id: String,

        /// Treat the id as a bundle id
        #[arg(long)]
        bundle: bool,

        /// Print the hosted checkout link instead of purchasing
        #[arg(long)]
        link: bool,
    },

    /// Manage sign-in and the stored session
    Auth {
        #[command(subcommand)]
        action: Option<commands::auth::AuthAction>,

        /// Identity token from the provider's sign-in page
        #[arg(long)]
        token: Option<String>,

        /// Identity provider
        #[arg(long, default_value = "google")]
        provider: String,
    },

    /// Suggest a new metaphor for the library
    Suggest {
        /// The metaphor being suggested
        suggestion: String,

        /// Your name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Why it belongs in the library
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Subscribe to the newsletter
    Subscribe {
        /// Email address
        email: String,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
