//! Farmstand CLI - inspect and clear the persisted cart collections.
//!
//! # Usage
//!
//! ```bash
//! # Print the likes collection
//! farmstand show likes
//!
//! # Print the pre-order basket
//! farmstand show preorder
//!
//! # Clear one collection, or everything
//! farmstand clear preorder
//! farmstand clear all
//! ```
//!
//! The storage directory comes from `FARMSTAND_STORAGE_DIR` (or `--storage-dir`).

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use farmstand_core::CollectionKey;
use farmstand_storefront::config::DEFAULT_STORAGE_DIR;
use farmstand_storefront::storage::FileStorage;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "farmstand")]
#[command(author, version, about = "Farmstand storage tools")]
struct Cli {
    /// Storage directory (overrides FARMSTAND_STORAGE_DIR)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a collection's entries as JSON
    Show {
        /// Which collection ("likes" or "preorder")
        collection: CollectionKey,
    },
    /// Clear collections
    Clear {
        /// Which collection to clear
        target: ClearTarget,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ClearTarget {
    Likes,
    Preorder,
    All,
}

fn storage_dir(cli: &Cli) -> PathBuf {
    cli.storage_dir.clone().unwrap_or_else(|| {
        std::env::var("FARMSTAND_STORAGE_DIR")
            .unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string())
            .into()
    })
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let storage = FileStorage::new(storage_dir(&cli));

    let result = match cli.command {
        Commands::Show { collection } => commands::show::run(&storage, collection),
        Commands::Clear { target } => {
            let keys: &[CollectionKey] = match target {
                ClearTarget::Likes => &[CollectionKey::Likes],
                ClearTarget::Preorder => &[CollectionKey::Preorder],
                ClearTarget::All => &[CollectionKey::Likes, CollectionKey::Preorder],
            };
            commands::clear::run(storage, keys)
        }
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "command failed");
        std::process::exit(1);
    }
}
