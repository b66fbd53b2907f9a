use crate::{admin_commands::AdminCommands, customer_commands::CustomerCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a new customer (no login required)
    Register {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Phone number the welcome SMS goes to
        #[arg(long)]
        phone: String,
    },

    /// Customer-facing operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Shop-owner operations (require `admin login` first)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
