use std::path::PathBuf;

use cc_core::SortKey;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        username: String,
        /// Password (falls back to CUTCARD_ADMIN_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// List customers
    Customers {
        /// Case-insensitive filter on name or phone number
        #[arg(long, default_value = "")]
        search: String,
        /// Sort column: name, phone, cuts
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Rows per page: 5, 10, 25 or 50 (defaults to directory.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Deduct one cut from a customer
    Deduct {
        /// Customer ID
        id: String,
    },

    /// Add cuts to a customer
    AddCuts {
        /// Customer ID
        id: String,
        /// Number of cuts to add (values below 1 count as 1)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },

    /// Read customer QR codes from a scanner and deduct one cut per code
    Scan {
        /// Scanner device emitting one payload per line (defaults to stdin)
        #[arg(long)]
        device: Option<PathBuf>,
        /// Keep scanning after each deduction until Ctrl-C or end of input
        #[arg(long)]
        continuous: bool,
    },
}
