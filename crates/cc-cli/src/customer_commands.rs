use clap::{Subcommand, ValueEnum};
use cc_cli::QrFormat;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Show a customer's card and QR code
    Show {
        /// Customer ID
        id: String,
        /// Include the rendered QR code in the output
        #[arg(long, value_enum)]
        qr: Option<QrArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QrArg {
    Unicode,
    Svg,
}

impl From<QrArg> for QrFormat {
    fn from(arg: QrArg) -> Self {
        match arg {
            QrArg::Unicode => QrFormat::Unicode,
            QrArg::Svg => QrFormat::Svg,
        }
    }
}
