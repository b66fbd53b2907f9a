//! cutcard - Cutcard loyalty-card client
//!
//! Customer registration, the customer QR card, and the shop owner's dashboard
//! (directory, deductions, scanner) from the terminal. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Register a customer
//! cutcard register --name Ada --phone +4512345678
//!
//! # Log in, then list customers sorted by remaining cuts
//! CUTCARD_ADMIN_PASSWORD=... cutcard admin login --username owner
//! cutcard admin customers --sort cuts --desc --pretty
//!
//! # Deduct a cut for every code read from a handheld scanner
//! cutcard admin scan --device /dev/hidraw0 --continuous
//! ```

mod admin_commands;
mod cli;
mod commands;
mod customer_commands;

use crate::{
    admin_commands::AdminCommands, cli::Cli, commands::Commands,
    customer_commands::CustomerCommands,
};

use cc_cli::{
    AdminDashboard, CliError, CliResult, Client, CustomerPage, FileSessionStore,
    LineScannerDevice, LoginForm, PayloadDecoder, QrFormat, QrScanner, RegistrationForm,
    ScanOutcome, SessionStore, logger, qr_render,
};
use cc_config::Config;
use cc_core::{Route, StatusMessage};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{error, warn};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::watch;

const PASSWORD_ENV: &str = "CUTCARD_ADMIN_PASSWORD";
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// What every command prints.
#[derive(Debug, Serialize)]
struct CommandOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<StatusMessage>,
    /// Screen the operator should go to next
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    #[serde(skip_serializing_if = "Value::is_null")]
    data: Value,
}

impl CommandOutput {
    fn new(status: Option<StatusMessage>, data: Value) -> Self {
        Self {
            status,
            route: None,
            data,
        }
    }

    fn from_dashboard(dashboard: &AdminDashboard, data: Value) -> Self {
        Self {
            status: dashboard.status().cloned(),
            route: dashboard.redirect().map(Route::path),
            data,
        }
    }

    fn with_route(mut self, route: Option<&Route>) -> Self {
        self.route = route.map(Route::path);
        self
    }

    /// A bare redirect (no status) means the command never ran.
    fn succeeded(&self) -> bool {
        match self.status {
            Some(ref status) => status.is_success(),
            None => self.route.is_none(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error starting async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = runtime.block_on(run(cli));
    // A scanner blocked on stdin must not keep the process alive.
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            if output.succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<CommandOutput> {
    let config = Config::load()?;
    config.validate()?;
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Explicit flag > config file / env
    let base_url = match cli.server {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
        Some(url) => {
            return Err(CliError::usage(format!(
                "--server must be an http(s) URL, got '{url}'"
            )));
        }
        None => config.api.base_url.clone(),
    };

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(config.session_path()?)?);
    let client = Arc::new(Client::with_timeout(
        &base_url,
        session,
        config.api.timeout(),
    )?);

    match cli.command {
        Commands::Register { name, phone } => {
            let mut form = RegistrationForm::with_fields(name, phone);
            let customer = form.submit(&client).await;
            Ok(CommandOutput::new(
                form.status().cloned(),
                serde_json::to_value(customer)?,
            ))
        }

        Commands::Customer { action } => match action {
            CustomerCommands::Show { id, qr } => {
                show_customer(&client, &config, id, qr.map(QrFormat::from)).await
            }
        },

        Commands::Admin { action } => admin(client, &config, action).await,
    }
}

async fn show_customer(
    client: &Client,
    config: &Config,
    id: String,
    qr: Option<QrFormat>,
) -> CliResult<CommandOutput> {
    let mut page = CustomerPage::new(id, config.api.public_origin.as_str());

    let data = match page.load(client).await {
        Some(card) => {
            let mut data = serde_json::to_value(card)?;
            if let Some(format) = qr {
                data["qr"] = Value::String(qr_render::render(&card.qr_url, format)?);
            }
            data
        }
        None => Value::Null,
    };

    Ok(CommandOutput::new(page.status().cloned(), data))
}

async fn admin(
    client: Arc<Client>,
    config: &Config,
    action: AdminCommands,
) -> CliResult<CommandOutput> {
    match action {
        AdminCommands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => std::env::var(PASSWORD_ENV).map_err(|_| {
                    CliError::usage(format!("--password or {PASSWORD_ENV} is required"))
                })?,
            };

            let mut form = LoginForm::new(username, password);
            let route = form.submit(&client).await;
            Ok(CommandOutput::new(form.status().cloned(), Value::Null).with_route(route.as_ref()))
        }

        AdminCommands::Logout => {
            let mut dashboard = AdminDashboard::new(client);
            let route = dashboard.logout();
            let status = dashboard
                .status()
                .cloned()
                .unwrap_or_else(|| StatusMessage::success("Logged out"));
            Ok(CommandOutput::new(Some(status), Value::Null).with_route(Some(&route)))
        }

        AdminCommands::Customers {
            search,
            sort,
            desc,
            page,
            page_size,
        } => {
            let page_size = page_size.unwrap_or(config.directory.page_size);
            let mut dashboard = AdminDashboard::new(client).with_page_size(page_size)?;
            if !mount(&mut dashboard).await {
                return Ok(CommandOutput::from_dashboard(&dashboard, Value::Null));
            }

            let directory = dashboard.directory_mut();
            directory.set_search(search);
            if let Some(key) = sort {
                directory.toggle_sort(key);
                if desc {
                    directory.toggle_sort(key);
                }
            }
            directory.set_page(page);

            let view = serde_json::to_value(dashboard.directory().page_view())?;
            Ok(CommandOutput::from_dashboard(&dashboard, view))
        }

        AdminCommands::Deduct { id } => {
            let mut dashboard = AdminDashboard::new(client);
            if !mount(&mut dashboard).await {
                return Ok(CommandOutput::from_dashboard(&dashboard, Value::Null));
            }

            let balance = dashboard.deduct_cut(&id).await;
            Ok(CommandOutput::from_dashboard(
                &dashboard,
                serde_json::to_value(balance)?,
            ))
        }

        AdminCommands::AddCuts { id, count } => {
            let mut dashboard = AdminDashboard::new(client);
            if !mount(&mut dashboard).await {
                return Ok(CommandOutput::from_dashboard(&dashboard, Value::Null));
            }

            let balance = dashboard.add_cuts(&id, count).await;
            Ok(CommandOutput::from_dashboard(
                &dashboard,
                serde_json::to_value(balance)?,
            ))
        }

        AdminCommands::Scan { device, continuous } => {
            let mut dashboard = AdminDashboard::new(client);
            if !mount(&mut dashboard).await {
                return Ok(CommandOutput::from_dashboard(&dashboard, Value::Null));
            }

            let device = match device {
                Some(path) => LineScannerDevice::at(path),
                None => LineScannerDevice::stdin(),
            };
            scan(dashboard, device, continuous).await
        }
    }
}

/// Load the dashboard; `false` when it redirected or the directory could not be fetched.
async fn mount(dashboard: &mut AdminDashboard) -> bool {
    dashboard.mount().await == Route::AdminDashboard && dashboard.is_loaded()
}

async fn scan(
    mut dashboard: AdminDashboard,
    device: LineScannerDevice,
    continuous: bool,
) -> CliResult<CommandOutput> {
    let mut scanner = QrScanner::new(device, PayloadDecoder);

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                stop_tx.send_replace(true);
            }
            Err(e) => {
                warn!("Ctrl-C handler unavailable: {e}");
                stop_tx.closed().await;
            }
        }
    });

    let mut scans = Vec::new();
    loop {
        match dashboard.scan_and_deduct(&mut scanner, stop_rx.clone()).await {
            ScanOutcome::Decoded { customer_id } => {
                let cuts_remaining = dashboard
                    .directory()
                    .get(&customer_id)
                    .map(|c| c.cuts_remaining);
                scans.push(json!({
                    "customerId": customer_id,
                    "status": dashboard.status(),
                    "cutsRemaining": cuts_remaining,
                }));

                if !continuous || dashboard.redirect().is_some() {
                    break;
                }
            }
            ScanOutcome::Stopped | ScanOutcome::Failed(_) => break,
        }
    }

    Ok(CommandOutput::from_dashboard(
        &dashboard,
        json!({ "scans": scans }),
    ))
}
