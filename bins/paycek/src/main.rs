//! Paycek CLI
//!
//! Signs and verifies processing API requests offline, and sends signed
//! calls to the processing API.

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{api, auth};

/// Command-line access to the Paycek processing API
#[derive(Parser)]
#[command(name = "paycek")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    credentials: CredentialArgs,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// API credentials and target host
#[derive(Args)]
pub struct CredentialArgs {
    /// API key identifier
    #[arg(long, global = true, env = "PAYCEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API secret
    #[arg(long, global = true, env = "PAYCEK_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// Scheme and host of the processing API
    #[arg(long, global = true, env = "PAYCEK_API_HOST")]
    pub host: Option<String>,
}

/// Request body, inline or from a file
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct BodyArgs {
    /// Body string, used verbatim
    #[arg(short, long)]
    pub body: Option<String>,

    /// Read the body from a file, used verbatim
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the authentication headers for a request
    Sign {
        /// Endpoint path, e.g. /processing/api/payment/get
        #[arg(short, long)]
        endpoint: String,

        #[command(flatten)]
        body: BodyArgs,

        /// HTTP method
        #[arg(short, long, default_value = paycek_crypto::DEFAULT_SIGN_METHOD)]
        method: String,

        /// Content type
        #[arg(short, long, default_value = paycek_crypto::DEFAULT_SIGN_CONTENT_TYPE)]
        content_type: String,

        /// Use this nonce instead of the current time
        #[arg(short, long)]
        nonce: Option<String>,
    },

    /// Check a MAC received with a callback (exit code 1 when invalid)
    Verify {
        /// Endpoint path the callback was received on
        #[arg(short, long)]
        endpoint: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Received ApiKeyAuth-Nonce value
        #[arg(short, long)]
        nonce: String,

        /// Received ApiKeyAuth-MAC value
        #[arg(long)]
        mac: String,

        /// HTTP method of the callback
        #[arg(short, long, default_value = paycek_crypto::DEFAULT_VERIFY_METHOD)]
        method: String,

        /// Content type of the callback
        #[arg(short, long, default_value = paycek_crypto::DEFAULT_VERIFY_CONTENT_TYPE)]
        content_type: String,
    },

    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Fetch a profile report
    Reports {
        /// Profile code
        profile_code: String,

        /// Start of the range
        #[arg(long)]
        from: String,

        /// End of the range
        #[arg(long)]
        to: String,

        /// Restrict the report to one location
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Subcommand)]
enum PaymentAction {
    /// Fetch a payment
    Get {
        /// Payment code
        payment_code: String,
    },

    /// Open a new payment
    Open(api::OpenArgs),

    /// Cancel a payment
    Cancel {
        /// Payment code
        payment_code: String,
    },

    /// Open a payment and print its payment URL
    Url(api::OpenArgs),
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Fetch profile information
    Info {
        /// Profile code
        profile_code: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("paycek=debug,paycek_api_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let creds = &cli.credentials;
    let format = cli.format;

    let result = match cli.command {
        Commands::Sign {
            endpoint,
            body,
            method,
            content_type,
            nonce,
        } => auth::sign(creds, &endpoint, &body, &method, &content_type, nonce, format),

        Commands::Verify {
            endpoint,
            body,
            nonce,
            mac,
            method,
            content_type,
        } => auth::verify(creds, &endpoint, &body, &nonce, &mac, &method, &content_type, format),

        Commands::Payment { action } => match action {
            PaymentAction::Get { payment_code } => api::payment_get(creds, &payment_code, format).await,
            PaymentAction::Open(args) => api::payment_open(creds, &args, format).await,
            PaymentAction::Cancel { payment_code } => {
                api::payment_cancel(creds, &payment_code, format).await
            }
            PaymentAction::Url(args) => api::payment_url(creds, &args, format).await,
        },

        Commands::Profile { action } => match action {
            ProfileAction::Info { profile_code } => api::profile_info(creds, &profile_code, format).await,
        },

        Commands::Reports {
            profile_code,
            from,
            to,
            location,
        } => api::reports(creds, &profile_code, &from, &to, location.as_deref(), format).await,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
