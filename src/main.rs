use anyhow::{Context, Result};
use business_elements::config::Config;
use business_elements::{Client, Endpoint, HttpExecutor, RequestDescriptor, Session, Tenant};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line client for the Business Elements API
#[derive(Parser, Debug)]
#[command(name = "be", version, about, long_about = None)]
struct Args {
    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Tenant handle, e.g. example.com
    #[arg(short, long)]
    tenant: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and remember the issued token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current authentication
    Logout,
    /// Check whether an email address can be registered
    EmailAvailable { email: String },
    /// List projects
    Projects,
    /// Show one project
    Project { id: String },
    /// List the instances of a project
    Instances { project: String },
    /// GET any endpoint by name, e.g. `be get instance P1 I1`
    Get {
        endpoint: String,
        params: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Logging disabled, cannot open {:?}: {}", log_path, err);
            return None;
        },
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("be started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("business-elements").join("be.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".business-elements").join("be.log");
    }
    PathBuf::from("be.log")
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    if let Err(err) = run(args).await {
        match err.downcast_ref::<business_elements::Error>() {
            Some(api_err) => eprintln!("Error: {}", api_err.user_message()),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load();
    let base_url = config.effective_base_url(args.base_url.as_deref());
    let tenant_handle = config
        .effective_tenant(args.tenant.as_deref())
        .context("No tenant configured. Set BE_TENANT or use --tenant")?;

    tracing::info!("Using {} for tenant {}", base_url, tenant_handle);

    let session = match &config.authentication_token {
        Some(token) => Session::with_token(token.clone()),
        None => Session::new(),
    };
    let http = HttpExecutor::new(&base_url, session.clone())
        .with_context(|| format!("Invalid base URL {base_url}"))?;
    let client = Client::with_executor(Arc::new(http), session);
    let tenant = client.tenant(tenant_handle);

    match args.command {
        Command::Login { email, password } => {
            match tenant.login(&email, &password).await? {
                Some(token) => {
                    config
                        .set_authentication_token(&token)
                        .context("Failed to save authentication token")?;
                    println!("Logged in as {email}");
                },
                None => println!("Logged in, but the server issued no token"),
            }
        },
        Command::Logout => {
            tenant.logout().await?;
            config
                .clear_authentication_token()
                .context("Failed to clear authentication token")?;
            println!("Logged out");
        },
        Command::EmailAvailable { email } => {
            let available = tenant.is_email_available(&email).await?;
            println!("{}", if available { "available" } else { "taken" });
        },
        Command::Projects => print_items(tenant.projects().list().await?)?,
        Command::Project { id } => print_json(&tenant.projects().project(id).get().await?)?,
        Command::Instances { project } => {
            print_items(tenant.projects().project(project).instances().list().await?)?
        },
        Command::Get { endpoint, params } => print_json(&get(&tenant, &endpoint, &params).await?)?,
    }

    Ok(())
}

async fn get(tenant: &Tenant, endpoint: &str, params: &[String]) -> Result<Value> {
    let endpoint: Endpoint = endpoint.parse()?;
    let params: Vec<&str> = params.iter().map(String::as_str).collect();
    Ok(tenant
        .execute(RequestDescriptor::get(endpoint, &params)?)
        .await?)
}

fn print_items(items: Vec<Value>) -> Result<()> {
    print_json(&Value::Array(items))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
