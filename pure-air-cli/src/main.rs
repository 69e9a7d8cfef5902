use anyhow::{Context, Result};
use clap::Parser;
use pure_air_api::{ClientConfig, Light, Mode, PureAirClient};
use tracing::{info, warn};

/// Pure Air demo
///
/// Logs in to the cloud, prints every purifier bound to the account with its
/// status, then powers each one on and sets it to boost mode with a low light.
#[derive(Parser, Debug)]
#[command(name = "pure-air-cli")]
#[command(about = "Test the Intense Pure Air API: turns on your purifiers and sets boost mode")]
#[command(version)]
pub struct Args {
    /// Account login name (falls back to PURE_AIR_USERNAME)
    pub username: Option<String>,

    /// Account password (falls back to PURE_AIR_PASSWORD)
    pub password: Option<String>,

    /// API base URL
    #[arg(long, default_value = pure_air_api::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Fan mode to apply (quiet, night, day, boost)
    #[arg(long, default_value = "boost")]
    pub mode: Mode,

    /// Light level to apply (high, low, off)
    #[arg(long, default_value = "low")]
    pub light: Light,

    /// Print devices and their info without sending control commands
    #[arg(long)]
    pub list_only: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Configuration derived from command line arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub endpoint: String,
    pub mode: Mode,
    pub light: Light,
    pub list_only: bool,
    pub log_level: String,
}

impl Config {
    /// Resolve credentials from the arguments first and the environment second
    pub fn from_args(args: Args) -> Result<Self> {
        let username = match args.username {
            Some(username) => username,
            None => std::env::var("PURE_AIR_USERNAME")
                .context("No username given and PURE_AIR_USERNAME is not set")?,
        };
        let password = match args.password {
            Some(password) => password,
            None => std::env::var("PURE_AIR_PASSWORD")
                .context("No password given and PURE_AIR_PASSWORD is not set")?,
        };

        match args.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    args.log_level
                ));
            }
        }

        Ok(Self {
            username,
            password,
            endpoint: args.endpoint,
            mode: args.mode,
            light: args.light,
            list_only: args.list_only,
            log_level: args.log_level,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new().with_endpoint(self.endpoint.clone())
    }
}

/// Initialize tracing/logging with the specified log level
///
/// `RUST_LOG` wins over `--log-level` when set.
fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.to_lowercase())),
        )
        .init();
}

/// Connect, list and drive every device
///
/// Returns the number of devices found.
fn run(client: &mut PureAirClient, config: &Config) -> Result<usize> {
    client
        .connect(&config.username, &config.password)
        .context("Failed to log in")?;

    let devices = client.list_devices().context("Failed to list devices")?;
    if devices.is_empty() {
        warn!("No devices are bound to this account");
    }

    for device in &devices {
        let device_id = device.device_id;
        println!("Device {}: {}", device_id, device.name);

        let info = client
            .device_info(device_id)
            .with_context(|| format!("Failed to query device {}", device_id))?;
        println!("Info: {}", serde_json::to_string(&info)?);

        if config.list_only {
            continue;
        }

        println!("Setting it to {} mode.", config.mode);
        client
            .set_power(device_id, true)
            .with_context(|| format!("Failed to power on device {}", device_id))?;
        client
            .set_light(device_id, config.light)
            .with_context(|| format!("Failed to set light on device {}", device_id))?;
        client
            .set_mode(device_id, config.mode)
            .with_context(|| format!("Failed to set mode on device {}", device_id))?;
        info!(device_id, mode = %config.mode, light = %config.light, "device updated");
    }

    Ok(devices.len())
}

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    init_tracing(&config.log_level);

    let mut client = PureAirClient::with_config(config.client_config());
    let count = run(&mut client, &config)?;
    info!("Done, {} device(s) processed", count);

    Ok(())
}
