//! idkit: command-line entry point for the identity-capture toolkit.

mod commands;

use clap::Parser;
use idkit_session::IdkitConfig;
use idkit_types::AddressValue;
use idkit_utils::LogFormat;
use idkit_verification::VerifyOptions;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idkit", about = "Identity capture toolkit")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "IDKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "IDKIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "IDKIT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Default)]
struct AddressArgs {
    #[arg(long, default_value = "")]
    line1: String,
    #[arg(long, default_value = "")]
    line2: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    region: String,
    #[arg(long, default_value = "")]
    postal_code: String,
    /// Country of the address (not the phone number).
    #[arg(id = "address_country", long = "address-country", default_value = "")]
    country: String,
}

impl From<AddressArgs> for AddressValue {
    fn from(args: AddressArgs) -> Self {
        AddressValue {
            line1: args.line1,
            line2: args.line2,
            city: args.city,
            region: args.region,
            postal_code: args.postal_code,
            country: args.country,
        }
    }
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the supported countries and dial codes.
    Countries,

    /// Normalize a phone number to E.164.
    Phone {
        /// The number as typed, e.g. "+44 20 7123 4567" or "(415) 555-2671".
        raw: String,

        /// Country assumed when the number has no "+" prefix.
        #[arg(long, env = "IDKIT_DEFAULT_COUNTRY")]
        country: Option<String>,
    },

    /// Normalize and validate an address.
    Address {
        #[command(flatten)]
        fields: AddressArgs,

        /// A JSON address in either form or canonical shape; overrides the
        /// field flags.
        #[arg(long)]
        json: Option<String>,
    },

    /// Run a simulated identity verification.
    Verify {
        /// Selfie as a `data:` URL or a path to an image file.
        #[arg(long)]
        selfie: String,

        /// Phone number as typed.
        #[arg(long)]
        phone: String,

        /// Country assumed when the number has no "+" prefix.
        #[arg(long, env = "IDKIT_DEFAULT_COUNTRY")]
        country: Option<String>,

        #[command(flatten)]
        address: AddressArgs,

        /// Probability of a simulated outage.
        #[arg(long, env = "IDKIT_ERROR_RATE")]
        error_rate: Option<f64>,

        /// Probability of a passing score.
        #[arg(long, env = "IDKIT_PASS_RATE")]
        pass_rate: Option<f64>,

        /// Seed for reproducible results.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => IdkitConfig::from_toml_file(path)?,
        None => IdkitConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    idkit_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::debug!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Countries => print_json(commands::countries()),
        Command::Phone { raw, country } => {
            let country = country.unwrap_or_else(|| config.default_country.clone());
            print_json(&commands::phone(&raw, &country))
        }
        Command::Address { fields, json } => {
            print_json(&commands::address(fields.into(), json.as_deref(), &config)?)
        }
        Command::Verify {
            selfie,
            phone,
            country,
            address,
            error_rate,
            pass_rate,
            seed,
        } => {
            if let Some(country) = country {
                config.default_country = country;
            }
            let options = VerifyOptions {
                error_rate: error_rate.unwrap_or(config.verification.error_rate),
                pass_rate: pass_rate.unwrap_or(config.verification.pass_rate),
            };
            let selfie = commands::load_selfie(&selfie, &config)?;
            tracing::info!(country = %config.default_country, "running simulated verification");
            let data =
                commands::verify(selfie, &phone, address.into(), options, seed, &config).await?;
            print_json(&data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_flags_parse() {
        let cli = Cli::try_parse_from([
            "idkit",
            "verify",
            "--selfie",
            "data:x",
            "--phone",
            "+4420 7123 4567",
            "--line1",
            "1 High St",
            "--address-country",
            "GB",
            "--pass-rate",
            "1",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        match cli.command {
            Command::Verify {
                address, pass_rate, ..
            } => {
                let value = AddressValue::from(address);
                assert_eq!(value.line1, "1 High St");
                assert_eq!(value.country, "GB");
                assert_eq!(pass_rate, Some(1.0));
            }
            _ => panic!("expected verify"),
        }
    }
}
