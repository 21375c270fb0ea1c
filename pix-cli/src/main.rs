//! PIX CLI
//!
//! Maps command-line flags (and PIX_* environment variables) into a
//! `PaymentRequest`, encodes it, and prints the BR Code payload ready to
//! feed a QR renderer. The inverse `decode` subcommand checks a payload's
//! structure and checksum.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use pix_brcode::{decode, encode};
use pix_types::{Amount, KeyKind, PaymentRequest};

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "PIX BR Code generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a BR Code payload from payment fields
    Encode {
        /// PIX key (email, phone, CPF/CNPJ or random key)
        #[arg(long, env = "PIX_KEY")]
        key: String,

        /// Key kind; inferred from the key's shape when omitted
        #[arg(long, value_enum)]
        key_kind: Option<KeyKindArg>,

        /// Receiver name (truncated to 25 characters)
        #[arg(long, env = "PIX_MERCHANT_NAME")]
        name: String,

        /// Receiver city (truncated to 15 characters)
        #[arg(long, env = "PIX_MERCHANT_CITY")]
        city: String,

        /// Fixed amount, e.g. 10.00; omit to let the payer type it
        #[arg(long)]
        amount: Option<String>,

        /// Transaction reference (up to 25 characters)
        #[arg(long)]
        txid: Option<String>,

        /// Free-text description shown by the payer's bank app
        #[arg(long)]
        desc: Option<String>,

        /// Print the payload and normalized fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a payload and verify its checksum
    Decode {
        /// The BR Code payload text
        payload: String,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
}

/// CLI-facing mirror of `KeyKind`, so clap can enumerate values in --help.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyKindArg {
    Email,
    Phone,
    Cpf,
    Cnpj,
    Evp,
}

impl From<KeyKindArg> for KeyKind {
    fn from(arg: KeyKindArg) -> Self {
        match arg {
            KeyKindArg::Email => KeyKind::Email,
            KeyKindArg::Phone => KeyKind::Phone,
            KeyKindArg::Cpf => KeyKind::Cpf,
            KeyKindArg::Cnpj => KeyKind::Cnpj,
            KeyKindArg::Evp => KeyKind::Evp,
        }
    }
}

fn parse_amount(s: &str) -> Result<Amount> {
    s.parse()
        .with_context(|| format!("invalid --amount {:?}", s))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            key,
            key_kind,
            name,
            city,
            amount,
            txid,
            desc,
            json,
        } => {
            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let request = match key_kind {
                Some(kind) => PaymentRequest::new_with_kind(
                    &key,
                    kind.into(),
                    &name,
                    &city,
                    amount,
                    txid,
                    desc,
                )?,
                None => PaymentRequest::new(&key, &name, &city, amount, txid, desc)?,
            };
            tracing::debug!(kind = %request.key.kind(), "encoding payment request");

            let payload = encode(&request)?;
            if json {
                let view = serde_json::json!({
                    "payload": payload,
                    "request": request,
                });
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", payload);
            }
        }

        Commands::Decode { payload, json } => {
            let decoded = decode(payload.trim())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                println!("key:    {} ({})", decoded.key, decoded.gui);
                println!("name:   {}", decoded.merchant_name);
                println!("city:   {}", decoded.merchant_city);
                match decoded.amount {
                    Some(amount) => println!("amount: {}", amount),
                    None => println!("amount: (payer enters amount)"),
                }
                println!("txid:   {}", decoded.txid);
                if let Some(desc) = &decoded.description {
                    println!("desc:   {}", desc);
                }
                println!("crc:    {} (valid)", decoded.crc);
            }
        }
    }

    Ok(())
}
