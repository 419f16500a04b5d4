//! NetSpawner: local validator network launcher and key tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use netspawner_types::DerivationPath;
use netspawner_utils::{init_logging, LogFormat, SystemClock};

#[derive(Parser)]
#[command(name = "netspawner", version, about = "Local blockchain network launcher")]
struct Cli {
    /// Launcher root holding `config.json`, `files/` and the node directories.
    /// Defaults to the directory containing this executable.
    #[arg(long, global = true, env = "NETSPAWNER_ROOT")]
    root: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, default_value = "info", env = "NETSPAWNER_LOG_LEVEL")]
    log_level: String,

    /// Log output format: "human" or "json".
    #[arg(long, global = true, default_value_t = LogFormat::Human, env = "NETSPAWNER_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Resume the network from the same point.
    Resume,

    /// Reset the network to genesis (drops all progress) and start it.
    Reset,

    /// Generate an Ed25519 key box as JSON.
    Keygen {
        /// Existing BIP39 mnemonic. If omitted, a new 24-word phrase is generated.
        #[arg(long, default_value = "")]
        mnemonic: String,

        /// Optional mnemonic passphrase.
        #[arg(long, default_value = "")]
        passphrase: String,

        /// Derivation path numbers separated by '/' (default 44/7337/0/0).
        #[arg(long)]
        path: Option<DerivationPath>,
    },

    /// Sign a message with a base64 PKCS#8 private key.
    Sign {
        #[arg(long)]
        private_key: String,

        #[arg(long)]
        message: String,
    },

    /// Verify a base64 signature against a base58 public key.
    Verify {
        #[arg(long)]
        public_key: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        signature: String,
    },
}

fn default_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the netspawner executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("executable has no parent directory")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    match cli.command {
        Command::Resume => {
            let root = cli.root.map_or_else(default_root, Ok)?;
            tracing::info!(root = %root.display(), "resuming network");
            netspawner_launcher::resume_network(&root).await?;
        }
        Command::Reset => {
            let root = cli.root.map_or_else(default_root, Ok)?;
            tracing::info!(root = %root.display(), "resetting network");
            netspawner_launcher::reset_network(&root, &SystemClock).await?;
        }
        Command::Keygen {
            mnemonic,
            passphrase,
            path,
        } => {
            if !mnemonic.is_empty() && !netspawner_crypto::validate_mnemonic(&mnemonic) {
                tracing::warn!("mnemonic is not a valid BIP39 phrase; deriving from it anyway");
            }
            let key_box = netspawner_crypto::generate_key_box(
                &mnemonic,
                &passphrase,
                path.unwrap_or_else(|| DerivationPath::new(Vec::new())),
                &mut rand::rngs::OsRng,
            )?;
            println!("{}", serde_json::to_string_pretty(&key_box)?);
        }
        Command::Sign {
            private_key,
            message,
        } => {
            let signature = netspawner_crypto::sign_encoded(&private_key, message.as_bytes())?;
            println!("{signature}");
        }
        Command::Verify {
            public_key,
            message,
            signature,
        } => {
            let valid =
                netspawner_crypto::verify_encoded(message.as_bytes(), &public_key, &signature)?;
            println!("{valid}");
        }
    }

    Ok(())
}
