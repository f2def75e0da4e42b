use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jsonsig")]
#[command(about = "Sign and verify canonical JSON and byte payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new signing key
    Keygen(KeygenCmd),
    /// Print the canonical form of a JSON document
    Normalize(NormalizeCmd),
    /// Print the digest that would be signed for a payload
    Digest(DigestCmd),
    /// Sign a payload
    Sign(SignCmd),
    /// Verify a signature against a public key
    Verify(VerifyCmd),
    /// Recover the public key that signed a payload
    Recover(RecoverCmd),
}

#[derive(Parser)]
pub struct KeygenCmd {
    /// Write the key file here (defaults to the configured key path)
    #[arg(long)]
    pub out: Option<String>,

    /// Print the key without writing a key file
    #[arg(long)]
    pub no_save: bool,

    /// Replace an existing key file
    #[arg(long, conflicts_with = "no_save")]
    pub force: bool,
}

#[derive(Parser)]
pub struct NormalizeCmd {
    /// Path to a JSON document, or - for stdin
    #[arg(default_value = "-")]
    pub file: String,
}

/// Options shared by every command that reads a payload.
#[derive(Args)]
pub struct PayloadArgs {
    /// Path to the payload, or - for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Treat the payload as JSON and normalize it first
    #[arg(long)]
    pub json: bool,

    /// Sign as a transaction for this chain instead of as a message
    #[arg(long)]
    pub chain_id: Option<String>,

    /// Use the message digest even when a chain id is configured
    #[arg(long, conflicts_with = "chain_id")]
    pub message: bool,
}

#[derive(Parser)]
pub struct DigestCmd {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Parser)]
pub struct SignCmd {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Private key hex (defaults to the configured key file)
    #[arg(long, env = "JSONSIG_PRIVATE_KEY", hide_env_values = true)]
    pub key: Option<String>,
}

#[derive(Parser)]
pub struct VerifyCmd {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Hex signature (65 bytes)
    #[arg(long)]
    pub signature: String,

    /// Compressed or uncompressed public key hex
    #[arg(long)]
    pub public_key: String,
}

#[derive(Parser)]
pub struct RecoverCmd {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Hex signature (65 bytes)
    #[arg(long)]
    pub signature: String,

    /// Print the uncompressed public key
    #[arg(long)]
    pub expanded: bool,
}
