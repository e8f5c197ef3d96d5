//! # CLI Interface
//!
//! Defines the command-line argument structure for `nacl-cli` using `clap`
//! derive. Every binary argument (keys, nonces, boxes, signatures) is text,
//! hex by default or base64 with `--encoding base64`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use zeroize::Zeroizing;

/// NaCl box, secretbox and signatures from the command line.
///
/// Useful for generating fixtures and checking interop with other NaCl
/// implementations. Results go to stdout, logs to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "nacl-cli",
    about = "NaCl-compatible box, secretbox, sign and hash",
    version,
    propagate_version = true
)]
pub struct NaclCli {
    /// Text encoding for every binary argument and result.
    #[arg(long, global = true, value_enum, env = "NACL_ENCODING", default_value_t = Encoding::Hex)]
    pub encoding: Encoding,

    /// Log output format: "pretty" or "json".
    #[arg(long, global = true, env = "NACL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Log library events at debug level (lengths and outcomes only).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a key pair, or re-derive one from a secret key or seed.
    Keygen(KeygenArgs),
    /// Secretbox: encrypt and authenticate a message under a shared key.
    Seal(SecretboxSealArgs),
    /// Secretbox: verify and decrypt.
    Open(SecretboxOpenArgs),
    /// Box: encrypt and authenticate a message to a public key.
    BoxSeal(BoxSealArgs),
    /// Box: verify and decrypt a message from a public key.
    BoxOpen(BoxOpenArgs),
    /// Precompute the shared box key for a peer.
    Before(KeyAgreementArgs),
    /// Raw X25519 scalar multiplication.
    Scalarmult(ScalarmultArgs),
    /// Ed25519: produce `signature || message`.
    Sign(SignArgs),
    /// Ed25519: check a signed message and print the message.
    SignOpen(SignOpenArgs),
    /// Ed25519: produce a detached 64-byte signature.
    SignDetached(SignArgs),
    /// Ed25519: check a detached signature. Prints `true` or `false`.
    VerifyDetached(VerifyDetachedArgs),
    /// SHA-512 of a message.
    Hash(HashArgs),
    /// Bytes from the operating system CSPRNG.
    Random(RandomArgs),
    /// Print version information and exit.
    Version,
}

/// Text encodings for binary values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hex.
    Hex,
    /// Standard padded base64.
    Base64,
}

impl Encoding {
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => nacl::encoding::encode_hex(bytes),
            Encoding::Base64 => nacl::encoding::encode_base64(bytes),
        }
    }

    pub fn decode(self, text: &str) -> nacl::Result<Vec<u8>> {
        match self {
            Encoding::Hex => nacl::encoding::decode_hex(text),
            Encoding::Base64 => nacl::encoding::decode_base64(text),
        }
    }

    /// Decode into a buffer that is wiped on drop. For secret keys and seeds.
    pub fn decode_secret(self, text: &str) -> nacl::Result<Zeroizing<Vec<u8>>> {
        self.decode(text).map(Zeroizing::new)
    }
}

/// Which key family `keygen` produces.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Curve25519 key pair for box.
    Box,
    /// Ed25519 key pair for sign.
    Sign,
}

/// A message, as UTF-8 text or as encoded bytes. Exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct MessageArgs {
    /// Message as UTF-8 text.
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Message as encoded bytes (see `--encoding`).
    #[arg(long)]
    pub message_encoded: Option<String>,
}

/// Arguments for the `keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Key family.
    #[arg(value_enum)]
    pub kind: KeyKind,

    /// Re-derive from this secret key instead of generating a new one.
    #[arg(long, conflicts_with = "seed")]
    pub secret_key: Option<String>,

    /// Derive a sign key pair from this 32-byte seed.
    #[arg(long)]
    pub seed: Option<String>,

    /// Print the key pair as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `seal` subcommand.
#[derive(Args, Debug)]
pub struct SecretboxSealArgs {
    /// 32-byte shared key.
    #[arg(long, short = 'k')]
    pub key: String,

    /// 24-byte nonce. Never reuse one under the same key.
    #[arg(long, short = 'n')]
    pub nonce: String,

    #[command(flatten)]
    pub message: MessageArgs,
}

/// Arguments for the `open` subcommand.
#[derive(Args, Debug)]
pub struct SecretboxOpenArgs {
    /// 32-byte shared key.
    #[arg(long, short = 'k')]
    pub key: String,

    /// 24-byte nonce.
    #[arg(long, short = 'n')]
    pub nonce: String,

    /// The box: tag followed by ciphertext.
    #[arg(long, short = 'c')]
    pub ciphertext: String,

    /// Print the recovered message as UTF-8 text instead of encoded bytes.
    #[arg(long)]
    pub utf8: bool,
}

/// Arguments for the `box-seal` subcommand.
#[derive(Args, Debug)]
pub struct BoxSealArgs {
    /// Recipient's 32-byte public key.
    #[arg(long)]
    pub public_key: String,

    /// Sender's 32-byte secret key.
    #[arg(long)]
    pub secret_key: String,

    /// 24-byte nonce.
    #[arg(long, short = 'n')]
    pub nonce: String,

    #[command(flatten)]
    pub message: MessageArgs,
}

/// Arguments for the `box-open` subcommand.
#[derive(Args, Debug)]
pub struct BoxOpenArgs {
    /// Sender's 32-byte public key.
    #[arg(long)]
    pub public_key: String,

    /// Recipient's 32-byte secret key.
    #[arg(long)]
    pub secret_key: String,

    /// 24-byte nonce.
    #[arg(long, short = 'n')]
    pub nonce: String,

    /// The box: tag followed by ciphertext.
    #[arg(long, short = 'c')]
    pub ciphertext: String,

    /// Print the recovered message as UTF-8 text instead of encoded bytes.
    #[arg(long)]
    pub utf8: bool,
}

/// Arguments for the `before` subcommand.
#[derive(Args, Debug)]
pub struct KeyAgreementArgs {
    /// Peer's 32-byte public key.
    #[arg(long)]
    pub public_key: String,

    /// Own 32-byte secret key.
    #[arg(long)]
    pub secret_key: String,
}

/// Arguments for the `scalarmult` subcommand.
#[derive(Args, Debug)]
pub struct ScalarmultArgs {
    /// 32-byte scalar.
    #[arg(long)]
    pub scalar: String,

    /// 32-byte point. The base point when omitted.
    #[arg(long)]
    pub point: Option<String>,
}

/// Arguments for `sign` and `sign-detached`.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// 64-byte secret key (`seed || public_key`).
    #[arg(long)]
    pub secret_key: String,

    #[command(flatten)]
    pub message: MessageArgs,
}

/// Arguments for the `sign-open` subcommand.
#[derive(Args, Debug)]
pub struct SignOpenArgs {
    /// Signer's 32-byte public key.
    #[arg(long)]
    pub public_key: String,

    /// The signed message: signature followed by message.
    #[arg(long)]
    pub signed: String,

    /// Print the recovered message as UTF-8 text instead of encoded bytes.
    #[arg(long)]
    pub utf8: bool,
}

/// Arguments for the `verify-detached` subcommand.
#[derive(Args, Debug)]
pub struct VerifyDetachedArgs {
    /// Signer's 32-byte public key.
    #[arg(long)]
    pub public_key: String,

    /// 64-byte detached signature.
    #[arg(long)]
    pub signature: String,

    #[command(flatten)]
    pub message: MessageArgs,
}

/// Arguments for the `hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub message: MessageArgs,
}

/// Arguments for the `random` subcommand.
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of bytes.
    #[arg(long, default_value_t = 32)]
    pub count: usize,
}
