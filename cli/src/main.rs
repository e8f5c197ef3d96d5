// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nacl-cli
//!
//! Entry point for the `nacl-cli` binary. Parses CLI arguments, initializes
//! logging, and runs one NaCl operation per invocation.
//!
//! Every binary value on the command line and on stdout is hex or base64
//! (`--encoding`). Messages can also be given as plain UTF-8 with
//! `--message`. Errors go to stderr and exit non-zero; `verify-detached`
//! answers `true`/`false` on stdout and exits zero for well-formed input.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use zeroize::Zeroizing;

use nacl::{public_box, scalarmult, secretbox, sign, util};

use cli::{Commands, Encoding, KeyKind, MessageArgs, NaclCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = NaclCli::parse();

    let default_level = if cli.verbose { "nacl=debug,nacl_cli=debug" } else { "warn" };
    logging::init_logging(default_level, LogFormat::from_str_lossy(&cli.log_format));

    let output = run(cli)?;
    println!("{}", *output);
    Ok(())
}

/// Run one subcommand and return what goes to stdout. Keygen output holds
/// secret keys, so the text is wiped on drop.
fn run(cli: NaclCli) -> Result<Zeroizing<String>> {
    let enc = cli.encoding;
    let output = match cli.command {
        Commands::Keygen(args) => return keygen(enc, args),
        Commands::Seal(args) => {
            let key = enc.decode_secret(&args.key).context("--key")?;
            let nonce = enc.decode(&args.nonce).context("--nonce")?;
            let message = read_message(enc, &args.message)?;
            let boxed = secretbox::seal(&message, &nonce, &key).context("secretbox seal")?;
            enc.encode(&boxed)
        }
        Commands::Open(args) => {
            let key = enc.decode_secret(&args.key).context("--key")?;
            let nonce = enc.decode(&args.nonce).context("--nonce")?;
            let ciphertext = enc.decode(&args.ciphertext).context("--ciphertext")?;
            let message = Zeroizing::new(
                secretbox::open(&ciphertext, &nonce, &key).context("secretbox open")?,
            );
            return render_message(enc, &message, args.utf8);
        }
        Commands::BoxSeal(args) => {
            let public_key = enc.decode(&args.public_key).context("--public-key")?;
            let secret_key = enc.decode_secret(&args.secret_key).context("--secret-key")?;
            let nonce = enc.decode(&args.nonce).context("--nonce")?;
            let message = read_message(enc, &args.message)?;
            let boxed = public_box::seal(&message, &nonce, &public_key, &secret_key)
                .context("box seal")?;
            enc.encode(&boxed)
        }
        Commands::BoxOpen(args) => {
            let public_key = enc.decode(&args.public_key).context("--public-key")?;
            let secret_key = enc.decode_secret(&args.secret_key).context("--secret-key")?;
            let nonce = enc.decode(&args.nonce).context("--nonce")?;
            let ciphertext = enc.decode(&args.ciphertext).context("--ciphertext")?;
            let message = Zeroizing::new(
                public_box::open(&ciphertext, &nonce, &public_key, &secret_key)
                    .context("box open")?,
            );
            return render_message(enc, &message, args.utf8);
        }
        Commands::Before(args) => {
            let public_key = enc.decode(&args.public_key).context("--public-key")?;
            let secret_key = enc.decode_secret(&args.secret_key).context("--secret-key")?;
            let shared = public_box::before(&public_key, &secret_key).context("box before")?;
            return Ok(Zeroizing::new(enc.encode(&shared[..])));
        }
        Commands::Scalarmult(args) => {
            let scalar = enc.decode_secret(&args.scalar).context("--scalar")?;
            let product = match &args.point {
                Some(point) => {
                    let point = enc.decode(point).context("--point")?;
                    scalarmult::mult(&scalar, &point)
                }
                None => scalarmult::base(&scalar),
            }
            .context("scalarmult")?;
            let product = Zeroizing::new(product);
            return Ok(Zeroizing::new(enc.encode(&product[..])));
        }
        Commands::Sign(args) => {
            let secret_key = enc.decode_secret(&args.secret_key).context("--secret-key")?;
            let message = read_message(enc, &args.message)?;
            let signed = sign::sign(&message, &secret_key).context("sign")?;
            enc.encode(&signed)
        }
        Commands::SignOpen(args) => {
            let public_key = enc.decode(&args.public_key).context("--public-key")?;
            let signed = enc.decode(&args.signed).context("--signed")?;
            let message =
                Zeroizing::new(sign::open(&signed, &public_key).context("sign open")?);
            return render_message(enc, &message, args.utf8);
        }
        Commands::SignDetached(args) => {
            let secret_key = enc.decode_secret(&args.secret_key).context("--secret-key")?;
            let message = read_message(enc, &args.message)?;
            let signature = sign::sign_detached(&message, &secret_key).context("sign detached")?;
            enc.encode(&signature)
        }
        Commands::VerifyDetached(args) => {
            let public_key = enc.decode(&args.public_key).context("--public-key")?;
            let signature = enc.decode(&args.signature).context("--signature")?;
            let message = read_message(enc, &args.message)?;
            let valid = sign::verify_detached(&message, &signature, &public_key)
                .context("verify detached")?;
            valid.to_string()
        }
        Commands::Hash(args) => {
            let message = read_message(enc, &args.message)?;
            enc.encode(&nacl::hash::hash(&message))
        }
        Commands::Random(args) => {
            let bytes = Zeroizing::new(util::random_bytes(args.count).context("random")?);
            return Ok(Zeroizing::new(enc.encode(&bytes)));
        }
        Commands::Version => version_info(),
    };
    Ok(Zeroizing::new(output))
}

/// JSON shape of a key pair. Borrows the secret so the only owned copy stays
/// in a zeroizing buffer.
#[derive(Serialize)]
struct KeyPairOutput<'a> {
    kind: &'static str,
    algorithm: &'static str,
    public_key: String,
    secret_key: &'a str,
}

fn keygen(enc: Encoding, args: cli::KeygenArgs) -> Result<Zeroizing<String>> {
    let (kind, algorithm, public_key, secret_key) = match args.kind {
        KeyKind::Box => {
            if args.seed.is_some() {
                bail!("--seed only applies to sign key pairs");
            }
            let pair = match &args.secret_key {
                Some(sk) => {
                    let sk = enc.decode_secret(sk).context("--secret-key")?;
                    public_box::keypair_from_secret_key(&sk)
                }
                None => public_box::keypair(),
            }
            .context("box keypair")?;
            (
                "box",
                nacl::config::KEY_EXCHANGE_ALGORITHM,
                enc.encode(&pair.public_key),
                Zeroizing::new(enc.encode(&pair.secret_key[..])),
            )
        }
        KeyKind::Sign => {
            let pair = match (&args.seed, &args.secret_key) {
                (Some(seed), _) => {
                    let seed = enc.decode_secret(seed).context("--seed")?;
                    sign::keypair_from_seed(&seed)
                }
                (None, Some(sk)) => {
                    let sk = enc.decode_secret(sk).context("--secret-key")?;
                    sign::keypair_from_secret_key(&sk)
                }
                (None, None) => sign::keypair(),
            }
            .context("sign keypair")?;
            (
                "sign",
                nacl::config::SIGNING_ALGORITHM,
                enc.encode(&pair.public_key),
                Zeroizing::new(enc.encode(&pair.secret_key[..])),
            )
        }
    };

    if args.json {
        let output = KeyPairOutput {
            kind,
            algorithm,
            public_key,
            secret_key: &secret_key,
        };
        Ok(Zeroizing::new(serde_json::to_string_pretty(&output)?))
    } else {
        Ok(Zeroizing::new(format!(
            "public_key: {public_key}\nsecret_key: {}",
            *secret_key
        )))
    }
}

fn read_message(enc: Encoding, args: &MessageArgs) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = match (&args.message, &args.message_encoded) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(encoded)) => enc.decode(encoded).context("--message-encoded")?,
        // clap's argument group guarantees one of the two.
        (None, None) => bail!("a message is required"),
    };
    Ok(Zeroizing::new(bytes))
}

fn render_message(enc: Encoding, message: &[u8], utf8: bool) -> Result<Zeroizing<String>> {
    if utf8 {
        let text = std::str::from_utf8(message).context("message is not valid UTF-8")?;
        Ok(Zeroizing::new(text.to_owned()))
    } else {
        Ok(Zeroizing::new(enc.encode(message)))
    }
}

/// Version and algorithm information.
fn version_info() -> String {
    format!(
        "nacl-cli {}\nsecretbox:  {}\nbox:        {} + {}\nsign:       {}\nhash:       {}",
        env!("CARGO_PKG_VERSION"),
        nacl::config::SECRETBOX_ALGORITHM,
        nacl::config::KEY_EXCHANGE_ALGORITHM,
        nacl::config::SECRETBOX_ALGORITHM,
        nacl::config::SIGNING_ALGORITHM,
        nacl::config::HASH_ALGORITHM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_is_used_verbatim() {
        let args = MessageArgs {
            message: Some("Hello, world!".into()),
            message_encoded: None,
        };
        assert_eq!(&read_message(Encoding::Hex, &args).unwrap()[..], b"Hello, world!");
    }

    #[test]
    fn encoded_message_is_decoded() {
        let args = MessageArgs {
            message: None,
            message_encoded: Some("AAEC".into()),
        };
        assert_eq!(&read_message(Encoding::Base64, &args).unwrap()[..], &[0u8, 1, 2]);
    }

    fn run_args(args: &[&str]) -> Result<Zeroizing<String>> {
        let cli = NaclCli::try_parse_from(std::iter::once("nacl-cli").chain(args.iter().copied()))?;
        run(cli)
    }

    #[test]
    fn keygen_sign_from_seed_matches_library() {
        let seed = "11".repeat(32);
        let output = run_args(&["keygen", "sign", "--seed", &seed, "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let expected = sign::keypair_from_seed(&[0x11u8; 32]).unwrap();
        assert_eq!(json["kind"], "sign");
        assert_eq!(json["public_key"], nacl::encoding::encode_hex(&expected.public_key));
        assert_eq!(
            json["secret_key"],
            nacl::encoding::encode_hex(&expected.secret_key[..])
        );
        assert!(json["secret_key"].as_str().unwrap().starts_with(&seed));
    }

    #[test]
    fn keygen_plain_output_has_both_keys() {
        let seed = "22".repeat(32);
        let output = run_args(&["keygen", "sign", "--seed", &seed]).unwrap();
        let expected = sign::keypair_from_seed(&[0x22u8; 32]).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("public_key: {}", nacl::encoding::encode_hex(&expected.public_key))
        );
        assert!(lines[1].starts_with("secret_key: "));
    }

    #[test]
    fn keygen_box_rejects_seed() {
        assert!(run_args(&["keygen", "box", "--seed", "00"]).is_err());
    }

    #[test]
    fn keygen_box_from_secret_key_is_deterministic() {
        let sk = "33".repeat(32);
        let first = run_args(&["keygen", "box", "--secret-key", &sk]).unwrap();
        let second = run_args(&["keygen", "box", "--secret-key", &sk]).unwrap();
        assert_eq!(*first, *second);
    }

    #[test]
    fn seal_with_bad_lengths_is_an_error() {
        let err = run_args(&["seal", "-k", "00", "-n", "00", "-m", "hi"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<nacl::NaclError>(),
            Some(nacl::NaclError::InvalidLength(_))
        ));
    }

    #[test]
    fn seal_then_open_roundtrip() {
        let key = "42".repeat(32);
        let nonce = "24".repeat(24);
        let boxed = run_args(&["seal", "-k", &key, "-n", &nonce, "-m", "Hello, world!"]).unwrap();
        let opened =
            run_args(&["open", "-k", &key, "-n", &nonce, "-c", boxed.as_str(), "--utf8"]).unwrap();
        assert_eq!(*opened, "Hello, world!");
    }

    #[test]
    fn tampered_box_is_an_error() {
        let key = "42".repeat(32);
        let nonce = "24".repeat(24);
        let boxed = run_args(&["seal", "-k", &key, "-n", &nonce, "-m", "hi"]).unwrap();
        let mut bytes = nacl::encoding::decode_hex(&boxed).unwrap();
        bytes[0] ^= 0x01;
        let tampered = nacl::encoding::encode_hex(&bytes);

        let err = run_args(&["open", "-k", &key, "-n", &nonce, "-c", &tampered]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<nacl::NaclError>(),
            Some(nacl::NaclError::AuthenticationFailed)
        ));
    }

    #[test]
    fn verify_detached_answers_true_or_false() {
        let pair = sign::keypair_from_seed(&[0x44u8; 32]).unwrap();
        let public_key = nacl::encoding::encode_hex(&pair.public_key);
        let signature =
            nacl::encoding::encode_hex(&sign::sign_detached(b"msg", &pair.secret_key[..]).unwrap());
        let zeroed = "00".repeat(64);

        let valid = run_args(&[
            "verify-detached",
            "--public-key",
            &public_key,
            "--signature",
            &signature,
            "-m",
            "msg",
        ])
        .unwrap();
        assert_eq!(*valid, "true");

        let invalid = run_args(&[
            "verify-detached",
            "--public-key",
            &public_key,
            "--signature",
            &zeroed,
            "-m",
            "msg",
        ])
        .unwrap();
        assert_eq!(*invalid, "false");
    }

    #[test]
    fn verify_detached_with_short_signature_is_an_error() {
        let public_key = "00".repeat(32);
        assert!(run_args(&[
            "verify-detached",
            "--public-key",
            &public_key,
            "--signature",
            "00",
            "-m",
            "msg",
        ])
        .is_err());
    }

    #[test]
    fn sign_then_sign_open_in_base64() {
        let seed = "55".repeat(32);
        let json = run_args(&["keygen", "sign", "--seed", &seed, "--json", "--encoding", "base64"])
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&json).unwrap();
        let secret_key = json["secret_key"].as_str().unwrap();
        let public_key = json["public_key"].as_str().unwrap();

        let signed =
            run_args(&["sign", "--secret-key", secret_key, "-m", "ok", "--encoding", "base64"])
                .unwrap();
        let opened = run_args(&[
            "sign-open",
            "--public-key",
            public_key,
            "--signed",
            signed.as_str(),
            "--utf8",
            "--encoding",
            "base64",
        ])
        .unwrap();
        assert_eq!(*opened, "ok");
    }

    #[test]
    fn version_lists_algorithms() {
        let output = run_args(&["version"]).unwrap();
        assert!(output.starts_with("nacl-cli "));
        assert!(output.contains(nacl::config::SIGNING_ALGORITHM));
    }

    #[test]
    fn keypair_json_shape() {
        let output = KeyPairOutput {
            kind: "sign",
            algorithm: "Ed25519",
            public_key: "ab".into(),
            secret_key: "cd",
        };
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "sign");
        assert_eq!(json["public_key"], "ab");
        assert_eq!(json["secret_key"], "cd");
    }
}
