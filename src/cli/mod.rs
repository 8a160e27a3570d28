mod config;

use base32_codec::{AlphabetRegistry, BigUint};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use config::{create_codec, list_alphabets, load_registry};

#[derive(Parser, Debug)]
#[command(name = "base32-codec")]
#[command(version)]
#[command(about = "Encode and decode base32 with RFC 4648, Crockford, z-base-32, hex or custom alphabets", long_about = None)]
pub struct Cli {
    /// Named alphabet from the registry (see --list)
    #[arg(short = 'a', long, value_name = "NAME")]
    pub alphabet: Option<String>,

    /// Custom alphabet of 32 unique characters
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub characters: Option<String>,

    /// Decode instead of encode
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Pad output with this character
    #[arg(long, value_name = "CHAR", conflicts_with = "no_padding")]
    pub padding: Option<char>,

    /// Do not pad output
    #[arg(long)]
    pub no_padding: bool,

    /// Accept lowercase, O/I/L aliases and '-' separators when decoding
    #[arg(long)]
    pub crockford: bool,

    /// Treat input (encode) or output (decode) as a decimal integer
    #[arg(short = 'i', long)]
    pub integer: bool,

    /// Treat input (encode) or output (decode) as hex text
    #[arg(short = 'x', long, conflicts_with = "integer")]
    pub hex: bool,

    /// List available alphabets
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print the alphabet list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Extra alphabet registry file to merge
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// File to process (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let registry = load_registry(cli.config.as_deref())?;

    if cli.list {
        return list_alphabets(&registry, cli.json);
    }

    let codec = create_codec(&registry, &cli)?;
    let input = read_input(&cli)?;

    let mut stdout = io::stdout();
    if cli.decode {
        let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let text = text.trim();

        if cli.integer {
            let value = codec.decode_integer(text)?;
            writeln!(stdout, "{}", value)?;
        } else {
            let decoded = codec.decode(text)?;
            if cli.hex {
                writeln!(stdout, "{}", hex::encode(decoded))?;
            } else {
                stdout.write_all(&decoded)?;
            }
        }
    } else if cli.integer {
        let text = String::from_utf8(input).map_err(|_| "Integer input must be valid UTF-8")?;
        let value: BigUint = text
            .trim()
            .parse()
            .map_err(|e| format!("Invalid integer '{}': {}", text.trim(), e))?;
        writeln!(stdout, "{}", codec.encode_integer(value))?;
    } else {
        let data = if cli.hex {
            let text = String::from_utf8(input).map_err(|_| "Hex input must be valid UTF-8")?;
            hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?
        } else {
            input
        };
        writeln!(stdout, "{}", codec.encode(&data))?;
    }

    stdout.flush()?;
    Ok(())
}

fn read_input(cli: &Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = &cli.file {
        Ok(fs::read(file_path).map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Resolves the alphabet name to use: explicit flag, then registry default.
fn alphabet_name<'a>(cli: &'a Cli, registry: &'a AlphabetRegistry) -> &'a str {
    cli.alphabet
        .as_deref()
        .unwrap_or_else(|| registry.default_alphabet())
}
