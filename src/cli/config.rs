use base32_codec::{AlphabetRegistry, Codec};
use std::path::Path;

use super::{Cli, alphabet_name};

/// Loads the registry with user overrides, then merges an explicit file.
pub fn load_registry(extra: Option<&str>) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = extra {
        let expanded = shellexpand::tilde(path);
        let other = AlphabetRegistry::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        registry.merge(other);
    }

    Ok(registry)
}

/// Builds the codec from the registry entry or custom characters, applying
/// command-line overrides on top.
pub fn create_codec(
    registry: &AlphabetRegistry,
    cli: &Cli,
) -> Result<Codec, Box<dyn std::error::Error>> {
    let mut builder = match &cli.characters {
        Some(chars) => Codec::builder().characters(chars.clone()),
        None => registry.find(alphabet_name(cli, registry))?.to_builder()?,
    };

    if cli.no_padding {
        builder = builder.no_padding();
    } else if let Some(pad) = cli.padding {
        builder = builder.padding(Some(pad));
    }

    if cli.crockford {
        builder = builder.crockford(true);
    }

    Ok(builder.build()?)
}

pub fn list_alphabets(
    registry: &AlphabetRegistry,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    let default = registry.default_alphabet();
    for name in registry.names() {
        let Some(entry) = registry.get_alphabet(&name) else {
            continue;
        };
        let padding = match entry.padding.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "-",
        };
        let marker = if name == default { "*" } else { " " };
        let crockford = if entry.crockford { "crockford" } else { "" };
        println!(
            "{} {:<15} {} pad {:<2} {}",
            marker, name, entry.chars, padding, crockford
        );
    }
    Ok(())
}
