use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::codec::Codec;
use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, ConfigError, find_closest_alphabet};

/// Settings that drive a [`Codec`].
///
/// A plain value: every codec owns its own copy and nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    pub alphabet: Alphabet,
    /// Symbol used to pad output to a multiple of eight characters, if any
    pub padding: Option<char>,
    /// Fold case, map O to 0 and I/L to 1, and drop `-` before decoding
    pub crockford: bool,
}

impl CodecConfig {
    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    /// Checks the invariants that span alphabet and padding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pad) = self.padding {
            if self.alphabet.contains(pad) {
                return Err(ConfigError::PaddingInAlphabet { char: pad });
            }
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            alphabet: Alphabet::rfc4648(),
            padding: Some('='),
            crockford: false,
        }
    }
}

/// Builder for [`CodecConfig`] and [`Codec`].
///
/// Unset options keep their defaults: RFC 4648 characters, `=` padding and
/// no Crockford normalization.
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    characters: Option<String>,
    alphabet: Option<Alphabet>,
    padding: Option<char>,
    crockford: bool,
}

impl Default for CodecBuilder {
    fn default() -> Self {
        CodecBuilder {
            characters: None,
            alphabet: None,
            padding: Some('='),
            crockford: false,
        }
    }
}

impl CodecBuilder {
    /// Uses the given 32 characters as the alphabet. Validated in `build`.
    pub fn characters(mut self, chars: impl Into<String>) -> Self {
        self.characters = Some(chars.into());
        self.alphabet = None;
        self
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self.characters = None;
        self
    }

    /// Sets the padding symbol, or disables padding with `None`.
    pub fn padding(mut self, padding: Option<char>) -> Self {
        self.padding = padding;
        self
    }

    pub fn no_padding(self) -> Self {
        self.padding(None)
    }

    pub fn crockford(mut self, enabled: bool) -> Self {
        self.crockford = enabled;
        self
    }

    pub fn build_config(self) -> Result<CodecConfig, ConfigError> {
        let alphabet = match (self.alphabet, self.characters) {
            (Some(alphabet), _) => alphabet,
            (None, Some(chars)) => chars.parse::<Alphabet>()?,
            (None, None) => Alphabet::default(),
        };

        let config = CodecConfig {
            alphabet,
            padding: self.padding,
            crockford: self.crockford,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<Codec, ConfigError> {
        Codec::new(self.build_config()?)
    }
}

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 32 characters of the alphabet, in value order
    pub chars: String,
    /// Optional padding character (e.g., "=" for RFC 4648)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Whether decoding applies Crockford normalization
    #[serde(default)]
    pub crockford: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the padding as a single character.
    ///
    /// An empty string disables padding, like an absent key.
    pub fn padding_char(&self) -> Result<Option<char>, ConfigError> {
        let Some(value) = &self.padding else {
            return Ok(None);
        };

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c), None) => Ok(Some(c)),
            _ => Err(ConfigError::InvalidPadding {
                value: value.clone(),
            }),
        }
    }

    /// Starts a builder preloaded with this entry, for callers that override
    /// individual options.
    pub fn to_builder(&self) -> Result<CodecBuilder, ConfigError> {
        Ok(Codec::builder()
            .characters(self.chars.clone())
            .padding(self.padding_char()?)
            .crockford(self.crockford))
    }

    pub fn to_codec(&self) -> Result<Codec, ConfigError> {
        self.to_builder()?.build()
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Alphabet used when none is named explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations bundled with the library.
    pub fn load_default() -> Result<Self, toml::de::Error> {
        Self::from_toml(include_str!("../../alphabets.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base32-codec/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching names. A file
    /// that fails to load is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base32-codec").join("alphabets.toml");
            config.merge_optional(&user_config_path, "user");
        }

        config.merge_optional(Path::new("alphabets.toml"), "local");

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, label: &str) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {:?}: {}",
                    label, path, e
                );
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace entries with the same name in `self`.
    /// A default alphabet set in `other` wins.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Looks up an alphabet, suggesting the closest name when it is missing.
    pub fn find(&self, name: &str) -> Result<&AlphabetConfig, AlphabetNotFoundError> {
        self.get_alphabet(name).ok_or_else(|| {
            let available = self.names();
            AlphabetNotFoundError::new(name, find_closest_alphabet(name, &available))
        })
    }

    /// Returns all alphabet names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name of the default alphabet, falling back to `rfc4648`.
    pub fn default_alphabet(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or("rfc4648")
    }
}
