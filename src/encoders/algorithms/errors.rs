use std::fmt;

/// Errors that can occur while decoding base32 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains characters that are neither alphabet symbols nor padding
    InvalidCharacters {
        /// Distinct offending characters, sorted
        chars: String,
        /// Character index of the first offender in the normalized input
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// Integer decoding was given an empty string
    EmptyInput,
    /// The decoded integer does not fit the requested width
    IntegerOverflow { bits: u64 },
}

impl DecodeError {
    /// Create an InvalidCharacters error with context
    pub fn invalid_characters(
        chars: impl Into<String>,
        position: usize,
        input: &str,
        valid_chars: &str,
    ) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacters {
            chars: chars.into(),
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacters {
                chars,
                position,
                input,
                valid_chars,
            } => {
                write_error(
                    f,
                    use_color,
                    &format!("data contains invalid characters \"{}\"", chars),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Caret only when the offender is inside the (possibly truncated) input
                if *position < input.chars().count() {
                    writeln!(f, "  {}", input)?;
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                    writeln!(f)?;
                }

                write_hint(f, use_color, &format!("valid characters: {}", valid_chars))
            }
            DecodeError::EmptyInput => {
                write_error(f, use_color, "cannot decode empty string as integer")
            }
            DecodeError::IntegerOverflow { bits } => {
                write_error(
                    f,
                    use_color,
                    &format!("decoded integer needs {} bits", bits),
                )?;
                write!(f, "\n\n")?;
                write_hint(f, use_color, "use decode_integer for arbitrary precision")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while building an alphabet or codec configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet does not have exactly 32 symbols
    InvalidLength { actual: usize },
    /// The alphabet repeats a symbol
    DuplicateCharacter { char: char },
    /// The padding symbol is also an alphabet symbol
    PaddingInAlphabet { char: char },
    /// A textual padding option is not a single character
    InvalidPadding { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            ConfigError::InvalidLength { actual } => {
                write_error(
                    f,
                    use_color,
                    &format!("character set must have 32 unique characters, got {}", actual),
                )
            }
            ConfigError::DuplicateCharacter { char: c } => {
                write_error(
                    f,
                    use_color,
                    &format!("character set must have 32 unique characters, '{}' repeats", c),
                )
            }
            ConfigError::PaddingInAlphabet { char: c } => {
                write_error(
                    f,
                    use_color,
                    &format!("padding character '{}' is part of the character set", c),
                )?;
                write!(f, "\n\n")?;
                write_hint(f, use_color, "pick a padding character outside the alphabet")
            }
            ConfigError::InvalidPadding { value } => {
                write_error(
                    f,
                    use_color,
                    &format!("padding must be a single character, got \"{}\"", value),
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_error(f, use_color, &format!("alphabet '{}' not found", self.name))?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base32-codec --list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base32-codec --list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

fn write_error(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|(d1, n1), (d2, n2)| d1.cmp(d2).then_with(|| n1.cmp(n2)))
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("zbase32", "zbase32"), 0);
        assert_eq!(levenshtein_distance("rfc4648", "rfc4686"), 2);
        assert_eq!(levenshtein_distance("crockfrd", "crockford"), 1);
        assert_eq!(levenshtein_distance("", "gmp"), 3);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "rfc4648".to_string(),
            "crockford".to_string(),
            "zbase32".to_string(),
            "gmp".to_string(),
        ];

        assert_eq!(
            find_closest_alphabet("crockfrd", &names),
            Some("crockford".to_string())
        );
        assert_eq!(
            find_closest_alphabet("gnp", &names),
            Some("gmp".to_string())
        );
        assert_eq!(find_closest_alphabet("base64url", &names), None);
        assert_eq!(find_closest_alphabet("gmp", &[]), None);
    }

    #[test]
    fn test_invalid_characters_display() {
        let err = DecodeError::invalid_characters("#~", 7, "INVALID~DATA#", "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
        let display = format!("{}", err);

        assert!(display.contains("invalid characters \"#~\""));
        assert!(display.contains("INVALID~DATA#"));
        assert!(display.contains("^"));
        assert!(display.contains("valid characters: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"));
    }

    #[test]
    fn test_long_input_is_truncated() {
        let input = "A".repeat(100);
        let err = DecodeError::invalid_characters("~", 90, &input, "AB");

        match err {
            DecodeError::InvalidCharacters { input, .. } => {
                assert_eq!(input.len(), 63);
                assert!(input.ends_with("..."));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_config_error_display() {
        let display = format!("{}", ConfigError::InvalidLength { actual: 31 });
        assert!(display.contains("32 unique characters"));
        assert!(display.contains("31"));

        let display = format!("{}", ConfigError::DuplicateCharacter { char: '0' });
        assert!(display.contains("'0' repeats"));
    }

    #[test]
    fn test_alphabet_not_found_error() {
        let err = AlphabetNotFoundError::new("crockfrd", Some("crockford".to_string()));
        let display = format!("{}", err);

        assert!(display.contains("alphabet 'crockfrd' not found"));
        assert!(display.contains("did you mean 'crockford'?"));
        assert!(display.contains("base32-codec --list"));
    }
}
