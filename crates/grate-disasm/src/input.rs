use std::fs;
use std::path::Path;

use crate::error::DisasmError;

/// On-disk representation of a command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Raw little-endian 32-bit words.
    #[default]
    Binary,
    /// Hex words separated by whitespace or commas, `0x` optional, `#`
    /// starts a comment.
    Hex,
}

/// Read a stream file in the given format.
pub fn load_words(path: &Path, format: InputFormat) -> Result<Vec<u32>, DisasmError> {
    let words = match format {
        InputFormat::Binary => {
            let bytes = fs::read(path)?;
            words_from_le_bytes(&bytes).ok_or_else(|| DisasmError::PartialWord {
                path: path.to_path_buf(),
                len: bytes.len(),
            })?
        }
        InputFormat::Hex => parse_hex_words(&fs::read_to_string(path)?)?,
    };
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split little-endian bytes into words, or `None` on a trailing partial word.
pub fn words_from_le_bytes(bytes: &[u8]) -> Option<Vec<u32>> {
    let chunks = bytes.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return None;
    }
    Some(
        chunks
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

/// Parse hex text into words. Lines are numbered from 1 in errors.
pub fn parse_hex_words(text: &str) -> Result<Vec<u32>, DisasmError> {
    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("");
        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let word = u32::from_str_radix(digits, 16).map_err(|_| DisasmError::HexParse {
                line: i + 1,
                token: token.to_string(),
            })?;
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_with_comments_and_commas() {
        let text = "# linker\n0x13000002, 0000AAAA 0xbbbb\n\n2e210001 # tram\n0X410\n";
        assert_eq!(
            parse_hex_words(text).unwrap(),
            [0x1300_0002, 0xAAAA, 0xBBBB, 0x2e21_0001, 0x0410]
        );
    }

    #[test]
    fn test_hex_rejects_bad_token() {
        let err = parse_hex_words("0x1\n0xZZ\n").unwrap_err();
        assert!(matches!(err, DisasmError::HexParse { line: 2, ref token } if token == "0xZZ"));
        assert!(parse_hex_words("123456789").is_err());
    }

    #[test]
    fn test_le_bytes() {
        assert_eq!(
            words_from_le_bytes(&[0x02, 0x00, 0x00, 0x13, 0xAA, 0xAA, 0x00, 0x00]),
            Some(vec![0x1300_0002, 0xAAAA])
        );
        assert_eq!(words_from_le_bytes(&[1, 2, 3]), None);
        assert_eq!(words_from_le_bytes(&[]), Some(vec![]));
    }
}
