//! Caesar rotation over ASCII letters.
//!
//! Decryption rotates backwards by the key, encryption forwards. Every byte that is
//! not an ASCII letter is passed through untouched, so a transformed file always has
//! the same length as its input.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

const ALPHABET: i64 = 26;

fn rotate(byte: u8, shift: i64) -> u8 {
    let base = match byte {
        b'a'..=b'z' => b'a',
        b'A'..=b'Z' => b'A',
        _ => return byte,
    };
    let offset = (i64::from(byte - base) + shift).rem_euclid(ALPHABET);
    base + offset as u8
}

pub fn encrypt_byte(byte: u8, key: i64) -> u8 {
    rotate(byte, key.rem_euclid(ALPHABET))
}

pub fn decrypt_byte(byte: u8, key: i64) -> u8 {
    rotate(byte, -key.rem_euclid(ALPHABET))
}

pub fn encrypt_char(c: char, key: i64) -> char {
    if c.is_ascii() {
        encrypt_byte(c as u8, key) as char
    } else {
        c
    }
}

pub fn decrypt_char(c: char, key: i64) -> char {
    if c.is_ascii() {
        decrypt_byte(c as u8, key) as char
    } else {
        c
    }
}

pub fn encrypt_str(text: &str, key: i64) -> String {
    text.chars().map(|c| encrypt_char(c, key)).collect()
}

pub fn decrypt_str(text: &str, key: i64) -> String {
    text.chars().map(|c| decrypt_char(c, key)).collect()
}

/// Guess the key of an encrypted text, assuming its most frequent letter stands for `e`.
///
/// Letters are counted case-insensitively and ties go to the later letter.
/// Returns `None` when the text has no letters at all.
pub fn guess_key(text: &[u8]) -> Option<i64> {
    let mut counts = [0usize; ALPHABET as usize];
    for byte in text.iter().filter(|b| b.is_ascii_alphabetic()) {
        counts[(byte.to_ascii_lowercase() - b'a') as usize] += 1;
    }

    let (letter, &count) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(i, count)| (*count, i))?;
    if count == 0 {
        return None;
    }
    Some((letter as i64 - i64::from(b'e' - b'a')).rem_euclid(ALPHABET))
}

pub fn decrypt_file(input: impl AsRef<Path>, output: impl AsRef<Path>, key: i64) -> Result<()> {
    transform_file(input.as_ref(), output.as_ref(), |b| decrypt_byte(b, key))
}

pub fn encrypt_file(input: impl AsRef<Path>, output: impl AsRef<Path>, key: i64) -> Result<()> {
    transform_file(input.as_ref(), output.as_ref(), |b| encrypt_byte(b, key))
}

// Failing to open either file is not an error: nothing is written and we return Ok.
fn transform_file(input: &Path, output: &Path, f: impl Fn(u8) -> u8) -> Result<()> {
    let input_file = match File::open(input) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("skipping, could not open {}: {}", input.display(), e);
            return Ok(());
        },
    };
    let output_file = match File::create(output) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("skipping, could not create {}: {}", output.display(), e);
            return Ok(());
        },
    };

    let mut writer = BufWriter::new(output_file);
    let mut count = 0usize;
    for byte in BufReader::new(input_file).bytes() {
        let byte = byte.with_context(|| format!("failed to read {}", input.display()))?;
        writer.write_all(&[f(byte)])?;
        count += 1;
    }
    writer.flush().with_context(|| format!("failed to write {}", output.display()))?;

    log::debug!("transformed {} bytes from {} into {}", count, input.display(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_decrypt_hello() {
        assert_eq!(decrypt_str("Khoor", 3), "Hello");
        assert_eq!(decrypt_str("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(decrypt_str("abc XYZ", 3), "xyz UVW");
        assert_eq!(encrypt_str("xyz UVW", 3), "abc XYZ");
        assert_eq!(decrypt_str("Khoor", 29), "Hello");
        assert_eq!(decrypt_str("Khoor", -23), "Hello");
        assert_eq!(decrypt_str("Hello", 0), "Hello");
    }

    #[test]
    fn test_round_trip() {
        let text = "Meet me at Elephant Lake, 10:30 pm! é ß\n\ttabs & ~symbols~";
        for key in -30..=60 {
            let encrypted = encrypt_str(text, key);
            assert_eq!(encrypted.len(), text.len());
            assert_eq!(decrypt_str(&encrypted, key), text, "key {}", key);
        }
    }

    #[test]
    fn test_extreme_keys() {
        for key in [i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1] {
            let encrypted = encrypt_str("xyz ABC", key);
            assert_eq!(decrypt_str(&encrypted, key), "xyz ABC", "key {}", key);
        }
        // i64::MAX is 7 mod 26, i64::MIN is 18 mod 26
        assert_eq!(encrypt_str("xyz", i64::MAX), encrypt_str("xyz", 7));
        assert_eq!(encrypt_str("abc", i64::MIN), "stu");
    }

    #[test]
    fn test_non_letters_unchanged() {
        let text = "0123456789 !@#$%^&*()[]{}\n";
        assert_eq!(decrypt_str(text, 7), text);
        assert_eq!(decrypt_char('ü', 5), 'ü');
    }

    #[test]
    fn test_guess_key() {
        let secret = encrypt_str("MEET ME AT ELEPHANT LAKE", 3);
        assert_eq!(secret, "PHHW PH DW HOHSKDQW ODNH");
        assert_eq!(guess_key(secret.as_bytes()), Some(3));
        assert_eq!(guess_key(b"eeee"), Some(0));
        assert_eq!(guess_key(b"aA"), Some(22));
        // tie between b and d goes to d
        assert_eq!(guess_key(b"bd"), Some(25));
        assert_eq!(guess_key(b"1234 !"), None);
        assert_eq!(guess_key(b""), None);
    }

    #[test]
    fn test_decrypt_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("secret.txt");
        let output = dir.path().join("plain.txt");
        fs::write(&input, "Wkh txlfn eurzq ira,\nmxpsv ryhu 13 odcb grjv.\n").unwrap();

        decrypt_file(&input, &output, 3).unwrap();
        let plain = fs::read_to_string(&output).unwrap();
        assert_eq!(plain, "The quick brown fox,\njumps over 13 lazy dogs.\n");
        assert_eq!(plain.len(), fs::metadata(&input).unwrap().len() as usize);
    }

    #[test]
    fn test_file_round_trip_preserves_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.bin");
        let secret = dir.path().join("secret.bin");
        let back = dir.path().join("back.bin");
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        fs::write(&plain, &bytes).unwrap();

        encrypt_file(&plain, &secret, 11).unwrap();
        decrypt_file(&secret, &back, 11).unwrap();
        assert_eq!(fs::read(&back).unwrap(), bytes);
    }

    #[test]
    fn test_missing_input_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        assert!(decrypt_file(dir.path().join("missing.txt"), &output, 3).is_ok());
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "Khoor").unwrap();
        let output = dir.path().join("no_such_dir").join("out.txt");
        assert!(decrypt_file(&input, &output, 3).is_ok());
        assert!(!output.exists());
    }
}
