mod error;

pub use crate::error::{ConfigError, DecodeError, Error};

use base64::{engine::general_purpose, Engine};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Raw,
    Base64,
}

impl Mode {
    /// Collapses the two CLI mode flags into a mode, rejecting the
    /// none-selected and both-selected combinations.
    pub fn from_flags(raw: bool, base64: bool) -> Result<Self, ConfigError> {
        match (raw, base64) {
            (true, false) => Ok(Mode::Raw),
            (false, true) => Ok(Mode::Base64),
            (false, false) => Err(ConfigError::NoModeSelected),
            (true, true) => Err(ConfigError::ConflictingModes),
        }
    }
}

pub struct Converter {
    mode: Mode,
    debug: bool,
}

impl Converter {
    pub fn new(mode: Mode) -> Self {
        Self { mode, debug: false }
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Reads one file of hex text and writes its converted form to `out`.
    pub fn convert_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<(), Error> {
        let infile = fs::read(path).map_err(|source| Error::Read {
            path: path.into(),
            source,
        })?;
        if self.debug {
            eprintln!("hex2: read {}: {} bytes", path.display(), infile.len());
        }

        // Strip the single line feed some editors append. Anything else,
        // embedded newlines and carriage returns included, is not hex and
        // fails the decode.
        let text = infile.strip_suffix(b"\n").unwrap_or(&infile);

        let data = decode_hex(text).map_err(|source| Error::Decode {
            path: path.into(),
            source,
        })?;
        if self.debug {
            eprintln!("hex2: decoded {}: {} bytes", path.display(), data.len());
        }

        match self.mode {
            Mode::Raw => {
                let written = out.write(&data).map_err(Error::Write)?;
                if written < data.len() {
                    // Short write with no error return. Warn, don't fail.
                    eprintln!(
                        "hex2: short write: {} of {} bytes reached stdout",
                        written,
                        data.len()
                    );
                }
            }
            Mode::Base64 => {
                let encoded = general_purpose::STANDARD.encode(&data);
                out.write_all(encoded.as_bytes()).map_err(Error::Write)?;
            }
        }

        Ok(())
    }
}

/// Decodes pairs of hex digits, either case, into bytes.
pub fn decode_hex(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut parsed = Vec::with_capacity(text.len() / 2);
    let mut digits = text.iter().copied();

    while let Some(high) = digits.next() {
        let high = hex_digit(high)?;
        match digits.next() {
            Some(low) => parsed.push(high << 4 | hex_digit(low)?),
            None => return Err(DecodeError::IncompleteOctet),
        }
    }

    Ok(parsed)
}

fn hex_digit(c: u8) -> Result<u8, DecodeError> {
    match (c as char).to_digit(16) {
        Some(value) => Ok(value as u8),
        None => Err(DecodeError::InvalidCharacter(c as char)),
    }
}
