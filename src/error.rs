use std::error::Error as ErrorTrait;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    NoModeSelected,
    ConflictingModes,
}

impl ErrorTrait for ConfigError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        None
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoModeSelected => {
                write!(f, "at least one of the options -6 or -r must be set")
            }
            ConfigError::ConflictingModes => {
                write!(f, "only one of the options -6 or -r can be set")
            }
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DecodeError {
    IncompleteOctet,
    InvalidCharacter(char),
}

impl ErrorTrait for DecodeError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        None
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::IncompleteOctet => write!(f, "odd number of hex digits"),
            DecodeError::InvalidCharacter(c) => write!(f, "'{}' is not valid hex", c),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Read { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: DecodeError },
    Write(io::Error),
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::Decode { source, .. } => Some(source),
            Error::Write(source) => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { path, source } => write!(f, "read {}: {}", path.display(), source),
            Error::Decode { path, source } => write!(f, "decode {}: {}", path.display(), source),
            Error::Write(source) => write!(f, "write to stdout: {}", source),
        }
    }
}
