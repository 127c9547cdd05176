//! `datacore::assets` submodule provides traits that encapsulate work with data files.
//!
//! It defines [`FromFile`] and [`ToFile`] traits that are implemented on all structs which are
//! deserializable or serializable.
//!
//! `ggasteroids` serializes `Rust`-side data by using Concise Binary Object Representation format.
//!

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, fs::File, io, path::Path};

/// [`AssetError`] enum lists all errors that could occur during work with data files.
///
#[derive(Debug)]
pub enum AssetError {
    /// File could not be opened, created or truncated.
    ///
    Io(io::Error),
    /// Data is not in expected format.
    ///
    Format(serde_cbor::Error),
}
impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(error) => write!(f, "file access failed: {}", error),
            AssetError::Format(error) => write!(f, "wrong data format: {}", error),
        }
    }
}
impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssetError::Io(error) => Some(error),
            AssetError::Format(error) => Some(error),
        }
    }
}
impl From<io::Error> for AssetError {
    fn from(error: io::Error) -> Self {
        AssetError::Io(error)
    }
}
impl From<serde_cbor::Error> for AssetError {
    fn from(error: serde_cbor::Error) -> Self {
        AssetError::Format(error)
    }
}

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize`.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, AssetError>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file: File = File::open(filename)?;
        Ok(serde_cbor::from_reader(file)?)
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), AssetError>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), AssetError> {
        let file: File = File::create(filename)?;
        serde_cbor::to_writer(file, self)?;
        Ok(())
    }
}
