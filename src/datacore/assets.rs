//! `datacore::assets` submodule provides traits that encapsulate persistence of `ggscene` data.
//!
//! [`FromFile`] and [`ToFile`] traits are implemented on every type that is deserializable or serializable.
//!
//! `ggscene` serializes `Rust`-side data (scene settings, colliders, transforms) by using
//! Concise Binary Object Representation format.
//!

use serde::{Deserialize, Serialize};
use std::{fs::File, io, path::Path};
use thiserror::Error;

/// [`AssetError`] enum lists errors that can occur while saving or loading data.
///
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be opened, created or truncated.
    ///
    #[error("file access failed: {0}")]
    Io(#[from] io::Error),
    /// Data is not in the CBOR format or does not describe requested type.
    ///
    #[error("wrong data format: {0}")]
    Format(#[from] serde_cbor::Error),
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
    /// Deserializes object from in-memory CBOR data.
    ///
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>
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
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        Ok(serde_cbor::from_slice(bytes)?)
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
    /// Serializes object to in-memory CBOR data.
    ///
    fn to_bytes(&self) -> Result<Vec<u8>, AssetError>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), AssetError> {
        let file: File = File::create(filename)?;
        Ok(serde_cbor::to_writer(file, self)?)
    }
    fn to_bytes(&self) -> Result<Vec<u8>, AssetError> {
        Ok(serde_cbor::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetError, FromFile, ToFile};
    use crate::mathcore::{collisions::Collider, transforms::Transform, vectors::Vertex};

    #[test]
    fn bytes() {
        let collider: Collider = Collider::polygon(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(0.0, 3.0),
        ]);
        let bytes: Vec<u8> = collider.to_bytes().expect("Collider is serializable");
        let restored: Collider = Collider::from_bytes(&bytes).expect("Data was just written");
        assert_eq!(restored, collider);
        assert_eq!((restored.width(), restored.height()), (4.0, 3.0));
    }

    #[test]
    fn files() {
        let directory = tempfile::tempdir().expect("Temporary directory should be available");
        let path = directory.path().join("transform.cbor");

        let transform: Transform = Transform::default();
        transform.to_file(&path).expect("File should be writable");
        assert_eq!(
            Transform::from_file(&path).expect("File was just written"),
            transform
        );

        assert!(matches!(
            Transform::from_file(directory.path().join("missing.cbor")),
            Err(AssetError::Io(_))
        ));
        assert!(matches!(
            Transform::from_bytes(&[0xff, 0x00]),
            Err(AssetError::Format(_))
        ));
    }
}
