//! Fundamental types for NetSpawner node identities.
//!
//! This crate defines the plain data shared across the workspace: raw key
//! material, the algorithm-tagged key pair, BIP44-style derivation paths and
//! the exportable key box.

pub mod error;
pub mod key_box;
pub mod keys;
pub mod path;

pub use error::{PathComponentError, PathParseError};
pub use key_box::KeyBox;
pub use keys::{KeyAlgorithm, KeyPair, PrivateKey, PublicKey, Signature};
pub use path::{DerivationPath, DEFAULT_DERIVATION_PATH};
