//! The exportable identity bundle.

use serde::{Deserialize, Serialize};

use crate::DerivationPath;

/// Everything needed to reconstruct a node identity: the mnemonic, the path
/// it was derived along, and the encoded key pair.
///
/// Serialized with stable camelCase field names:
/// `mnemonic`, `bip44Path`, `publicKey` (base58), `privateKey` (base64).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBox {
    pub mnemonic: String,
    pub bip44_path: DerivationPath,
    pub public_key: String,
    pub private_key: String,
}
