//! ENS node hashing (EIP-137) and registry constants

use alloy::primitives::{address, keccak256, Address, B256};

/// ENS registry, same address on mainnet and the public testnets
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Namehash of a dotted name. Labels are lowercased; no further UTS-46
/// normalization is applied.
pub fn namehash(name: &str) -> B256 {
    let normalized = name.trim().to_lowercase();
    let mut node = B256::ZERO;
    if normalized.is_empty() {
        return node;
    }

    for label in normalized.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }

    node
}

/// `<lowercase hex>.addr.reverse`
pub fn reverse_name(address: Address) -> String {
    format!("{}.addr.reverse", hex::encode(address.as_slice()))
}

pub fn reverse_node(address: Address) -> B256 {
    namehash(&reverse_name(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn test_namehash_vectors() {
        assert_eq!(namehash(""), B256::ZERO);
        assert_eq!(
            namehash("eth"),
            b256!("93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae")
        );
        assert_eq!(
            namehash("foo.eth"),
            b256!("de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f")
        );
    }

    #[test]
    fn test_namehash_lowercases() {
        assert_eq!(namehash("FOO.eth"), namehash("foo.eth"));
        assert_eq!(namehash(" foo.eth "), namehash("foo.eth"));
    }

    #[test]
    fn test_reverse_name() {
        let addr = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert_eq!(
            reverse_name(addr),
            "d8da6bf26964af9d7eed9e03e53415d37aa96045.addr.reverse"
        );
        assert_eq!(reverse_node(addr), namehash(&reverse_name(addr)));
    }
}
