//! Offline-signed approval (permit) verification.
//!
//! The owner signs a keccak256 digest over a fixed byte layout. The digest is
//! domain-separated per chain and per wrapper instance, and includes the
//! owner's current nonce, so a permit can be used exactly once and cannot be
//! replayed against another wrapper or another chain.
//!
//! # Digest preimage layout (128 bytes)
//! - Bytes 0-31:    domain separator (see [`domain_separator`])
//! - Bytes 32-63:   keccak256(owner address string)
//! - Bytes 64-95:   keccak256(spender address string)
//! - Bytes 96-111:  amount (u128, big-endian)
//! - Bytes 112-119: nonce (u64, big-endian)
//! - Bytes 120-127: deadline (u64, big-endian, unix seconds)

use cosmwasm_std::{Addr, Binary, Deps, Env, Uint128};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

const DOMAIN_TAG: &[u8] = b"mold-wrapper/permit";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Domain separator binding permits to one wrapper instance on one chain.
pub fn domain_separator(chain_id: &str, contract: &str) -> [u8; 32] {
    let mut buf = Vec::with_capacity(DOMAIN_TAG.len() + chain_id.len() + contract.len());
    buf.extend_from_slice(DOMAIN_TAG);
    buf.extend_from_slice(chain_id.as_bytes());
    buf.extend_from_slice(contract.as_bytes());
    keccak256(&buf)
}

/// The digest the owner signs. Exposed so offline signers and tests can
/// reproduce it exactly.
pub fn permit_digest(
    chain_id: &str,
    contract: &str,
    owner: &str,
    spender: &str,
    amount: Uint128,
    nonce: u64,
    deadline: u64,
) -> [u8; 32] {
    let mut buf = [0u8; 128];
    buf[0..32].copy_from_slice(&domain_separator(chain_id, contract));
    buf[32..64].copy_from_slice(&keccak256(owner.as_bytes()));
    buf[64..96].copy_from_slice(&keccak256(spender.as_bytes()));
    buf[96..112].copy_from_slice(&amount.u128().to_be_bytes());
    buf[112..120].copy_from_slice(&nonce.to_be_bytes());
    buf[120..128].copy_from_slice(&deadline.to_be_bytes());
    keccak256(&buf)
}

/// Cosmos secp256k1 account derivation: ripemd160(sha256(pubkey)).
pub fn pubkey_address(public_key: &[u8]) -> Vec<u8> {
    Ripemd160::digest(Sha256::digest(public_key)).to_vec()
}

/// Checks `signature` over the permit digest for the owner's current nonce,
/// and that `public_key` actually belongs to `owner`.
pub fn verify(
    deps: Deps,
    env: &Env,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
    nonce: u64,
    deadline: u64,
    signature: &Binary,
    public_key: &Binary,
) -> Result<(), ContractError> {
    let digest = permit_digest(
        env.block.chain_id.as_str(),
        env.contract.address.as_str(),
        owner.as_str(),
        spender.as_str(),
        amount,
        nonce,
        deadline,
    );

    let valid = deps
        .api
        .secp256k1_verify(&digest, signature.as_slice(), public_key.as_slice())
        .map_err(|_| ContractError::InvalidSignature)?;
    if !valid {
        return Err(ContractError::InvalidSignature);
    }

    // The key that produced the signature must be the owner's key.
    let expected = deps.api.addr_canonicalize(owner.as_str())?;
    if pubkey_address(public_key.as_slice()) != expected.as_slice() {
        return Err(ContractError::InvalidSignature);
    }

    Ok(())
}
