// KP Settlement Authorization
//
// Swaps that pay the privileged token into a pool must carry a secp256k1
// signature from the trusted off-chain signer. The signed payload is the
// EIP-191 hash of keccak256(abi_encode(token_in, token_out, amount, caller,
// nonce, deadline)); the signer is identified by its 20-byte Ethereum address.
// A nonce is consumed only after the signature checks out, so each signed
// message can be used exactly once.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{keccak, secp256k1_recover::secp256k1_recover};

use crate::{constants::*, errors::*, state::NonceAccount};

const WORD: usize = 32;
pub const ENCODED_MESSAGE_LEN: usize = 6 * WORD;

// What the caller asks to settle; the nonce is filled in from chain state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementTerms {
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount: u64,
    pub caller: Pubkey,
    pub deadline: i64,
}

impl SettlementTerms {
    pub fn message(&self, nonce: u64) -> SettlementMessage {
        SettlementMessage {
            token_in: self.token_in,
            token_out: self.token_out,
            amount: self.amount,
            caller: self.caller,
            nonce,
            deadline: self.deadline,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementMessage {
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount: u64,
    pub caller: Pubkey,
    pub nonce: u64,
    pub deadline: i64,
}

impl SettlementMessage {
    // Six 32-byte words: integers are big-endian, the deadline sign-extended
    pub fn encode(&self) -> [u8; ENCODED_MESSAGE_LEN] {
        let mut out = [0u8; ENCODED_MESSAGE_LEN];

        out[..WORD].copy_from_slice(self.token_in.as_ref());
        out[WORD..2 * WORD].copy_from_slice(self.token_out.as_ref());
        out[3 * WORD - 8..3 * WORD].copy_from_slice(&self.amount.to_be_bytes());
        out[3 * WORD..4 * WORD].copy_from_slice(self.caller.as_ref());
        out[5 * WORD - 8..5 * WORD].copy_from_slice(&self.nonce.to_be_bytes());

        if self.deadline < 0 {
            out[5 * WORD..6 * WORD - 8].fill(0xff);
        }
        out[6 * WORD - 8..].copy_from_slice(&self.deadline.to_be_bytes());

        out
    }

    pub fn message_hash(&self) -> [u8; 32] {
        keccak::hash(&self.encode()).to_bytes()
    }

    // The digest the trusted signer actually signs
    pub fn signed_digest(&self) -> [u8; 32] {
        eip191_hash(&self.message_hash())
    }
}

pub fn eip191_hash(message_hash: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[ETH_SIGNED_MESSAGE_PREFIX, message_hash.as_ref()]).to_bytes()
}

// Ethereum address of an uncompressed public key (without the 0x04 tag)
pub fn eth_address(public_key: &[u8; 64]) -> [u8; ETH_ADDRESS_LEN] {
    let hash = keccak::hash(public_key).to_bytes();
    let mut address = [0u8; ETH_ADDRESS_LEN];
    address.copy_from_slice(&hash[32 - ETH_ADDRESS_LEN..]);
    address
}

pub fn recover_signer(
    digest: &[u8; 32],
    signature: &[u8; SIGNATURE_LEN],
) -> Result<[u8; ETH_ADDRESS_LEN]> {
    // Ethereum uses recovery ids 27 and 28 instead of 0 and 1
    let recovery_id = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return err!(AmmError::MalformedSignature),
    };

    let public_key = secp256k1_recover(digest, recovery_id, &signature[..64])
        .map_err(|_| error!(AmmError::InvalidSignature))?;

    Ok(eth_address(&public_key.to_bytes()))
}

// Verify the signature over the caller's next nonce, then consume that nonce
pub fn authorize(
    terms: &SettlementTerms,
    nonce_account: &mut NonceAccount,
    signature: Option<&[u8; SIGNATURE_LEN]>,
    trusted_caller: &[u8; ETH_ADDRESS_LEN],
    now: i64,
) -> Result<u64> {
    require!(now <= terms.deadline, AmmError::SignatureExpired);
    let signature = signature.ok_or(AmmError::MissingSignature)?;

    let message = terms.message(nonce_account.nonce);
    let signer = recover_signer(&message.signed_digest(), signature)?;
    require!(signer == *trusted_caller, AmmError::InvalidSignature);

    nonce_account.consume()
}
