// KP AMM Program Constants

pub const ENGINE_CONFIG_SEED: &[u8] = b"engine_config";
pub const ENGINE_AUTHORITY_SEED: &[u8] = b"engine_authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const POSITION_SEED: &[u8] = b"position";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const NONCE_SEED: &[u8] = b"nonce";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// 9970 / 10000 -> 0.30% fee
pub const DEFAULT_FEE_NUMERATOR: u64 = 9970;
pub const DEFAULT_FEE_DENOMINATOR: u64 = 10000;

// r || s || v
pub const SIGNATURE_LEN: usize = 65;
pub const ETH_ADDRESS_LEN: usize = 20;
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";
