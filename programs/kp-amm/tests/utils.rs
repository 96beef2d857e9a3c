// Test utilities for the KP AMM program

#![allow(dead_code)]

use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const KP_AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(kp_amm::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const ENGINE_CONFIG_SEED: &[u8] = b"engine_config";
pub const ENGINE_AUTHORITY_SEED: &[u8] = b"engine_authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const POSITION_SEED: &[u8] = b"position";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const NONCE_SEED: &[u8] = b"nonce";

// Token decimals
pub const DECIMALS: u8 = 6;

const PROGRAM_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/kp_amm.so");

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the KP AMM program
// The program must be built first (`anchor build`)
pub fn setup_svm() -> LiteSVM {
    let program_bytes = std::fs::read(PROGRAM_PATH)
        .unwrap_or_else(|err| panic!("Failed to load {}: {} (run `anchor build`)", PROGRAM_PATH, err));

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(KP_AMM_PROGRAM_ID, &program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Hand mint authority of an existing mint to another key
// COption<Pubkey> layout: u32 tag followed by the key
pub fn set_mint_authority(svm: &mut LiteSVM, mint: &Pubkey, authority: &Pubkey) {
    let mut account = svm.get_account(mint).expect("Mint should exist");
    account.data[..4].copy_from_slice(&1u32.to_le_bytes());
    account.data[4..36].copy_from_slice(authority.as_ref());
    svm.set_account(*mint, account).unwrap();
}

pub fn canonical_pair(token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, Pubkey) {
    if token_a <= token_b {
        (*token_a, *token_b)
    } else {
        (*token_b, *token_a)
    }
}

// ======================== PDAs ========================

pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ENGINE_CONFIG_SEED], &KP_AMM_PROGRAM_ID)
}

pub fn derive_engine_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ENGINE_AUTHORITY_SEED], &KP_AMM_PROGRAM_ID)
}

pub fn derive_pool_pda(token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, u8) {
    let (token0, token1) = canonical_pair(token_a, token_b);
    Pubkey::find_program_address(
        &[POOL_SEED, token0.as_ref(), token1.as_ref()],
        &KP_AMM_PROGRAM_ID,
    )
}

pub fn derive_position_pda(pool: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POSITION_SEED, pool.as_ref(), owner.as_ref()],
        &KP_AMM_PROGRAM_ID,
    )
}

pub fn derive_whitelist_pda(pool: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[WHITELIST_SEED, pool.as_ref(), user.as_ref()],
        &KP_AMM_PROGRAM_ID,
    )
}

pub fn derive_nonce_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NONCE_SEED, user.as_ref()], &KP_AMM_PROGRAM_ID)
}

pub fn vault_address(mint: &Pubkey) -> Pubkey {
    let (engine_authority, _) = derive_engine_authority_pda();
    get_associated_token_address(&engine_authority, mint)
}

// ======================== INSTRUCTIONS ========================

// Build initialize_engine instruction
pub fn build_initialize_engine_ix(
    owner: &Pubkey,
    fee_token: &Pubkey,
    kp_token: &Pubkey,
    trusted_caller: [u8; 20],
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (engine_authority, _) = derive_engine_authority_pda();

    let mut data = anchor_discriminator("initialize_engine").to_vec();
    data.extend_from_slice(fee_token.as_ref());
    data.extend_from_slice(kp_token.as_ref());
    data.extend_from_slice(&trusted_caller);

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(engine_authority, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Optional whitelist entry: the program ID stands in for None
fn whitelist_meta(pool: &Pubkey, provider: &Pubkey, with_entry: bool) -> AccountMeta {
    if with_entry {
        let (entry, _) = derive_whitelist_pda(pool, provider);
        AccountMeta::new_readonly(entry, false)
    } else {
        AccountMeta::new_readonly(KP_AMM_PROGRAM_ID, false)
    }
}

fn liquidity_accounts(
    provider: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    with_whitelist_entry: bool,
) -> Vec<AccountMeta> {
    let (config, _) = derive_config_pda();
    let (engine_authority, _) = derive_engine_authority_pda();
    let (pool, _) = derive_pool_pda(token_a_mint, token_b_mint);
    let (position, _) = derive_position_pda(&pool, provider);

    vec![
        AccountMeta::new(*provider, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(engine_authority, false),
        AccountMeta::new_readonly(*token_a_mint, false),
        AccountMeta::new_readonly(*token_b_mint, false),
        AccountMeta::new(pool, false),
        AccountMeta::new(position, false),
        whitelist_meta(&pool, provider, with_whitelist_entry),
        AccountMeta::new(get_associated_token_address(provider, token_a_mint), false),
        AccountMeta::new(get_associated_token_address(provider, token_b_mint), false),
        AccountMeta::new(vault_address(token_a_mint), false),
        AccountMeta::new(vault_address(token_b_mint), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

// Build add_liquidity instruction
pub fn build_add_liquidity_ix(
    provider: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    amount_a: u64,
    amount_b: u64,
    with_whitelist_entry: bool,
) -> Instruction {
    let mut data = anchor_discriminator("add_liquidity").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: liquidity_accounts(provider, token_a_mint, token_b_mint, with_whitelist_entry),
        data,
    }
}

// Build remove_liquidity instruction
pub fn build_remove_liquidity_ix(
    provider: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    shares: u64,
    with_whitelist_entry: bool,
) -> Instruction {
    let mut data = anchor_discriminator("remove_liquidity").to_vec();
    data.extend_from_slice(&shares.to_le_bytes());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: liquidity_accounts(provider, token_a_mint, token_b_mint, with_whitelist_entry),
        data,
    }
}

// Build swap_exact_input / swap_exact_output instruction
pub fn build_swap_ix(
    method: &str,
    swapper: &Pubkey,
    token_in_mint: &Pubkey,
    token_out_mint: &Pubkey,
    amount: u64,
    deadline: i64,
    signature: Option<[u8; 65]>,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (engine_authority, _) = derive_engine_authority_pda();
    let (pool, _) = derive_pool_pda(token_in_mint, token_out_mint);
    let (nonce, _) = derive_nonce_pda(swapper);

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());
    // Borsh Option: 0 = None, 1 = Some(value)
    match signature {
        Some(signature) => {
            data.push(1);
            data.extend_from_slice(&signature);
        }
        None => data.push(0),
    }

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*swapper, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(engine_authority, false),
            AccountMeta::new(*token_in_mint, false),
            AccountMeta::new(*token_out_mint, false),
            AccountMeta::new(pool, false),
            AccountMeta::new(nonce, false),
            AccountMeta::new(get_associated_token_address(swapper, token_in_mint), false),
            AccountMeta::new(get_associated_token_address(swapper, token_out_mint), false),
            AccountMeta::new(vault_address(token_in_mint), false),
            AccountMeta::new(vault_address(token_out_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build update_fee instruction
pub fn build_update_fee_ix(owner: &Pubkey, fee_numerator: u64, fee_denominator: u64) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("update_fee").to_vec();
    data.extend_from_slice(&fee_numerator.to_le_bytes());
    data.extend_from_slice(&fee_denominator.to_le_bytes());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

// Build set_paused instruction
pub fn build_set_paused_ix(owner: &Pubkey, paused: bool) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("set_paused").to_vec();
    data.push(paused as u8);

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

// Build set_pool_public instruction
pub fn build_set_pool_public_ix(
    owner: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    public_pool: bool,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (pool, _) = derive_pool_pda(token_a_mint, token_b_mint);

    let mut data = anchor_discriminator("set_pool_public").to_vec();
    data.push(public_pool as u8);

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(pool, false),
        ],
        data,
    }
}

// Build update_min_reserves instruction
pub fn build_update_min_reserves_ix(
    owner: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    min_reserve0: u64,
    min_reserve1: u64,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (pool, _) = derive_pool_pda(token_a_mint, token_b_mint);

    let mut data = anchor_discriminator("update_min_reserves").to_vec();
    data.extend_from_slice(&min_reserve0.to_le_bytes());
    data.extend_from_slice(&min_reserve1.to_le_bytes());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(pool, false),
        ],
        data,
    }
}

// Build update_whitelist instruction
pub fn build_update_whitelist_ix(
    owner: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    user: &Pubkey,
    status: bool,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (pool, _) = derive_pool_pda(token_a_mint, token_b_mint);
    let (entry, _) = derive_whitelist_pda(&pool, user);

    let mut data = anchor_discriminator("update_whitelist").to_vec();
    data.extend_from_slice(user.as_ref());
    data.push(status as u8);

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(pool, false),
            AccountMeta::new(entry, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build update_whitelist_batch instruction, entries go in remaining accounts
pub fn build_update_whitelist_batch_ix(
    owner: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    users: &[Pubkey],
    statuses: &[bool],
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (pool, _) = derive_pool_pda(token_a_mint, token_b_mint);

    let mut data = anchor_discriminator("update_whitelist_batch").to_vec();
    // Borsh Vec: u32 length prefix + elements
    data.extend_from_slice(&(users.len() as u32).to_le_bytes());
    for user in users {
        data.extend_from_slice(user.as_ref());
    }
    data.extend_from_slice(&(statuses.len() as u32).to_le_bytes());
    for status in statuses {
        data.push(*status as u8);
    }

    let mut accounts = vec![
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(config, false),
        AccountMeta::new_readonly(pool, false),
        AccountMeta::new_readonly(system_program, false),
    ];
    for user in users {
        let (entry, _) = derive_whitelist_pda(&pool, user);
        accounts.push(AccountMeta::new(entry, false));
    }

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts,
        data,
    }
}

// Build get_amount_out / get_amount_in instruction
pub fn build_quote_ix(
    method: &str,
    token_in_mint: &Pubkey,
    token_out_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (pool, _) = derive_pool_pda(token_in_mint, token_out_mint);

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(pool, false),
            AccountMeta::new_readonly(*token_in_mint, false),
            AccountMeta::new_readonly(*token_out_mint, false),
        ],
        data,
    }
}

// Build get_pool_id instruction
pub fn build_get_pool_id_ix(token_a_mint: &Pubkey, token_b_mint: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("get_pool_id").to_vec();
    data.extend_from_slice(token_a_mint.as_ref());
    data.extend_from_slice(token_b_mint.as_ref());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![],
        data,
    }
}

// Build get_nonce instruction
pub fn build_get_nonce_ix(account: &Pubkey) -> Instruction {
    let (nonce, _) = derive_nonce_pda(account);

    let mut data = anchor_discriminator("get_nonce").to_vec();
    data.extend_from_slice(account.as_ref());

    Instruction {
        program_id: KP_AMM_PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(nonce, false)],
        data,
    }
}
