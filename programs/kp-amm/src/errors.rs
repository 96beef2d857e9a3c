
use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Validation errors

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[msg("Transaction deadline has expired")]
    TransactionExpired,

    #[msg("Pool does not exist for this token pair")]
    PoolNotFound,

    #[msg("Token is not part of this pool")]
    TokenNotInPool,

    #[msg("Pool does not have enough liquidity for this operation")]
    InsufficientLiquidity,

    #[msg("Deposit is below the pool minimum reserve")]
    BelowMinimumReserve,

    #[msg("Deposit would mint zero liquidity shares")]
    ZeroSharesMinted,

    #[msg("Withdrawal would return zero of one token")]
    ZeroWithdrawAmount,

    #[msg("Not enough liquidity shares")]
    InsufficientShares,

    #[msg("Swap would return zero output")]
    ZeroOutputAmount,

    #[msg("Fee numerator cannot exceed denominator, denominator cannot be zero")]
    InvalidFee,

    #[msg("Batch arguments have mismatched lengths")]
    LengthMismatch,

    #[msg("Account does not match its expected address")]
    InvalidAccount,

    #[msg("Engine is paused - liquidity and swap operations are disabled")]
    EnginePaused,

    #[msg("Reentrant call rejected")]
    ReentrantCall,

    // Authorization errors

    #[msg("Only the engine owner can perform this action")]
    UnauthorizedAccess,

    #[msg("Account is not whitelisted for this pool")]
    NotWhitelisted,

    #[msg("Settlement signature is required for this swap")]
    MissingSignature,

    #[msg("Settlement signature is malformed")]
    MalformedSignature,

    #[msg("Settlement signature was not produced by the trusted caller")]
    InvalidSignature,

    #[msg("Signed settlement message has expired")]
    SignatureExpired,

    // Arithmetic errors

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,
}
