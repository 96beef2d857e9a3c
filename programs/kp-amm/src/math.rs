// Invariant Math
//
// Pure constant-product calculations. All amounts are u64 token units.
// Quotes multiply up to three u64 factors, so intermediates are widened to
// U256 and every step is checked. Division always truncates (floor).

use anchor_lang::prelude::*;
use bnum::types::U256;

use crate::errors::*;

// Newton's method integer square root, returns floor(sqrt(y))
pub fn integer_sqrt(y: u128) -> u128 {
    if y > 3 {
        let mut z = y;
        let mut x = y / 2 + 1;
        while x < z {
            z = x;
            x = (y / x + x) / 2;
        }
        z
    } else if y != 0 {
        1
    } else {
        0
    }
}

fn wide(value: u64) -> U256 {
    U256::from(value)
}

fn mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b).ok_or_else(|| error!(AmmError::Overflow))
}

fn add(a: U256, b: U256) -> Result<U256> {
    a.checked_add(b).ok_or_else(|| error!(AmmError::Overflow))
}

fn div(a: U256, b: U256) -> Result<U256> {
    a.checked_div(b).ok_or_else(|| error!(AmmError::DivisionByZero))
}

fn to_u64(value: U256) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(AmmError::Overflow))
}

// Output amount for an exact input
//
// Fee-bearing input: the fee scales the input before it enters the curve
//   out = in * num * r_out / (r_in * den + in * num)
// Otherwise the fee is taken from the curve output
//   raw = in * r_out / (r_in + in)
//   out = raw * num / den
pub fn quote_output_for_exact_input(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_numerator: u64,
    fee_denominator: u64,
    fee_bearing_input: bool,
) -> Result<u64> {
    require!(
        reserve_in > 0 && reserve_out > 0,
        AmmError::InsufficientLiquidity
    );
    require!(amount_in < reserve_in, AmmError::InsufficientLiquidity);

    let amount_in = wide(amount_in);
    let reserve_in = wide(reserve_in);
    let reserve_out = wide(reserve_out);
    let fee_numerator = wide(fee_numerator);
    let fee_denominator = wide(fee_denominator);

    let amount_out = if fee_bearing_input {
        let amount_in_with_fee = mul(amount_in, fee_numerator)?;
        let numerator = mul(amount_in_with_fee, reserve_out)?;
        let denominator = add(mul(reserve_in, fee_denominator)?, amount_in_with_fee)?;
        div(numerator, denominator)?
    } else {
        let raw_out = div(mul(amount_in, reserve_out)?, add(reserve_in, amount_in)?)?;
        div(mul(raw_out, fee_numerator)?, fee_denominator)?
    };

    to_u64(amount_out)
}

// Input amount required for an exact output
//
// Fee-bearing output:
//   in = r_in * out * num / ((r_out - out) * den)
// Otherwise the pool is grossed up by the fee and rounded in its favour
//   in = r_in * out * den / ((r_out - out) * num) + 1
pub fn quote_input_for_exact_output(
    amount_out: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_numerator: u64,
    fee_denominator: u64,
    fee_bearing_output: bool,
) -> Result<u64> {
    require!(amount_out > 0, AmmError::ZeroAmount);
    require!(
        reserve_in > 0 && reserve_out > 0,
        AmmError::InsufficientLiquidity
    );
    require!(amount_out < reserve_out, AmmError::InsufficientLiquidity);

    let remaining_out = wide(reserve_out - amount_out);
    let base = mul(wide(reserve_in), wide(amount_out))?;

    let amount_in = if fee_bearing_output {
        div(
            mul(base, wide(fee_numerator))?,
            mul(remaining_out, wide(fee_denominator))?,
        )?
    } else {
        let grossed = div(
            mul(base, wide(fee_denominator))?,
            mul(remaining_out, wide(fee_numerator))?,
        )?;
        add(grossed, U256::ONE)?
    };

    to_u64(amount_in)
}

// Liquidity shares minted for a deposit
//
// Empty pool: geometric mean sqrt(amount0 * amount1)
// Otherwise: min(amount0 * total / reserve0, amount1 * total / reserve1)
pub fn shares_for_deposit(
    amount0: u64,
    amount1: u64,
    reserve0: u64,
    reserve1: u64,
    total_liquidity: u64,
) -> Result<u64> {
    if total_liquidity == 0 {
        // Two u64 factors always fit in u128
        let product = amount0 as u128 * amount1 as u128;
        return u64::try_from(integer_sqrt(product)).map_err(|_| error!(AmmError::Overflow));
    }

    let total = wide(total_liquidity);
    let from_0 = div(mul(wide(amount0), total)?, wide(reserve0))?;
    let from_1 = div(mul(wide(amount1), total)?, wide(reserve1))?;

    to_u64(std::cmp::min(from_0, from_1))
}

// Token amounts returned for burning shares
// amount = shares * reserve / total
pub fn amounts_for_withdrawal(
    shares: u64,
    reserve0: u64,
    reserve1: u64,
    total_liquidity: u64,
) -> Result<(u64, u64)> {
    let shares = wide(shares);
    let total = wide(total_liquidity);

    let amount0 = div(mul(shares, wide(reserve0))?, total)?;
    let amount1 = div(mul(shares, wide(reserve1))?, total)?;

    Ok((to_u64(amount0)?, to_u64(amount1)?))
}
