use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Scales a raw token amount down by `10^decimals`.
///
/// The raw digits are kept and only the scale moves, so the result is exact
/// for any amount a `uint256` balance can hold.
pub fn convert_token_to_decimal(amount: &BigInt, decimals: u8) -> BigDecimal {
    BigDecimal::new(amount.clone(), decimals as i64)
}
