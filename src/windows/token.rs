use crate::entities::{Bundle, Entity, Token};
use crate::error::Result;
use crate::interval::Granularity;
use crate::keyer;
use crate::price;
use crate::store::EntityStore;
use crate::windows::{upsert_window, Ohlc, Window};
use bigdecimal::{BigDecimal, Zero};
use std::ops::Add;

/// A token together with the bundle used to price it in USD.
#[derive(Clone, Copy, Debug)]
pub struct TokenSnapshot<'a> {
    pub token: &'a Token,
    pub bundle: &'a Bundle,
}

impl<'a> TokenSnapshot<'a> {
    pub fn price_usd(&self) -> BigDecimal {
        price::token_price_usd(self.token, self.bundle)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenDayData {
    pub id: String,
    pub date: i64,
    pub token: String,
    pub volume: BigDecimal,
    pub volume_usd: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    /// USD price
    pub ohlc: Ohlc,
    pub price_usd: BigDecimal,
    pub total_value_locked: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenHourData {
    pub id: String,
    pub period_start_unix: i64,
    pub token: String,
    pub volume: BigDecimal,
    pub volume_usd: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    /// USD price
    pub ohlc: Ohlc,
    pub price_usd: BigDecimal,
    pub total_value_locked: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
}

token_window!(TokenDayData, date, Granularity::Day);
token_window!(TokenHourData, period_start_unix, Granularity::Hour);

pub async fn update_token_day_data<S>(store: &S, day_id: i64, token: &Token, bundle: &Bundle) -> Result<TokenDayData>
where
    S: EntityStore<TokenDayData>,
{
    let snapshot = TokenSnapshot { token, bundle };
    upsert_window::<TokenDayData, S>(store, day_id, &snapshot).await
}

pub async fn update_token_hour_data<S>(
    store: &S,
    hour_index: i64,
    token: &Token,
    bundle: &Bundle,
) -> Result<TokenHourData>
where
    S: EntityStore<TokenHourData>,
{
    let snapshot = TokenSnapshot { token, bundle };
    upsert_window::<TokenHourData, S>(store, hour_index, &snapshot).await
}
