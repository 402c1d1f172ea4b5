use crate::entities::{Entity, Pool};
use crate::error::Result;
use crate::interval::Granularity;
use crate::keyer;
use crate::store::EntityStore;
use crate::windows::{upsert_window, Ohlc, Window};
use bigdecimal::{BigDecimal, Zero};
use num_bigint::BigInt;
use std::ops::Add;

#[derive(Clone, Debug, PartialEq)]
pub struct PoolDayData {
    pub id: String,
    pub date: i64,
    pub pool: String,
    pub liquidity: BigInt,
    pub sqrt_price: BigInt,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,
    pub tick: Option<BigInt>,
    pub total_value_locked_usd: BigDecimal,
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    pub volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    /// token0 price
    pub ohlc: Ohlc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoolHourData {
    pub id: String,
    pub period_start_unix: i64,
    pub pool: String,
    pub liquidity: BigInt,
    pub sqrt_price: BigInt,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,
    pub tick: Option<BigInt>,
    pub total_value_locked_usd: BigDecimal,
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    pub volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    /// token0 price
    pub ohlc: Ohlc,
}

pool_window!(PoolDayData, date, Granularity::Day);
pool_window!(PoolHourData, period_start_unix, Granularity::Hour);

pub async fn update_pool_day_data<S>(store: &S, day_id: i64, pool: &Pool) -> Result<PoolDayData>
where
    S: EntityStore<PoolDayData>,
{
    upsert_window::<PoolDayData, S>(store, day_id, pool).await
}

pub async fn update_pool_hour_data<S>(store: &S, hour_index: i64, pool: &Pool) -> Result<PoolHourData>
where
    S: EntityStore<PoolHourData>,
{
    upsert_window::<PoolHourData, S>(store, hour_index, pool).await
}
