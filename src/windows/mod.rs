//! Day and hour buckets of the network, pools and tokens.
//!
//! Every bucket kind goes through [`upsert_window`]: fetch or open the bucket of
//! the period, widen the price bounds, copy the parent's current snapshot, count
//! the event and write the whole record back.

mod network;
mod pool;
mod token;

pub use network::{update_network_day_data, NetworkDayData};
pub use pool::{update_pool_day_data, update_pool_hour_data, PoolDayData, PoolHourData};
pub use token::{update_token_day_data, update_token_hour_data, TokenDayData, TokenHourData, TokenSnapshot};

use crate::entities::Entity;
use crate::error::Result;
use crate::interval::Granularity;
use crate::store::EntityStore;
use bigdecimal::BigDecimal;

/// Open/high/low/close of a price over one period.
#[derive(Clone, Debug, PartialEq)]
pub struct Ohlc {
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
}

impl Ohlc {
    pub fn new(price: &BigDecimal) -> Self {
        Ohlc {
            open: price.clone(),
            high: price.clone(),
            low: price.clone(),
            close: price.clone(),
        }
    }

    /// Widens the bounds to `price` and makes it the close. `open` is never touched.
    pub fn observe(&mut self, price: &BigDecimal) {
        if price.gt(&self.high) {
            self.high = price.clone();
        }
        if price.lt(&self.low) {
            self.low = price.clone();
        }
        self.close = price.clone();
    }
}

/// A bucket aggregating one parent entity over one period.
pub trait Window: Entity + Sized {
    /// Current state of the parent the bucket is derived from.
    type Source<'a>;
    const GRANULARITY: Granularity;

    fn window_id(index: i64, source: &Self::Source<'_>) -> String;

    fn open(id: String, period_start: i64, source: &Self::Source<'_>) -> Self;

    fn observed_price(_source: &Self::Source<'_>) -> Option<BigDecimal> {
        None
    }

    fn ohlc_mut(&mut self) -> Option<&mut Ohlc> {
        None
    }

    fn apply_snapshot(&mut self, source: &Self::Source<'_>);

    fn record_event(&mut self, source: &Self::Source<'_>);
}

pub async fn upsert_window<W, S>(store: &S, index: i64, source: &W::Source<'_>) -> Result<W>
where
    W: Window,
    S: EntityStore<W>,
{
    let id = W::window_id(index, source);

    let mut window = match store.get(&id).await? {
        Some(window) => window,
        None => {
            log::debug!("opening {} {}", W::NAME, id);
            W::open(id, W::GRANULARITY.period_start(index), source)
        }
    };

    if let Some(price) = W::observed_price(source) {
        if let Some(ohlc) = window.ohlc_mut() {
            ohlc.observe(&price);
        }
    }
    window.apply_snapshot(source);
    window.record_event(source);

    store.set(window.clone()).await?;
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_ohlc_bounds_move_outward() {
        let mut ohlc = Ohlc::new(&dec("10"));
        for price in ["12", "9", "11", "8.5", "11.99"] {
            ohlc.observe(&dec(price));
        }

        assert_eq!(dec("10"), ohlc.open);
        assert_eq!(dec("12"), ohlc.high);
        assert_eq!(dec("8.5"), ohlc.low);
        assert_eq!(dec("11.99"), ohlc.close);
    }

    #[test]
    fn test_ohlc_ties_keep_bounds() {
        let mut ohlc = Ohlc::new(&dec("1.5"));
        ohlc.observe(&dec("1.50"));

        assert_eq!(dec("1.5"), ohlc.high);
        assert_eq!(dec("1.5"), ohlc.low);
        assert_eq!(dec("1.5"), ohlc.close);
    }
}
