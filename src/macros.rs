/// Wires a field of `Tables` as the backing table of one entity kind.
macro_rules! entity_table {
    ($entity:ty, $field:ident) => {
        impl Table<$entity> for Tables {
            fn table(&self) -> &Mutex<Rows<$entity>> {
                &self.$field
            }
        }
    };
}

/// Shared `Window` implementation of the pool day and hour buckets, which only
/// differ by their period start field and granularity.
macro_rules! pool_window {
    ($window:ty, $period_start:ident, $granularity:expr) => {
        impl Entity for $window {
            const NAME: &'static str = stringify!($window);

            fn id(&self) -> &str {
                &self.id
            }
        }

        impl Window for $window {
            type Source<'a> = Pool;
            const GRANULARITY: Granularity = $granularity;

            fn window_id(index: i64, pool: &Pool) -> String {
                keyer::pool_time_data_id(&pool.id, index)
            }

            fn open(id: String, period_start: i64, pool: &Pool) -> Self {
                Self {
                    id,
                    $period_start: period_start,
                    pool: pool.id.clone(),
                    liquidity: pool.liquidity.clone(),
                    sqrt_price: pool.sqrt_price.clone(),
                    token0_price: pool.token0_price.clone(),
                    token1_price: pool.token1_price.clone(),
                    tick: pool.tick.clone(),
                    total_value_locked_usd: pool.total_value_locked_usd.clone(),
                    volume_token0: BigDecimal::zero(),
                    volume_token1: BigDecimal::zero(),
                    volume_usd: BigDecimal::zero(),
                    fees_usd: BigDecimal::zero(),
                    tx_count: 0,
                    ohlc: Ohlc::new(&pool.token0_price),
                }
            }

            fn observed_price(pool: &Pool) -> Option<BigDecimal> {
                Some(pool.token0_price.clone())
            }

            fn ohlc_mut(&mut self) -> Option<&mut Ohlc> {
                Some(&mut self.ohlc)
            }

            fn apply_snapshot(&mut self, pool: &Pool) {
                self.liquidity = pool.liquidity.clone();
                self.sqrt_price = pool.sqrt_price.clone();
                self.token0_price = pool.token0_price.clone();
                self.token1_price = pool.token1_price.clone();
                self.tick = pool.tick.clone();
                self.total_value_locked_usd = pool.total_value_locked_usd.clone();
            }

            fn record_event(&mut self, _pool: &Pool) {
                self.tx_count += 1;
            }
        }

        impl $window {
            /// Adds swap volume the caller derived from the event.
            pub fn add_volume(
                &mut self,
                amount0: &BigDecimal,
                amount1: &BigDecimal,
                amount_usd: &BigDecimal,
                fees_usd: &BigDecimal,
            ) {
                self.volume_token0 = self.volume_token0.clone().add(amount0);
                self.volume_token1 = self.volume_token1.clone().add(amount1);
                self.volume_usd = self.volume_usd.clone().add(amount_usd);
                self.fees_usd = self.fees_usd.clone().add(fees_usd);
            }
        }
    };
}

/// Same as `pool_window!` for the token day and hour buckets.
macro_rules! token_window {
    ($window:ty, $period_start:ident, $granularity:expr) => {
        impl Entity for $window {
            const NAME: &'static str = stringify!($window);

            fn id(&self) -> &str {
                &self.id
            }
        }

        impl Window for $window {
            type Source<'a> = TokenSnapshot<'a>;
            const GRANULARITY: Granularity = $granularity;

            fn window_id(index: i64, snapshot: &TokenSnapshot<'_>) -> String {
                keyer::token_time_data_id(&snapshot.token.id, index)
            }

            fn open(id: String, period_start: i64, snapshot: &TokenSnapshot<'_>) -> Self {
                let price = snapshot.price_usd();
                Self {
                    id,
                    $period_start: period_start,
                    token: snapshot.token.id.clone(),
                    volume: BigDecimal::zero(),
                    volume_usd: BigDecimal::zero(),
                    untracked_volume_usd: BigDecimal::zero(),
                    fees_usd: BigDecimal::zero(),
                    tx_count: 0,
                    ohlc: Ohlc::new(&price),
                    price_usd: price,
                    total_value_locked: snapshot.token.total_value_locked.clone(),
                    total_value_locked_usd: snapshot.token.total_value_locked_usd.clone(),
                }
            }

            fn observed_price(snapshot: &TokenSnapshot<'_>) -> Option<BigDecimal> {
                Some(snapshot.price_usd())
            }

            fn ohlc_mut(&mut self) -> Option<&mut Ohlc> {
                Some(&mut self.ohlc)
            }

            fn apply_snapshot(&mut self, snapshot: &TokenSnapshot<'_>) {
                self.price_usd = snapshot.price_usd();
                self.total_value_locked = snapshot.token.total_value_locked.clone();
                self.total_value_locked_usd = snapshot.token.total_value_locked_usd.clone();
            }

            fn record_event(&mut self, _snapshot: &TokenSnapshot<'_>) {
                self.tx_count += 1;
            }
        }

        impl $window {
            /// Adds traded volume the caller derived from the event.
            pub fn add_volume(
                &mut self,
                amount: &BigDecimal,
                amount_usd: &BigDecimal,
                untracked_amount_usd: &BigDecimal,
                fees_usd: &BigDecimal,
            ) {
                self.volume = self.volume.clone().add(amount);
                self.volume_usd = self.volume_usd.clone().add(amount_usd);
                self.untracked_volume_usd = self.untracked_volume_usd.clone().add(untracked_amount_usd);
                self.fees_usd = self.fees_usd.clone().add(fees_usd);
            }
        }
    };
}
