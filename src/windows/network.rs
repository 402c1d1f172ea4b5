use crate::entities::{Entity, Factory};
use crate::error::Result;
use crate::interval::Granularity;
use crate::keyer;
use crate::store::EntityStore;
use crate::windows::{upsert_window, Window};
use bigdecimal::{BigDecimal, Zero};
use std::ops::Add;

/// Network wide activity of one day. Carries no price, only volume and TVL.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkDayData {
    pub id: String,
    pub date: i64,
    pub volume_eth: BigDecimal,
    pub volume_usd: BigDecimal,
    pub volume_usd_untracked: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    pub total_value_locked_usd: BigDecimal,
}

impl NetworkDayData {
    pub fn add_volume(
        &mut self,
        volume_eth: &BigDecimal,
        volume_usd: &BigDecimal,
        volume_usd_untracked: &BigDecimal,
        fees_usd: &BigDecimal,
    ) {
        self.volume_eth = self.volume_eth.clone().add(volume_eth);
        self.volume_usd = self.volume_usd.clone().add(volume_usd);
        self.volume_usd_untracked = self.volume_usd_untracked.clone().add(volume_usd_untracked);
        self.fees_usd = self.fees_usd.clone().add(fees_usd);
    }
}

impl Entity for NetworkDayData {
    const NAME: &'static str = "NetworkDayData";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Window for NetworkDayData {
    type Source<'a> = Factory;
    const GRANULARITY: Granularity = Granularity::Day;

    fn window_id(index: i64, _factory: &Factory) -> String {
        keyer::network_day_data_id(index)
    }

    fn open(id: String, period_start: i64, factory: &Factory) -> Self {
        NetworkDayData {
            id,
            date: period_start,
            volume_eth: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            volume_usd_untracked: BigDecimal::zero(),
            fees_usd: BigDecimal::zero(),
            tx_count: factory.tx_count,
            total_value_locked_usd: factory.total_value_locked_usd.clone(),
        }
    }

    fn apply_snapshot(&mut self, factory: &Factory) {
        self.total_value_locked_usd = factory.total_value_locked_usd.clone();
    }

    // the factory already counted the event
    fn record_event(&mut self, factory: &Factory) {
        self.tx_count = factory.tx_count;
    }
}

pub async fn update_network_day_data<S>(store: &S, day_id: i64, factory: &Factory) -> Result<NetworkDayData>
where
    S: EntityStore<NetworkDayData>,
{
    upsert_window::<NetworkDayData, S>(store, day_id, factory).await
}
