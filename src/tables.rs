use crate::entities::{Bundle, Entity, Factory, Pool, Token};
use crate::error::{Error, Result};
use crate::store::EntityStore;
use crate::windows::{NetworkDayData, PoolDayData, PoolHourData, TokenDayData, TokenHourData};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory entity store, one table per entity kind.
#[derive(Default)]
pub struct Tables {
    tokens: Mutex<Rows<Token>>,
    pools: Mutex<Rows<Pool>>,
    factories: Mutex<Rows<Factory>>,
    bundles: Mutex<Rows<Bundle>>,
    network_day_data: Mutex<Rows<NetworkDayData>>,
    pool_day_data: Mutex<Rows<PoolDayData>>,
    pool_hour_data: Mutex<Rows<PoolHourData>>,
    token_day_data: Mutex<Rows<TokenDayData>>,
    token_hour_data: Mutex<Rows<TokenHourData>>,
}

pub struct Rows<E> {
    // Map of primary keys within this table, to the latest record
    pks: HashMap<String, E>,
    // every set, including overwrites
    writes: usize,
}

impl<E> Default for Rows<E> {
    fn default() -> Self {
        Rows {
            pks: HashMap::new(),
            writes: 0,
        }
    }
}

pub trait Table<E> {
    fn table(&self) -> &Mutex<Rows<E>>;
}

entity_table!(Token, tokens);
entity_table!(Pool, pools);
entity_table!(Factory, factories);
entity_table!(Bundle, bundles);
entity_table!(NetworkDayData, network_day_data);
entity_table!(PoolDayData, pool_day_data);
entity_table!(PoolHourData, pool_hour_data);
entity_table!(TokenDayData, token_day_data);
entity_table!(TokenHourData, token_hour_data);

impl Tables {
    pub fn new() -> Self {
        Tables::default()
    }

    fn rows<E: Entity>(&self) -> Result<MutexGuard<'_, Rows<E>>>
    where
        Tables: Table<E>,
    {
        Table::<E>::table(self).lock().map_err(|e| Error::Store {
            table: E::NAME,
            message: e.to_string(),
        })
    }

    /// Latest record stored under `id`, if any.
    pub fn find<E: Entity>(&self, id: &str) -> Option<E>
    where
        Tables: Table<E>,
    {
        self.rows::<E>().ok()?.pks.get(id).cloned()
    }

    /// Number of `set` calls on the table of `E`.
    pub fn writes<E: Entity>(&self) -> usize
    where
        Tables: Table<E>,
    {
        self.rows::<E>().map(|rows| rows.writes).unwrap_or_default()
    }

    pub fn len<E: Entity>(&self) -> usize
    where
        Tables: Table<E>,
    {
        self.rows::<E>().map(|rows| rows.pks.len()).unwrap_or_default()
    }
}

impl<E: Entity> EntityStore<E> for Tables
where
    Tables: Table<E>,
{
    async fn get(&self, id: &str) -> Result<Option<E>> {
        Ok(self.rows::<E>()?.pks.get(id).cloned())
    }

    async fn set(&self, entity: E) -> Result<()> {
        let mut rows = self.rows::<E>()?;
        rows.writes += 1;
        rows.pks.insert(entity.id().to_string(), entity);
        Ok(())
    }
}
