//! Pool and token records for pools that predate the indexed block range.

use crate::config::BackfillConfig;
use crate::entities::{Pool, Token};
use crate::error::Result;
use crate::math;
use crate::rpc::{self, ChainClients, ChainReader, Network};
use crate::store::EntityStore;
use crate::token;
use crate::utils::StaticTokenDefinitions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub pools_written: usize,
    /// pools with a token whose decimals could not be resolved
    pub pools_skipped: usize,
}

/// Stored token, or a freshly resolved one that is not persisted yet.
pub async fn load_or_resolve_token<S, C>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    store: &S,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<Option<Token>>
where
    S: EntityStore<Token>,
    C: ChainReader,
{
    if let Some(token) = store.get(token_address).await? {
        return Ok(Some(token));
    }

    let metadata = token::resolve_token_metadata(token_address, token_overrides, clients, network).await?;
    let token = metadata.into_token(token_address);
    if token.is_none() {
        log::info!("decimals of token {} could not be determined", token_address);
    }
    Ok(token)
}

/// Creates the token record on first reference. Existing records are left as
/// they are.
pub async fn populate_token<S, C>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    store: &S,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<Option<Token>>
where
    S: EntityStore<Token>,
    C: ChainReader,
{
    if let Some(token) = store.get(token_address).await? {
        return Ok(Some(token));
    }

    let metadata = token::resolve_token_metadata(token_address, token_overrides, clients, network).await?;
    let token = match metadata.into_token(token_address) {
        Some(token) => token,
        None => {
            log::info!("decimals of token {} could not be determined", token_address);
            return Ok(None);
        }
    };
    log::debug!("creating token {} ({})", token.id, token.symbol);
    store.set(token.clone()).await?;
    Ok(Some(token))
}

/// Writes every configured pool with its two tokens, in order.
///
/// A pool is written together with both of its tokens or not at all: when
/// either token cannot be resolved nothing is persisted for that pool and the
/// next one is processed.
pub async fn populate_empty_pools<S, C>(
    config: &BackfillConfig,
    store: &S,
    clients: &ChainClients<C>,
) -> Result<BackfillReport>
where
    S: EntityStore<Token> + EntityStore<Pool>,
    C: ChainReader,
{
    let client = clients.get(config.network)?;
    let overrides = &config.token_overrides;
    let mut report = BackfillReport::default();

    for mapping in &config.pools {
        let (liquidity, fee_tier, token0, token1) = futures::try_join!(
            rpc::pool_liquidity_call(client, &mapping.pool),
            rpc::pool_fee_call(client, &mapping.pool),
            load_or_resolve_token(&mapping.token0, overrides, store, clients, config.network),
            load_or_resolve_token(&mapping.token1, overrides, store, clients, config.network),
        )?;

        let (mut token0, mut token1) = match (token0, token1) {
            (Some(token0), Some(token1)) => (token0, token1),
            _ => {
                log::info!("skipping pool {}, one of its tokens could not be resolved", mapping.pool);
                report.pools_skipped += 1;
                continue;
            }
        };

        let mut pool = Pool::new(
            &mapping.pool,
            &mapping.token0,
            &mapping.token1,
            fee_tier.unwrap_or_else(|| {
                log::warn!("pool {} returned no fee", mapping.pool);
                0
            }),
            config.block_number,
            config.block_timestamp,
        );
        pool.liquidity = liquidity.unwrap_or_else(|| {
            log::warn!("pool {} returned no liquidity", mapping.pool);
            Default::default()
        });

        // the pool goes to the list of the token paired with a whitelisted one
        if config.is_whitelisted(&pool.token0) {
            token1.whitelist_pools.push(pool.id.clone());
        }
        if config.is_whitelisted(&token1.id) {
            token0.whitelist_pools.push(pool.id.clone());
        }

        let (balance0, balance1) = futures::try_join!(
            rpc::token_balance_of_call(client, &pool.token0, &pool.id),
            rpc::token_balance_of_call(client, &pool.token1, &pool.id),
        )?;

        let tvl_token0 = math::convert_token_to_decimal(&balance0.unwrap_or_default(), token0.decimals);
        pool.total_value_locked_token0 = tvl_token0.clone();
        token0.total_value_locked = tvl_token0;

        let tvl_token1 = math::convert_token_to_decimal(&balance1.unwrap_or_default(), token1.decimals);
        pool.total_value_locked_token1 = tvl_token1.clone();
        token1.total_value_locked = tvl_token1;

        log::info!(
            "backfilled pool {} with {} {} and {} {}",
            pool.id,
            pool.total_value_locked_token0,
            token0.symbol,
            pool.total_value_locked_token1,
            token1.symbol
        );

        EntityStore::<Token>::set(store, token0).await?;
        EntityStore::<Token>::set(store, token1).await?;
        EntityStore::<Pool>::set(store, pool).await?;
        report.pools_written += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolMapping;
    use crate::error::Error;
    use crate::tables::Tables;
    use crate::testing::{big, MockChain, POOL_A, POOL_B, TOKEN_A, TOKEN_B, TOKEN_C};
    use crate::utils::StaticTokenDefinition;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn config(pools: Vec<PoolMapping>, whitelist: &[&str]) -> BackfillConfig {
        BackfillConfig::new(Network::Optimism, 0, 1636665386)
            .with_pools(pools)
            .with_whitelist_tokens(whitelist.iter().map(|token| token.to_string()).collect())
    }

    fn clients(chain: MockChain) -> ChainClients<MockChain> {
        ChainClients::new().with(Network::Optimism, chain)
    }

    fn pool_chain() -> MockChain {
        MockChain::new()
            .with_token(TOKEN_A, "WETH", 18)
            .with_token(TOKEN_B, "USDC", 6)
            .with_liquidity(POOL_A, "123456789")
            .with_fee(POOL_A, 3000)
            .with_balance(TOKEN_A, POOL_A, "1500000000000000000")
            .with_balance(TOKEN_B, POOL_A, "2500000")
    }

    #[tokio::test]
    async fn test_pool_and_tvl() {
        let store = Tables::new();
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[]);

        let report = populate_empty_pools(&config, &store, &clients(pool_chain()))
            .await
            .unwrap();
        assert_eq!(BackfillReport { pools_written: 1, pools_skipped: 0 }, report);

        let pool = store.find::<Pool>(POOL_A).unwrap();
        assert_eq!(big("123456789"), pool.liquidity);
        assert_eq!(3000, pool.fee_tier);
        assert_eq!(1636665386, pool.created_at_timestamp);
        assert_eq!(None, pool.tick);
        assert_eq!(dec("1.5"), pool.total_value_locked_token0);
        assert_eq!(dec("2.5"), pool.total_value_locked_token1);

        let token0 = store.find::<Token>(TOKEN_A).unwrap();
        let token1 = store.find::<Token>(TOKEN_B).unwrap();
        assert_eq!(dec("1.5"), token0.total_value_locked);
        assert_eq!(dec("2.5"), token1.total_value_locked);
        assert_eq!(6, token1.decimals);
        assert!(token0.whitelist_pools.is_empty());
        assert!(token1.whitelist_pools.is_empty());
    }

    #[tokio::test]
    async fn test_unresolved_token_skips_pool() {
        let store = Tables::new();
        // TOKEN_C answers no decimals
        let chain = pool_chain()
            .with_symbol(TOKEN_C, "BROKEN")
            .with_liquidity(POOL_B, "1")
            .with_fee(POOL_B, 500);
        let config = config(
            vec![
                PoolMapping::new(POOL_B, TOKEN_A, TOKEN_C),
                PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B),
            ],
            &[TOKEN_A],
        );

        let report = populate_empty_pools(&config, &store, &clients(chain)).await.unwrap();
        assert_eq!(BackfillReport { pools_written: 1, pools_skipped: 1 }, report);

        assert!(store.find::<Pool>(POOL_B).is_none());
        assert!(store.find::<Token>(TOKEN_C).is_none());
        assert!(store.find::<Pool>(POOL_A).is_some());
        assert_eq!(vec![POOL_A.to_string()], store.find::<Token>(TOKEN_B).unwrap().whitelist_pools);
        assert_eq!(2, store.writes::<Token>());
        assert_eq!(1, store.writes::<Pool>());
    }

    #[tokio::test]
    async fn test_only_unresolved_pool_writes_nothing() {
        let store = Tables::new();
        let chain = MockChain::new().with_token(TOKEN_A, "WETH", 18);
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[TOKEN_A]);

        let report = populate_empty_pools(&config, &store, &clients(chain)).await.unwrap();

        assert_eq!(1, report.pools_skipped);
        assert_eq!(0, store.writes::<Token>());
        assert_eq!(0, store.writes::<Pool>());
    }

    #[tokio::test]
    async fn test_whitelist_goes_to_other_token() {
        let store = Tables::new();
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[TOKEN_A]);

        populate_empty_pools(&config, &store, &clients(pool_chain())).await.unwrap();

        assert!(store.find::<Token>(TOKEN_A).unwrap().whitelist_pools.is_empty());
        assert_eq!(vec![POOL_A.to_string()], store.find::<Token>(TOKEN_B).unwrap().whitelist_pools);
    }

    #[tokio::test]
    async fn test_both_whitelisted() {
        let store = Tables::new();
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[TOKEN_A, TOKEN_B]);

        populate_empty_pools(&config, &store, &clients(pool_chain())).await.unwrap();

        assert_eq!(vec![POOL_A.to_string()], store.find::<Token>(TOKEN_A).unwrap().whitelist_pools);
        assert_eq!(vec![POOL_A.to_string()], store.find::<Token>(TOKEN_B).unwrap().whitelist_pools);
    }

    #[tokio::test]
    async fn test_shared_token_keeps_pool_order() {
        let store = Tables::new();
        let chain = pool_chain()
            .with_token(TOKEN_C, "DAI", 18)
            .with_liquidity(POOL_B, "1")
            .with_fee(POOL_B, 500)
            .with_balance(TOKEN_C, POOL_B, "1000000000000000000")
            .with_balance(TOKEN_B, POOL_B, "4000000");
        let config = config(
            vec![
                PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B),
                PoolMapping::new(POOL_B, TOKEN_C, TOKEN_B),
            ],
            &[TOKEN_A, TOKEN_C],
        );
        let clients = clients(chain);

        populate_empty_pools(&config, &store, &clients).await.unwrap();

        let token_b = store.find::<Token>(TOKEN_B).unwrap();
        assert_eq!(vec![POOL_A.to_string(), POOL_B.to_string()], token_b.whitelist_pools);
        // the latest pool's balance wins
        assert_eq!(dec("4"), token_b.total_value_locked);
        assert_eq!(500, store.find::<Pool>(POOL_B).unwrap().fee_tier);
        // TOKEN_B was resolved once, then loaded from the store
        assert_eq!(2 * 2 + 3 * 4 + 2 * 2, clients.get(Network::Optimism).unwrap().calls());
    }

    #[tokio::test]
    async fn test_missing_pool_state_defaults_to_zero() {
        let store = Tables::new();
        let chain = MockChain::new()
            .with_token(TOKEN_A, "WETH", 18)
            .with_token(TOKEN_B, "USDC", 6);
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[]);

        populate_empty_pools(&config, &store, &clients(chain)).await.unwrap();

        let pool = store.find::<Pool>(POOL_A).unwrap();
        assert_eq!(big("0"), pool.liquidity);
        assert_eq!(0, pool.fee_tier);
        assert_eq!(dec("0"), pool.total_value_locked_token0);
    }

    #[tokio::test]
    async fn test_transport_error_aborts() {
        let store = Tables::new();
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[]);

        let result = populate_empty_pools(&config, &store, &clients(MockChain::new().failing())).await;

        assert!(matches!(result, Err(Error::Rpc { .. })));
        assert_eq!(0, store.writes::<Pool>());
    }

    #[tokio::test]
    async fn test_unsupported_network() {
        let store = Tables::new();
        let config = config(vec![PoolMapping::new(POOL_A, TOKEN_A, TOKEN_B)], &[]);
        let clients = ChainClients::new().with(Network::Mainnet, pool_chain());

        let result = populate_empty_pools(&config, &store, &clients).await;
        assert!(matches!(result, Err(Error::UnsupportedNetwork(Network::Optimism))));
    }

    #[tokio::test]
    async fn test_populate_token_once() {
        let store = Tables::new();
        let overrides = StaticTokenDefinitions::new(vec![StaticTokenDefinition::new(TOKEN_C, "ZERO", "Zero Decimals", 0)
            .with_total_supply(big("10"))]);
        let clients = clients(MockChain::new());

        let token = populate_token(TOKEN_C, &overrides, &store, &clients, Network::Optimism)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(0, token.decimals);
        assert_eq!("ZERO", token.symbol);

        populate_token(TOKEN_C, &overrides, &store, &clients, Network::Optimism)
            .await
            .unwrap();
        assert_eq!(1, store.writes::<Token>());
        assert_eq!(0, clients.get(Network::Optimism).unwrap().calls());

        let missing = populate_token(TOKEN_A, &overrides, &store, &clients, Network::Optimism)
            .await
            .unwrap();
        assert!(missing.is_none());
        assert_eq!(1, store.writes::<Token>());
    }
}
