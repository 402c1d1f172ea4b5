use num_bigint::BigInt;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const UNKNOWN: &str = "UNKNOWN";

const DGD_TOKEN_ADDRESS: &str = "0xe0b7927c4af23765cb51314a0e0521a9645f0e2a";
const AAVE_TOKEN_ADDRESS: &str = "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9";
const LIF_TOKEN_ADDRESS: &str = "0xeb9951021698b42e4399f9cbb6267aa35f82d59d";
const SVD_TOKEN_ADDRESS: &str = "0xbdeb4b83251fb146687fa19d1c660f99411eefe3";
const THEDAO_TOKEN_ADDRESS: &str = "0xbb9bc244d798123fde783fcc1c72d3bb8c189413";
const HPB_TOKEN_ADDRESS: &str = "0x38c6a68304cdefb9bec48bbfaaba5c5b47818bb2";

/// Token metadata that takes precedence over whatever the contract answers.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticTokenDefinition {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: Option<BigInt>,
}

impl StaticTokenDefinition {
    pub fn new(address: &str, symbol: &str, name: &str, decimals: u8) -> Self {
        StaticTokenDefinition {
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            total_supply: None,
        }
    }

    pub fn with_total_supply(mut self, total_supply: BigInt) -> Self {
        self.total_supply = Some(total_supply);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticTokenDefinitions {
    definitions: Vec<StaticTokenDefinition>,
}

impl StaticTokenDefinitions {
    pub fn new(definitions: Vec<StaticTokenDefinition>) -> Self {
        StaticTokenDefinitions { definitions }
    }

    // hard-coded tokens which have various behaviours but for which a UniswapV3 valid pool
    // exists, some are tokens which were migrated to new addresses
    pub fn mainnet() -> Self {
        Self::new(vec![
            StaticTokenDefinition::new(DGD_TOKEN_ADDRESS, "DGD", "DGD", 9),
            StaticTokenDefinition::new(AAVE_TOKEN_ADDRESS, "AAVE", "Aave Token", 18),
            StaticTokenDefinition::new(LIF_TOKEN_ADDRESS, "LIF", "LIF", 18),
            StaticTokenDefinition::new(SVD_TOKEN_ADDRESS, "SVD", "savedroid", 18),
            StaticTokenDefinition::new(THEDAO_TOKEN_ADDRESS, "TheDAO", "TheDAO", 16),
            StaticTokenDefinition::new(HPB_TOKEN_ADDRESS, "HPB", "HPBCoin", 18),
        ])
    }

    pub fn get(&self, address: &str) -> Option<&StaticTokenDefinition> {
        let wanted = address.trim_start_matches("0x");
        self.definitions
            .iter()
            .find(|definition| definition.address.trim_start_matches("0x").eq_ignore_ascii_case(wanted))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
