/// Contract's functions.
#[allow(dead_code)]
pub mod functions {
    use crate::abi::{decode_uint, encode_call, uint_to_bigint, RpcCall};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Liquidity {}
    impl Liquidity {
        const METHOD_ID: [u8; 4] = [26u8, 104u8, 101u8, 2u8];
    }
    impl RpcCall for Liquidity {
        type Output = num_bigint::BigInt;
        const NAME: &'static str = "liquidity";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            decode_uint(data, 128usize).map(uint_to_bigint)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Fee {}
    impl Fee {
        const METHOD_ID: [u8; 4] = [221u8, 202u8, 63u8, 67u8];
    }
    impl RpcCall for Fee {
        type Output = u32;
        const NAME: &'static str = "fee";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            let value = decode_uint(data, 24usize)?;
            if value > ethabi::Uint::from(0xff_ffffu32) {
                return Err(format!("fee {} does not fit in uint24", value));
            }
            Ok(value.low_u32())
        }
    }
}
