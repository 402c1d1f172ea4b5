/// Contract's functions.
#[allow(dead_code)]
pub mod functions {
    use crate::abi::{decode_uint, encode_call, uint_to_bigint, RpcCall, INTERNAL_ERR};
    use crate::eth;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Decimals {}
    impl Decimals {
        const METHOD_ID: [u8; 4] = [49u8, 60u8, 229u8, 103u8];
    }
    impl RpcCall for Decimals {
        type Output = u8;
        const NAME: &'static str = "decimals";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            let value = decode_uint(data, 8usize)?;
            if value > ethabi::Uint::from(u8::MAX) {
                return Err(format!("decimals {} does not fit in uint8", value));
            }
            Ok(value.low_u32() as u8)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Name {}
    impl Name {
        const METHOD_ID: [u8; 4] = [6u8, 253u8, 222u8, 3u8];
    }
    impl RpcCall for Name {
        type Output = String;
        const NAME: &'static str = "name";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            decode_string_or_bytes32(data)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Symbol {}
    impl Symbol {
        const METHOD_ID: [u8; 4] = [149u8, 216u8, 155u8, 65u8];
    }
    impl RpcCall for Symbol {
        type Output = String;
        const NAME: &'static str = "symbol";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            decode_string_or_bytes32(data)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct TotalSupply {}
    impl TotalSupply {
        const METHOD_ID: [u8; 4] = [24u8, 22u8, 13u8, 221u8];
    }
    impl RpcCall for TotalSupply {
        type Output = num_bigint::BigInt;
        const NAME: &'static str = "totalSupply";

        fn encode(&self) -> Vec<u8> {
            encode_call(Self::METHOD_ID, &[])
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            decode_uint(data, 256usize).map(uint_to_bigint)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct BalanceOf {
        pub account: [u8; 20],
    }
    impl BalanceOf {
        const METHOD_ID: [u8; 4] = [112u8, 160u8, 130u8, 49u8];
    }
    impl RpcCall for BalanceOf {
        type Output = num_bigint::BigInt;
        const NAME: &'static str = "balanceOf";

        fn encode(&self) -> Vec<u8> {
            encode_call(
                Self::METHOD_ID,
                &[ethabi::Token::Address(ethabi::Address::from(self.account))],
            )
        }

        fn output(data: &[u8]) -> Result<Self::Output, String> {
            decode_uint(data, 256usize).map(uint_to_bigint)
        }
    }

    // Some early tokens (MKR, SAI, ...) return `bytes32` instead of `string`.
    // An ABI string takes at least an offset and a length word, so a single
    // word can only be the `bytes32` form.
    fn decode_string_or_bytes32(data: &[u8]) -> Result<String, String> {
        if data.len() == 32 {
            let value = eth::read_string_from_bytes(data);
            if value.is_empty() {
                return Err("empty bytes32 string".to_string());
            }
            return Ok(value);
        }

        let mut values = ethabi::decode(&[ethabi::ParamType::String], data)
            .map_err(|e| format!("unable to decode output data: {:?}", e))?;
        Ok(values
            .pop()
            .expect(INTERNAL_ERR)
            .into_string()
            .expect(INTERNAL_ERR))
    }
}
