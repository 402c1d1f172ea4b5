pub mod erc20;
pub mod pool;

const INTERNAL_ERR: &'static str = "`ethabi` internal error";

/// A read-only contract function: calldata encoding and output decoding.
pub trait RpcCall {
    type Output;
    const NAME: &'static str;

    fn encode(&self) -> Vec<u8>;
    fn output(data: &[u8]) -> Result<Self::Output, String>;
}

fn encode_call(method_id: [u8; 4], params: &[ethabi::Token]) -> Vec<u8> {
    let data = ethabi::encode(params);
    let mut encoded = Vec::with_capacity(4 + data.len());
    encoded.extend(method_id);
    encoded.extend(data);
    encoded
}

fn decode_uint(data: &[u8], bits: usize) -> Result<ethabi::Uint, String> {
    let mut values = ethabi::decode(&[ethabi::ParamType::Uint(bits)], data.as_ref())
        .map_err(|e| format!("unable to decode output data: {:?}", e))?;
    Ok(values
        .pop()
        .expect(INTERNAL_ERR)
        .into_uint()
        .expect(INTERNAL_ERR))
}

fn uint_to_bigint(value: ethabi::Uint) -> num_bigint::BigInt {
    let mut v = [0u8; 32];
    value.to_big_endian(v.as_mut_slice());
    num_bigint::BigInt::from_bytes_be(num_bigint::Sign::Plus, &v)
}
