use tiny_keccak::{Hasher, Keccak};

/// Reports whether `address` is a syntactically valid account address.
///
/// Accepts `0x` followed by 40 hex digits. All-lowercase input is accepted as
/// is, any other casing has to match its EIP-55 checksum.
pub fn is_address(address: &str) -> bool {
    let digits = match address.strip_prefix("0x") {
        Some(digits) => digits,
        None => return false,
    };
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    if address.to_ascii_lowercase() == address {
        return true;
    }

    to_checksum_address(digits) == address
}

pub fn to_checksum_address(digits: &str) -> String {
    let lower = digits.trim_start_matches("0x").to_ascii_lowercase();

    let mut hash = [0u8; 32];
    let mut hasher = Keccak::v256();
    hasher.update(lower.as_bytes());
    hasher.finalize(&mut hash);

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn address_bytes(address: &str) -> Option<[u8; 20]> {
    let decoded = hex::decode(address.trim_start_matches("0x")).ok()?;
    decoded.try_into().ok()
}

/// Reads a right-padded `bytes32` string as returned by tokens like MKR.
pub fn read_string_from_bytes(input: &[u8]) -> String {
    // invalid utf8 sequences are replaced, the zero padding is dropped
    if let Some(last) = input.iter().rev().position(|&pos| pos != 0) {
        return String::from_utf8_lossy(&input[0..input.len() - last]).to_string();
    }

    // use case when all the bytes are set to 0
    "".to_string()
}
