//! Contract ABI encoding and decoding
//!
//! Hand-rolled subset of the standard ABI covering what the donation
//! contract exposes:
//!
//! - `donate(string,bool)` payable
//! - `getDonations()` returns `(uint256 id, address donor, uint256 amount,
//!   uint256 timestamp, string message, bool isAnonymous)[]`
//! - `getStatistics()` returns `(uint256 totalAmount, uint256 donorCount,
//!   uint256 avgDonation)`
//! - `getBalance()` returns `uint256`
//!
//! Words are 32 bytes; dynamic values are referenced by offsets relative to
//! the start of the enclosing value's data area. Selectors are the first
//! four bytes of the Keccak-256 hash of the canonical signature.

use sha3::{Digest, Keccak256};

const WORD: usize = 32;

/// First four bytes of keccak256(signature)
pub fn selector(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let digest = hasher.finalize();
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Encode bytes as a 0x-prefixed hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// Decode a 0x-prefixed hex string
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, String> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| format!("Hex data missing 0x prefix: {}", hex))?;

    if digits.len() % 2 != 0 {
        return Err("Hex data has odd length".to_string());
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("Invalid hex data: {}", e))
        })
        .collect()
}

fn push_word_u128(out: &mut Vec<u8>, value: u128) {
    out.extend_from_slice(&[0u8; 16]);
    out.extend_from_slice(&value.to_be_bytes());
}

/// Calldata for `donate(string message, bool anonymous)`
///
/// Head holds the offset to the string data and the bool; the string length
/// and padded bytes follow.
pub fn encode_donate(message: &str, anonymous: bool) -> String {
    let mut data = Vec::new();
    data.extend_from_slice(&selector("donate(string,bool)"));

    // Head: two argument slots, so the string data starts at 0x40.
    push_word_u128(&mut data, 2 * WORD as u128);
    push_word_u128(&mut data, anonymous as u128);

    // Tail: length word, then bytes padded to a word boundary.
    let bytes = message.as_bytes();
    push_word_u128(&mut data, bytes.len() as u128);
    data.extend_from_slice(bytes);
    let pad = (WORD - bytes.len() % WORD) % WORD;
    data.extend_from_slice(&vec![0u8; pad]);

    encode_hex(&data)
}

/// Calldata for a no-argument view call
pub fn encode_view_call(signature: &str) -> String {
    encode_hex(&selector(signature))
}

/// A donation tuple as returned by `getDonations()`
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedDonation {
    pub id: u64,
    pub donor: String,
    pub amount_wei: u128,
    pub timestamp_secs: u64,
    pub message: String,
    pub is_anonymous: bool,
}

/// Cursor over ABI-encoded return data
struct Decoder<'a> {
    data: &'a [u8],
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn word(&self, at: usize) -> Result<&'a [u8], String> {
        self.data
            .get(at..at + WORD)
            .ok_or_else(|| format!("Return data truncated at byte {}", at))
    }

    fn u128_at(&self, at: usize) -> Result<u128, String> {
        let word = self.word(at)?;
        if word[..16].iter().any(|&b| b != 0) {
            return Err("Value exceeds 128 bits".to_string());
        }
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&word[16..]);
        Ok(u128::from_be_bytes(buf))
    }

    fn u64_at(&self, at: usize) -> Result<u64, String> {
        u64::try_from(self.u128_at(at)?).map_err(|_| "Value exceeds 64 bits".to_string())
    }

    fn usize_at(&self, at: usize) -> Result<usize, String> {
        usize::try_from(self.u64_at(at)?).map_err(|_| "Offset out of range".to_string())
    }

    fn bool_at(&self, at: usize) -> Result<bool, String> {
        Ok(self.u128_at(at)? != 0)
    }

    fn address_at(&self, at: usize) -> Result<String, String> {
        let word = self.word(at)?;
        Ok(encode_hex(&word[12..]))
    }

    fn string_at(&self, at: usize) -> Result<String, String> {
        let len = self.usize_at(at)?;
        let bytes = self
            .data
            .get(at + WORD..at + WORD + len)
            .ok_or_else(|| "String data truncated".to_string())?;
        String::from_utf8(bytes.to_vec()).map_err(|e| format!("String is not UTF-8: {}", e))
    }
}

/// Decode the return data of `getDonations()`
pub fn decode_donations(data: &[u8]) -> Result<Vec<DecodedDonation>, String> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let dec = Decoder::new(data);
    let array_at = dec.usize_at(0)?;
    let len = dec.usize_at(array_at)?;

    // Element offsets are relative to the start of the element area.
    let base = array_at + WORD;

    let mut donations = Vec::with_capacity(len);
    for i in 0..len {
        let tuple_at = base + dec.usize_at(base + i * WORD)?;

        let message_at = tuple_at + dec.usize_at(tuple_at + 4 * WORD)?;

        donations.push(DecodedDonation {
            id: dec.u64_at(tuple_at)?,
            donor: dec.address_at(tuple_at + WORD)?,
            amount_wei: dec.u128_at(tuple_at + 2 * WORD)?,
            timestamp_secs: dec.u64_at(tuple_at + 3 * WORD)?,
            message: dec.string_at(message_at)?,
            is_anonymous: dec.bool_at(tuple_at + 5 * WORD)?,
        });
    }

    Ok(donations)
}

/// Decode the return data of `getStatistics()`:
/// `(totalAmount wei, donorCount, avgDonation wei)`
pub fn decode_statistics(data: &[u8]) -> Result<(u128, u64, u128), String> {
    let dec = Decoder::new(data);
    Ok((
        dec.u128_at(0)?,
        dec.u64_at(WORD)?,
        dec.u128_at(2 * WORD)?,
    ))
}

/// Decode a single `uint256` return value
pub fn decode_uint(data: &[u8]) -> Result<u128, String> {
    Decoder::new(data).u128_at(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_padded_string(out: &mut Vec<u8>, s: &str) {
        push_word_u128(out, s.len() as u128);
        out.extend_from_slice(s.as_bytes());
        let pad = (WORD - s.len() % WORD) % WORD;
        out.extend_from_slice(&vec![0u8; pad]);
    }

    fn push_address(out: &mut Vec<u8>, addr: &[u8; 20]) {
        out.extend_from_slice(&[0u8; 12]);
        out.extend_from_slice(addr);
    }

    /// Build getDonations() return data for one donation
    fn encode_single_donation(message: &str) -> Vec<u8> {
        let mut data = Vec::new();
        push_word_u128(&mut data, 32); // offset to array
        push_word_u128(&mut data, 1); // length
        push_word_u128(&mut data, 32); // element 0 offset (from element area)

        // Tuple: id, donor, amount, timestamp, message offset, isAnonymous
        push_word_u128(&mut data, 7);
        push_address(&mut data, &[0xab; 20]);
        push_word_u128(&mut data, 1_500_000_000_000_000_000); // 1.5 ETH
        push_word_u128(&mut data, 1_700_000_000);
        push_word_u128(&mut data, 6 * 32); // message offset within tuple
        push_word_u128(&mut data, 1); // anonymous
        push_padded_string(&mut data, message);

        data
    }

    #[test]
    fn test_selector_is_four_bytes_and_stable() {
        let a = selector("donate(string,bool)");
        let b = selector("donate(string,bool)");
        assert_eq!(a, b);
        assert_ne!(a, selector("getDonations()"));
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes = vec![0x00, 0x01, 0xab, 0xff];
        assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
        assert!(decode_hex("abcd").is_err());
        assert!(decode_hex("0xabc").is_err());
    }

    #[test]
    fn test_encode_donate_layout() {
        let calldata = decode_hex(&encode_donate("Hi", true)).unwrap();

        // selector + offset word + bool word + length word + padded data
        assert_eq!(calldata.len(), 4 + 4 * WORD);
        assert_eq!(&calldata[..4], &selector("donate(string,bool)"));

        let args = &calldata[4..];
        let dec = Decoder::new(args);
        assert_eq!(dec.usize_at(0).unwrap(), 64); // string offset
        assert!(dec.bool_at(WORD).unwrap());
        assert_eq!(dec.string_at(64).unwrap(), "Hi");
    }

    #[test]
    fn test_encode_donate_empty_message() {
        let calldata = decode_hex(&encode_donate("", false)).unwrap();
        // No data bytes after the length word.
        assert_eq!(calldata.len(), 4 + 3 * WORD);
    }

    #[test]
    fn test_decode_donations() {
        let data = encode_single_donation("For education");
        let donations = decode_donations(&data).unwrap();

        assert_eq!(donations.len(), 1);
        let d = &donations[0];
        assert_eq!(d.id, 7);
        assert_eq!(d.donor, format!("0x{}", "ab".repeat(20)));
        assert_eq!(d.amount_wei, 1_500_000_000_000_000_000);
        assert_eq!(d.timestamp_secs, 1_700_000_000);
        assert_eq!(d.message, "For education");
        assert!(d.is_anonymous);
    }

    #[test]
    fn test_decode_empty_array() {
        let mut data = Vec::new();
        push_word_u128(&mut data, 32);
        push_word_u128(&mut data, 0);
        assert!(decode_donations(&data).unwrap().is_empty());
        assert!(decode_donations(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_truncated_is_error() {
        let mut data = encode_single_donation("Hello");
        data.truncate(data.len() - 8);
        assert!(decode_donations(&data).is_err());
    }

    #[test]
    fn test_decode_statistics() {
        let mut data = Vec::new();
        push_word_u128(&mut data, 3_500_000_000_000_000_000);
        push_word_u128(&mut data, 2);
        push_word_u128(&mut data, 1_750_000_000_000_000_000);

        let (total, donors, avg) = decode_statistics(&data).unwrap();
        assert_eq!(total, 3_500_000_000_000_000_000);
        assert_eq!(donors, 2);
        assert_eq!(avg, 1_750_000_000_000_000_000);
    }

    #[test]
    fn test_decode_uint() {
        let mut data = Vec::new();
        push_word_u128(&mut data, 42);
        assert_eq!(decode_uint(&data).unwrap(), 42);
        assert!(decode_uint(&[]).is_err());
    }
}
