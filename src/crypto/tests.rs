//! Comprehensive tests for the crypto module

use ::md5::{Digest as _, Md5};

use super::compress::compress;
use super::md5::{digest, digest_bytes, digest_lower, digest_upper, digest_utf16};
use super::padding::{length_trailer, pad_message};

// Mixed character set: ASCII, Cyrillic, CJK and characters outside the BMP
const TEST_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
    0123456789_!@#$%^&*()<>,./?ЙЦУКЕНГШЩЗФЫВАПРОЛДЯЧСМИТЬБЮйцукенгшщзхъфывапролджэёячсмитьбю\
    密码用户名登录注册会员店铺费用权限😀🔑𝄞";

fn random_string(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    let chars: Vec<char> = TEST_CHARS.chars().collect();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Independent reference digest as lowercase hex
fn reference_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    let result = hasher.finalize();

    result.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Random strings up to 100 chars, compared with the reference implementation
#[test]
fn test_stress_short_strings() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..200 {
        let len: usize = rng.random_range(0..100);
        let input = random_string(len);

        assert_eq!(
            digest_lower(&input),
            reference_hex(input.as_bytes()),
            "Mismatch at iteration {} for {:?}", i, input
        );
    }
}

/// Random strings up to 5000 chars span many blocks
#[test]
fn test_stress_long_strings() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..20 {
        let len: usize = rng.random_range(100..5000);
        let input = random_string(len);

        assert_eq!(
            digest_lower(&input),
            reference_hex(input.as_bytes()),
            "Mismatch at iteration {}", i
        );
    }
}

/// Random byte strings, including bytes that are not valid UTF-8
#[test]
fn test_stress_raw_bytes() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let len: usize = rng.random_range(0..300);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();

        assert_eq!(
            digest_bytes(&bytes).to_lower_hex(),
            reference_hex(&bytes),
            "Mismatch at iteration {}", i
        );
    }
}

/// Every length across the first three blocks hits each padding position
#[test]
fn test_every_length_up_to_three_blocks() {
    let data: Vec<u8> = (0..=192u8).map(|i| i.wrapping_mul(37)).collect();
    for len in 0..=192 {
        let message = &data[..len];
        assert_eq!(
            digest_bytes(message).to_lower_hex(),
            reference_hex(message),
            "Mismatch at length {}", len
        );
    }
}

/// Padded buffer length is always a whole number of blocks
#[test]
fn test_padding_length_invariant() {
    for len in 0..300 {
        let words = pad_message(&vec![0xAB; len]);
        assert_eq!(words.len() % 16, 0, "length {}", len);
        assert_eq!(&words[words.len() - 2..], &length_trailer(len as u64));
    }
}

/// Pipeline stages compose into the public digest
#[test]
fn test_stages_compose() {
    let input = "The quick brown fox jumps over the lazy dog";
    let state = compress(&pad_message(input.as_bytes()));
    let d = digest(input);
    assert_eq!(d, crate::Digest::from_state(state));
    assert_eq!(d.to_string(), "9e107d9d372bb6826bd81d3542a419d6");
}

/// UTF-8 bytes are hashed, not UTF-16 code units
#[test]
fn test_utf8_not_utf16() {
    let input = "密码";
    let utf16_le: Vec<u8> = input
        .encode_utf16()
        .flat_map(|u| u.to_le_bytes())
        .collect();

    assert_eq!(digest_lower(input), reference_hex(input.as_bytes()));
    assert_ne!(digest_lower(input), reference_hex(&utf16_le));
    assert_eq!(reference_hex(&utf16_le), "968f6094c9de25b8f7bee7d57c25cb38");
}

/// UTF-16 input agrees with the string path for random mixed text
#[test]
fn test_utf16_matches_utf8_path() {
    for _ in 0..50 {
        let input = random_string(40);
        let units: Vec<u16> = input.encode_utf16().collect();
        assert_eq!(digest_utf16(&units).unwrap(), digest(&input));
    }
}

/// Uppercase variant is a pure case mapping of the lowercase digest
#[test]
fn test_upper_is_case_mapping() {
    for len in [0, 1, 17, 55, 56, 64, 119] {
        let input = random_string(len);
        let lower = digest_lower(&input);
        let upper = digest_upper(&input);
        assert_eq!(upper, lower.to_uppercase());
        assert!(upper.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}
