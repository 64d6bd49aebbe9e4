mod common;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use common::{random_payload, test_signer, OTHER_SECRET, TEST_SECRET};
use cookie_signer::hex::{self, Padding};
use cookie_signer::{CookieSigner, CookieSignerError, SecretError, SignerError, SIGNATURE_HEX_LEN};
use rand::Rng;

#[test]
fn test_hex_roundtrip_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let bytes = random_payload(&mut rng, 128);
        let encoded = hex::encode(&bytes);
        assert_eq!(encoded.len(), bytes.len() * 2);
        assert!(encoded
            .bytes()
            .all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        assert_eq!(hex::decode(&encoded, Padding::Strict).unwrap(), bytes);
    }
}

#[test]
fn test_hex_rejects_invalid_regardless_of_padding() {
    for input in ["g1", "1 ", "0x00", "zz"] {
        assert!(hex::decode(input, Padding::Lenient).is_err(), "{input}");
        assert!(hex::decode(input, Padding::Strict).is_err(), "{input}");
    }
}

#[test]
fn test_signature_roundtrip_random() {
    let signer = test_signer();
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let payload = random_payload(&mut rng, 256);
        let signed = signer.create_signed_string(&payload).unwrap();
        assert_eq!(signer.verify_signed_string(&signed), Some(payload));
    }
}

#[test]
fn test_signed_string_wire_format() -> Result<(), Box<dyn std::error::Error>> {
    let signer = test_signer();
    let signed = signer.create_signed_string(b"\x00\xff wire format")?;

    assert_eq!(signed.as_bytes()[SIGNATURE_HEX_LEN], b'-');
    let (sig, body) = signed.split_at(SIGNATURE_HEX_LEN);
    assert_eq!(sig, signer.sign(b"\x00\xff wire format")?);
    assert_eq!(BASE64.decode(&body[1..])?, b"\x00\xff wire format");
    Ok(())
}

#[test]
fn test_single_byte_tamper_in_signature_rejected() {
    let signer = test_signer();
    let signed = signer.create_signed_string(b"tamper target").unwrap();

    for i in 0..SIGNATURE_HEX_LEN {
        let mut bytes = signed.clone().into_bytes();
        // Swap to a different valid hex digit so only the comparison can fail
        bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert_eq!(signer.verify_signed_string(&tampered), None, "index {i}");
    }
}

#[test]
fn test_single_byte_tamper_in_payload_rejected() {
    let signer = test_signer();
    let payload = b"tamper target payload".to_vec();
    let signed = signer.create_signed_string(&payload).unwrap();
    let sig = &signed[..SIGNATURE_HEX_LEN];
    let mut rng = rand::thread_rng();

    for i in 0..payload.len() {
        let mut tampered_payload = payload.clone();
        tampered_payload[i] ^= rng.gen_range(1..=255u8);
        let tampered = format!("{}-{}", sig, BASE64.encode(&tampered_payload));
        assert_eq!(signer.verify_signed_string(&tampered), None, "index {i}");
    }
}

#[test]
fn test_secret_mismatch_rejected() {
    let signed = test_signer().create_signed_string(b"data").unwrap();
    let other = CookieSigner::new(OTHER_SECRET).unwrap();
    assert_eq!(other.verify_signed_string(&signed), None);
}

#[test]
fn test_malformed_signed_strings_do_not_panic() {
    let signer = test_signer();
    for input in ["", "nodash", "sig-!!!notbase64", "-", "--", "é-é"] {
        assert_eq!(signer.verify_signed_string(input), None, "{input:?}");
    }
}

#[test]
fn test_short_secret_is_config_error() {
    let err = CookieSigner::new(&TEST_SECRET.as_bytes()[..14]).unwrap_err();
    assert!(matches!(
        err,
        SignerError::Secret(SecretError::TooShort { min: 15, got: 14 })
    ));

    let unified: CookieSignerError = err.into();
    assert!(unified.is_config_error());
}
