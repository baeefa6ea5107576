//! # Address Inputs
//!
//! Callers may hand addresses over as a native `Pubkey`, a base58 string,
//! or raw bytes. Everything funnels through [`AddressLike`] so malformed
//! input is rejected with `InvalidAddress` before any account is derived.

use solana_sdk::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::error::{HelloWorldError, Result};

/// Anything that can be turned into a `Pubkey`.
pub trait AddressLike {
    fn to_pubkey(&self) -> Result<Pubkey>;
}

impl AddressLike for Pubkey {
    fn to_pubkey(&self) -> Result<Pubkey> {
        Ok(*self)
    }
}

impl AddressLike for [u8; PUBKEY_BYTES] {
    fn to_pubkey(&self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(*self))
    }
}

impl AddressLike for [u8] {
    fn to_pubkey(&self) -> Result<Pubkey> {
        pubkey_from_bytes(self, || bs58::encode(self).into_string())
    }
}

impl AddressLike for Vec<u8> {
    fn to_pubkey(&self) -> Result<Pubkey> {
        self.as_slice().to_pubkey()
    }
}

impl AddressLike for str {
    fn to_pubkey(&self) -> Result<Pubkey> {
        let bytes = bs58::decode(self)
            .into_vec()
            .map_err(|e| HelloWorldError::invalid_address(self, e.to_string()))?;
        pubkey_from_bytes(&bytes, || self.to_string())
    }
}

impl AddressLike for String {
    fn to_pubkey(&self) -> Result<Pubkey> {
        self.as_str().to_pubkey()
    }
}

impl<T: AddressLike + ?Sized> AddressLike for &T {
    fn to_pubkey(&self) -> Result<Pubkey> {
        (**self).to_pubkey()
    }
}

fn pubkey_from_bytes(bytes: &[u8], display: impl FnOnce() -> String) -> Result<Pubkey> {
    let array: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|_| {
        HelloWorldError::invalid_address(
            display(),
            format!("expected {} bytes, got {}", PUBKEY_BYTES, bytes.len()),
        )
    })?;
    Ok(Pubkey::new_from_array(array))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_representation() {
        let key = Pubkey::new_unique();
        let encoded = key.to_string();
        let bytes = key.to_bytes();

        assert_eq!(key.to_pubkey().unwrap(), key);
        assert_eq!(encoded.as_str().to_pubkey().unwrap(), key);
        assert_eq!(encoded.to_pubkey().unwrap(), key);
        assert_eq!(bytes.to_pubkey().unwrap(), key);
        assert_eq!(bytes.as_slice().to_pubkey().unwrap(), key);
        assert_eq!(bytes.to_vec().to_pubkey().unwrap(), key);
    }

    #[test]
    fn test_rejects_bad_base58() {
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet
        let err = "0OIl0OIl".to_pubkey().unwrap_err();
        assert!(matches!(err, HelloWorldError::InvalidAddress { .. }));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let short = bs58::encode([7u8; 31]).into_string();
        match short.to_pubkey().unwrap_err() {
            HelloWorldError::InvalidAddress { input, reason } => {
                assert_eq!(input, short);
                assert!(reason.contains("got 31"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let long = vec![1u8; 33];
        assert!(matches!(
            long.to_pubkey(),
            Err(HelloWorldError::InvalidAddress { .. })
        ));
        assert!(matches!(
            "".to_pubkey(),
            Err(HelloWorldError::InvalidAddress { .. })
        ));
    }
}
