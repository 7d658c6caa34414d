//! Serde helper modules for Bitcoin amounts kept in configuration.
use bitcoin::{Amount, SignedAmount};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize/deserialize [`Amount`] as integer satoshis ([`u64`]).
pub mod serde_amount_sat {
    use super::*;

    pub fn serialize<S: Serializer>(v: &Amount, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(v.to_sat())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Amount, D::Error> {
        let sats = u64::deserialize(d)?;
        Ok(Amount::from_sat(sats))
    }
}

/// Serialize/deserialize [`SignedAmount`] as integer satoshis ([`i64`]).
pub mod serde_signed_amount_sat {
    use super::*;

    pub fn serialize<S: Serializer>(v: &SignedAmount, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(v.to_sat())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SignedAmount, D::Error> {
        let sats = i64::deserialize(d)?;
        Ok(SignedAmount::from_sat(sats))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Fees {
        #[serde(with = "serde_amount_sat")]
        max: Amount,
        #[serde(with = "serde_signed_amount_sat")]
        delta: SignedAmount,
    }

    #[test]
    fn test_amounts_as_satoshis() {
        let fees: Fees = toml::from_str("max = 5000000\ndelta = -12").unwrap();
        assert_eq!(fees.max, Amount::from_sat(5_000_000));
        assert_eq!(fees.delta, SignedAmount::from_sat(-12));

        let encoded = toml::to_string(&fees).unwrap();
        assert!(encoded.contains("max = 5000000"));
    }

    #[test]
    fn test_negative_unsigned_amount_rejected() {
        let res = toml::from_str::<Fees>("max = -1\ndelta = 0");
        assert!(res.is_err());
    }
}
