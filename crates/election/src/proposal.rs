use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};

/// Identity of a proposal: the governed call and its encoded arguments.
///
/// Two votes back the same proposal only if both the function and every
/// argument byte match. Keys order by function name, then arguments
/// lexicographically, which is the order tallies are iterated and stored in.
#[derive(
    Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, BorshSerialize, BorshDeserialize, Arbitrary,
)]
pub struct ProposalKey {
    function: String,
    arguments: Vec<Vec<u8>>,
}

impl ProposalKey {
    pub fn new(function: impl Into<String>, arguments: Vec<Vec<u8>>) -> Self {
        Self {
            function: function.into(),
            arguments,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &[Vec<u8>] {
        &self.arguments
    }
}

impl fmt::Display for ProposalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{}", hex::encode(arg))?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let key = ProposalKey::new("voteFeePerKbChange", vec![vec![0x00, 0x64], vec![]]);
        assert_eq!(key.to_string(), "voteFeePerKbChange(0x0064, 0x)");
    }

    #[test]
    fn test_ordering_is_function_then_arguments() {
        let a = ProposalKey::new("a", vec![vec![9]]);
        let b1 = ProposalKey::new("b", vec![vec![1]]);
        let b2 = ProposalKey::new("b", vec![vec![1, 0]]);
        let b3 = ProposalKey::new("b", vec![vec![2]]);

        let mut keys = vec![b3.clone(), b1.clone(), a.clone(), b2.clone()];
        keys.sort();
        assert_eq!(keys, vec![a, b1, b2, b3]);
    }
}
