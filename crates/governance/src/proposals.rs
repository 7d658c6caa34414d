use bitcoin::{Amount, SignedAmount};
use peg_election::ProposalKey;

/// Governed call name for fee-per-kb votes.
pub const VOTE_FEE_PER_KB_CHANGE: &str = "voteFeePerKbChange";

/// Governed call name for locking cap votes.
pub const INCREASE_LOCKING_CAP: &str = "increaseLockingCap";

/// Proposal for setting the fee per kb, in big-endian satoshis.
pub fn fee_per_kb_proposal(fee: SignedAmount) -> ProposalKey {
    ProposalKey::new(VOTE_FEE_PER_KB_CHANGE, vec![fee.to_sat().to_be_bytes().to_vec()])
}

/// Proposal for raising the locking cap, in big-endian satoshis.
pub fn locking_cap_proposal(cap: Amount) -> ProposalKey {
    ProposalKey::new(INCREASE_LOCKING_CAP, vec![cap.to_sat().to_be_bytes().to_vec()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_encoding() {
        let key = fee_per_kb_proposal(SignedAmount::from_sat(100));
        assert_eq!(key.function(), VOTE_FEE_PER_KB_CHANGE);
        assert_eq!(key.arguments(), &[vec![0, 0, 0, 0, 0, 0, 0, 100]]);

        let key = locking_cap_proposal(Amount::from_sat(0x0102));
        assert_eq!(key.arguments(), &[vec![0, 0, 0, 0, 0, 0, 1, 2]]);
    }

    #[test]
    fn test_distinct_values_distinct_proposals() {
        assert_ne!(
            fee_per_kb_proposal(SignedAmount::from_sat(100)),
            fee_per_kb_proposal(SignedAmount::from_sat(101))
        );
        assert_ne!(
            fee_per_kb_proposal(SignedAmount::from_sat(100)),
            locking_cap_proposal(Amount::from_sat(100))
        );
    }
}
