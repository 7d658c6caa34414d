//! Structural checks on unlocking data shared by the recognizers.

use bitcoin::{
    PublicKey, Script,
    opcodes::all::{OP_CHECKMULTISIG, OP_PUSHNUM_1, OP_PUSHNUM_16},
    script::Instruction,
};

/// Data pushed by a push-only script, in order.
///
/// Returns `None` if the script fails to decode or executes anything other
/// than a data push.
pub(crate) fn data_pushes(script: &Script) -> Option<Vec<&[u8]>> {
    script
        .instructions()
        .map(|ins| match ins.ok()? {
            Instruction::PushBytes(data) => Some(data.as_bytes()),
            Instruction::Op(_) => None,
        })
        .collect()
}

/// A standard bare multisig script, `m <keys..> n OP_CHECKMULTISIG`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MultisigScript {
    required: u8,
    keys: Vec<PublicKey>,
}

impl MultisigScript {
    pub(crate) fn parse(script: &Script) -> Option<Self> {
        let instructions = script
            .instructions()
            .collect::<Result<Vec<_>, _>>()
            .ok()?;

        let (first, rest) = instructions.split_first()?;
        let (last, rest) = rest.split_last()?;
        let (total, key_pushes) = rest.split_last()?;

        if *last != Instruction::Op(OP_CHECKMULTISIG) {
            return None;
        }

        let required = small_int(first)?;
        let total = small_int(total)?;
        if required > total || total as usize != key_pushes.len() {
            return None;
        }

        let keys = key_pushes
            .iter()
            .map(|ins| match ins {
                Instruction::PushBytes(data) => PublicKey::from_slice(data.as_bytes()).ok(),
                Instruction::Op(_) => None,
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { required, keys })
    }

    pub(crate) fn required(&self) -> u8 {
        self.required
    }

    pub(crate) fn keys(&self) -> &[PublicKey] {
        &self.keys
    }
}

/// Value of an `OP_1`..`OP_16` instruction.
fn small_int(ins: &Instruction<'_>) -> Option<u8> {
    let Instruction::Op(op) = ins else {
        return None;
    };
    let code = op.to_u8();
    (OP_PUSHNUM_1.to_u8()..=OP_PUSHNUM_16.to_u8())
        .contains(&code)
        .then(|| code - OP_PUSHNUM_1.to_u8() + 1)
}
