use serde::Serialize;

use super::RecordSchema;
use super::kind::RecordKind;
use crate::decode::{
    ByteCursor, DecodeError, PublicKey, Timestamp, WireEnum, public_key, swapped, timestamp,
    wire_enum,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignType {
    Agreed,
    Denied,
}

impl WireEnum for SignType {
    const NAME: &'static str = "SignType";

    fn from_discriminant(value: u8) -> Option<Self> {
        match value {
            0 => Some(SignType::Agreed),
            1 => Some(SignType::Denied),
            _ => None,
        }
    }
}

/// One vote on a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureAccount {
    pub signer: PublicKey,
    pub created_at: Timestamp,
    pub amount: u64,
    pub proposal: PublicKey,
    pub sign_type: SignType,
}

impl SignatureAccount {
    pub fn is_agreed(&self) -> bool {
        self.sign_type == SignType::Agreed
    }
}

impl RecordSchema for SignatureAccount {
    const KIND: RecordKind = RecordKind::Signature;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            signer: cursor.field("signer", &public_key())?,
            created_at: cursor.field("created_at", &timestamp())?,
            amount: cursor.field("amount", &swapped::<u64>())?,
            proposal: cursor.field("proposal", &public_key())?,
            sign_type: cursor.field("sign_type", &wire_enum::<SignType>())?,
        })
    }
}
