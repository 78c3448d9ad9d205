use serde::Serialize;

use super::RecordSchema;
use super::kind::RecordKind;
use crate::decode::{ByteCursor, DecodeError, PublicKey, WireEnum, boolean, public_key, wire_enum};

/// Role of a member inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    Member,
    Manager,
}

impl WireEnum for Position {
    const NAME: &'static str = "Position";

    fn from_discriminant(value: u8) -> Option<Self> {
        match value {
            0 => Some(Position::Member),
            1 => Some(Position::Manager),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberAccount {
    pub position: Position,
    pub in_promotion: bool,
    pub in_withdraw: bool,
    pub group: PublicKey,
    pub funder: PublicKey,
    pub owner: PublicKey,
}

impl MemberAccount {
    pub fn is_manager(&self) -> bool {
        self.position == Position::Manager
    }
}

impl RecordSchema for MemberAccount {
    const KIND: RecordKind = RecordKind::Member;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            position: cursor.field("position", &wire_enum::<Position>())?,
            in_promotion: cursor.field("in_promotion", &boolean())?,
            in_withdraw: cursor.field("in_withdraw", &boolean())?,
            group: cursor.field("group", &public_key())?,
            funder: cursor.field("funder", &public_key())?,
            owner: cursor.field("owner", &public_key())?,
        })
    }
}
