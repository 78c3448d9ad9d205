use serde::Serialize;

use super::RecordSchema;
use super::kind::RecordKind;
use super::layout::group::PADDING_LEN;
use crate::decode::{ByteCursor, DecodeError, PublicKey, Skip, boolean, public_key, swapped, u8};

/// Share of the group that must take part in a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticipateRate {
    pub numerator: u8,
    pub denominator: u8,
}

impl ParticipateRate {
    /// Votes needed out of `total`, rounded down.
    ///
    /// Mirrors the program: an overflowing product counts as zero and a zero
    /// denominator as unreachable (`u64::MAX`).
    pub fn threshold(&self, total: u64) -> u64 {
        total
            .checked_mul(u64::from(self.numerator))
            .unwrap_or(0)
            .checked_div(u64::from(self.denominator))
            .unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAccount {
    pub seed: u8,
    pub electing: bool,
    pub freeze: bool,
    pub rate: ParticipateRate,
    pub update: bool,
    pub max_manager: u32,
    pub current_manager: u32,
    pub current_member: u32,
    pub proposals: u32,
    pub index: u32,
    pub sponsor: PublicKey,
    pub admin: PublicKey,
}

impl GroupAccount {
    pub fn total_users(&self) -> u64 {
        u64::from(self.current_manager) + u64::from(self.current_member)
    }

    /// Votes a proposal needs before it can pass.
    pub fn required_votes(&self) -> u64 {
        self.rate.threshold(self.total_users())
    }
}

impl RecordSchema for GroupAccount {
    const KIND: RecordKind = RecordKind::Group;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let seed = cursor.field("seed", &u8())?;
        let electing = cursor.field("electing", &boolean())?;
        let freeze = cursor.field("freeze", &boolean())?;
        let numerator = cursor.field("rate.numerator", &u8())?;
        let denominator = cursor.field("rate.denominator", &u8())?;
        let update = cursor.field("update", &boolean())?;
        cursor.field("padding", &Skip::new(PADDING_LEN))?;
        let max_manager = cursor.field("max_manager", &swapped::<u32>())?;
        let current_manager = cursor.field("current_manager", &swapped::<u32>())?;
        let current_member = cursor.field("current_member", &swapped::<u32>())?;
        let proposals = cursor.field("proposals", &swapped::<u32>())?;
        let index = cursor.field("index", &swapped::<u32>())?;
        let sponsor = cursor.field("sponsor", &public_key())?;
        let admin = cursor.field("admin", &public_key())?;

        Ok(Self {
            seed,
            electing,
            freeze,
            rate: ParticipateRate {
                numerator,
                denominator,
            },
            update,
            max_manager,
            current_manager,
            current_member,
            proposals,
            index,
            sponsor,
            admin,
        })
    }
}
