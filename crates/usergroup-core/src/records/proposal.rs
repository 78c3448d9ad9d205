use serde::Serialize;

use super::RecordSchema;
use super::event::ProposalEventType;
use super::kind::RecordKind;
use super::layout::proposal::{
    PROPOSAL_TYPE_SPAN, STATUS_SPAN, UPDATE_GROUP_HEADER_LEN, WITHDRAW_HEADER_LEN,
};
use crate::decode::{
    ByteCursor, DecodeError, PublicKey, Skip, TaggedUnion, Timestamp, WireEnum, public_key, swapped,
    tagged, timestamp,
};

/// What a proposal asks the group to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ProposalType {
    Upgrade,
    Downgrade,
    UpdateGroup {
        max_manager: u32,
    },
    ReElection,
    Withdraw {
        mint: PublicKey,
        receiver: PublicKey,
        amount: u64,
    },
}

impl ProposalType {
    pub fn event_type(&self) -> ProposalEventType {
        match self {
            ProposalType::Upgrade => ProposalEventType::Upgrade,
            ProposalType::Downgrade => ProposalEventType::Downgrade,
            ProposalType::UpdateGroup { .. } => ProposalEventType::UpdateGroup,
            ProposalType::ReElection => ProposalEventType::ReElection,
            ProposalType::Withdraw { .. } => ProposalEventType::Withdraw,
        }
    }
}

impl TaggedUnion for ProposalType {
    const NAME: &'static str = "ProposalType";
    const SPAN: usize = PROPOSAL_TYPE_SPAN;

    fn decode_variant(tag: u8, span: &mut ByteCursor<'_>) -> Result<Option<Self>, DecodeError> {
        let variant = match tag {
            0 => ProposalType::Upgrade,
            1 => ProposalType::Downgrade,
            2 => {
                span.field("header", &Skip::new(UPDATE_GROUP_HEADER_LEN))?;
                let max_manager = span.field("max_manager", &swapped::<u32>())?;
                ProposalType::UpdateGroup { max_manager }
            }
            3 => ProposalType::ReElection,
            4 => {
                span.field("header", &Skip::new(WITHDRAW_HEADER_LEN))?;
                let mint = span.field("mint", &public_key())?;
                let receiver = span.field("receiver", &public_key())?;
                let amount = span.field("amount", &swapped::<u64>())?;
                ProposalType::Withdraw {
                    mint,
                    receiver,
                    amount,
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(variant))
    }
}

/// Voting state of a proposal.
///
/// The program stores a resolution time next to the tag; only the tag is
/// decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProposalStatus {
    Progressing,
    Passed,
    Rejected,
    Updated,
}

impl ProposalStatus {
    pub fn is_progressing(self) -> bool {
        self == ProposalStatus::Progressing
    }
}

impl WireEnum for ProposalStatus {
    const NAME: &'static str = "ProposalStatus";

    fn from_discriminant(value: u8) -> Option<Self> {
        match value {
            0 => Some(ProposalStatus::Progressing),
            1 => Some(ProposalStatus::Passed),
            2 => Some(ProposalStatus::Rejected),
            3 => Some(ProposalStatus::Updated),
            _ => None,
        }
    }
}

impl TaggedUnion for ProposalStatus {
    const NAME: &'static str = <Self as WireEnum>::NAME;
    const SPAN: usize = STATUS_SPAN;

    fn decode_variant(tag: u8, _span: &mut ByteCursor<'_>) -> Result<Option<Self>, DecodeError> {
        Ok(ProposalStatus::from_discriminant(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalAccount {
    pub submitter: PublicKey,
    pub beneficiary: PublicKey,
    pub bene_member: PublicKey,
    pub group: PublicKey,
    pub positive: u32,
    pub negative: u32,
    pub limit: u64,
    pub deadline: Timestamp,
    pub revoke_timeout: Timestamp,
    pub close_timeout: Timestamp,
    #[serde(rename = "type")]
    pub proposal_type: ProposalType,
    pub status: ProposalStatus,
}

impl ProposalAccount {
    /// Votes cast so far, both ways.
    pub fn participated(&self) -> u64 {
        u64::from(self.positive) + u64::from(self.negative)
    }
}

impl RecordSchema for ProposalAccount {
    const KIND: RecordKind = RecordKind::Proposal;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            submitter: cursor.field("submitter", &public_key())?,
            beneficiary: cursor.field("beneficiary", &public_key())?,
            bene_member: cursor.field("bene_member", &public_key())?,
            group: cursor.field("group", &public_key())?,
            positive: cursor.field("positive", &swapped::<u32>())?,
            negative: cursor.field("negative", &swapped::<u32>())?,
            limit: cursor.field("limit", &swapped::<u64>())?,
            deadline: cursor.field("deadline", &timestamp())?,
            revoke_timeout: cursor.field("revoke_timeout", &timestamp())?,
            close_timeout: cursor.field("close_timeout", &timestamp())?,
            proposal_type: cursor.field("type", &tagged::<ProposalType>())?,
            status: cursor.field("status", &tagged::<ProposalStatus>())?,
        })
    }
}
