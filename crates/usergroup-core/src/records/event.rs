//! Event payloads emitted by the program's proposal instructions.

use serde::Serialize;

use super::RecordSchema;
use super::kind::RecordKind;
use crate::decode::{
    ByteCursor, DecodeError, PublicKey, Timestamp, WireEnum, public_key, timestamp, utf8_string,
    wire_enum,
};

/// Proposal kind as carried by events, without payload.
///
/// Discriminants differ from the proposal account's tag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProposalEventType {
    Upgrade,
    Downgrade,
    Withdraw,
    UpdateGroup,
    ReElection,
}

impl WireEnum for ProposalEventType {
    const NAME: &'static str = "ProposalEventType";

    fn from_discriminant(value: u8) -> Option<Self> {
        match value {
            0 => Some(ProposalEventType::Upgrade),
            1 => Some(ProposalEventType::Downgrade),
            2 => Some(ProposalEventType::Withdraw),
            3 => Some(ProposalEventType::UpdateGroup),
            4 => Some(ProposalEventType::ReElection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProposalResult {
    Passed,
    Rejected,
}

impl WireEnum for ProposalResult {
    const NAME: &'static str = "ProposalResult";

    fn from_discriminant(value: u8) -> Option<Self> {
        match value {
            0 => Some(ProposalResult::Passed),
            1 => Some(ProposalResult::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitProposalEvent {
    pub ptype: ProposalEventType,
    pub submitter: PublicKey,
    pub submitter_member: PublicKey,
    pub beneficiary: PublicKey,
    pub bene_member: PublicKey,
    pub group: PublicKey,
    pub proposal: PublicKey,
    pub deadline: Timestamp,
    pub label: String,
}

impl RecordSchema for SubmitProposalEvent {
    const KIND: RecordKind = RecordKind::SubmitProposalEvent;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            ptype: cursor.field("ptype", &wire_enum::<ProposalEventType>())?,
            submitter: cursor.field("submitter", &public_key())?,
            submitter_member: cursor.field("submitter_member", &public_key())?,
            beneficiary: cursor.field("beneficiary", &public_key())?,
            bene_member: cursor.field("bene_member", &public_key())?,
            group: cursor.field("group", &public_key())?,
            proposal: cursor.field("proposal", &public_key())?,
            deadline: cursor.field("deadline", &timestamp())?,
            label: cursor.field("label", &utf8_string())?,
        })
    }
}

/// Emitted once a proposal is executed or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteProposalEvent {
    pub ptype: ProposalEventType,
    pub submitter: PublicKey,
    pub beneficiary: PublicKey,
    pub group: PublicKey,
    pub proposal: PublicKey,
    pub result: ProposalResult,
    pub label: String,
}

impl ExecuteProposalEvent {
    pub fn passed(&self) -> bool {
        self.result == ProposalResult::Passed
    }
}

impl RecordSchema for ExecuteProposalEvent {
    const KIND: RecordKind = RecordKind::ExecuteProposalEvent;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            ptype: cursor.field("ptype", &wire_enum::<ProposalEventType>())?,
            submitter: cursor.field("submitter", &public_key())?,
            beneficiary: cursor.field("beneficiary", &public_key())?,
            group: cursor.field("group", &public_key())?,
            proposal: cursor.field("proposal", &public_key())?,
            result: cursor.field("result", &wire_enum::<ProposalResult>())?,
            label: cursor.field("label", &utf8_string())?,
        })
    }
}
