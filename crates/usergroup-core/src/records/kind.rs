use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::discriminator::anchor_discriminator;
use super::layout::{self, DISCRIMINATOR_LEN};

/// Record layouts understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Group,
    Proposal,
    Member,
    Admin,
    Signature,
    SubmitProposalEvent,
    ExecuteProposalEvent,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Group,
        RecordKind::Proposal,
        RecordKind::Member,
        RecordKind::Admin,
        RecordKind::Signature,
        RecordKind::SubmitProposalEvent,
        RecordKind::ExecuteProposalEvent,
    ];

    /// Short name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Group => "group",
            RecordKind::Proposal => "proposal",
            RecordKind::Member => "member",
            RecordKind::Admin => "admin",
            RecordKind::Signature => "signature",
            RecordKind::SubmitProposalEvent => "submit-proposal-event",
            RecordKind::ExecuteProposalEvent => "execute-proposal-event",
        }
    }

    /// Type name in the on-chain program.
    pub fn type_name(self) -> &'static str {
        match self {
            RecordKind::Group => "GroupAccount",
            RecordKind::Proposal => "ProposalAccount",
            RecordKind::Member => "MemberAccount",
            RecordKind::Admin => "AdminAccount",
            RecordKind::Signature => "SignatureAccount",
            RecordKind::SubmitProposalEvent => "SubmitProposalEvent",
            RecordKind::ExecuteProposalEvent => "ExecuteProposalEvent",
        }
    }

    pub fn is_event(self) -> bool {
        matches!(
            self,
            RecordKind::SubmitProposalEvent | RecordKind::ExecuteProposalEvent
        )
    }

    /// Smallest buffer that can hold the record (events with an empty label).
    pub fn min_len(self) -> usize {
        match self {
            RecordKind::Group => layout::group::LEN,
            RecordKind::Proposal => layout::proposal::LEN,
            RecordKind::Member => layout::member::LEN,
            RecordKind::Admin => layout::admin::LEN,
            RecordKind::Signature => layout::signature::LEN,
            RecordKind::SubmitProposalEvent => layout::event::SUBMIT_PROPOSAL_MIN_LEN,
            RecordKind::ExecuteProposalEvent => layout::event::EXECUTE_PROPOSAL_MIN_LEN,
        }
    }

    /// Leading bytes the program writes for this record.
    pub fn discriminator(self) -> [u8; DISCRIMINATOR_LEN] {
        let namespace = if self.is_event() { "event" } else { "account" };
        anchor_discriminator(namespace, self.type_name())
    }

    /// Identify a record from its leading discriminator.
    ///
    /// # Examples
    /// ```
    /// use usergroup_core::RecordKind;
    ///
    /// let mut data = RecordKind::Member.discriminator().to_vec();
    /// data.resize(RecordKind::Member.min_len(), 0);
    /// assert_eq!(RecordKind::detect(&data), Some(RecordKind::Member));
    /// assert_eq!(RecordKind::detect(&[0u8; 4]), None);
    /// ```
    pub fn detect(data: &[u8]) -> Option<RecordKind> {
        let prefix = data.get(..DISCRIMINATOR_LEN)?;
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.discriminator() == prefix)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record kind: {0}")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.type_name() == s)
            .ok_or_else(|| UnknownRecordKind(s.to_string()))
    }
}
