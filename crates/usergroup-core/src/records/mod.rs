//! Record schemas of the user-group program.
//!
//! Each schema is an ordered list of named fields decoded against one
//! cursor, after an 8-byte discriminator:
//! - `layout`: widths and lengths (source of truth)
//! - one module per record: domain type plus its field list
//! - `kind`: record selection and discriminator detection
//!
//! Decoding is all-or-nothing: the first failing field aborts the record
//! and the error names that field and its absolute offset.

pub mod admin;
pub mod discriminator;
pub mod event;
pub mod group;
pub mod kind;
pub mod layout;
pub mod member;
pub mod proposal;
pub mod signature;

use serde::Serialize;

use crate::decode::{ByteCursor, Bytes, DecodeError, DecodeErrorKind};

pub use admin::AdminAccount;
pub use event::{ExecuteProposalEvent, ProposalEventType, ProposalResult, SubmitProposalEvent};
pub use group::{GroupAccount, ParticipateRate};
pub use kind::{RecordKind, UnknownRecordKind};
pub use member::{MemberAccount, Position};
pub use proposal::{ProposalAccount, ProposalStatus, ProposalType};
pub use signature::{SignType, SignatureAccount};

use layout::DISCRIMINATOR_LEN;

/// Decoding switches, passed explicitly by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject buffers whose discriminator is not the one the program writes
    /// for the requested record kind.
    pub verify_discriminator: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            verify_discriminator: true,
        }
    }
}

/// A record layout: discriminator followed by an ordered field list.
pub trait RecordSchema: Sized {
    const KIND: RecordKind;

    /// Decode the fields that follow the discriminator.
    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError>;

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(data, &DecodeOptions::default())
    }

    fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        let mut cursor = ByteCursor::new(data);
        let actual = cursor.field("discriminator", &Bytes::<DISCRIMINATOR_LEN>)?;
        if options.verify_discriminator {
            let expected = Self::KIND.discriminator();
            if actual != expected {
                return Err(DecodeError::new(
                    DecodeErrorKind::DiscriminatorMismatch { expected, actual },
                    0,
                )
                .with_field("discriminator"));
            }
        }

        let record = Self::decode_fields(&mut cursor)?;
        if cursor.remaining() > 0 {
            tracing::trace!(
                kind = %Self::KIND,
                trailing = cursor.remaining(),
                "ignoring bytes past end of record"
            );
        }
        Ok(record)
    }
}

/// Any decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Group(GroupAccount),
    Proposal(ProposalAccount),
    Member(MemberAccount),
    Admin(AdminAccount),
    Signature(SignatureAccount),
    SubmitProposalEvent(SubmitProposalEvent),
    ExecuteProposalEvent(ExecuteProposalEvent),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Group(_) => RecordKind::Group,
            Record::Proposal(_) => RecordKind::Proposal,
            Record::Member(_) => RecordKind::Member,
            Record::Admin(_) => RecordKind::Admin,
            Record::Signature(_) => RecordKind::Signature,
            Record::SubmitProposalEvent(_) => RecordKind::SubmitProposalEvent,
            Record::ExecuteProposalEvent(_) => RecordKind::ExecuteProposalEvent,
        }
    }
}

/// Decode `data` as a record of the given kind.
///
/// # Examples
/// ```
/// use usergroup_core::{Record, RecordKind, decode_record};
///
/// let mut data = RecordKind::Member.discriminator().to_vec();
/// data.extend_from_slice(&[1, 0, 1]);
/// data.extend_from_slice(&[0u8; 96]);
///
/// let record = decode_record(RecordKind::Member, &data)?;
/// let Record::Member(member) = record else { unreachable!() };
/// assert!(member.is_manager());
/// assert!(member.in_withdraw);
/// # Ok::<(), usergroup_core::DecodeError>(())
/// ```
pub fn decode_record(kind: RecordKind, data: &[u8]) -> Result<Record, DecodeError> {
    decode_record_with(kind, data, &DecodeOptions::default())
}

/// Decode `data` as a record of the given kind with explicit options.
pub fn decode_record_with(
    kind: RecordKind,
    data: &[u8],
    options: &DecodeOptions,
) -> Result<Record, DecodeError> {
    tracing::debug!(%kind, len = data.len(), "decoding record");
    let record = match kind {
        RecordKind::Group => GroupAccount::decode_with(data, options).map(Record::Group),
        RecordKind::Proposal => ProposalAccount::decode_with(data, options).map(Record::Proposal),
        RecordKind::Member => MemberAccount::decode_with(data, options).map(Record::Member),
        RecordKind::Admin => AdminAccount::decode_with(data, options).map(Record::Admin),
        RecordKind::Signature => {
            SignatureAccount::decode_with(data, options).map(Record::Signature)
        }
        RecordKind::SubmitProposalEvent => {
            SubmitProposalEvent::decode_with(data, options).map(Record::SubmitProposalEvent)
        }
        RecordKind::ExecuteProposalEvent => {
            ExecuteProposalEvent::decode_with(data, options).map(Record::ExecuteProposalEvent)
        }
    }?;
    tracing::debug!(%kind, "decoded record");
    Ok(record)
}
