//! Decoder for the binary records of the user-group ledger program.
//!
//! Account snapshots and event payloads are fixed-layout byte buffers. This
//! crate turns them into typed values through composable decoders:
//! `decode` holds the generic layers (cursor, primitives, adapters, tagged
//! unions, arrays) and `records` the per-record schemas built from them.
//! Decoding is pure: no I/O, no shared state, no partial results.
//!
//! Invariants:
//! - A successful decode consumes exactly the record's declared length.
//! - Every failure names the field and absolute byte offset it occurred at.
//! - Out-of-range enum bytes are errors, never defaults.
//!
//! # Examples
//! ```
//! use usergroup_core::{Record, RecordKind, decode_record};
//!
//! let mut data = RecordKind::Group.discriminator().to_vec();
//! data.resize(RecordKind::Group.min_len(), 0);
//!
//! let record = decode_record(RecordKind::Group, &data)?;
//! assert_eq!(record.kind(), RecordKind::Group);
//! # Ok::<(), usergroup_core::DecodeError>(())
//! ```

use serde::Serialize;

pub mod decode;
pub mod records;

#[cfg(test)]
mod test_utils;

pub use decode::{DecodeError, DecodeErrorKind, PublicKey, Timestamp};
pub use records::{
    AdminAccount, DecodeOptions, ExecuteProposalEvent, GroupAccount, MemberAccount, ParticipateRate,
    Position, ProposalAccount, ProposalEventType, ProposalResult, ProposalStatus, ProposalType,
    Record, RecordKind, RecordSchema, SignType, SignatureAccount, SubmitProposalEvent,
    UnknownRecordKind, decode_record, decode_record_with,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// A decoded record together with where it came from.
///
/// # Examples
/// ```
/// use usergroup_core::{RecordKind, decode_record, make_report};
///
/// let mut data = RecordKind::Member.discriminator().to_vec();
/// data.resize(RecordKind::Member.min_len(), 0);
/// let record = decode_record(RecordKind::Member, &data)?;
///
/// let report = make_report("member.bin", data.len() as u64, record);
/// assert_eq!(report.kind, RecordKind::Member);
/// # Ok::<(), usergroup_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub kind: RecordKind,
    pub record: Record,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use usergroup_core::InputInfo;
///
/// let input = InputInfo {
///     path: "group.bin".to_string(),
///     bytes: 100,
/// };
/// assert_eq!(input.bytes, 100);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    /// Input path as provided by the caller.
    pub path: String,
    /// Decoded input size in bytes.
    pub bytes: u64,
}

pub fn make_report(input_path: &str, input_bytes: u64, record: Record) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "usergroup".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        kind: record.kind(),
        record,
    }
}
