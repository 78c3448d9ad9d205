use usergroup_core::decode::{ByteCursor, Decoder, array, public_key};
use usergroup_core::{
    DecodeErrorKind, DecodeOptions, ProposalStatus, ProposalType, Record, RecordKind, RecordSchema,
    SubmitProposalEvent, decode_record, decode_record_with,
};

struct Buf(Vec<u8>);

impl Buf {
    fn new(kind: RecordKind) -> Self {
        Buf(kind.discriminator().to_vec())
    }

    fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    fn key(self, fill: u8) -> Self {
        self.bytes(&[fill; 32])
    }
}

fn proposal(type_span: [u8; 80], status: u8) -> Vec<u8> {
    let mut status_span = [0u8; 16];
    status_span[0] = status;
    Buf::new(RecordKind::Proposal)
        .key(1)
        .key(2)
        .key(3)
        .key(4)
        .bytes(&3u32.to_le_bytes())
        .bytes(&1u32.to_le_bytes())
        .bytes(&250u64.to_le_bytes())
        .bytes(&1_642_650_232i64.to_le_bytes())
        .bytes(&0i64.to_le_bytes())
        .bytes(&(-1i64).to_le_bytes())
        .bytes(&type_span)
        .bytes(&status_span)
        .0
}

#[test]
fn withdraw_proposal_round_trip() {
    let mut span = [0u8; 80];
    span[0] = 4;
    span[8..40].fill(0xaa);
    span[40..72].fill(0xbb);
    span[72..80].copy_from_slice(&9_000_000u64.to_le_bytes());

    let data = proposal(span, 2);
    assert_eq!(data.len(), RecordKind::Proposal.min_len());
    let Record::Proposal(proposal) = decode_record(RecordKind::Proposal, &data).unwrap() else {
        panic!("expected proposal");
    };

    assert_eq!(
        proposal.proposal_type,
        ProposalType::Withdraw {
            mint: [0xaa; 32].into(),
            receiver: [0xbb; 32].into(),
            amount: 9_000_000,
        }
    );
    assert_eq!(proposal.status, ProposalStatus::Rejected);
    assert_eq!(
        proposal.deadline.to_rfc3339().as_deref(),
        Some("2022-01-20T03:43:52Z")
    );
    assert_eq!(proposal.close_timeout.seconds(), -1);
}

#[test]
fn update_group_proposal() {
    let mut span = [0u8; 80];
    span[0] = 2;
    span[4..8].copy_from_slice(&[0x64, 0, 0, 0]);
    let data = proposal(span, 0);
    let Record::Proposal(proposal) = decode_record(RecordKind::Proposal, &data).unwrap() else {
        panic!("expected proposal");
    };
    assert_eq!(
        proposal.proposal_type,
        ProposalType::UpdateGroup { max_manager: 100 }
    );
}

#[test]
fn unknown_proposal_type_fails_whole_record() {
    let mut span = [0u8; 80];
    span[0] = 5;
    let err = decode_record(RecordKind::Proposal, &proposal(span, 0)).unwrap_err();
    assert_eq!(err.field, "type");
    assert_eq!(
        err.kind,
        DecodeErrorKind::InvalidEnumValue {
            type_name: "ProposalType",
            value: 5
        }
    );
}

#[test]
fn admin_key_array_exact_and_short() {
    let keys: Vec<u8> = (0..10u8).flat_map(|i| [i; 32]).collect();

    let decoded = array(public_key(), 10)
        .decode(&mut ByteCursor::new(&keys))
        .unwrap();
    assert_eq!(decoded.len(), 10);
    assert_eq!(decoded[7].as_bytes(), &[7; 32]);

    let err = array(public_key(), 10)
        .decode(&mut ByteCursor::new(&keys[..319]))
        .unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn submit_event_label() {
    let data = Buf::new(RecordKind::SubmitProposalEvent)
        .bytes(&[1])
        .key(1)
        .key(2)
        .key(3)
        .key(4)
        .key(5)
        .key(6)
        .bytes(&1_642_650_232i64.to_le_bytes())
        .bytes(&5u32.to_le_bytes())
        .bytes(b"hello")
        .0;

    let event = SubmitProposalEvent::decode_with(&data, &DecodeOptions::strict()).unwrap();
    assert_eq!(event.label, "hello");

    let mut long = data.clone();
    long[209..213].copy_from_slice(&6u32.to_le_bytes());
    assert!(SubmitProposalEvent::decode(&long).unwrap_err().is_truncated());
}

#[test]
fn detect_then_decode() {
    let data = Buf::new(RecordKind::Signature)
        .key(9)
        .bytes(&0i64.to_le_bytes())
        .bytes(&1u64.to_le_bytes())
        .key(8)
        .bytes(&[0])
        .0;

    let kind = RecordKind::detect(&data).unwrap();
    assert_eq!(kind, RecordKind::Signature);
    let record = decode_record_with(kind, &data, &DecodeOptions::strict()).unwrap();
    let Record::Signature(signature) = record else {
        panic!("expected signature");
    };
    assert!(signature.is_agreed());
}

#[test]
fn records_serialize_to_plain_json() {
    let data = Buf::new(RecordKind::Member)
        .bytes(&[0, 1, 0])
        .key(0)
        .key(0)
        .key(0)
        .0;
    let record = decode_record(RecordKind::Member, &data).unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["position"], "Member");
    assert_eq!(value["in_promotion"], true);
    assert_eq!(value["funder"], "11111111111111111111111111111111");
}
