//! Field widths and record lengths (source of truth for the wire format).

pub const DISCRIMINATOR_LEN: usize = 8;
pub const PUBLIC_KEY_LEN: usize = crate::decode::PUBLIC_KEY_LEN;
pub const TIMESTAMP_LEN: usize = 8;
pub const LABEL_PREFIX_LEN: usize = crate::decode::PrefixedBytes::PREFIX_LEN;

pub mod group {
    use super::{DISCRIMINATOR_LEN, PUBLIC_KEY_LEN};

    pub const PADDING_LEN: usize = 2;
    /// seed, electing, freeze, rate (2), update.
    pub const FLAGS_LEN: usize = 6;
    /// max_manager, current_manager, current_member, proposals, index.
    pub const COUNTERS_LEN: usize = 5 * 4;

    pub const LEN: usize =
        DISCRIMINATOR_LEN + FLAGS_LEN + PADDING_LEN + COUNTERS_LEN + 2 * PUBLIC_KEY_LEN;
}

pub mod proposal {
    use super::{DISCRIMINATOR_LEN, PUBLIC_KEY_LEN, TIMESTAMP_LEN};

    pub const PROPOSAL_TYPE_SPAN: usize = 80;
    pub const STATUS_SPAN: usize = 16;
    /// Bytes from the start of the type span to `max_manager`.
    pub const UPDATE_GROUP_HEADER_LEN: usize = 4;
    /// Bytes from the start of the type span to `mint`.
    pub const WITHDRAW_HEADER_LEN: usize = 8;

    pub const LEN: usize = DISCRIMINATOR_LEN
        + 4 * PUBLIC_KEY_LEN
        + 4
        + 4
        + 8
        + 3 * TIMESTAMP_LEN
        + PROPOSAL_TYPE_SPAN
        + STATUS_SPAN;
}

pub mod member {
    use super::{DISCRIMINATOR_LEN, PUBLIC_KEY_LEN};

    pub const LEN: usize = DISCRIMINATOR_LEN + 3 + 3 * PUBLIC_KEY_LEN;
}

pub mod admin {
    use super::{DISCRIMINATOR_LEN, PUBLIC_KEY_LEN};

    pub const PADDING_LEN: usize = 1;
    pub const ADMIN_SLOTS: usize = 10;

    pub const LEN: usize =
        DISCRIMINATOR_LEN + 3 + PADDING_LEN + 4 + PUBLIC_KEY_LEN + ADMIN_SLOTS * PUBLIC_KEY_LEN;
}

pub mod signature {
    use super::{DISCRIMINATOR_LEN, PUBLIC_KEY_LEN, TIMESTAMP_LEN};

    pub const LEN: usize =
        DISCRIMINATOR_LEN + PUBLIC_KEY_LEN + TIMESTAMP_LEN + 8 + PUBLIC_KEY_LEN + 1;
}

pub mod event {
    use super::{DISCRIMINATOR_LEN, LABEL_PREFIX_LEN, PUBLIC_KEY_LEN, TIMESTAMP_LEN};

    /// Length with an empty label.
    pub const SUBMIT_PROPOSAL_MIN_LEN: usize =
        DISCRIMINATOR_LEN + 1 + 6 * PUBLIC_KEY_LEN + TIMESTAMP_LEN + LABEL_PREFIX_LEN;
    /// Length with an empty label.
    pub const EXECUTE_PROPOSAL_MIN_LEN: usize =
        DISCRIMINATOR_LEN + 1 + 4 * PUBLIC_KEY_LEN + 1 + LABEL_PREFIX_LEN;
}
