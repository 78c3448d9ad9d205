use serde::Serialize;

use super::RecordSchema;
use super::kind::RecordKind;
use super::layout::admin::{ADMIN_SLOTS, PADDING_LEN};
use crate::decode::{
    ByteCursor, DecodeError, PublicKey, Skip, array, boolean, public_key, swapped, u8,
};

/// Administrator registry of the program.
///
/// `admins` always holds every slot; only the first `current` are in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminAccount {
    pub seed: u8,
    pub current: u8,
    pub initialized: bool,
    pub group: u32,
    pub token_mint: PublicKey,
    pub admins: Vec<PublicKey>,
}

impl AdminAccount {
    /// Occupied slots, clamped to the slot count.
    pub fn active_admins(&self) -> &[PublicKey] {
        let len = usize::from(self.current).min(self.admins.len());
        &self.admins[..len]
    }

    pub fn is_admin(&self, key: &PublicKey) -> bool {
        self.active_admins().contains(key)
    }

    pub fn is_full(&self) -> bool {
        usize::from(self.current) >= ADMIN_SLOTS
    }
}

impl RecordSchema for AdminAccount {
    const KIND: RecordKind = RecordKind::Admin;

    fn decode_fields(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let seed = cursor.field("seed", &u8())?;
        let current = cursor.field("current", &u8())?;
        let initialized = cursor.field("initialized", &boolean())?;
        cursor.field("padding", &Skip::new(PADDING_LEN))?;
        let group = cursor.field("group", &swapped::<u32>())?;
        let token_mint = cursor.field("token_mint", &public_key())?;
        let admins = cursor.field("admins", &array(public_key(), ADMIN_SLOTS))?;

        Ok(Self {
            seed,
            current,
            initialized,
            group,
            token_mint,
            admins,
        })
    }
}
