use crate::records::RecordKind;

/// Builds record buffers in wire order for tests.
pub(crate) struct LayoutWriter {
    buf: Vec<u8>,
}

impl LayoutWriter {
    pub(crate) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub(crate) fn discriminator(self, kind: RecordKind) -> Self {
        self.raw(&kind.discriminator())
    }

    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub(crate) fn u8(self, value: u8) -> Self {
        self.raw(&[value])
    }

    pub(crate) fn bool(self, value: bool) -> Self {
        self.u8(u8::from(value))
    }

    pub(crate) fn u32(self, value: u32) -> Self {
        self.raw(&value.to_le_bytes())
    }

    pub(crate) fn u64(self, value: u64) -> Self {
        self.raw(&value.to_le_bytes())
    }

    pub(crate) fn i64(self, value: i64) -> Self {
        self.raw(&value.to_le_bytes())
    }

    /// A public key filled with `fill`.
    pub(crate) fn key(self, fill: u8) -> Self {
        self.raw(&[fill; 32])
    }

    pub(crate) fn zeros(self, len: usize) -> Self {
        self.raw(&vec![0u8; len])
    }

    pub(crate) fn label(self, text: &str) -> Self {
        self.u32(text.len() as u32).raw(text.as_bytes())
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }
}
