use super::cursor::ByteCursor;
use super::error::DecodeError;
use super::primitive::Decoder;

/// `count` consecutive elements of the same decoder, in input order.
#[derive(Debug, Clone, Copy)]
pub struct Array<D> {
    inner: D,
    count: usize,
}

pub fn array<D: Decoder>(inner: D, count: usize) -> Array<D> {
    Array { inner, count }
}

impl<D: Decoder> Decoder for Array<D> {
    type Output = Vec<D::Output>;

    fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<Self::Output, DecodeError> {
        let mut items = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let item = self
                .inner
                .decode(cursor)
                .map_err(|err| err.with_index(index))?;
            items.push(item);
        }
        Ok(items)
    }

    fn width(&self) -> Option<usize> {
        self.inner
            .width()
            .and_then(|width| width.checked_mul(self.count))
    }
}
