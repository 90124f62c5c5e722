//! Sequence fan-out over a registry.

use super::MapperRegistry;
use convey_core::{ConvertError, Value};
use futures::{Stream, StreamExt, future};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Iterator returned by [`MapperRegistry::convert_all`].
///
/// Yields one `Result` per input, in input order. After the first `Err` the
/// iterator is exhausted: the remaining inputs are never pulled.
pub struct ConvertIter<'r, D, S, I> {
    registry: &'r MapperRegistry,
    inner: I,
    failed: bool,
    _phantom: PhantomData<fn(S) -> D>,
}

impl<'r, D, S, I> ConvertIter<'r, D, S, I> {
    pub(super) fn new(registry: &'r MapperRegistry, inner: I) -> Self {
        Self {
            registry,
            inner,
            failed: false,
            _phantom: PhantomData,
        }
    }
}

impl<D, S, I> Iterator for ConvertIter<'_, D, S, I>
where
    D: Value,
    S: Value,
    I: Iterator<Item = S>,
{
    type Item = Result<D, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let value = self.inner.next()?;
        let converted = self.registry.convert::<D, S>(value);
        self.failed = converted.is_err();
        Some(converted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // an error may cut the sequence short
            (0, self.inner.size_hint().1)
        }
    }
}

impl<D, S, I> FusedIterator for ConvertIter<'_, D, S, I>
where
    D: Value,
    S: Value,
    I: Iterator<Item = S>,
{
}

impl MapperRegistry {
    /// Convert every element of `values` as it arrives.
    ///
    /// Same rule as [`convert_all`](Self::convert_all): once an error has been
    /// yielded the stream ends and later elements are not converted.
    pub fn convert_stream<'r, D, S, St>(
        &'r self,
        values: St,
    ) -> impl Stream<Item = Result<D, ConvertError>> + 'r
    where
        D: Value,
        S: Value,
        St: Stream<Item = S> + 'r,
    {
        values.scan(false, move |failed, value| {
            if *failed {
                return future::ready(None);
            }
            let converted = self.convert::<D, S>(value);
            *failed = converted.is_err();
            future::ready(Some(converted))
        })
    }
}
