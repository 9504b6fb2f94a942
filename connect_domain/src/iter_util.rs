use crate::error::*;

use anyhow::anyhow;

/// Iterator extension for extracting a single item
pub trait Single {
    type Item;

    /// Extract zero or one item from the iterator, erroring if there is more than a single item in it.
    fn single_or_none(&mut self) -> CcResult<Option<Self::Item>>;
}

impl<I: Iterator> Single for I {
    type Item = I::Item;

    fn single_or_none(&mut self) -> CcResult<Option<Self::Item>> {
        match (self.next(), self.next()) {
            (None, None) => Ok(None),
            (Some(item), None) => Ok(Some(item)),
            (_, Some(_)) => Err(anyhow!("Expected a single row, got more than one").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::*;

    #[test]
    fn single_or_none_rejects_duplicates() {
        assert_matches!(vec![1].into_iter().single_or_none(), Ok(Some(1)));
        assert_matches!(Vec::<i32>::new().into_iter().single_or_none(), Ok(None));
        assert_matches!(vec![1, 2].into_iter().single_or_none(), Err(CcError::Anyhow(_)));
    }
}
