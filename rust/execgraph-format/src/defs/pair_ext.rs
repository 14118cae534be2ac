use super::graph::{IntPair, IntPairRef, LongPair, LongPairRef};

impl IntPair {
    pub fn new(first: i32, second: i32) -> IntPair {
        IntPair { first, second }
    }
}

impl From<(i32, i32)> for IntPair {
    fn from((first, second): (i32, i32)) -> Self {
        IntPair::new(first, second)
    }
}

impl From<IntPair> for (i32, i32) {
    fn from(pair: IntPair) -> Self {
        (pair.first, pair.second)
    }
}

impl LongPair {
    pub fn new(first: i64, second: i64) -> LongPair {
        LongPair { first, second }
    }
}

impl From<(i64, i64)> for LongPair {
    fn from((first, second): (i64, i64)) -> Self {
        LongPair::new(first, second)
    }
}

impl From<LongPair> for (i64, i64) {
    fn from(pair: LongPair) -> Self {
        (pair.first, pair.second)
    }
}

impl IntPairRef<'_> {
    /// Reads both halves, substituting defaults for absent fields.
    pub fn as_tuple(&self) -> planus::Result<(i32, i32)> {
        Ok((self.first()?, self.second()?))
    }
}

impl LongPairRef<'_> {
    pub fn as_tuple(&self) -> planus::Result<(i64, i64)> {
        Ok((self.first()?, self.second()?))
    }
}

#[cfg(test)]
mod tests {
    use planus::ReadAsRoot;

    use super::*;

    #[test]
    fn test_pair_conversions() {
        let pair: IntPair = (3, 1).into();
        assert_eq!(pair, IntPair::new(3, 1));
        let tuple: (i64, i64) = LongPair::new(-5, 7).into();
        assert_eq!(tuple, (-5, 7));
    }

    #[test]
    fn test_default_pair_reads_as_zero() {
        let bytes = planus::Builder::new()
            .finish(&LongPair::default(), None)
            .to_vec();
        let pair = LongPairRef::read_as_root(&bytes).unwrap();
        assert_eq!(pair.as_tuple().unwrap(), (0, 0));

        let bytes = planus::Builder::new()
            .finish(&IntPair::new(0, 9), None)
            .to_vec();
        let pair = IntPairRef::read_as_root(&bytes).unwrap();
        assert_eq!(pair.as_tuple().unwrap(), (0, 9));
    }
}
