/// Index into a fixed sequence of `len` slides.
///
/// Movement wraps around in both directions. A cursor over an empty sequence
/// stays at 0 and ignores every movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub const fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `index` (dot navigation). Out-of-range targets are ignored.
    pub const fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(7, 1)]
    #[case(2, 1)]
    #[case(1, 0)]
    fn next_from_start(#[case] len: usize, #[case] expected: usize) {
        let mut cursor = SlideCursor::new(len);

        assert_that!(cursor.next(), eq(expected));
    }

    #[googletest::test]
    fn wraps_in_both_directions() {
        let mut cursor = SlideCursor::new(3);

        expect_that!(cursor.prev(), eq(2));
        expect_that!(cursor.next(), eq(0));
        cursor.next();
        cursor.next();
        expect_that!(cursor.next(), eq(0));
    }

    #[googletest::test]
    fn two_slides_toggle() {
        let mut cursor = SlideCursor::new(2);

        expect_that!(cursor.next(), eq(1));
        expect_that!(cursor.next(), eq(0));
        expect_that!(cursor.prev(), eq(1));
        expect_that!(cursor.prev(), eq(0));
    }

    #[googletest::test]
    fn empty_sequence_is_inert() {
        let mut cursor = SlideCursor::new(0);

        expect_that!(cursor.next(), eq(0));
        expect_that!(cursor.prev(), eq(0));
        expect_that!(cursor.go_to(0), eq(false));
        expect_that!(cursor.is_empty(), eq(true));
    }

    #[googletest::test]
    fn go_to_rejects_out_of_range() {
        let mut cursor = SlideCursor::new(7);

        expect_that!(cursor.go_to(4), eq(true));
        expect_that!(cursor.index(), eq(4));
        expect_that!(cursor.go_to(7), eq(false));
        expect_that!(cursor.index(), eq(4));
    }
}
