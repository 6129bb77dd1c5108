//! Cyclic selection over a fixed, non-empty list.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Current position in a list of `len` items. The index is always in
/// `0..len`; `next`/`previous` wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    pub fn previous(&mut self) -> usize {
        self.active = (self.active + self.len - 1) % self.len;
        self.active
    }

    /// Jump to `index`. Out-of-range indices leave the position unchanged.
    pub fn select(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(self.active)
    }

    /// 1-based position label, e.g. `"2 / 6"`.
    pub fn position(&self) -> String {
        format!("{} / {}", self.active + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn starts_at_zero() {
        let c = Carousel::new(6).unwrap();
        assert_eq!(c.active(), 0);
        assert_eq!(c.len(), 6);
        assert!(!c.is_empty());
        assert_eq!(c.position(), "1 / 6");
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = Carousel::new(6).unwrap();
        assert_eq!(c.previous(), 5);
        assert_eq!(c.position(), "6 / 6");
    }

    #[test]
    fn next_from_last_wraps_to_zero() {
        let mut c = Carousel::new(3).unwrap();
        c.select(2).unwrap();
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn next_n_times_is_identity() {
        for len in 1..=8 {
            for start in 0..len {
                let mut c = Carousel::new(len).unwrap();
                c.select(start).unwrap();
                for _ in 0..len {
                    c.next();
                }
                assert_eq!(c.active(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn previous_inverts_next() {
        for len in 1..=8 {
            for start in 0..len {
                let mut c = Carousel::new(len).unwrap();
                c.select(start).unwrap();
                c.next();
                c.previous();
                assert_eq!(c.active(), start);
                c.previous();
                c.next();
                assert_eq!(c.active(), start);
            }
        }
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
    }

    #[test]
    fn select_in_range() {
        let mut c = Carousel::new(6).unwrap();
        assert_eq!(c.select(4), Ok(4));
        assert_eq!(c.active(), 4);
    }

    #[test]
    fn select_out_of_range_keeps_position() {
        let mut c = Carousel::new(6).unwrap();
        c.select(3).unwrap();
        assert_eq!(
            c.select(6),
            Err(CarouselError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(c.active(), 3);
    }
}
