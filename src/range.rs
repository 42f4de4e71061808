/// Column span of a field on one physical MRZ line.
///
/// `end` is exclusive. Ranges are fixed when a layout is defined and never
/// change afterwards, hence the private fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    start: usize,
    end: usize,
    line: usize,
}

impl Range {
    pub const fn new(start: usize, end: usize, line: usize) -> Self {
        assert!(start < end, "MRZ range must not be empty");
        Self { start, end, line }
    }

    /// Single column range, used for check digits and one character fields.
    pub const fn at(column: usize, line: usize) -> Self {
        Self::new(column, column + 1, line)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Checks that the range lies inside a `lines` × `width` zone.
    pub const fn fits(&self, lines: usize, width: usize) -> bool {
        self.line < lines && self.end <= width
    }
}

#[cfg(test)]
mod tests {
    use super::Range;

    #[test]
    fn single_column() {
        let r = Range::at(9, 1);
        assert_eq!((r.start(), r.end(), r.line(), r.len()), (9, 10, 1, 1));
    }

    #[test]
    fn fits_zone() {
        assert!(Range::new(5, 44, 0).fits(2, 44));
        assert!(!Range::new(5, 45, 0).fits(2, 44));
        assert!(!Range::new(0, 9, 2).fits(2, 44));
    }

    #[test]
    #[should_panic]
    fn empty_range() {
        let _ = Range::new(4, 4, 0);
    }
}
