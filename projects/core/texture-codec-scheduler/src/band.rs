//! Row band partitioning.

use core::ops::Range;

/// A contiguous range of rows processed as one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Band {
    /// Position of this band, counting from the top of the surface.
    pub index: usize,
    /// First row covered by the band.
    pub start_row: usize,
    /// Number of rows covered by the band, never zero.
    pub row_count: usize,
}

impl Band {
    /// One past the last row covered by the band.
    #[inline]
    pub fn end_row(&self) -> usize {
        self.start_row + self.row_count
    }

    /// The rows covered by the band.
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row()
    }
}

/// Splits `height` rows into bands of `rows_per_band` rows.
///
/// Produces `ceil(height / rows_per_band)` bands; the last band holds the remainder and is never
/// empty. A `rows_per_band` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use texture_codec_scheduler::partition;
///
/// let bands = partition(37, 24);
/// assert_eq!(bands.len(), 2);
/// assert_eq!(bands[0].rows(), 0..24);
/// assert_eq!(bands[1].rows(), 24..37);
/// ```
pub fn partition(height: usize, rows_per_band: usize) -> Vec<Band> {
    let rows_per_band = rows_per_band.max(1);
    let band_count = height.div_ceil(rows_per_band);
    (0..band_count)
        .map(|index| {
            let start_row = index * rows_per_band;
            Band {
                index,
                start_row,
                row_count: rows_per_band.min(height - start_row),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(37, 24, 2)]
    #[case(48, 24, 2)]
    #[case(1, 24, 1)]
    #[case(24, 1, 24)]
    #[case(1000, 7, 143)]
    #[case(0, 16, 0)]
    fn band_count_is_ceiling(#[case] height: usize, #[case] rows: usize, #[case] count: usize) {
        assert_eq!(partition(height, rows).len(), count);
    }

    #[test]
    fn scenario_37_rows_in_bands_of_24() {
        let bands = partition(37, 24);
        assert_eq!(
            bands,
            vec![
                Band {
                    index: 0,
                    start_row: 0,
                    row_count: 24
                },
                Band {
                    index: 1,
                    start_row: 24,
                    row_count: 13
                },
            ]
        );
    }

    #[test]
    fn bands_are_contiguous_and_cover_every_row() {
        for height in 1..200 {
            for rows in 1..40 {
                let bands = partition(height, rows);
                let mut next = 0;
                for (index, band) in bands.iter().enumerate() {
                    assert_eq!(band.index, index);
                    assert_eq!(band.start_row, next);
                    assert!(band.row_count > 0 && band.row_count <= rows);
                    next = band.end_row();
                }
                assert_eq!(next, height);

                let last = bands.last().unwrap();
                assert_eq!(last.row_count, height - (bands.len() - 1) * rows);
            }
        }
    }

    #[test]
    fn zero_rows_per_band_is_one() {
        assert_eq!(partition(3, 0).len(), 3);
    }
}
