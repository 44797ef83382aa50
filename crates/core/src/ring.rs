use crate::{
    error::{FrameTimesError, Result},
    sample::Sample,
    summary::{summarize, Summary},
};

/// Fixed-capacity circular store of [`Sample`]s.
///
/// All slots start out as `Sample::default()` (zero CPU, zero GPU) and stay
/// part of the window until overwritten, so every reduction covers exactly
/// `capacity` samples.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    slots:  Box<[Sample]>,
    cursor: usize,
}

impl RingBuffer {
    /// Allocate `capacity` zeroed slots with the cursor at slot 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(FrameTimesError::Configuration(
                "ring buffer capacity must be at least 1".into(),
            ));
        }

        Ok(Self {
            slots:  vec![Sample::default(); capacity].into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Overwrite the slot under the cursor and advance it, wrapping at the end.
    #[inline]
    pub fn write(&mut self, sample: Sample) {
        self.slots[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Every slot in storage order, placeholders included.
    #[inline]
    pub fn snapshot_all(&self) -> &[Sample] {
        &self.slots
    }

    /// Slots ordered oldest → newest, starting at the cursor.
    pub fn iter_chronological(&self) -> impl Iterator<Item = &Sample> + '_ {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer.iter())
    }

    /// Reduce the whole window to a [`Summary`].
    pub fn summary(&self, trim_outliers: bool) -> Result<Summary> {
        summarize(self.snapshot_all(), trim_outliers)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the slot the next [`write`](Self::write) lands in.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, count: usize) -> RingBuffer {
        let mut ring = RingBuffer::new(capacity).unwrap();
        for i in 0..count {
            ring.write(Sample::new(i as f64, (i * 10) as f64));
        }
        ring
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            RingBuffer::new(0),
            Err(FrameTimesError::Configuration(_))
        ));
    }

    #[test]
    fn starts_zeroed() {
        let ring = RingBuffer::new(5).unwrap();
        assert_eq!(ring.capacity(), 5);
        assert_eq!(ring.cursor(), 0);
        assert!(ring.snapshot_all().iter().all(|s| *s == Sample::default()));
    }

    #[test]
    fn full_write_cycle_keeps_insertion_order() {
        for capacity in 1..=8 {
            let ring = filled(capacity, capacity);
            let expected: Vec<Sample> = (0..capacity)
                .map(|i| Sample::new(i as f64, (i * 10) as f64))
                .collect();
            assert_eq!(ring.snapshot_all(), expected.as_slice());
            assert_eq!(ring.cursor(), 0);
        }
    }

    #[test]
    fn overwrite_keeps_only_last_n() {
        let ring = filled(4, 7);
        let mut cpu: Vec<f64> = ring.snapshot_all().iter().map(|s| s.cpu).collect();
        cpu.sort_by(f64::total_cmp);
        assert_eq!(cpu, vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ring.cursor(), 3);
    }

    #[test]
    fn chronological_iteration_starts_at_oldest() {
        let ring = filled(4, 6);
        let cpu: Vec<f64> = ring.iter_chronological().map(|s| s.cpu).collect();
        assert_eq!(cpu, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn partial_fill_leaves_placeholders() {
        let ring = filled(4, 2);
        assert_eq!(ring.snapshot_all()[2], Sample::default());
        assert_eq!(ring.snapshot_all()[3], Sample::default());
    }
}
