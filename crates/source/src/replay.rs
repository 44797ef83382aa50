use crate::SampleSource;
use frametimes_core::Sample;

/// Plays back a fixed list of samples, one per tick, then finishes.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    samples: std::vec::IntoIter<Sample>,
}

impl ReplaySource {
    pub fn new(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self {
            samples: samples.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Samples not yet played.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl SampleSource for ReplaySource {
    fn latest(&mut self) -> Option<Sample> {
        self.samples.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_in_order_then_finishes() {
        let mut source = ReplaySource::new([Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.latest(), Some(Sample::new(1.0, 2.0)));
        assert_eq!(source.latest(), Some(Sample::new(3.0, 4.0)));
        assert_eq!(source.latest(), None);
    }
}
