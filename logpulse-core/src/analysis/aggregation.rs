use crate::analysis::types::{ClassifiedLine, LevelCounts, RecencyBuffer, Severity};

/// Left-to-right fold over classified lines.
///
/// Counts are order independent; the two recency buffers are not, so lines
/// must be pushed in their original file order.
#[derive(Debug, Default)]
pub struct LevelAggregator {
    counts: LevelCounts,
    unknown_lines: u64,
    recent_errors: RecencyBuffer,
    recent_warnings: RecencyBuffer,
}

/// Final state of a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub counts: LevelCounts,
    pub unknown_lines: u64,
    pub recent_errors: RecencyBuffer,
    pub recent_warnings: RecencyBuffer,
}

impl Tally {
    pub fn total_lines(&self) -> u64 {
        self.unknown_lines + self.counts.total()
    }
}

impl LevelAggregator {
    pub fn new() -> Self {
        Self {
            counts: LevelCounts::default(),
            unknown_lines: 0,
            recent_errors: RecencyBuffer::new(),
            recent_warnings: RecencyBuffer::new(),
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        let ClassifiedLine::Entry(entry) = line else {
            self.unknown_lines += 1;
            return;
        };

        self.counts.increment(entry.level);

        match entry.level {
            Severity::Error => self.recent_errors.push(entry),
            Severity::Warning => self.recent_warnings.push(entry),
            _ => {}
        }
    }

    pub fn finish(self) -> Tally {
        Tally {
            counts: self.counts,
            unknown_lines: self.unknown_lines,
            recent_errors: self.recent_errors,
            recent_warnings: self.recent_warnings,
        }
    }
}

/// Fold a whole sequence in order.
pub fn fold<I>(lines: I) -> Tally
where
    I: IntoIterator<Item = ClassifiedLine>,
{
    let mut agg = LevelAggregator::new();
    for line in lines {
        agg.push(line);
    }
    agg.finish()
}
