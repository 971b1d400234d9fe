//! Advisory `(percentage, message)` progress reporting.

/// Forwards progress to an optional callback, never letting the percentage
/// go backwards or past 100.
pub struct Progress<'a> {
    sink: Option<&'a mut dyn FnMut(u8, &str)>,
    last: u8,
}

impl<'a> Progress<'a> {
    /// Report to `sink`.
    pub fn new(sink: &'a mut dyn FnMut(u8, &str)) -> Self {
        Self {
            sink: Some(sink),
            last: 0,
        }
    }

    /// Discard all reports.
    pub fn silent() -> Self {
        Self {
            sink: None,
            last: 0,
        }
    }

    /// Emit a report. Lower percentages than the last one are raised to it.
    pub fn report(&mut self, percent: u8, message: &str) {
        let percent = percent.min(100).max(self.last);
        self.last = percent;
        if let Some(sink) = self.sink.as_mut() {
            sink(percent, message);
        }
    }

    /// Last percentage emitted.
    pub fn last(&self) -> u8 {
        self.last
    }
}

/// A slice of the 0-100 range handed to one unit of work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    start: f64,
    end: f64,
}

impl Span {
    pub const FULL: Span = Span {
        start: 0.0,
        end: 100.0,
    };

    pub fn new(start: f64, end: f64) -> Self {
        let start = start.clamp(0.0, 100.0);
        Self {
            start,
            end: end.clamp(start, 100.0),
        }
    }

    /// Percentage after `done` of `total` steps.
    pub fn at(&self, done: usize, total: usize) -> u8 {
        let fraction = if total == 0 {
            1.0
        } else {
            (done as f64 / total as f64).min(1.0)
        };
        (self.start + (self.end - self.start) * fraction)
            .floor()
            .min(100.0) as u8
    }

    /// The `index`-th of `count` equal parts of this span.
    pub fn part(&self, index: usize, count: usize) -> Span {
        let width = (self.end - self.start) / count.max(1) as f64;
        Span::new(
            self.start + width * index as f64,
            self.start + width * (index + 1) as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_capped() {
        let mut seen = Vec::new();
        {
            let mut sink = |p: u8, _: &str| seen.push(p);
            let mut progress = Progress::new(&mut sink);
            progress.report(10, "a");
            progress.report(5, "b");
            progress.report(250, "c");
            assert_eq!(progress.last(), 100);
        }
        assert_eq!(seen, vec![10, 10, 100]);
    }

    #[test]
    fn test_silent_progress_tracks_last() {
        let mut progress = Progress::silent();
        progress.report(42, "x");
        assert_eq!(progress.last(), 42);
    }

    #[test]
    fn test_span_at() {
        assert_eq!(Span::FULL.at(0, 4), 0);
        assert_eq!(Span::FULL.at(1, 4), 25);
        assert_eq!(Span::FULL.at(4, 4), 100);
        assert_eq!(Span::FULL.at(0, 0), 100);
    }

    #[test]
    fn test_span_part() {
        let second = Span::FULL.part(1, 2);
        assert_eq!(second.at(0, 1), 50);
        assert_eq!(second.at(1, 1), 100);

        let quarter = Span::new(20.0, 60.0).part(3, 4);
        assert_eq!(quarter.at(0, 1), 50);
        assert_eq!(quarter.at(1, 1), 60);
    }

    #[test]
    fn test_span_part_of_zero_count() {
        let part = Span::FULL.part(0, 0);
        assert_eq!(part.at(1, 1), 100);
    }
}
