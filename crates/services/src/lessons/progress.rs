/// Share of catalog lessons completed during this run, shown in the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogProgress {
    pub total: usize,
    pub completed: usize,
}

impl CatalogProgress {
    /// `completed / total`, `0.0` for an empty catalog.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    /// Whole-number percentage, rounded down.
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.completed * 100 / self.total
    }
}
