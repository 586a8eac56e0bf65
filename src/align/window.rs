use crate::config::WindowConfig;

/// Inclusive index range of source elements searched by the position-aware
/// tier, plus the index the node is predicted to sit at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub target: usize,
    pub half: usize,
    pub start: usize,
    pub end: usize,
}

impl SearchWindow {
    /// Derive the window for a node at `ratio` (outline position) and `level`
    /// over `n` source elements.
    ///
    /// Returns `None` when the ratio is unknown or there is nothing to search;
    /// the caller then goes straight to the global tier.
    pub fn derive(ratio: Option<f64>, level: u32, n: usize, cfg: &WindowConfig) -> Option<Self> {
        let ratio = ratio?;
        if n == 0 {
            return None;
        }
        let nf = n as f64;

        let (target, half) = if level <= 1 || ratio < cfg.start_ratio {
            (cfg.start_anchor * nf, cfg.edge_half_fraction * nf)
        } else if ratio > cfg.end_ratio {
            (cfg.end_anchor * nf, cfg.edge_half_fraction * nf)
        } else {
            ((ratio * (nf - 1.0)).round(), cfg.half_fraction * nf)
        };

        let target = (target as usize).min(n - 1);
        let half = (half as usize).max(cfg.min_half);

        Some(Self {
            target,
            half,
            start: target.saturating_sub(half),
            end: (target + half).min(n - 1),
        })
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    pub fn distance(&self, index: usize) -> usize {
        index.abs_diff(self.target)
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
