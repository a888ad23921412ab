//! Linear coordinate mapping from value domains onto pixel ranges.

/// Map `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// Values outside the domain extrapolate linearly; nothing is clamped. The
/// domain must not be degenerate.
///
/// # Example
///
/// ```
/// use phasespace_core::map;
///
/// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map(-5.0, 0.0, 10.0, 0.0, 100.0), -50.0);
/// ```
#[inline]
pub fn map(value: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    debug_assert!(
        domain_min != domain_max,
        "degenerate mapping domain [{domain_min}, {domain_max}]"
    );
    range_min + (value - domain_min) * (range_max - range_min) / (domain_max - domain_min)
}

/// A fixed domain-to-range mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl Mapping {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        map(value, self.domain.0, self.domain.1, self.range.0, self.range.1)
    }
}
