//! Named filter registry.
//!
//! Filters are resolved by case-insensitive name against an ordered registry.
//! Resolution goes through a lookup table keyed by the uppercased name, built
//! once at construction; when two entries collide case-insensitively the
//! first-registered one wins. Registration order is also the order the help
//! transcript lists filter names in.

use std::collections::HashMap;

/// A built-in image transform operation.
///
/// The resampling variants map onto the `image` crate's filter types; the
/// service layer owns that mapping. `Scale2x` is the EPX pixel-art doubler
/// implemented in-house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Nearest-neighbor resample.
    Pixel,
    /// Triangle (bilinear) resample.
    Smooth,
    /// Catmull-Rom resample.
    Catrom,
    /// Gaussian resample.
    Gauss,
    /// Lanczos3 resample.
    Lanczos,
    /// EPX/Scale2x pixel-art doubling.
    Scale2x,
}

impl FilterKind {
    /// Scale factor applied per axis when both target dimensions are auto.
    ///
    /// Resamplers have no natural scale and keep the source size; Scale2x
    /// doubles.
    pub fn natural_scale(self) -> u32 {
        match self {
            FilterKind::Scale2x => 2,
            _ => 1,
        }
    }
}

/// Ordered collection of named filters with case-insensitive lookup.
pub struct FilterRegistry {
    entries: Vec<(String, FilterKind)>,
    /// Uppercased name → index into `entries`, first registration wins.
    by_name: HashMap<String, usize>,
}

impl FilterRegistry {
    /// Build a registry from `(name, kind)` pairs, preserving order.
    pub fn from_entries(entries: Vec<(String, FilterKind)>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, (name, _)) in entries.iter().enumerate() {
            by_name.entry(name.to_uppercase()).or_insert(i);
        }
        Self { entries, by_name }
    }

    /// The stock registry shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_entries(
            [
                ("pixel", FilterKind::Pixel),
                ("smooth", FilterKind::Smooth),
                ("catrom", FilterKind::Catrom),
                ("gauss", FilterKind::Gauss),
                ("lanczos", FilterKind::Lanczos),
                ("scale2x", FilterKind::Scale2x),
            ]
            .into_iter()
            .map(|(n, k)| (n.to_string(), k))
            .collect(),
        )
    }

    /// Resolve a filter name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<FilterKind> {
        self.by_name
            .get(&name.to_uppercase())
            .map(|&i| self.entries[i].1)
    }

    /// Registered names in registration order, for the help transcript.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
