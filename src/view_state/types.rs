//! Core carousel newtypes

/// Index of a card within the deck. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CardIndex(usize);

impl CardIndex {
    /// Create a new CardIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }

    /// Get the next card index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous card index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Horizontal translation of the card strip in logical units.
///
/// Negative values scroll the strip left (later cards become visible).
/// The resting offset for card `i` is `-i * stride`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct OffsetPx(f64);

impl OffsetPx {
    /// Offset of the first card at rest.
    pub const ZERO: Self = Self(0.0);

    /// Create a new offset from a raw value.
    pub fn new(offset: f64) -> Self {
        Self(offset)
    }

    /// Get the raw value.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Clamp this offset to the inclusive range `[min, max]`.
    pub fn clamp(&self, min: f64, max: f64) -> Self {
        Self(self.0.clamp(min, max))
    }
}

/// Error returned when attempting to create a [`Stride`] from an invalid width.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("stride must be finite and > 0 (got {0})")]
pub struct InvalidStride(pub f64);

/// Distance between the left edges of adjacent cards (item width + gap),
/// in logical units. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Stride(f64);

impl Stride {
    /// Smart constructor that validates the stride is finite and > 0.
    pub fn new(stride: f64) -> Result<Self, InvalidStride> {
        if stride.is_finite() && stride > 0.0 {
            Ok(Self(stride))
        } else {
            Err(InvalidStride(stride))
        }
    }

    /// Get the raw value.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Resting offset for the card at `index`: `-index * stride`.
    pub fn offset_for(&self, index: CardIndex) -> OffsetPx {
        OffsetPx::new(-(index.get() as f64) * self.0)
    }
}
