use crate::bit_codec::BitLayout;

/// Options shared by hiding and retrieving
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// How text is laid out as bits.
    /// Both sides have to agree on it, a message hidden with
    /// [`BitLayout::Legacy`] cannot be read with [`BitLayout::FixedWidth`].
    pub bit_layout: BitLayout,

    /// If true a message that does not fit is cut off silently instead of
    /// failing with [`crate::SteganoError::InsufficientCapacity`].
    /// The terminator is then usually lost as well.
    pub allow_truncation: bool,
}

impl CodecOptions {
    pub fn with_bit_layout(mut self, bit_layout: BitLayout) -> Self {
        self.bit_layout = bit_layout;
        self
    }

    pub fn with_truncation_allowed(mut self, allow_truncation: bool) -> Self {
        self.allow_truncation = allow_truncation;
        self
    }
}
