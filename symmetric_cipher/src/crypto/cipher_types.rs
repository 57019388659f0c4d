pub const DEFAULT_PAD_UNIT: u8 = 0x00;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Filler used to complete a short final block.
///
/// This is a fixed filler value, not PKCS#7: decryption strips trailing bytes equal to the
/// pad unit from the final block, so genuine trailing data equal to it is lost as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    None,
    PadUnit(u8),
}

impl PaddingMode {
    pub fn pad_unit(&self) -> Option<u8> {
        match self {
            PaddingMode::None => None,
            PaddingMode::PadUnit(unit) => Some(*unit),
        }
    }
}

impl Default for PaddingMode {
    fn default() -> Self {
        PaddingMode::PadUnit(DEFAULT_PAD_UNIT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub padding: PaddingMode,
    /// Block count at which blocks are handed to the rayon pool instead of a plain loop.
    pub parallel_threshold: usize,
}

impl ContextConfig {
    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            padding: PaddingMode::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
