use symmetric_cipher::crypto::cipher_types::ContextConfig;

/// Per-family block processing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub feistel: ContextConfig,
    pub spn: ContextConfig,
}

impl EngineConfig {
    pub fn with_feistel(mut self, feistel: ContextConfig) -> Self {
        self.feistel = feistel;
        self
    }

    pub fn with_spn(mut self, spn: ContextConfig) -> Self {
        self.spn = spn;
        self
    }
}
