use crate::crypto::error::Result;

pub trait KeyExpansion {
    type Schedule;

    fn generate_round_keys(&self, key: &[u8]) -> Result<Self::Schedule>;
}
