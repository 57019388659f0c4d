use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::cipher_types::ContextConfig;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::utils::{chunk, strip_trailing_pad};
use log::{debug, trace};
use rayon::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Splits data into blocks, runs every block through the algorithm on its own and
/// reassembles the output in block order.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn CipherAlgorithm + Send + Sync>,
    config: ContextConfig,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn CipherAlgorithm + Send + Sync>, config: ContextConfig) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
            config,
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Pads the final block with the configured pad unit and encrypts block by block.
    ///
    /// Without a pad unit the input has to be a whole number of blocks.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.block_size();
        let blocks = chunk(data, block_size, self.config.padding.pad_unit());
        debug!(
            "encrypting {} bytes as {} blocks of {block_size}",
            data.len(),
            blocks.len()
        );

        Ok(self.process_blocks(&blocks, Direction::Encrypt)?.concat())
    }

    /// Decrypts block by block, then strips trailing pad units from the final block.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::MalformedBlock {
                expected: block_size,
                actual: data.len(),
            });
        }

        let blocks = chunk(data, block_size, None);
        debug!("decrypting {} blocks of {block_size}", blocks.len());
        let mut plaintext = self.process_blocks(&blocks, Direction::Decrypt)?.concat();

        if let Some(pad_unit) = self.config.padding.pad_unit() {
            // A padded run is never a whole block long.
            let stripped = strip_trailing_pad(&mut plaintext, pad_unit, block_size - 1);
            trace!("stripped {stripped} pad bytes");
        }

        Ok(plaintext)
    }

    fn process_blocks(&self, blocks: &[Vec<u8>], direction: Direction) -> Result<Vec<Vec<u8>>> {
        let apply = |block: &Vec<u8>| match direction {
            Direction::Encrypt => self.algorithm.encrypt_block(block),
            Direction::Decrypt => self.algorithm.decrypt_block(block),
        };

        if blocks.len() >= self.config.parallel_threshold {
            trace!("dispatching {} blocks to the rayon pool", blocks.len());
            blocks.par_iter().map(apply).collect()
        } else {
            blocks.iter().map(apply).collect()
        }
    }
}
