use std::io::{Read, Result};

/// generic unveiling algorithm, the inverse seam of hiding
pub trait UnveilAlgorithm {
    fn unveil(&self, slot: u8) -> u8;
}

/// Reads the byte-slot back verbatim, matching [`WholeByteHide`].
///
/// [`WholeByteHide`]: crate::universal_encoder::WholeByteHide
pub struct WholeByteUnveil;

impl UnveilAlgorithm for WholeByteUnveil {
    fn unveil(&self, slot: u8) -> u8 {
        slot
    }
}

/// generic decoder, reads one payload byte per carrier byte-slot
pub struct UniversalDecoder<I, A> {
    input: I,
    algorithm: A,
}

impl<I, A> UniversalDecoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut read = 0;
        for (cell, slot) in buf.iter_mut().zip(self.input.by_ref()) {
            *cell = self.algorithm.unveil(slot);
            read += 1;
        }

        Ok(read)
    }
}
