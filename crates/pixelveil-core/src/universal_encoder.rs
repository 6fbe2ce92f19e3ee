use std::io::{Result, Write};

/// generic concealing algorithm, decides how one payload byte lands in a
/// carrier byte-slot
pub trait HideAlgorithm {
    fn hide(&self, slot: &mut u8, payload: u8);
}

/// Overwrites the whole byte-slot with the payload byte. The carrier value
/// is discarded, trading fidelity for one full byte of capacity per slot.
pub struct WholeByteHide;

impl HideAlgorithm for WholeByteHide {
    fn hide(&self, slot: &mut u8, payload: u8) {
        *slot = payload;
    }
}

/// generic encoder, spends one carrier byte-slot per payload byte
pub struct UniversalEncoder<I, A> {
    input: I,
    algorithm: A,
}

impl<I, A> UniversalEncoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<'c, I, A> Write for UniversalEncoder<I, A>
where
    I: Iterator<Item = &'c mut u8>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut written = 0;
        for (payload, slot) in buf.iter().zip(self.input.by_ref()) {
            self.algorithm.hide(slot, *payload);
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
