use mdag_types::Digest;

/// A resettable digest accumulator.
///
/// This is the injected hash primitive: callers feed bytes with
/// [`write`](Accumulator::write), read the digest of everything written
/// since the last [`reset`](Accumulator::reset) with
/// [`sum`](Accumulator::sum), and reset to start over. `sum` does not
/// consume or clear the accumulated state.
pub trait Accumulator {
    /// Append bytes to the running digest.
    fn write(&mut self, data: &[u8]);

    /// Digest of all bytes written since the last reset.
    fn sum(&self) -> Vec<u8>;

    /// Discard accumulated state.
    fn reset(&mut self);
}

/// BLAKE3 accumulator producing 32-byte digests.
#[derive(Clone, Debug, Default)]
pub struct Blake3Accumulator {
    inner: blake3::Hasher,
}

impl Blake3Accumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for Blake3Accumulator {
    fn write(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn sum(&self) -> Vec<u8> {
        self.inner.finalize().as_bytes().to_vec()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Scoped digest helper around an [`Accumulator`].
///
/// Each call to [`digest`](ContentHasher::digest) starts from a reset
/// accumulator and leaves it reset, so no state carries over between
/// unrelated objects regardless of how the accumulator was handed in.
#[derive(Clone, Debug)]
pub struct ContentHasher<A> {
    accumulator: A,
}

impl<A: Accumulator> ContentHasher<A> {
    /// Take ownership of an accumulator. Any state it already holds is
    /// discarded before the first digest.
    pub fn new(accumulator: A) -> Self {
        Self { accumulator }
    }

    /// Digest one byte string in isolation.
    pub fn digest(&mut self, data: &[u8]) -> Digest {
        self.accumulator.reset();
        self.accumulator.write(data);
        let sum = self.accumulator.sum();
        self.accumulator.reset();
        Digest::from_vec(sum)
    }

    /// Verify that data produces the expected digest.
    pub fn verify(&mut self, data: &[u8], expected: &Digest) -> bool {
        self.digest(data) == *expected
    }

    /// Give the accumulator back.
    pub fn into_inner(self) -> A {
        self.accumulator
    }
}

impl ContentHasher<Blake3Accumulator> {
    pub fn blake3() -> Self {
        Self::new(Blake3Accumulator::new())
    }
}
