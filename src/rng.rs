/// Mulberry32: a 32-bit bit-mixing generator.
///
/// Not cryptographic. The recurrence is fixed so that a given seed yields the
/// same sequence on every platform, which the tile shuffle relies on.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform index in `0..bound` via `floor(next * bound)`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        let j = (self.next_f64() * bound as f64) as usize;
        // next_f64 < 1.0, but guard against bound values beyond f64 precision
        j.min(bound.saturating_sub(1))
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// In-place Fisher–Yates shuffle, walking from the last slot down to 1.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}
