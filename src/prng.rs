//! String hash and linear congruential generator.
//!
//! Neither is cryptographic.  They only have to be reproducible: the
//! same text always yields the same seed and the same seed always
//! yields the same sequence.

const LCG_MUL: u64 = 1103515245;
const LCG_INC: u64 = 12345;
const LCG_MASK: u64 = 0x7fff_ffff;

/// Multiplicative string hash `h = 31·h + c` over the UTF-16 code
/// units of `text`, with 32-bit two's-complement wraparound.  Returns
/// the absolute value, so `i32::MIN` gives 2³¹.
///
/// # Example
///
/// ```
/// use color_harmony::prng::hash;
/// assert_eq!(hash(""), 0);
/// assert_eq!(hash("a"), 97);
/// assert_eq!(hash("hello"), 99162322);
/// ```
pub fn hash(text: &str) -> u32 {
    let h = text.encode_utf16().fold(0i32, |h, c| {
        (h << 5).wrapping_sub(h).wrapping_add(c as i32)
    });
    h.unsigned_abs()
}

/// One step of the generator: `(seed · 1103515245 + 12345) mod 2³¹`.
#[inline]
pub fn next_seed(seed: u32) -> u32 {
    ((seed as u64).wrapping_mul(LCG_MUL).wrapping_add(LCG_INC) & LCG_MASK)
        as u32
}

/// An iterator yielding the successive values of [`next_seed`].  The
/// first item is `next_seed(seed)`, not `seed` itself.
#[derive(Clone, Debug)]
pub struct Seeds {
    seed: u32,
}

impl Seeds {
    pub fn new(seed: u32) -> Self { Seeds { seed } }

    /// Seed from [`hash`]`(text)`.
    pub fn from_text(text: &str) -> Self { Seeds::new(hash(text)) }

    /// The last value produced (or the initial seed).
    pub fn current(&self) -> u32 { self.seed }
}

impl Iterator for Seeds {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.seed = next_seed(self.seed);
        Some(self.seed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_known_values() {
        assert_eq!(hash("hello"), 99162322);
        assert_eq!(hash("world"), 113318802);
        assert_eq!(hash(""), 0);
    }

    #[test]
    fn hash_wraps_to_absolute_value() {
        // Long enough to overflow 32 bits many times.
        let h = hash("The quick brown fox jumps over the lazy dog");
        assert!(h <= 1 << 31);
        assert_eq!(h, hash("The quick brown fox jumps over the lazy dog"));
    }

    #[test]
    fn hash_uses_utf16_units() {
        // Outside the BMP: a surrogate pair, i.e. two units.
        let pair: u32 = 0xD83D * 31 + 0xDE00;
        assert_eq!(hash("\u{1F600}"), pair);
    }

    #[test]
    fn lcg_steps() {
        assert_eq!(next_seed(0), 12345);
        assert_eq!(next_seed(1), 1103527590);
        assert_eq!(next_seed(99162322), 238796195);
        for s in [0, 1, 12345, u32::MAX] {
            assert!(next_seed(s) < 1 << 31);
        }
    }

    #[test]
    fn seeds_iterator() {
        let v: Vec<_> = Seeds::new(0).take(2).collect();
        assert_eq!(v, vec![12345, next_seed(12345)]);
        let mut s = Seeds::from_text("hello");
        assert_eq!(s.current(), 99162322);
        assert_eq!(s.next(), Some(238796195));
        assert_eq!(s.current(), 238796195);
    }
}
