use rand::{Error, RngCore, SeedableRng};

/// 线性同余随机数生成器
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`。
/// 质量一般，只用于可复现的洗牌：相同种子总是得到相同的牌序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// [0, 1) 区间的浮点数
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl Default for LcgRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RngCore for LcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LcgRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// 直接截取低 32 位作为初始状态
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = LcgRng::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = LcgRng::seed_from_u64(42);
        let mut b = LcgRng::from_seed(42u32.to_le_bytes());
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut rng = LcgRng::default();
        for _ in 0..1000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut a = LcgRng::new(7);
        let mut b = LcgRng::new(7);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let first = b.next_u32().to_le_bytes();
        let second = b.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..2]);
    }
}
