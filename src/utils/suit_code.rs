/// 单一花色计数的紧凑编码
///
/// 9 个数字各自的数量每格占 4 位，打包进一个 `u64`，
/// 下标 0（数字 1）为最低位。用作花色搜索的记忆化键。
///
/// 每格可表示 0-15：手牌不受每种 4 张的限制，试摸时还会再多一张，
/// 14 张手牌加 1 张仍不会溢出到相邻格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuitCode(u64);

impl SuitCode {
    const BITS: u32 = 4;
    const MASK: u64 = 0b1111;

    pub fn encode(counts: &[u8; 9]) -> Self {
        let code = counts
            .iter()
            .rev()
            .fold(0u64, |acc, &c| (acc << Self::BITS) | (c as u64 & Self::MASK));
        Self(code)
    }

    pub fn decode(self) -> [u8; 9] {
        let mut counts = [0u8; 9];
        let mut code = self.0;
        for slot in counts.iter_mut() {
            *slot = (code & Self::MASK) as u8;
            code >>= Self::BITS;
        }
        counts
    }

    /// 是否为空花色
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
