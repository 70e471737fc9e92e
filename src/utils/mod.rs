/// 工具模块
///
/// 计数编码和可复现随机数

pub mod lcg;
pub mod suit_code;

pub use lcg::LcgRng;
pub use suit_code::SuitCode;
