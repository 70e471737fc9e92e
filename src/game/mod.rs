/// 对局分析模块
///
/// 包含向听计算、鸣牌、打牌建议和计分

pub mod advisor;
pub mod call;
pub mod config;
pub mod constants;
pub mod scoring;
pub mod shanten;
