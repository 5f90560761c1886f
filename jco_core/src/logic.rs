mod bitwise;
mod cmp;
mod misc;
mod permute;
#[cfg(feature = "rand_support")]
mod rand;
mod std_ops;
mod strings;
mod sum;

pub use bitwise::BitwiseOp;
