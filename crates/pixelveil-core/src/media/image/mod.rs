mod iterators;
pub mod overwrite_codec;

pub use overwrite_codec::OverwriteCodec;
