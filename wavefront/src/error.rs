use glam::UVec2;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("split config must contain at least one slot")]
    NoSlots,

    #[error("work pool size must be greater than zero")]
    ZeroPoolSize,

    #[error("pass stride must be at least 4 (got {0})")]
    PassStrideTooSmall(u32),

    #[error(
        "film's pass stride ({actual}) doesn't match the engine's ({expected})"
    )]
    PassStrideMismatch { expected: u32, actual: u32 },

    #[error(
        "film of {len} floats doesn't consist of whole pixels of {pass_stride} \
         floats each"
    )]
    FilmLengthMismatch { len: usize, pass_stride: u32 },

    #[error(
        "film of {pixels} pixels, {pass_stride} floats each, is not \
         addressable with 32-bit offsets"
    )]
    FilmNotAddressable { pixels: u64, pass_stride: u32 },

    #[error("tile's row stride ({stride}) is smaller than its width ({width})")]
    StrideTooSmall { stride: u32, width: u32 },

    #[error(
        "tile addresses pixel #{0}, which lays before the beginning of the \
         buffers"
    )]
    NegativePixelIndex(i64),

    #[error(
        "tile of size {size} at {pos} doesn't fit within the image of size \
         {resolution}"
    )]
    TileOutsideImage {
        pos: UVec2,
        size: UVec2,
        resolution: UVec2,
    },

    #[error("invalid sample range: {start}..{end}")]
    InvalidSampleRange { start: u32, end: u32 },

    #[error(
        "tile consists of {0} work items, which is more than a render pass \
         supports"
    )]
    TooMuchWork(u64),

    #[error(
        "{buffer} buffer is too small: tile needs {needed} elements, got \
         {actual}"
    )]
    BufferTooSmall {
        buffer: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),
}
