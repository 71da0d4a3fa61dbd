//! Special-pixel sentinel handling.
//!
//! The cube format reserves a handful of 32-bit float bit patterns near the
//! negative end of the representable range to mark pixels that are null,
//! outside the representable range, or instrument-saturated. Replacing them
//! with NaN lets downstream statistics skip invalid samples with plain
//! NaN-aware reductions.

use ring_common::Raster;

/// Bit pattern of a null (no data) pixel.
pub const NULL_BITS: u32 = 0xFF7F_FFFB;
/// Bit pattern of a pixel below the representable range.
pub const LOW_REPR_SAT_BITS: u32 = 0xFF7F_FFFC;
/// Bit pattern of a pixel below the instrument range.
pub const LOW_INSTR_SAT_BITS: u32 = 0xFF7F_FFFD;
/// Bit pattern of a pixel above the instrument range.
pub const HIGH_INSTR_SAT_BITS: u32 = 0xFF7F_FFFE;
/// Bit pattern of a pixel above the representable range.
pub const HIGH_REPR_SAT_BITS: u32 = 0xFF7F_FFFF;

/// The standard sentinel codes for 32-bit cubes.
///
/// Reader implementations that do not carry their own set can hand these to
/// [`replace_special_values`].
pub fn default_sentinels() -> Vec<f32> {
    [
        NULL_BITS,
        LOW_REPR_SAT_BITS,
        LOW_INSTR_SAT_BITS,
        HIGH_INSTR_SAT_BITS,
        HIGH_REPR_SAT_BITS,
    ]
    .iter()
    .map(|&bits| f32::from_bits(bits))
    .collect()
}

/// Replace every sentinel sample with NaN.
///
/// Sentinels are matched by exact bit pattern, not numeric comparison, since
/// the reserved codes are ordinary (if extreme) float values.
pub fn replace_special_values(samples: &Raster, sentinels: &[f32]) -> Raster {
    let sentinel_bits: Vec<u32> = sentinels.iter().map(|v| v.to_bits()).collect();
    let data = samples
        .data()
        .iter()
        .map(|&s| {
            if sentinel_bits.contains(&s.to_bits()) {
                f32::NAN
            } else {
                s
            }
        })
        .collect();
    // Shape is preserved, so the length check cannot fail
    Raster::new(samples.width(), samples.height(), data)
        .unwrap_or_else(|_| unreachable!("shape-preserving map"))
}
