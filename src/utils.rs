//! Small helpers shared by the engine and the builders.

/// Block size used when none is configured: `ceil(sqrt(T))`, at least 1.
///
/// With this size the fill produces about √T block summaries, which keeps
/// the summary fold short without making each traced block tiny.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut b = (num_layers as f64).sqrt() as usize;
    // Float rounding can land one off either side of the true root.
    while b * b > num_layers {
        b -= 1;
    }
    while b * b < num_layers {
        b += 1;
    }
    b
}
