//! Settings for surface decode and encode.

use texture_codec_common::block_codec::{ColorDecodeMode, EncodeParams};
use texture_codec_scheduler::SchedulerSettings;

/// Options for [`decode_with_options`](crate::decode_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Palette interpolation rounding used by BC1-BC3.
    pub color_mode: ColorDecodeMode,
}

impl DecodeOptions {
    /// Create options with the default [`ColorDecodeMode::Ideal`] interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette interpolation rounding.
    pub fn color_mode(mut self, color_mode: ColorDecodeMode) -> Self {
        self.color_mode = color_mode;
        self
    }
}

/// Options for [`encode`](crate::encode).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodeOptions {
    /// Alpha threshold and channel weights passed to every block encoder.
    pub params: EncodeParams,
    /// Multiply colour by alpha before encoding.
    pub premultiply_alpha: bool,
    /// Worker count and band height.
    pub scheduler: SchedulerSettings,
}

impl EncodeOptions {
    /// Create options with default encoder parameters and scheduler settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alpha below which 1-bit alpha formats encode a texel as transparent.
    pub fn alpha_threshold(mut self, alpha_threshold: f32) -> Self {
        self.params.alpha_threshold = alpha_threshold;
        self
    }

    /// Set the per-channel error weights, in R, G, B, A order.
    pub fn channel_weights(mut self, channel_weights: [f32; 4]) -> Self {
        self.params.channel_weights = channel_weights;
        self
    }

    /// Set whether colour is premultiplied by alpha before encoding.
    pub fn premultiply_alpha(mut self, premultiply_alpha: bool) -> Self {
        self.premultiply_alpha = premultiply_alpha;
        self
    }

    /// Set the maximum number of encoder threads. `1` encodes on the calling thread.
    pub fn max_workers(mut self, max_workers: usize) -> Self {
        self.scheduler = self.scheduler.with_max_workers(max_workers);
        self
    }

    /// Set the number of block rows (texel rows for uncompressed formats) per band.
    pub fn rows_per_band(mut self, rows_per_band: usize) -> Self {
        self.scheduler = self.scheduler.with_rows_per_band(rows_per_band);
        self
    }
}
