use super::constants::{BLOOM_RADIUS, BLOOM_THRESHOLD, RGB_SHIFT_ANGLE};
use smallvec::SmallVec;

/// One full-screen step of the post-processing chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostStage {
    /// Draw the scene into the first offscreen target.
    Render,
    /// Offset red and blue channels in opposite directions.
    RgbShift { amount: f32, angle: f32 },
    /// Linear to sRGB transfer.
    GammaCorrection,
    /// Bright-pass, separable blur, additive composite.
    Bloom {
        strength: f32,
        radius: f32,
        threshold: f32,
    },
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChainError {
    #[error("post chain has no stages")]
    Empty,
    #[error("post chain must start with a single render stage")]
    RenderNotFirst,
}

/// Ordered list of stages; the last one writes to the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PostChain {
    stages: SmallVec<[PostStage; 4]>,
}

impl PostChain {
    pub fn new(stages: impl IntoIterator<Item = PostStage>) -> Result<Self, ChainError> {
        let stages: SmallVec<[PostStage; 4]> = stages.into_iter().collect();
        match stages.first() {
            None => Err(ChainError::Empty),
            Some(PostStage::Render) => {
                if stages.iter().skip(1).any(|s| *s == PostStage::Render) {
                    Err(ChainError::RenderNotFirst)
                } else {
                    Ok(Self { stages })
                }
            }
            Some(_) => Err(ChainError::RenderNotFirst),
        }
    }

    /// render → RGB shift → gamma → bloom
    pub fn vaporwave(rgb_shift_amount: f32, bloom_strength: f32) -> Result<Self, ChainError> {
        Self::new([
            PostStage::Render,
            PostStage::RgbShift {
                amount: rgb_shift_amount,
                angle: RGB_SHIFT_ANGLE,
            },
            PostStage::GammaCorrection,
            PostStage::Bloom {
                strength: bloom_strength,
                radius: BLOOM_RADIUS,
                threshold: BLOOM_THRESHOLD,
            },
        ])
    }

    pub fn stages(&self) -> &[PostStage] {
        &self.stages
    }

    /// Stages after the scene render, i.e. the full-screen passes.
    pub fn passes(&self) -> &[PostStage] {
        &self.stages[1..]
    }
}
