use hough_lines_core::GrayImageView;

use crate::maxima::detect_maxima;
use crate::reconstruct::reconstruct;
use crate::vote::vote;
use crate::{HoughError, HoughParams, HoughSpace};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Stateless line detector: vote, extract maxima, reconstruct segments.
#[derive(Clone, Debug, Default)]
pub struct HoughLineDetector {
    params: HoughParams,
}

impl HoughLineDetector {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    /// Run the full pipeline using `params.foreground` to select edge pixels.
    pub fn detect(&self, image: &GrayImageView<'_>) -> Result<HoughSpace, HoughError> {
        let polarity = self.params.foreground;
        self.detect_with(image, move |v| polarity.is_foreground(v))
    }

    /// Run the full pipeline with a caller-supplied edge predicate.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, image, is_foreground),
            fields(width = image.width, height = image.height)
        )
    )]
    pub fn detect_with<F>(
        &self,
        image: &GrayImageView<'_>,
        is_foreground: F,
    ) -> Result<HoughSpace, HoughError>
    where
        F: Fn(u8) -> bool + Sync,
    {
        let space = vote(image, &self.params, is_foreground)?;
        let space = detect_maxima(space, self.params.vote_threshold);
        Ok(reconstruct(space))
    }
}
