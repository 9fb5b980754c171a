use thiserror::Error;

use crate::constants::{
    DESKTOP_SIZE_MAX, DESKTOP_SIZE_MIN, MOBILE_BREAKPOINT, MOBILE_SIZE_MAX, MOBILE_SIZE_MIN,
};

/// External configuration for one floaty: where its image comes from, where a
/// click goes, and the text shown curved around it while hovered.
#[derive(Clone, Debug)]
pub struct FloatyItem {
    pub image_src: String,
    pub url: String,
    pub hover_text: String,
}

impl FloatyItem {
    pub fn new(
        image_src: impl Into<String>,
        url: impl Into<String>,
        hover_text: impl Into<String>,
    ) -> Self {
        Self {
            image_src: image_src.into(),
            url: url.into(),
            hover_text: hover_text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no floaty items configured")]
    NoItems,
    #[error("item {index} has an empty image source")]
    EmptyImageSource { index: usize },
}

/// Reject a configuration the frontend could not do anything useful with.
/// An empty hover text is fine (the ring is simply not drawn).
pub fn validate_items(items: &[FloatyItem]) -> Result<(), ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::NoItems);
    }
    for (index, item) in items.iter().enumerate() {
        if item.image_src.is_empty() {
            return Err(ConfigError::EmptyImageSource { index });
        }
    }
    Ok(())
}

/// Width bucket controlling spawn sizing and the resize budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    #[inline]
    pub fn of(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Nominal-width range entities of this class spawn with. The upper bound
    /// doubles as the max-size budget applied on resize.
    #[inline]
    pub fn size_range(self) -> (f32, f32) {
        match self {
            Self::Mobile => (MOBILE_SIZE_MIN, MOBILE_SIZE_MAX),
            Self::Desktop => (DESKTOP_SIZE_MIN, DESKTOP_SIZE_MAX),
        }
    }
}
