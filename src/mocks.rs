use crate::errors::{CaptureError, Result};
use crate::traits::ImageEffect;
use image::DynamicImage;

/// テスト用のエフェクト：入力画像をそのまま返す
#[derive(Debug, Clone, Default)]
pub struct IdentityEffect;

impl ImageEffect for IdentityEffect {
    fn name(&self) -> &str {
        "identity"
    }

    fn apply(&self, img: &DynamicImage) -> Result<DynamicImage> {
        Ok(img.clone())
    }
}

/// テスト用のエフェクト：常に失敗する
#[derive(Debug, Clone)]
pub struct FailingEffect {
    pub message: String,
}

impl FailingEffect {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ImageEffect for FailingEffect {
    fn name(&self) -> &str {
        "failing"
    }

    fn apply(&self, _img: &DynamicImage) -> Result<DynamicImage> {
        Err(CaptureError::Processing {
            message: self.message.clone(),
        })
    }
}
