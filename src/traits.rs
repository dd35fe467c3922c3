use crate::errors::Result;
use image::DynamicImage;

/// 画像エフェクトの抽象化
///
/// パイプラインは具象エフェクトではなくこのトレイトに依存する
pub trait ImageEffect {
    /// ログ出力用の名前
    fn name(&self) -> &str;

    /// 入力画像から新しい画像を生成する（入力は変更しない）
    fn apply(&self, img: &DynamicImage) -> Result<DynamicImage>;
}
