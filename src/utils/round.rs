/// 小数点以下の桁数で丸めるためのトレイト
///
/// Rounding works on the exact decimal expansion of the float, not on
/// `value * 10^decimals`: `0.5 * 1.405` is stored slightly above `0.7025`
/// and therefore rounds to `0.703`, where scaling first would produce an exact
/// tie at `702.5`.
pub trait RoundTo {
    /// Round to `decimals` digits after the decimal point.
    ///
    /// # Arguments
    /// * `decimals` - 小数点以下の桁数
    ///
    /// # Returns
    /// * 丸めた値
    fn round_to(self, decimals: u32) -> Self;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, decimals: u32) -> f64 {
        if !self.is_finite() {
            return self;
        }
        // std formatting prints the correctly rounded decimal
        format!("{:.*}", decimals as usize, self)
            .parse()
            .unwrap_or(self)
    }
}

impl RoundTo for f32 {
    #[inline]
    fn round_to(self, decimals: u32) -> f32 {
        (self as f64).round_to(decimals) as f32
    }
}

/// Sum a row left to right as `f64`.
/// The order is fixed so that parallel callers get bit-identical sums.
#[inline]
pub fn row_sum<N>(row: &[N]) -> f64
where
    N: Copy + Into<f64>,
{
    row.iter().fold(0.0, |acc, &v| acc + v.into())
}
