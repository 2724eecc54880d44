use candle_core::{Result, Tensor};

/// Encoder result: time-major `data` of shape (T, B, F) with an optional
/// (T, B) validity mask.
#[derive(Debug, Clone)]
pub struct EncoderOutput {
    pub data: Tensor,
    pub mask: Option<Tensor>,
}

impl EncoderOutput {
    pub fn new(data: Tensor, mask: Option<Tensor>) -> Self {
        Self { data, mask }
    }
}

/// Mean pools (T, B, F) features over time into (B, F).
///
/// Steps where `mask` is 0 are left out of the average. A batch entry whose
/// mask is all zeros is not guarded and ends up as NaN.
pub fn mean(x: &Tensor, mask: Option<&Tensor>) -> Result<Tensor> {
    let (t, b, f) = x.dims3()?;
    log::trace!("mean pool: steps={t} batch={b} features={f}");

    match mask {
        Some(mask) => {
            let (mask_t, mask_b) = mask.dims2()?;
            if (mask_t, mask_b) != (t, b) {
                candle_core::bail!(
                    "mask shape ({mask_t}, {mask_b}) does not match steps and batch ({t}, {b})"
                );
            }
            let mask = mask.to_dtype(x.dtype())?;
            let sum = x.broadcast_mul(&mask.unsqueeze(2)?)?.sum(0)?;
            let lengths = mask.sum(0)?.unsqueeze(1)?;
            sum.broadcast_div(&lengths)
        }
        None => x.mean(0),
    }
}

pub fn mean_pool(output: &EncoderOutput) -> Result<Tensor> {
    mean(&output.data, output.mask.as_ref())
}
