use crate::hidden::HiddenState;
use crate::{Error, Result, bail, pooling};
use candle_core::{Module, Tensor};
use candle_nn::{Linear, VarBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RnnType {
    Gru,
    Lstm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecInit {
    #[default]
    Zero,
    MeanCtx,
}

#[derive(Debug, Clone)]
pub struct InitConfig {
    pub rnn_type: RnnType,
    pub dec_init: DecInit,
    pub ctx_size: usize,
    pub hidden_size: usize,
}

/// Builds the first decoder state from the encoder context.
pub struct DecoderInit {
    rnn_type: RnnType,
    ctx_size: usize,
    hidden_size: usize,
    ff_dec_init: Option<Linear>,
}

impl DecoderInit {
    pub fn new(config: &InitConfig, vb: VarBuilder) -> Result<Self> {
        if config.ctx_size == 0 || config.hidden_size == 0 {
            bail!(
                "ctx_size and hidden_size must be positive, got {} and {}",
                config.ctx_size,
                config.hidden_size
            );
        }

        let ff_dec_init = match config.dec_init {
            DecInit::Zero => None,
            DecInit::MeanCtx => Some(candle_nn::linear(
                config.ctx_size,
                config.hidden_size,
                vb.pp("ff_dec_init"),
            )?),
        };
        log::debug!(
            "decoder init: {:?} for {:?}, {} -> {}",
            config.dec_init,
            config.rnn_type,
            config.ctx_size,
            config.hidden_size
        );

        Ok(Self {
            rnn_type: config.rnn_type,
            ctx_size: config.ctx_size,
            hidden_size: config.hidden_size,
            ff_dec_init,
        })
    }

    pub fn forward(&self, ctx: &Tensor, mask: Option<&Tensor>) -> Result<HiddenState> {
        let (_, batch, ctx_size) = ctx.dims3()?;
        if ctx_size != self.ctx_size {
            return Err(Error::CtxSizeMismatch {
                expected: self.ctx_size,
                got: ctx_size,
            });
        }

        let h0 = match &self.ff_dec_init {
            None => Tensor::zeros((batch, self.hidden_size), ctx.dtype(), ctx.device())?,
            Some(ff) => ff.forward(&pooling::mean(ctx, mask)?)?.tanh()?,
        };

        Ok(match self.rnn_type {
            RnnType::Gru => HiddenState::Single(h0),
            RnnType::Lstm => {
                let c0 = h0.zeros_like()?;
                HiddenState::Paired(h0, c0)
            }
        })
    }
}
