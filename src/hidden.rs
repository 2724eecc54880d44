use candle_core::Tensor;
use candle_nn::rnn::{GRUState, LSTMState};

/// State carried between recurrent steps.
///
/// Cells with a separate memory component (LSTM) produce `Paired(h, c)`,
/// everything else produces `Single(h)`. The first tensor of a pair is always
/// the exposed hidden state.
#[derive(Debug, Clone)]
pub enum HiddenState {
    Single(Tensor),
    Paired(Tensor, Tensor),
}

impl HiddenState {
    pub fn hidden(&self) -> &Tensor {
        match self {
            HiddenState::Single(h) => h,
            HiddenState::Paired(h, _) => h,
        }
    }

    pub fn into_hidden(self) -> Tensor {
        match self {
            HiddenState::Single(h) => h,
            HiddenState::Paired(h, _) => h,
        }
    }

    /// The cell memory of a paired state.
    pub fn memory(&self) -> Option<&Tensor> {
        match self {
            HiddenState::Single(_) => None,
            HiddenState::Paired(_, c) => Some(c),
        }
    }
}

impl From<Tensor> for HiddenState {
    fn from(h: Tensor) -> Self {
        HiddenState::Single(h)
    }
}

impl From<(Tensor, Tensor)> for HiddenState {
    fn from((h, c): (Tensor, Tensor)) -> Self {
        HiddenState::Paired(h, c)
    }
}

impl From<LSTMState> for HiddenState {
    fn from(state: LSTMState) -> Self {
        HiddenState::Paired(state.h().clone(), state.c().clone())
    }
}

impl From<GRUState> for HiddenState {
    fn from(state: GRUState) -> Self {
        HiddenState::Single(state.h().clone())
    }
}

/// Returns h_t regardless of the recurrent cell that produced the state.
#[inline]
pub fn rnn_hidden_state(state: &HiddenState) -> &Tensor {
    state.hidden()
}
