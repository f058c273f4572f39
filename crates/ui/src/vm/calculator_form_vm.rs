use coinflip_core::model::Calculation;
use services::{CalculatorService, INVALID_INPUT_MESSAGE};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Added(Calculation),
    /// The form is untouched; `message` goes into a blocking alert.
    Rejected { message: &'static str },
}

/// Raw form fields plus the dialog they live in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorFormVm {
    pub coins: String,
    pub heads: String,
    dialog: DialogState,
}

impl CalculatorFormVm {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    pub fn open(&mut self) {
        self.dialog = DialogState::Open;
    }

    pub fn close(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Submit both fields. On success the dialog closes and the fields clear.
    pub fn submit(&mut self, calculator: &CalculatorService) -> SubmitOutcome {
        match calculator.submit(&self.coins, &self.heads) {
            Ok(calculation) => {
                self.coins.clear();
                self.heads.clear();
                self.dialog = DialogState::Closed;
                SubmitOutcome::Added(calculation)
            }
            Err(err) if err.is_invalid_input() => SubmitOutcome::Rejected {
                message: INVALID_INPUT_MESSAGE,
            },
            Err(err) => {
                tracing::error!(%err, "calculation could not be recorded");
                SubmitOutcome::Rejected {
                    message: ViewError::Unknown.message(),
                }
            }
        }
    }
}
