use std::fmt;

use tracing::{debug, warn};

use super::commands::FormEdit;
use super::errors::CheckoutError;
use super::steps::{reference_steps, StepDefinition};
use super::value_objects::OrderForm;

/// Message shown when a step guard fails
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

// ============================================================================
// Checkout State
// ============================================================================

/// Position in the flow plus the form; replaced wholesale on every change
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState<F = OrderForm> {
    current_step_index: usize,
    form: F,
}

impl<F> CheckoutState<F> {
    pub fn new(form: F) -> Self {
        Self {
            current_step_index: 0,
            form,
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }
}

impl<F: Clone> CheckoutState<F> {
    pub fn with_form(&self, form: F) -> Self {
        Self {
            current_step_index: self.current_step_index,
            form,
        }
    }

    fn at_step(&self, index: usize) -> Self {
        Self {
            current_step_index: index,
            form: self.form.clone(),
        }
    }
}

// ============================================================================
// Transition Results
// ============================================================================

/// Non-fatal signal that the current step still has required fields missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step_index: usize,
    pub step_name: &'static str,
    pub message: &'static str,
}

impl fmt::Display for StepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.step_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTransition {
    Moved { from: usize, to: usize },
    /// Nothing to do: already at the first or last step
    Stayed { at: usize },
    Blocked(StepWarning),
}

impl StepTransition {
    pub fn warning(&self) -> Option<&StepWarning> {
        match self {
            StepTransition::Blocked(warning) => Some(warning),
            _ => None,
        }
    }
}

// ============================================================================
// Checkout Step Machine
// ============================================================================

/// Tracks the active step of a multi-step form.
///
/// Moving forward requires the current step's guard to pass; moving back is
/// always allowed. The index never leaves `0..steps.len()`.
#[derive(Debug, Clone)]
pub struct CheckoutStepMachine<F = OrderForm> {
    steps: Vec<StepDefinition<F>>,
    state: CheckoutState<F>,
}

impl<F: Clone> CheckoutStepMachine<F> {
    pub fn new(steps: Vec<StepDefinition<F>>, form: F) -> Result<Self, CheckoutError> {
        if steps.is_empty() {
            return Err(CheckoutError::NoSteps);
        }

        Ok(Self {
            steps,
            state: CheckoutState::new(form),
        })
    }

    pub fn steps(&self) -> &[StepDefinition<F>] {
        &self.steps
    }

    pub fn state(&self) -> &CheckoutState<F> {
        &self.state
    }

    pub fn form(&self) -> &F {
        self.state.form()
    }

    pub fn current_step_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn current_step(&self) -> &StepDefinition<F> {
        &self.steps[self.state.current_step_index]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_final_step(&self) -> bool {
        self.state.current_step_index == self.last_index()
    }

    /// Run the guard of step `index`; indices past the end have no guard
    pub fn validate_step(&self, index: usize, form: &F) -> bool {
        self.steps
            .get(index)
            .map_or(true, |step| (step.validate)(form))
    }

    pub fn can_advance(&self) -> bool {
        self.validate_step(self.state.current_step_index, self.state.form())
    }

    pub fn advance(&mut self) -> StepTransition {
        let from = self.state.current_step_index;

        if !self.can_advance() {
            let warning = self.warning_for(from);
            warn!(step_index = from, step = warning.step_name, "{}", warning.message);
            return StepTransition::Blocked(warning);
        }

        let to = (from + 1).min(self.last_index());
        self.move_to(from, to)
    }

    pub fn retreat(&mut self) -> StepTransition {
        let from = self.state.current_step_index;
        self.move_to(from, from.saturating_sub(1))
    }

    /// Jump back to a step the customer has already completed
    pub fn goto(&mut self, target: usize) -> Result<StepTransition, CheckoutError> {
        let current = self.state.current_step_index;

        if target > self.last_index() {
            return Err(CheckoutError::UnknownStep {
                index: target,
                last: self.last_index(),
            });
        }
        if target > current {
            return Err(CheckoutError::ForwardJump { current, target });
        }

        Ok(self.move_to(current, target))
    }

    /// Replace the form with an edited copy; the step position is kept
    pub fn update(&mut self, edit: impl FnOnce(&F) -> F) {
        let form = edit(self.state.form());
        self.state = self.state.with_form(form);
    }

    /// Restore an earlier state, e.g. for undo
    pub fn restore(&mut self, state: CheckoutState<F>) -> Result<(), CheckoutError> {
        if state.current_step_index > self.last_index() {
            return Err(CheckoutError::UnknownStep {
                index: state.current_step_index,
                last: self.last_index(),
            });
        }

        self.state = state;
        Ok(())
    }

    pub(crate) fn warning_for(&self, index: usize) -> StepWarning {
        StepWarning {
            step_index: index,
            step_name: self.steps.get(index).map_or("", |step| step.name),
            message: MISSING_FIELDS_MESSAGE,
        }
    }

    fn move_to(&mut self, from: usize, to: usize) -> StepTransition {
        if from == to {
            return StepTransition::Stayed { at: from };
        }

        self.state = self.state.at_step(to);
        debug!(from, to, step = self.steps[to].name, "Checkout step changed");
        StepTransition::Moved { from, to }
    }
}

impl CheckoutStepMachine<OrderForm> {
    /// The four-step album order flow starting from `form`
    pub fn album_order(form: OrderForm) -> Self {
        Self {
            steps: reference_steps(),
            state: CheckoutState::new(form),
        }
    }

    pub fn apply(&mut self, edit: FormEdit) {
        self.update(|form| form.apply(edit));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
