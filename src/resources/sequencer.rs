//! Guided entry-and-compute state machine.
//!
//! The scene is driven by a single "advance" control. Each accepted advance
//! moves the [`Sequencer`] one [`Step`] forward:
//!
//! | step              | reads                | effect                                   |
//! |-------------------|----------------------|------------------------------------------|
//! | `AwaitFirst`      | first operand input  | number drops into box 0                  |
//! | `AwaitSecond`     | second operand input | number drops into box 1                  |
//! | `AwaitOperator`   | operator selector    | operator recorded                        |
//! | `AwaitLaunch`     | all three again      | operands fly into the result box, reset  |
//!
//! Validation is split from mutation: [`Sequencer::plan`] inspects the inputs
//! and returns the [`StepAction`] that would be taken (or a [`SequenceError`])
//! without touching the state, and [`Sequencer::commit`] records an action
//! once its scene effects were applied. A rejected advance therefore never
//! changes the step.

use bevy_ecs::prelude::Resource;
use std::fmt;

/// Current position in the four-step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    AwaitFirst,
    AwaitSecond,
    AwaitOperator,
    AwaitLaunch,
}

impl Step {
    pub fn index(self) -> u8 {
        match self {
            Step::AwaitFirst => 0,
            Step::AwaitSecond => 1,
            Step::AwaitOperator => 2,
            Step::AwaitLaunch => 3,
        }
    }

    /// Caption of the advance control while waiting in this step.
    pub fn button_label(self) -> &'static str {
        match self {
            Step::AwaitFirst => "Set number 1",
            Step::AwaitSecond => "Set number 2",
            Step::AwaitOperator => "Choose operation",
            Step::AwaitLaunch => "Run animation",
        }
    }

    pub fn next(self) -> Step {
        match self {
            Step::AwaitFirst => Step::AwaitSecond,
            Step::AwaitSecond => Step::AwaitOperator,
            Step::AwaitOperator => Step::AwaitLaunch,
            Step::AwaitLaunch => Step::AwaitFirst,
        }
    }
}

/// Supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Parse the operator selector value. Only `+` and `-` are accepted.
    pub fn parse(raw: &str) -> Result<Operator, SequenceError> {
        match raw.trim() {
            "" => Err(SequenceError::MissingOperator),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            other => Err(SequenceError::UnsupportedOperator(other.to_string())),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Name of the result variable, also used as the result box label.
    pub fn result_name(self) -> &'static str {
        match self {
            Operator::Add => "summa",
            Operator::Subtract => "difference",
        }
    }

    /// Apply the operation. `None` on overflow.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
        }
    }
}

/// Reasons an advance is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An operation is still animating. Ignored without feedback.
    Busy,
    InvalidFirstOperand,
    InvalidSecondOperand,
    MissingOperator,
    UnsupportedOperator(String),
    Overflow,
    FontNotLoaded,
    SceneNotReady,
}

impl SequenceError {
    /// Whether the user should be told about this rejection.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, SequenceError::Busy)
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Busy => write!(f, "An animation is already running."),
            SequenceError::InvalidFirstOperand => write!(f, "Enter a valid first number."),
            SequenceError::InvalidSecondOperand => write!(f, "Enter a valid second number."),
            SequenceError::MissingOperator => write!(f, "Select an operation."),
            SequenceError::UnsupportedOperator(op) => {
                write!(f, "Unsupported operation '{}'. Use + or -.", op)
            }
            SequenceError::Overflow => write!(f, "The result does not fit in a 64-bit integer."),
            SequenceError::FontNotLoaded => {
                write!(f, "The font has not been loaded yet. Try again.")
            }
            SequenceError::SceneNotReady => write!(f, "The scene is still loading. Try again."),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Raw values of the three inputs at the time of an advance.
#[derive(Debug, Clone, Copy)]
pub struct StepInputs<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub operator: &'a str,
}

/// What an accepted advance does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    DropFirst(i64),
    DropSecond(i64),
    ChooseOperator(Operator),
    Launch {
        first: i64,
        second: i64,
        operator: Operator,
        result: i64,
    },
}

/// Parse an operand the way a lenient integer parser does: surrounding
/// whitespace is ignored, an optional sign is allowed and the longest run of
/// leading digits is used (`"12abc"` is 12, `"3.9"` is 3).
pub fn parse_operand(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    // Parse with the sign attached so i64::MIN stays representable.
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    signed.parse::<i64>().ok()
}

/// Step sequencer state.
#[derive(Resource, Debug, Clone, Default)]
pub struct Sequencer {
    step: Step,
    /// True from the launch of an operation until its result glyph landed.
    pub is_animating: bool,
    pub first: Option<i64>,
    pub second: Option<i64>,
    pub operator: Option<Operator>,
    /// Value most recently written into the result box.
    pub last_result: Option<i64>,
    /// Number of completed launches.
    pub cycles: u32,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Validate an advance against the current step without mutating state.
    pub fn plan(&self, inputs: &StepInputs) -> Result<StepAction, SequenceError> {
        if self.is_animating {
            return Err(SequenceError::Busy);
        }
        match self.step {
            Step::AwaitFirst => parse_operand(inputs.first)
                .map(StepAction::DropFirst)
                .ok_or(SequenceError::InvalidFirstOperand),
            Step::AwaitSecond => parse_operand(inputs.second)
                .map(StepAction::DropSecond)
                .ok_or(SequenceError::InvalidSecondOperand),
            Step::AwaitOperator => Operator::parse(inputs.operator).map(StepAction::ChooseOperator),
            Step::AwaitLaunch => {
                // Inputs are read again rather than taken from earlier steps.
                let first = parse_operand(inputs.first).ok_or(SequenceError::InvalidFirstOperand)?;
                let second =
                    parse_operand(inputs.second).ok_or(SequenceError::InvalidSecondOperand)?;
                let operator = Operator::parse(inputs.operator)?;
                let result = operator
                    .apply(first, second)
                    .ok_or(SequenceError::Overflow)?;
                Ok(StepAction::Launch {
                    first,
                    second,
                    operator,
                    result,
                })
            }
        }
    }

    /// Record an accepted action and move to the next step.
    pub fn commit(&mut self, action: StepAction) {
        match action {
            StepAction::DropFirst(v) => self.first = Some(v),
            StepAction::DropSecond(v) => self.second = Some(v),
            StepAction::ChooseOperator(op) => self.operator = Some(op),
            StepAction::Launch {
                first,
                second,
                operator,
                ..
            } => {
                self.first = Some(first);
                self.second = Some(second);
                self.operator = Some(operator);
                self.is_animating = true;
                self.cycles += 1;
            }
        }
        self.step = self.step.next();
    }

    /// Called when the result glyph finished landing.
    pub fn finish_operation(&mut self, result: i64) {
        self.is_animating = false;
        self.last_result = Some(result);
    }
}
