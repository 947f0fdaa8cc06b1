//! Control panel state: the two number inputs, the operator selector, the
//! code echo and whether the panel is open on compact windows.
//!
//! The sequencer reads the raw input strings on every advance, so the panel
//! stores exactly what the user typed, valid or not.

use bevy_ecs::prelude::Resource;

use crate::resources::sequencer::StepInputs;

/// Longest text accepted by a number input.
pub const MAX_INPUT_LEN: usize = 20;

/// Which text input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    First,
    Second,
}

/// Values echoed into the code snippet shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEcho {
    pub first: String,
    pub second: String,
    pub operator: String,
    pub result_name: String,
}

impl Default for CodeEcho {
    fn default() -> Self {
        Self {
            first: "?".into(),
            second: "?".into(),
            operator: "?".into(),
            result_name: "result".into(),
        }
    }
}

impl CodeEcho {
    /// Snippet lines as shown in the panel.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("let number1 = {};", self.first),
            format!("let number2 = {};", self.second),
            format!(
                "let {} = number1 {} number2;",
                self.result_name, self.operator
            ),
        ]
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ControlPanel {
    pub first_input: String,
    pub second_input: String,
    /// Raw selector value; empty until the user picks one.
    pub operator: String,
    pub focused: Option<Field>,
    /// Panel visibility on compact windows. Wide windows always show it.
    pub open: bool,
    pub echo: CodeEcho,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            first_input: String::new(),
            second_input: String::new(),
            operator: String::new(),
            focused: Some(Field::First),
            open: false,
            echo: CodeEcho::default(),
        }
    }

    pub fn inputs(&self) -> StepInputs<'_> {
        StepInputs {
            first: &self.first_input,
            second: &self.second_input,
            operator: &self.operator,
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused? {
            Field::First => Some(&mut self.first_input),
            Field::Second => Some(&mut self.second_input),
        }
    }

    /// Append a typed character to the focused input.
    pub fn type_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(input) = self.focused_input() {
            if input.chars().count() < MAX_INPUT_LEN {
                input.push(c);
            }
        }
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    /// Move focus to the other number input.
    pub fn cycle_focus(&mut self) {
        self.focused = match self.focused {
            Some(Field::First) => Some(Field::Second),
            _ => Some(Field::First),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut p = ControlPanel::new();
        p.type_char('4');
        p.type_char('2');
        p.cycle_focus();
        p.type_char('-');
        p.type_char('1');
        assert_eq!(p.first_input, "42");
        assert_eq!(p.second_input, "-1");
        p.backspace();
        assert_eq!(p.second_input, "-");
    }

    #[test]
    fn no_focus_ignores_typing() {
        let mut p = ControlPanel::new();
        p.focused = None;
        p.type_char('1');
        p.backspace();
        assert!(p.first_input.is_empty());
        assert!(p.second_input.is_empty());
    }

    #[test]
    fn control_characters_and_overlong_input_are_dropped() {
        let mut p = ControlPanel::new();
        p.type_char('\n');
        for _ in 0..(MAX_INPUT_LEN + 5) {
            p.type_char('9');
        }
        assert_eq!(p.first_input.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn code_echo_lines() {
        let echo = CodeEcho {
            first: "7".into(),
            second: "3".into(),
            operator: "+".into(),
            result_name: "summa".into(),
        };
        let lines = echo.lines();
        assert_eq!(lines[0], "let number1 = 7;");
        assert_eq!(lines[2], "let summa = number1 + number2;");
    }
}
