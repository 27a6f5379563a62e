//! Bmical desktop application UI.
//!
//! # Design Notes
//! - A single form: two text fields (height in meters, weight in kilograms),
//!   a Calculate button, and a result line.
//! - The form state is plain strings; each frame re-renders from it, and the
//!   calculation runs only when the user presses the button or Enter.
//! - All validation lives in `bmical-core`; unparseable text is folded into
//!   the same invalid-input case as a non-positive number.

use bmical_core::{Category, Measurement, calculate};
use eframe::{
    App, CreationContext, Frame,
    egui::{
        Align, CentralPanel, Context, Grid, InputState, Key, Layout, RichText, TextEdit, Ui, Vec2,
    },
};
use egui_extras::{Size, StripBuilder};

/// Outcome of one calculation request, kept until the next request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    message: String,
    category: Option<Category>,
}

impl CalculationOutcome {
    /// Parses the two text inputs and runs the calculation.
    ///
    /// Text that does not parse as a number is treated like any other invalid
    /// input: the message is the fixed invalid-input string.
    #[must_use]
    pub fn from_inputs(height_input: &str, weight_input: &str) -> Self {
        let height = parse_field(height_input);
        let weight = parse_field(weight_input);
        log::debug!("calculation requested: height={height} m, weight={weight} kg");

        let message = calculate(height, weight);
        let category = Measurement::new(height, weight)
            .ok()
            .map(|m| m.bmi().category());
        Self { message, category }
    }

    /// The display string for the result line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classification band, when a numeric result exists.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }
}

/// Folds unparseable text into the invalid-input case.
///
/// NaN is rejected by `Measurement::new`, so the caller sees the same fixed
/// message as for a non-positive number.
fn parse_field(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

/// Application state for the BMI calculator window.
#[derive(Debug, Default)]
pub struct BmicalApp {
    height_input: String,
    weight_input: String,
    outcome: Option<CalculationOutcome>,
}

impl BmicalApp {
    /// Creates the application with empty input fields.
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }

    fn run_calculation(&mut self) {
        self.outcome = Some(CalculationOutcome::from_inputs(
            &self.height_input,
            &self.weight_input,
        ));
    }

    fn handle_keys(i: &InputState) -> bool {
        i.key_pressed(Key::Enter)
    }
}

impl App for BmicalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if ctx.input(|i| Self::handle_keys(i)) {
            self.run_calculation();
        }

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.15))
                .size(Size::relative(0.7))
                .size(Size::relative(0.15))
                .vertical(|mut strip| {
                    strip.empty();
                    strip.cell(|ui| {
                        self.draw_form(ui);
                    });
                    strip.empty();
                });
        });
    }
}

impl BmicalApp {
    fn draw_form(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("BMI Calculator").size(24.0));
            ui.add_space(12.0);

            Grid::new(ui.id().with("measurement_form"))
                .num_columns(2)
                .spacing(Vec2::new(8.0, 8.0))
                .show(ui, |ui| {
                    ui.label("Height (m)");
                    ui.add(
                        TextEdit::singleline(&mut self.height_input)
                            .hint_text("1.75")
                            .desired_width(120.0),
                    );
                    ui.end_row();

                    ui.label("Weight (kg)");
                    ui.add(
                        TextEdit::singleline(&mut self.weight_input)
                            .hint_text("70")
                            .desired_width(120.0),
                    );
                    ui.end_row();
                });

            ui.add_space(12.0);
            if ui.button(RichText::new("Calculate").size(16.0)).clicked() {
                self.run_calculation();
            }

            ui.add_space(16.0);
            if let Some(outcome) = &self.outcome {
                ui.label(RichText::new(outcome.message()).size(20.0));
                if let Some(category) = outcome.category() {
                    ui.label(RichText::new(format!("Category: {category}")).size(14.0));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_valid_inputs() {
        let outcome = CalculationOutcome::from_inputs("1.75", "70");
        assert_eq!(outcome.message(), "Your BMI is 22.86");
        assert_eq!(outcome.category(), Some(Category::Normal));
    }

    #[test]
    fn test_outcome_trims_whitespace() {
        let outcome = CalculationOutcome::from_inputs(" 2.0 ", " 100 ");
        assert_eq!(outcome.message(), "Your BMI is 25.00");
        assert_eq!(outcome.category(), Some(Category::Overweight));
    }

    #[test]
    fn test_outcome_from_unparseable_inputs() {
        for (height, weight) in [("", "70"), ("abc", "70"), ("1.75", ""), ("1,75", "70")] {
            let outcome = CalculationOutcome::from_inputs(height, weight);
            assert_eq!(outcome.message(), "Invalid input values");
            assert_eq!(outcome.category(), None);
        }
    }

    #[test]
    fn test_outcome_from_non_positive_inputs() {
        let outcome = CalculationOutcome::from_inputs("0", "70");
        assert_eq!(outcome.message(), "Invalid input values");
        assert_eq!(outcome.category(), None);
    }
}
