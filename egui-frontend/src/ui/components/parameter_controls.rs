//! # Parameter Controls
//!
//! Inputs for the calendar: age and lifespan (text field plus −/+ steppers),
//! the aspect ratio and the milestone toggles. Every change is applied to the
//! grid immediately.
//!
//! Text is parsed leniently: anything that is not a number counts as 0 and
//! values above the configured maximum are capped. The field keeps what the
//! user typed until it loses focus, then shows the value actually applied.

use eframe::egui;
use shared::{AspectRatio, LifeParameters, Milestone};

use crate::backend::domain::parameter_input::{can_decrement, can_increment, parse_year_input, step_year};
use crate::ui::app_state::LifeInWeeksApp;
use crate::ui::components::life_grid::frame_time;
use crate::ui::components::styling::stepper_button;
use crate::ui::components::theme::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearField {
    Age,
    Lifespan,
}

impl YearField {
    fn label(self) -> &'static str {
        match self {
            YearField::Age => "Your age",
            YearField::Lifespan => "Expected lifespan",
        }
    }

    fn value(self, parameters: &LifeParameters) -> u32 {
        match self {
            YearField::Age => parameters.age,
            YearField::Lifespan => parameters.lifespan,
        }
    }

    fn with_value(self, parameters: LifeParameters, value: u32) -> LifeParameters {
        match self {
            YearField::Age => LifeParameters { age: value, ..parameters },
            YearField::Lifespan => LifeParameters {
                lifespan: value,
                ..parameters
            },
        }
    }
}

impl LifeInWeeksApp {
    /// Draw every calendar input
    pub fn draw_parameter_controls(&mut self, ui: &mut egui::Ui) {
        let now = frame_time(ui.ctx());

        ui.horizontal_wrapped(|ui| {
            self.draw_year_input(ui, YearField::Age, now);
            ui.add_space(24.0);
            self.draw_year_input(ui, YearField::Lifespan, now);
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            self.draw_aspect_ratio_selector(ui, now);
            ui.add_space(24.0);
            self.draw_milestone_toggles(ui, now);
        });
    }

    fn draw_year_input(&mut self, ui: &mut egui::Ui, field: YearField, now: std::time::Duration) {
        let max_years = self.grid.max_years();
        let parameters = *self.grid.parameters();
        let current = field.value(&parameters);

        ui.label(egui::RichText::new(field.label()).color(colors::TEXT_SECONDARY));

        let decrement = ui
            .add_enabled(can_decrement(current), stepper_button("−"))
            .on_hover_text(format!("{} minus one year", field.label()));
        if decrement.clicked() {
            self.apply_parameters(field.with_value(parameters, step_year(current, -1, max_years)), now);
            self.sync_year_inputs();
        }

        let text = match field {
            YearField::Age => &mut self.age_input,
            YearField::Lifespan => &mut self.lifespan_input,
        };
        let edit = ui.add(
            egui::TextEdit::singleline(text)
                .desired_width(48.0)
                .horizontal_align(egui::Align::Center),
        );
        if edit.changed() {
            let value = parse_year_input(text, max_years);
            self.apply_parameters(field.with_value(parameters, value), now);
        }
        if edit.lost_focus() {
            self.sync_year_inputs();
        }

        let increment = ui
            .add_enabled(can_increment(current, max_years), stepper_button("+"))
            .on_hover_text(format!("{} plus one year", field.label()));
        if increment.clicked() {
            self.apply_parameters(field.with_value(parameters, step_year(current, 1, max_years)), now);
            self.sync_year_inputs();
        }

        ui.label(egui::RichText::new("years").color(colors::TEXT_SECONDARY));
    }

    fn draw_aspect_ratio_selector(&mut self, ui: &mut egui::Ui, now: std::time::Duration) {
        let parameters = *self.grid.parameters();
        let mut selected = parameters.aspect_ratio;

        ui.label(egui::RichText::new("Layout").color(colors::TEXT_SECONDARY));
        for aspect_ratio in AspectRatio::all() {
            ui.radio_value(&mut selected, aspect_ratio, aspect_ratio.to_string());
        }

        if selected != parameters.aspect_ratio {
            self.apply_parameters(
                LifeParameters {
                    aspect_ratio: selected,
                    ..parameters
                },
                now,
            );
        }
    }

    fn draw_milestone_toggles(&mut self, ui: &mut egui::Ui, now: std::time::Duration) {
        let parameters = *self.grid.parameters();
        let mut milestones = parameters.milestones;

        ui.label(egui::RichText::new("Milestones").color(colors::TEXT_SECONDARY));
        for milestone in Milestone::ALL {
            ui.checkbox(milestones.flag_mut(milestone), milestone.label());
        }

        if milestones != parameters.milestones {
            self.apply_parameters(LifeParameters { milestones, ..parameters }, now);
        }
    }
}
