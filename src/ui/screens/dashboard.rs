//! Dashboard screen: derived metrics and coaching recommendations.

use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::metrics::engine::HealthSummary;
use crate::profile::types::Profile;

/// Action requested from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Open the AI trainer screen
    OpenTrainer,
    /// Discard the profile and redo onboarding
    EditProfile,
}

/// Dashboard screen UI.
pub struct DashboardScreen;

impl DashboardScreen {
    /// Render the dashboard for a profile and its derived summary.
    ///
    /// The summary is a pure projection the caller recomputes per frame;
    /// nothing here is written back.
    pub fn show(
        ui: &mut Ui,
        profile: &Profile,
        summary: &HealthSummary,
        show_macro_chart: bool,
    ) -> Option<DashboardAction> {
        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);
            ui.heading(format!("Welcome back, {}!", profile.name));
            ui.label(
                RichText::new("Here's your personalized fitness overview.").weak(),
            );
            ui.add_space(16.0);

            Self::show_stat_cards(ui, profile, summary);

            ui.add_space(24.0);
            ui.separator();
            ui.add_space(12.0);

            ui.columns(2, |cols| {
                Self::show_tips(&mut cols[0], summary);
                Self::show_nutrition(&mut cols[1], summary, show_macro_chart);
            });

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Start AI Trainer").size(16.0)).clicked() {
                    action = Some(DashboardAction::OpenTrainer);
                }
                if ui.button("Edit Profile").clicked() {
                    action = Some(DashboardAction::EditProfile);
                }
            });
            ui.add_space(16.0);
        });

        action
    }

    fn show_stat_cards(ui: &mut Ui, profile: &Profile, summary: &HealthSummary) {
        egui::Grid::new("stat_cards")
            .num_columns(3)
            .spacing([24.0, 12.0])
            .show(ui, |ui| {
                Self::stat(
                    ui,
                    "BMI",
                    &format!("{:.1}", summary.bmi),
                    summary.bmi_category.display_name(),
                );
                Self::stat(
                    ui,
                    "Daily Calories",
                    &summary.daily_calories.to_string(),
                    "kcal target",
                );
                Self::stat(
                    ui,
                    "Goal",
                    profile.fitness_goal.display_name(),
                    profile.diet_preference.display_name(),
                );
                ui.end_row();

                Self::stat(
                    ui,
                    "Ideal Weight",
                    &format!("{} kg", summary.ideal_weight_kg),
                    "Devine estimate",
                );
                Self::stat(
                    ui,
                    "Water Intake",
                    &format!("{} ml", summary.water_intake_ml),
                    "per day",
                );
                Self::stat(
                    ui,
                    "Routine",
                    profile.activity_level.display_name(),
                    &format!("{} years old", profile.age),
                );
                ui.end_row();
            });
    }

    fn stat(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).weak().size(13.0));
                ui.label(RichText::new(value).strong().size(24.0));
                ui.label(RichText::new(subtitle).weak().size(12.0));
            });
        });
    }

    fn show_tips(ui: &mut Ui, summary: &HealthSummary) {
        ui.heading("Coaching Tips");
        ui.add_space(8.0);
        for tip in summary.recommendation.tips {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("•").strong());
                ui.label(*tip);
            });
        }

        ui.add_space(12.0);
        ui.heading("Exercise Types");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for exercise_type in summary.recommendation.exercise_types {
                let _ = ui.selectable_label(false, *exercise_type);
            }
        });
    }

    fn show_nutrition(ui: &mut Ui, summary: &HealthSummary, show_macro_chart: bool) {
        ui.heading("Macro Split");
        ui.add_space(8.0);

        let macros = summary.recommendation.macros;
        ui.label(format!(
            "Protein {}%  ·  Carbs {}%  ·  Fats {}%",
            macros.protein, macros.carbs, macros.fats
        ));

        if !show_macro_chart {
            return;
        }

        ui.add_space(8.0);
        let bars = vec![
            Bar::new(0.0, f64::from(macros.protein)).name("Protein").width(0.6),
            Bar::new(1.0, f64::from(macros.carbs)).name("Carbs").width(0.6),
            Bar::new(2.0, f64::from(macros.fats)).name("Fats").width(0.6),
        ];
        let chart = BarChart::new("macros", bars);

        Plot::new("macro_split")
            .height(180.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_axes([false, true])
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}
