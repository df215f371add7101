//! Landing page sections. Each function draws one block of the page.

use eframe::egui;
use shared::{
    domain::{pricing_plans, PricingPlan},
    i18n::{self, Language},
};

use crate::clipboard::ClipboardWriter;
use crate::controller::page::PageController;

const OUTPUT_MAX_HEIGHT: f32 = 320.0;

pub fn header(ui: &mut egui::Ui, controller: &mut PageController) {
    ui.horizontal(|ui| {
        ui.heading(i18n::app_title(controller.language()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = controller.language();
            egui::ComboBox::from_id_salt("landing_language")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut selected, language, language.label());
                    }
                });
            ui.label(i18n::language_label(controller.language()));
            controller.set_language(selected);
        });
    });
}

pub fn hero(ui: &mut egui::Ui, language: Language) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(i18n::BRAND)
                .size(40.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(i18n::tagline(language)).size(16.0));
    });
}

pub fn generator(
    ui: &mut egui::Ui,
    controller: &mut PageController,
    clipboard: &mut dyn ClipboardWriter,
) {
    let language = controller.language();
    ui.horizontal(|ui| {
        let loading = controller.form().loading;
        let input_width = (ui.available_width() - 140.0).max(160.0);
        let input = ui.add_enabled(
            controller.input_editable(),
            egui::TextEdit::singleline(controller.input_mut())
                .hint_text(i18n::input_placeholder(language))
                .desired_width(input_width),
        );
        let enter_pressed =
            input.lost_focus() && ui.input(|state| state.key_pressed(egui::Key::Enter));

        let label = if loading {
            i18n::submitting_label(language)
        } else {
            i18n::submit_button(language)
        };
        let clicked = ui
            .add_enabled(controller.form().can_submit(), egui::Button::new(label))
            .clicked();
        if loading {
            ui.spinner();
        }
        if clicked || enter_pressed {
            controller.submit();
        }
    });

    if !controller.form().error.is_empty() {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, &controller.form().error);
    }
    ui.small(i18n::output_hint(language));

    let Some(text) = controller.form().copy_text() else {
        return;
    };
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(i18n::output_heading(language)).strong());
        if ui.button(i18n::copy_button(language)).clicked() {
            controller.copy_output(clipboard);
        }
    });
    egui::ScrollArea::vertical()
        .id_salt("generation_output")
        .max_height(OUTPUT_MAX_HEIGHT)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut text.as_str())
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}

pub fn footer(ui: &mut egui::Ui, year: i32) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.small(i18n::footer(year));
        ui.add_space(16.0);
    });
}

pub fn pricing(ui: &mut egui::Ui, language: Language) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(i18n::pricing_heading(language));
        ui.label(i18n::pricing_subheading(language));
    });
    ui.add_space(12.0);
    ui.columns(pricing_plans().len(), |columns| {
        for (column, plan) in columns.iter_mut().zip(pricing_plans()) {
            plan_card(column, plan, language);
        }
    });
}

fn plan_card(ui: &mut egui::Ui, plan: &PricingPlan, language: Language) {
    let mut frame = egui::Frame::group(ui.style());
    if plan.popular {
        frame = frame.stroke(egui::Stroke::new(2.0, ui.visuals().selection.bg_fill));
    }
    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        if plan.popular {
            ui.small(egui::RichText::new(i18n::popular_badge(language)).strong());
        }
        ui.label(egui::RichText::new(plan.name).size(20.0).strong());
        ui.label(egui::RichText::new(plan.price).size(18.0));
        ui.label(plan.description);
        ui.add_space(6.0);
        for feature in plan.features {
            ui.label(format!("• {feature}"));
        }
        ui.add_space(6.0);
        // No checkout flow behind this button.
        if ui.button(i18n::buy_button(language)).clicked() {
            tracing::debug!(plan = plan.name, "buy clicked; checkout is not available");
        }
    });
}
