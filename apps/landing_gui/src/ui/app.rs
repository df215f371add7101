use std::time::Duration;

use chrono::Datelike;
use crossbeam_channel::Receiver;
use eframe::egui;

use crate::clipboard::SystemClipboard;
use crate::controller::{events::UiEvent, page::PageController};
use crate::ui::sections;

pub struct LandingApp {
    controller: PageController,
    ui_rx: Receiver<UiEvent>,
    clipboard: SystemClipboard,
}

impl LandingApp {
    pub fn new(controller: PageController, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller,
            ui_rx,
            clipboard: SystemClipboard,
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.drain_events(&self.ui_rx);

        egui::TopBottomPanel::top("landing_header").show(ctx, |ui| {
            sections::header(ui, &mut self.controller);
        });
        egui::TopBottomPanel::bottom("landing_status").show(ctx, |ui| {
            ui.small(self.controller.status());
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let language = self.controller.language();
                    sections::hero(ui, language);
                    ui.add_space(16.0);
                    sections::generator(ui, &mut self.controller, &mut self.clipboard);
                    ui.add_space(24.0);
                    ui.separator();
                    sections::pricing(ui, language);
                    sections::footer(ui, chrono::Local::now().year());
                });
        });

        if self.controller.form().loading {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
