use eframe::egui::{CentralPanel, Context, RichText};
use eframe::{App, Frame, NativeOptions};
use egui_reorder::{ReorderResponse, ReorderUi};

/// Reorderable priority list, the way a model-serving settings page would
/// rank its runtimes. Dropping a row inside the list saves the new order;
/// dropping outside or pressing Escape snaps back.
struct DemoApp {
    runtimes: Vec<String>,
    reorder: ReorderUi<String>,
    last_saved: Option<Vec<String>>,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            runtimes: [
                "Triton inference server",
                "OpenVINO model server",
                "Seldon MLServer",
                "TorchServe",
                "Custom runtime",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            reorder: ReorderUi::new(),
            last_saved: None,
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Serving runtime priority");
            ui.label("Drag rows to change the order runtimes are matched in.");
            ui.add_space(8.0);

            let mut committed = None;
            let response = self.reorder.ui(
                ui,
                &self.runtimes,
                |order| committed = Some(order),
                |ui, handle, row, item| {
                    ui.horizontal(|ui| {
                        handle.ui(ui, |ui| {
                            ui.label(RichText::new("::").monospace());
                        });
                        ui.label(format!("{}.", row.index + 1));
                        ui.label(item);
                    });
                },
            );
            if let Some(order) = committed {
                self.runtimes = order;
                self.last_saved = Some(self.runtimes.clone());
            }

            ui.add_space(8.0);
            match response {
                ReorderResponse::Dragging { .. } => {
                    ui.label("Release inside the list to save the new order.");
                }
                ReorderResponse::Committed => {
                    ui.label("Order saved.");
                }
                _ => {
                    if let Some(saved) = &self.last_saved {
                        ui.label(format!("Current order: {}", saved.join(" > ")));
                    }
                }
            }
        });
    }
}

fn main() {
    eframe::run_native(
        "Reorder demo",
        NativeOptions::default(),
        Box::new(|_| Box::new(DemoApp::default())),
    );
}
