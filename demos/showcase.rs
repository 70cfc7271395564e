//! Run with `cargo run --example showcase`.

use combofield::prelude::*;
use dark_light::Mode;
use eframe::egui;

#[derive(Clone, PartialEq)]
struct Roast {
    name: &'static str,
    origin: &'static str,
}

const ROASTS: [Roast; 4] = [
    Roast { name: "Blonde", origin: "Ethiopia" },
    Roast { name: "Medium", origin: "Colombia" },
    Roast { name: "Dark", origin: "Sumatra" },
    Roast { name: "French", origin: "Brazil" },
];

#[derive(Default)]
struct Showcase {
    roast: Option<Roast>,
    grind: Option<&'static str>,
    size: Option<&'static str>,
    log: Vec<String>,
}

impl eframe::App for Showcase {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Dropdown fields");
            ui.add_space(12.0);

            let picked = &mut self.log;
            ui.add(
                DropdownField::new(&ROASTS, &mut self.roast, |roast| {
                    format!("{} ({})", roast.name, roast.origin)
                })
                .id_salt("roast")
                .label_text("Roast")
                .hint("Pick a roast")
                .prefix("☕")
                .width(220.0)
                .on_change(|roast| {
                    if let Some(roast) = roast {
                        picked.push(format!("roast -> {}", roast.name));
                    }
                })
                .validator(|roast| match roast {
                    None => Some("A roast is required.".to_owned()),
                    Some(_) => None,
                }),
            );

            ui.add_space(8.0);
            let grinds = ["coarse", "medium", "fine", "espresso"];
            ui.add(
                DropdownField::new(&grinds, &mut self.grind, |grind| grind.to_string())
                    .id_salt("grind")
                    .label_text("Grind")
                    .hint("How fine?")
                    .suffix("⚙")
                    .arrow_glyph("▾")
                    .corner_radius(6.0)
                    .elevation(8.0)
                    .width(220.0),
            );

            ui.add_space(8.0);
            let sizes = ["small", "large"];
            ui.add(
                DropdownField::new(&sizes, &mut self.size, |size| size.to_string())
                    .id_salt("size")
                    .label_text("Size (sold out)")
                    .hint("Unavailable")
                    .enabled(false)
                    .width(220.0),
            );

            ui.add_space(12.0);
            ui.separator();
            for line in &self.log {
                ui.monospace(line);
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    eframe::run_native(
        "combofield showcase",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            let ctx = &cc.egui_ctx;
            ctx.set_style_of(egui::Theme::Light, workbench_light());
            ctx.set_style_of(egui::Theme::Dark, workbench_dark());
            let theme = match dark_light::detect() {
                Ok(Mode::Light) => egui::ThemePreference::Light,
                Ok(Mode::Dark) => egui::ThemePreference::Dark,
                Ok(Mode::Unspecified) | Err(_) => egui::ThemePreference::Dark,
            };
            ctx.set_theme(theme);
            Ok(Box::new(Showcase::default()))
        }),
    )
}
