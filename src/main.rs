use std::cell::Cell as Shared;
use std::rc::Rc;

use eframe::{egui, epaint::Vec2};
use gui::{board_cell, camera_angle_degrees, player_color, tile_color};
use quad_chess::{
    Cell, Game, GameConfig, InputEvent, MatchInterface, Notification, Perspective,
};

mod gui;

struct App {
    game: Game,
    cell_size: f32,
    perspective: Rc<Shared<Perspective>>,
    log: Vec<String>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([820.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Four player chess",
        options,
        Box::new(|_cc| {
            let mut game = match Game::new(GameConfig::default()) {
                Ok(game) => game,
                Err(err) => panic!("Default configuration rejected: {err}"),
            };
            let perspective = Rc::new(Shared::new(game.perspective()));
            let view = perspective.clone();
            game.subscribe(move |notification| {
                if let Notification::TurnChanged { player } = notification {
                    view.set(Perspective::of(*player));
                }
            });
            Box::new(App {
                game,
                cell_size: 40.0,
                perspective,
                log: Vec::new(),
            })
        }),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut event = None;
        egui::SidePanel::right("control_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                if let Some(control) = self.control_panel(ui) {
                    event = Some(control);
                }
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(click) = self.grid(ui) {
                event = Some(click);
            }
        });
        if let Some(event) = event {
            if let Some(line) = self.game.describe_event(&event) {
                self.log.push(line.to_owned());
            }
            match self.game.dispatch(event) {
                Ok(notifications) => self.log.extend(
                    notifications
                        .iter()
                        .map(|notification| self.game.describe(notification)),
                ),
                Err(err) => self.log.push(format!("Error: {err}")),
            }
        }
    }
}

impl App {
    fn control_panel(&mut self, ui: &mut egui::Ui) -> Option<InputEvent> {
        let mut event = None;
        ui.heading("Four player chess");
        let player = self.game.current_player();
        ui.horizontal(|ui| {
            ui.label("Current player:");
            ui.colored_label(
                player_color(self.game.config(), player),
                self.game.config().player_name(player),
            );
        });
        ui.label(format!(
            "View angle: {:.0}°",
            camera_angle_degrees(self.perspective.get().angle())
        ));
        if let Some(piece) = self.game.selected() {
            ui.label(format!("Selected: {} at {:?}", piece.kind(), piece.position()));
        }
        ui.horizontal(|ui| {
            if ui.button("Next turn").clicked() {
                event = Some(InputEvent::ManualAdvanceTurn);
            }
            if ui.button("Reset").clicked() {
                event = Some(InputEvent::ResetBoard);
            }
        });
        ui.label("Right click moves onto any cell.");
        ui.separator();
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.log {
                    ui.label(line);
                }
            });
        event
    }

    fn grid(&mut self, ui: &mut egui::Ui) -> Option<InputEvent> {
        let size = self.game.board_size();
        let turns = self.perspective.get().quarter_turns();
        let selected = self.game.selected().map(|piece| piece.player());
        let mut event = None;
        egui::Grid::new("main_grid")
            .spacing([1.0, 1.0])
            .min_col_width(self.cell_size)
            .max_col_width(self.cell_size)
            .min_row_height(self.cell_size)
            .show(ui, |ui| {
                for y in 0..size {
                    for x in 0..size {
                        let (column, row) = board_cell(size, turns, x, y);
                        let cell = self.game.cell(column as usize, row as usize);
                        let (text, highlighted, owner) = match &cell {
                            Some(Cell::Figure(figure)) => (
                                egui::RichText::new(figure.kind.glyph().to_string())
                                    .strong()
                                    .color(egui::Color32::WHITE),
                                figure.selected,
                                Some(figure.player),
                            ),
                            _ => (egui::RichText::new(""), false, None),
                        };
                        let btn = egui::Button::new(text)
                            .fill(tile_color(self.game.config(), column, row, highlighted))
                            .stroke(match owner {
                                Some(player) => egui::Stroke::new(
                                    3.0,
                                    player_color(self.game.config(), player),
                                ),
                                None => egui::Stroke::NONE,
                            })
                            .min_size(Vec2::new(self.cell_size, self.cell_size));
                        let response = ui.add(btn);
                        let activate = InputEvent::CellActivated { column, row };
                        if response.secondary_clicked() {
                            event = Some(activate);
                        } else if response.clicked() {
                            event = Some(match (&cell, selected) {
                                (Some(Cell::Figure(figure)), Some(player))
                                    if figure.player != player =>
                                {
                                    activate
                                }
                                (Some(Cell::Figure(figure)), _) => {
                                    InputEvent::PieceSelected(figure.id)
                                }
                                _ => activate,
                            });
                        }
                    }
                    ui.end_row();
                }
            });
        event
    }
}
