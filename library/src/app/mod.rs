//! Catalog browser application state and main loop
//!
//! Two menus in sequence: the server's platforms, then the ROMs of the chosen
//! platform. Both lists are fetched in the background while the window keeps
//! polling input.

mod init;


pub use init::AppError;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui;

use romm_core::config::Config;
use romm_core::{
    CatalogClient, FramePacer, MenuDriver, MenuItem, MenuOutcome, NavEvent, PendingFetch,
    rom_destination,
};
use romm_shared::{Catalog, Platform, Rom};

use crate::ui::{EguiSurface, ROW_X, collect_events};

/// What the window currently shows.
enum Screen {
    Platforms(MenuDriver<Platform>),
    Roms {
        platform: Platform,
        menu: MenuDriver<Rom>,
    },
    /// Final text; any key closes the window.
    Message,
    Closing,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Self::Platforms(_) => "platforms",
            Self::Roms { .. } => "roms",
            Self::Message => "message",
            Self::Closing => "closing",
        }
    }

    /// Delay until the current menu may repaint. `None` when nothing is
    /// animated and only input should wake the window.
    fn next_paint(&self, now: Instant) -> Option<Duration> {
        match self {
            Self::Platforms(menu) => Some(menu.pacer().until_next(now)),
            Self::Roms { menu, .. } => Some(menu.pacer().until_next(now)),
            Self::Message | Self::Closing => None,
        }
    }
}

/// Catalog browser application
pub struct App {
    config: Config,
    /// Runs background fetches
    runtime: tokio::runtime::Runtime,
    /// `None` when the configured server could not be used
    client: Option<CatalogClient>,
    screen: Screen,
    surface: EguiSurface,
    input: VecDeque<NavEvent>,
}

impl App {
    /// Create the application and start fetching platforms.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("romm-fetch")
            .enable_all()
            .build()
            .map_err(AppError::Runtime)?;

        let mut app = Self {
            surface: EguiSurface::new(&config.display),
            config,
            runtime,
            client: None,
            screen: Screen::Closing,
            input: VecDeque::new(),
        };

        match CatalogClient::new(&app.config.server, &app.config.network) {
            Ok(client) => {
                app.client = Some(client);
                app.screen = app.platforms_screen();
            }
            Err(e) => {
                tracing::error!("Cannot use configured server: {}", e);
                app.screen = app.message(&format!("Cannot connect\n{}", e));
            }
        }

        Ok(app)
    }

    fn max_label_width(&self) -> f32 {
        self.config.display.width as f32 - 2.0 * ROW_X
    }

    fn menu<T: MenuItem>(&self, pending: PendingFetch<Catalog<T>>) -> MenuDriver<T> {
        MenuDriver::loading(
            pending,
            self.config.display.visible_items,
            self.config.display.frame_rate,
        )
        .with_max_label_width(self.max_label_width())
    }

    fn platforms_screen(&mut self) -> Screen {
        let Some(client) = self.client.clone() else {
            return Screen::Closing;
        };
        tracing::info!("Fetching platforms from {}", client.base_url());
        let pending =
            PendingFetch::spawn(self.runtime.handle(), async move { client.fetch_platforms().await });
        Screen::Platforms(self.menu(pending))
    }

    fn roms_screen(&mut self, platform: Platform) -> Screen {
        let Some(client) = self.client.clone() else {
            return Screen::Closing;
        };
        tracing::info!("Fetching ROMs for {} (id {})", platform.label(), platform.id);
        let platform_id = platform.id;
        let pending = PendingFetch::spawn(self.runtime.handle(), async move {
            client.fetch_roms(platform_id).await
        });
        Screen::Roms {
            menu: self.menu(pending),
            platform,
        }
    }

    fn message(&mut self, text: &str) -> Screen {
        self.surface.show_message(text);
        self.surface.set_footer("Press any key to exit");
        Screen::Message
    }

    fn chosen(&mut self, platform: &Platform, rom: &Rom) -> Screen {
        match rom_destination(&self.config.storage.rom_root, platform, rom) {
            Some(path) => {
                tracing::info!("Selected {} -> {}", rom.label(), path.display());
                self.message(&format!("{}\n{}", rom.label(), path.display()))
            }
            None => {
                tracing::warn!("No usable destination for {}", rom.label());
                self.message(&format!("{}\nNo usable destination on this device", rom.label()))
            }
        }
    }

    /// Runs one frame of the current screen and returns the next one.
    fn advance(&mut self, screen: Screen, key_pressed: bool, now: Instant) -> Screen {
        let next = match screen {
            Screen::Platforms(mut menu) => {
                match menu.tick(&mut self.input, &mut self.surface, now) {
                    None => {
                        self.update_footer(menu.is_loading(), menu.pacer());
                        return Screen::Platforms(menu);
                    }
                    Some(MenuOutcome::Selected(platform)) => self.roms_screen(platform),
                    Some(MenuOutcome::Quit) => Screen::Closing,
                    Some(MenuOutcome::Failed(e)) => {
                        self.message(&format!("Failed to load platforms\n{}", e))
                    }
                }
            }
            Screen::Roms { platform, mut menu } => {
                match menu.tick(&mut self.input, &mut self.surface, now) {
                    None => {
                        self.update_footer(menu.is_loading(), menu.pacer());
                        return Screen::Roms { platform, menu };
                    }
                    Some(MenuOutcome::Selected(rom)) => self.chosen(&platform, &rom),
                    Some(MenuOutcome::Quit) => self.platforms_screen(),
                    Some(MenuOutcome::Failed(e)) => {
                        self.message(&format!("Failed to load ROMs\n{}", e))
                    }
                }
            }
            Screen::Message if !key_pressed => {
                self.input.clear();
                return Screen::Message;
            }
            Screen::Message | Screen::Closing => Screen::Closing,
        };

        // Keys left over from the previous screen must not leak into the next.
        self.input.clear();
        tracing::debug!("Screen -> {}", next.name());
        next
    }

    fn update_footer(&mut self, loading: bool, pacer: &FramePacer) {
        if loading {
            self.surface.set_footer("Loading...");
        } else {
            self.surface.set_footer(format!("{:.0} fps", pacer.fps()));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_pressed = collect_events(ctx, &mut self.input);
        self.surface
            .attach(ctx.layer_painter(egui::LayerId::background()));

        let screen = std::mem::replace(&mut self.screen, Screen::Closing);
        self.screen = self.advance(screen, key_pressed, Instant::now());

        if matches!(self.screen, Screen::Closing) {
            tracing::info!("Closing catalog browser");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                self.surface.draw(ui.painter(), ui.max_rect());
            });

        if let Some(delay) = self.screen.next_paint(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}

/// Run the catalog browser
pub fn run(config: Config) -> Result<(), AppError> {
    tracing::info!("Starting RomM catalog browser");

    let size = [config.display.width as f32, config.display.height as f32];
    let app = App::new(config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("RomM")
            .with_inner_size(size)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "RomM",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}
