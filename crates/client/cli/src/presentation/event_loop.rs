//! Event loop driving the engine clock, user input, and rendering.
//!
//! Each frame drains pending terminal events into the engine, advances the
//! engine by one tick, folds its presentation updates into the scene mirror
//! and redraws.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use wardrobe_core::{
    Catalog, Interaction, Timestamp, Wardrobe, WardrobeConfig, WardrobeError, ZoneRegions,
};

use crate::{
    input::{InputHandler, KeyAction, MouseAction},
    presentation::{
        narrate,
        scene::Scene,
        terminal::Tui,
        ui::{self, View},
    },
    state::AppState,
};

pub struct EventLoop {
    catalog: Catalog,
    engine_config: WardrobeConfig,
    wardrobe: Wardrobe,
    regions: ZoneRegions,
    scene: Scene,
    input: InputHandler,
    app_state: AppState,
    frame_interval: Duration,
    started: Instant,
}

impl EventLoop {
    pub fn new(
        catalog: Catalog,
        wardrobe: Wardrobe,
        app_state: AppState,
        frame_interval: Duration,
    ) -> Self {
        let regions = ZoneRegions::from_zones(wardrobe.zones());
        let scene = Scene::from_wardrobe(&wardrobe);
        Self {
            catalog,
            engine_config: *wardrobe.config(),
            wardrobe,
            regions,
            scene,
            input: InputHandler::new(),
            app_state,
            frame_interval,
            started: Instant::now(),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<Wardrobe> {
        let mut ticker = time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.handle_input()? {
                        break;
                    }
                    self.advance_frame();
                    self.render(terminal)?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        Ok(self.wardrobe)
    }

    fn now(&self) -> Timestamp {
        let elapsed = self.started.elapsed().as_millis();
        Timestamp::from_millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }

    /// Processes every queued terminal event. Returns `true` on quit.
    fn handle_input(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                TermEvent::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let frame = self.wardrobe.frame();
        match self.input.handle_key(key) {
            KeyAction::Quit => return true,
            KeyAction::ClearAll => {
                let zones: Vec<_> = self.wardrobe.zones().iter().map(|zone| zone.id()).collect();
                let mut cleared = 0;
                for zone in zones {
                    match self.wardrobe.clear(zone) {
                        Ok(Some(_)) => cleared += 1,
                        Ok(None) => {}
                        Err(e) => narrate::log_engine_error("clear", &e),
                    }
                }
                self.app_state
                    .messages
                    .info(frame, format!("took off {} item(s)", cleared));
            }
            KeyAction::Reset => self.reset(),
            KeyAction::Repair => {
                if let Err(violation) = self.wardrobe.check_invariants() {
                    narrate::log_engine_error("invariant check", &violation);
                    self.app_state
                        .messages
                        .warn(frame, format!("{} ({})", violation, violation.error_code()));
                }
                let repairs = self.wardrobe.repair();
                self.app_state
                    .messages
                    .info(frame, format!("{} repair(s) applied", repairs));
            }
            KeyAction::None => {}
        }
        false
    }

    /// Replaces the engine with a fresh one built from the same catalog.
    fn reset(&mut self) {
        match Wardrobe::from_catalog(&self.catalog, self.engine_config) {
            Ok(wardrobe) => {
                self.regions = ZoneRegions::from_zones(wardrobe.zones());
                self.scene = Scene::from_wardrobe(&wardrobe);
                self.input = InputHandler::new();
                self.wardrobe = wardrobe;
                self.scene.apply_all(self.wardrobe.drain_events());
                self.app_state.messages.info(self.wardrobe.frame(), "wardrobe reset");
                tracing::info!("session reset from catalog");
            }
            Err(e) => {
                narrate::log_engine_error("reset", &e);
                self.app_state
                    .messages
                    .warn(self.wardrobe.frame(), format!("reset failed: {}", e));
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(viewport) = self.app_state.viewport else {
            return;
        };
        let now = self.now();
        match self.input.handle_mouse(mouse, &viewport, now) {
            MouseAction::Pointer(event) => {
                let outcome = self.wardrobe.handle_pointer(event, &self.regions);
                self.report(outcome);
            }
            MouseAction::ClearAt(position) => {
                let Some(zone) = self.wardrobe.zone_at_point(position) else {
                    return;
                };
                match self.wardrobe.clear(zone) {
                    Ok(Some(item)) => {
                        let text = format!(
                            "took {} off the {}",
                            narrate::item_name(&self.wardrobe, item),
                            narrate::zone_name(&self.wardrobe, zone)
                        );
                        self.app_state.messages.info(self.wardrobe.frame(), text);
                    }
                    Ok(None) => {}
                    Err(e) => narrate::log_engine_error("clear", &e),
                }
            }
            MouseAction::None => {}
        }
    }

    fn advance_frame(&mut self) {
        let now = self.now();
        let outcome = self.wardrobe.tick(now, &self.regions);
        self.report(outcome);
        self.scene.apply_all(self.wardrobe.drain_events());
    }

    fn report(&mut self, outcome: Option<Interaction>) {
        let Some(interaction) = outcome else {
            return;
        };
        let text = narrate::interaction(&self.wardrobe, &interaction);
        tracing::info!("{}", text);
        match interaction {
            Interaction::Rejected { .. } => self.app_state.messages.warn(self.wardrobe.frame(), text),
            _ => self.app_state.messages.info(self.wardrobe.frame(), text),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = View {
            wardrobe: &self.wardrobe,
            scene: &self.scene,
            app_state: &self.app_state,
        };
        let viewport = ui::render(terminal, &view)?;
        if viewport.is_some() {
            self.app_state.viewport = viewport;
        }
        Ok(())
    }
}
