//! The wizard's message handler.
//!
//! [`WizardApp`] ties the stage machine, the animation state, the layout and
//! the timer queue together. Every input (key press, resize, timer tick) is a
//! [`Message`]; [`WizardApp::handle`] applies one message completely before
//! the next is looked at, so a render never sees a half-applied update.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::catalog::Catalog;
use crate::error::Result;

use super::animation::{AnimationState, Scheduler, Tick};
use super::keys::BindingSet;
use super::layout::Layout;
use super::palette::WizardPalette;
use super::render::render;
use super::stage::{Transition, WizardState};
use super::{WizardOptions, WizardOutcome};

/// One input to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick(Tick),
}

/// Everything one wizard run owns.
#[derive(Debug)]
pub struct WizardApp {
    state: WizardState,
    anim: AnimationState,
    layout: Layout,
    palette: WizardPalette,
    scheduler: Scheduler,
}

impl WizardApp {
    pub fn new(catalog: Catalog, options: &WizardOptions) -> Self {
        let palette = if options.no_color {
            WizardPalette::plain()
        } else {
            WizardPalette::new()
        };
        let layout = Layout::default();
        let mut state = WizardState::new(catalog, options);
        state.set_list_size(layout.list_width, layout.list_height);

        Self {
            state,
            anim: AnimationState::new(),
            layout,
            palette,
            scheduler: Scheduler::new(),
        }
    }

    /// Queue the first tick of both timers.
    pub fn start(&mut self, now: Instant) {
        self.schedule(now, Tick::Reveal);
        if self.anim.arm_physics() {
            self.schedule(now, Tick::Physics);
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn animation(&self) -> &AnimationState {
        &self.anim
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Option<WizardOutcome> {
        self.state.outcome()
    }

    /// Apply one message.
    ///
    /// # Errors
    ///
    /// Propagates `CatalogInvariant` from the stage machine. The run is
    /// cancelled and its timers dropped before the error is returned.
    pub fn handle(&mut self, message: Message, now: Instant) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }

        match message {
            Message::Key(key) => {
                let Some(action) = BindingSet::for_stage(self.state.stage()).resolve(&key) else {
                    return Ok(());
                };
                let transition = match self.state.apply(action) {
                    Ok(t) => t,
                    Err(e) => {
                        self.scheduler.clear();
                        return Err(e);
                    }
                };
                match transition {
                    Transition::Moved(direction) => {
                        let content_width = self.layout.content_width();
                        if self.anim.trigger_transition(direction, content_width) {
                            self.schedule(now, Tick::Physics);
                        }
                    }
                    Transition::Finished | Transition::Cancelled => self.scheduler.clear(),
                    Transition::Stay => {}
                }
            }
            Message::Resize(width, height) => {
                self.layout = Layout::from_size(width, height);
                self.state
                    .set_list_size(self.layout.list_width, self.layout.list_height);
            }
            Message::Tick(Tick::Reveal) => {
                if self.anim.on_reveal_tick(self.layout.content_width()) {
                    self.schedule(now, Tick::Reveal);
                }
            }
            Message::Tick(Tick::Physics) => {
                if self.anim.on_physics_tick() {
                    self.schedule(now, Tick::Physics);
                }
            }
        }
        Ok(())
    }

    /// Draw the current state.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render(
            &self.state,
            &self.anim,
            &self.layout,
            &self.palette,
            area,
            buf,
        );
    }

    fn schedule(&mut self, now: Instant, tick: Tick) {
        self.scheduler.schedule(now, tick.interval(), tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::wizard::animation::PHYSICS_INTERVAL;
    use crate::wizard::stage::Stage;
    use crate::wizard::WizardResult;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn app() -> WizardApp {
        WizardApp::new(Catalog::builtin(), &WizardOptions::default())
    }

    /// Deliver every due tick until the queue drains or `limit` ticks ran.
    fn run_timers(app: &mut WizardApp, start: Instant, limit: usize) -> Instant {
        let mut now = start;
        for _ in 0..limit {
            let Some(deadline) = app.scheduler().next_deadline() else {
                break;
            };
            now = now.max(deadline);
            for tick in app.scheduler_mut().due(now) {
                app.handle(Message::Tick(tick), now).unwrap();
            }
        }
        now
    }

    #[test]
    fn start_arms_both_timers() {
        let mut app = app();
        app.start(Instant::now());
        assert_eq!(app.scheduler().len(), 2);
    }

    #[test]
    fn timers_run_dry() {
        let mut app = app();
        let now = Instant::now();
        app.start(now);
        run_timers(&mut app, now, 10_000);
        assert!(app.scheduler().is_empty());
        assert!(app.animation().panel_ready());
        assert!(app.animation().reveal_done());
    }

    #[test]
    fn stage_change_arms_physics_once() {
        let mut app = app();
        let now = Instant::now();
        app.start(now);
        run_timers(&mut app, now, 10_000);

        app.handle(key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.state().stage(), Stage::Framework);
        assert_eq!(app.scheduler().len(), 1);
        assert_eq!(app.scheduler().next_deadline(), Some(now + PHYSICS_INTERVAL));

        // A second change while the slide runs reuses the queued tick.
        app.handle(key(KeyCode::Char('b')), now).unwrap();
        assert_eq!(app.state().stage(), Stage::Language);
        assert_eq!(app.scheduler().len(), 1);
        assert_eq!(app.animation().transition_offset(), -82);
    }

    #[test]
    fn resize_updates_layout_and_lists() {
        let mut app = app();
        app.handle(Message::Resize(200, 60), Instant::now()).unwrap();
        assert_eq!(app.layout().panel_width, 160);
        assert_eq!(app.state().languages().width(), 100);
        assert_eq!(app.state().languages().height(), 30);
    }

    #[test]
    fn cancel_drops_timers() {
        let mut app = app();
        let now = Instant::now();
        app.start(now);
        app.handle(key(KeyCode::Esc), now).unwrap();
        assert!(app.is_finished());
        assert!(app.scheduler().is_empty());
        assert_eq!(app.outcome(), Some(WizardOutcome::Cancelled));

        // Nothing is accepted after cancel.
        app.handle(key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.state().stage(), Stage::Language);
    }

    #[test]
    fn keyboard_run_completes() {
        let mut app = app();
        let now = Instant::now();
        app.start(now);
        for msg in [
            key(KeyCode::Enter),
            key(KeyCode::Up),
            key(KeyCode::Enter),
            key(KeyCode::Char(' ')),
            key(KeyCode::Enter),
            key(KeyCode::Char('a')),
            key(KeyCode::Char('p')),
            key(KeyCode::Char('i')),
            key(KeyCode::Enter),
            key(KeyCode::Enter),
        ] {
            app.handle(msg, now).unwrap();
        }

        let expected = WizardResult {
            language: "Go".into(),
            framework: "Cobra".into(),
            name: "api".into(),
            libraries: vec!["gin".into()],
        };
        assert_eq!(app.outcome(), Some(WizardOutcome::Completed(expected)));
        assert!(app.scheduler().is_empty());
    }

    #[test]
    fn empty_catalog_error_cancels() {
        let mut app = WizardApp::new(Catalog::default(), &WizardOptions::default());
        let now = Instant::now();
        app.start(now);
        assert!(app.handle(key(KeyCode::Enter), now).is_err());
        assert!(app.scheduler().is_empty());
        assert_eq!(app.outcome(), Some(WizardOutcome::Cancelled));
    }

    #[test]
    fn render_draws_into_buffer() {
        let app = app();
        let area = Rect::new(0, 0, 96, 36);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
    }
}
