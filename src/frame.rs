use crate::config;
use crate::constants::{CLOCK_TICK_MS, DECAY_TICK_MS};
use crate::dom;
use crate::events::{self, KeyListener};
use crate::overlay;
use crate::render::SvgSurface;
use crate::timer::Interval;
use clock_core::{BrightenAnimation, BrightenPhase, ClockFace, ClockState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// The mounted clock: the two pieces of mutable state plus everything that
/// has to be torn down with it.
///
/// Field order is drop order: subscriptions and timers go before the surface.
pub struct ClockView {
    _key_listener: Option<KeyListener>,
    _clock_timer: Option<Interval>,
    decay_timer: Option<Interval>,
    surface: SvgSurface,
    face: ClockFace,
    clock: ClockState,
    brighten: BrightenAnimation,
}

impl ClockView {
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
    ) -> anyhow::Result<Rc<RefCell<Self>>> {
        overlay::show_loading(document, root);

        let face = config::face_from_root(root);
        let surface = SvgSurface::mount(document, root, &face)?;
        let view = Rc::new(RefCell::new(ClockView {
            _key_listener: None,
            _clock_timer: None,
            decay_timer: None,
            surface,
            face,
            clock: ClockState::new(dom::local_now_ms()),
            brighten: BrightenAnimation::new(),
        }));

        view.borrow_mut().redraw();
        if overlay::is_loading_visible(document) {
            overlay::hide_loading(document);
        }

        let weak = Rc::downgrade(&view);
        let clock_timer = Interval::start(CLOCK_TICK_MS, move || {
            if let Some(view) = weak.upgrade() {
                view.borrow_mut().on_clock_tick();
            }
        })?;
        let key_listener = events::wire_brighten_keydown(Rc::downgrade(&view))?;
        {
            let mut v = view.borrow_mut();
            v._clock_timer = Some(clock_timer);
            v._key_listener = Some(key_listener);
        }
        log::info!(
            "[view] mounted; {} circles per frame, clock tick {} ms",
            view.borrow().face.circle_count(),
            CLOCK_TICK_MS
        );
        Ok(view)
    }

    fn redraw(&mut self) {
        let scene = self.face.compose(self.clock, self.brighten.progress());
        self.surface.present(&scene);
    }

    fn on_clock_tick(&mut self) {
        self.clock.set_now(dom::local_now_ms());
        self.redraw();
    }

    pub fn on_key(view: &Rc<RefCell<Self>>) {
        let start_decay = {
            let mut v = view.borrow_mut();
            let started = v.brighten.trigger();
            v.redraw();
            started && v.decay_timer.is_none()
        };
        if !start_decay {
            log::debug!("[brighten] retriggered while decaying");
            return;
        }
        match Self::start_decay_timer(Rc::downgrade(view)) {
            Ok(timer) => {
                log::debug!("[brighten] decay timer started ({} ms)", timer.period_ms());
                view.borrow_mut().decay_timer = Some(timer);
            }
            Err(e) => log::error!("[brighten] decay timer: {:?}", e),
        }
    }

    fn start_decay_timer(weak: Weak<RefCell<Self>>) -> anyhow::Result<Interval> {
        Interval::start(DECAY_TICK_MS, move || {
            if let Some(view) = weak.upgrade() {
                Self::on_decay_tick(&view);
            }
        })
    }

    fn on_decay_tick(view: &Rc<RefCell<Self>>) {
        let finished = {
            let mut v = view.borrow_mut();
            let phase = v.brighten.tick();
            v.redraw();
            match phase {
                BrightenPhase::Idle => v.decay_timer.take(),
                BrightenPhase::Decaying => None,
            }
        };
        if let Some(timer) = finished {
            drop(timer);
            log::debug!("[brighten] idle; decay timer stopped");
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.surface.frames()
    }
}
