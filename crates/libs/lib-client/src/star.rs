//! # Falling Stars
//!
//! Every [`SPAWN_INTERVAL_MS`] one star is appended to the page and a removal is
//! scheduled [`STAR_LIFETIME_MS`] later. The CSS animation runs 1.8–3.6 s, so a
//! star is always gone after its animation ends; at steady state about nine
//! stars are on screen.
//!
//! The DOM and the timers are behind [`StarCanvas`] and [`Scheduler`].

use std::rc::Rc;

pub const SPAWN_INTERVAL_MS: u32 = 420;
pub const STAR_LIFETIME_MS: u32 = 3800;

/// Bounds of the `--end` custom property.
pub const END_RANGE: (f64, f64) = (0.2, 1.0);

/// Bounds of the animation duration in seconds.
pub const DURATION_RANGE_SECS: (f64, f64) = (1.8, 3.6);

/// CSS class the stylesheet animates.
pub const STAR_CLASS: &str = "star";

/// Map a uniform draw `u` in `[0, 1)` onto `[a, b)`.
///
/// Rounding can push `a + u * (b - a)` onto `b` for `u` just below one; such a
/// result is pulled back below `b`.
pub fn random_between(a: f64, b: f64, u: f64) -> f64 {
    let value = a + u * (b - a);
    if value < b {
        value
    } else {
        b - (b - a) * f64::EPSILON
    }
}

/// Parameters of one star. Positions are fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub start: f64,
    pub end: f64,
    pub duration_secs: f64,
}

impl Star {
    /// Draw a star from a source of uniform `[0, 1)` values.
    pub fn random<R: FnMut() -> f64>(draw: &mut R) -> Self {
        Self {
            start: draw(),
            end: random_between(END_RANGE.0, END_RANGE.1, draw()),
            duration_secs: random_between(DURATION_RANGE_SECS.0, DURATION_RANGE_SECS.1, draw()),
        }
    }

    /// Duration as a CSS time value, e.g. `2.5s`.
    pub fn duration_css(&self) -> String {
        format!("{}s", self.duration_secs)
    }
}

/// Where stars are drawn.
pub trait StarCanvas: 'static {
    type Node: 'static;
    type Error: std::fmt::Debug;

    fn append(&self, star: &Star) -> Result<Self::Node, Self::Error>;
    fn remove(&self, node: &Self::Node);
}

/// Deferred and repeating tasks on the host event loop.
pub trait Scheduler: 'static {
    /// Cancels the repeating task when dropped.
    type Repeat;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Repeat;
    /// Let a repeating task run for the rest of the page's life.
    fn detach(&self, repeat: Self::Repeat);
}

/// Create one star, append it, and schedule its removal.
///
/// Returns `None` when the canvas refused the star; nothing is scheduled then.
pub fn tick<C, S, R>(canvas: &Rc<C>, scheduler: &S, draw: &mut R) -> Option<Star>
where
    C: StarCanvas,
    S: Scheduler,
    R: FnMut() -> f64,
{
    let star = Star::random(draw);
    match canvas.append(&star) {
        Ok(node) => {
            let canvas = Rc::clone(canvas);
            scheduler.after(STAR_LIFETIME_MS, Box::new(move || canvas.remove(&node)));
            Some(star)
        }
        Err(err) => {
            log::debug!("Skipping star, canvas refused it: {:?}", err);
            None
        }
    }
}

/// Running spawner. Dropping it (or calling [`stop`](Self::stop)) stops new
/// stars; stars already on screen are still removed on schedule.
pub struct StarSpawner<S: Scheduler> {
    scheduler: Rc<S>,
    repeat: Option<S::Repeat>,
}

impl<S: Scheduler> StarSpawner<S> {
    /// Start ticking every [`SPAWN_INTERVAL_MS`].
    pub fn start<C, R>(canvas: Rc<C>, scheduler: Rc<S>, mut draw: R) -> Self
    where
        C: StarCanvas,
        R: FnMut() -> f64 + 'static,
    {
        let tick_scheduler = Rc::clone(&scheduler);
        let repeat = scheduler.every(
            SPAWN_INTERVAL_MS,
            Box::new(move || {
                tick(&canvas, tick_scheduler.as_ref(), &mut draw);
            }),
        );
        log::debug!("Star spawner started ({} ms interval)", SPAWN_INTERVAL_MS);
        Self {
            scheduler,
            repeat: Some(repeat),
        }
    }

    pub fn is_running(&self) -> bool {
        self.repeat.is_some()
    }

    pub fn stop(&mut self) {
        if self.repeat.take().is_some() {
            log::debug!("Star spawner stopped");
        }
    }

    /// Keep spawning until the page goes away.
    pub fn run_forever(mut self) {
        if let Some(repeat) = self.repeat.take() {
            self.scheduler.detach(repeat);
        }
    }
}
