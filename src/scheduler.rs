//! Timed steps run against a target between twists.
//!
//! Each step is an action plus the condition that must hold before the step
//! after it may run. The caller drives the scheduler with
//! [`Scheduler::advance`], usually whenever the cube reports it is idle.

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::trace;

use crate::queue::Queue;

pub type Action<T> = Rc<dyn Fn(&mut T)>;
pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// When a step counts as finished.
pub enum Until<T> {
    Immediately,
    Elapsed(Duration),
    Condition(Predicate<T>),
}

impl<T> Clone for Until<T> {
    fn clone(&self) -> Self {
        match self {
            Until::Immediately => Until::Immediately,
            Until::Elapsed(duration) => Until::Elapsed(*duration),
            Until::Condition(predicate) => Until::Condition(Rc::clone(predicate)),
        }
    }
}

impl<T> fmt::Debug for Until<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Until::Immediately => write!(f, "Immediately"),
            Until::Elapsed(duration) => write!(f, "Elapsed({duration:?})"),
            Until::Condition(_) => write!(f, "Condition(..)"),
        }
    }
}

pub struct Step<T> {
    action: Action<T>,
    until: Until<T>,
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
            until: self.until.clone(),
        }
    }
}

impl<T> fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("until", &self.until).finish()
    }
}

pub struct Scheduler<T> {
    steps: Queue<Step<T>>,
    waiting: Option<(Until<T>, Instant)>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            steps: Queue::new(),
            waiting: None,
        }
    }

    /// Appends a step.
    pub fn then(&mut self, action: impl Fn(&mut T) + 'static, until: Until<T>) -> &mut Self {
        self.steps.push(Step {
            action: Rc::new(action),
            until,
        });
        self
    }

    /// Appends a step that does nothing for `duration`.
    pub fn wait(&mut self, duration: Duration) -> &mut Self {
        self.then(|_| {}, Until::Elapsed(duration))
    }

    /// Appends a step that holds until `predicate` is true of the target.
    pub fn wait_for(&mut self, predicate: impl Fn(&T) -> bool + 'static) -> &mut Self {
        self.then(|_| {}, Until::Condition(Rc::new(predicate)))
    }

    pub fn is_looping(&self) -> bool {
        self.steps.is_looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.steps.is_looping = looping;
    }

    /// Steps not yet run in this pass.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when nothing is pending and nothing is being waited on.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.waiting.is_none()
    }

    /// Drops every pending step and stops looping.
    pub fn stop(&mut self) {
        self.steps.is_looping = false;
        self.steps.empty();
        self.steps.forget();
        self.waiting = None;
    }

    fn is_finished(until: &Until<T>, started: Instant, target: &T, now: Instant) -> bool {
        match until {
            Until::Immediately => true,
            Until::Elapsed(duration) => now.saturating_duration_since(started) >= *duration,
            Until::Condition(predicate) => predicate(target),
        }
    }

    /// Runs every step whose predecessor has finished by `now`. Returns the
    /// number of steps run.
    pub fn advance(&mut self, target: &mut T, now: Instant) -> usize {
        let mut ran = 0;
        loop {
            if let Some((until, started)) = &self.waiting {
                if !Self::is_finished(until, *started, target, now) {
                    return ran;
                }
                self.waiting = None;
            }

            let mut next = self.steps.advance().cloned();
            if next.is_none() && self.steps.is_looping && ran == 0 {
                trace!("scheduler looping");
                next = self.steps.advance().cloned();
            }
            let Some(step) = next else {
                return ran;
            };

            (step.action)(target);
            ran += 1;
            self.waiting = Some((step.until, now));
        }
    }
}
