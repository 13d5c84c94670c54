//! Presentation presets and the looping demo.
//!
//! Presets only touch appearance bookkeeping; whatever animator the cube
//! carries is told about every change.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::info;

use crate::animator::Animator;
use crate::color::{BLUE, RED, WHITE, YELLOW};
use crate::cube::{Cube, Selection};
use crate::cubelet::{CubeletType, StyleChange};
use crate::scheduler::{Scheduler, Until};

use StyleChange::*;

fn style<A: Animator>(cube: &mut Cube<A>, selection: &Selection, changes: &[StyleChange]) {
    let ids = cube.select(selection);
    for &change in changes {
        cube.restyle(&ids, change);
    }
}

/// Solid plastics and stickers, nothing else.
pub fn normal<A: Animator>(cube: &mut Cube<A>) {
    style(
        cube,
        &Selection::All,
        &[
            Shown(true),
            Introverts(true),
            Plastics(true),
            Stickers(true),
            Texts(false),
            Wireframes(false),
            Ids(false),
            Opacity(1.0),
            Radius(0.0),
        ],
    );
}

/// Face text only.
pub fn text<A: Animator>(cube: &mut Cube<A>) {
    style(
        cube,
        &Selection::All,
        &[
            Shown(true),
            Plastics(false),
            Stickers(false),
            Ids(false),
            Introverts(false),
            Texts(true),
            Wireframes(false),
            Opacity(1.0),
        ],
    );
}

/// Wireframes for `included`, solid for the rest.
pub fn wireframe<A: Animator>(cube: &mut Cube<A>, included: &Selection) {
    let excluded = Selection::Except(Box::new(included.clone()));
    style(cube, &Selection::All, &[Introverts(true), Shown(true)]);
    style(cube, &excluded, &[Plastics(true), Stickers(true), Wireframes(false)]);
    style(cube, included, &[Plastics(false), Stickers(false), Wireframes(true)]);
}

/// Fades everything but `included`.
pub fn highlight<A: Animator>(cube: &mut Cube<A>, included: &Selection) {
    let excluded = Selection::Except(Box::new(included.clone()));
    style(cube, &excluded, &[Opacity(0.1)]);
    style(cube, included, &[Opacity(1.0)]);
}

pub fn highlight_core<A: Animator>(cube: &mut Cube<A>) {
    highlight(cube, &Selection::Type(CubeletType::Core));
}

pub fn highlight_centers<A: Animator>(cube: &mut Cube<A>) {
    highlight(cube, &Selection::Type(CubeletType::Center));
}

pub fn highlight_edges<A: Animator>(cube: &mut Cube<A>) {
    highlight(cube, &Selection::Type(CubeletType::Edge));
}

pub fn highlight_corners<A: Animator>(cube: &mut Cube<A>) {
    highlight(cube, &Selection::Type(CubeletType::Corner));
}

pub fn highlight_white<A: Animator>(cube: &mut Cube<A>) {
    highlight(cube, &Selection::Color(WHITE));
}

fn settled<A: Animator>(cube: &Cube<A>) -> bool {
    cube.twist_queue.is_empty() && cube.is_tweening() == 0
}

fn seconds<A: Animator>(seconds: u64) -> Until<Cube<A>> {
    Until::Elapsed(Duration::from_secs(seconds))
}

/// Queues `rdRD` the given number of times and holds until it has played.
fn burst<A: Animator + 'static>(demo: &mut Scheduler<Cube<A>>, times: usize) {
    demo.then(
        move |cube| cube.queue("rdRD".repeat(times)),
        Until::Condition(Rc::new(settled::<A>)),
    );
}

/// Fades a slice out, restyles it, and fades it back in.
fn swap_slice<A: Animator + 'static>(
    demo: &mut Scheduler<Cube<A>>,
    slice: &'static str,
    changes: &'static [StyleChange],
) {
    demo.then(
        move |cube| style(cube, &Selection::Slice(slice), &[Opacity(0.0)]),
        seconds(1),
    )
    .then(
        move |cube| {
            style(cube, &Selection::Slice(slice), changes);
            style(cube, &Selection::Slice(slice), &[Opacity(1.0)]);
        },
        seconds(1),
    );
}

/// The looping demo: twist bursts interleaved with opacity, radius,
/// highlight, wireframe, and text passes.
///
/// Every pass plays 36 `rdRD` sequences, a whole number of cycles, so the
/// cube is solved again at the end of each loop.
pub fn demo<A: Animator + 'static>() -> Scheduler<Cube<A>> {
    let mut demo: Scheduler<Cube<A>> = Scheduler::new();
    let loops = Rc::new(Cell::new(0u32));

    demo.then(normal::<A>, seconds(1));
    burst(&mut demo, 6);

    // opacity
    demo.then(
        |cube| style(cube, &Selection::Slice("back"), &[Opacity(0.2)]),
        seconds(1),
    )
    .then(
        |cube| style(cube, &Selection::Slice("standing"), &[Opacity(0.2)]),
        seconds(1),
    );
    burst(&mut demo, 3);
    burst(&mut demo, 3);
    demo.then(
        |cube| style(cube, &Selection::Slice("standing"), &[Opacity(1.0)]),
        seconds(1),
    )
    .then(
        |cube| style(cube, &Selection::Slice("back"), &[Opacity(1.0)]),
        seconds(1),
    );

    // radius
    for slice in ["down", "equator", "up"] {
        demo.then(
            move |cube| style(cube, &Selection::Slice(slice), &[Radius(90.0)]),
            seconds(1),
        );
    }
    burst(&mut demo, 2);
    for slice in ["back", "standing"] {
        demo.then(
            move |cube| style(cube, &Selection::Slice(slice), &[Radius(0.0)]),
            seconds(1),
        );
    }
    burst(&mut demo, 2);
    demo.then(
        |cube| {
            let included = Selection::Colors(vec![RED, YELLOW, BLUE]);
            let excluded = Selection::Except(Box::new(included.clone()));
            style(cube, &excluded, &[Radius(0.0), Opacity(0.5)]);
            style(cube, &included, &[Radius(120.0), Opacity(1.0)]);
            style(cube, &Selection::Slice("back"), &[Radius(0.0)]);
            style(cube, &Selection::All, &[Ids(true)]);
        },
        seconds(6),
    );
    burst(&mut demo, 2);
    demo.wait(Duration::from_secs(6));
    demo.then(
        |cube| style(cube, &Selection::All, &[Radius(0.0)]),
        seconds(3),
    );

    // cubelet types
    demo.then(highlight_core::<A>, seconds(1));
    demo.then(
        |cube| style(cube, &Selection::All, &[Ids(true)]),
        seconds(2),
    );
    burst(&mut demo, 2);
    demo.then(highlight_centers::<A>, Until::Immediately);
    burst(&mut demo, 4);
    demo.then(highlight_edges::<A>, Until::Immediately);
    burst(&mut demo, 3);
    demo.then(highlight_corners::<A>, Until::Immediately);
    burst(&mut demo, 3);
    demo.wait(Duration::from_secs(2));

    // wireframes
    for slice in ["left", "middle", "right"] {
        swap_slice(
            &mut demo,
            slice,
            &[Plastics(false), Stickers(false), Wireframes(true), Ids(true)],
        );
    }
    burst(&mut demo, 3);

    // texts
    for slice in ["left", "middle", "right"] {
        swap_slice(
            &mut demo,
            slice,
            &[
                Plastics(false),
                Stickers(false),
                Wireframes(false),
                Ids(false),
                Texts(true),
            ],
        );
    }
    burst(&mut demo, 3);
    demo.wait(Duration::from_secs(8));

    // back to normal
    for slice in ["left", "middle", "right"] {
        swap_slice(
            &mut demo,
            slice,
            &[Plastics(true), Stickers(true), Texts(false)],
        );
    }

    demo.then(
        move |cube| {
            loops.set(loops.get() + 1);
            info!("the demo has completed {} loops", loops.get());
            cube.forget_history();
        },
        Until::Immediately,
    );
    demo.set_looping(true);
    demo
}

/// Stops the demo and drops any twists it queued.
pub fn stop_demo<A: Animator>(cube: &mut Cube<A>, demo: &mut Scheduler<Cube<A>>) {
    demo.stop();
    cube.twist_queue.empty();
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::cube::Tick;
    use crate::cubelet::Appearance;

    fn appearances(cube: &Cube) -> Vec<Appearance> {
        cube.cubelets().iter().map(|c| c.appearance).collect()
    }

    #[test]
    fn test_highlight_fades_the_rest() {
        let mut cube = Cube::default();
        highlight_corners(&mut cube);
        assert_eq!(cube.corners().average_opacity(), 1.0);
        assert!(cube.edges().iter().all(|c| c.appearance.opacity == 0.1));
        assert_eq!(cube.core().average_opacity(), 0.1);

        normal(&mut cube);
        assert_eq!(cube.all().average_opacity(), 1.0);
    }

    #[test]
    fn test_highlight_white_follows_the_color() {
        let mut cube = Cube::default();
        cube.queue("R");
        cube.run(10);
        highlight_white(&mut cube);
        let lit: Vec<usize> = cube
            .cubelets()
            .iter()
            .filter(|c| c.appearance.opacity == 1.0)
            .map(|c| c.id)
            .collect();
        assert_eq!(lit, cube.has_color(WHITE).ids());
        assert_eq!(lit.len(), 9);
    }

    #[test]
    fn test_wireframe_splits_the_cube() {
        let mut cube = Cube::default();
        wireframe(&mut cube, &Selection::Slice("right"));
        for cubelet in cube.right().iter() {
            assert!(cubelet.appearance.wireframes);
            assert!(!cubelet.appearance.plastics);
        }
        for cubelet in cube.left().iter() {
            assert!(!cubelet.appearance.wireframes);
            assert!(cubelet.appearance.stickers);
        }
    }

    #[test]
    fn test_text_hides_plastics() {
        let mut cube = Cube::default();
        text(&mut cube);
        assert!(cube.cubelets().iter().all(|c| c.appearance.texts));
        assert!(cube.cubelets().iter().all(|c| !c.appearance.plastics));
    }

    #[test]
    fn test_demo_pass_returns_to_normal() {
        let mut cube = Cube::default();
        let mut demo = demo();
        demo.set_looping(false);

        let mut now = Instant::now();
        let mut twists = 0;
        for _ in 0..100_000 {
            match cube.tick() {
                Tick::Idle => {
                    demo.advance(&mut cube, now);
                }
                Tick::Twisted(_) => twists += 1,
                _ => {}
            }
            if demo.is_empty() {
                break;
            }
            now += Duration::from_millis(100);
        }

        assert!(demo.is_empty());
        assert_eq!(twists, 36 * 4);
        assert!(cube.is_solved());
        assert!(cube.dispatched().is_empty());
        assert_eq!(appearances(&cube), vec![Appearance::default(); 27]);
    }

    #[test]
    fn test_stop_demo() {
        let mut cube = Cube::default();
        let mut demo = demo();
        let now = Instant::now();
        demo.advance(&mut cube, now);
        demo.advance(&mut cube, now + Duration::from_secs(1));
        assert!(!cube.twist_queue.is_empty());

        stop_demo(&mut cube, &mut demo);
        assert!(cube.twist_queue.is_empty());
        assert!(demo.is_empty());
        assert!(!demo.is_looping());
    }
}
