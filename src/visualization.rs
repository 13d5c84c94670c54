//! Interactive 3D cube viewer using kiss3d.

use std::time::Instant;

use kiss3d::prelude::*;

use crate::animator::{Animator, RotationRequest, Ticket};
use crate::cube::{Cube, Selection, Tick};
use crate::cubelet::Cubelet;
use crate::direction::Direction;
use crate::geometry::{rotate_point, Axis};
use crate::presets;
use crate::scheduler::Scheduler;
use crate::solver::Rewind;
use crate::CubeConfig;

const TITLE: &str =
    "cuber - [letters] twist, [I] invert next, [Space] shuffle, [Q] solve, [N/H/W/T] presets";

/// A rotation being played, started when the cube issued it.
struct Motion {
    request: RotationRequest,
    started: Instant,
}

impl Motion {
    fn progress(&self, now: Instant) -> f32 {
        let total = self.request.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(self.started).as_secs_f32() / total).clamp(0.0, 1.0)
    }
}

/// Plays rotations in real time and reports them once their duration has
/// passed.
#[derive(Default)]
pub struct ViewerAnimator {
    motions: Vec<Motion>,
}

impl ViewerAnimator {
    /// Angle per axis a cubelet is drawn at.
    ///
    /// The cube has already accumulated the full twist, so whatever is still
    /// to play is taken back off.
    fn angles(&self, cubelet: &Cubelet, now: Instant) -> [f32; 3] {
        let mut angles = Axis::ALL.map(|axis| cubelet.rotation(axis) as f32);
        for motion in self.motions.iter().filter(|m| m.request.cubelet == cubelet.id) {
            let remaining = 1.0 - motion.progress(now);
            angles[motion.request.axis.index()] -= motion.request.degrees as f32 * remaining;
        }
        angles
    }
}

impl Animator for ViewerAnimator {
    fn apply_rotation(&mut self, request: RotationRequest) {
        self.motions.push(Motion {
            request,
            started: Instant::now(),
        });
    }

    fn completed(&mut self) -> Vec<Ticket> {
        let now = Instant::now();
        let (done, playing): (Vec<Motion>, Vec<Motion>) = self
            .motions
            .drain(..)
            .partition(|motion| motion.progress(now) >= 1.0);
        self.motions = playing;
        done.into_iter().map(|motion| motion.request.ticket).collect()
    }
}

/// Maps a key to the command letter it twists.
fn command_letter(key: kiss3d::event::Key) -> Option<char> {
    use kiss3d::event::Key;
    let letter = match key {
        Key::X => 'X',
        Key::L => 'L',
        Key::M => 'M',
        Key::R => 'R',
        Key::Y => 'Y',
        Key::U => 'U',
        Key::E => 'E',
        Key::D => 'D',
        Key::Z => 'Z',
        Key::F => 'F',
        Key::S => 'S',
        Key::B => 'B',
        _ => return None,
    };
    Some(letter)
}

/// Builds scene nodes for every shown cubelet at its current pose.
///
/// Cube coordinates map straight to world units: x right, y up, z toward the
/// camera, with the core at the origin.
fn build_scene(scene: &mut SceneNode3d, cube: &Cube<ViewerAnimator>) -> Vec<SceneNode3d> {
    /// Edge length of a cubelet body, leaving visible gaps.
    const BODY_SIZE: f32 = 0.94;
    const STICKER_SIZE: f32 = 0.8;
    const STICKER_DEPTH: f32 = 0.04;
    /// World units per unit of appearance radius.
    const RADIUS_SCALE: f32 = 0.01;

    let now = Instant::now();
    let mut nodes = Vec::new();

    for cubelet in cube.cubelets() {
        let look = cubelet.appearance;
        if !look.shown {
            continue;
        }
        let angles = cube.animator().angles(cubelet, now);
        let pose = |p: (f32, f32, f32)| {
            Axis::ALL
                .iter()
                .fold(p, |p, &axis| rotate_point(axis, angles[axis.index()], p))
        };
        let spread = 1.0 + look.radius * RADIUS_SCALE;
        let (x, y, z) = cubelet.coord();
        let home = (x as f32 * spread, y as f32 * spread, z as f32 * spread);

        if look.plastics || look.wireframes {
            let (shade, alpha) = if look.plastics {
                (0.08, look.opacity)
            } else {
                (0.9, look.opacity * 0.2)
            };
            let (px, py, pz) = pose(home);
            let node = scene
                .add_cube(BODY_SIZE, BODY_SIZE, BODY_SIZE)
                .set_color(Color::new(shade, shade, shade, alpha))
                .set_position(Vec3::new(px, py, pz));
            nodes.push(node);
        }

        if !look.stickers {
            continue;
        }
        // faces are kept in the order of the directions they now point
        for (direction, face) in Direction::ALL.into_iter().zip(cubelet.faces()) {
            if !face.color.is_visible() {
                continue;
            }
            let (nx, ny, nz) = direction.normal();
            let (nx, ny, nz) = (nx as f32, ny as f32, nz as f32);
            let offset = BODY_SIZE / 2.0;
            let (sx, sy, sz) = pose((
                home.0 + nx * offset,
                home.1 + ny * offset,
                home.2 + nz * offset,
            ));

            // thin along whichever world axis the normal points closest to
            let (rx, ry, rz) = pose((nx, ny, nz));
            let (w, h, d) = if rx.abs() >= ry.abs() && rx.abs() >= rz.abs() {
                (STICKER_DEPTH, STICKER_SIZE, STICKER_SIZE)
            } else if ry.abs() >= rz.abs() {
                (STICKER_SIZE, STICKER_DEPTH, STICKER_SIZE)
            } else {
                (STICKER_SIZE, STICKER_SIZE, STICKER_DEPTH)
            };
            let [r, g, b] = face.color.rgb();
            let node = scene
                .add_cube(w, h, d)
                .set_color(Color::new(r, g, b, look.opacity))
                .set_position(Vec3::new(sx, sy, sz));
            nodes.push(node);
        }
    }

    nodes
}

/// Opens the viewer and runs the cube until the window closes.
pub fn display(config: CubeConfig, notation: Option<String>, demo: bool, shuffle: bool) {
    pollster::block_on(display_async(config, notation, demo, shuffle));
}

async fn display_async(config: CubeConfig, notation: Option<String>, demo: bool, shuffle: bool) {
    let mut cube = Cube::with_animator(ViewerAnimator::default(), &config);
    if let Some(notation) = notation {
        cube.queue(notation);
    }
    cube.is_shuffling = shuffle;
    let mut tasks = if demo {
        presets::demo()
    } else {
        Scheduler::new()
    };

    let mut window = Window::new(TITLE).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut nodes = build_scene(&mut scene, &cube);
    // the next command letter turns anticlockwise
    let mut inverted = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Space => cube.is_shuffling = !cube.is_shuffling,
                        Key::Q => {
                            cube.is_shuffling = false;
                            cube.set_solver(Box::new(Rewind::new()));
                            cube.is_solving = true;
                        }
                        Key::I => inverted = !inverted,
                        Key::N => presets::normal(&mut cube),
                        Key::H => presets::highlight_white(&mut cube),
                        Key::W => presets::wireframe(&mut cube, &Selection::Slice("right")),
                        Key::T => presets::text(&mut cube),
                        key => {
                            if let Some(letter) = command_letter(key) {
                                let letter = if inverted {
                                    letter.to_ascii_lowercase()
                                } else {
                                    letter
                                };
                                cube.queue(letter);
                                inverted = false;
                            }
                        }
                    }
                }
            }
        }

        if cube.tick() == Tick::Idle {
            tasks.advance(&mut cube, Instant::now());
        }

        for mut node in nodes.drain(..) {
            node.remove();
        }
        nodes = build_scene(&mut scene, &cube);

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
