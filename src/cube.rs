//! The cube: 27 cubelets in slot order, a twist queue, and the dispatcher
//! that turns queued twists into member rotations and, once every member has
//! settled, into a permutation of the slots.

use std::time::Duration;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::animator::{Animator, InstantAnimator, RotationRequest, Ticket};
use crate::color::Color;
use crate::cubelet::{Cubelet, CubeletType, StyleChange};
use crate::direction::Direction;
use crate::error::TwistError;
use crate::grid::{self, Layer, SLOTS};
use crate::group::Group;
use crate::queue::Queue;
use crate::slice::Slice;
use crate::solver::Solver;
use crate::twist::{Notation, Twist};
use crate::CubeConfig;

/// Shortest time any twist is animated for.
pub const MIN_TWIST_DURATION: Duration = Duration::from_millis(250);

/// Shuffle alphabets.
pub const PRESERVE_LOGO: &str = "RrLlUuDdSsBb";
pub const ALL_SLICES: &str = "RrMmLlUuEeDdFfSsBb";
pub const EVERYTHING: &str = "XxRrMmLlYyUuEeDdZzFfSsBb";

/// Which commands a shuffle draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShuffleMethod {
    /// Never turns the front center, so a logo on it stays upright.
    #[default]
    PreserveLogo,
    AllSlices,
    Everything,
}

impl ShuffleMethod {
    pub fn alphabet(self) -> &'static str {
        match self {
            ShuffleMethod::PreserveLogo => PRESERVE_LOGO,
            ShuffleMethod::AllSlices => ALL_SLICES,
            ShuffleMethod::Everything => EVERYTHING,
        }
    }
}

/// Slot layouts of the nine slices, in compass order.
pub const SLICES: [(&str, [usize; 9]); 9] = [
    ("left", [24, 21, 18, 15, 12, 9, 6, 3, 0]),
    ("middle", [25, 22, 19, 16, 13, 10, 7, 4, 1]),
    ("right", [2, 11, 20, 5, 14, 23, 8, 17, 26]),
    ("up", [18, 19, 20, 9, 10, 11, 0, 1, 2]),
    ("equator", [21, 22, 23, 12, 13, 14, 3, 4, 5]),
    ("down", [8, 17, 26, 7, 16, 25, 6, 15, 24]),
    ("front", [0, 1, 2, 3, 4, 5, 6, 7, 8]),
    ("standing", [9, 10, 11, 12, 13, 14, 15, 16, 17]),
    ("back", [26, 23, 20, 25, 22, 19, 24, 21, 18]),
];

/// Pending and executed twists; raw notation is validated on the way in.
pub type TwistQueue = Queue<Twist, Notation>;

/// A set of cubelets to act on, resolved against the cube's current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Slice(&'static str),
    Type(CubeletType),
    Color(Color),
    /// Cubelets showing every listed color.
    Colors(Vec<Color>),
    Ids(Vec<usize>),
    /// Everything not in the inner selection.
    Except(Box<Selection>),
}

/// What one call to [`Cube::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Not ready, or cubelets are still tweening.
    Busy,
    Twisted(Twist),
    Rejected(TwistError),
    /// A random command was queued.
    Shuffled(char),
    /// The solver was consulted; carries whether it wants another turn.
    Considered(bool),
    /// Nothing to do; the caller may run its own tasks.
    Idle,
}

/// The twist currently waiting on its members.
#[derive(Debug)]
struct InFlight {
    twist: Twist,
    pending: FxHashMap<Ticket, usize>,
    remaps: Option<u32>,
}

pub struct Cube<A: Animator = InstantAnimator> {
    cubelets: Vec<Cubelet>,
    pub twist_queue: TwistQueue,
    pub is_ready: bool,
    pub is_shuffling: bool,
    pub is_solving: bool,
    pub shuffle_method: ShuffleMethod,
    pub twist_duration: Duration,
    animator: A,
    solver: Option<Box<dyn Solver<A>>>,
    rng: StdRng,
    in_flight: Option<InFlight>,
    dispatched: Vec<Twist>,
    next_ticket: Ticket,
}

impl Cube<InstantAnimator> {
    /// A solved cube whose twists settle on the next tick.
    pub fn new(config: &CubeConfig) -> Self {
        Self::with_animator(InstantAnimator::default(), config)
    }
}

impl Default for Cube<InstantAnimator> {
    fn default() -> Self {
        Self::new(&CubeConfig::default())
    }
}

impl<A: Animator> Cube<A> {
    pub fn with_animator(animator: A, config: &CubeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            cubelets: (0..SLOTS).map(Cubelet::solved).collect(),
            twist_queue: TwistQueue::with_validator(Twist::validate),
            is_ready: true,
            is_shuffling: false,
            is_solving: false,
            shuffle_method: config.shuffle_method,
            twist_duration: config.twist_duration,
            animator,
            solver: None,
            rng,
            in_flight: None,
            dispatched: Vec::new(),
            next_ticket: 0,
        }
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn set_solver(&mut self, solver: Box<dyn Solver<A>>) {
        self.solver = Some(solver);
    }

    /// Cubelets in slot order.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    pub fn cubelet(&self, id: usize) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.id == id)
    }

    /// The cubelet occupying `address`.
    pub fn at(&self, address: usize) -> Option<&Cubelet> {
        self.cubelets.get(address)
    }

    /// Twists dispatched so far, with their degrees resolved.
    pub fn dispatched(&self) -> &[Twist] {
        &self.dispatched
    }

    /// Forgets dispatched twists and the queue's history.
    pub fn forget_history(&mut self) {
        self.dispatched.clear();
        self.twist_queue.forget();
    }

    /// Queues notation for dispatch.
    pub fn queue<N: Into<Notation>>(&mut self, notation: N) {
        self.twist_queue.add(vec![notation.into()]);
    }

    pub fn all(&self) -> Group<'_> {
        self.cubelets.iter().collect()
    }

    /// Number of cubelets still tweening.
    pub fn is_tweening(&self) -> usize {
        self.all().is_tweening()
    }

    pub fn is_engaged(&self) -> usize {
        self.all().is_engaged()
    }

    pub fn slice(&self, name: &str) -> Option<Slice<'_>> {
        SLICES
            .iter()
            .find(|(slice, _)| *slice == name)
            .map(|&(name, slots)| Slice::new(name, slots.map(|s| &self.cubelets[s])))
    }

    fn named(&self, index: usize) -> Slice<'_> {
        let (name, slots) = SLICES[index];
        Slice::new(name, slots.map(|s| &self.cubelets[s]))
    }

    pub fn left(&self) -> Slice<'_> {
        self.named(0)
    }

    pub fn middle(&self) -> Slice<'_> {
        self.named(1)
    }

    pub fn right(&self) -> Slice<'_> {
        self.named(2)
    }

    pub fn up(&self) -> Slice<'_> {
        self.named(3)
    }

    pub fn equator(&self) -> Slice<'_> {
        self.named(4)
    }

    pub fn down(&self) -> Slice<'_> {
        self.named(5)
    }

    pub fn front(&self) -> Slice<'_> {
        self.named(6)
    }

    pub fn standing(&self) -> Slice<'_> {
        self.named(7)
    }

    pub fn back(&self) -> Slice<'_> {
        self.named(8)
    }

    /// The six outer slices, in face order.
    pub fn faces(&self) -> [Slice<'_>; 6] {
        Direction::ALL.map(|direction| self.face(direction))
    }

    pub fn face(&self, direction: Direction) -> Slice<'_> {
        match direction {
            Direction::Front => self.front(),
            Direction::Up => self.up(),
            Direction::Right => self.right(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Back => self.back(),
        }
    }

    pub fn core(&self) -> Group<'_> {
        self.all().has_type(CubeletType::Core)
    }

    pub fn centers(&self) -> Group<'_> {
        self.all().has_type(CubeletType::Center)
    }

    pub fn edges(&self) -> Group<'_> {
        self.all().has_type(CubeletType::Edge)
    }

    pub fn corners(&self) -> Group<'_> {
        self.all().has_type(CubeletType::Corner)
    }

    /// Centers and edges: the six face crosses together.
    pub fn crosses(&self) -> Group<'_> {
        let mut crosses = self.centers();
        crosses.add(&self.edges());
        crosses
    }

    pub fn has_color(&self, color: Color) -> Group<'_> {
        self.all().has_color(color)
    }

    pub fn has_colors(&self, colors: &[Color]) -> Group<'_> {
        self.all().has_colors(colors)
    }

    /// Ids of the cubelets a selection currently names.
    pub fn select(&self, selection: &Selection) -> Vec<usize> {
        match selection {
            Selection::All => self.all().ids(),
            Selection::Slice(name) => match self.slice(name) {
                Some(slice) => slice.ids(),
                None => {
                    warn!("there is no {name:?} slice");
                    Vec::new()
                }
            },
            Selection::Type(cubelet_type) => self.all().has_type(*cubelet_type).ids(),
            Selection::Color(color) => self.has_color(*color).ids(),
            Selection::Colors(colors) => self.has_colors(colors).ids(),
            Selection::Ids(ids) => ids.clone(),
            Selection::Except(inner) => {
                let excluded = self.select(inner);
                self.all()
                    .ids()
                    .into_iter()
                    .filter(|id| !excluded.contains(id))
                    .collect()
            }
        }
    }

    /// True when all six faces each show a single color.
    pub fn is_solved(&self) -> bool {
        Direction::ALL
            .into_iter()
            .all(|direction| self.face(direction).is_solved(Some(direction)))
    }

    /// Applies a presentation change to the listed cubelets and mirrors it to
    /// the animator. Returns how many cubelets accepted the change.
    pub fn restyle(&mut self, ids: &[usize], change: StyleChange) -> usize {
        let mut applied = 0;
        for cubelet in self.cubelets.iter_mut().filter(|c| ids.contains(&c.id)) {
            if cubelet.restyle(change) {
                self.animator.restyle(cubelet.id, &cubelet.appearance);
                applied += 1;
            }
        }
        applied
    }

    pub fn restyle_selection(&mut self, selection: &Selection, change: StyleChange) -> usize {
        let ids = self.select(selection);
        self.restyle(&ids, change)
    }

    /// Animation time for a twist of `degrees`.
    pub fn duration_for(&self, degrees: u32) -> Duration {
        self.twist_duration
            .mul_f64(degrees as f64 / 90.0)
            .max(MIN_TWIST_DURATION)
    }

    /// Starts a twist.
    ///
    /// Refused when any cubelet is still tweening, or when the target is
    /// engaged on an axis orthogonal to the twist.
    pub fn twist(&mut self, twist: &Twist) -> Result<(), TwistError> {
        if self.is_tweening() > 0 {
            return Err(TwistError::Tweening(twist.command()));
        }
        let command = twist.definition();
        let axis = command.axis;
        let sense = twist.axis_sense();
        let members = layer_slots(twist);

        let degrees = {
            let group: Group<'_> = members.iter().map(|&s| &self.cubelets[s]).collect();
            for other in axis.orthogonal() {
                if group.is_engaged_on(other) > 0 {
                    return Err(TwistError::Engaged {
                        command: twist.command(),
                        target: command.target,
                        axis: other,
                    });
                }
            }
            match twist.degrees() {
                Some(degrees) => degrees,
                None => group.distance_to_peg(axis, sense).round() as u32,
            }
        };

        debug!(
            "executing {} to rotate the {} {} {degrees} degrees",
            twist.command(),
            twist.group(),
            twist.wise()
        );

        let duration = self.duration_for(degrees);
        let mut pending = FxHashMap::default();
        for slot in members {
            let cubelet = &mut self.cubelets[slot];
            let signed = cubelet.rotate(axis, sense, degrees);
            let ticket = self.next_ticket;
            self.next_ticket += 1;
            pending.insert(ticket, cubelet.id);
            self.animator.apply_rotation(RotationRequest {
                ticket,
                cubelet: cubelet.id,
                axis,
                degrees: signed,
                duration,
            });
        }

        let twist = twist.with_degrees(degrees);
        self.dispatched.push(twist.clone());
        self.in_flight = Some(InFlight {
            twist,
            pending,
            remaps: None,
        });
        Ok(())
    }

    /// Collects finished rotations. Returns true when a twist settled.
    pub fn update(&mut self) -> bool {
        let finished = self.animator.completed();
        if finished.is_empty() {
            return false;
        }
        let Some(flight) = self.in_flight.as_mut() else {
            warn!("{} rotations finished with no twist in flight", finished.len());
            return false;
        };

        let axis = flight.twist.axis();
        for ticket in finished {
            let Some(id) = flight.pending.remove(&ticket) else {
                warn!("ignoring unknown rotation ticket {ticket}");
                continue;
            };
            let Some(cubelet) = self.cubelets.iter_mut().find(|c| c.id == id) else {
                continue;
            };
            let remaps = cubelet.finish_rotation()[axis.index()];
            if let Some(previous) = flight.remaps.filter(|&r| r != remaps) {
                warn!(
                    "cubelet #{id:02} crossed {remaps} pegs while others crossed {previous}"
                );
            }
            flight.remaps = Some(remaps);
        }

        if !flight.pending.is_empty() {
            return false;
        }
        match self.in_flight.take() {
            Some(flight) => {
                self.settle(flight);
                true
            }
            None => false,
        }
    }

    /// Permutes the slots once per peg crossed, then remaps addresses.
    fn settle(&mut self, flight: InFlight) {
        let twist = flight.twist;
        let remaps = flight.remaps.unwrap_or(0);
        let table = grid::twist_table(twist.axis(), twist.layer(), twist.axis_sense());

        let mut cubelets = std::mem::take(&mut self.cubelets);
        // four quarter turns are the identity
        for _ in 0..remaps % 4 {
            cubelets = grid::permute(cubelets, table);
        }
        self.cubelets = cubelets;
        self.map();
        debug!("{twist} settled after {remaps} remap(s)");
    }

    /// Tells every cubelet its address.
    fn map(&mut self) {
        for (address, cubelet) in self.cubelets.iter_mut().enumerate() {
            cubelet.set_address(address);
        }
    }

    /// A random command from the shuffle alphabet.
    fn random_command(&mut self) -> char {
        let alphabet: Vec<char> = self.shuffle_method.alphabet().chars().collect();
        alphabet[self.rng.random_range(0..alphabet.len())]
    }

    /// Queues `count` random commands and returns them.
    pub fn shuffle(&mut self, count: usize) -> String {
        let commands: String = (0..count).map(|_| self.random_command()).collect();
        self.queue(commands.as_str());
        commands
    }

    /// One step of the dispatch loop.
    ///
    /// Settles finished rotations, then either dispatches the next queued
    /// twist or, with nothing queued, shuffles, consults the solver, or
    /// reports idle.
    pub fn tick(&mut self) -> Tick {
        self.update();
        if !self.is_ready || self.is_tweening() > 0 || !self.twist_queue.is_ready {
            return Tick::Busy;
        }

        if self.twist_queue.is_empty() {
            if self.is_shuffling {
                let command = self.random_command();
                trace!("shuffling with {command}");
                self.queue(command);
                return Tick::Shuffled(command);
            }
            if self.is_solving {
                if let Some(mut solver) = self.solver.take() {
                    self.is_solving = solver.consider(self);
                    self.solver = Some(solver);
                    return Tick::Considered(self.is_solving);
                }
            }
            return Tick::Idle;
        }

        let Some(twist) = self.twist_queue.advance().cloned() else {
            return Tick::Idle;
        };
        match self.twist(&twist) {
            Ok(()) => Tick::Twisted(twist),
            Err(e) => {
                warn!("{e}");
                Tick::Rejected(e)
            }
        }
    }

    /// Ticks until idle or until `max_ticks` have run. Returns the ticks
    /// taken.
    pub fn run(&mut self, max_ticks: usize) -> usize {
        for taken in 1..=max_ticks {
            if self.tick() == Tick::Idle {
                return taken;
            }
        }
        max_ticks
    }

    /// The six faces as compact grids.
    pub fn inspect(&self) -> String {
        Direction::ALL
            .map(|direction| self.face(direction).inspect(Some(direction)))
            .join("\n")
    }

    /// Which cubelet sits in each slot.
    pub fn layout(&self) -> String {
        let labels: Vec<String> = self.cubelets.iter().map(|c| format!("{:02}", c.id)).collect();
        grid::format_slots(&labels)
    }
}

/// Slots moved by a twist.
fn layer_slots(twist: &Twist) -> Vec<usize> {
    let axis = twist.axis();
    let layer: Layer = twist.layer();
    (0..SLOTS)
        .filter(|&slot| layer.contains(axis.component(grid::address_to_coord(slot))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::ManualAnimator;
    use crate::color::RED;
    use crate::geometry::Axis;

    fn seeded(seed: u64) -> CubeConfig {
        CubeConfig {
            seed: Some(seed),
            ..CubeConfig::default()
        }
    }

    fn colors<A: Animator>(cube: &Cube<A>) -> Vec<String> {
        cube.cubelets().iter().map(Cubelet::colors).collect()
    }

    fn ids<A: Animator>(cube: &Cube<A>) -> Vec<usize> {
        cube.cubelets().iter().map(|c| c.id).collect()
    }

    fn after(notation: &str) -> Cube {
        let mut cube = Cube::default();
        cube.queue(notation);
        cube.run(1000);
        cube
    }

    #[test]
    fn test_new_cube_is_solved() {
        let cube = Cube::default();
        assert!(cube.is_solved());
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());
        assert_eq!(cube.core().ids(), vec![13]);
        assert_eq!(cube.centers().len(), 6);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.corners().len(), 8);
        assert_eq!(cube.crosses().len(), 18);
    }

    #[test]
    fn test_twist_then_inverse_is_identity() {
        let cube = after("Rr");
        assert!(cube.is_solved());
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());
        assert_eq!(cube.is_engaged(), 0);
    }

    #[test]
    fn test_explicit_quarter_and_inverse_is_identity() {
        let cube = after("R90r90");
        assert_eq!(cube.dispatched().len(), 2);
        assert!(cube.is_solved());
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());
        assert_eq!(cube.is_engaged(), 0);
    }

    #[test]
    fn test_whole_turns_on_top_of_a_quarter_match_the_quarter() {
        let quarter = after("R");
        let long = after("R450");
        assert_eq!(ids(&long), ids(&quarter));
        for (a, b) in long.cubelets().iter().zip(quarter.cubelets()) {
            assert_eq!(a.colors(), b.colors(), "cubelet {}", a.id);
        }
        assert_eq!(long.is_engaged(), 0);

        let spun = after("u3600");
        assert!(spun.is_solved());
        assert_eq!(ids(&spun), (0..SLOTS).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_degrees_never_reach_the_cubelets() {
        let mut cube = Cube::default();
        cube.queue("R-2147483648");
        cube.run(10);
        assert!(cube.dispatched().is_empty());
        assert!(cube.is_solved());

        cube.queue("R2000000000R2000000000");
        cube.run(10);
        assert!(cube.dispatched().is_empty());

        cube.queue("R3600R3600");
        cube.run(10);
        assert_eq!(cube.dispatched().len(), 2);
        assert!(cube.is_solved());
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());
    }

    #[test]
    fn test_r_turns_front_right_column_red() {
        let cube = after("R");
        assert!(!cube.is_solved());
        for cubelet in cube.front().right() {
            assert_eq!(cubelet.front().color, RED);
        }
        assert_eq!(cube.front().left().ids(), vec![0, 3, 6]);
        // the down-front-right corner rose to the up-front-right slot
        assert_eq!(cube.at(2).map(|c| c.id), Some(8));
    }

    #[test]
    fn test_four_turns_restore_every_command() {
        for letter in "XLMRYUEDZFSBxlmryuedzfsb".chars() {
            let notation: String = std::iter::repeat_n(letter, 4).collect();
            let cube = after(&notation);
            assert!(cube.is_solved(), "{notation}");
            assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>(), "{notation}");
        }
    }

    #[test]
    fn test_half_turns_match_double_quarters() {
        let explicit = after("R180");
        let doubled = after("RR");
        assert_eq!(ids(&explicit), ids(&doubled));
        assert_eq!(colors(&explicit), colors(&doubled));
    }

    #[test]
    fn test_partial_twists_compose() {
        let halves = after("R45R45");
        let whole = after("R");
        assert_eq!(ids(&halves), ids(&whole));
        assert_eq!(colors(&halves), colors(&whole));
        assert_eq!(halves.is_engaged(), 0);
    }

    #[test]
    fn test_partial_twist_leaves_slots_and_engages() {
        let cube = after("R45");
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());
        assert_eq!(cube.right().is_engaged_x(), 9);
        assert_eq!(cube.left().is_engaged_x(), 0);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_unspecified_degrees_finish_a_partial_twist() {
        let mut cube = after("R45");
        cube.queue("R");
        cube.run(100);
        assert_eq!(cube.dispatched().last().and_then(|t| t.degrees()), Some(45));
        assert_eq!(ids(&cube), ids(&after("R")));

        let mut back = after("R45");
        back.queue("r");
        back.run(100);
        assert_eq!(back.dispatched().last().and_then(|t| t.degrees()), Some(45));
        assert!(back.is_solved());
        assert_eq!(back.is_engaged(), 0);
    }

    #[test]
    fn test_orthogonal_engagement_rejects() {
        let mut cube = after("R45");
        let up = Twist::new('U', None).unwrap();
        assert_eq!(
            cube.twist(&up),
            Err(TwistError::Engaged {
                command: 'U',
                target: "up",
                axis: Axis::X,
            })
        );
        // parallel layers may still turn
        let left = Twist::new('L', None).unwrap();
        assert_eq!(cube.twist(&left), Ok(()));
    }

    #[test]
    fn test_tweening_rejects_and_barrier_waits() {
        let mut cube = Cube::with_animator(ManualAnimator::default(), &CubeConfig::default());
        cube.queue("RU");
        assert!(matches!(cube.tick(), Tick::Twisted(_)));
        assert_eq!(cube.animator().requests.len(), 9);
        assert_eq!(cube.tick(), Tick::Busy);

        let up = Twist::new('U', None).unwrap();
        assert_eq!(cube.twist(&up), Err(TwistError::Tweening('U')));

        cube.animator_mut().release(8);
        assert!(!cube.update());
        assert_eq!(ids(&cube), (0..SLOTS).collect::<Vec<_>>());

        cube.animator_mut().release_all();
        assert!(cube.update());
        assert_eq!(ids(&cube), ids(&after("R")));
        assert!(matches!(cube.tick(), Tick::Twisted(t) if t.command() == 'U'));
    }

    #[test]
    fn test_rejected_twist_is_discarded() {
        let mut cube = after("R45");
        cube.queue("U");
        assert!(matches!(cube.tick(), Tick::Rejected(TwistError::Engaged { .. })));
        assert!(cube.twist_queue.is_empty());
        assert_eq!(cube.dispatched().len(), 1);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_a_seed() {
        let mut first = Cube::new(&seeded(7));
        let mut second = Cube::new(&seeded(7));
        let commands = first.shuffle(25);
        assert_eq!(commands, second.shuffle(25));
        assert!(commands.chars().all(|c| PRESERVE_LOGO.contains(c)));
        first.run(1000);
        second.run(1000);
        assert_eq!(colors(&first), colors(&second));
    }

    #[test]
    fn test_shuffling_tick_queues_commands() {
        let mut cube = Cube::new(&seeded(3));
        cube.shuffle_method = ShuffleMethod::Everything;
        cube.is_shuffling = true;
        assert!(matches!(cube.tick(), Tick::Shuffled(c) if EVERYTHING.contains(c)));
        assert!(matches!(cube.tick(), Tick::Twisted(_)));
    }

    #[test]
    fn test_duration_scales_with_degrees() {
        let cube = Cube::default();
        assert_eq!(cube.duration_for(90), Duration::from_secs(1));
        assert_eq!(cube.duration_for(180), Duration::from_secs(2));
        assert_eq!(cube.duration_for(10), MIN_TWIST_DURATION);
    }

    #[test]
    fn test_selection() {
        let cube = Cube::default();
        assert_eq!(cube.select(&Selection::Slice("front")).len(), 9);
        assert!(cube.select(&Selection::Slice("nowhere")).is_empty());
        assert_eq!(cube.select(&Selection::Color(RED)).len(), 9);
        let others = cube.select(&Selection::Except(Box::new(Selection::Type(CubeletType::Core))));
        assert_eq!(others.len(), 26);
        assert!(!others.contains(&13));
    }

    #[test]
    fn test_restyle_refuses_radius_mid_turn() {
        let mut cube = Cube::with_animator(ManualAnimator::default(), &CubeConfig::default());
        cube.queue("R");
        cube.tick();
        let right = cube.right().ids();
        assert_eq!(cube.restyle(&right, StyleChange::Radius(90.0)), 0);
        assert_eq!(cube.restyle(&right, StyleChange::Opacity(0.5)), 9);
        assert_eq!(cube.right().average_opacity(), 0.5);

        cube.animator_mut().release_all();
        cube.tick();
        assert_eq!(cube.restyle(&right, StyleChange::Radius(90.0)), 9);
        assert_eq!(cube.right().average_radius(), 90.0);
        assert_eq!(cube.all().average_radius(), 30.0);
        assert_eq!(cube.left().average_radius(), 0.0);
    }

    #[test]
    fn test_forget_history() {
        let mut cube = after("RU");
        assert_eq!(cube.twist_queue.history().len(), 2);
        cube.forget_history();
        assert!(cube.dispatched().is_empty());
        assert!(cube.twist_queue.history().is_empty());
    }
}
