//! Property tests for divider dragging and the deferred timers.
//!
//! Coordinates are drawn from integers and the divider thickness is even, so
//! every size is exactly representable and the assertions can be exact.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use split_core::{Orientation, SplitConfig};
use split_layout::{Point, Rect, SplitPane, SplitState};

#[derive(Debug, Clone)]
struct Setup {
    config: SplitConfig,
    container: Rect,
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn setup() -> impl Strategy<Value = Setup> {
    (orientation(), 1u16..=60, 1u16..=4, any::<bool>())
        .prop_flat_map(|(orientation, min, half_thickness, flipped)| {
            let thickness = half_thickness * 2;
            let smallest = min * 2 + thickness;
            (
                Just(orientation),
                Just(min),
                Just(thickness),
                Just(flipped),
                0u16..=500,
                0u16..=500,
                smallest..=2000,
                1u16..=2000,
            )
        })
        .prop_map(
            |(orientation, min, thickness, flipped, left, top, along, across)| {
                let config = SplitConfig::default()
                    .with_orientation(orientation)
                    .with_min_pane_size(min as f32)
                    .with_divider_thickness(thickness as f32)
                    .with_flipped(flipped)
                    .with_layout_debounce(Duration::ZERO);
                let (width, height) = match orientation {
                    Orientation::Horizontal => (across, along),
                    Orientation::Vertical => (along, across),
                };
                Setup {
                    config,
                    container: Rect::new(left as f32, top as f32, width as f32, height as f32),
                }
            },
        )
}

fn mounted(setup: &Setup, now: Instant) -> SplitPane {
    let mut pane = SplitPane::mount(setup.config.clone());
    pane.on_layout(setup.container, now);
    pane.tick(now);
    pane.on_grant();
    pane
}

fn pointer(x: i16, y: i16) -> Point {
    Point::new(x as f32, y as f32)
}

proptest! {
    #[test]
    fn minimum_floor_holds_after_every_move(
        setup in setup(),
        moves in prop::collection::vec((-500i16..3000, -500i16..3000), 1..20),
    ) {
        let now = Instant::now();
        let mut pane = mounted(&setup, now);
        let min = setup.config.min_pane_size;

        for (x, y) in moves {
            prop_assert!(pane.on_move(pointer(x, y), now));
            let (a, b) = pane.state().sizes().expect("sizes committed");
            prop_assert!(a >= min, "pane1 {} below {}", a, min);
            prop_assert!(b >= min, "pane2 {} below {}", b, min);
        }
    }

    #[test]
    fn space_is_conserved(
        setup in setup(),
        x in -500i16..3000,
        y in -500i16..3000,
    ) {
        let now = Instant::now();
        let mut pane = mounted(&setup, now);
        let extent = setup.container.extent_along(setup.config.orientation);
        let thickness = setup.config.divider.thickness;

        // Conserved on first layout as well as after a drag
        let initial = pane.state();
        prop_assert_eq!(
            initial.pane1_size.unwrap() + thickness + initial.pane2_size.unwrap(),
            extent
        );

        pane.on_move(pointer(x, y), now);
        let state = pane.state();
        prop_assert_eq!(
            state.pane1_size.unwrap() + thickness + state.pane2_size.unwrap(),
            extent
        );
    }

    #[test]
    fn identical_moves_are_idempotent(
        setup in setup(),
        x in -500i16..3000,
        y in -500i16..3000,
    ) {
        let now = Instant::now();
        let mut pane = mounted(&setup, now);
        pane.on_move(pointer(x, y), now);
        let first = pane.state();
        pane.on_move(pointer(x, y), now);
        prop_assert_eq!(pane.state(), first);
    }

    #[test]
    fn layout_burst_applies_exactly_once(
        gaps in prop::collection::vec(0u64..100, 1..30),
        heights in prop::collection::vec(1u16..2000, 30),
    ) {
        let start = Instant::now();
        let debounce = Duration::from_millis(100);
        let mut pane = SplitPane::mount(SplitConfig::default().with_layout_debounce(debounce));

        let mut now = start;
        let mut last = Rect::default();
        let mut applied = 0;
        for (gap, height) in gaps.iter().zip(&heights) {
            now += Duration::from_millis(*gap);
            last = Rect::new(0.0, 0.0, 300.0, *height as f32);
            pane.on_layout(last, now);
            // Every gap is shorter than the debounce, so nothing is due yet
            if pane.tick(now).layout_changed {
                applied += 1;
            }
        }

        prop_assert_eq!(applied, 0);
        prop_assert!(pane.tick(now + debounce).layout_changed);
        prop_assert!(!pane.tick(now + debounce * 10).layout_changed);
        prop_assert_eq!(pane.layout(), Some(last));
    }

    #[test]
    fn move_burst_notifies_exactly_once(
        setup in setup(),
        moves in prop::collection::vec((0u64..500, -500i16..3000, -500i16..3000), 1..30),
    ) {
        let start = Instant::now();
        let throttle = Duration::from_millis(500);
        let seen: Rc<RefCell<Vec<SplitState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut pane = mounted(&setup, start).with_on_change(move |state: &SplitState| {
            sink.borrow_mut().push(*state)
        });

        let mut now = start;
        for (gap, x, y) in moves {
            now += Duration::from_millis(gap);
            pane.on_move(pointer(x, y), now);
            pane.tick(now);
        }
        let last = pane.state();

        prop_assert!(seen.borrow().is_empty());
        pane.tick(now + throttle);
        pane.tick(now + throttle * 4);

        let seen = seen.borrow();
        prop_assert_eq!(seen.len(), 1);
        prop_assert_eq!(seen[0], last);
    }
}
