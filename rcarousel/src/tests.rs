use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_i64(start as i64, end_exclusive as i64) as usize
    }
}

fn globals(actors: &[Actor]) -> Vec<i64> {
    actors.iter().map(|a| a.global_index).collect()
}

fn offsets(actors: &[Actor]) -> Vec<i64> {
    actors.iter().map(|a| a.anim.d).collect()
}

fn immediates(actors: &[Actor]) -> Vec<bool> {
    actors.iter().map(|a| a.anim.immediate).collect()
}

fn assert_window_invariants(state: &PoolState) {
    let cursor = state.cursor.unwrap();
    let total = state.visible * 3;
    assert_eq!(state.actors.len(), total);
    if total > 0 {
        assert!(state.actors_state < total);
    }
    for a in &state.actors {
        assert_eq!(a.anim.d, a.global_index - cursor, "actor {a:?} (cursor={cursor})");
    }
    let mut ds = offsets(&state.actors);
    ds.sort_unstable();
    let expected: Vec<i64> = (-(state.visible as i64)..2 * state.visible as i64).collect();
    assert_eq!(ds, expected);
}

fn three_slides_at_1000px() -> CarouselOptions {
    CarouselOptions::new()
        .with_max_item_size(f64::MAX)
        .with_initial_size(Some(Size::new(1000.0, 200.0)))
        .with_viewport_width(1000.0)
}

#[test]
fn unit_values_parse_and_resolve() {
    assert_eq!(UnitValue::parse("30px"), UnitValue::Px(30.0));
    assert_eq!(UnitValue::parse(" 50% "), UnitValue::Percent(50.0));
    assert_eq!(UnitValue::parse("12"), UnitValue::Px(12.0));
    assert_eq!(UnitValue::parse(""), UnitValue::Px(0.0));
    assert_eq!("25%".parse::<UnitValue>(), Ok(UnitValue::Percent(25.0)));

    assert_eq!(UnitValue::Px(30.0).resolve(1000.0), 30.0);
    assert_eq!(UnitValue::Percent(50.0).resolve(1000.0), 500.0);
    assert_eq!(UnitValue::default().resolve(640.0), 640.0);

    let UnitValue::Px(v) = UnitValue::parse("wide") else {
        panic!("malformed input should degrade to pixels");
    };
    assert!(v.is_nan());
}

#[test]
fn clamp_cursor_examples() {
    assert_eq!(clamp_cursor(5, 0, -1), 0);
    assert_eq!(clamp_cursor(-3, 0, 10), 0);
    assert_eq!(clamp_cursor(15, 0, 10), 10);
    assert_eq!(clamp_cursor(7, 0, 10), 7);
    assert_eq!(clamp_cursor(-7, i64::MIN, i64::MAX), -7);
    // Lower bound is applied last.
    assert_eq!(clamp_cursor(5, 3, 1), 3);
}

#[test]
fn local_index_is_euclidean() {
    assert_eq!(local_index(5, 0), 0);
    assert_eq!(local_index(-1, 3), 2);
    assert_eq!(local_index(-3, 3), 0);
    assert_eq!(local_index(100, 3), 1);

    let mut rng = Lcg::new(7);
    for _ in 0..2_000 {
        let g = rng.gen_range_i64(-1_000_000, 1_000_000);
        let len = rng.gen_range_usize(1, 50);
        let k = rng.gen_range_i64(-100, 100);
        let l = local_index(g, len);
        assert!(l < len);
        assert_eq!(l, local_index(g + k * len as i64, len));
    }
}

#[test]
fn validate_cursor_rejects_unsafe_values() {
    assert!(validate_cursor(0, 3).is_ok());
    assert!(validate_cursor(MAX_SAFE_CURSOR - 3, 3).is_ok());
    assert_eq!(
        validate_cursor(MAX_SAFE_CURSOR, 3),
        Err(Error::InvalidCursor {
            cursor: MAX_SAFE_CURSOR,
            count: 3
        })
    );
    assert!(validate_cursor(-MAX_SAFE_CURSOR, 1).is_err());
    assert!(validate_cursor(i64::MAX, 0).is_err());
}

#[test]
fn cursor_range_modes() {
    let bounded = CursorRange::for_collection(WrapMode::Bounded, 5, 2, false);
    assert_eq!((bounded.min, bounded.max, bounded.content_end), (0, 4, 5));

    let trimmed = CursorRange::for_collection(WrapMode::Bounded, 5, 2, true);
    assert_eq!((trimmed.min, trimmed.max), (0, 3));

    let empty = CursorRange::for_collection(WrapMode::Bounded, 0, 1, false);
    assert_eq!((empty.min, empty.max), (0, 0));
    assert_eq!(empty.resolve_slide(0, 0), None);

    let infinite = CursorRange::for_collection(WrapMode::Infinite, 3, 1, false);
    assert_eq!((infinite.min, infinite.max), (0, i64::MAX));
    assert_eq!(infinite.resolve_slide(100, 3), Some(1));
    assert_eq!(infinite.resolve_slide(-1, 3), None);

    let looping = CursorRange::for_collection(WrapMode::Loop, 3, 1, false);
    assert_eq!((looping.min, looping.max), (i64::MIN, i64::MAX));
    assert_eq!(looping.resolve_slide(-1, 3), Some(2));

    // Endless modes need enough slides to fill the viewport.
    let short = CursorRange::for_collection(WrapMode::Loop, 2, 3, false);
    assert_eq!((short.min, short.max), (0, 1));
}

#[test]
fn display_rules_pick_largest_matching_breakpoint() {
    let rules = DisplayCount::Responsive(vec![
        DisplayRule::new(4).with_breakpoint(1200.0),
        DisplayRule::new(2).with_breakpoint(600.0),
        DisplayRule::new(3).with_breakpoint(900.0).with_slides_to_swipe(3),
    ]);
    assert_eq!(rules.resolve(300.0), Some(DisplayRule::new(1)));
    assert_eq!(rules.resolve(700.0).map(|r| r.value), Some(2));
    let at_1000 = rules.resolve(1000.0).unwrap();
    assert_eq!(at_1000.value, 3);
    assert_eq!(at_1000.slides_to_swipe, Some(3));
    assert_eq!(rules.resolve(1500.0).map(|r| r.value), Some(4));

    assert_eq!(DisplayCount::Fixed(5).resolve(10.0), Some(DisplayRule::new(5)));
    assert_eq!(DisplayCount::Auto.resolve(10.0), None);
}

#[test]
fn display_rules_later_wins_ties() {
    let rules = DisplayCount::from(vec![
        DisplayRule::new(2).with_breakpoint(500.0),
        DisplayRule::new(3).with_breakpoint(500.0),
        DisplayRule::new(9),
    ]);
    // A rule without a breakpoint never beats a matching one.
    assert_eq!(rules.resolve(800.0).map(|r| r.value), Some(3));
    assert_eq!(rules.resolve(100.0).map(|r| r.value), Some(9));
}

#[test]
fn snapshot_baseline_and_single_step() {
    let c = 10;
    let base = snapshot(c, 0, 9);
    assert_eq!(base, (c - 3..=c + 5).collect::<Vec<_>>());

    let forward = snapshot(c, 1, 9);
    let changed: Vec<usize> = (0..9).filter(|&i| forward[i] != base[i]).collect();
    assert_eq!(changed, vec![0]);
    assert_eq!(forward[0], c + 6);

    let backward = snapshot(c, -1, 9);
    let changed: Vec<usize> = (0..9).filter(|&i| backward[i] != base[i]).collect();
    assert_eq!(changed, vec![8]);
    assert_eq!(backward[8], c - 4);

    assert_eq!(snapshot(c, 3, 9)[..3], [c + 6, c + 7, c + 8]);
    assert!(snapshot(0, 0, 0).is_empty());
}

#[test]
fn rotation_lookups_are_inverse() {
    let r = Rotation::new(4, 9);
    for i in 0..9 {
        assert_eq!(r.position_of(r.get(i)), i);
    }
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 0, 1, 2, 3]);
    assert!(r.slice_contains(0..3, 5));
    assert!(!r.slice_contains(0..3, 7));
}

#[test]
fn first_remap_centers_window() {
    let state = calc_actors(&PoolState::default(), RemapInput::new(0, 3));
    assert_eq!(globals(&state.actors), (-3..6).collect::<Vec<_>>());
    assert_eq!(state.actors_state, 0);
    assert_eq!(state.relocation, Some(Relocation::Initial));
    assert!(immediates(&state.actors).iter().all(|&i| i));
    assert_window_invariants(&state);
}

#[test]
fn forward_step_recycles_first_page() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(0, 3));
    let next = calc_actors(&init, RemapInput::new(1, 3));
    assert_eq!(next.relocation, None);
    assert_eq!(next.actors_state, 1);
    assert_window_invariants(&next);

    // Slot 0 held -3 and is recycled to the leading edge.
    assert_eq!(next.actors[0].global_index, 6);
    for slot in 1..9 {
        assert_eq!(next.actors[slot].global_index, init.actors[slot].global_index);
    }

    // Exactly the slots whose previous role was in the first page snap.
    let cur_roles = Rotation::new(init.actors_state, 9);
    for slot in 0..9 {
        let was_first_page = cur_roles.slice_contains(0..3, slot);
        assert_eq!(next.actors[slot].anim.immediate, was_first_page, "slot {slot}");
    }
}

#[test]
fn backward_step_recycles_last_page() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(10, 2));
    let next = calc_actors(&init, RemapInput::new(9, 2));
    assert_window_invariants(&next);
    assert_eq!(next.actors_state, 5);
    assert_eq!(immediates(&next.actors), vec![false, false, false, false, true, true]);
    assert_eq!(next.actors[5].global_index, 7);
}

#[test]
fn jump_and_stationary_relocate() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(0, 3));

    let jumped = calc_actors(&init, RemapInput::new(50, 3));
    assert_eq!(jumped.relocation, Some(Relocation::Jump));
    assert_eq!(jumped.actors_state, 3);
    assert!(immediates(&jumped.actors).iter().all(|&i| i));
    assert_window_invariants(&jumped);

    let back = calc_actors(&jumped, RemapInput::new(-50, 3));
    assert_eq!(back.relocation, Some(Relocation::Jump));
    assert_window_invariants(&back);

    let still = calc_actors(&back, RemapInput::new(-50, 3));
    assert_eq!(still.relocation, Some(Relocation::Stationary));
    assert_eq!(still.actors_state, back.actors_state);
    assert_eq!(globals(&still.actors), globals(&back.actors));
}

#[test]
fn visible_count_change_relocates() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(4, 1));
    let moved = calc_actors(&init, RemapInput::new(5, 1));
    let grown = calc_actors(&moved, RemapInput::new(6, 3));
    assert_eq!(grown.relocation, Some(Relocation::VisibleCountChanged));
    assert_eq!(grown.actors.len(), 9);
    assert!(immediates(&grown.actors).iter().all(|&i| i));
    assert_window_invariants(&grown);
}

#[test]
fn empty_pool_keeps_state() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(0, 2));
    let next = calc_actors(&init, RemapInput::new(1, 2));
    let empty = calc_actors(&next, RemapInput::new(1, 0));
    assert!(empty.actors.is_empty());
    assert_eq!(empty.actors_state, next.actors_state);
    assert_eq!(empty.cursor, Some(1));
}

#[test]
fn shift_moves_cursor_and_window() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(100, 1));
    let shifted = calc_actors(&init, RemapInput::new(100, 1).with_shift(33));
    assert_eq!(shifted.cursor, Some(133));
    assert_window_invariants(&shifted);
    assert_eq!(globals(&shifted.actors), vec![132, 133, 134]);
}

#[test]
fn combined_deltas_reach_same_state() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..500 {
        let visible = rng.gen_range_usize(1, 6);
        let v = visible as i64;
        let start = rng.gen_range_i64(-1_000, 1_000);
        let warmup = rng.gen_range_i64(-v, v + 1);

        let init = calc_actors(&PoolState::default(), RemapInput::new(start, visible));
        let init = calc_actors(&init, RemapInput::new(start + warmup, visible));
        let base = start + warmup;

        let d1 = rng.gen_range_i64(-v, v + 1);
        let d2 = rng.gen_range_i64(-v, v + 1);
        if d1 == 0 || d2 == 0 || (d1 + d2).abs() > v || d1 + d2 == 0 {
            continue;
        }

        let stepwise = calc_actors(&init, RemapInput::new(base + d1, visible));
        let stepwise = calc_actors(&stepwise, RemapInput::new(base + d1 + d2, visible));
        let combined = calc_actors(&init, RemapInput::new(base + d1 + d2, visible));

        assert_eq!(stepwise.actors_state, combined.actors_state);
        assert_eq!(globals(&stepwise.actors), globals(&combined.actors));
        assert_window_invariants(&stepwise);
        assert_window_invariants(&combined);
    }
}

#[test]
fn random_walk_keeps_invariants_and_slot_identity() {
    let mut rng = Lcg::new(42);
    let mut pool = ActorPool::new();
    let mut cursor = 0i64;
    let mut visible = 2usize;
    pool.remap(RemapInput::new(cursor, visible));

    for _ in 0..2_000 {
        let before = pool.state().clone();
        match rng.gen_range_usize(0, 10) {
            0 => visible = rng.gen_range_usize(1, 5),
            1 => cursor += rng.gen_range_i64(-50, 50),
            _ => cursor += rng.gen_range_i64(-(visible as i64), visible as i64 + 1),
        }
        pool.remap(RemapInput::new(cursor, visible));
        let after = pool.state();
        assert_window_invariants(after);

        if after.relocation.is_none() {
            let moved = (cursor - before.cursor.unwrap()).unsigned_abs() as usize;
            let kept = before
                .actors
                .iter()
                .zip(&after.actors)
                .filter(|(b, a)| b.global_index == a.global_index)
                .count();
            assert_eq!(kept, after.actors.len() - moved);
        }
    }
}

#[test]
fn pool_relocate_keeps_ring_offset() {
    let mut pool = ActorPool::new();
    pool.remap(RemapInput::new(0, 3));
    pool.remap(RemapInput::new(2, 3));
    assert_eq!(pool.actors_state(), 2);

    assert_eq!(pool.relocate(RemapInput::new(3, 3)), 3);
    assert_eq!(pool.last_relocation(), Some(Relocation::Initial));
    assert_eq!(pool.actors_state(), 2);
    assert_window_invariants(pool.state());

    pool.reset();
    assert_eq!(pool.cursor(), None);
    assert_eq!(pool.total(), 0);
}

#[test]
fn layout_auto_fixed_and_errors() {
    let opts = three_slides_at_1000px();
    let layout = Layout::resolve(&opts, 1000.0, 1000.0).unwrap();
    assert_eq!(layout.visible, 1);
    assert_eq!(layout.item_size_px, 1000.0);
    assert_eq!(layout.swipe_threshold_px, 500.0);
    assert_eq!(layout.total_actors(), 3);

    let opts = CarouselOptions::new().with_max_item_size(UnitValue::Px(300.0));
    let layout = Layout::resolve(&opts, 1000.0, 1000.0).unwrap();
    assert_eq!(layout.visible, 4);
    assert_eq!(layout.item_size_px, 250.0);

    let opts = CarouselOptions::new().with_display_count(3usize);
    let layout = Layout::resolve(&opts, 0.0, 0.0).unwrap();
    assert_eq!(layout.visible, 3);
    assert_eq!(layout.item_size_px, 0.0);

    let unmeasured = Layout::resolve(&CarouselOptions::new(), 0.0, 0.0).unwrap();
    assert_eq!(unmeasured.visible, 0);

    let bad = CarouselOptions::new().with_max_item_size(UnitValue::Px(0.0));
    assert!(matches!(
        Layout::resolve(&bad, 1000.0, 1000.0),
        Err(Error::InvalidSize {
            what: SizeKind::MaxItemSize,
            ..
        })
    ));
    // Unmeasured containers skip the size check.
    assert!(Layout::resolve(&bad, 0.0, 1000.0).is_ok());

    let bad = CarouselOptions::new().with_swipe_threshold(UnitValue::parse("nope"));
    assert!(matches!(
        Layout::resolve(&bad, 1000.0, 1000.0),
        Err(Error::InvalidSize {
            what: SizeKind::SwipeThreshold,
            ..
        })
    ));

    let bad = CarouselOptions::new().with_display_count(0usize);
    assert_eq!(
        Layout::resolve(&bad, 1000.0, 1000.0),
        Err(Error::InvalidCount { value: 0 })
    );
}

#[test]
fn display_count_must_keep_pool_in_safe_domain() {
    let limit = (MAX_SAFE_CURSOR / 3) as usize;
    assert!(validate_count(1).is_ok());
    assert!(validate_count(limit).is_ok());
    assert_eq!(
        validate_count(limit + 1),
        Err(Error::InvalidCount { value: limit + 1 })
    );

    let huge = CarouselOptions::new().with_display_count(usize::MAX);
    assert_eq!(
        Layout::resolve(&huge, 1000.0, 1000.0),
        Err(Error::InvalidCount { value: usize::MAX })
    );

    // An automatic count derived from a vanishing item size is bounded the same way.
    let tiny = CarouselOptions::new().with_max_item_size(f64::MIN_POSITIVE);
    assert!(matches!(
        Layout::resolve(&tiny, 1000.0, 1000.0),
        Err(Error::InvalidCount { .. })
    ));
}

#[test]
fn carousel_golden_cursor_walk() {
    let mut c = Carousel::new(three_slides_at_1000px(), CursorSource::External(0), 3).unwrap();
    assert_eq!(c.visible_count(), 1);
    assert_eq!(globals(c.actors()), vec![-1, 0, 1]);
    assert_eq!(offsets(c.actors()), vec![-1, 0, 1]);

    let mut slides = Vec::new();
    c.for_each_slot(|s| slides.push(s.slide));
    assert_eq!(slides, vec![None, Some(0), Some(1)]);

    // (cursor, globals, offsets, immediates)
    let steps: [(i64, [i64; 3], [i64; 3], [bool; 3]); 4] = [
        (1, [2, 0, 1], [1, -1, 0], [true, false, false]),
        (2, [2, 3, 1], [0, 1, -1], [false, true, false]),
        (1, [2, 0, 1], [1, -1, 0], [false, true, false]),
        (0, [-1, 0, 1], [-1, 0, 1], [true, false, false]),
    ];
    for (cursor, g, d, imm) in steps {
        c.set_cursor(cursor).unwrap();
        assert_eq!(c.cursor(), cursor);
        assert_eq!(globals(c.actors()), g, "globals at cursor {cursor}");
        assert_eq!(offsets(c.actors()), d, "offsets at cursor {cursor}");
        assert_eq!(immediates(c.actors()), imm, "immediates at cursor {cursor}");
    }

    let mut slides = Vec::new();
    c.set_cursor(2).unwrap();
    c.for_each_slot(|s| slides.push(s.slide));
    assert_eq!(slides, vec![None, Some(1), Some(2)]);
}

#[test]
fn carousel_default_cursor_is_clamped() {
    let c = Carousel::new(three_slides_at_1000px(), CursorSource::Internal(7), 3).unwrap();
    assert_eq!(c.cursor(), 2);
    assert_eq!(c.local_cursor(), 2);
    assert_eq!(c.slot(1).map(|s| s.slide), Some(Some(2)));
}

#[test]
fn carousel_infinite_shift_on_slide_count_change() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let opts = three_slides_at_1000px()
        .with_wrap(WrapMode::Infinite)
        .with_on_cursor_change(Some({
            let changes = Arc::clone(&changes);
            move |cursor, reason| changes.lock().unwrap().push((cursor, reason))
        }));

    let mut c = Carousel::new(opts, CursorSource::Internal(100), 3).unwrap();
    assert_eq!(c.cursor(), 100);

    c.set_slides_count(4).unwrap();
    assert_eq!(c.cursor(), 133);
    assert_eq!(c.local_cursor(), 1);
    assert_eq!(changes.lock().unwrap().last(), Some(&(133, ChangeReason::Shift)));

    c.set_slides_count(3).unwrap();
    assert_eq!(c.cursor(), 100);
    assert_eq!(changes.lock().unwrap().last(), Some(&(100, ChangeReason::Shift)));
    assert_eq!(changes.lock().unwrap().len(), 2);
}

#[test]
fn carousel_external_mode_reports_without_moving() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let swipes = Arc::new(Mutex::new(Vec::new()));
    let opts = three_slides_at_1000px()
        .with_on_cursor_change(Some({
            let changes = Arc::clone(&changes);
            move |cursor, reason| changes.lock().unwrap().push((cursor, reason))
        }))
        .with_on_swipe(Some({
            let swipes = Arc::clone(&swipes);
            move |dir| swipes.lock().unwrap().push(dir)
        }));

    let mut c = Carousel::new(opts, CursorSource::External(0), 3).unwrap();
    let step = c.move_by(1).unwrap();
    assert_eq!(step, Step { delta: 1, cursor: 1 });
    assert_eq!(c.cursor(), 0);
    assert_eq!(*changes.lock().unwrap(), vec![(1, ChangeReason::UserSwipe)]);

    // At the lower boundary the move is a no-op but the swipe is still reported.
    let step = c.move_by(-1).unwrap();
    assert_eq!(step.delta, 0);
    assert_eq!(changes.lock().unwrap().len(), 1);
    assert_eq!(*swipes.lock().unwrap(), vec![Direction::Forward, Direction::Backward]);
}

#[test]
fn carousel_internal_mode_applies_moves() {
    let mut c = Carousel::new(three_slides_at_1000px(), CursorSource::Internal(0), 3).unwrap();
    assert_eq!(c.move_by(1).unwrap().delta, 1);
    assert_eq!(c.cursor(), 1);
    assert_eq!(c.move_by(5).unwrap(), Step { delta: 1, cursor: 2 });
    assert_eq!(c.cursor(), 2);
    assert_eq!(c.move_by(1).unwrap().delta, 0);
}

#[test]
fn carousel_notifies_range_and_visible_count_once() {
    let ranges = Arc::new(Mutex::new(Vec::new()));
    let visible = Arc::new(Mutex::new(Vec::new()));
    let opts = CarouselOptions::new()
        .with_max_item_size(UnitValue::Px(250.0))
        .with_on_range_change(Some({
            let ranges = Arc::clone(&ranges);
            move |range, count| ranges.lock().unwrap().push((range, count))
        }))
        .with_on_visible_count_change(Some({
            let visible = Arc::clone(&visible);
            move |n| visible.lock().unwrap().push(n)
        }));

    let mut c = Carousel::new(opts, CursorSource::Internal(0), 10).unwrap();
    assert_eq!(*visible.lock().unwrap(), vec![0]);
    assert!(c.actors().is_empty());

    c.set_container_size(Size::new(1000.0, 100.0)).unwrap();
    assert_eq!(*visible.lock().unwrap(), vec![0, 4]);
    assert_eq!(c.actors().len(), 12);

    c.set_container_size(Size::new(1000.0, 300.0)).unwrap();
    c.set_cursor(3).unwrap();
    assert_eq!(visible.lock().unwrap().len(), 2);
    assert_eq!(ranges.lock().unwrap().len(), 1);

    c.update_options(|o| o.trim_end = true).unwrap();
    let last = *ranges.lock().unwrap().last().unwrap();
    assert_eq!((last.0.max, last.1), (6, 10));
}

#[test]
fn carousel_batch_update_runs_once() {
    let visible = Arc::new(Mutex::new(Vec::new()));
    let opts = CarouselOptions::new().with_on_visible_count_change(Some({
        let visible = Arc::clone(&visible);
        move |n| visible.lock().unwrap().push(n)
    }));
    let mut c = Carousel::new(opts, CursorSource::Internal(0), 10).unwrap();

    c.batch_update(|c| {
        c.set_container_size(Size::new(900.0, 100.0))?;
        c.update_options(|o| o.display_count = DisplayCount::Fixed(3))?;
        c.set_cursor(4)
    })
    .unwrap();

    assert_eq!(*visible.lock().unwrap(), vec![0, 3]);
    assert_eq!(c.cursor(), 4);
    assert_eq!(c.layout().item_size_px, 300.0);
}

#[test]
fn carousel_responsive_rules_follow_viewport() {
    let opts = CarouselOptions::new()
        .with_display_count(vec![
            DisplayRule::new(2).with_breakpoint(600.0),
            DisplayRule::new(4).with_breakpoint(1000.0).with_slides_to_swipe(2),
        ])
        .with_initial_size(Some(Size::new(800.0, 100.0)))
        .with_viewport_width(500.0);
    let mut c = Carousel::new(opts, CursorSource::Internal(0), 20).unwrap();
    assert_eq!(c.visible_count(), 1);

    c.set_viewport_width(700.0).unwrap();
    assert_eq!(c.visible_count(), 2);
    assert_eq!(c.layout().slides_to_swipe, None);

    c.set_viewport_width(1200.0).unwrap();
    assert_eq!(c.visible_count(), 4);
    assert_eq!(c.layout().slides_to_swipe, Some(2));
    assert_eq!(c.pool().last_relocation(), Some(Relocation::VisibleCountChanged));
}

#[test]
fn carousel_vertical_axis_uses_height() {
    let opts = CarouselOptions::new()
        .with_axis(Axis::Vertical)
        .with_max_item_size(UnitValue::Px(50.0))
        .with_initial_size(Some(Size::new(1000.0, 200.0)));
    let c = Carousel::new(opts, CursorSource::Internal(0), 10).unwrap();
    assert_eq!(c.visible_count(), 4);
}

#[test]
fn carousel_loop_mode_wraps_content() {
    let opts = three_slides_at_1000px().with_wrap(WrapMode::Loop);
    let mut c = Carousel::new(opts, CursorSource::Internal(0), 3).unwrap();
    let mut slides = Vec::new();
    c.for_each_slot(|s| slides.push(s.slide));
    assert_eq!(slides, vec![Some(2), Some(0), Some(1)]);

    assert_eq!(c.move_by(-1).unwrap().delta, -1);
    assert_eq!(c.cursor(), -1);
    assert_eq!(c.local_cursor(), 2);
}

#[test]
fn carousel_rejects_invalid_cursor() {
    let res = Carousel::new(
        three_slides_at_1000px(),
        CursorSource::External(MAX_SAFE_CURSOR),
        3,
    );
    assert!(matches!(res, Err(Error::InvalidCursor { .. })));

    let mut c = Carousel::new(three_slides_at_1000px(), CursorSource::External(0), 3).unwrap();
    assert!(c.set_cursor(i64::MIN).is_err());
}

#[test]
fn carousel_rejects_shift_past_safe_cursor_without_changes() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let opts = three_slides_at_1000px()
        .with_wrap(WrapMode::Infinite)
        .with_display_count(1usize)
        .with_on_cursor_change(Some({
            let changes = Arc::clone(&changes);
            move |cursor, reason| changes.lock().unwrap().push((cursor, reason))
        }));
    let start = 1i64 << 52;
    let mut c = Carousel::new(opts, CursorSource::Internal(start), 1).unwrap();
    let before = c.pool().state().clone();

    // 2^52 laps of one slide each grow by 2999 slides: the shift overflows i64.
    assert!(matches!(
        c.set_slides_count(3000),
        Err(Error::InvalidCursor { count: 3000, .. })
    ));
    assert_eq!(c.pool().state(), &before);
    assert_eq!(c.cursor(), start);

    // 3 * 2^52 fits in i64 but not in the safe cursor domain.
    assert!(matches!(
        c.set_slides_count(3),
        Err(Error::InvalidCursor { count: 3, .. })
    ));
    assert_eq!(c.pool().state(), &before);
    assert_eq!(c.requested_cursor(), start);
    assert!(changes.lock().unwrap().is_empty());

    c.set_slides_count(1).unwrap();
    assert_eq!(c.cursor(), start);
}

#[test]
fn calc_actors_saturates_at_i64_ends() {
    let init = calc_actors(&PoolState::default(), RemapInput::new(i64::MAX - 1, 1));
    assert_eq!(globals(&init.actors), vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]);

    let next = calc_actors(&init, RemapInput::new(i64::MAX - 1, 1).with_shift(i64::MAX));
    assert_eq!(next.cursor, Some(i64::MAX));
    assert_eq!(next.total(), 3);

    let mut pool = ActorPool::new();
    assert_eq!(pool.remap(RemapInput::new(i64::MIN, 1).with_shift(-5)), i64::MIN);
    assert_eq!(globals(pool.actors()), vec![i64::MIN, i64::MIN + 1, i64::MIN + 2]);
}

#[test]
fn slide_count_shift_examples() {
    assert_eq!(slide_count_shift(100, 3, 4), 33);
    assert_eq!(slide_count_shift(133, 4, 3), -33);
    assert_eq!(slide_count_shift(2, 3, 4), 0);
    assert_eq!(slide_count_shift(-4, 3, 4), -2);
    assert_eq!(slide_count_shift(10, 0, 4), 0);
}
