use cosmic_artworks::frame::{Animator, FrameState, FrameStep, TickSource};

/// Grants a fixed number of ticks, then stops renewing.
struct Ticks(u64);

impl TickSource for Ticks {
    fn next_tick(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

#[test]
fn advance_is_pure() {
    let start = FrameState::new();
    let next = start.advance(FrameStep::DEFAULT);
    assert_eq!(start, FrameState::default());
    assert_eq!(next.time, 0.016);
    assert_eq!(next.rotation, 0.005);
}

#[test]
fn n_ticks_accumulate_fixed_steps() {
    let mut seen = Vec::new();
    let mut animator = Animator::new(|state: &FrameState| seen.push(*state));
    let frames = animator.run(&mut Ticks(600));
    let state = animator.state();
    drop(animator);

    assert_eq!(frames, 600);
    assert!((state.time - 600.0 * 0.016).abs() < 1e-9);
    assert!((state.rotation - 600.0 * 0.005).abs() < 1e-9);
    assert_eq!(seen.len(), 600);
}

#[test]
fn frame_body_sees_the_advanced_state() {
    let mut first = None;
    let mut animator = Animator::new(|state: &FrameState| {
        first.get_or_insert(*state);
    });
    animator.tick();
    drop(animator);

    let first = first.expect("frame ran");
    assert_eq!(first.time, 0.016);
    assert_eq!(first.rotation, 0.005);
}

#[test]
fn exhausted_source_draws_nothing() {
    let mut calls = 0;
    let mut animator = Animator::new(|_: &FrameState| calls += 1);
    assert_eq!(animator.run(&mut Ticks(0)), 0);
    assert_eq!(animator.state(), FrameState::new());
    drop(animator);
    assert_eq!(calls, 0);
}

#[test]
fn custom_step_is_honoured() {
    let step = FrameStep {
        time: 1.0,
        rotation: 0.5,
    };
    let mut animator = Animator::with_step(|_: &FrameState| {}, step);
    animator.run(&mut Ticks(4));
    assert_eq!(animator.state().time, 4.0);
    assert_eq!(animator.state().rotation, 2.0);
}
