use glam::Vec2;
use movesquare_common::{Bounds, MoveParams};
use movesquare_input::MovementIntent;

/// Next position of the square.
///
/// Movement is applied first, then the result is snapped back inside
/// `bounds`. The output satisfies `0 <= x <= width - size` and
/// `0 <= y <= height - size` for any finite input position and any
/// `speed >= 0`, provided `size <= min(width, height)`. An idle axis is
/// left untouched.
pub fn step_position(
    position: Vec2,
    intent: MovementIntent,
    params: &MoveParams,
    bounds: Bounds,
) -> Vec2 {
    let axis = intent.axis();
    let mut next = position;
    if axis.x != 0.0 {
        next.x += axis.x * params.speed;
    }
    if axis.y != 0.0 {
        next.y += axis.y * params.speed;
    }

    // Compare against the edge itself; `x + size > width` can round to equality.
    let max_x = bounds.width - params.size;
    let max_y = bounds.height - params.size;
    if next.x < 0.0 {
        next.x = 0.0;
    }
    if next.y < 0.0 {
        next.y = 0.0;
    }
    if next.x > max_x {
        next.x = max_x;
    }
    if next.y > max_y {
        next.y = max_y;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use movesquare_input::Direction;
    use proptest::prelude::*;

    const WINDOW: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn params(speed: f32) -> MoveParams {
        MoveParams { speed, size: 50.0 }
    }

    /// Every subset of the four directions.
    fn all_intents() -> Vec<MovementIntent> {
        (0u8..16)
            .map(|mask| {
                let dirs: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, d)| d)
                    .collect();
                MovementIntent::from_directions(&dirs)
            })
            .collect()
    }

    #[test]
    fn result_always_in_bounds() {
        let starts = [
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            Vec2::new(750.0, 550.0),
            Vec2::new(-40.0, 900.0),
            Vec2::new(5000.0, -5000.0),
            Vec2::new(0.3, 549.9),
        ];
        for speed in [0.0, 0.5, 5.0, 20.0, 1000.0] {
            for intent in all_intents() {
                for start in starts {
                    let next = step_position(start, intent, &params(speed), WINDOW);
                    assert!(
                        WINDOW.contains_square(next, 50.0),
                        "{start:?} {intent:?} speed={speed} -> {next:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn no_input_leaves_position_unchanged() {
        let start = Vec2::new(123.25, 456.75);
        let next = step_position(start, MovementIntent::new(), &params(5.0), WINDOW);
        assert_eq!(next, start);
    }

    #[test]
    fn opposing_directions_cancel_exactly() {
        let start = Vec2::new(0.1, 0.7);
        for speed in [0.3, 5.0, 17.77] {
            let vertical = MovementIntent::from_directions(&[Direction::Up, Direction::Down]);
            assert_eq!(step_position(start, vertical, &params(speed), WINDOW).y, start.y);

            let horizontal =
                MovementIntent::from_directions(&[Direction::Left, Direction::Right]);
            assert_eq!(step_position(start, horizontal, &params(speed), WINDOW).x, start.x);
        }
    }

    #[test]
    fn each_direction_moves_its_axis() {
        let start = Vec2::new(100.0, 100.0);
        let p = params(5.0);
        let step = |d| step_position(start, MovementIntent::from_directions(&[d]), &p, WINDOW);
        assert_eq!(step(Direction::Up), Vec2::new(100.0, 95.0));
        assert_eq!(step(Direction::Down), Vec2::new(100.0, 105.0));
        assert_eq!(step(Direction::Left), Vec2::new(95.0, 100.0));
        assert_eq!(step(Direction::Right), Vec2::new(105.0, 100.0));
    }

    #[test]
    fn clamps_to_right_edge_not_past_it() {
        let right = MovementIntent::from_directions(&[Direction::Right]);
        let next = step_position(Vec2::new(760.0, 100.0), right, &params(20.0), WINDOW);
        assert_eq!(next.x, 750.0);
    }

    #[test]
    fn clamps_to_top_left() {
        let up_left = MovementIntent::from_directions(&[Direction::Up, Direction::Left]);
        let next = step_position(Vec2::new(2.0, 3.0), up_left, &params(5.0), WINDOW);
        assert_eq!(next, Vec2::ZERO);
    }

    #[test]
    fn out_of_bounds_start_is_snapped_back() {
        let next = step_position(
            Vec2::new(-100.0, 10_000.0),
            MovementIntent::new(),
            &params(5.0),
            WINDOW,
        );
        assert_eq!(next, Vec2::new(0.0, 550.0));
    }

    #[test]
    fn square_filling_the_window_pins_to_origin() {
        let bounds = Bounds::new(50.0, 50.0);
        let all = all_intents();
        for intent in all {
            let next = step_position(Vec2::new(10.0, -10.0), intent, &params(5.0), bounds);
            assert_eq!(next, Vec2::ZERO);
        }
    }

    #[test]
    fn one_ulp_past_the_edge_is_pulled_back() {
        let size = 2.279_998_8_f32;
        let edge = WINDOW.width - size;
        let past = f32::from_bits(edge.to_bits() + 1);
        assert_eq!(past + size, WINDOW.width);

        let p = MoveParams { speed: 0.0, size };
        let next = step_position(Vec2::new(past, 10.0), MovementIntent::new(), &p, WINDOW);
        assert_eq!(next.x, edge);
        assert!(WINDOW.contains_square(next, size));
    }

    #[test]
    fn infinite_speed_leaves_idle_axis_alone() {
        let right = MovementIntent::from_directions(&[Direction::Right]);
        let p = MoveParams {
            speed: f32::INFINITY,
            size: 50.0,
        };
        let next = step_position(Vec2::new(100.0, 100.0), right, &p, WINDOW);
        assert_eq!(next, Vec2::new(750.0, 100.0));
    }

    fn intent_strategy() -> impl Strategy<Value = MovementIntent> {
        (0usize..16).prop_map(|i| all_intents()[i])
    }

    /// A coordinate anywhere near the window, or a few ulps either side of the far edge.
    fn coordinate(extent: f32, size: f32) -> impl Strategy<Value = f32> {
        let edge = extent - size;
        prop_oneof![
            -2.0 * extent..3.0 * extent,
            (-4i32..=4).prop_map(move |ulps| {
                f32::from_bits((edge.to_bits() as i32 + ulps).max(0) as u32)
            }),
        ]
    }

    proptest! {
        #[test]
        fn result_always_in_bounds_for_any_input(
            (size, x, y) in (0.01f32..=600.0).prop_flat_map(|size| {
                (Just(size), coordinate(800.0, size), coordinate(600.0, size))
            }),
            speed in prop_oneof![0.0f32..2000.0, Just(f32::INFINITY)],
            intent in intent_strategy(),
        ) {
            let p = MoveParams { speed, size };
            let next = step_position(Vec2::new(x, y), intent, &p, WINDOW);
            prop_assert!(
                WINDOW.contains_square(next, size),
                "({x}, {y}) size={size} speed={speed} {intent:?} -> {next:?}"
            );
        }

        #[test]
        fn idle_input_is_a_fixed_point(
            x in 0.0f32..=750.0,
            y in 0.0f32..=550.0,
            speed in 0.0f32..100.0,
        ) {
            let start = Vec2::new(x, y);
            let next = step_position(start, MovementIntent::new(), &params(speed), WINDOW);
            prop_assert_eq!(next, start);
        }
    }
}
