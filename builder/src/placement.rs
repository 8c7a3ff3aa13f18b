//! Canvas placement generation.
//!
//! New selections get a placement inside the canvas bounds. Placement is
//! cosmetic and random in production; the source is injected so tests can
//! pin it and assert exact states (layout tests must never assert exact
//! random coordinates).

use crate::types::CanvasSize;
use petal_catalog::Placement;

/// Source of placements for newly added flowers
pub trait PlacementSource: Send + Sync {
    /// Next placement within the given canvas bounds
    fn next_placement(&self, canvas: &CanvasSize) -> Placement;
}

/// Uniformly random placement within the canvas, keeping a margin so
/// flowers render fully inside the frame
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlacement;

impl PlacementSource for RandomPlacement {
    fn next_placement(&self, canvas: &CanvasSize) -> Placement {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let span_x = (canvas.width - 100.0).max(1.0);
        let span_y = (canvas.height - 150.0).max(1.0);

        Placement {
            x: rng.gen_range(0.0..1.0) * span_x + 50.0,
            y: rng.gen_range(0.0..1.0) * span_y + 50.0,
            rotation: (rng.gen_range(0.0..1.0) - 0.5) * 30.0,
            scale: 0.8 + rng.gen_range(0.0..1.0) * 0.4,
        }
    }
}

/// Fixed placement for deterministic tests
#[derive(Clone, Copy, Debug)]
pub struct FixedPlacement {
    placement: Placement,
}

impl FixedPlacement {
    /// Always yield the given placement
    #[must_use]
    pub const fn new(placement: Placement) -> Self {
        Self { placement }
    }

    /// A stable centered placement
    #[must_use]
    pub const fn centered() -> Self {
        Self::new(Placement::new(400.0, 300.0, 0.0, 1.0))
    }
}

impl Default for FixedPlacement {
    fn default() -> Self {
        Self::centered()
    }
}

impl PlacementSource for FixedPlacement {
    fn next_placement(&self, _canvas: &CanvasSize) -> Placement {
        self.placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_placement_stays_in_bounds() {
        let canvas = CanvasSize {
            width: 800.0,
            height: 600.0,
        };
        let source = RandomPlacement;

        for _ in 0..100 {
            let p = source.next_placement(&canvas);
            assert!(p.x >= 50.0 && p.x <= canvas.width - 50.0);
            assert!(p.y >= 50.0 && p.y <= canvas.height - 100.0);
            assert!(p.rotation >= -15.0 && p.rotation <= 15.0);
            assert!(p.scale >= 0.8 && p.scale <= 1.2);
        }
    }

    #[test]
    fn fixed_placement_is_deterministic() {
        let source = FixedPlacement::centered();
        let canvas = CanvasSize::default();
        assert_eq!(source.next_placement(&canvas), source.next_placement(&canvas));
    }

    #[test]
    fn tiny_canvas_does_not_underflow() {
        let canvas = CanvasSize {
            width: 10.0,
            height: 10.0,
        };
        let p = RandomPlacement.next_placement(&canvas);
        assert!(p.x >= 50.0);
        assert!(p.y >= 50.0);
    }
}
