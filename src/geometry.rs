use nalgebra::Point3;

pub mod closest;
pub mod point;
pub mod torus;

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // Pin the endpoint rather than trusting the accumulated step.
            xs[n - 1] = stop;
            xs
        }
    }
}

/// Points of the z = 0 plane over `axis` x `axis`, y outer and x inner.
pub fn plane_grid(axis: &[f64]) -> Vec<Point3<f64>> {
    axis.iter()
        .flat_map(|y| axis.iter().map(move |x| Point3::new(*x, *y, 0.0)))
        .collect()
}

/// Points of the cube `axis`^3, x outer, then y, then z.
pub fn volume_grid(axis: &[f64]) -> Vec<Point3<f64>> {
    let mut samples: Vec<Point3<f64>> = Vec::with_capacity(axis.len().pow(3));
    for x in axis {
        for y in axis {
            for z in axis {
                samples.push(Point3::new(*x, *y, *z));
            }
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_includes_both_ends() {
        let xs = linspace(-0.5, 0.5, 5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], -0.5);
        assert_eq!(xs[4], 0.5);
        assert_relative_eq!(xs[1], -0.25);
        assert_eq!(xs[2], 0.0);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn test_plane_grid_order() {
        let grid = plane_grid(&[0.0, 1.0]);
        assert_eq!(
            grid,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_volume_grid_order() {
        let grid = volume_grid(&[0.0, 1.0]);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[1], Point3::new(0.0, 0.0, 1.0));
        assert_eq!(grid[2], Point3::new(0.0, 1.0, 0.0));
        assert_eq!(grid[4], Point3::new(1.0, 0.0, 0.0));
    }
}
