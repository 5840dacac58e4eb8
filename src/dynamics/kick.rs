use log::debug;

/// Whether any capsule has fallen strictly below `threshold` of its reference speed.
pub fn kick_needed(velocities: &[f64], reference_speeds: &[f64], threshold: f64) -> bool {
    velocities
        .iter()
        .zip(reference_speeds)
        .any(|(v, v_ref)| *v < v_ref * threshold)
}

/// Apply the kick rule to a post-drag velocity vector.
///
/// A single lagging capsule resynchronises the whole ring: every velocity is
/// restored to its reference speed, not only the offender's. Returns whether
/// the kick fired.
pub fn apply_kick(velocities: &mut [f64], reference_speeds: &[f64], threshold: f64) -> bool {
    if !kick_needed(velocities, reference_speeds, threshold) {
        return false;
    }
    if log::log_enabled!(log::Level::Debug) {
        let n_lagging = velocities
            .iter()
            .zip(reference_speeds)
            .filter(|(v, v_ref)| **v < *v_ref * threshold)
            .count();
        debug!("Kick: {} capsule(s) below threshold, resetting ring", n_lagging);
    }
    velocities.copy_from_slice(reference_speeds);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kick_needed_is_strict() {
        let refs = [10.0, 10.0];
        assert!(!kick_needed(&[9.0, 9.5], &refs, 0.9));
        assert!(kick_needed(&[8.99, 9.5], &refs, 0.9));
    }

    #[test]
    fn test_non_positive_threshold_never_fires() {
        let refs = [1.0, 1.0];
        assert!(!kick_needed(&[0.0, 0.0], &refs, 0.0));
        assert!(!kick_needed(&[0.0, 1e-9], &refs, -1.0));
    }

    #[test]
    fn test_one_lagging_capsule_resets_all() {
        let refs = [10.0, 20.0, 30.0];
        let mut vs = [9.0, 15.0, 29.0];
        assert!(apply_kick(&mut vs, &refs, 0.8));
        assert_eq!(vs, refs);
    }

    #[test]
    fn test_no_kick_leaves_velocities() {
        let refs = [10.0, 20.0];
        let mut vs = [9.5, 19.0];
        assert!(!apply_kick(&mut vs, &refs, 0.9));
        assert_eq!(vs, [9.5, 19.0]);
    }
}
