use super::*;

// =========================================================================
// Offset table
// =========================================================================

/// Octant index bits must agree with the sign of each offset component.
#[test]
fn test_offsets_match_index_bits() {
  for (octant, offset) in OCTANT_OFFSETS.iter().enumerate() {
    let expect = |bit: usize| if octant & bit != 0 { 0.5 } else { -0.5 };
    assert_eq!(offset.x, expect(1), "Octant {} X mismatch", octant);
    assert_eq!(offset.y, expect(2), "Octant {} Y mismatch", octant);
    assert_eq!(offset.z, expect(4), "Octant {} Z mismatch", octant);
  }
}

// =========================================================================
// Classification
// =========================================================================

/// A point at each child center classifies into that child.
#[test]
fn test_classify_child_centers() {
  let center = Vec3::new(3.0, -2.0, 7.0);
  for octant in 0..8 {
    let point = child_center(center, octant, 4.0);
    assert_eq!(classify(center, point), Some(octant));
  }
}

/// Exactly one octant matches for any finite offset, including ties.
#[test]
fn test_classify_exactly_one_match() {
  let samples = [-1.0, -0.0, 0.0, 1e-7, 2.0];
  for &x in &samples {
    for &y in &samples {
      for &z in &samples {
        let delta = Vec3::new(x, y, z);
        let matches = OCTANT_OFFSETS
          .iter()
          .filter(|o| {
            (if o.x > 0.0 { x >= 0.0 } else { x < 0.0 })
              && (if o.y > 0.0 { y >= 0.0 } else { y < 0.0 })
              && (if o.z > 0.0 { z >= 0.0 } else { z < 0.0 })
          })
          .count();
        assert_eq!(matches, 1, "delta {:?} matched {} octants", delta, matches);
        assert!(classify(Vec3::ZERO, delta).is_some());
      }
    }
  }
}

/// Ties at exactly zero resolve to the positive side.
#[test]
fn test_classify_tie_is_positive() {
  assert_eq!(classify(Vec3::ZERO, Vec3::ZERO), Some(7));
  assert_eq!(classify(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0)), Some(1));
  assert_eq!(classify(Vec3::ONE, Vec3::new(1.0, 1.0, 0.0)), Some(3));
}

#[test]
fn test_classify_rejects_non_finite() {
  assert_eq!(classify(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)), None);
  assert_eq!(classify(Vec3::ZERO, Vec3::new(0.0, f32::INFINITY, 0.0)), None);
  assert_eq!(classify(Vec3::splat(f32::NAN), Vec3::ZERO), None);
}

// =========================================================================
// Child geometry
// =========================================================================

/// Children of a cell with edge 4 sit one unit from its center.
#[test]
fn test_child_center_quarter_edge() {
  assert_eq!(child_center(Vec3::ZERO, 0, 4.0), Vec3::splat(-1.0));
  assert_eq!(child_center(Vec3::ZERO, 7, 4.0), Vec3::splat(1.0));
  assert_eq!(
    child_center(Vec3::new(10.0, 0.0, 0.0), 1, 2.0),
    Vec3::new(10.5, -0.5, -0.5)
  );
}
