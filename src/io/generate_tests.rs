use crate::io::{generate_point_set, GenerateConfig};
use crate::utils::ForceError;

#[test]
fn test_generated_points_stay_in_bounds() {
    let config = GenerateConfig { count: 200, seed: 3, extent: 5.0, min_mass: 0.5, max_mass: 2.0 };
    let points = generate_point_set(&config).expect("Failed to generate points");

    assert_eq!(points.len(), 200);
    for p in points.positions() {
        for c in p.components() {
            assert!((-5.0..5.0).contains(&c), "Coordinate {} out of range", c);
        }
    }
    for &m in points.masses() {
        assert!((0.5..2.0).contains(&m), "Mass {} out of range", m);
    }
    assert!(points.coincident_pairs().is_empty());
}

#[test]
fn test_different_seeds_differ() {
    let a = generate_point_set(&GenerateConfig { count: 10, seed: 1, ..GenerateConfig::default() }).unwrap();
    let b = generate_point_set(&GenerateConfig { count: 10, seed: 2, ..GenerateConfig::default() }).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_fixed_mass() {
    let config = GenerateConfig { count: 5, min_mass: 3.0, max_mass: 3.0, ..GenerateConfig::default() };
    let points = generate_point_set(&config).expect("Failed to generate points");
    assert!(points.masses().iter().all(|&m| m == 3.0));
}

#[test]
fn test_invalid_parameters() {
    let bad_extent = GenerateConfig { extent: 0.0, ..GenerateConfig::default() };
    assert!(matches!(generate_point_set(&bad_extent), Err(ForceError::InvalidParameter(_))));

    let bad_masses = GenerateConfig { min_mass: 2.0, max_mass: 1.0, ..GenerateConfig::default() };
    assert!(matches!(generate_point_set(&bad_masses), Err(ForceError::InvalidParameter(_))));
}
