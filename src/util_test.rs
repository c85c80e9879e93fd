use super::*;

#[test]
fn test_vec_speed() {
    assert_eq!(vec_speed(&Vec3::xyz(3.0, 4.0, 0.0)), 5.0);
    assert_eq!(vec_speed(&Vec3::xyz(0.0, 0.0, 0.0)), 0.0);
}

#[test]
fn test_vec_speed_missing_components_count_as_zero() {
    let partial = Vec3::new(Some(3.0), Some(4.0), None);
    assert_eq!(vec_speed(&partial), 5.0);
}

#[test]
fn test_vec_heading() {
    assert_eq!(vec_heading(&Vec3::xyz(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(vec_heading(&Vec3::xyz(1.0, 0.0, 0.0)), 0.0);
    assert_eq!(
        vec_heading(&Vec3::xyz(0.0, 1.0, 0.0)),
        std::f32::consts::FRAC_PI_2
    );
}

#[test]
fn test_vec_distance() {
    let origin = Vec3::xyz(0.0, 0.0, 0.0);
    assert_eq!(vec_distance(&origin, &Vec3::xyz(3.0, 4.0, 0.0)), 5.0);
    assert_eq!(vec_distance(&origin, &origin), 0.0);
}

#[test]
fn test_glam_round_trip() {
    let v = Vec3::xyz(1.0, -2.5, 3.75);
    assert_eq!(glam_to_vec(&vec_to_glam(&v)), v);
}
