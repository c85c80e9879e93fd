use crate::*;

/// Converts a component-optional vector to glam, treating missing components
/// as zero (the same default the row renderer uses for present-but-partial
/// records).
pub fn vec_to_glam(v: &Vec3) -> glam::f32::Vec3 {
    glam::f32::Vec3::new(
        v.x.unwrap_or(0.0),
        v.y.unwrap_or(0.0),
        v.z.unwrap_or(0.0),
    )
}

pub fn glam_to_vec(v: &glam::f32::Vec3) -> Vec3 {
    Vec3::xyz(v.x, v.y, v.z)
}

/// Magnitude of a replicated velocity.
pub fn vec_speed(v: &Vec3) -> f32 {
    vec_to_glam(v).length()
}

/// Heading angle of a velocity in the ground plane, `atan2(vy, vx)`. A zero
/// vector yields 0.
pub fn vec_heading(v: &Vec3) -> f32 {
    v.y.unwrap_or(0.0).atan2(v.x.unwrap_or(0.0))
}

/// Euclidean distance between two replicated locations.
pub fn vec_distance(a: &Vec3, b: &Vec3) -> f32 {
    vec_to_glam(a).distance(vec_to_glam(b))
}
