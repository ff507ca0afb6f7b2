//! Hero scene construction.

/// Wireframe icosahedron, glowing inner sphere, particle cloud, lights and camera.
pub mod hero;
