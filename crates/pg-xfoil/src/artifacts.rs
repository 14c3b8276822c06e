//! Names of the files XFOIL leaves in the working directory.

/// Prefix of the saved coordinate file.
pub const COORDINATES_PREFIX: &str = "Coordinates_";

/// Prefix of the accumulated polar file.
pub const POLAR_PREFIX: &str = "Polar_";

/// Boundary-layer dump XFOIL writes as a side effect; always deleted by
/// cleanup.
pub const BL_TEMP_FILE: &str = ":00.bl";

/// Polar artifact name for one airfoil/Reynolds pair. The Reynolds number
/// is rendered in exponent form (`1e4`, `1.5e6`) to keep names short and
/// unique across the batch.
pub fn polar_artifact_name(stem: &str, reynolds: f64) -> String {
    format!("{}{}_Re{:e}", POLAR_PREFIX, stem, reynolds)
}

/// Coordinate artifact name for one airfoil.
pub fn coordinates_artifact_name(stem: &str) -> String {
    format!("{}{}", COORDINATES_PREFIX, stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_names_are_unique_per_reynolds() {
        let a = polar_artifact_name("naca0012", 1.0e4);
        let b = polar_artifact_name("naca0012", 5.0e4);
        let c = polar_artifact_name("naca0012", 1.5e6);
        assert!(a.starts_with(POLAR_PREFIX));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(a, "Polar_naca0012_Re1e4");
        assert_eq!(c, "Polar_naca0012_Re1.5e6");
    }

    #[test]
    fn coordinates_name_uses_prefix() {
        assert_eq!(
            coordinates_artifact_name("naca0012"),
            "Coordinates_naca0012"
        );
    }
}
