// Math utilities and helper functions

/// Inputs with a magnitude at or below this are treated as "no input"
pub const AXIS_DEAD_ZONE: f32 = f32::EPSILON;

/// Check if an axis value should count as actual input
pub fn has_axis_input(value: f32) -> bool {
    value.abs() > AXIS_DEAD_ZONE
}

/// Sign of a horizontal delta: -1.0, 0.0 or 1.0
///
/// Unlike `f32::signum`, zero (and negative zero) maps to 0.0 so callers can
/// tell "no preference" apart from "right".
pub fn direction_sign(delta: f32) -> f32 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Place an attachment offset on the side given by `side` (-1.0 or 1.0)
pub fn mirror_offset(authored: f32, side: f32) -> f32 {
    authored.abs() * side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(direction_sign(3.5), 1.0);
        assert_eq!(direction_sign(-0.01), -1.0);
        assert_eq!(direction_sign(0.0), 0.0);
        assert_eq!(direction_sign(-0.0), 0.0);
    }

    #[test]
    fn test_mirror_offset() {
        assert_eq!(mirror_offset(0.8, 1.0), 0.8);
        assert_eq!(mirror_offset(0.8, -1.0), -0.8);
        assert_eq!(mirror_offset(-0.8, 1.0), 0.8);
    }

    #[test]
    fn test_axis_input() {
        assert!(has_axis_input(1.0));
        assert!(has_axis_input(-0.5));
        assert!(!has_axis_input(0.0));
    }
}
