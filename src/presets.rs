//! Conventional grammars ready to generate.

use crate::lsystem::LSystem;

/// Named classic L-Systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    KochCurve,
    KochSnowflake,
    SierpinskiArrowhead,
    FractalPlant,
    BinaryTree,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::KochCurve,
        Preset::KochSnowflake,
        Preset::SierpinskiArrowhead,
        Preset::FractalPlant,
        Preset::BinaryTree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::KochCurve => "koch",
            Self::KochSnowflake => "snowflake",
            Self::SierpinskiArrowhead => "sierpinski",
            Self::FractalPlant => "plant",
            Self::BinaryTree => "tree",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Builds the grammar with `iterations` generations.
    pub fn build(self, iterations: usize) -> LSystem {
        match self {
            Self::KochCurve => LSystem::new("F", iterations, 90f64.to_radians())
                .with_rule('F', "F+F-F-F+F")
                .with_initial_heading(0.0),
            Self::KochSnowflake => LSystem::new("F--F--F", iterations, 60f64.to_radians())
                .with_rule('F', "F+F--F+F")
                .with_initial_heading(0.0),
            // A and B both draw.
            Self::SierpinskiArrowhead => LSystem::new("A", iterations, 60f64.to_radians())
                .with_rule('A', "B-A-B")
                .with_rule('B', "A+B+A")
                .with_aliases(['A', 'B'])
                .with_initial_heading(0.0),
            Self::FractalPlant => LSystem::new("X", iterations, 25f64.to_radians())
                .with_rule('X', "F+[[X]-X]-F[-FX]+X")
                .with_rule('F', "FF")
                .with_initial_heading(65f64.to_radians()),
            // Each generation halves the branch length; `!` mirrors the right-hand branch.
            Self::BinaryTree => LSystem::new("F", iterations, 30f64.to_radians())
                .with_rule('F', "F[@0.5+F][@0.5!+F]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("mandelbrot"), None);
    }

    #[test]
    fn every_preset_generates_geometry() {
        for preset in Preset::ALL {
            let output = preset.build(3).generate().unwrap();
            let segments = output.as_segments().unwrap();
            assert!(!segments.is_empty(), "{} drew nothing", preset.name());
        }
    }

    #[test]
    fn koch_curve_has_expected_segment_count() {
        let output = Preset::KochCurve.build(2).with_deduplicate(false).generate().unwrap();
        assert_eq!(output.as_segments().unwrap().len(), 25);
    }
}
