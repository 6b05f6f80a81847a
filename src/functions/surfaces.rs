//! De vaste catalogus van vervormingsfuncties en hun rekenregels.

use super::FunctionDefinition;
use super::schema::{MAX_PARAMETERS, ParameterSchema, ParameterSpec, UNIT_AB};

/// Opgeloste coëfficiënten voor een rekenregel; schema-entry `i` staat in slot `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coefficients(pub [f64; MAX_PARAMETERS]);

impl Coefficients {
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub const fn b(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub const fn c(&self) -> f64 {
        self.0[2]
    }
}

/// Beschikbare functies binnen de catalogus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    SineRidge,
    RadialRipple,
    OrganicHill,
    EggCrate,
    BrainFolds,
    CellularCaustic,
    FoldedLeaf,
    TurbulentPlasma,
    /// Telt bij elke evaluatie een uniforme ruis in `[-0.1, 0.1]` op; zie
    /// [`FunctionKind::is_stochastic`].
    NoisyOrganism,
    CraterField,
    ReflectiveShell,
    BiologicalMesh,
    BambooNodes,
    SineNet,
    BiowaveBraids,
    PeristalticTunnel,
    OrganicWebbing,
    VortexWrap,
    NestedWaves,
    WigglingSurface,
}

impl FunctionKind {
    /// Deterministisch deel van de functie.
    ///
    /// Voor `NoisyOrganism` is dit de basiswaarde zonder ruis.
    #[must_use]
    pub fn height(self, x: f64, y: f64, c: &Coefficients) -> f64 {
        match self {
            Self::SineRidge => (c.a() * x).sin() * (c.b() * y).cos(),
            Self::RadialRipple => {
                let r = (c.a() * c.a() * x * x + c.b() * c.b() * y * y).sqrt();
                r.sin() / (1.0 + (x * x + y * y).sqrt())
            }
            Self::OrganicHill => x.sin() * y.sin() + 0.5 * (2.0 * x).sin() * (2.0 * y).cos(),
            Self::EggCrate => (c.a() * x).sin().powi(2) + (c.b() * y).cos().powi(2),
            Self::BrainFolds => {
                (c.a() * x + (c.b() * y).sin()).sin() + (c.b() * y + (c.a() * x).cos()).cos()
            }
            Self::CellularCaustic => (x * x + y * y).sin() / (1.0 + 0.1 * x * x + 0.1 * y * y),
            Self::FoldedLeaf => x.sin() * y.cos() + 0.3 * (3.0 * x + y).sin(),
            Self::TurbulentPlasma => {
                (c.a() * x + (c.b() * y).sin()).sin() * (c.b() * y + (c.a() * x).sin()).cos()
            }
            Self::NoisyOrganism => x.sin() + y.cos(),
            Self::CraterField => (x * x - y * y).sin() / (1.0 + 0.5 * x * x + 0.5 * y * y),
            Self::ReflectiveShell => ((c.a() * x).sin() + (c.b() * y).cos()).tanh(),
            Self::BiologicalMesh => (x + y.sin()).cos() * (y + x.cos()).sin(),
            // 1 + cos(b·y) wordt nul; ±inf/NaN gaan ongewijzigd door.
            Self::BambooNodes => (c.a() * x).sin() / (1.0 + (c.b() * y).cos()),
            Self::SineNet => x.sin() * y.cos() + (3.0 * x).sin() * (3.0 * y).cos(),
            Self::BiowaveBraids => {
                (c.a() * x + (c.b() * y).sin()).sin() + (c.a() * y + (c.b() * x).cos()).cos()
            }
            Self::PeristalticTunnel => x.sin() * y.sin() * (x + y).cos(),
            Self::OrganicWebbing => {
                (c.a() * x * x + c.b() * y * y).sin() * (c.c() * x * y).cos()
            }
            Self::VortexWrap => y.atan2(x) + (x * x + y * y).sqrt().sin(),
            Self::NestedWaves => (c.a() * x + (c.b() * y + (c.c() * x).sin()).sin()).sin(),
            Self::WigglingSurface => x.sin() * y.tanh() + (x + y).cos(),
        }
    }

    /// `true` voor de enige functie die per aanroep willekeurige ruis toevoegt.
    #[must_use]
    pub const fn is_stochastic(self) -> bool {
        matches!(self, Self::NoisyOrganism)
    }
}

const BAMBOO: ParameterSchema = ParameterSchema::new(&[
    ParameterSpec {
        name: "a",
        default_value: 3.0,
        min: 0.1,
        max: 10.0,
        step: 0.01,
        label: "A",
    },
    ParameterSpec {
        name: "b",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.01,
        label: "B",
    },
]);

const WEB_ABC: ParameterSchema = ParameterSchema::new(&[
    ParameterSpec {
        name: "a",
        default_value: 0.1,
        min: 0.01,
        max: 1.0,
        step: 0.01,
        label: "A",
    },
    ParameterSpec {
        name: "b",
        default_value: 0.1,
        min: 0.01,
        max: 1.0,
        step: 0.01,
        label: "B",
    },
    ParameterSpec {
        name: "c",
        default_value: 0.1,
        min: 0.01,
        max: 1.0,
        step: 0.01,
        label: "C",
    },
]);

const NESTED_ABC: ParameterSchema = ParameterSchema::new(&[
    ParameterSpec {
        name: "a",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.1,
        label: "A",
    },
    ParameterSpec {
        name: "b",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.1,
        label: "B",
    },
    ParameterSpec {
        name: "c",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.1,
        label: "C",
    },
]);

/// Volledige catalogus in menuvolgorde.
pub const REGISTRATIONS: &[FunctionDefinition] = &[
    FunctionDefinition {
        key: "sineRidge",
        name: "Sine Ridge",
        kind: FunctionKind::SineRidge,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "ripple",
        name: "Radial Ripple",
        kind: FunctionKind::RadialRipple,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "organicHill",
        name: "Organic Hill",
        kind: FunctionKind::OrganicHill,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "eggCrate",
        name: "Egg Crate",
        kind: FunctionKind::EggCrate,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "brainFolds",
        name: "Brain Folds",
        kind: FunctionKind::BrainFolds,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "caustic",
        name: "Cellular Caustic",
        kind: FunctionKind::CellularCaustic,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "foldedLeaf",
        name: "Folded Leaf",
        kind: FunctionKind::FoldedLeaf,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "turbulentPlasma",
        name: "Turbulent Plasma",
        kind: FunctionKind::TurbulentPlasma,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "noisyOrganism",
        name: "Noisy Organism",
        kind: FunctionKind::NoisyOrganism,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "craterField",
        name: "Crater Field",
        kind: FunctionKind::CraterField,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "reflectiveShell",
        name: "Reflective Shell",
        kind: FunctionKind::ReflectiveShell,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "bioMesh",
        name: "Biological Mesh",
        kind: FunctionKind::BiologicalMesh,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "bamboo",
        name: "Bamboo Nodes",
        kind: FunctionKind::BambooNodes,
        schema: BAMBOO,
    },
    FunctionDefinition {
        key: "sineNet",
        name: "Psychedelic Sine Net",
        kind: FunctionKind::SineNet,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "biowave",
        name: "Biowave Braids",
        kind: FunctionKind::BiowaveBraids,
        schema: UNIT_AB,
    },
    FunctionDefinition {
        key: "tunnel",
        name: "Peristaltic Tunnel",
        kind: FunctionKind::PeristalticTunnel,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "organicWeb",
        name: "Organic Webbing",
        kind: FunctionKind::OrganicWebbing,
        schema: WEB_ABC,
    },
    FunctionDefinition {
        key: "vortexWrap",
        name: "Vortex Wrap",
        kind: FunctionKind::VortexWrap,
        schema: ParameterSchema::EMPTY,
    },
    FunctionDefinition {
        key: "nestedWaves",
        name: "Nested Waves",
        kind: FunctionKind::NestedWaves,
        schema: NESTED_ABC,
    },
    FunctionDefinition {
        key: "wiggler",
        name: "Wiggling Surface",
        kind: FunctionKind::WigglingSurface,
        schema: ParameterSchema::EMPTY,
    },
];

#[cfg(test)]
mod tests {
    use super::{Coefficients, FunctionKind, REGISTRATIONS};
    use crate::functions::schema::MAX_PARAMETERS;

    const EPSILON: f64 = 1e-12;
    const UNIT: Coefficients = Coefficients([1.0, 1.0, 1.0]);

    #[test]
    fn schema_names_follow_slot_order() {
        let slots = ["a", "b", "c"];
        for definition in REGISTRATIONS {
            assert!(definition.schema.len() <= MAX_PARAMETERS, "{}", definition.key);
            for (index, spec) in definition.schema.iter().enumerate() {
                assert_eq!(spec.name, slots[index], "{}", definition.key);
            }
        }
    }

    #[test]
    fn only_noisy_organism_is_stochastic() {
        let stochastic: Vec<&str> = REGISTRATIONS
            .iter()
            .filter(|definition| definition.kind.is_stochastic())
            .map(|definition| definition.key)
            .collect();
        assert_eq!(stochastic, ["noisyOrganism"]);
    }

    #[test]
    fn known_values_at_origin() {
        let zero = Coefficients::default();
        assert!(FunctionKind::SineRidge.height(0.0, 0.0, &UNIT).abs() < EPSILON);
        assert!((FunctionKind::EggCrate.height(0.0, 0.0, &UNIT) - 1.0).abs() < EPSILON);
        assert!((FunctionKind::NoisyOrganism.height(0.0, 0.0, &zero) - 1.0).abs() < EPSILON);
        assert!((FunctionKind::WigglingSurface.height(0.0, 0.0, &zero) - 1.0).abs() < EPSILON);
        assert!(FunctionKind::RadialRipple.height(0.0, 0.0, &UNIT).abs() < EPSILON);
    }

    #[test]
    fn uses_third_coefficient() {
        let x = 1.3;
        let y = -0.7;
        let base = Coefficients([0.2, 0.3, 0.1]);
        let shifted = Coefficients([0.2, 0.3, 0.9]);
        assert_ne!(
            FunctionKind::OrganicWebbing.height(x, y, &base),
            FunctionKind::OrganicWebbing.height(x, y, &shifted)
        );
        let expected = (0.2_f64 * x * x + 0.3 * y * y).sin() * (0.1_f64 * x * y).cos();
        assert!((FunctionKind::OrganicWebbing.height(x, y, &base) - expected).abs() < EPSILON);
    }

    #[test]
    fn bamboo_singularity_passes_through() {
        // b = 1, y = π: 1 + cos(π) = 0
        let value = FunctionKind::BambooNodes.height(1.0, std::f64::consts::PI, &UNIT);
        assert!(!value.is_finite() || value.abs() > 1e10);
    }

    #[test]
    fn vortex_wrap_uses_atan2_quadrants() {
        let zero = Coefficients::default();
        let left = FunctionKind::VortexWrap.height(-1.0, 0.0, &zero);
        let expected = std::f64::consts::PI + 1.0_f64.sin();
        assert!((left - expected).abs() < EPSILON);
    }
}
