//! Integration-level tests for the generated kinds of the `qdim` facade crate.

use qdim::prelude::*;
use qdim::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length_conversions() {
    let km: Length = 1.0_f64.kilometer();
    assert_abs_diff_eq!(km.meter(), 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(1.0_f64.mile().kilometer(), 1.609344, epsilon = 1e-12);
    assert_relative_eq!(12.0_f64.inch().foot(), 1.0, max_relative = 1e-12);
}

#[test]
fn smoke_test_time_conversions() {
    assert_abs_diff_eq!(1.0_f64.day().second(), 86400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(90.0_f64.minute().hour(), 1.5, epsilon = 1e-12);
}

#[test]
fn smoke_test_angle_conversions() {
    assert_abs_diff_eq!(180.0_f64.degree().radian(), core::f64::consts::PI, epsilon = 1e-12);
    assert_abs_diff_eq!(1.0_f64.revolution().degree(), 360.0, epsilon = 1e-9);
    assert_abs_diff_eq!(1.0_f64.degree().arcsecond(), 3600.0, epsilon = 1e-6);
}

#[test]
fn smoke_test_velocity_conversions() {
    assert_abs_diff_eq!(36.0_f64.kilometer_per_hour().meter_per_second(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(1.0_f64.mile_per_hour().meter_per_second(), 0.44704, epsilon = 1e-12);
}

#[test]
fn smoke_test_mass_and_energy_conversions() {
    assert_abs_diff_eq!(1.0_f64.pound().gram(), 453.59237, epsilon = 1e-9);
    assert_abs_diff_eq!(1.0_f64.kilowatt_hour().megajoule(), 3.6, epsilon = 1e-12);
    assert_abs_diff_eq!(1.0_f64.atmosphere().kilopascal(), 101.325, epsilon = 1e-9);
}

#[test]
fn test_every_kind_has_a_canonical_unit() {
    for kind in KINDS {
        assert!(kind.canonical_unit().is_some(), "{} has no ratio-1 unit", kind.name);
        for &(unit, ratio) in kind.conversions {
            assert!(ratio.is_finite() && ratio > 0.0, "{}.{}", kind.name, unit);
            assert_eq!(kind.ratio(unit), Some(ratio));
        }
    }
}

/// For each listed kind: `1.0.<unit>()` stores exactly the declared ratio, reads back as exactly one, and the
/// list covers every conversion the kind declares.
macro_rules! assert_round_trips {
    ($($kind:ident: [$($unit:ident),* $(,)?];)*) => {$({
        let info = KINDS
            .iter()
            .find(|k| k.name == <$kind as Kind>::NAME)
            .unwrap();
        $(
            let ratio = info.ratio(stringify!($unit)).unwrap();
            let q: $kind = 1.0_f64.$unit();
            assert_eq!(q.value(), ratio, "{}.{}", info.name, stringify!($unit));
            assert_eq!(q.$unit(), 1.0, "{}.{}", info.name, stringify!($unit));
        )*
        assert_eq!(info.conversions.len(), [$(stringify!($unit)),*].len(), "{}", info.name);
    })*
    assert_eq!(KINDS.len(), [$(stringify!($kind)),*].len());
    };
}

#[test]
fn test_every_conversion_round_trips() {
    assert_round_trips! {
        Unitless: [ratio, percent, per_mille];
        Length: [
            gigameter, megameter, kilometer, hectometer, decameter, meter, decimeter, centimeter, millimeter,
            micrometer, nanometer, yard, inch, foot, mile, nautical_mile
        ];
        Area: [
            square_meter, square_kilometer, square_centimeter, square_millimeter, square_inch, square_foot,
            square_yard, square_mile, hectare, acre
        ];
        Volume: [
            cubic_meter, cubic_centimeter, cubic_inch, cubic_foot, cubic_yard, liter, milliliter, quart, pint, gallon
        ];
        Time: [
            gigasecond, megasecond, kilosecond, hectosecond, decasecond, second, decisecond, centisecond, millisecond,
            microsecond, nanosecond, minute, hour, day, week
        ];
        Frequency: [hertz, kilohertz, megahertz, gigahertz];
        Velocity: [
            meter_per_second, centimeter_per_second, foot_per_second, mile_per_hour, kilometer_per_hour,
            kilometer_per_second, knot
        ];
        Acceleration: [meter_per_second_squared, standard_gravity];
        Jerk: [meter_per_second_cubed];
        Angle: [radian, milliradian, revolution, degree, arcminute, arcsecond, milliarcsecond, gradian];
        AngularVelocity: [
            radian_per_second, radian_per_minute, radian_per_hour, degree_per_second, degree_per_minute,
            degree_per_hour, revolution_per_minute
        ];
        Mass: [
            gigagram, megagram, tonne, kilogram, hectogram, decagram, gram, decigram, centigram, milligram, microgram,
            nanogram, pound, ounce
        ];
        SpecificEnergy: [joule_per_kilogram];
        Force: [newton, kilonewton, dyne, kilopond, pound_force, poundal];
        Energy: [
            picojoule, nanojoule, microjoule, millijoule, joule, kilojoule, megajoule, gigajoule, terajoule,
            watt_hour, kilowatt_hour, calorie, kilocalorie, electronvolt
        ];
        Torque: [newton_meter, kilogram_force_meter, pound_force_foot, pound_force_inch, ounce_force_inch];
        Power: [
            picowatt, nanowatt, microwatt, milliwatt, centiwatt, deciwatt, watt, decawatt, hectowatt, kilowatt,
            megawatt, gigawatt, terawatt, petawatt, horsepower
        ];
        Pressure: [pascal, hectopascal, kilopascal, megapascal, millibar, bar, atmosphere, psi, torr];
        ElectricCurrent: [kiloampere, ampere, milliampere, microampere];
        Charge: [picocoulomb, nanocoulomb, microcoulomb, millicoulomb, coulomb, ampere_hour, milliampere_hour];
        ElectricPotential: [microvolt, millivolt, volt, kilovolt, megavolt];
        ElectricalResistance: [milliohm, ohm, kiloohm, megohm];
        ElectricConductance: [siemens, millisiemens, microsiemens];
        ElectricCapacitance: [picofarad, nanofarad, microfarad, millifarad, farad];
        ElectricInductance: [nanohenry, microhenry, millihenry, henry];
        MagneticFlux: [nanoweber, microweber, milliweber, weber, maxwell];
        MagneticFluxDensity: [nanotesla, microtesla, millitesla, tesla, gauss];
        Temperature: [kelvin, millikelvin];
        AmountOfSubstance: [kilomole, mole, millimole, micromole];
        LuminousIntensity: [candela, millicandela];
    }
}

#[test]
fn test_conversion_value_is_ratio() {
    assert_eq!(1.0_f64.kilometer().value(), 1000.0);
    assert_eq!(1.0_f64.hour().value(), 3600.0);
    assert_eq!(1.0_f64.gram().value(), 1e-3);
    assert_eq!(1.0_f64.kilometer().kilometer(), 1.0);
    assert_relative_eq!(1.0_f64.degree().degree(), 1.0, max_relative = 1e-15);
}

// ─────────────────────────────────────────────────────────────────────────────
// Synthesized operators
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_kinematics() {
    let v: Velocity = 100.0_f64.meter() / 20.0_f64.second();
    assert_eq!(v.meter_per_second(), 5.0);

    let a: Acceleration = v / 2.0_f64.second();
    assert_eq!(a.value(), 2.5);

    let j: Jerk = a / 0.5_f64.second();
    assert_eq!(j.value(), 5.0);

    let d: Length = v * 3.0_f64.second();
    assert_eq!(d.meter(), 15.0);
}

#[test]
fn test_square_root_and_powers() {
    let side = 3.0_f64.meter();
    let area: Area = side.squared();
    assert_eq!(area.square_meter(), 9.0);

    let back: Length = area.sqrt();
    assert_eq!(back.meter(), 3.0);

    let volume: Volume = side.cubed();
    assert_eq!(volume.cubic_meter(), 27.0);

    let specific: SpecificEnergy = 4.0_f64.meter_per_second().squared();
    let speed: Velocity = specific.sqrt();
    assert_eq!(speed.meter_per_second(), 4.0);
}

#[test]
fn test_inverse() {
    let f: Frequency = 1.0 / 0.5_f64.second();
    assert_eq!(f.hertz(), 2.0);

    let t: Time = 1.0 / f;
    assert_eq!(t.second(), 0.5);

    let g: ElectricConductance = 1.0 / 4.0_f64.ohm();
    assert_eq!(g.siemens(), 0.25);
}

#[test]
fn test_mass_times_specific_energy_is_energy() {
    let m = 2.0_f64.kilogram();
    let c2: SpecificEnergy = 3.0_f64.meter_per_second().squared();

    let e: Energy = m * c2;
    assert_eq!(e.joule(), 18.0);

    // Torque shares the dimensions and is only reachable by name.
    let tau: Torque = m.times_torque(c2);
    assert_eq!(tau.newton_meter(), 18.0);

    let e: Energy = c2 * m;
    assert_eq!(e.joule(), 18.0);
}

#[test]
fn test_force_and_length_pick_receiver_preference() {
    let f = 10.0_f64.newton();
    let r = 0.25_f64.meter();

    let tau: Torque = f * r;
    let w: Energy = r * f;
    assert_eq!(tau.newton_meter(), 2.5);
    assert_eq!(w.joule(), 2.5);

    let w: Energy = f.times_energy(r);
    let tau: Torque = r.times_torque(f);
    assert_eq!(w.joule(), tau.newton_meter());
}

#[test]
fn test_power_paths() {
    let p = 100.0_f64.watt();
    let e: Energy = p * 60.0_f64.second();
    assert_eq!(e.kilojoule(), 6.0);

    let e: Energy = p / 2.0_f64.hertz();
    assert_eq!(e.joule(), 50.0);
    let tau: Torque = p.div_torque(2.0_f64.hertz());
    assert_eq!(tau.newton_meter(), 50.0);

    let back: Power = e / 0.5_f64.second();
    assert_eq!(back.watt(), 100.0);
}

#[test]
fn test_electromagnetism() {
    let i = 2.0_f64.ampere();
    let r = 5.0_f64.ohm();
    let u: ElectricPotential = i * r;
    assert_eq!(u.volt(), 10.0);

    let q: Charge = i * 3.0_f64.second();
    let w: Energy = q * u;
    assert_eq!(w.joule(), 60.0);

    let c: ElectricCapacitance = q / u;
    assert_eq!(c.farad(), 0.6);

    let phi: MagneticFlux = 0.2_f64.tesla() * 2.0_f64.square_meter();
    assert_abs_diff_eq!(phi.weber(), 0.4, epsilon = 1e-12);
}

#[test]
fn test_pressure_and_volume() {
    let w: Energy = 2.0_f64.pascal() * 3.0_f64.cubic_meter();
    assert_eq!(w.joule(), 6.0);
    let p: Pressure = 10.0_f64.newton() / 2.0_f64.square_meter();
    assert_eq!(p.pascal(), 5.0);
}

#[test]
fn test_unitless_results() {
    let ratio: Unitless = 6.0_f64.meter() / 3.0_f64.meter();
    assert_eq!(ratio.value(), 2.0);

    let scaled: Length = ratio * 3.0_f64.meter();
    assert_eq!(scaled.meter(), 6.0);
    let scaled: Length = 3.0_f64.meter() * ratio;
    assert_eq!(scaled.meter(), 6.0);

    let cycles: Unitless = 2.0_f64.hertz() * 3.0_f64.second();
    assert_eq!(cycles.value(), 6.0);
}

#[test]
fn test_angular() {
    let w: AngularVelocity = 90.0_f64.degree() / 1.0_f64.second();
    assert_abs_diff_eq!(w.degree_per_second(), 90.0, epsilon = 1e-9);
    let turned: Angle = w * 2.0_f64.second();
    assert_abs_diff_eq!(turned.degree(), 180.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-kind helpers and traits
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_kind_arithmetic() {
    let mut d = 1.0_f64.meter() + 2.0_f64.meter();
    assert_eq!(d.meter(), 3.0);
    d -= 0.5_f64.meter();
    d += 1.0_f64.meter();
    assert_eq!(d.meter(), 3.5);
    assert_eq!((-d).meter(), -3.5);
    assert_eq!((d * 2.0).meter(), 7.0);
    assert_eq!((2.0 * d).meter(), 7.0);
    assert_eq!((d / 2.0).meter(), 1.75);
}

#[test]
fn test_rounding_helpers() {
    let d = Length::new(-2.5);
    assert_eq!(d.ceil().value(), -2.0);
    assert_eq!(d.floor().value(), -3.0);
    assert_eq!(d.truncate().value(), -2.0);
    assert_eq!(d.round().value(), -2.0);
    assert_eq!(d.abs().value(), 2.5);
    assert_eq!(Length::new(3.5).round().value(), 4.0);
}

#[test]
fn test_min_max_cut_range_map() {
    let a = Length::new(1.0);
    let b = Length::new(2.0);
    assert_eq!(a.min(b), a);
    assert_eq!(a.max(b), b);
    assert!(Length::new(f64::NAN).min(a).value().is_nan());
    assert!(Length::new(0.0).min(Length::new(-0.0)).value().is_sign_negative());

    let inputs = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
    let expected = [-3.0, -2.0, -2.0, 2.0, 2.0, 2.0, 3.0];
    for (input, want) in inputs.iter().zip(expected) {
        assert_eq!(Angle::new(*input).cut_range(-2.0, 2.0).value(), want);
    }

    assert_abs_diff_eq!(Angle::new(0.0).map(-1.0, 1.0, -2.0, 2.0).value(), 0.0);
    assert_abs_diff_eq!(
        Angle::new(0.1).map(-1.0, 1.0, -2.0, 2.0).value(),
        0.2,
        epsilon = 1e-10
    );
}

#[test]
fn test_ordering() {
    assert!(1.0_f64.meter() < 1.0_f64.kilometer());
    assert!(2.0_f64.hour() > 100.0_f64.minute());
    assert_eq!(
        Length::new(f64::NAN).partial_cmp(&Length::new(1.0)),
        None
    );
}

#[test]
fn test_display_uses_canonical_unit() {
    assert_eq!(1.5_f64.kilometer().to_string(), "1500 meter");
    assert_eq!(format!("{:.2}", 1.0_f64.foot()), "0.30 meter");
    assert_eq!(Torque::new(2.0).to_string(), "2 newton_meter");
    assert_eq!(Unitless::new(0.5).to_string(), "0.5 ratio");
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime interop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_from_quantity() {
    let q = Quantity::new(Dimensions::MASS + Dimensions::LENGTH * 2.0 - Dimensions::TIME * 2.0, 4.0);
    assert_eq!(Energy::from_quantity(q).unwrap().joule(), 4.0);
    assert_eq!(Torque::try_from(q).unwrap().newton_meter(), 4.0);
    assert_eq!(q.to_kind::<Energy>().unwrap(), Energy::new(4.0));

    let err = Length::from_quantity(q).unwrap_err();
    assert_eq!(err.operation, Operation::Convert("Length"));
    assert_eq!(err.lhs, q.dimensions());
    assert_eq!(err.rhs, Length::DIMENSIONS);
}

#[test]
fn test_into_quantity_and_back() {
    let f = 3.0_f64.newton();
    let q: Quantity = f.into();
    assert_eq!(q.dimensions(), Force::DIMENSIONS);

    let w = q * Quantity::from(2.0_f64.meter());
    assert_eq!(Energy::from_quantity(w).unwrap().joule(), 6.0);
    assert!(q.checked_add(Quantity::from(1.0_f64.meter())).is_err());
}

#[test]
fn test_kinds_table() {
    assert_eq!(KINDS.len(), 30);
    let length = KINDS.iter().find(|k| k.name == "Length").unwrap();
    assert_eq!(length.dimensions, Dimensions::LENGTH);
    assert_eq!(length.canonical_unit(), Some("meter"));
    assert_eq!(length.ratio("mile"), Some(1609.344));

    let names: Vec<_> = find_kinds(Energy::DIMENSIONS).map(|k| k.name).collect();
    assert_eq!(names, ["Energy", "Torque"]);

    for kind in KINDS {
        assert_eq!(find_kinds(kind.dimensions).filter(|k| k.name == kind.name).count(), 1);
    }
}

#[test]
fn test_kind_trait() {
    assert_eq!(<Velocity as Kind>::NAME, "Velocity");
    assert_eq!(<Velocity as Kind>::DIMENSIONS, Dimensions::LENGTH - Dimensions::TIME);
    let v = <Velocity as Kind>::from_value(3.0);
    assert_eq!(v.into_quantity().value(), 3.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_is_transparent() {
    let json = serde_json::to_string(&Length::new(2.5)).unwrap();
    assert_eq!(json, "2.5");
    let back: Length = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Length::new(2.5));
}

proptest! {
    #[test]
    fn prop_sqrt_of_square_is_abs(x in -1e6f64..1e6) {
        let back: Length = Length::new(x).squared().sqrt();
        prop_assert!((back.value() - x.abs()).abs() <= 1e-9 * x.abs().max(1.0));
    }

    #[test]
    fn prop_division_by_self_is_one(x in 1e-3f64..1e6) {
        let ratio: Unitless = Energy::new(x) / Energy::new(x);
        prop_assert_eq!(ratio.value(), 1.0);
    }
}
