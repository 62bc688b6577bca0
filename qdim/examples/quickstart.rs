//! Minimal end-to-end example: convert units, compute a velocity and keep energy apart from torque.

use qdim::prelude::*;
use qdim::{Angle, Energy, Length, Time, Torque, Velocity};

fn main() {
    let a: Angle = 180.0_f64.degree();
    assert!((a.radian() - core::f64::consts::PI).abs() < 1e-12);

    let d: Length = 1_000.0_f64.kilometer();
    let t: Time = 100.0_f64.second();
    let v: Velocity = d / t;
    assert!((v.kilometer_per_second() - 10.0).abs() < 1e-12);

    let force = 20.0_f64.newton();
    let arm = 0.5_f64.meter();
    let tau: Torque = force * arm;
    let work: Energy = force.times_energy(arm);
    assert_eq!(tau.newton_meter(), work.joule());
}
