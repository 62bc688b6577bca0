//! Runtime quantities: combine values whose kind is only known at runtime, then recover a typed kind.

use qdim::{find_kinds, Dimensions, Energy, Length, Quantity};

fn main() {
    let force = Quantity::new(Dimensions::MASS + Dimensions::LENGTH - Dimensions::TIME * 2.0, 3.0);
    let distance = Quantity::from(Length::new(2.0));
    let product = force * distance;

    let names: Vec<_> = find_kinds(product.dimensions()).map(|k| k.name).collect();
    assert_eq!(names, ["Energy", "Torque"]);

    let energy = Energy::from_quantity(product).expect("product has energy dimensions");
    assert_eq!(energy.joule(), 6.0);

    let err = force.checked_add(distance).unwrap_err();
    println!("{err}");
}
