//! Catalog fixtures shared by the engine tests.

use crate::{
    catalog::{Battery, Catalog, Inverter, Panel},
    quantity::{Cost, KilowattHours, Kilowatts, Watts},
};

pub fn panel(model: &str, wattage: u64, price: f64) -> Panel {
    Panel::builder()
        .model(model)
        .wattage(Watts(wattage))
        .unit_price(Cost::from_naira(price))
        .build()
}

pub fn inverter(model: &str, rating: f64, price: f64) -> Inverter {
    Inverter::builder()
        .model(model)
        .rating(Kilowatts(rating))
        .unit_price(Cost::from_naira(price))
        .build()
}

pub fn battery(model: &str, usable_capacity: f64, price: f64) -> Battery {
    Battery::builder()
        .model(model)
        .usable_capacity(KilowattHours(usable_capacity))
        .unit_price(Cost::from_naira(price))
        .build()
}

/// Rating check without any tolerance.
#[expect(clippy::cast_precision_loss)]
pub fn rating_covers_exactly(rating: Kilowatts, power: Watts) -> bool {
    rating.0 * 1000.0 >= power.0 as f64
}

/// Reference catalog: the 400 W panel and the 1.2 kWh battery both cost 5030.82 ₦.
pub fn fixture_catalog() -> Catalog {
    Catalog::try_new(
        vec![panel("JKM400M-54HL4", 400, 5030.82), panel("CS3K-330", 330, 4100.0)],
        vec![
            inverter("SUN-3K-SG04", 3.0, 480_000.0),
            inverter("SUN-5K-SG04", 5.0, 650_000.10),
            inverter("SUN-8K-SG01", 8.0, 1_150_000.0),
            inverter("SUN-10K-SG04", 10.0, 1_480_000.0),
        ],
        vec![battery("LV-1000", 1.0, 4200.0), battery("LV-1200", 1.2, 5030.82)],
    )
    .expect("the fixture catalog should be valid")
}
