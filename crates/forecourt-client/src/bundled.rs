// SPDX-License-Identifier: Apache-2.0

use forecourt_model::{CatalogEnvelope, CatalogItem};

const BUNDLED_VERSION: &str = "bundled";

struct BundledCar {
    id: &'static str,
    category: &'static str,
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    badge: Option<&'static str>,
    image: &'static str,
    image_alt: &'static str,
}

const BUNDLED_FLEET: [BundledCar; 6] = [
    BundledCar {
        id: "economy-1",
        category: "Economy",
        name: "Dacia Logan or similar",
        price: "250",
        features: &["Air conditioning", "Unlimited mileage", "Insurance included"],
        badge: Some("Popular"),
        image: "images/car-economy-1.webp",
        image_alt: "Economy sedan available to rent",
    },
    BundledCar {
        id: "economy-2",
        category: "Economy",
        name: "Renault Clio or similar",
        price: "300",
        features: &["Air conditioning", "Bluetooth", "Low fuel consumption"],
        badge: None,
        image: "images/car-economy-2.webp",
        image_alt: "Compact city car available to rent",
    },
    BundledCar {
        id: "suv-1",
        category: "SUV",
        name: "Duster or similar",
        price: "400",
        features: &["7 seats available", "Large boot", "Ideal for families"],
        badge: Some("Family"),
        image: "images/car-suv-1.webp",
        image_alt: "Spacious family SUV available to rent",
    },
    BundledCar {
        id: "suv-2",
        category: "SUV",
        name: "Hyundai Tucson or similar",
        price: "550",
        features: &["Premium comfort", "Built-in GPS", "Reversing camera"],
        badge: None,
        image: "images/car-suv-2.webp",
        image_alt: "Premium SUV available to rent",
    },
    BundledCar {
        id: "luxury-1",
        category: "Luxury",
        name: "Mercedes C-Class or similar",
        price: "900",
        features: &["Leather interior", "Premium audio", "Maximum comfort"],
        badge: Some("Premium"),
        image: "images/car-luxury-1.webp",
        image_alt: "Luxury Mercedes sedan available to rent",
    },
    BundledCar {
        id: "luxury-2",
        category: "Luxury",
        name: "BMW 3 Series or similar",
        price: "1100",
        features: &["Sporty and elegant", "Sunroof", "Advanced navigation"],
        badge: Some("VIP"),
        image: "images/car-luxury-2.webp",
        image_alt: "BMW 3 Series available to rent",
    },
];

/// The statically bundled fleet. Shipped inside the client artifact, same
/// shape as the published envelope, served whenever the remote document
/// cannot be. Every item is active and carries a local image path, never a
/// remote asset id.
#[must_use]
pub fn default_dataset() -> CatalogEnvelope {
    let cars = BUNDLED_FLEET
        .iter()
        .map(|car| CatalogItem {
            id: car.id.to_string(),
            category: car.category.to_string(),
            name: car.name.to_string(),
            price: car.price.to_string(),
            unit: "MAD/day".to_string(),
            features: car.features.iter().map(ToString::to_string).collect(),
            badge: car.badge.map(ToString::to_string),
            image_public_id: None,
            image: Some(car.image.to_string()),
            image_alt: car.image_alt.to_string(),
            active: true,
        })
        .collect();
    CatalogEnvelope::new(BUNDLED_VERSION.to_string(), BUNDLED_VERSION.to_string(), cars)
}
