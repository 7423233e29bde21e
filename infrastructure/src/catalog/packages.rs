//! Preset catering packages

use kababhut_domain::{CateringPackage, PackageSection};

const PRICE_NOTE: &str = "Contact for pricing";

pub(super) fn presets() -> Vec<CateringPackage> {
    vec![
        CateringPackage::preset(
            "pkg-classic",
            "Classic Dawat",
            PRICE_NOTE,
            vec![
                PackageSection::new("Appetizers", &["Samosa", "Spring Rolls"]),
                PackageSection::new("Main Course", &["Chicken Biryani", "Chicken Karhai"]),
                PackageSection::new("Regular Dessert", &["Kheer"]),
            ],
        ),
        CateringPackage::preset(
            "pkg-grill",
            "Grill Feast",
            PRICE_NOTE,
            vec![
                PackageSection::new("Appetizers", &["Chicken 65", "Pani Puri Shots"]),
                PackageSection::new(
                    "Main Course",
                    &[
                        "Tandoori Chicken",
                        "Chicken Seekh Kabab",
                        "Beef Seekh Kabab",
                        "Chicken Tikka",
                    ],
                ),
                PackageSection::new("Regular Dessert", &["Gulab Jamun"]),
            ],
        ),
        CateringPackage::preset(
            "pkg-royal",
            "Royal Wedding",
            PRICE_NOTE,
            vec![
                PackageSection::new(
                    "Appetizers",
                    &["Samosa", "Chicken 65", "Pani Puri Shots"],
                ),
                PackageSection::new(
                    "Main Course",
                    &["Beef Biryani", "Mutton Karhai", "Beef Nihari", "Tandoori Chicken"],
                ),
                PackageSection::new("Regular Dessert", &["Gulab Jamun", "Kheer"]),
                PackageSection::new("Premium Dessert", &["Gajar Halwa", "Sheer Khurma"]),
            ],
        ),
        CateringPackage::preset(
            "pkg-veg",
            "Vegetarian Mela",
            PRICE_NOTE,
            vec![
                PackageSection::new("Appetizers", &["Samosa", "Spring Rolls", "Pani Puri Shots"]),
                PackageSection::new("Main Course", &["Paneer Tikka"]),
                PackageSection::new("Regular Dessert", &["Kheer"]),
                PackageSection::new("Premium Dessert", &["Gajar Halwa"]),
            ],
        ),
    ]
}
