//! Standard menu, served when the API has no menu to offer

use kababhut_domain::MenuItem;

/// (id, name, description, image file, category)
const DISHES: [(&str, &str, &str, &str, &str); 20] = [
    (
        "m1",
        "Chicken Biryani",
        "Aromatic rice layered with spiced chicken.",
        "Chicken Biryani.jpg",
        "biryani",
    ),
    (
        "m2",
        "Beef Karhai",
        "Wok-style beef with tomatoes and spices.",
        "Beef Karhai.jpg",
        "curries",
    ),
    (
        "m3",
        "Beef Biryani",
        "Fragrant rice with tender beef and aromatic spices.",
        "Beef Biryani.jpg",
        "biryani",
    ),
    (
        "m4",
        "Chicken Karhai",
        "Tender chicken cooked in a traditional wok with peppers and onions.",
        "Chicken Karhai.jpg",
        "curries",
    ),
    (
        "m5",
        "Tandoori Chicken",
        "Marinated chicken grilled in traditional clay oven.",
        "Tandoori Chicken.jpg",
        "grilled",
    ),
    (
        "m6",
        "Chicken Seekh Kabab",
        "Ground chicken mixed with spices and grilled on skewer.",
        "Chicken Seekh Kabab.jpg",
        "grilled",
    ),
    (
        "m7",
        "Beef Seekh Kabab",
        "Spiced ground beef kabab grilled to perfection.",
        "Beef Seekh Kabab.jpg",
        "grilled",
    ),
    (
        "m8",
        "Chicken Tikka",
        "Marinated chicken pieces cooked in tandoor.",
        "Chicken Tikka.jpg",
        "grilled",
    ),
    (
        "m9",
        "Paneer Tikka",
        "Indian cheese cubes marinated and grilled.",
        "Paneer Tikka.jpg",
        "vegetarian",
    ),
    (
        "m10",
        "Beef Nihari",
        "Slow-cooked beef in rich, aromatic gravy.",
        "Beef Nihari.jpg",
        "curries",
    ),
    (
        "m11",
        "Mutton Karhai",
        "Tender mutton cooked in traditional wok style.",
        "Mutton Karhai.jpg",
        "curries",
    ),
    (
        "m12",
        "Chicken Biryani",
        "Fragrant basmati rice with tender chicken.",
        "Chicken Achari.jpg",
        "curries",
    ),
    (
        "m13",
        "Samosa",
        "Crispy pastry filled with spiced potatoes and peas.",
        "Samosa.jpg",
        "appetizers",
    ),
    (
        "m14",
        "Spring Rolls",
        "Crispy spring rolls with vegetable filling.",
        "Spring Rolls.jpg",
        "appetizers",
    ),
    (
        "m15",
        "Pani Puri Shots",
        "Traditional street food snack in convenient shots.",
        "Pani Puri Shots.png",
        "appetizers",
    ),
    (
        "m16",
        "Chicken 65",
        "Spicy fried chicken pieces with curry leaves.",
        "Chicken 65.jpg",
        "appetizers",
    ),
    (
        "m17",
        "Gulab Jamun",
        "Sweet milk solids dumplings in sugar syrup.",
        "Gulab Jamun.jpg",
        "desserts",
    ),
    (
        "m18",
        "Gajar Halwa",
        "Sweet carrot pudding with nuts and dates.",
        "Gajar Halwa.jpg",
        "desserts",
    ),
    (
        "m19",
        "Kheer",
        "Traditional rice pudding with condensed milk and nuts.",
        "Kheer.png",
        "desserts",
    ),
    (
        "m20",
        "Sheer Khurma",
        "Vermicelli dessert with milk and dried fruits.",
        "sheer khurma.png",
        "desserts",
    ),
];

const IMAGE_ROOT: &str = "/images/menu/";

/// Every dish, unpriced ("contact for pricing")
pub(super) fn standard_menu() -> Vec<MenuItem> {
    DISHES
        .iter()
        .map(|(id, name, description, image, category)| {
            MenuItem::new(*id, *name)
                .with_description(*description)
                .with_category(*category)
                .with_image(format!("{}{}", IMAGE_ROOT, image))
        })
        .collect()
}
