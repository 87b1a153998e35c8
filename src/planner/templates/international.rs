use crate::planner::branch::{AsianStyle, BranchId};
use crate::planner::templates::{day, slot, BranchTemplate};

pub static ITALIAN: BranchTemplate = BranchTemplate {
    branch: BranchId::Italian,
    days: [
        // Monday
        day(
            slot(15, |r| {
                if r.is_keto() {
                    r.if_vegan("Tofu Scramble with Herbs", "Italian Frittata").to_string()
                } else {
                    r.dairy("Cappuccino with Cornetto", "Espresso with Cornetto")
                }
            }),
            slot(25, |r| {
                let pasta = r.grain("Pasta", "Gluten-Free Pasta", "Zucchini Noodles");
                r.keto_protein(
                    &format!("{pasta} Primavera"),
                    &format!("Chicken Alfredo {pasta}"),
                    "Caprese Salad with Mozzarella",
                    "Chicken Parmigiana with Greens",
                )
            }),
            slot(35, |r| {
                r.keto_protein(
                    "Margherita Pizza",
                    "Spaghetti Bolognese",
                    "Melanzane alla Parmigiana",
                    "Osso Buco",
                )
            }),
        ),
        // Tuesday
        day(
            slot(5, |_| "Chia Pudding with Berries".to_string()),
            slot(30, |r| r.protein("Minestrone Soup", "Chicken Cacciatore")),
            slot(40, |r| {
                r.keto_protein(
                    "Risotto with Mushrooms",
                    "Veal Marsala",
                    "Mushroom Cauliflower Risotto",
                    "Veal Marsala with Greens",
                )
            }),
        ),
        // Wednesday
        day(
            slot(5, |r| {
                r.if_gluten_free("Espresso with Almond Amaretti", "Espresso with Biscotti")
                    .to_string()
            }),
            slot(10, |r| r.dish("Caesar Salad with Parmesan")),
            slot(25, |r| {
                let pasta = r.grain("Pasta", "Gluten-Free Pasta", "Zucchini Noodles");
                r.protein(
                    &format!("{pasta} Arrabbiata"),
                    &format!("Seafood {pasta}"),
                )
            }),
        ),
        // Thursday
        day(
            slot(10, |r| r.dish(&format!("Ricotta on {} with Honey", r.bread("Toast")))),
            slot(20, |r| r.protein("Panzanella with White Beans", "Tuscan Chicken Salad")),
            slot(35, |r| {
                r.keto_protein(
                    &format!("Spinach Ravioli with Sage {}", r.dairy("Butter", "Olive Oil")),
                    &format!(
                        "Chicken Piccata with {}",
                        r.grain("Linguine", "Polenta", "Sauteed Spinach")
                    ),
                    "Stuffed Portobello Mushrooms",
                    "Chicken Piccata with Sauteed Spinach",
                )
            }),
        ),
        // Friday
        day(
            slot(10, |r| {
                r.keto_protein(
                    "Focaccia with Tomatoes",
                    "Focaccia with Prosciutto",
                    "Melon with Mint",
                    "Prosciutto and Melon",
                )
            }),
            slot(25, |r| r.dish(&format!("Mozzarella and Tomato {}", r.bread("Panini")))),
            slot(40, |r| {
                r.keto_protein(
                    "Vegetable Lasagna",
                    "Beef Lasagna",
                    "Zucchini Lasagna",
                    "Beef Braciole",
                )
            }),
        ),
        // Saturday
        day(
            slot(15, |r| r.dish(&format!("Bruschetta on {} with Ricotta", r.bread("Ciabatta")))),
            slot(30, |r| r.protein("Pasta e Fagioli", "Italian Wedding Soup")),
            slot(35, |r| {
                r.keto_protein(
                    "Gnocchi al Pomodoro",
                    "Shrimp Scampi",
                    "Cauliflower Gnocchi al Pomodoro",
                    "Shrimp Scampi with Zucchini Noodles",
                )
            }),
        ),
        // Sunday
        day(
            slot(15, |r| r.dairy("Cappuccino with Sfogliatella", "Espresso with Fruit")),
            slot(30, |r| {
                r.protein(
                    "Antipasto Salad with Marinated Vegetables",
                    "Antipasto Salad with Salami",
                )
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Vegetable Cannelloni",
                    "Chicken Marsala with Polenta",
                    "Stuffed Zucchini Boats",
                    "Chicken Marsala with Green Beans",
                )
            }),
        ),
    ],
};

pub static MEXICAN: BranchTemplate = BranchTemplate {
    branch: BranchId::Mexican,
    days: [
        // Monday
        day(
            slot(15, |r| {
                r.if_vegan(
                    "Tofu Rancheros",
                    r.if_keto("Mexican Scrambled Eggs", "Huevos Rancheros"),
                )
                .to_string()
            }),
            slot(20, |r| {
                r.keto_protein(
                    "Black Bean Burrito",
                    "Chicken Burrito",
                    "Burrito Bowl with Cauliflower Rice",
                    "Chicken Fajita Bowl",
                )
            }),
            slot(25, |r| {
                r.keto_protein(
                    "Vegetable Enchiladas",
                    "Beef Tacos",
                    "Vegetable Taco Salad",
                    "Carne Asada Salad",
                )
            }),
        ),
        // Tuesday
        day(
            slot(8, |_| "Mexican Smoothie Bowl".to_string()),
            slot(25, |r| r.protein("Quinoa Stuffed Peppers", "Chicken Quesadilla")),
            slot(30, |r| r.dish("Chiles Rellenos with Cheese")),
        ),
        // Wednesday
        day(
            slot(20, |r| r.protein("Chilaquiles Verdes", "Chilaquiles with Shredded Chicken")),
            slot(35, |r| r.protein("Vegetable Pozole", "Pozole Rojo")),
            slot(40, |r| r.protein("Vegetable Tamales", "Fish Tacos")),
        ),
        // Thursday
        day(
            slot(10, |r| {
                r.if_vegan("Potato and Pepper Breakfast Tacos", "Breakfast Tacos with Eggs")
                    .to_string()
            }),
            slot(20, |r| {
                r.keto_protein(
                    "Tortilla Soup",
                    "Chicken Tortilla Soup",
                    "Avocado Cucumber Salad",
                    "Chicken Tortilla Soup without Chips",
                )
            }),
            slot(30, |r| {
                r.keto_protein(
                    "Sweet Potato Enchiladas",
                    "Chicken Mole with Rice",
                    "Stuffed Poblano Peppers",
                    "Chicken Mole with Cauliflower Rice",
                )
            }),
        ),
        // Friday
        day(
            slot(10, |_| "Mango Chia Pudding".to_string()),
            slot(25, |r| r.protein("Vegetable Tostadas", "Shrimp Tostadas")),
            slot(35, |r| {
                r.keto_protein(
                    "Black Bean Enchiladas",
                    "Pork Carnitas with Rice and Beans",
                    "Cauliflower Rice Burrito Bowl",
                    "Pork Carnitas Lettuce Wraps",
                )
            }),
        ),
        // Saturday
        day(
            slot(15, |r| r.dish(&format!("Molletes on {} with Cheese", r.bread("Bolillo")))),
            slot(25, |r| r.protein("Elote Salad with Black Beans", "Steak Fajitas")),
            slot(40, |r| {
                r.keto_protein(
                    "Vegetable Fajitas",
                    "Birria Tacos",
                    "Portobello Fajita Bowl",
                    "Birria Consomme Bowl",
                )
            }),
        ),
        // Sunday
        day(
            slot(20, |r| r.if_vegan("Tofu Migas", "Migas with Eggs").to_string()),
            slot(30, |r| r.protein("Bean and Cheese Quesadillas", "Chicken Quesadillas")),
            slot(35, |r| {
                r.keto_protein(
                    "Roasted Vegetable Tacos",
                    "Baja Fish Tacos",
                    "Grilled Vegetable Taco Salad",
                    "Grilled Fish Taco Salad",
                )
            }),
        ),
    ],
};

pub static JAPANESE: BranchTemplate = BranchTemplate {
    branch: BranchId::EastAsian(AsianStyle::Japanese),
    days: [
        // Monday
        day(
            slot(15, |r| r.if_keto("Miso Soup with Tofu", "Miso Soup with Rice").to_string()),
            slot(25, |r| {
                r.keto_protein(
                    "Vegetable Sushi Bowl",
                    "Chicken Teriyaki",
                    "Tofu Poke Bowl with Cauliflower Rice",
                    "Chicken Teriyaki with Greens",
                )
            }),
            slot(30, |r| r.protein("Vegetable Ramen", "Salmon Teriyaki")),
        ),
        // Tuesday
        day(
            slot(12, |_| "Japanese Pancakes".to_string()),
            slot(20, |r| r.protein("Vegetable Bento", "Chicken Katsu")),
            slot(35, |_| "Miso Glazed Aubergine".to_string()),
        ),
        // Wednesday
        day(
            slot(5, |_| "Green Tea with Rice Cakes".to_string()),
            slot(18, |r| r.protein("Vegetable Gyoza", "Pork Gyoza")),
            slot(40, |r| r.protein("Vegetable Tempura", "Beef Sukiyaki")),
        ),
        // Thursday
        day(
            slot(10, |r| r.if_vegan("Natto Rice with Pickles", "Tamagoyaki with Rice").to_string()),
            slot(25, |r| {
                let noodles = r.grain("Soba Noodles", "Rice Noodles", "Shirataki Noodles");
                r.protein(
                    &format!("Cold {noodles} with Tofu"),
                    &format!("Cold {noodles} with Shrimp Tempura"),
                )
            }),
            slot(30, |r| {
                r.keto_protein(
                    "Vegetable Curry Rice",
                    "Chicken Katsu Curry",
                    "Tofu Steak with Greens",
                    "Teriyaki Beef with Greens",
                )
            }),
        ),
        // Friday
        day(
            slot(10, |_| "Onigiri with Seaweed Salad".to_string()),
            slot(25, |r| r.protein("Inari Sushi", "Salmon Nigiri Set")),
            slot(35, |r| {
                r.keto_protein(
                    "Vegetable Yakisoba",
                    "Beef Yakisoba",
                    "Tofu Teppanyaki",
                    "Beef Teppanyaki",
                )
            }),
        ),
        // Saturday
        day(
            slot(15, |r| r.if_vegan("Tofu Miso Scramble", "Japanese Rolled Omelet").to_string()),
            slot(30, |r| r.protein("Okonomiyaki with Cabbage", "Pork Okonomiyaki")),
            slot(40, |r| r.protein("Vegetable Shabu-Shabu", "Beef Shabu-Shabu")),
        ),
        // Sunday
        day(
            slot(10, |_| "Matcha Smoothie Bowl".to_string()),
            slot(25, |r| {
                r.keto_protein(
                    "Avocado and Cucumber Maki",
                    "Spicy Tuna Maki",
                    "Tofu Sashimi Salad",
                    "Sashimi Platter",
                )
            }),
            slot(35, |r| {
                let noodles = r.grain("Udon", "Rice Noodles", "Shirataki Noodles");
                r.protein(
                    &format!("Mushroom {noodles} Soup"),
                    &format!("Chicken {noodles} Soup"),
                )
            }),
        ),
    ],
};

pub static THAI: BranchTemplate = BranchTemplate {
    branch: BranchId::EastAsian(AsianStyle::Thai),
    days: [
        // Monday
        day(
            slot(15, |r| {
                r.if_keto("Thai Coconut Chia Pudding", "Thai Coconut Porridge")
                    .to_string()
            }),
            slot(25, |r| r.protein("Pad Thai with Tofu", "Thai Basil Chicken")),
            slot(30, |r| r.protein("Green Curry with Vegetables", "Thai Fish Curry")),
        ),
        // Tuesday
        day(
            slot(12, |_| "Asian Smoothie Bowl".to_string()),
            slot(20, |r| r.protein("Tofu Pad Kra Pao", "Beef Pad See Ew")),
            slot(35, |r| r.protein("Tom Yum Soup with Mushrooms", "Tom Yum Goong")),
        ),
        // Wednesday
        day(
            slot(5, |_| "Green Tea with Rice Cakes".to_string()),
            slot(18, |r| r.protein("Vegetable Spring Rolls", "Chicken Satay")),
            slot(40, |r| r.protein("Massaman Curry with Potatoes", "Massaman Beef Curry")),
        ),
        // Thursday
        day(
            slot(10, |r| {
                r.if_vegan("Khao Tom with Tofu", "Jok Rice Porridge with Egg")
                    .to_string()
            }),
            slot(25, |r| {
                r.keto_protein(
                    "Papaya Salad with Sticky Rice",
                    "Larb Gai with Sticky Rice",
                    "Green Papaya Salad with Tofu",
                    "Larb Gai Lettuce Cups",
                )
            }),
            slot(30, |r| r.protein("Red Curry with Tofu", "Red Curry with Duck")),
        ),
        // Friday
        day(
            slot(10, |r| r.if_gluten_free("Mango Sticky Rice", "Thai Banana Roti").to_string()),
            slot(25, |r| {
                let noodles = r.grain("Rice Noodles", "Rice Noodles", "Zucchini Noodles");
                r.protein(
                    &format!("Drunken {noodles} with Tofu"),
                    &format!("Drunken {noodles} with Chicken"),
                )
            }),
            slot(35, |r| {
                r.keto_protein(
                    "Panang Curry with Vegetables",
                    "Panang Curry with Beef",
                    "Panang Tofu with Greens",
                    "Panang Beef with Greens",
                )
            }),
        ),
        // Saturday
        day(
            slot(15, |_| "Tropical Fruit Platter with Lime".to_string()),
            slot(20, |r| {
                let rice = r.grain("Fried Rice", "Fried Rice", "Cauliflower Fried Rice");
                r.protein(
                    &format!("Pineapple {rice} with Tofu"),
                    &format!("Pineapple {rice} with Shrimp"),
                )
            }),
            slot(35, |r| r.protein("Tom Kha with Mushrooms", "Tom Kha Gai")),
        ),
        // Sunday
        day(
            slot(10, |_| "Thai Coconut Smoothie".to_string()),
            slot(25, |r| r.protein("Yellow Curry with Tofu", "Yellow Curry with Chicken")),
            slot(40, |r| {
                r.keto_protein(
                    "Stir-Fried Morning Glory with Rice",
                    "Whole Steamed Fish with Lime",
                    "Stir-Fried Morning Glory with Tofu",
                    "Whole Steamed Fish with Greens",
                )
            }),
        ),
    ],
};

// Shared by the Chinese and generic Asian selections.
pub static CHINESE: BranchTemplate = BranchTemplate {
    branch: BranchId::EastAsian(AsianStyle::Chinese),
    days: [
        // Monday
        day(
            slot(15, |r| r.if_keto("Hot and Sour Soup", "Congee with Vegetables").to_string()),
            slot(25, |r| r.protein("Vegetable Fried Rice", "Sweet and Sour Chicken")),
            slot(30, |r| r.protein("Ma Po Tofu", "Kung Pao Chicken")),
        ),
        // Tuesday
        day(
            slot(12, |_| "Asian Smoothie Bowl".to_string()),
            slot(20, |r| r.protein("Tofu Stir Fry", "Beef Stir Fry")),
            slot(35, |r| r.protein("Vegetable Hot Pot", "Lamb Hot Pot")),
        ),
        // Wednesday
        day(
            slot(5, |_| "Green Tea with Rice Cakes".to_string()),
            slot(18, |r| r.protein("Vegetable Spring Rolls", "Chicken Satay")),
            slot(40, |r| r.protein("Buddha's Delight", "Peking Duck")),
        ),
        // Thursday
        day(
            slot(10, |r| {
                r.if_gluten_free("Rice Noodle Soup", "Steamed Vegetable Buns")
                    .to_string()
            }),
            slot(25, |r| {
                let noodles = r.grain("Lo Mein", "Rice Noodles", "Zucchini Noodles");
                r.protein(
                    &format!("Vegetable {noodles}"),
                    &format!("Shrimp {noodles}"),
                )
            }),
            slot(30, |r| {
                r.keto_protein(
                    "Yu Xiang Aubergine with Rice",
                    "Char Siu Pork with Rice",
                    "Yu Xiang Aubergine",
                    "Char Siu Pork with Bok Choy",
                )
            }),
        ),
        // Friday
        day(
            slot(10, |r| {
                r.if_vegan("Soy Milk with Scallion Pancake", "Scallion Pancake with Egg")
                    .to_string()
            }),
            slot(25, |r| r.protein("Dan Dan Noodles with Tofu", "Dan Dan Noodles with Pork")),
            slot(35, |r| {
                r.keto_protein(
                    "General Tso's Tofu with Rice",
                    "Orange Chicken with Rice",
                    "Salt and Pepper Tofu",
                    "Salt and Pepper Squid",
                )
            }),
        ),
        // Saturday
        day(
            slot(15, |r| r.protein("Steamed Vegetable Dumplings", "Pork Soup Dumplings")),
            slot(25, |r| r.protein("Vegetable Wonton Soup", "Shrimp Wonton Soup")),
            slot(40, |r| {
                r.keto_protein(
                    "Braised Tofu with Mushrooms",
                    "Red Braised Pork Belly",
                    "Braised Tofu with Greens",
                    "Red Braised Pork Belly with Greens",
                )
            }),
        ),
        // Sunday
        day(
            slot(10, |r| {
                r.if_gluten_free("Rice Congee with Pickles", "Youtiao with Soy Milk")
                    .to_string()
            }),
            slot(30, |r| r.protein("Vegetable Chow Fun", "Beef Chow Fun")),
            slot(35, |r| r.protein("Sesame Tofu with Broccoli", "Beef and Broccoli")),
        ),
    ],
};

pub static MEDITERRANEAN: BranchTemplate = BranchTemplate {
    branch: BranchId::Mediterranean,
    days: [
        // Monday
        day(
            slot(5, |r| {
                r.dairy(
                    "Greek Yogurt with Honey and Nuts",
                    "Chia Pudding with Dates and Nuts",
                )
            }),
            slot(15, |r| r.protein("Mediterranean Quinoa Bowl", "Grilled Chicken Greek Salad")),
            slot(30, |r| r.protein("Stuffed Bell Peppers", "Grilled Fish with Lemon")),
        ),
        // Tuesday
        day(
            slot(10, |r| {
                r.if_vegan("Chickpea Flour Omelet with Herbs", "Mediterranean Omelet")
                    .to_string()
            }),
            slot(8, |r| format!("Hummus with {} and Vegetables", r.bread("Pita"))),
            slot(35, |r| r.protein("Ratatouille", "Lamb Souvlaki")),
        ),
        // Wednesday
        day(
            slot(12, |r| r.dish("Feta and Spinach Scramble")),
            slot(10, |r| r.if_gluten_free("Quinoa Tabbouleh Salad", "Tabbouleh Salad").to_string()),
            slot(45, |r| r.protein("Vegetarian Moussaka", "Seafood Paella")),
        ),
        // Thursday
        day(
            slot(10, |r| r.if_vegan("Chickpea Shakshuka", "Shakshuka").to_string()),
            slot(20, |r| r.protein("Falafel Bowl with Tahini", "Chicken Shawarma Bowl")),
            slot(35, |r| {
                r.keto_protein(
                    "Spanakopita with Greek Salad",
                    "Grilled Sea Bass with Orzo",
                    "Halloumi and Vegetable Skewers",
                    "Grilled Sea Bass with Greens",
                )
            }),
        ),
        // Friday
        day(
            slot(5, |r| format!("{} with Olive Oil and Za'atar", r.bread("Pita"))),
            slot(15, |r| r.protein("Lentil Soup with Lemon", "Chicken Avgolemono Soup")),
            slot(40, |r| {
                r.keto_protein(
                    "Stuffed Grape Leaves with Rice",
                    "Lamb Kofta with Couscous",
                    "Stuffed Zucchini with Herbs",
                    "Lamb Kofta with Tzatziki",
                )
            }),
        ),
        // Saturday
        day(
            slot(10, |r| {
                r.dairy(
                    "Labneh with Cucumber and Olives",
                    "Hummus with Cucumber and Olives",
                )
            }),
            slot(20, |r| r.dish("Greek Salad with Feta")),
            slot(35, |r| {
                let grain = r.grain("Orzo", "Quinoa", "Cauliflower Rice");
                r.protein(
                    &format!("Roasted Vegetables with {grain}"),
                    &format!("Shrimp Saganaki with {grain}"),
                )
            }),
        ),
        // Sunday
        day(
            slot(15, |r| r.if_vegan("Fig and Walnut Oat Bowl", "Menemen").to_string()),
            slot(25, |r| {
                r.protein(
                    "Mezze Platter with Falafel",
                    "Mezze Platter with Grilled Chicken",
                )
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Vegetable Tagine with Couscous",
                    "Chicken Tagine with Couscous",
                    "Vegetable Tagine with Cauliflower",
                    "Chicken Tagine with Olives",
                )
            }),
        ),
    ],
};

pub static AMERICAN: BranchTemplate = BranchTemplate {
    branch: BranchId::American,
    days: [
        // Monday
        day(
            slot(10, |r| {
                if r.is_vegan() {
                    r.if_keto("Tofu Scramble with Avocado", "Oatmeal with Berries")
                        .to_string()
                } else {
                    r.if_keto("Keto Scrambled Eggs with Avocado", "Scrambled Eggs with Toast")
                        .to_string()
                }
            }),
            slot(15, |r| {
                r.keto_protein(
                    "Quinoa Buddha Bowl",
                    "Grilled Chicken Salad",
                    "Avocado Salad Bowl with Seeds",
                    "Grilled Chicken Salad",
                )
            }),
            slot(25, |r| {
                r.keto_protein(
                    &format!(
                        "{} Primavera",
                        r.grain("Pasta", "Gluten-Free Pasta", "Zucchini Noodle")
                    ),
                    "Baked Salmon with Sweet Potato",
                    "Zucchini Noodles with Pesto",
                    "Baked Salmon with Asparagus",
                )
            }),
        ),
        // Tuesday
        day(
            slot(5, |r| {
                if r.is_vegan() {
                    "Chia Pudding".to_string()
                } else {
                    r.dairy("Greek Yogurt Parfait", "Coconut Chia Parfait")
                }
            }),
            slot(8, |r| {
                r.protein(
                    &format!("Hummus Vegetable Wrap in {}", r.bread("Whole Wheat Tortilla")),
                    &format!("Turkey Sandwich on {}", r.bread("Whole Wheat Bread")),
                )
            }),
            slot(30, |r| {
                r.resolve_protein(
                    "Vegetable Stir Fry",
                    "Grilled Chicken with Sweet Potato",
                    None,
                    Some("Grilled Chicken with Broccoli"),
                )
            }),
        ),
        // Wednesday
        day(
            slot(8, |_| "Smoothie Bowl".to_string()),
            slot(12, |r| r.protein("Mediterranean Bowl", "Chicken Caesar Salad")),
            slot(20, |r| {
                r.keto_protein(
                    "Black Bean Tacos",
                    "Beef Stir Fry",
                    "Cauliflower Tacos",
                    "Beef Stir Fry with Vegetables",
                )
            }),
        ),
        // Thursday
        day(
            slot(10, |r| format!("Avocado Smash on {}", r.bread("Sourdough Toast"))),
            slot(15, |r| r.protein("Black Bean Soup with Cornbread", "Turkey Chili")),
            slot(30, |r| {
                let bun = r.bread("Whole Wheat Bun");
                r.keto_protein(
                    &format!("Vegetable Burger on {bun}"),
                    &format!("Cheeseburger on {bun}"),
                    "Portobello Burger Lettuce Wrap",
                    "Bunless Burger with Side Salad",
                )
            }),
        ),
        // Friday
        day(
            slot(5, |r| {
                if r.is_keto() {
                    "Chia Seed Pudding with Berries".to_string()
                } else {
                    format!(
                        "Overnight Oats with {} and Berries",
                        r.dairy("Milk", "Almond Milk")
                    )
                }
            }),
            slot(15, |r| r.protein("Grilled Vegetable Panini", "Chicken Club Sandwich")),
            slot(35, |r| {
                r.keto_protein(
                    "Stuffed Sweet Potatoes with Black Beans",
                    "BBQ Chicken with Corn",
                    "Cauliflower Steak with Chimichurri",
                    "BBQ Chicken Thighs with Slaw",
                )
            }),
        ),
        // Saturday
        day(
            slot(20, |r| {
                r.if_keto(
                    "Almond Flour Pancakes with Berries",
                    r.if_gluten_free("Buckwheat Pancakes with Berries", "Pancakes with Berries"),
                )
                .to_string()
            }),
            slot(12, |r| r.protein("Cobb Salad with Chickpeas", "Cobb Salad with Chicken and Bacon")),
            slot(40, |r| {
                r.keto_protein(
                    "Vegetable Pot Pie",
                    "Roast Chicken with Potatoes",
                    "Stuffed Bell Peppers with Cauliflower Rice",
                    "Roast Chicken with Green Beans",
                )
            }),
        ),
        // Sunday
        day(
            slot(15, |r| r.if_vegan("Tofu Breakfast Burrito", "French Toast with Berries").to_string()),
            slot(12, |r| {
                r.dish(&format!(
                    "Tomato Soup with Grilled Cheese on {}",
                    r.bread("Sourdough")
                ))
            }),
            slot(90, |r| r.protein("Roast Vegetable Medley with Wild Rice", "Roast Chicken Dinner")),
        ),
    ],
};
