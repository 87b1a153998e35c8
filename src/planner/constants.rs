/// Free-tier generations allowed per weekly period.
pub const DEFAULT_FREE_PLAN_LIMIT: u32 = 3;

/// Calorie estimate when keto is active.
pub const KETO_CALORIE_RANGE: &str = "1600-1800 calories";

/// Calorie estimate for every other restriction set.
pub const STANDARD_CALORIE_RANGE: &str = "1800-2000 calories";

// ─────────────────────────────────────────────────────────────────────────────
// Substitution tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Grain used when paleo is the deciding restriction.
pub const PALEO_GRAIN: &str = "Sweet Potato";

/// Bread replacements, by deciding restriction.
pub const LOW_CARB_BREAD: &str = "Lettuce Wraps";
pub const GLUTEN_FREE_BREAD: &str = "Rice Bread";
pub const PALEO_BREAD: &str = "Sweet Potato Slices";

/// Animal-derived terms and their plant replacements, applied word by word
/// when vegan rules rewrite a vegetarian dish. Longer compounds come first.
pub const VEGAN_REPLACEMENTS: &[(&str, &str)] = &[
    ("buttermilk", "coconut milk"),
    ("paneer", "tofu"),
    ("cheese", "tofu"),
    ("mozzarella", "tofu"),
    ("feta", "tofu"),
    ("halloumi", "tofu"),
    ("ricotta", "cashew ricotta"),
    ("parmesan", "nutritional yeast"),
    ("yogurt", "tofu"),
    ("curd", "coconut curd"),
    ("ghee", "coconut oil"),
    ("butter", "coconut oil"),
    ("cream", "coconut cream"),
    ("milk", "coconut milk"),
    ("egg", "chickpea flour"),
    ("honey", "maple syrup"),
];

/// Protein entries derived from legumes, filtered out under paleo.
pub const LEGUMES: &[&str] = &[
    "dal",
    "chickpeas",
    "rajma",
    "black beans",
    "lentils",
    "tofu",
    "peanuts",
];

// ─────────────────────────────────────────────────────────────────────────────
// Shopping list categories
// ─────────────────────────────────────────────────────────────────────────────

pub const CATEGORY_GRAINS: &str = "grains";
pub const CATEGORY_VEGETABLES: &str = "vegetables";
pub const CATEGORY_PRODUCE: &str = "produce";
pub const CATEGORY_PROTEINS: &str = "proteins";
pub const CATEGORY_DAIRY: &str = "dairy";
pub const CATEGORY_SPICES: &str = "spices";
pub const CATEGORY_OILS: &str = "oils";
pub const CATEGORY_PANTRY: &str = "pantry";
pub const CATEGORY_PALEO_PANTRY: &str = "paleo-pantry";
pub const CATEGORY_KETO_PANTRY: &str = "keto-pantry";

// ─────────────────────────────────────────────────────────────────────────────
// Shopping list vocabulary
// ─────────────────────────────────────────────────────────────────────────────

pub const INDIA_GRAINS: &[&str] = &["rice", "wheat flour", "dal", "semolina"];
pub const INDIA_GLUTEN_FREE_GRAINS: &[&str] = &["rice", "rice flour", "dal"];
pub const INDIA_LOW_CARB_GRAINS: &[&str] = &["cauliflower rice", "almond flour", "coconut flour"];
pub const INDIA_PALEO_GRAINS: &[&str] = &["sweet potato", "cassava flour"];

pub const USA_GRAINS: &[&str] = &["oats", "bread", "pasta", "rice", "quinoa"];
pub const USA_GLUTEN_FREE_GRAINS: &[&str] = &["rice", "quinoa", "gluten-free oats"];
pub const USA_LOW_CARB_GRAINS: &[&str] = &["cauliflower rice", "zucchini noodles"];
pub const USA_PALEO_GRAINS: &[&str] = &["sweet potato", "butternut squash", "cassava flour"];

pub const INDIA_VEGETABLES: &[&str] = &[
    "onions",
    "tomatoes",
    "potatoes",
    "spinach",
    "green chilies",
    "ginger",
    "garlic",
    "curry leaves",
    "coconut",
];

pub const INDIA_SPICES: &[&str] = &[
    "turmeric",
    "cumin",
    "coriander",
    "garam masala",
    "mustard seeds",
    "red chili powder",
    "hing",
];

pub const INDIA_VEGETARIAN_PROTEINS: &[&str] = &["paneer", "dal", "chickpeas", "rajma", "coconut"];
pub const INDIA_NON_VEGETARIAN_PROTEINS: &[&str] = &["chicken", "fish", "mutton", "eggs"];
pub const INDIA_KETO_VEGETARIAN_PROTEINS: &[&str] = &["paneer", "tofu", "coconut", "almonds"];
pub const INDIA_KETO_NON_VEGETARIAN_PROTEINS: &[&str] = &["paneer", "chicken", "fish"];

pub const INDIA_DAIRY: &[&str] = &["yogurt", "milk", "ghee"];
pub const INDIA_DAIRY_FREE: &[&str] = &["coconut milk", "coconut oil"];

pub const USA_PRODUCE: &[&str] = &[
    "berries",
    "bananas",
    "lettuce",
    "tomatoes",
    "sweet potato",
    "broccoli",
    "avocado",
];
pub const USA_KETO_PRODUCE: &[&str] = &[
    "avocado",
    "leafy greens",
    "broccoli",
    "cauliflower",
    "zucchini",
    "bell peppers",
];

pub const USA_VEGETARIAN_PROTEINS: &[&str] = &["quinoa", "black beans", "tofu", "nuts"];
pub const USA_NON_VEGETARIAN_PROTEINS: &[&str] = &["chicken breast", "salmon", "turkey", "beef"];
pub const USA_KETO_VEGETARIAN_PROTEINS: &[&str] = &["tofu", "nuts", "seeds", "avocado"];
pub const USA_KETO_NON_VEGETARIAN_PROTEINS: &[&str] = &["chicken", "salmon", "beef", "eggs"];

pub const USA_DAIRY: &[&str] = &["Greek yogurt", "cheese", "milk"];
pub const USA_DAIRY_FREE: &[&str] = &["almond milk", "cashew cream", "nutritional yeast"];
pub const USA_KETO_DAIRY: &[&str] = &["cheese", "heavy cream"];
pub const USA_KETO_DAIRY_FREE: &[&str] = &["coconut cream", "nutritional yeast"];

pub const USA_OILS: &[&str] = &["olive oil", "avocado oil"];

pub const PANTRY_STAPLES: &[&str] = &["salt", "black pepper", "vinegar"];

/// High-fat items appended to dairy under keto.
pub const KETO_HIGH_FAT_DAIRY: &[&str] = &["heavy cream", "butter", "cream cheese"];
pub const KETO_HIGH_FAT_DAIRY_FREE: &[&str] = &["coconut cream", "coconut oil"];

pub const KETO_PANTRY: &[&str] = &["MCT oil", "chia seeds", "flaxseed", "almond butter"];
pub const PALEO_PANTRY: &[&str] = &["almond flour", "coconut aminos", "maple syrup", "mixed nuts"];
