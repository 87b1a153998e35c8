use crate::planner::branch::BranchId;
use crate::planner::templates::{day_with_snack, slot, BranchTemplate};

pub static SOUTH_INDIAN: BranchTemplate = BranchTemplate {
    branch: BranchId::SouthIndian,
    days: [
        // Monday
        day_with_snack(
            slot(20, |r| {
                r.if_gluten_free("Rice Idli with Sambar", "Idli with Sambar and Coconut Chutney")
                    .to_string()
            }),
            slot(35, |r| {
                r.keto_protein(
                    "Sambar Rice with Rasam",
                    "Fish Curry with Rice",
                    "Coconut Vegetable Curry",
                    "Spicy Fish Curry with Coconut",
                )
            }),
            slot(15, |_| "Medu Vada with Chutney".to_string()),
            slot(25, |r| {
                r.if_keto("Cabbage Poriyal with Coconut", "Dosa with Potato Curry")
                    .to_string()
            }),
        ),
        // Tuesday
        day_with_snack(
            slot(15, |r| {
                r.if_gluten_free("Rice Upma with Coconut Chutney", "Upma with Coconut Chutney")
                    .to_string()
            }),
            slot(30, |r| {
                r.keto_protein(
                    "Curd Rice with Pickle",
                    "Chicken Chettinad with Rice",
                    "Coconut Vegetable Curry",
                    "Chicken Chettinad with Greens",
                )
            }),
            slot(10, |_| "Sundal with Coconut".to_string()),
            slot(20, |_| "Uttapam with Sambar".to_string()),
        ),
        // Wednesday
        day_with_snack(
            slot(18, |r| {
                r.if_gluten_free("Rice Flour Dosa with Chutney", "Rava Dosa with Chutney")
                    .to_string()
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Vegetable Biryani",
                    "Mutton Biryani",
                    "Vegetable Avial with Coconut",
                    "Mutton Pepper Fry",
                )
            }),
            slot(10, |r| r.dairy("Filter Coffee with Murukku", "Black Coffee with Murukku")),
            slot(30, |r| r.protein("Appam with Vegetable Stew", "Appam with Chicken Stew")),
        ),
        // Thursday
        day_with_snack(
            slot(15, |_| "Pesarattu with Ginger Chutney".to_string()),
            slot(40, |r| {
                r.keto_protein(
                    "Bisi Bele Bath",
                    "Prawn Curry with Rice",
                    "Kootu with Coconut",
                    "Prawn Masala Fry",
                )
            }),
            slot(15, |r| r.if_keto("Roasted Peanuts with Chili", "Banana Bajji").to_string()),
            slot(25, |r| {
                format!(
                    "Vegetable Kurma with {}",
                    r.grain("Parotta", "Rice Appam", "Cauliflower Rice")
                )
            }),
        ),
        // Friday
        day_with_snack(
            slot(20, |r| {
                if r.is_keto() {
                    "Coconut Flour Dosa with Chutney".to_string()
                } else {
                    format!("Ven Pongal with {}", r.dairy("Ghee", "Coconut Oil"))
                }
            }),
            slot(35, |r| {
                r.keto_protein(
                    "Lemon Rice with Vegetable Poriyal",
                    "Kerala Fish Moilee with Rice",
                    "Vegetable Poriyal with Coconut",
                    "Kerala Fish Moilee",
                )
            }),
            slot(10, |_| "Kuzhi Paniyaram".to_string()),
            slot(25, |r| r.protein("Idiyappam with Vegetable Stew", "Idiyappam with Egg Roast")),
        ),
        // Saturday
        day_with_snack(
            slot(15, |r| {
                r.if_gluten_free("Rice Idli with Coconut Chutney", "Rava Idli with Coconut Chutney")
                    .to_string()
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Tamarind Rice with Vegetable Kootu",
                    "Chicken Biryani",
                    "Mushroom Pepper Fry",
                    "Chicken Pepper Fry",
                )
            }),
            slot(15, |_| "Mysore Bonda with Chutney".to_string()),
            slot(30, |r| {
                r.keto_protein(
                    "Vegetable Uttapam with Sambar",
                    "Egg Dosa with Chicken Curry",
                    "Vegetable Stew with Coconut",
                    "Chicken Stew with Coconut",
                )
            }),
        ),
        // Sunday
        day_with_snack(
            slot(20, |r| {
                r.if_gluten_free("Appam with Coconut Milk", "Poori with Potato Masala")
                    .to_string()
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Sambar, Rasam and Rice Meals",
                    "Meen Kuzhambu with Rice",
                    "Avial with Coconut",
                    "Meen Varuval",
                )
            }),
            slot(10, |r| {
                r.dairy(
                    "Spiced Buttermilk with Banana Chips",
                    "Tender Coconut Water with Banana Chips",
                )
            }),
            slot(25, |r| {
                if r.is_keto() {
                    "Cabbage Thoran with Coconut".to_string()
                } else {
                    r.dairy("Curd Rice with Pomegranate", "Lemon Rice with Pomegranate")
                }
            }),
        ),
    ],
};

pub static NORTH_INDIAN: BranchTemplate = BranchTemplate {
    branch: BranchId::NorthIndian,
    days: [
        // Monday
        day_with_snack(
            slot(20, |r| {
                if r.is_gluten_free() {
                    "Poha with Vegetables".to_string()
                } else {
                    r.dairy("Aloo Paratha with Yogurt", "Aloo Paratha with Mint Chutney")
                }
            }),
            slot(35, |r| {
                r.keto_protein(
                    &format!("Dal Makhani with {}", r.grain("Rice", "Rice", "Cauliflower Rice")),
                    &format!("Butter Chicken with {}", r.bread("Naan")),
                    "Palak Paneer",
                    "Butter Chicken with Salad",
                )
            }),
            slot(15, |r| {
                format!(
                    "{} with {}",
                    r.dairy("Masala Chai", "Lemon Tea"),
                    r.if_gluten_free("Roasted Makhana", "Samosa")
                )
            }),
            slot(25, |r| {
                r.dish(&format!(
                    "{} with Palak Paneer",
                    r.grain("Roti", "Rice Roti", "Cauliflower Roti")
                ))
            }),
        ),
        // Tuesday
        day_with_snack(
            slot(12, |r| format!("Poha with {}", r.dairy("Masala Chai", "Lemon Tea"))),
            slot(40, |r| {
                let grain = r.grain("Rice", "Rice", "Cauliflower Rice");
                r.protein(
                    &format!("Rajma with {grain}"),
                    &format!("Chicken Curry with {grain}"),
                )
            }),
            slot(10, |_| "Aloo Chaat".to_string()),
            slot(25, |r| {
                format!(
                    "{} with Mixed Dal",
                    r.grain("Chapati", "Rice Chapati", "Lettuce Wraps")
                )
            }),
        ),
        // Wednesday
        day_with_snack(
            slot(25, |r| {
                r.if_gluten_free("Stuffed Rice Paratha with Pickle", "Stuffed Paratha with Pickle")
                    .to_string()
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Chole Bhature",
                    "Lamb Curry with Rice",
                    "Chole Masala with Salad",
                    "Lamb Curry with Greens",
                )
            }),
            slot(10, |r| r.protein("Paneer Tikka Bites", "Chicken Tikka Bites")),
            slot(20, |r| format!("Khichdi with {}", r.dairy("Ghee", "Coconut Oil"))),
        ),
        // Thursday
        day_with_snack(
            slot(15, |_| "Besan Chilla with Mint Chutney".to_string()),
            slot(35, |r| {
                let grain = r.grain("Jeera Rice", "Jeera Rice", "Cauliflower Rice");
                r.protein(
                    &format!("Kadai Paneer with {grain}"),
                    &format!("Chicken Tikka Masala with {grain}"),
                )
            }),
            slot(10, |r| r.dairy("Sweet Lassi", "Masala Nimbu Pani")),
            slot(30, |r| {
                format!(
                    "Aloo Gobi with {}",
                    r.grain("Roti", "Rice Roti", "Cauliflower Roti")
                )
            }),
        ),
        // Friday
        day_with_snack(
            slot(15, |r| {
                r.if_gluten_free("Sabudana Khichdi", "Bread Pakora with Chutney")
                    .to_string()
            }),
            slot(40, |r| {
                r.keto_protein(
                    "Dal Tadka with Jeera Rice",
                    "Mutton Rogan Josh with Rice",
                    "Paneer Bhurji with Salad",
                    "Mutton Rogan Josh with Greens",
                )
            }),
            slot(15, |r| r.if_gluten_free("Aloo Tikki Chaat", "Samosa Chaat").to_string()),
            slot(25, |r| format!("{} with Baingan Bharta", r.bread("Tandoori Roti"))),
        ),
        // Saturday
        day_with_snack(
            slot(20, |r| format!("{} with Aloo Sabzi", r.bread("Puri"))),
            slot(45, |r| {
                r.keto_protein(
                    &r.dairy(
                        "Vegetable Pulao with Raita",
                        "Vegetable Pulao with Kachumber Salad",
                    ),
                    "Chicken Biryani",
                    "Paneer Tikka Salad",
                    "Tandoori Chicken Salad",
                )
            }),
            slot(10, |r| {
                r.if_gluten_free("Roasted Chana", "Kachori with Tamarind Chutney")
                    .to_string()
            }),
            slot(30, |r| {
                let bread = r.bread("Naan");
                r.protein(
                    &format!("Mixed Vegetable Curry with {bread}"),
                    &format!("Keema Matar with {bread}"),
                )
            }),
        ),
        // Sunday
        day_with_snack(
            slot(25, |r| {
                format!(
                    "{} with {}",
                    r.if_gluten_free("Makki Paratha", "Gobi Paratha"),
                    r.dairy("Curd", "Mint Chutney")
                )
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Rajma Chawal",
                    "Chicken Biryani",
                    "Palak Paneer with Salad",
                    "Chicken Seekh Kebab Salad",
                )
            }),
            slot(10, |r| r.dairy("Masala Chai with Mathri", "Ginger Tea with Mathri")),
            slot(20, |r| format!("Moong Dal Khichdi with {}", r.dairy("Ghee", "Coconut Oil"))),
        ),
    ],
};

pub static PUNJABI: BranchTemplate = BranchTemplate {
    branch: BranchId::Punjabi,
    days: [
        // Monday
        day_with_snack(
            slot(25, |r| {
                if r.is_gluten_free() {
                    "Makki Roti with Sarson Saag".to_string()
                } else {
                    r.dairy("Aloo Paratha with Lassi", "Aloo Paratha with Pickle")
                }
            }),
            slot(40, |r| {
                r.protein(
                    &format!("Dal Makhani with {}", r.grain("Rice", "Rice", "Cauliflower Rice")),
                    &format!("Butter Chicken with {}", r.grain("Naan", "Rice", "Lettuce Wraps")),
                )
            }),
            slot(15, |r| r.if_gluten_free("Aloo Tikki", "Punjabi Samosa").to_string()),
            slot(30, |r| {
                format!(
                    "{} with Rajma",
                    r.grain("Roti", "Rice Roti", "Cauliflower Roti")
                )
            }),
        ),
        // Tuesday
        day_with_snack(
            slot(20, |r| r.if_gluten_free("Chole with Jeera Rice", "Chole Kulche").to_string()),
            slot(35, |r| {
                let grain = r.grain("Rice", "Rice", "Cauliflower Rice");
                r.protein(
                    &format!("Palak Paneer with {grain}"),
                    &format!("Chicken Tikka Masala with {grain}"),
                )
            }),
            slot(10, |r| r.dish("Paneer Pakora")),
            slot(35, |r| {
                format!(
                    "Sarson Saag with {}",
                    r.grain("Makki Roti", "Makki Roti", "Sauteed Greens")
                )
            }),
        ),
        // Wednesday
        day_with_snack(
            slot(20, |r| format!("{} with Aloo Sabzi", r.bread("Puri"))),
            slot(45, |r| {
                let grain = r.grain("Rice", "Rice", "Cauliflower Rice");
                r.protein(
                    &r.dairy(
                        &format!("Kadhi Pakora with {grain}"),
                        &format!("Chana Masala with {grain}"),
                    ),
                    &format!("Lamb Curry with {grain}"),
                )
            }),
            slot(10, |r| r.dairy("Sweet Lassi", "Jaljeera")),
            slot(25, |r| {
                if r.is_keto() {
                    r.dish("Paneer Bhurji with Salad")
                } else {
                    format!(
                        "{} with {}",
                        r.dairy("Kheer", "Coconut Kheer"),
                        r.bread("Puri")
                    )
                }
            }),
        ),
        // Thursday
        day_with_snack(
            slot(20, |r| {
                r.dish(&format!(
                    "{} with {}",
                    r.if_gluten_free("Paneer Besan Chilla", "Paneer Paratha"),
                    r.dairy("Curd", "Pickle")
                ))
            }),
            slot(40, |r| {
                let grain = r.grain("Rice", "Rice", "Cauliflower Rice");
                r.protein(
                    &format!("Rajma Masala with {grain}"),
                    &format!("Amritsari Fish with {grain}"),
                )
            }),
            slot(15, |_| "Chana Chaat".to_string()),
            slot(30, |r| {
                let bread = r.bread("Tandoori Roti");
                r.protein(
                    &format!("Dal Tadka with {bread}"),
                    &format!("Tandoori Chicken with {bread}"),
                )
            }),
        ),
        // Friday
        day_with_snack(
            slot(15, |r| r.if_gluten_free("Sabudana Khichdi", "Bread Pakora").to_string()),
            slot(45, |r| {
                r.keto_protein(
                    "Chole Masala with Rice",
                    "Mutton Curry with Rice",
                    "Chole Salad Bowl",
                    "Mutton Seekh Kebab",
                )
            }),
            slot(10, |r| r.dairy("Masala Chai with Pinni", "Ginger Tea with Pinni")),
            slot(30, |r| r.dish(&format!("Shahi Paneer with {}", r.bread("Naan")))),
        ),
        // Saturday
        day_with_snack(
            slot(25, |r| format!("{} with Chole", r.bread("Amritsari Kulcha"))),
            slot(40, |r| {
                let bread = r.bread("Roti");
                r.keto_protein(
                    &format!("Baingan Bharta with {bread}"),
                    &format!("Chicken Curry with {bread}"),
                    "Baingan Bharta with Salad",
                    "Chicken Tikka with Salad",
                )
            }),
            slot(15, |r| r.dish(r.if_gluten_free("Aloo Tikki", "Paneer Samosa"))),
            slot(35, |r| {
                let bread = r.bread("Naan");
                r.keto_protein(
                    &format!("Dal Makhani with {bread}"),
                    &format!("Butter Chicken with {bread}"),
                    "Palak Paneer",
                    "Tandoori Chicken",
                )
            }),
        ),
        // Sunday
        day_with_snack(
            slot(25, |r| {
                if r.is_gluten_free() {
                    "Makki Roti with Sarson Saag".to_string()
                } else {
                    format!("Chole Bhature with {}", r.dairy("Lassi", "Pickle"))
                }
            }),
            slot(45, |r| {
                r.keto_protein(
                    "Rajma Chawal",
                    "Chicken Biryani",
                    "Rajma Salad",
                    "Chicken Tikka Platter",
                )
            }),
            slot(10, |r| r.dairy("Masala Chaas", "Nimbu Pani")),
            slot(30, |r| {
                format!(
                    "Mixed Dal with {}",
                    r.grain("Jeera Rice", "Jeera Rice", "Cauliflower Rice")
                )
            }),
        ),
    ],
};

// Gujarati meals are vegetarian on every diet, so only grain and dairy vary.
pub static GUJARATI: BranchTemplate = BranchTemplate {
    branch: BranchId::Gujarati,
    days: [
        // Monday
        day_with_snack(
            slot(15, |_| "Dhokla with Green Chutney".to_string()),
            slot(30, |r| {
                format!(
                    "Gujarati Thali (Dal, Sabzi, {})",
                    r.grain("Roti", "Rice Roti", "Lettuce Wraps")
                )
            }),
            slot(10, |_| "Khandvi".to_string()),
            slot(25, |r| r.dairy("Khichdi with Kadhi", "Khichdi with Tomato Saar")),
        ),
        // Tuesday
        day_with_snack(
            slot(10, |r| r.if_keto("Dhokla with Chutney", "Fafda with Jalebi").to_string()),
            slot(40, |r| {
                format!(
                    "Undhiyu with {}",
                    r.grain("Puri", "Rice Puri", "Vegetable Salad")
                )
            }),
            slot(15, |r| {
                r.if_gluten_free("Bajra Thepla with Chutney", "Methi Thepla with Chutney")
                    .to_string()
            }),
            slot(20, |r| {
                format!(
                    "{} with Shaak",
                    r.grain("Rotli", "Rice Rotli", "Lettuce Wraps")
                )
            }),
        ),
        // Wednesday
        day_with_snack(
            slot(20, |_| "Handvo with Chutney".to_string()),
            slot(35, |r| r.if_gluten_free("Gujarati Dal with Rice", "Dal Dhokli").to_string()),
            slot(10, |_| "Sev Khamani".to_string()),
            slot(25, |r| {
                if r.is_keto() {
                    "Mixed Vegetable Shaak with Salad".to_string()
                } else {
                    format!(
                        "{} with {}",
                        r.dairy("Kheer", "Coconut Kheer"),
                        r.bread("Puri")
                    )
                }
            }),
        ),
        // Thursday
        day_with_snack(
            slot(15, |r| format!("Methi Muthia with {}", r.dairy("Masala Chai", "Lemon Tea"))),
            slot(35, |r| {
                format!(
                    "Sev Tameta Nu Shaak with {}",
                    r.grain("Rotli", "Rice Rotli", "Lettuce Wraps")
                )
            }),
            slot(10, |r| r.dairy("Chaas with Khakhra", "Khakhra with Pickle")),
            slot(25, |r| {
                if r.is_keto() {
                    "Tindora Shaak with Salad".to_string()
                } else {
                    format!("Vagharelo Bhaat with {}", r.dairy("Kadhi", "Tomato Saar"))
                }
            }),
        ),
        // Friday
        day_with_snack(
            slot(15, |_| "Sev Usal".to_string()),
            slot(40, |r| {
                r.dish(&format!(
                    "Paneer Bhurji with {}",
                    r.grain("Bajra Rotla", "Bajra Rotla", "Lettuce Wraps")
                ))
            }),
            slot(10, |r| r.if_gluten_free("Batata Vada", "Dabeli").to_string()),
            slot(25, |r| {
                format!(
                    "Ringan No Olo with {}",
                    r.grain("Bajra Rotla", "Bajra Rotla", "Cauliflower Rice")
                )
            }),
        ),
        // Saturday
        day_with_snack(
            slot(20, |_| "Patra with Chutney".to_string()),
            slot(45, |r| {
                format!(
                    "{} with {}",
                    r.dairy("Gujarati Kadhi", "Tuvar Dal"),
                    r.grain("Rice", "Rice", "Cauliflower Rice")
                )
            }),
            slot(10, |_| "Fafda with Papaya Sambharo".to_string()),
            slot(30, |r| {
                r.if_gluten_free("Lilva Tikki with Chutney", "Lilva Kachori with Chutney")
                    .to_string()
            }),
        ),
        // Sunday
        day_with_snack(
            slot(15, |r| r.dairy("Thepla with Curd", "Thepla with Chhundo")),
            slot(45, |r| {
                format!(
                    "Gujarati Thali ({}, Shaak, {})",
                    r.dairy("Kadhi", "Dal"),
                    r.grain("Rotli", "Rice Rotli", "Lettuce Wraps")
                )
            }),
            slot(10, |_| "Makai No Chevdo".to_string()),
            slot(25, |r| format!("Khichdi with {}", r.dairy("Ghee", "Coconut Oil"))),
        ),
    ],
};

pub static MIXED_INDIAN: BranchTemplate = BranchTemplate {
    branch: BranchId::MixedIndian,
    days: [
        // Monday
        day_with_snack(
            slot(15, |r| r.if_vegan("Poha with Vegetables", "Idli with Sambar").to_string()),
            slot(30, |r| r.protein("Dal Rice with Sabzi", "Chicken Curry with Rice")),
            slot(10, |r| {
                r.dairy("Masala Chai with Rusk", "Ginger Tea with Roasted Chana")
            }),
            slot(25, |r| {
                format!(
                    "{} with Dal and Vegetables",
                    r.grain("Roti", "Rice", "Cauliflower Rice")
                )
            }),
        ),
        // Tuesday
        day_with_snack(
            slot(12, |r| {
                r.if_gluten_free("Rice Upma with Coconut Chutney", "Upma with Coconut Chutney")
                    .to_string()
            }),
            slot(35, |r| r.protein("Rajma Rice", "Fish Curry with Rice")),
            slot(10, |_| "Bhel Puri".to_string()),
            slot(30, |r| {
                r.dish(&format!(
                    "{} with Paneer Curry",
                    r.grain("Chapati", "Rice Chapati", "Lettuce Wraps")
                ))
            }),
        ),
        // Wednesday
        day_with_snack(
            slot(20, |_| "Dosa with Sambar".to_string()),
            slot(40, |r| r.protein("Chole with Rice", "Mutton Curry with Rice")),
            slot(15, |_| "Vegetable Pakora".to_string()),
            slot(20, |r| format!("Khichdi with {}", r.dairy("Yogurt", "Coconut Milk"))),
        ),
        // Thursday
        day_with_snack(
            slot(15, |r| r.dish(r.if_gluten_free("Besan Chilla", "Aloo Paratha with Curd"))),
            slot(35, |r| {
                r.keto_protein(
                    "Vegetable Pulao with Dal",
                    "Egg Curry with Rice",
                    "Paneer Tikka Salad",
                    "Egg Bhurji with Salad",
                )
            }),
            slot(10, |_| "Dhokla".to_string()),
            slot(25, |r| {
                let bread = r.bread("Roti");
                r.protein(
                    &format!("Mixed Vegetable Curry with {bread}"),
                    &format!("Chicken Kadai with {bread}"),
                )
            }),
        ),
        // Friday
        day_with_snack(
            slot(15, |_| "Poha with Peanuts".to_string()),
            slot(40, |r| {
                r.keto_protein(
                    "Sambar Rice",
                    "Fish Fry with Rice",
                    "Vegetable Kurma with Salad",
                    "Fish Fry with Salad",
                )
            }),
            slot(10, |r| r.if_gluten_free("Roasted Makhana", "Samosa").to_string()),
            slot(25, |r| {
                r.dish(&format!(
                    "Palak Paneer with {}",
                    r.grain("Jeera Rice", "Jeera Rice", "Cauliflower Rice")
                ))
            }),
        ),
        // Saturday
        day_with_snack(
            slot(20, |_| "Pesarattu with Chutney".to_string()),
            slot(45, |r| {
                r.keto_protein(
                    "Vegetable Biryani",
                    "Chicken Biryani",
                    "Mushroom Tikka with Salad",
                    "Chicken Tikka with Salad",
                )
            }),
            slot(10, |_| "Pani Puri".to_string()),
            slot(30, |r| {
                format!(
                    "Dal Tadka with {}",
                    r.grain("Roti", "Rice Roti", "Cauliflower Roti")
                )
            }),
        ),
        // Sunday
        day_with_snack(
            slot(25, |r| format!("{} with Aloo Sabzi", r.bread("Puri"))),
            slot(45, |r| {
                r.keto_protein(
                    "Chole Bhature",
                    "Mutton Biryani",
                    "Chana Salad",
                    "Mutton Sukka",
                )
            }),
            slot(10, |r| r.dairy("Masala Chai with Biscuits", "Lemon Tea with Biscuits")),
            slot(20, |r| {
                if r.is_keto() {
                    r.dish("Paneer Salad with Mint Chutney")
                } else {
                    r.dairy("Curd Rice", "Lemon Rice")
                }
            }),
        ),
    ],
};
