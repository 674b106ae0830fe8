/// Every user-visible string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub ingredients_heading: &'static str,
    pub burger_heading: &'static str,
    pub empty_burger_hint: &'static str,
    pub price_label: &'static str,
    pub count_prefix: &'static str,
    pub add_hover: &'static str,
    pub remove_hover: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Burger Builder",
    ingredients_heading: "Ingredients",
    burger_heading: "Your burger",
    empty_burger_hint: "Add some ingredients",
    price_label: "Price",
    count_prefix: "x",
    add_hover: "Add one",
    remove_hover: "Remove one",
};
