/// Category whose records double as the partners strip.
pub const PARTNER_CATEGORY: &str = "branding";

pub struct CategoryInfo {
    pub tag: &'static str,
    pub label: &'static str,
}

pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        tag: "branding",
        label: "Branding",
    },
    CategoryInfo {
        tag: "web",
        label: "Web Design",
    },
    CategoryInfo {
        tag: "print",
        label: "Print",
    },
    CategoryInfo {
        tag: "social",
        label: "Social Media",
    },
    CategoryInfo {
        tag: "packaging",
        label: "Packaging",
    },
];

pub fn is_known_category(tag: &str) -> bool {
    CATEGORY_MAP.iter().any(|c| c.tag == tag)
}

pub fn get_category_label(tag: &str) -> String {
    CATEGORY_MAP
        .iter()
        .find(|c| c.tag == tag)
        .map_or("unknown", |c| c.label)
        .to_string()
}
