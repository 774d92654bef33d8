use crate::error::{EnrollmentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Price of a six-month course, in Rand.
pub const SIX_MONTH_PRICE: Decimal = dec!(1500);
/// Price of a six-week course, in Rand.
pub const SIX_WEEK_PRICE: Decimal = dec!(750);

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum CourseTier {
    SixMonth,
    SixWeek,
}

impl CourseTier {
    pub fn price(&self) -> Decimal {
        match self {
            CourseTier::SixMonth => SIX_MONTH_PRICE,
            CourseTier::SixWeek => SIX_WEEK_PRICE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseTier::SixMonth => "six-month",
            CourseTier::SixWeek => "six-week",
        }
    }
}

/// A single catalog entry. Immutable, defined at process start.
///
/// `image` is an opaque asset reference carried for display parity with the
/// mobile client; it is never opened here.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Course {
    pub name: &'static str,
    pub tier: CourseTier,
    pub purpose: &'static str,
    pub topics: &'static [&'static str],
    pub image: &'static str,
}

impl Course {
    pub fn price(&self) -> Decimal {
        self.tier.price()
    }
}

const COURSES: &[Course] = &[
    Course {
        name: "First Aid",
        tier: CourseTier::SixMonth,
        purpose: "To provide first aid awareness and basic life support.",
        topics: &[
            "Wounds and bleeding",
            "Burns and fractures",
            "Emergency scene management",
            "Cardio-Pulmonary Resuscitation (CPR)",
            "Respiratory distress (e.g., choking, blocked airway)",
        ],
        image: "aidfirst.png",
    },
    Course {
        name: "Sewing",
        tier: CourseTier::SixMonth,
        purpose: "To provide alterations and new garment tailoring services.",
        topics: &[
            "Types of stitches",
            "Threading a sewing machine",
            "Sewing buttons, zips, hems, and seams",
            "Alterations",
            "Designing and sewing new garments",
        ],
        image: "sews.jpg",
    },
    Course {
        name: "Life Skills",
        tier: CourseTier::SixMonth,
        purpose: "To provide skills to navigate basic life necessities.",
        topics: &[
            "Opening a bank account",
            "Basic labor law (know your rights)",
            "Basic reading and writing literacy",
            "Basic numeric literacy",
        ],
        image: "lifeskills.png",
    },
    Course {
        name: "Landscaping",
        tier: CourseTier::SixMonth,
        purpose: "To provide knowledge about garden landscaping.",
        topics: &[
            "Watering, pruning, and planting",
            "Planting techniques",
            "Garden maintenance",
        ],
        image: "land.jpg",
    },
    Course {
        name: "Child Minding",
        tier: CourseTier::SixWeek,
        purpose: "To provide basic child and baby care.",
        topics: &[
            "Birth to six-month baby needs",
            "Seven-month to one-year needs",
            "Toddler needs",
            "Educational toys",
        ],
        image: "minding.jpg",
    },
    Course {
        name: "Cooking",
        tier: CourseTier::SixWeek,
        purpose: "To teach the basics of cooking.",
        topics: &[
            "Meal planning",
            "Healthy cooking methods",
            "Baking techniques",
            "Safety in the kitchen",
        ],
        image: "cooks.jpg",
    },
    Course {
        name: "Garden Maintaining",
        tier: CourseTier::SixWeek,
        purpose: "To provide basic knowledge of watering, pruning, and planting.",
        topics: &[
            "Water restrictions",
            "Pruning techniques",
            "Propagation of plants",
        ],
        image: "garden.jpg",
    },
];

/// The static price/asset table for every offered course.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// All courses in display order.
    pub fn courses(&self) -> impl Iterator<Item = &'static Course> {
        COURSES.iter()
    }

    pub fn by_tier(&self, tier: CourseTier) -> impl Iterator<Item = &'static Course> {
        COURSES.iter().filter(move |c| c.tier == tier)
    }

    pub fn course(&self, name: &str) -> Option<&'static Course> {
        COURSES.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.course(name).is_some()
    }

    /// Price lookup that fails on names outside the catalog.
    pub fn price(&self, name: &str) -> Result<Decimal> {
        self.course(name)
            .map(Course::price)
            .ok_or_else(|| EnrollmentError::UnknownCourse(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_courses() {
        let catalog = Catalog::new();
        assert_eq!(catalog.courses().count(), 7);
        assert_eq!(catalog.by_tier(CourseTier::SixMonth).count(), 4);
        assert_eq!(catalog.by_tier(CourseTier::SixWeek).count(), 3);
    }

    #[test]
    fn test_tier_prices() {
        let catalog = Catalog::new();
        assert_eq!(catalog.price("First Aid").unwrap(), dec!(1500));
        assert_eq!(catalog.price("Cooking").unwrap(), dec!(750));
    }

    #[test]
    fn test_unknown_course_is_rejected() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.price("Welding"),
            Err(EnrollmentError::UnknownCourse(name)) if name == "Welding"
        ));
        assert!(!catalog.contains("first aid")); // lookups are case-sensitive
    }

    #[test]
    fn test_course_details_present() {
        let catalog = Catalog::new();
        let course = catalog.course("Life Skills").unwrap();
        assert_eq!(course.tier, CourseTier::SixMonth);
        assert!(course.purpose.contains("life necessities"));
        assert_eq!(course.topics.len(), 4);
    }
}
