//! Seeded landing page content. Everything here is static and immutable.

use crate::booking::BookingSlot;
use crate::catalog::{ALL_CATEGORIES, Category, Instructor, Skill};

pub const BRAND: &str = "SkillSwap Hub";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub skill: &'static str,
    /// Star rating out of five.
    pub rating: u8,
    pub content: &'static str,
    pub location: &'static str,
    pub session_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowItWorksStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: ALL_CATEGORIES,
        label: "All Skills",
    },
    Category {
        id: "creative",
        label: "Creative",
    },
    Category {
        id: "business",
        label: "Business",
    },
    Category {
        id: "lifestyle",
        label: "Lifestyle",
    },
    Category {
        id: "music",
        label: "Music",
    },
    Category {
        id: "technology",
        label: "Technology",
    },
    Category {
        id: "language",
        label: "Languages",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "Cooking",
        category: "lifestyle",
        description: "Master culinary techniques from professional chefs",
        students: 2400,
        avg_rating: 4.9,
        price_range: "$25-45/hr",
        instructors: 45,
    },
    Skill {
        name: "Graphic Design",
        category: "creative",
        description: "Create stunning visuals and brand identity",
        students: 1800,
        avg_rating: 4.8,
        price_range: "$30-60/hr",
        instructors: 32,
    },
    Skill {
        name: "Guitar",
        category: "music",
        description: "Learn acoustic and electric guitar fundamentals",
        students: 3200,
        avg_rating: 4.9,
        price_range: "$20-40/hr",
        instructors: 67,
    },
    Skill {
        name: "Excel",
        category: "business",
        description: "Advanced data analysis and spreadsheet mastery",
        students: 2900,
        avg_rating: 4.7,
        price_range: "$35-55/hr",
        instructors: 28,
    },
    Skill {
        name: "Photography",
        category: "creative",
        description: "Capture stunning photos with professional techniques",
        students: 1650,
        avg_rating: 4.8,
        price_range: "$40-70/hr",
        instructors: 41,
    },
    Skill {
        name: "Spanish",
        category: "language",
        description: "Learn conversational Spanish with native speakers",
        students: 2200,
        avg_rating: 4.9,
        price_range: "$25-45/hr",
        instructors: 56,
    },
];

/// Number of leading [`SKILLS`] shown in the "Popular Skills" section.
pub const POPULAR_SKILL_COUNT: usize = 4;

pub static INSTRUCTORS: &[Instructor] = &[
    Instructor {
        name: "Sarah Chen",
        specialty: "Culinary Arts & Cooking",
        category: "lifestyle",
        rating: 4.9,
        reviews: 324,
        students: 1200,
        location: "San Francisco, CA",
        hourly_rate: 45,
        bio: "Professional chef with 12+ years experience in fine dining restaurants. Specializes in French cuisine and pastry arts.",
        languages: &["English", "Mandarin"],
        response_time: "1 hour",
    },
    Instructor {
        name: "Mike Rodriguez",
        specialty: "Graphic Design & Branding",
        category: "creative",
        rating: 4.8,
        reviews: 256,
        students: 890,
        location: "Austin, TX",
        hourly_rate: 55,
        bio: "Award-winning graphic designer working with Fortune 500 companies. Expert in Adobe Creative Suite and brand development.",
        languages: &["English", "Spanish"],
        response_time: "2 hours",
    },
    Instructor {
        name: "Emma Thompson",
        specialty: "Guitar & Music Theory",
        category: "music",
        rating: 5.0,
        reviews: 412,
        students: 1650,
        location: "Nashville, TN",
        hourly_rate: 40,
        bio: "Berklee College of Music graduate with 15+ years teaching experience. Performed with various indie and country artists.",
        languages: &["English"],
        response_time: "30 minutes",
    },
    Instructor {
        name: "David Kim",
        specialty: "Excel & Data Analysis",
        category: "business",
        rating: 4.9,
        reviews: 289,
        students: 980,
        location: "Seattle, WA",
        hourly_rate: 50,
        bio: "Senior data analyst at Microsoft with expertise in advanced Excel, Power BI, and business intelligence solutions.",
        languages: &["English", "Korean"],
        response_time: "1 hour",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jessica Park",
        role: "Marketing Manager",
        skill: "Graphic Design",
        rating: 5,
        content: "Learning graphic design through SkillSwap Hub has been incredible. My instructor Sarah was patient, professional, and helped me create a complete rebrand for my startup. The 1-on-1 sessions were perfectly tailored to my needs.",
        location: "Los Angeles, CA",
        session_count: 12,
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "Software Engineer",
        skill: "Guitar",
        rating: 5,
        content: "I always wanted to learn guitar but never had time for group classes. Emma's flexible scheduling and personalized approach made it possible. In just 3 months, I went from complete beginner to playing my favorite songs!",
        location: "Portland, OR",
        session_count: 16,
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Business Analyst",
        skill: "Advanced Excel",
        rating: 5,
        content: "David's Excel mastery sessions transformed how I work with data. The techniques I learned have made me 3x more efficient at work and helped me get promoted. Best investment in my career development.",
        location: "Chicago, IL",
        session_count: 8,
    },
    Testimonial {
        name: "Tom Wilson",
        role: "Food Blogger",
        skill: "French Cuisine",
        rating: 5,
        content: "As a food blogger, I needed to elevate my cooking skills. Sarah's French cuisine lessons were amazing - professional techniques explained simply. My readers love the new recipes, and my confidence in the kitchen has soared.",
        location: "Miami, FL",
        session_count: 20,
    },
    Testimonial {
        name: "Ana Rodriguez",
        role: "Freelancer",
        skill: "Web Design",
        rating: 5,
        content: "The web design skills I learned have completely changed my freelancing business. Mike taught me not just the tools, but design thinking. My client work has improved dramatically and my rates have doubled!",
        location: "Denver, CO",
        session_count: 15,
    },
    Testimonial {
        name: "Kevin Chen",
        role: "Startup Founder",
        skill: "Public Speaking",
        rating: 5,
        content: "Public speaking was my biggest fear as a founder. The confidence-building techniques and practice sessions I got were life-changing. I now confidently pitch to investors and speak at conferences.",
        location: "San Francisco, CA",
        session_count: 10,
    },
];

pub static HOW_IT_WORKS: &[HowItWorksStep] = &[
    HowItWorksStep {
        step: 1,
        title: "Find a Skill",
        description: "Browse our extensive catalog of skills and find the perfect instructor for your learning goals.",
        details: &[
            "Search by skill, instructor, or price",
            "Read reviews and ratings",
            "Compare instructor profiles",
        ],
    },
    HowItWorksStep {
        step: 2,
        title: "Book a Session",
        description: "Schedule a convenient time that works for both you and your chosen instructor.",
        details: &[
            "View real-time availability",
            "Choose session length and format",
            "Secure payment processing",
        ],
    },
    HowItWorksStep {
        step: 3,
        title: "Learn or Teach",
        description: "Join your personalized 1-on-1 session and start your learning journey or share your expertise.",
        details: &[
            "Video call integration",
            "Screen sharing tools",
            "Progress tracking",
        ],
    },
];

pub static HERO_STATS: &[Stat] = &[
    Stat {
        value: "10K+",
        label: "Active Students",
    },
    Stat {
        value: "2K+",
        label: "Expert Teachers",
    },
    Stat {
        value: "50+",
        label: "Skill Categories",
    },
];

pub static COMMUNITY_STATS: &[Stat] = &[
    Stat {
        value: "4.9",
        label: "Average Rating",
    },
    Stat {
        value: "10K+",
        label: "Happy Students",
    },
    Stat {
        value: "50K+",
        label: "Sessions Completed",
    },
    Stat {
        value: "95%",
        label: "Success Rate",
    },
];

const SLOTS: &[(&str, &str, bool)] = &[
    ("Today", "2:00 PM", true),
    ("Today", "4:00 PM", false),
    ("Tomorrow", "10:00 AM", true),
    ("Tomorrow", "2:00 PM", true),
    ("Wed, Dec 21", "11:00 AM", true),
    ("Wed, Dec 21", "3:00 PM", true),
];

#[must_use]
pub fn popular_skills() -> &'static [Skill] {
    &SKILLS[..POPULAR_SKILL_COUNT.min(SKILLS.len())]
}

#[must_use]
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[must_use]
pub fn instructor_by_name(name: &str) -> Option<&'static Instructor> {
    INSTRUCTORS
        .iter()
        .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
}

/// Fresh copy of the bookable slots offered on every instructor profile.
#[must_use]
pub fn default_slots() -> Vec<BookingSlot> {
    SLOTS
        .iter()
        .map(|&(date, time, available)| BookingSlot::new(date, time, available))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::{FilterQuery, filter};

    #[test]
    fn names_are_unique() {
        let skills: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(skills.len(), SKILLS.len());
        let instructors: HashSet<_> = INSTRUCTORS.iter().map(|i| i.name).collect();
        assert_eq!(instructors.len(), INSTRUCTORS.len());
    }

    #[test]
    fn every_entry_uses_a_known_category() {
        for skill in SKILLS {
            assert!(category_by_id(skill.category).is_some(), "{}", skill.name);
        }
        for instructor in INSTRUCTORS {
            assert!(
                category_by_id(instructor.category).is_some(),
                "{}",
                instructor.name
            );
        }
    }

    #[test]
    fn popular_skills_are_the_first_four() {
        let names: Vec<_> = popular_skills().iter().map(|s| s.name).collect();
        assert_eq!(names, ["Cooking", "Graphic Design", "Guitar", "Excel"]);
    }

    #[test]
    fn six_testimonials_with_valid_ratings() {
        assert_eq!(TESTIMONIALS.len(), 6);
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn default_slots_have_one_unavailable() {
        let slots = default_slots();
        assert_eq!(slots.len(), 6);
        let unavailable: Vec<_> = slots.iter().filter(|s| !s.available).collect();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].key().as_str(), "Today-4:00 PM");
    }

    #[test]
    fn instructor_lookup_ignores_case() {
        let found = instructor_by_name("emma thompson").unwrap();
        assert_eq!(found.specialty, "Guitar & Music Theory");
        assert!(instructor_by_name("Nobody").is_none());
    }

    #[test]
    fn seeded_creative_skills() {
        let result = filter(SKILLS, &FilterQuery::default().with_category("creative"));
        let names: Vec<_> = result.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Graphic Design", "Photography"]);
    }

    #[test]
    fn technology_category_is_empty() {
        let result = filter(SKILLS, &FilterQuery::default().with_category("technology"));
        assert!(result.is_empty());
    }
}
