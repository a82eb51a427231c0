use chrono::NaiveDate;

use crate::models::{PriceRange, Review, ServiceProvider, ServiceType};

fn review(id: &str, user_name: &str, rating: u8, comment: &str, (y, m, d): (i32, u32, u32)) -> Review {
    Review {
        id: id.to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fixed provider listings, in seed order
pub fn seed_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: "1".to_string(),
            name: "Pawsitive Training Academy".to_string(),
            service_type: ServiceType::DogTraining,
            description: "Professional dog training services specializing in positive \
                          reinforcement methods. We offer puppy training, obedience classes, \
                          and behavioral modification."
                .to_string(),
            location: "Downtown Area".to_string(),
            distance: 2.3,
            phone: "(555) 123-4567".to_string(),
            email: "info@pawsitivetraining.com".to_string(),
            website: Some("https://pawsitivetraining.com".to_string()),
            rating: 4.8,
            review_count: 127,
            price_range: PriceRange::Moderate,
            certifications: strings(&["CPDT-KA", "AKC CGC Evaluator"]),
            availability: "Mon-Sat, 9AM-6PM".to_string(),
            specialties: strings(&["Puppy Classes", "Obedience", "Recall Training"]),
            years_experience: 12,
            reviews: vec![
                review(
                    "1-1",
                    "Sarah M.",
                    5,
                    "Our lab finally walks politely. Patient, reward-based trainers.",
                    (2024, 1, 10),
                ),
                review(
                    "1-2",
                    "James T.",
                    4,
                    "Great puppy class, though the group was a bit large.",
                    (2023, 12, 2),
                ),
            ],
        },
        ServiceProvider {
            id: "2".to_string(),
            name: "Happy Tails Grooming".to_string(),
            service_type: ServiceType::Grooming,
            description: "Full-service dog grooming salon with experienced groomers. We \
                          provide baths, haircuts, nail trimming, and spa treatments for all \
                          breeds."
                .to_string(),
            location: "Westside".to_string(),
            distance: 1.8,
            phone: "(555) 234-5678".to_string(),
            email: "contact@happytailsgrooming.com".to_string(),
            website: Some("happytailsgrooming.com".to_string()),
            rating: 4.9,
            review_count: 203,
            price_range: PriceRange::Premium,
            certifications: strings(&["Certified Master Groomer", "Pet First Aid"]),
            availability: "Tue-Sun, 8AM-5PM".to_string(),
            specialties: strings(&["Breed Cuts", "Nail Trimming", "De-shedding"]),
            years_experience: 9,
            reviews: vec![
                review(
                    "2-1",
                    "Priya K.",
                    5,
                    "Best doodle cut we have ever had. Very gentle with nervous dogs.",
                    (2024, 1, 5),
                ),
                review("2-2", "Tom R.", 5, "On time and fairly priced for the quality.", (2023, 11, 18)),
            ],
        },
        ServiceProvider {
            id: "3".to_string(),
            name: "Walkies & Waggles".to_string(),
            service_type: ServiceType::DogWalking,
            description: "Reliable dog walking and pet sitting services. Insured and bonded \
                          walkers who love dogs and provide daily exercise and companionship."
                .to_string(),
            location: "Central Park Area".to_string(),
            distance: 3.1,
            phone: "(555) 345-6789".to_string(),
            email: "hello@walkieswaggles.com".to_string(),
            website: None,
            rating: 4.7,
            review_count: 89,
            price_range: PriceRange::Budget,
            certifications: strings(&["Pet Sitter Insurance", "Background Checked"]),
            availability: "7 days a week, flexible hours".to_string(),
            specialties: strings(&["Group Walks", "Pet Sitting", "Puppy Visits"]),
            years_experience: 5,
            reviews: vec![review(
                "3-1",
                "Elena V.",
                5,
                "Daily photo updates and our dog is always tired and happy.",
                (2024, 1, 12),
            )],
        },
        ServiceProvider {
            id: "4".to_string(),
            name: "Canine Behavior Solutions".to_string(),
            service_type: ServiceType::BehavioralSpecialist,
            description: "Expert behavioral consultation for dogs with anxiety, aggression, or \
                          other behavioral issues. One-on-one sessions tailored to your dog's \
                          needs."
                .to_string(),
            location: "North District".to_string(),
            distance: 4.5,
            phone: "(555) 456-7890".to_string(),
            email: "consult@caninebehavior.com".to_string(),
            website: Some("https://caninebehavior.com".to_string()),
            rating: 5.0,
            review_count: 64,
            price_range: PriceRange::Premium,
            certifications: strings(&["CAAB", "IAABC Member", "PhD Animal Behavior"]),
            availability: "By appointment only".to_string(),
            specialties: strings(&["Separation Anxiety", "Reactivity", "Resource Guarding"]),
            years_experience: 18,
            reviews: vec![
                review(
                    "4-1",
                    "Marcus L.",
                    5,
                    "Helped our rescue with severe separation anxiety. Life changing.",
                    (2023, 12, 20),
                ),
                review(
                    "4-2",
                    "Dana W.",
                    5,
                    "Clear plan, follow-up calls, and real progress within weeks.",
                    (2023, 10, 8),
                ),
            ],
        },
        ServiceProvider {
            id: "5".to_string(),
            name: "Puppy Playhouse Daycare".to_string(),
            service_type: ServiceType::DaycareBoarding,
            description: "Safe and fun daycare and boarding facility with supervised play \
                          groups, climate-controlled spaces, and webcam access for owners."
                .to_string(),
            location: "East Side".to_string(),
            distance: 2.7,
            phone: "(555) 567-8901".to_string(),
            email: "info@puppyplayhouse.com".to_string(),
            website: Some("https://puppyplayhouse.com".to_string()),
            rating: 4.6,
            review_count: 156,
            price_range: PriceRange::Moderate,
            certifications: strings(&["Licensed Facility", "Pet CPR Certified Staff"]),
            availability: "Mon-Fri 7AM-7PM, Sat-Sun 8AM-6PM".to_string(),
            specialties: strings(&["Supervised Play", "Overnight Boarding", "Webcam Access"]),
            years_experience: 7,
            reviews: vec![review(
                "5-1",
                "Chris P.",
                4,
                "Staff are lovely. Pickup can get busy around 6pm.",
                (2024, 1, 3),
            )],
        },
    ]
}
