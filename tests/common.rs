use chrono::NaiveDate;

use tamarsan_site::models::*;

/// Distinct project payloads. A higher `n` carries a later date, so the
/// expected display order is descending `n`.
pub fn seed_project(n: u32) -> ProjectCreate {
    ProjectCreate {
        name: format!("Solar Installation {}", n),
        date: NaiveDate::from_ymd_opt(2020 + n as i32, 6, 15)
            .expect("Invalid date in test helper"),
        location: format!("District {}", n),
        description: format!("Rooftop array number {} for a commercial client.", n),
        image_url: None,
        rate: None,
    }
}

pub fn seed_service(n: u32) -> ServiceCreate {
    ServiceCreate {
        title: format!("Service {}", n),
        description: format!("Description of service {}.", n),
        icon: ServiceIcon::Sun,
    }
}

pub fn seed_testimonial(n: u32) -> TestimonialCreate {
    TestimonialCreate {
        rate: Some(4),
        description: format!("Testimonial {} about reliable power.", n),
        role: "Business Owner".to_string(),
        location: format!("Town {}", n),
    }
}
