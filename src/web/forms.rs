use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use tamarsan_site::models::{
    ProjectCreate, ProjectUpdate, ServiceCreate, ServiceIcon, ServiceUpdate, TestimonialCreate,
    TestimonialUpdate,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetQuery {
    pub token: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ResetPasswordForm {
    pub token: Uuid,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.new_password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.is_empty() {
            return Err("Current password is required".to_string());
        }
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match".to_string());
        }
        Ok(())
    }
}

/// Query state for an admin list page: the record being edited, if any,
/// and a one-shot notice carried through the post-submit redirect.
#[derive(Deserialize)]
pub struct EditQuery {
    pub edit: Option<Uuid>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if self.icon.parse::<ServiceIcon>().is_err() {
            return Err("Please choose a valid icon".to_string());
        }
        Ok(())
    }

    pub fn to_create(&self) -> ServiceCreate {
        ServiceCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon.parse().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ServiceUpdate {
        ServiceUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            icon: Some(self.icon.parse().unwrap_or_default()),
        }
    }
}

#[derive(Deserialize)]
pub struct TestimonialForm {
    pub description: String,
    pub role: String,
    pub location: String,
    pub rate: Option<i64>,
}

impl TestimonialForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Testimonial text is required".to_string());
        }
        if self.role.trim().is_empty() {
            return Err("Role is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        if let Some(rate) = self.rate {
            if !(1..=5).contains(&rate) {
                return Err("Rating must be between 1 and 5".to_string());
            }
        }
        Ok(())
    }

    pub fn to_create(&self) -> TestimonialCreate {
        TestimonialCreate {
            description: self.description.trim().to_string(),
            role: self.role.trim().to_string(),
            location: self.location.trim().to_string(),
            rate: self.rate,
        }
    }

    pub fn to_update(&self) -> TestimonialUpdate {
        TestimonialUpdate {
            description: Some(self.description.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            location: Some(self.location.trim().to_string()),
            rate: self.rate,
        }
    }
}

/// An image file lifted out of a multipart project submission.
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Field values collected from the multipart project form.
///
/// Project submissions arrive as multipart/form-data because of the file
/// input, so this is filled by hand instead of through `web::Form`.
#[derive(Default)]
pub struct ProjectFormData {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub rate: String,
    pub image_url: String,
    pub image: Option<UploadedImage>,
}

impl ProjectFormData {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if self.parsed_date().is_none() {
            return Err("Date must be in YYYY-MM-DD format".to_string());
        }
        if !self.rate.trim().is_empty() && self.parsed_rate().is_none() {
            return Err("Rating must be a number between 0 and 5".to_string());
        }
        Ok(())
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn parsed_rate(&self) -> Option<f64> {
        let raw = self.rate.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|r| (0.0..=5.0).contains(r))
    }

    /// The URL typed into the image field, if any.
    pub fn typed_image_url(&self) -> Option<String> {
        let url = self.image_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        }
    }

    pub fn to_create(&self, image_url: Option<String>) -> Result<ProjectCreate, String> {
        let date = self
            .parsed_date()
            .ok_or_else(|| "Date must be in YYYY-MM-DD format".to_string())?;
        Ok(ProjectCreate {
            name: self.name.trim().to_string(),
            date,
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url,
            rate: self.parsed_rate(),
        })
    }

    pub fn to_update(&self, image_url: Option<String>) -> Result<ProjectUpdate, String> {
        let date = self
            .parsed_date()
            .ok_or_else(|| "Date must be in YYYY-MM-DD format".to_string())?;
        Ok(ProjectUpdate {
            name: Some(self.name.trim().to_string()),
            date: Some(date),
            location: Some(self.location.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            image_url: Some(image_url),
            rate: Some(self.parsed_rate()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_form() -> ProjectFormData {
        ProjectFormData {
            name: "Hargeisa solar farm".to_string(),
            date: "2024-03-10".to_string(),
            location: "Hargeisa".to_string(),
            description: "120kW grid-tied installation".to_string(),
            rate: String::new(),
            image_url: String::new(),
            image: None,
        }
    }

    #[test]
    fn project_form_accepts_blank_rate() {
        let form = project_form();
        assert!(form.validate().is_ok());
        assert_eq!(form.parsed_rate(), None);
    }

    #[test]
    fn project_form_parses_fractional_rate() {
        let mut form = project_form();
        form.rate = "4.5".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.parsed_rate(), Some(4.5));
    }

    #[test]
    fn project_form_rejects_out_of_range_rate() {
        let mut form = project_form();
        form.rate = "5.5".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn project_form_rejects_bad_date() {
        let mut form = project_form();
        form.date = "10/03/2024".to_string();
        assert_eq!(
            form.validate(),
            Err("Date must be in YYYY-MM-DD format".to_string())
        );
    }

    #[test]
    fn testimonial_form_rejects_zero_rating() {
        let form = TestimonialForm {
            description: "Great work".to_string(),
            role: "Homeowner".to_string(),
            location: "Berbera".to_string(),
            rate: Some(0),
        };
        assert!(form.validate().is_err());
    }
}
