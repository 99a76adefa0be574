use askama::Template;
use uuid::Uuid;

use tamarsan_site::models::{Project, Service, ServiceIcon, Testimonial, User};
use tamarsan_site::store::ListState;

use crate::web::forms::{ProjectFormData, ServiceForm, TestimonialForm};

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "public/services.html")]
pub struct ServicesTemplate {
    pub state: ListState<Service>,
}

#[derive(Template)]
#[template(path = "public/projects.html")]
pub struct ProjectsTemplate {
    pub state: ListState<Project>,
}

#[derive(Template)]
#[template(path = "public/project_detail.html")]
pub struct ProjectDetailTemplate {
    pub project: Project,
}

#[derive(Template)]
#[template(path = "public/testimonials.html")]
pub struct TestimonialsTemplate {
    pub state: ListState<Testimonial>,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "public/help.html")]
pub struct HelpTemplate;

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub error: Option<String>,
    pub sent: bool,
}

#[derive(Template)]
#[template(path = "admin/reset_password.html")]
pub struct ResetPasswordTemplate {
    pub token: Option<Uuid>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub user: User,
    pub project_count: i64,
    pub service_count: i64,
    pub testimonial_count: i64,
}

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub user: User,
    pub notice: Option<String>,
    pub state: ListState<Project>,
    pub form: ProjectFormView,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/services.html")]
pub struct AdminServicesTemplate {
    pub user: User,
    pub notice: Option<String>,
    pub state: ListState<Service>,
    pub form: ServiceFormView,
    pub icon_choices: [ServiceIcon; 10],
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/testimonials.html")]
pub struct AdminTestimonialsTemplate {
    pub user: User,
    pub notice: Option<String>,
    pub state: ListState<Testimonial>,
    pub form: TestimonialFormView,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/settings.html")]
pub struct SettingsTemplate {
    pub user: User,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Values shown in the project form, either blank, loaded from a record
/// for editing, or echoed back from a rejected submission.
#[derive(Default)]
pub struct ProjectFormView {
    pub editing: Option<Uuid>,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub rate: String,
}

impl ProjectFormView {
    pub fn from_submission(form: &ProjectFormData, editing: Option<Uuid>) -> Self {
        Self {
            editing,
            name: form.name.clone(),
            date: form.date.clone(),
            location: form.location.clone(),
            description: form.description.clone(),
            image_url: form.image_url.clone(),
            rate: form.rate.clone(),
        }
    }
}

impl From<&Project> for ProjectFormView {
    fn from(project: &Project) -> Self {
        Self {
            editing: Some(project.id),
            name: project.name.clone(),
            date: project.date.format("%Y-%m-%d").to_string(),
            location: project.location.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone().unwrap_or_default(),
            rate: project.rate.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}

pub struct ServiceFormView {
    pub editing: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Default for ServiceFormView {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            icon: ServiceIcon::default().as_str().to_string(),
        }
    }
}

impl ServiceFormView {
    pub fn from_submission(form: &ServiceForm, editing: Option<Uuid>) -> Self {
        Self {
            editing,
            title: form.title.clone(),
            description: form.description.clone(),
            icon: form.icon.clone(),
        }
    }
}

impl From<&Service> for ServiceFormView {
    fn from(service: &Service) -> Self {
        Self {
            editing: Some(service.id),
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
        }
    }
}

pub struct TestimonialFormView {
    pub editing: Option<Uuid>,
    pub description: String,
    pub role: String,
    pub location: String,
    pub rate: i64,
}

impl Default for TestimonialFormView {
    fn default() -> Self {
        Self {
            editing: None,
            description: String::new(),
            role: String::new(),
            location: String::new(),
            rate: 5,
        }
    }
}

impl TestimonialFormView {
    pub fn from_submission(form: &TestimonialForm, editing: Option<Uuid>) -> Self {
        Self {
            editing,
            description: form.description.clone(),
            role: form.role.clone(),
            location: form.location.clone(),
            rate: form.rate.unwrap_or(5),
        }
    }
}

impl From<&Testimonial> for TestimonialFormView {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            editing: Some(testimonial.id),
            description: testimonial.description.clone(),
            role: testimonial.role.clone(),
            location: testimonial.location.clone(),
            rate: testimonial.rate,
        }
    }
}
