use crate::model::contact::{ContactInfo, ContactPerson};
use crate::model::project::Project;
use crate::model::service::Service;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;
use tracing::info;

/// Read-only provider of the site catalog. Ordering is the seed order and
/// stable across calls.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    async fn list_projects(&self) -> RepositoryResult<Vec<Project>>;
    async fn contact_info(&self) -> RepositoryResult<ContactInfo>;
}

pub struct InMemoryContentRepository {
    services: Vec<Service>,
    projects: Vec<Project>,
    contact: ContactInfo,
}

impl InMemoryContentRepository {
    pub fn new(services: Vec<Service>, projects: Vec<Project>, contact: ContactInfo) -> Self {
        InMemoryContentRepository {
            services,
            projects,
            contact,
        }
    }

    /// Repository seeded with the production catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(default_services(), default_projects(), default_contact_info())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    #[tracing::instrument(skip(self))]
    async fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        info!("Listing {} services", self.services.len());
        Ok(self.services.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn list_projects(&self) -> RepositoryResult<Vec<Project>> {
        info!("Listing {} projects", self.projects.len());
        Ok(self.projects.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn contact_info(&self) -> RepositoryResult<ContactInfo> {
        Ok(self.contact.clone())
    }
}

fn service(id: &str, title: &str, description: &str, features: &[&str], image_url: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn project(id: &str, title: &str, category: &str, description: &str, image_url: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

fn default_services() -> Vec<Service> {
    vec![
        service(
            "new-roof",
            "New Roof Installations",
            "Complete roofing solutions for new constructions. We work with builders and developers to deliver premium Colorbond and metal roofing systems that meet Australian standards.",
            &["Colorbond Steel", "Custom Designs", "Builder Partnerships", "Warranty Included"],
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/bqgdo8o5_image.png",
        ),
        service(
            "re-roofing",
            "Re-Roofing",
            "Transform your existing roof with modern materials. We remove old roofing and install new, energy-efficient roofing systems that increase property value.",
            &["Old Roof Removal", "Structural Assessment", "Modern Materials", "Energy Efficient"],
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/eyl3f5oa_image.png",
        ),
        service(
            "metal-roofing",
            "Metal Roofing",
            "Specializing in premium metal roofing including Colorbond, Zincalume, and custom profiles. Durable, long-lasting, and aesthetically superior.",
            &["Colorbond Range", "Zincalume", "Custom Profiles", "30+ Year Lifespan"],
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/4pmdshnp_image.png",
        ),
        service(
            "flashings",
            "Gutter & Fascia",
            "Custom fabricated gutters, fascias, and guttering systems. Precision engineering for perfect water management and aesthetic finish.",
            &["Custom Fabrication", "Box Gutters", "Fascia Boards", "Downpipes"],
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/v3mzm8hp_image.png",
        ),
        service(
            "skylights",
            "Skylights Velux",
            "Professional Velux skylight installation to bring natural light into your home. We supply and install leading brands with weatherproof guarantees.",
            &["Velux Skylights", "Custom Sizes", "Weatherproof Seal", "Natural Light"],
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/qs0saba9_image.png",
        ),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Residential Metal Roofing",
            "Residential",
            "Premium Colorbond roofing with skylights installation",
            "https://customer-assets.emergentagent.com/job_5a784e05-5e78-4067-aa14-a5ab6084b2ac/artifacts/gp6z1kef_roof.jpeg",
        ),
        project(
            "2",
            "Complex Roof Design",
            "Residential",
            "Multi-angle metal roofing with precision flashings",
            "https://customer-assets.emergentagent.com/job_5a784e05-5e78-4067-aa14-a5ab6084b2ac/artifacts/ov39vvwi_roof.jpeg",
        ),
        project(
            "3",
            "New Construction Roofing",
            "New Build",
            "Complete roofing solution for new residential build",
            "https://customer-assets.emergentagent.com/job_5a784e05-5e78-4067-aa14-a5ab6084b2ac/artifacts/pf0u4br6_roof.jpeg",
        ),
        project(
            "4",
            "Estate Development",
            "Commercial",
            "Large scale roofing for housing development",
            "https://customer-assets.emergentagent.com/job_5a784e05-5e78-4067-aa14-a5ab6084b2ac/artifacts/tdv7gci1_roof.jpeg",
        ),
        project(
            "5",
            "Premium Metal Roofing",
            "Residential",
            "High-quality metal roofing with professional finish",
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/6ua3knbe_roof.jpeg",
        ),
        project(
            "6",
            "Modern Roof Installation",
            "New Build",
            "Contemporary roofing design for new home construction",
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/virlv45z_roof.jpeg",
        ),
        project(
            "7",
            "Suburban Residential Roofing",
            "Residential",
            "Quality roofing installation in residential estate",
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/iqdm2y7x_roof.jpeg",
        ),
        project(
            "8",
            "Ridge Cap Installation",
            "Residential",
            "Precision ridge capping and flashing work",
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/9iuslaag_roof.jpeg",
        ),
        project(
            "9",
            "New Development Roofing",
            "New Build",
            "Roofing for new housing development project",
            "https://customer-assets.emergentagent.com/job_aussie-roof-pros/artifacts/wu8yn02h_roof.jpeg",
        ),
    ]
}

fn default_contact_info() -> ContactInfo {
    ContactInfo {
        company_name: "22G Roofing Pty Ltd".to_string(),
        address: "12 Bedford Road".to_string(),
        suburb: "Blacktown".to_string(),
        state: "NSW".to_string(),
        postcode: "2148".to_string(),
        country: "Australia".to_string(),
        contacts: vec![
            ContactPerson {
                name: "Pavandeep Singh".to_string(),
                phone: "+61 448 046 461".to_string(),
                role: "Director".to_string(),
            },
            ContactPerson {
                name: "Bhupendra Singh".to_string(),
                phone: "+61 410 632 540".to_string(),
                role: "Director".to_string(),
            },
        ],
        email: "sales22groofing@outlook.com".to_string(),
    }
}
