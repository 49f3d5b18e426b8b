//! Per-page view models, derived from the aggregate payload. Builders are
//! pure so every page can be exercised against a fixture.

use serde::Serialize;

use crate::assets::{extract_video_id, resolve_asset};
use crate::menu::{group_services, MenuGroup};
use crate::types::{ContactInfo, HomeData, ServiceCategory};

/// How many service cards the home page shows before "show more".
pub const FEATURED_SERVICES: usize = 6;

/// Testimonials missing a rating (or carrying a zero) display five stars.
const DEFAULT_RATING: u8 = 5;

#[derive(Serialize, Clone, Debug)]
pub struct ServiceCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct Showcase {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TestimonialCard {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct BrandLogo {
    pub id: u32,
    pub name: String,
    pub image: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct Highlight {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ValueCard {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct HomePage {
    pub services: Vec<ServiceCard>,
    pub more_services: bool,
    pub menu: Vec<MenuGroup>,
    pub brands: Vec<BrandLogo>,
    pub showcases: Vec<Showcase>,
    pub testimonials: Vec<TestimonialCard>,
    pub why_choose_us: Vec<Highlight>,
    pub core_values: Vec<ValueCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Serialize, Clone, Debug)]
pub struct AboutPage {
    pub image: String,
    pub content: String,
    pub vision: String,
    pub mission: String,
    pub values: String,
    pub excellence: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ServicePage {
    pub id: u32,
    pub heading: String,
    pub sub_heading: String,
    pub image: String,
    pub overview: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
}

/// The contact page reuses the about hero image.
#[derive(Serialize, Clone, Debug)]
pub struct ContactPage {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TermsSection {
    pub heading: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TermsPage {
    pub title: String,
    pub tagline: String,
    pub sections: Vec<TermsSection>,
}

pub fn home_page(data: &HomeData, storage_base: &str) -> HomePage {
    let services: Vec<ServiceCard> = data
        .services
        .iter()
        .take(FEATURED_SERVICES)
        .map(|service| ServiceCard {
            id: service.id,
            title: service.heading.clone(),
            description: service.sub_heading.clone(),
            image: resolve_asset(storage_base, &service.image),
        })
        .collect();

    HomePage {
        more_services: data.services.len() > FEATURED_SERVICES,
        menu: group_services(&data.services),
        services,
        brands: data
            .brands
            .iter()
            .map(|brand| BrandLogo {
                id: brand.id,
                name: brand.name.clone(),
                image: resolve_asset(storage_base, &brand.image),
            })
            .collect(),
        showcases: data
            .projects
            .iter()
            .map(|project| Showcase {
                id: project.id,
                title: project.heading.clone(),
                description: project.sub_heading.clone(),
                thumbnail: resolve_asset(storage_base, &project.thumbnail),
                video_id: extract_video_id(&project.video_url).map(str::to_string),
            })
            .collect(),
        testimonials: data
            .testimonials
            .iter()
            .map(|testimonial| TestimonialCard {
                id: testimonial.id,
                name: testimonial.name.clone(),
                role: testimonial.designation.clone(),
                image: resolve_asset(storage_base, &testimonial.image),
                rating: testimonial
                    .rating
                    .filter(|rating| *rating > 0)
                    .unwrap_or(DEFAULT_RATING),
                text: testimonial.comment.clone(),
            })
            .collect(),
        why_choose_us: highlights(data, storage_base),
        core_values: data
            .our_core_values
            .iter()
            .map(|value| ValueCard {
                id: value.id,
                title: value.heading.clone(),
                description: value.sub_heading.clone(),
            })
            .collect(),
        contact_info: data.contact_info.clone(),
    }
}

pub fn about_page(data: &HomeData, storage_base: &str) -> AboutPage {
    AboutPage {
        image: resolve_asset(storage_base, &data.about.image),
        content: data.about.content.clone(),
        vision: data.about.vision.clone(),
        mission: data.about.mission.clone(),
        values: data.about.values.clone(),
        excellence: data.about.excellence.clone(),
        highlights: highlights(data, storage_base),
    }
}

/// Looks the service up by id; `None` maps to the "Service Not Found"
/// page.
pub fn service_page(data: &HomeData, id: u32, storage_base: &str) -> Option<ServicePage> {
    data.services
        .iter()
        .find(|service| service.id == id)
        .map(|service| ServicePage {
            id: service.id,
            heading: service.heading.clone(),
            sub_heading: service.sub_heading.clone(),
            image: resolve_asset(storage_base, &service.image),
            overview: service.overview.clone(),
            features: service.features.clone(),
            category: service.category.clone(),
        })
}

pub fn contact_page(data: &HomeData, storage_base: &str) -> ContactPage {
    ContactPage {
        image: resolve_asset(storage_base, &data.about.image),
        contact_info: data.contact_info.clone(),
    }
}

fn highlights(data: &HomeData, storage_base: &str) -> Vec<Highlight> {
    data.why_choose_us
        .iter()
        .map(|item| Highlight {
            id: item.id,
            title: item.heading.clone(),
            description: item.sub_heading.clone(),
            image: if item.image.is_empty() {
                None
            } else {
                Some(resolve_asset(storage_base, &item.image))
            },
        })
        .collect()
}

/// Terms content lives in this repository, not in the content API.
pub fn terms_page() -> TermsPage {
    let section = |heading: &str, body: &str| TermsSection {
        heading: heading.to_string(),
        body: body.to_string(),
        items: Vec::new(),
    };
    let listed = |heading: &str, body: &str, items: &[&str]| TermsSection {
        heading: heading.to_string(),
        body: body.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    };

    TermsPage {
        title: "Terms & Conditions".to_string(),
        tagline: "Building trust through transparency and integrity".to_string(),
        sections: vec![
            section(
                "1. Agreement to Terms",
                "By accessing and using Sunnex Technical Works LLC's services, you accept and \
                 agree to be bound by the terms and provision of this agreement. If you do not \
                 agree to abide by the above, please do not use this service.",
            ),
            listed(
                "2. Services",
                "Sunnex Technical Works LLC provides comprehensive construction and contracting \
                 services including but not limited to:",
                &[
                    "Building contracting and construction management",
                    "Industrial projects and warehouse construction",
                    "Residential and commercial villa construction",
                    "Restaurant design and build services",
                    "Interior design and build services",
                ],
            ),
            listed(
                "3. Project Terms",
                "All construction projects are subject to the following terms:",
                &[
                    "Detailed project proposals will be provided before commencement",
                    "Project timelines are estimates and subject to change based on unforeseen \
                     circumstances",
                    "Payment terms will be specified in individual project contracts",
                    "Changes to approved plans may result in additional costs and time extensions",
                    "All work will comply with local building codes and regulations",
                ],
            ),
            section(
                "4. Quality Assurance",
                "We are committed to delivering high-quality workmanship on all projects. Our \
                 quality assurance includes regular inspections, use of premium materials, and \
                 adherence to industry best practices. Any defects or issues arising from our \
                 workmanship will be addressed promptly according to the warranty terms specified \
                 in individual project contracts.",
            ),
            section(
                "5. Safety Standards",
                "Safety is our top priority. All projects will be conducted in accordance with \
                 strict safety protocols, industry-leading practices, and current building codes. \
                 We maintain comprehensive insurance coverage and ensure all workers are properly \
                 trained and equipped.",
            ),
            section(
                "6. Liability",
                "Sunnex Technical Works LLC maintains appropriate insurance coverage for all \
                 projects. Our liability is limited to the terms specified in individual project \
                 contracts. We are not responsible for delays or issues caused by circumstances \
                 beyond our control, including but not limited to extreme weather, material \
                 supply issues, or regulatory changes.",
            ),
            section(
                "7. Intellectual Property",
                "All designs, plans, and specifications created by Sunnex Technical Works LLC \
                 remain our intellectual property unless otherwise specified in writing. Clients \
                 receive a license to use these materials for their specific project.",
            ),
            section(
                "8. Dispute Resolution",
                "In the event of any dispute arising from our services, both parties agree to \
                 first attempt resolution through good faith negotiation. If negotiation fails, \
                 disputes will be resolved through arbitration in accordance with UAE law.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AboutData, Project, Service, ServiceCategory, Testimonial};

    const STORAGE: &str = "http://cdn.example.com/storage";

    fn about() -> AboutData {
        AboutData {
            id: 1,
            image: "/about/hero.jpg".to_string(),
            content: "content".to_string(),
            vision: "vision".to_string(),
            mission: "mission".to_string(),
            values: "values".to_string(),
            excellence: "excellence".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn service(id: u32) -> Service {
        Service {
            id,
            category_id: Some(1),
            heading: format!("Service {id}"),
            sub_heading: format!("Sub {id}"),
            image: format!("/services/{id}.jpg"),
            overview: format!("Overview {id}"),
            features: vec![format!("Feature {id}a"), format!("Feature {id}b")],
            status: "active".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            category: Some(ServiceCategory {
                id: 1,
                name: "Construction".to_string(),
            }),
        }
    }

    fn home_data(service_count: u32) -> HomeData {
        HomeData {
            projects: Vec::new(),
            about: about(),
            brands: Vec::new(),
            services: (1..=service_count).map(service).collect(),
            testimonials: Vec::new(),
            why_choose_us: Vec::new(),
            our_core_values: Vec::new(),
            contact_info: None,
        }
    }

    #[test]
    fn home_page_shows_at_most_six_service_cards() {
        let page = home_page(&home_data(8), STORAGE);
        assert_eq!(page.services.len(), FEATURED_SERVICES);
        assert!(page.more_services);

        let page = home_page(&home_data(4), STORAGE);
        assert_eq!(page.services.len(), 4);
        assert!(!page.more_services);
    }

    #[test]
    fn home_page_resolves_card_images_against_storage() {
        let page = home_page(&home_data(1), STORAGE);
        assert_eq!(
            page.services[0].image,
            "http://cdn.example.com/storage/services/1.jpg"
        );
    }

    #[test]
    fn showcases_carry_extracted_video_ids() {
        let mut data = home_data(0);
        data.projects = vec![
            Project {
                id: 1,
                heading: "Villa build".to_string(),
                sub_heading: "Start to finish".to_string(),
                thumbnail: "/thumbs/1.jpg".to_string(),
                video_url: "https://www.youtube.com/watch?v=abcdefghijk".to_string(),
                status: true,
                created_at: String::new(),
                updated_at: String::new(),
            },
            Project {
                id: 2,
                heading: "No video".to_string(),
                sub_heading: String::new(),
                thumbnail: "/thumbs/2.jpg".to_string(),
                video_url: "not a url".to_string(),
                status: true,
                created_at: String::new(),
                updated_at: String::new(),
            },
        ];
        let page = home_page(&data, STORAGE);
        assert_eq!(page.showcases[0].video_id.as_deref(), Some("abcdefghijk"));
        assert_eq!(page.showcases[1].video_id, None);
    }

    #[test]
    fn missing_or_zero_ratings_default_to_five() {
        let mut data = home_data(0);
        let testimonial = |id, rating| Testimonial {
            id,
            name: "A".to_string(),
            designation: "CEO".to_string(),
            image: "https://images.example.com/a.jpg".to_string(),
            rating,
            comment: "Great".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        data.testimonials = vec![
            testimonial(1, None),
            testimonial(2, Some(0)),
            testimonial(3, Some(4)),
        ];
        let page = home_page(&data, STORAGE);
        assert_eq!(page.testimonials[0].rating, 5);
        assert_eq!(page.testimonials[1].rating, 5);
        assert_eq!(page.testimonials[2].rating, 4);
    }

    #[test]
    fn service_page_finds_by_id_verbatim() {
        let data = home_data(3);
        let page = service_page(&data, 2, STORAGE).unwrap();
        assert_eq!(page.heading, "Service 2");
        assert_eq!(page.features, vec!["Feature 2a", "Feature 2b"]);
        assert_eq!(
            page.image,
            "http://cdn.example.com/storage/services/2.jpg"
        );
    }

    #[test]
    fn unknown_service_id_yields_none() {
        assert!(service_page(&home_data(3), 99, STORAGE).is_none());
    }

    #[test]
    fn contact_page_reuses_the_about_image() {
        let page = contact_page(&home_data(0), STORAGE);
        assert_eq!(page.image, "http://cdn.example.com/storage/about/hero.jpg");
    }

    #[test]
    fn terms_page_is_static_and_numbered() {
        let page = terms_page();
        assert_eq!(page.sections.len(), 8);
        assert!(page.sections[1].items.len() == 5);
        assert!(page.sections[0].heading.starts_with("1."));
    }
}
