use serde::{Deserialize, Serialize};

/// Envelope around the aggregate home-data document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HomeDataResponse {
    pub status: String,
    pub data: HomeData,
}

/// The aggregate payload served by the content API. Several sections were
/// added to the API after launch, so everything except `about` tolerates
/// being absent.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HomeData {
    #[serde(default)]
    pub projects: Vec<Project>,
    pub about: AboutData,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub why_choose_us: Vec<WhyChooseUs>,
    #[serde(default)]
    pub our_core_values: Vec<CoreValue>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Project {
    pub id: u32,
    pub heading: String,
    pub sub_heading: String,
    pub thumbnail: String,
    pub video_url: String,
    pub status: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AboutData {
    pub id: u32,
    pub image: String,
    pub content: String,
    pub vision: String,
    pub mission: String,
    pub values: String,
    pub excellence: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Brand {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceCategory {
    pub id: u32,
    pub name: String,
}

/// A single service record. `category` is not guaranteed by the API even
/// though every well-formed record carries one.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Service {
    pub id: u32,
    #[serde(default)]
    pub category_id: Option<u32>,
    pub heading: String,
    pub sub_heading: String,
    pub image: String,
    pub overview: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
}

/// The live API spells these fields `designation`/`comment`; an earlier
/// revision used `role`/`text`. Accept both.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(alias = "role")]
    pub designation: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(alias = "text")]
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WhyChooseUs {
    pub id: u32,
    pub heading: String,
    pub sub_heading: String,
    pub image: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CoreValue {
    pub id: u32,
    pub heading: String,
    pub sub_heading: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ContactInfo {
    pub id: u32,
    pub address: String,
    pub mobile_number: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Contact-form submission. Every field is optional; absent fields must
/// not appear in the forwarded form body at all.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactForm {
    /// Empty strings count as "not filled in" and are dropped before the
    /// form is forwarded upstream.
    pub fn pruned(self) -> Self {
        let keep = |field: Option<String>| field.filter(|value| !value.is_empty());
        ContactForm {
            name: keep(self.name),
            email: keep(self.email),
            phone: keep(self.phone),
            inquiry_type: keep(self.inquiry_type),
            message: keep(self.message),
        }
    }
}

/// Envelope the content API returns for an accepted query.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueryResponse {
    pub status: String,
    pub message: String,
    pub data: QueryReceipt,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueryReceipt {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_serializes_to_empty_body() {
        let body = serde_urlencoded::to_string(ContactForm::default()).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn inquiry_type_serializes_as_type() {
        let form = ContactForm {
            inquiry_type: Some("quote".to_string()),
            ..ContactForm::default()
        };
        let body = serde_urlencoded::to_string(&form).unwrap();
        assert_eq!(body, "type=quote");
    }

    #[test]
    fn pruning_drops_empty_strings_only() {
        let form = ContactForm {
            name: Some("Jane".to_string()),
            email: Some(String::new()),
            phone: None,
            inquiry_type: Some("service".to_string()),
            message: Some(String::new()),
        };
        let pruned = form.pruned();
        assert_eq!(pruned.name.as_deref(), Some("Jane"));
        assert_eq!(pruned.email, None);
        assert_eq!(pruned.inquiry_type.as_deref(), Some("service"));
        assert_eq!(pruned.message, None);
        let body = serde_urlencoded::to_string(&pruned).unwrap();
        assert_eq!(body, "name=Jane&type=service");
    }

    #[test]
    fn testimonial_accepts_both_field_spellings() {
        let current = r#"{"id":1,"name":"A","designation":"CEO","image":"/a.jpg",
            "rating":4,"comment":"Great work","created_at":"","updated_at":""}"#;
        let legacy = r#"{"id":1,"name":"A","role":"CEO","image":"/a.jpg",
            "text":"Great work","created_at":"","updated_at":""}"#;
        let a: Testimonial = serde_json::from_str(current).unwrap();
        let b: Testimonial = serde_json::from_str(legacy).unwrap();
        assert_eq!(a.designation, b.designation);
        assert_eq!(a.comment, b.comment);
        assert_eq!(b.rating, None);
    }
}
