use log::error;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub hero_image: String,
    pub about: About,
    pub sites: Vec<CampSite>,
    pub gallery: Vec<String>,
    pub faq: Vec<FaqEntry>,
    pub contact: ContactInfo,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
}

/// One campsite; `name` doubles as its tab identifier.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CampSite {
    pub name: String,
    pub label: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

pub fn parse(json: &str) -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(json)
}

/// The embedded site content. A broken file renders an empty page rather
/// than taking the app down.
pub fn load() -> SiteContent {
    parse(SITE_JSON).unwrap_or_else(|e| {
        error!("failed to parse site content: {}", e);
        SiteContent::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn embedded_content_parses() {
        let content = parse(SITE_JSON).expect("site.json should parse");
        assert!(!content.brand.is_empty());
        assert!(content.sites.iter().any(|s| s.name == config::DEFAULT_TAB));
        assert!(content.sites.iter().any(|s| s.name == "alibaug"));
        assert!(!content.gallery.is_empty());
    }

    #[test]
    fn faq_ids_are_unique() {
        let content = load();
        let mut ids: Vec<&str> = content.faq.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.faq.len());
    }

    #[test]
    fn optional_site_lists_default_to_empty() {
        let site: CampSite = serde_json::from_str(
            r#"{"name": "kashid", "label": "Kashid", "description": "", "image": "k.jpg"}"#,
        )
        .unwrap();
        assert!(site.highlights.is_empty());
        assert!(site.gallery.is_empty());
    }

    #[test]
    fn every_image_ships_with_the_site() {
        let content = parse(SITE_JSON).expect("site.json should parse");
        let images = std::iter::once(&content.hero_image)
            .chain(std::iter::once(&content.about.image))
            .chain(content.sites.iter().flat_map(|s| std::iter::once(&s.image).chain(&s.gallery)))
            .chain(&content.gallery);
        for src in images {
            let relative = src.trim_start_matches('/');
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
            assert!(path.is_file(), "missing image {}", src);
        }
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse("{\"brand\": 1}").is_err());
    }
}
