//! Typed views of the site's page bundles.
//!
//! Field names follow the camelCase keys used in the JSON content.

use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use crate::i18n::{ContentSource, TranslationLoader};

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const PRODUCT: &str = "product";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

// ==================== Home ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHero {
    pub beta_banner: String,
    pub title: String,
    pub description: String,
    pub start_trial: String,
    pub community: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub sub_description: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub metadata: Metadata,
    pub hero: HomeHero,
    pub features: Features,
    pub compatibility: Compatibility,
    pub testimonials: Testimonials,
}

// ==================== About ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutHero {
    pub title: String,
    pub description: String,
    pub discord_text: String,
    pub github_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub content: String,
    pub values: Vec<MissionValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub title: String,
    pub description: String,
    pub hiring: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investors {
    pub title: String,
    pub description: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPage {
    pub metadata: Metadata,
    pub hero: AboutHero,
    pub mission: Mission,
    pub team: Team,
    pub investors: Investors,
    pub testimonials: Testimonials,
}

// ==================== Product ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHero {
    pub title: String,
    pub description: String,
    pub start_trial: String,
    pub view_github: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeatureItem {
    pub title: String,
    pub description: String,
    pub sub_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeatures {
    pub track_changes: ProductFeatureItem,
    pub local_development: ProductFeatureItem,
    pub model_definitions: ProductFeatureItem,
    pub ready_to_scale: ProductFeatureItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCta {
    pub title: String,
    pub read_docs: String,
}

/// Product page content. The compatibility showcase (code tabs and demo UI
/// strings) is free-form and kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub metadata: Metadata,
    pub hero: ProductHero,
    pub features: ProductFeatures,
    pub compatibility: serde_json::Value,
    pub cta: ProductCta,
}

impl<S: ContentSource> TranslationLoader<S> {
    pub async fn home_page(&self, locale: &str) -> Result<HomePage, I18nError> {
        self.load_page(locale, HOME).await
    }

    pub async fn about_page(&self, locale: &str) -> Result<AboutPage, I18nError> {
        self.load_page(locale, ABOUT).await
    }

    pub async fn product_page(&self, locale: &str) -> Result<ProductPage, I18nError> {
        self.load_page(locale, PRODUCT).await
    }
}
