//! Gigs: a seller's listed service with three fixed pricing tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{GigId, UserId};

/// Name of a pricing tier. Every gig carries exactly one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageName {
    Basic,
    Standard,
    Premium,
}

impl PackageName {
    /// Tiers in display order.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Standard, Self::Premium];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }

    /// Prefix used for this tier's form fields (`basic_price`, ...).
    #[must_use]
    pub const fn field_prefix(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

/// Optional paid add-on attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    Mockup,
    SourceFile,
    SocialKit,
    ExtraFast,
}

impl Extra {
    pub const ALL: [Self; 4] = [
        Self::Mockup,
        Self::SourceFile,
        Self::SocialKit,
        Self::ExtraFast,
    ];

    /// Key in the stored `extras` object.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Mockup => "mockup",
            Self::SourceFile => "sourceFile",
            Self::SocialKit => "socialKit",
            Self::ExtraFast => "extraFast",
        }
    }

    /// Suffix used in form field names (`basic_extra_source_file`).
    #[must_use]
    pub const fn field_suffix(&self) -> &'static str {
        match self {
            Self::Mockup => "mockup",
            Self::SourceFile => "source_file",
            Self::SocialKit => "social_kit",
            Self::ExtraFast => "extra_fast",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mockup => "3D Mockup",
            Self::SourceFile => "Source File",
            Self::SocialKit => "Social Media Kit",
            Self::ExtraFast => "Extra Fast",
        }
    }
}

/// Enabled extras and their prices.
///
/// A key is present in the stored object only while the extra is enabled;
/// there is no separate flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageExtras {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    mockup: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    source_file: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    social_kit: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    extra_fast: Option<Decimal>,
}

impl PackageExtras {
    const fn slot(&self, extra: Extra) -> &Option<Decimal> {
        match extra {
            Extra::Mockup => &self.mockup,
            Extra::SourceFile => &self.source_file,
            Extra::SocialKit => &self.social_kit,
            Extra::ExtraFast => &self.extra_fast,
        }
    }

    fn slot_mut(&mut self, extra: Extra) -> &mut Option<Decimal> {
        match extra {
            Extra::Mockup => &mut self.mockup,
            Extra::SourceFile => &mut self.source_file,
            Extra::SocialKit => &mut self.social_kit,
            Extra::ExtraFast => &mut self.extra_fast,
        }
    }

    /// Price of an extra, or `None` when it is not enabled.
    #[must_use]
    pub const fn get(&self, extra: Extra) -> Option<Decimal> {
        *self.slot(extra)
    }

    #[must_use]
    pub const fn is_enabled(&self, extra: Extra) -> bool {
        self.slot(extra).is_some()
    }

    pub fn insert(&mut self, extra: Extra, price: Decimal) {
        *self.slot_mut(extra) = Some(price);
    }

    pub fn remove(&mut self, extra: Extra) {
        *self.slot_mut(extra) = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Enabled extras with their prices, in [`Extra::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Extra, Decimal)> + '_ {
        Extra::ALL
            .into_iter()
            .filter_map(|extra| self.get(extra).map(|price| (extra, price)))
    }
}

/// One pricing tier of a gig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTier {
    pub name: PackageName,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub delivery_days: u32,
    pub revisions: u32,
    #[serde(default)]
    pub extras: PackageExtras,
}

impl PackageTier {
    /// A blank tier: free, 7-day delivery, one revision, no extras.
    #[must_use]
    pub fn new(name: PackageName) -> Self {
        Self {
            name,
            price: Decimal::ZERO,
            delivery_days: 7,
            revisions: 1,
            extras: PackageExtras::default(),
        }
    }

    /// Enable or disable an extra.
    ///
    /// Disabling removes the extra entirely. Enabling stores `price`, falling
    /// back to the extra's current price and then to zero; negative prices
    /// clamp to zero.
    pub fn set_extra(&mut self, extra: Extra, enabled: bool, price: Option<Decimal>) {
        if enabled {
            let price = price
                .or_else(|| self.extras.get(extra))
                .unwrap_or(Decimal::ZERO)
                .max(Decimal::ZERO);
            self.extras.insert(extra, price);
        } else {
            self.extras.remove(extra);
        }
    }
}

/// The three tiers of a gig.
///
/// Stored as a JSON array. Reading tolerates missing or reordered entries:
/// each tier is matched by name and absent tiers fall back to
/// [`PackageTier::new`], so a gig always has Basic, Standard and Premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PackageTier>", into = "Vec<PackageTier>")]
pub struct Packages {
    basic: PackageTier,
    standard: PackageTier,
    premium: PackageTier,
}

impl Packages {
    #[must_use]
    pub const fn get(&self, name: PackageName) -> &PackageTier {
        match name {
            PackageName::Basic => &self.basic,
            PackageName::Standard => &self.standard,
            PackageName::Premium => &self.premium,
        }
    }

    pub fn get_mut(&mut self, name: PackageName) -> &mut PackageTier {
        match name {
            PackageName::Basic => &mut self.basic,
            PackageName::Standard => &mut self.standard,
            PackageName::Premium => &mut self.premium,
        }
    }

    /// Tiers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageTier> {
        [&self.basic, &self.standard, &self.premium].into_iter()
    }
}

impl Default for Packages {
    fn default() -> Self {
        Self {
            basic: PackageTier::new(PackageName::Basic),
            standard: PackageTier::new(PackageName::Standard),
            premium: PackageTier::new(PackageName::Premium),
        }
    }
}

impl From<Vec<PackageTier>> for Packages {
    fn from(tiers: Vec<PackageTier>) -> Self {
        let mut packages = Self::default();
        for name in PackageName::ALL {
            if let Some(tier) = tiers.iter().find(|t| t.name == name) {
                *packages.get_mut(name) = tier.clone();
            }
        }
        packages
    }
}

impl From<Packages> for Vec<PackageTier> {
    fn from(packages: Packages) -> Self {
        vec![packages.basic, packages.standard, packages.premium]
    }
}

/// Kind of gallery media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classify an uploaded file by its content type.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video") {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// An image or video embedded as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigMedia {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
}

impl GigMedia {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaType::Video
    }
}

/// A seller's listed service offering.
///
/// Owned by exactly one seller; `seller_id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: GigId,
    pub seller_id: UserId,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub description_html: String,
    pub skills: Vec<String>,
    pub packages: Packages,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GigMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_gig() -> Gig {
        Gig {
            id: GigId::new("g_1"),
            seller_id: UserId::new("u_1"),
            title: "Logo design".to_string(),
            category: "Design".to_string(),
            subcategory: "Logo Design".to_string(),
            description_html: "<p>Clean logos</p>".to_string(),
            skills: vec!["Figma".to_string()],
            packages: Packages::default(),
            requirements: vec!["Brand name".to_string()],
            thumbnail: None,
            gallery: Vec::new(),
            rating: None,
        }
    }

    #[test]
    fn test_enabling_extra_without_price_sets_zero() {
        let mut tier = PackageTier::new(PackageName::Basic);
        tier.set_extra(Extra::Mockup, true, None);
        assert_eq!(tier.extras.get(Extra::Mockup), Some(Decimal::ZERO));
    }

    #[test]
    fn test_enabling_extra_keeps_existing_price() {
        let mut tier = PackageTier::new(PackageName::Basic);
        tier.set_extra(Extra::SocialKit, true, Some(Decimal::from(15)));
        tier.set_extra(Extra::SocialKit, true, None);
        assert_eq!(tier.extras.get(Extra::SocialKit), Some(Decimal::from(15)));
    }

    #[test]
    fn test_negative_extra_price_clamps_to_zero() {
        let mut tier = PackageTier::new(PackageName::Premium);
        tier.set_extra(Extra::ExtraFast, true, Some(Decimal::from(-5)));
        assert_eq!(tier.extras.get(Extra::ExtraFast), Some(Decimal::ZERO));
    }

    #[test]
    fn test_disabling_extra_removes_key() {
        let mut tier = PackageTier::new(PackageName::Standard);
        tier.set_extra(Extra::SourceFile, true, Some(Decimal::from(20)));
        tier.set_extra(Extra::SourceFile, false, None);

        let json = serde_json::to_value(&tier).unwrap();
        assert_eq!(json["extras"], serde_json::json!({}));
        assert!(tier.extras.is_empty());
    }

    #[test]
    fn test_gig_json_layout() {
        let mut gig = sample_gig();
        gig.packages
            .get_mut(PackageName::Basic)
            .set_extra(Extra::SourceFile, true, Some(Decimal::from(25)));

        let json = serde_json::to_value(&gig).unwrap();
        assert_eq!(json["sellerId"], "u_1");
        assert_eq!(json["descriptionHtml"], "<p>Clean logos</p>");
        assert_eq!(json["packages"].as_array().unwrap().len(), 3);
        assert_eq!(json["packages"][0]["name"], "Basic");
        assert_eq!(json["packages"][0]["deliveryDays"], 7);
        assert_eq!(json["packages"][0]["extras"]["sourceFile"], 25.0);
        assert!(json.get("thumbnail").is_none());
    }

    #[test]
    fn test_packages_always_three_tiers() {
        let json = r#"[{"name":"Premium","price":90,"deliveryDays":2,"revisions":5,"extras":{"mockup":10}}]"#;
        let packages: Packages = serde_json::from_str(json).unwrap();

        let names: Vec<_> = packages.iter().map(|t| t.name).collect();
        assert_eq!(names, PackageName::ALL);
        assert_eq!(packages.get(PackageName::Premium).price, Decimal::from(90));
        assert_eq!(
            packages.get(PackageName::Premium).extras.get(Extra::Mockup),
            Some(Decimal::from(10))
        );
        assert_eq!(packages.get(PackageName::Basic).price, Decimal::ZERO);
    }

    #[test]
    fn test_gig_reads_original_layout() {
        let json = r#"{
            "id": "g_abc_1234",
            "sellerId": "u_abc_xyz123",
            "title": "Landing page",
            "category": "Development",
            "subcategory": "Frontend",
            "descriptionHtml": "<p>Fast pages</p>",
            "skills": ["React"],
            "packages": [
                {"name":"Basic","price":50,"deliveryDays":7,"revisions":1,"extras":{}},
                {"name":"Standard","price":100,"deliveryDays":5,"revisions":2,"extras":{"extraFast":30}},
                {"name":"Premium","price":200,"deliveryDays":3,"revisions":3,"extras":{}}
            ],
            "requirements": [],
            "gallery": [{"url":"data:video/mp4;base64,AAAA","type":"video"}]
        }"#;
        let gig: Gig = serde_json::from_str(json).unwrap();
        assert_eq!(gig.packages.get(PackageName::Standard).revisions, 2);
        assert!(gig.gallery.first().unwrap().is_video());
        assert!(gig.thumbnail.is_none());
    }

    #[test]
    fn test_media_type_from_content_type() {
        assert_eq!(MediaType::from_content_type("video/mp4"), MediaType::Video);
        assert_eq!(MediaType::from_content_type("image/png"), MediaType::Image);
        assert_eq!(
            MediaType::from_content_type("application/octet-stream"),
            MediaType::Image
        );
    }
}
