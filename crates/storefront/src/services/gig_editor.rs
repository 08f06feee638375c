//! Gig editor state.
//!
//! [`GigDraft`] holds everything the editor form shows. A draft starts blank
//! or loaded from a stored gig, takes the submitted form on top, and turns
//! into a [`Gig`] on save.

use rust_decimal::Decimal;
use workforge_core::{Extra, Gig, GigId, GigMedia, PackageName, Packages, UserId};

use super::uploads::FormFields;

/// Description placeholder for a new gig.
pub const DEFAULT_DESCRIPTION: &str = "<p>Describe your gig...</p>";

/// Subcategory value that enables the free-text field.
pub const OTHER: &str = "Other";

/// A top-level gig category and its subcategories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Design",
        subcategories: &["Logo Design", "Brand Style Guides", "Web & App Design", OTHER],
    },
    Category {
        name: "Development",
        subcategories: &["Frontend", "Backend", "Full-stack", OTHER],
    },
    Category {
        name: "Marketing",
        subcategories: &["SEO", "Social Media", "Email Marketing", OTHER],
    },
    Category {
        name: "Writing",
        subcategories: &["Copywriting", "Blog Posts", "Technical Writing", OTHER],
    },
];

/// Subcategories of `category`; empty for an unknown category.
#[must_use]
pub fn subcategories(category: &str) -> &'static [&'static str] {
    CATEGORIES
        .iter()
        .find(|c| c.name == category)
        .map_or(&[], |c| c.subcategories)
}

/// Transient editor form state.
#[derive(Debug, Clone, PartialEq)]
pub struct GigDraft {
    /// Set while editing an existing gig.
    pub editing_id: Option<GigId>,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    /// Free text used when `subcategory` is "Other".
    pub other_subcategory: String,
    pub description_html: String,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
    pub thumbnail: Option<String>,
    pub gallery: Vec<GigMedia>,
    pub packages: Packages,
    /// Kept from the stored gig; the editor never changes it.
    pub rating: Option<f64>,
}

impl Default for GigDraft {
    fn default() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            category: "Design".to_string(),
            subcategory: "Logo Design".to_string(),
            other_subcategory: String::new(),
            description_html: DEFAULT_DESCRIPTION.to_string(),
            skills: Vec::new(),
            requirements: Vec::new(),
            thumbnail: None,
            gallery: Vec::new(),
            packages: Packages::default(),
            rating: None,
        }
    }
}

impl GigDraft {
    /// Load a stored gig for editing.
    ///
    /// A custom subcategory (one not in the category's list) is shown as
    /// "Other" with the custom text filled in.
    #[must_use]
    pub fn from_gig(gig: &Gig) -> Self {
        let known = subcategories(&gig.category).contains(&gig.subcategory.as_str());
        let (subcategory, other_subcategory) = if known {
            (gig.subcategory.clone(), String::new())
        } else {
            (OTHER.to_string(), gig.subcategory.clone())
        };

        Self {
            editing_id: Some(gig.id.clone()),
            title: gig.title.clone(),
            category: gig.category.clone(),
            subcategory,
            other_subcategory,
            description_html: gig.description_html.clone(),
            skills: gig.skills.clone(),
            requirements: gig.requirements.clone(),
            thumbnail: gig.thumbnail.clone(),
            gallery: gig.gallery.clone(),
            packages: gig.packages.clone(),
            rating: gig.rating,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    #[must_use]
    pub fn subcategory_is_other(&self) -> bool {
        self.subcategory == OTHER
    }

    /// Subcategory options for the selected category.
    #[must_use]
    pub fn subcategory_options(&self) -> &'static [&'static str] {
        subcategories(&self.category)
    }

    /// Enable or disable an extra on one tier.
    pub fn set_extra(&mut self, tier: PackageName, extra: Extra, enabled: bool, price: Option<Decimal>) {
        self.packages.get_mut(tier).set_extra(extra, enabled, price);
    }

    /// "Other" with non-empty free text resolves to the trimmed text.
    #[must_use]
    pub fn resolved_subcategory(&self) -> String {
        let other = self.other_subcategory.trim();
        if self.subcategory_is_other() && !other.is_empty() {
            other.to_string()
        } else {
            self.subcategory.clone()
        }
    }

    #[must_use]
    pub fn is_missing_title(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Apply a submitted editor form.
    ///
    /// Uploaded gallery media is appended to the current gallery; the
    /// thumbnail is only replaced when a new one was uploaded. Unparsable
    /// numbers keep the current value.
    pub fn apply_form(&mut self, fields: &FormFields) {
        self.title = fields.text("title").to_string();
        if let Some(category) = non_empty(fields.text("category")) {
            self.category = category.to_string();
        }
        if let Some(subcategory) = non_empty(fields.text("subcategory")) {
            self.subcategory = subcategory.to_string();
        }
        // A subcategory from another category resets to the first option.
        let options = self.subcategory_options();
        if !options.contains(&self.subcategory.as_str()) {
            self.subcategory = options.first().map_or(OTHER, |s| *s).to_string();
        }
        self.other_subcategory = if self.subcategory_is_other() {
            fields.text("other_subcategory").to_string()
        } else {
            String::new()
        };
        self.description_html = fields.text("description_html").to_string();
        self.skills = split_list(fields.text("skills"), ',');
        self.requirements = split_list(fields.text("requirements"), '\n');

        for name in PackageName::ALL {
            self.apply_tier(name, fields);
        }

        if let Some(thumbnail) = fields.file("thumbnail") {
            self.thumbnail = Some(thumbnail.to_data_url());
        }
        self.gallery
            .extend(fields.files("gallery").map(super::uploads::UploadedFile::media));
    }

    fn apply_tier(&mut self, name: PackageName, fields: &FormFields) {
        let prefix = name.field_prefix();
        let tier = self.packages.get_mut(name);

        if let Some(price) = parse_decimal(fields.text(&format!("{prefix}_price"))) {
            tier.price = price;
        }
        if let Ok(days) = fields.text(&format!("{prefix}_delivery_days")).trim().parse() {
            tier.delivery_days = days;
        }
        if let Ok(revisions) = fields.text(&format!("{prefix}_revisions")).trim().parse() {
            tier.revisions = revisions;
        }

        for extra in Extra::ALL {
            let field = format!("{prefix}_extra_{}", extra.field_suffix());
            let enabled = fields.is_checked(&field);
            let price = parse_decimal(fields.text(&format!("{field}_price")));
            tier.set_extra(extra, enabled, price);
        }
    }

    /// Build the gig to store.
    ///
    /// Keeps the editing ID when there is one and uses `new_id` otherwise.
    #[must_use]
    pub fn into_gig(self, seller_id: UserId, new_id: GigId) -> Gig {
        let subcategory = self.resolved_subcategory();
        Gig {
            id: self.editing_id.unwrap_or(new_id),
            seller_id,
            title: self.title.trim().to_string(),
            category: self.category,
            subcategory,
            description_html: self.description_html,
            skills: self.skills,
            packages: self.packages,
            requirements: self.requirements,
            thumbnail: self.thumbnail,
            gallery: self.gallery,
            rating: self.rating,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    value.trim().parse().ok()
}
