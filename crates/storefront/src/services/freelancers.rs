//! Freelancer directory.
//!
//! Profiles are never stored. They come from a fixed sample list, from the
//! visitor's own seller onboarding, or, as a last resort, from a gig whose
//! seller is otherwise unknown.

use workforge_core::{FreelancerProfile, Role, Storage, UserId};

use crate::store::{AccountRepository, GigRepository, OnboardingRepository};

/// The featured freelancers shown to every visitor.
#[must_use]
pub fn sample_freelancers() -> Vec<FreelancerProfile> {
    vec![
        sample(
            "f1",
            "Aarav Patil",
            "Full-stack Developer",
            &["English", "Hindi"],
            &["React", "Node", "Postgres"],
            4.9,
        ),
        sample(
            "f2",
            "Priya Sharma",
            "UI/UX Designer",
            &["English"],
            &["Figma", "Design Systems"],
            4.8,
        ),
        sample(
            "f3",
            "Rahul Verma",
            "Digital Marketer",
            &["English"],
            &["SEO", "Content"],
            4.7,
        ),
    ]
}

fn sample(
    id: &str,
    name: &str,
    occupation: &str,
    languages: &[&str],
    skills: &[&str],
    rating: f64,
) -> FreelancerProfile {
    FreelancerProfile {
        id: UserId::new(id),
        name: name.to_string(),
        country: Some("India".to_string()),
        occupations: vec![occupation.to_string()],
        languages: languages.iter().map(ToString::to_string).collect(),
        skills: skills.iter().map(ToString::to_string).collect(),
        bio: None,
        rating,
        website: None,
    }
}

/// The visitor as a freelancer, if they completed seller onboarding.
///
/// A seller who logged in but abandoned onboarding has no payload and gets
/// `None`.
pub fn current_seller_as_freelancer<S: Storage + ?Sized>(
    storage: &mut S,
) -> Option<FreelancerProfile> {
    let onboarding = OnboardingRepository::new(storage).get()?;
    if onboarding.role != Some(Role::Seller) {
        return None;
    }

    let id = AccountRepository::new(storage).ensure_user_id();
    let profile = onboarding.profile;
    let name = if profile.full_name.is_empty() {
        "You".to_string()
    } else {
        profile.full_name
    };

    Some(FreelancerProfile {
        id,
        name,
        country: profile.country,
        occupations: profile.occupations,
        languages: profile.languages,
        skills: profile.skills,
        bio: None,
        rating: 5.0,
        website: None,
    })
}

/// Sample freelancers, with the visitor first when they are a seller not
/// already listed.
pub fn freelancers<S: Storage + ?Sized>(storage: &mut S) -> Vec<FreelancerProfile> {
    let mut all = sample_freelancers();
    if let Some(me) = current_seller_as_freelancer(storage) {
        if !all.iter().any(|f| f.id == me.id) {
            all.insert(0, me);
        }
    }
    all
}

/// Look up a freelancer by ID.
///
/// Falls back to a minimal profile built from the first gig sold by `id`
/// (occupation = gig category, skills = gig skills, rating 5), so every
/// seller with a listing has a profile page.
pub fn freelancer_by_id<S: Storage + ?Sized>(
    storage: &mut S,
    id: &UserId,
) -> Option<FreelancerProfile> {
    if let Some(found) = freelancers(storage).into_iter().find(|f| &f.id == id) {
        return Some(found);
    }

    let gig = GigRepository::new(storage)
        .all()
        .into_iter()
        .find(|g| &g.seller_id == id)?;

    Some(FreelancerProfile {
        id: id.clone(),
        name: "Freelancer".to_string(),
        country: None,
        occupations: vec![gig.category],
        languages: Vec::new(),
        skills: gig.skills,
        bio: None,
        rating: 5.0,
        website: None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use workforge_core::{
        Gig, GigId, MemoryStorage, OnboardingPayload, OnboardingProfile, Packages,
    };

    fn seller_onboarding(full_name: &str) -> OnboardingPayload {
        OnboardingPayload {
            role: Some(Role::Seller),
            profile: OnboardingProfile {
                full_name: full_name.to_string(),
                country: Some("Japan".to_string()),
                occupations: vec!["Writer".to_string()],
                languages: vec!["Japanese".to_string()],
                skills: vec!["Technical Writing".to_string()],
                ..OnboardingProfile::default()
            },
        }
    }

    fn gig_by(seller: &str, skills: &[&str]) -> Gig {
        Gig {
            id: GigId::new("g_1"),
            seller_id: UserId::new(seller),
            title: "Docs".to_string(),
            category: "Writing".to_string(),
            subcategory: "Technical Writing".to_string(),
            description_html: String::new(),
            skills: skills.iter().map(ToString::to_string).collect(),
            packages: Packages::default(),
            requirements: Vec::new(),
            thumbnail: None,
            gallery: Vec::new(),
            rating: None,
        }
    }

    #[test]
    fn test_freelancers_without_onboarding_is_sample_list() {
        let mut storage = MemoryStorage::new();
        let ids: Vec<_> = freelancers(&mut storage)
            .into_iter()
            .map(|f| f.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_onboarded_seller_is_prepended() {
        let mut storage = MemoryStorage::new();
        OnboardingRepository::new(&mut storage)
            .save(&seller_onboarding("Kenji Sato"))
            .unwrap();

        let all = freelancers(&mut storage);
        assert_eq!(all.len(), 4);
        let me = all.first().unwrap();
        assert_eq!(me.name, "Kenji Sato");
        assert_eq!(me.rating, 5.0);
        assert_eq!(me.id, AccountRepository::new(&mut storage).ensure_user_id());
    }

    #[test]
    fn test_self_without_name_is_you() {
        let mut storage = MemoryStorage::new();
        OnboardingRepository::new(&mut storage)
            .save(&seller_onboarding(""))
            .unwrap();
        assert_eq!(current_seller_as_freelancer(&mut storage).unwrap().name, "You");
    }

    #[test]
    fn test_self_not_duplicated_when_id_already_listed() {
        let mut storage = MemoryStorage::new();
        storage.set(crate::store::keys::USER_ID, "f2".to_string());
        OnboardingRepository::new(&mut storage)
            .save(&seller_onboarding("Priya"))
            .unwrap();

        let all = freelancers(&mut storage);
        assert_eq!(all.len(), 3);
        assert_eq!(all.first().unwrap().id.as_str(), "f1");
    }

    #[test]
    fn test_buyer_onboarding_is_not_a_freelancer() {
        let mut storage = MemoryStorage::new();
        let mut payload = seller_onboarding("Buyer");
        payload.role = Some(Role::Buyer);
        OnboardingRepository::new(&mut storage).save(&payload).unwrap();
        assert!(current_seller_as_freelancer(&mut storage).is_none());
    }

    #[test]
    fn test_abandoned_onboarding_has_no_self_profile() {
        let mut storage = MemoryStorage::new();
        AccountRepository::new(&mut storage)
            .start_session(Role::Seller)
            .unwrap();

        let session = AccountRepository::new(&mut storage).session();
        assert!(session.logged_in);
        assert_eq!(session.role, Some(Role::Seller));
        assert!(OnboardingRepository::new(&mut storage).get().is_none());
        assert!(current_seller_as_freelancer(&mut storage).is_none());
    }

    #[test]
    fn test_freelancer_by_id_finds_sample() {
        let mut storage = MemoryStorage::new();
        let found = freelancer_by_id(&mut storage, &UserId::new("f3")).unwrap();
        assert_eq!(found.name, "Rahul Verma");
    }

    #[test]
    fn test_freelancer_by_id_falls_back_to_gig_seller() {
        let mut storage = MemoryStorage::new();
        GigRepository::new(&mut storage)
            .upsert(gig_by("u_other_seller", &["Markdown", "API docs"]))
            .unwrap();

        let stub = freelancer_by_id(&mut storage, &UserId::new("u_other_seller")).unwrap();
        assert_eq!(stub.name, "Freelancer");
        assert_eq!(stub.skills, vec!["Markdown", "API docs"]);
        assert_eq!(stub.occupations, vec!["Writing"]);
        assert!(stub.languages.is_empty());
        assert_eq!(stub.rating, 5.0);
    }

    #[test]
    fn test_freelancer_by_id_unknown_is_none() {
        let mut storage = MemoryStorage::new();
        assert!(freelancer_by_id(&mut storage, &UserId::new("nobody")).is_none());
    }
}
